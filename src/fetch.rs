//! Fetch layer: raw page retrieval and URL construction.
//!
//! Failure modes (network errors, non-2xx statuses) surface to the caller
//! before any extraction is attempted. Retries live here, not in the core:
//! transient failures back off exponentially, permanent ones fail fast.

use log::debug;
use reqwest::{Client, StatusCode};
use tokio_retry::RetryIf;
use url::Url;

use crate::config::RETRY_MAX_ATTEMPTS;
use crate::error_handling::{get_retry_strategy, FetchError};

/// Builds the category listing URL for a category slug.
pub fn category_url(base_url: &str, slug: &str) -> Result<String, FetchError> {
    let base = parse_base(base_url)?;
    let joined = base
        .join(&format!("discover/categories/{slug}/most-funded"))
        .map_err(|source| FetchError::InvalidUrl {
            url: slug.to_string(),
            source,
        })?;
    Ok(joined.into())
}

/// Resolves a campaign URL from the listing against the site base.
pub fn campaign_url(base_url: &str, relative: &str) -> Result<String, FetchError> {
    let base = parse_base(base_url)?;
    let joined = base.join(relative).map_err(|source| FetchError::InvalidUrl {
        url: relative.to_string(),
        source,
    })?;
    Ok(joined.into())
}

fn parse_base(base_url: &str) -> Result<Url, FetchError> {
    Url::parse(base_url).map_err(|source| FetchError::InvalidUrl {
        url: base_url.to_string(),
        source,
    })
}

/// Fetches one page as text.
///
/// Transient failures (request errors, 5xx, 429) are retried with
/// exponential backoff up to `RETRY_MAX_ATTEMPTS`; other statuses fail
/// immediately.
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, FetchError> {
    RetryIf::spawn(
        get_retry_strategy().take(RETRY_MAX_ATTEMPTS),
        || async {
            debug!("GET {url}");
            let response =
                client
                    .get(url)
                    .send()
                    .await
                    .map_err(|source| FetchError::Request {
                        url: url.to_string(),
                        source,
                    })?;
            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Status {
                    url: url.to_string(),
                    status,
                });
            }
            response.text().await.map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })
        },
        is_transient,
    )
    .await
}

fn is_transient(error: &FetchError) -> bool {
    match error {
        FetchError::Request { .. } => true,
        FetchError::Status { status, .. } => {
            status.is_server_error() || *status == StatusCode::TOO_MANY_REQUESTS
        }
        FetchError::InvalidUrl { .. } => false,
    }
}
