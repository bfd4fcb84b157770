//! Field parsers: loosely formatted page text to numeric values.
//!
//! Each parser returns an explicit `Result` instead of relying on
//! optional-match exceptions; callers branch on the result kind. "Pattern
//! absent" and "pattern present but malformed" are both `ParseError` here;
//! it is the caller's job to only invoke a parser when the pattern is
//! expected (e.g. the limit parser runs only when the limit node exists).

use std::sync::LazyLock;

use regex::Regex;

use crate::error_handling::ExtractError;

// Regex patterns
const PLEDGE_PATTERN: &str = r"Pledge.*?(\d+(?:[.,]\d+)*) or more";
const LIMIT_PATTERN: &str = r"of (\d+) left\)";
const AMOUNT_PATTERN: &str = r"\d+(?:[.,]\d+)*";
const INT_PATTERN: &str = r"\d+";

static PLEDGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(PLEDGE_PATTERN).expect("Failed to compile pledge regex - this is a bug")
});

static LIMIT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(LIMIT_PATTERN).expect("Failed to compile limit regex - this is a bug")
});

static AMOUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(AMOUNT_PATTERN).expect("Failed to compile amount regex - this is a bug")
});

static INT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(INT_PATTERN).expect("Failed to compile integer regex - this is a bug")
});

/// Parses a currency amount out of free text.
///
/// Finds the first numeric substring, strips thousands separators, and
/// converts to a float. Fails when no numeric substring is present.
pub fn parse_amount(text: &str) -> Result<f64, ExtractError> {
    let matched = AMOUNT_RE.find(text).ok_or_else(|| ExtractError::ParseError {
        what: "amount",
        input: text.to_string(),
    })?;
    matched
        .as_str()
        .replace(',', "")
        .parse::<f64>()
        .map_err(|_| ExtractError::ParseError {
            what: "amount",
            input: text.to_string(),
        })
}

/// Parses the remaining-slots count from an "of N left)" phrase.
///
/// Only called when the limit node exists in the markup; a tier without the
/// node is unbounded and never reaches this parser. A node whose text lacks
/// the phrase is malformed and fails.
pub fn parse_limit(text: &str) -> Result<u32, ExtractError> {
    let caps = LIMIT_RE
        .captures(text)
        .ok_or_else(|| ExtractError::ParseError {
            what: "remaining-slots phrase",
            input: text.to_string(),
        })?;
    caps[1].parse::<u32>().map_err(|_| ExtractError::ParseError {
        what: "remaining-slots count",
        input: text.to_string(),
    })
}

/// Extracts the first integer substring from free text.
///
/// The contract is the first unbroken digit run: "1,234 backers" yields 1,
/// not 1234 (thousands separators end the run).
pub fn parse_embedded_int(text: &str) -> Result<u32, ExtractError> {
    let matched = INT_RE.find(text).ok_or_else(|| ExtractError::ParseError {
        what: "embedded integer",
        input: text.to_string(),
    })?;
    matched
        .as_str()
        .parse::<u32>()
        .map_err(|_| ExtractError::ParseError {
            what: "embedded integer",
            input: text.to_string(),
        })
}

/// Extracts the pledge bracket from a reward tier heading.
///
/// Matches the labelled pattern `Pledge … <amount> or more`; every tier is
/// expected to declare a bracket, so a heading without the pattern is a
/// hard failure.
pub fn pledge_bracket(heading: &str) -> Result<f64, ExtractError> {
    let caps = PLEDGE_RE
        .captures(heading)
        .ok_or_else(|| ExtractError::ParseError {
            what: "pledge bracket",
            input: heading.to_string(),
        })?;
    parse_amount(&caps[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_basic() {
        assert_eq!(parse_amount("25").unwrap(), 25.0);
        assert_eq!(parse_amount("$1,500").unwrap(), 1500.0);
        assert_eq!(parse_amount("raised 2,000.50 so far").unwrap(), 2000.5);
    }

    #[test]
    fn test_parse_amount_no_digits_fails() {
        let result = parse_amount("no numbers here");
        assert!(matches!(
            result,
            Err(ExtractError::ParseError { what: "amount", .. })
        ));
    }

    #[test]
    fn test_parse_limit_basic() {
        assert_eq!(parse_limit("(3 of 10 left)").unwrap(), 10);
        assert_eq!(parse_limit("Limited (1 of 250 left)").unwrap(), 250);
    }

    #[test]
    fn test_parse_limit_missing_phrase_fails() {
        // Node present but text lacks the phrase: malformed, not unbounded
        let result = parse_limit("All gone!");
        assert!(matches!(result, Err(ExtractError::ParseError { .. })));
    }

    #[test]
    fn test_parse_embedded_int_basic() {
        assert_eq!(parse_embedded_int("55 backers").unwrap(), 55);
        assert_eq!(parse_embedded_int("backers: 7").unwrap(), 7);
    }

    #[test]
    fn test_parse_embedded_int_stops_at_separator() {
        // A comma ends the digit run
        assert_eq!(parse_embedded_int("1,234 backers").unwrap(), 1);
    }

    #[test]
    fn test_parse_embedded_int_no_digits_fails() {
        assert!(matches!(
            parse_embedded_int("backers"),
            Err(ExtractError::ParseError { .. })
        ));
    }

    #[test]
    fn test_pledge_bracket_basic() {
        assert_eq!(pledge_bracket("Pledge $25 or more").unwrap(), 25.0);
        assert_eq!(pledge_bracket("Pledge US$ 1,500 or more").unwrap(), 1500.0);
    }

    #[test]
    fn test_pledge_bracket_with_decimal() {
        assert_eq!(pledge_bracket("Pledge $9.99 or more").unwrap(), 9.99);
    }

    #[test]
    fn test_pledge_bracket_missing_pattern_fails() {
        let result = pledge_bracket("Early bird special");
        assert!(matches!(
            result,
            Err(ExtractError::ParseError {
                what: "pledge bracket",
                ..
            })
        ));
    }
}
