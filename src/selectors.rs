//! Precompiled structural queries over campaign markup.
//!
//! Selectors are compiled once at first use and reused across all documents.
//! Multi-match queries return possibly-empty iterators, never errors; the
//! zero-or-one helpers below make absence explicit so the caller decides
//! whether a missing node is a layout mismatch (tier bracket) or a valid
//! state (tier limit).

use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

use crate::error_handling::ExtractError;

// CSS selector strings
const PROJECT_CARD_SELECTOR_STR: &str = "div.project-card";
const CARD_TITLE_SELECTOR_STR: &str = "h2 strong a";
const TITLE_SELECTOR_STR: &str = "h1#title a";
const MONEY_RAISED_SELECTOR_STR: &str = "#moneyraised";
const BACKERS_COUNT_SELECTOR_STR: &str = "#backers_count";
const PLEDGED_SELECTOR_STR: &str = "#pledged";
const REWARD_SELECTOR_STR: &str = ".NS-projects-reward";
const REWARD_HEADING_SELECTOR_STR: &str = "h3";
const REWARD_BACKERS_SELECTOR_STR: &str = ".backers-limits span.num-backers";
const REWARD_LIMIT_SELECTOR_STR: &str = ".backers-limits span.limited .limited-number";

/// Project cards on a category listing page.
pub static PROJECT_CARD: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(PROJECT_CARD_SELECTOR_STR)
        .expect("Failed to parse project card selector - this is a bug")
});

/// The titled anchor inside a project card.
pub static CARD_TITLE: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(CARD_TITLE_SELECTOR_STR)
        .expect("Failed to parse card title selector - this is a bug")
});

/// The campaign title heading anchor.
pub static TITLE: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(TITLE_SELECTOR_STR).expect("Failed to parse title selector - this is a bug")
});

/// The unique money-raised box on a campaign page.
pub static MONEY_RAISED: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(MONEY_RAISED_SELECTOR_STR)
        .expect("Failed to parse money-raised selector - this is a bug")
});

/// The backers-count node inside the money-raised box.
pub static BACKERS_COUNT: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(BACKERS_COUNT_SELECTOR_STR)
        .expect("Failed to parse backers-count selector - this is a bug")
});

/// The pledged/goal node inside the money-raised box.
pub static PLEDGED: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(PLEDGED_SELECTOR_STR)
        .expect("Failed to parse pledged selector - this is a bug")
});

/// Reward tier blocks on a campaign page.
pub static REWARD: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(REWARD_SELECTOR_STR).expect("Failed to parse reward selector - this is a bug")
});

/// The heading of a reward tier block.
pub static REWARD_HEADING: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(REWARD_HEADING_SELECTOR_STR)
        .expect("Failed to parse reward heading selector - this is a bug")
});

/// The backer-count node of a reward tier block.
pub static REWARD_BACKERS: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(REWARD_BACKERS_SELECTOR_STR)
        .expect("Failed to parse reward backers selector - this is a bug")
});

/// The remaining-slots node of a reward tier block (absent on unbounded tiers).
pub static REWARD_LIMIT: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(REWARD_LIMIT_SELECTOR_STR)
        .expect("Failed to parse reward limit selector - this is a bug")
});

/// Returns the first match within `scope`, or `None` when the substructure
/// is absent.
pub fn select_one<'a>(scope: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    scope.select(selector).next()
}

/// Returns the first match within `scope`, or `StructureNotFound` naming the
/// missing substructure.
pub fn require_one<'a>(
    scope: ElementRef<'a>,
    selector: &Selector,
    what: &'static str,
) -> Result<ElementRef<'a>, ExtractError> {
    scope
        .select(selector)
        .next()
        .ok_or(ExtractError::StructureNotFound(what))
}
