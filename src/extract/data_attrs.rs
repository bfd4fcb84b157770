//! Recursive collection of `data-*` attributes from a subtree.
//!
//! Campaign pages repeat the same logical field at several nesting depths.
//! The merge walks depth-first: an element's own attributes are recorded
//! first, then each child subtree in document order, and a later visit's
//! value overwrites an earlier one, so a descendant's value wins over its
//! ancestor's. That traversal order and override rule are an observable
//! contract, not an implementation detail.

use scraper::ElementRef;

const DATA_PREFIX: &str = "data-";

/// The named `data-*` fields the extractor consumes, keyed by the
/// attribute's suffix (`data-value` fills `value`, and so on). Attributes
/// with other suffixes are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataAttrs {
    pub value: Option<String>,
    pub goal: Option<String>,
    pub pledged: Option<String>,
    pub currency: Option<String>,
}

impl DataAttrs {
    /// Collects `data-*` attributes from `element` and every descendant.
    pub fn collect(element: ElementRef<'_>) -> Self {
        let mut attrs = Self::default();
        attrs.visit(element);
        attrs
    }

    fn visit(&mut self, element: ElementRef<'_>) {
        for (name, value) in element.value().attrs() {
            if let Some(key) = name.strip_prefix(DATA_PREFIX) {
                self.assign(key, value);
            }
        }
        for child in element.children().filter_map(ElementRef::wrap) {
            self.visit(child);
        }
    }

    // Unconditional assignment: later visits win.
    fn assign(&mut self, key: &str, value: &str) {
        let slot = match key {
            "value" => &mut self.value,
            "goal" => &mut self.goal,
            "pledged" => &mut self.pledged,
            "currency" => &mut self.currency,
            _ => return,
        };
        *slot = Some(value.to_string());
    }
}
