//! "Contains" flag: percentages, terms-and-conditions markers and links.

use crate::features::patterns::{PERCENT_OR_TERMS, URL, count_matches};
use crate::features::{FeatureColumn, FlagExtractor};

/// Counts `N%`, the literal `T&C`, and URL-like `label.suffix` runs.
///
/// The two patterns are counted independently and summed.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContainFlag;

impl ContainFlag {
    pub fn new() -> Self {
        ContainFlag
    }
}

impl FlagExtractor for ContainFlag {
    fn column(&self) -> FeatureColumn {
        FeatureColumn::Contain
    }

    fn count(&self, text: &str) -> usize {
        count_matches(&PERCENT_OR_TERMS, text) + count_matches(&URL, text)
    }

    fn name(&self) -> &'static str {
        "contain"
    }
}
