//! Currency flag.

use crate::features::patterns::{CURRENCY, count_matches};
use crate::features::{FeatureColumn, FlagExtractor};

/// Counts currency symbols (`$ ₤ ₨ € ₹ ₿`) adjacent to an optional amount.
///
/// A run of symbols counts once, so `$$$` is a single match.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrencyFlag;

impl CurrencyFlag {
    pub fn new() -> Self {
        CurrencyFlag
    }
}

impl FlagExtractor for CurrencyFlag {
    fn column(&self) -> FeatureColumn {
        FeatureColumn::Currency
    }

    fn count(&self, text: &str) -> usize {
        count_matches(&CURRENCY, text)
    }

    fn name(&self) -> &'static str {
        "currency"
    }
}
