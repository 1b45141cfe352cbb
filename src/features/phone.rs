//! Phone flag.
//!
//! Two patterns are counted and summed: a loose one for ten-digit numbers
//! with an optional country prefix and a grouped one for `ddd-ddd-dddd`.
//! A bare ten-digit number matches both and counts twice; trained models
//! expect that.

use crate::features::patterns::{PHONE_GROUPED, PHONE_LOOSE, count_matches};
use crate::features::{FeatureColumn, FlagExtractor};

#[derive(Debug, Clone, Copy, Default)]
pub struct PhoneFlag;

impl PhoneFlag {
    pub fn new() -> Self {
        PhoneFlag
    }
}

impl FlagExtractor for PhoneFlag {
    fn column(&self) -> FeatureColumn {
        FeatureColumn::Phone
    }

    fn count(&self, text: &str) -> usize {
        count_matches(&PHONE_LOOSE, text) + count_matches(&PHONE_GROUPED, text)
    }

    fn name(&self) -> &'static str {
        "phone"
    }
}
