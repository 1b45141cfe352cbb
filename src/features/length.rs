//! Length flag.

use crate::features::{FeatureColumn, FlagExtractor};

/// Counts Unicode scalar values.
///
/// Computed on the fully normalised comment, after scrubbing, stop-word
/// removal and lemmatisation.
#[derive(Debug, Clone, Copy, Default)]
pub struct LengthFlag;

impl LengthFlag {
    pub fn new() -> Self {
        LengthFlag
    }
}

impl FlagExtractor for LengthFlag {
    fn column(&self) -> FeatureColumn {
        FeatureColumn::Length
    }

    fn count(&self, text: &str) -> usize {
        text.chars().count()
    }

    fn name(&self) -> &'static str {
        "length"
    }
}
