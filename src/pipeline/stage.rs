//! Stage abstractions.
//!
//! A stage consumes a whole [`Batch`] and returns the next one. Two kinds
//! cover every text stage of the pipeline: [`FlagStage`] fills one feature
//! column from the current comment, and [`CommentRewriteStage`] replaces the
//! comment with the output of a [`TextTransform`].

use std::sync::Arc;

use crate::config::NormalizationConstants;
use crate::dataset::Batch;
use crate::features::{FlagExtractor, FlagValue};

/// Trait for batch-to-batch pipeline stages.
pub trait Stage: Send + Sync {
    /// Apply this stage to a batch.
    fn apply(&self, batch: Batch) -> Batch;

    /// Get the name of this stage.
    fn name(&self) -> &'static str;
}

/// Trait for total string rewrites applied to every comment.
pub trait TextTransform: Send + Sync {
    /// Rewrite a comment.
    fn transform(&self, text: &str) -> String;

    /// Get the name of this transform.
    fn name(&self) -> &'static str;
}

/// Fills one feature column with `count / max` for every record.
#[derive(Clone)]
pub struct FlagStage {
    extractor: Arc<dyn FlagExtractor>,
    value: FlagValue,
}

impl FlagStage {
    pub fn new(extractor: Arc<dyn FlagExtractor>, constants: &NormalizationConstants) -> Self {
        let value = FlagValue::new(extractor.column(), constants);
        FlagStage { extractor, value }
    }

    /// The normalised value for a single comment.
    pub fn compute(&self, text: &str) -> f32 {
        self.value.normalize(self.extractor.count(text))
    }
}

impl Stage for FlagStage {
    fn apply(&self, mut batch: Batch) -> Batch {
        let column = self.extractor.column();
        for record in batch.records_mut() {
            let value = self.compute(&record.comment);
            record.features.set(column, value);
        }
        batch
    }

    fn name(&self) -> &'static str {
        self.extractor.name()
    }
}

impl std::fmt::Debug for FlagStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlagStage")
            .field("extractor", &self.extractor.name())
            .field("value", &self.value)
            .finish()
    }
}

/// Replaces each comment with a transformed one.
#[derive(Clone)]
pub struct CommentRewriteStage {
    transform: Arc<dyn TextTransform>,
}

impl CommentRewriteStage {
    pub fn new(transform: Arc<dyn TextTransform>) -> Self {
        CommentRewriteStage { transform }
    }
}

impl Stage for CommentRewriteStage {
    fn apply(&self, mut batch: Batch) -> Batch {
        for record in batch.records_mut() {
            record.comment = self.transform.transform(&record.comment);
        }
        batch
    }

    fn name(&self) -> &'static str {
        self.transform.name()
    }
}

impl std::fmt::Debug for CommentRewriteStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommentRewriteStage")
            .field("transform", &self.transform.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Record;
    use crate::features::{CurrencyFlag, FeatureColumn};

    struct Upper;

    impl TextTransform for Upper {
        fn transform(&self, text: &str) -> String {
            text.to_uppercase()
        }

        fn name(&self) -> &'static str {
            "upper"
        }
    }

    #[test]
    fn test_flag_stage_sets_column_only() {
        let stage = FlagStage::new(
            Arc::new(CurrencyFlag::new()),
            &NormalizationConstants::default(),
        );
        let batch = Batch::new(vec![
            Record::labelled("pay $5 or $6", true),
            Record::labelled("nothing", false),
        ]);

        let batch = stage.apply(batch);
        assert_eq!(stage.name(), "currency");
        assert_eq!(batch[0].features.get(FeatureColumn::Currency), 1.0);
        assert_eq!(batch[0].features.get(FeatureColumn::Phone), 0.0);
        assert_eq!(batch[0].comment, "pay $5 or $6");
        assert_eq!(batch[1].features.currency, 0.0);
    }

    #[test]
    fn test_rewrite_stage() {
        let stage = CommentRewriteStage::new(Arc::new(Upper));
        let batch = stage.apply(Batch::from_comments(["abc"]));
        assert_eq!(batch[0].comment, "ABC");
        assert_eq!(stage.name(), "upper");
        assert!(format!("{stage:?}").contains("upper"));
    }
}
