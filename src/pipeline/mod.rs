//! The feature pipeline.
//!
//! Stages run in one fixed order:
//!
//! 1. dedup and coercion (training only)
//! 2. currency, spam-word, emoji, contain, email and phone flags, computed
//!    from the raw comment
//! 3. scrub, stop-word removal, lemmatisation
//! 4. the length flag, computed from the processed comment
//! 5. optional oversampling (training only)
//!
//! Flags must see the raw comment because scrubbing deletes what they
//! count, and length must come last because every rewrite changes it. The
//! constructors fix this order; it cannot be rearranged from outside.
//!
//! # Examples
//!
//! ```
//! use spamlens::config::PipelineConfig;
//! use spamlens::pipeline::FeaturePipeline;
//!
//! let pipeline = FeaturePipeline::inference(&PipelineConfig::default());
//! let record = pipeline.process_comment("Win $500 now!!! Call 555-123-4567");
//!
//! assert_eq!(record.comment, "win call");
//! assert_eq!(record.features.currency, 0.5);
//! assert_eq!(record.features.phone, 1.0);
//! ```

use std::sync::Arc;

use log::{debug, info};

use crate::config::PipelineConfig;
use crate::dataset::{Batch, RawBatch, Record};
use crate::features::{LengthFlag, raw_flag_extractors};

pub mod dedup;
pub mod normalize;
pub mod oversample;
pub mod split;
pub mod stage;

pub use dedup::Deduplicate;
pub use normalize::{Scrubber, StopWordNormalizer, TextLemmatizer};
pub use oversample::RandomOversampler;
pub use split::train_test_split;
pub use stage::{CommentRewriteStage, FlagStage, Stage, TextTransform};

/// An ordered list of stages turning raw comments into feature records.
pub struct FeaturePipeline {
    config: PipelineConfig,
    dedup: Option<Deduplicate>,
    stages: Vec<Arc<dyn Stage>>,
    oversampler: Option<RandomOversampler>,
}

impl FeaturePipeline {
    /// Pipeline for labelled training data: dedup, flags, rewrites, length.
    pub fn training(config: &PipelineConfig) -> Self {
        FeaturePipeline {
            dedup: Some(Deduplicate::new()),
            ..Self::inference(config)
        }
    }

    /// Pipeline for serving: the feature stages only, no dedup and no
    /// oversampling.
    pub fn inference(config: &PipelineConfig) -> Self {
        FeaturePipeline {
            config: *config,
            dedup: None,
            stages: Self::feature_stages(config),
            oversampler: None,
        }
    }

    /// Append random oversampling of the minority label.
    pub fn with_oversampling(mut self) -> Self {
        self.oversampler = Some(RandomOversampler::new(self.config.oversample));
        self
    }

    fn feature_stages(config: &PipelineConfig) -> Vec<Arc<dyn Stage>> {
        let constants = &config.features.normalization;

        let mut stages: Vec<Arc<dyn Stage>> = raw_flag_extractors(&config.features)
            .into_iter()
            .map(|extractor| Arc::new(FlagStage::new(extractor, constants)) as Arc<dyn Stage>)
            .collect();

        stages.push(Arc::new(CommentRewriteStage::new(Arc::new(Scrubber::new()))));
        stages.push(Arc::new(CommentRewriteStage::new(Arc::new(
            StopWordNormalizer::new(),
        ))));
        stages.push(Arc::new(CommentRewriteStage::new(Arc::new(
            TextLemmatizer::new(),
        ))));
        stages.push(Arc::new(FlagStage::new(Arc::new(LengthFlag::new()), constants)));

        stages
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Stage names in execution order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        let mut names = Vec::with_capacity(self.stages.len() + 2);
        if let Some(dedup) = &self.dedup {
            names.push(dedup.name());
        }
        names.extend(self.stages.iter().map(|stage| stage.name()));
        if let Some(oversampler) = &self.oversampler {
            names.push(oversampler.name());
        }
        names
    }

    /// Run the pipeline on raw rows.
    ///
    /// With dedup, malformed rows are dropped and duplicates removed. The
    /// inference pipeline only drops rows without a comment and keeps
    /// whatever label can be read.
    pub fn run(&self, raw: RawBatch) -> Batch {
        info!("Running feature pipeline on {} rows", raw.len());
        let batch = match &self.dedup {
            Some(dedup) => dedup.coerce(raw),
            None => coerce_comments(raw),
        };
        debug!("{} rows after coercion", batch.len());
        self.process_batch(batch)
    }

    /// Run every stage after coercion on an already coerced batch.
    pub fn process_batch(&self, batch: Batch) -> Batch {
        let mut batch = batch;
        for stage in &self.stages {
            batch = stage.apply(batch);
            debug!("Stage '{}' done ({} rows)", stage.name(), batch.len());
        }

        if let Some(oversampler) = &self.oversampler {
            batch = oversampler.apply(batch);
        }

        info!("Feature pipeline produced {} records", batch.len());
        batch
    }

    /// Extract features for a single comment.
    pub fn process_comment(&self, comment: &str) -> Record {
        let batch = self
            .stages
            .iter()
            .fold(Batch::from_comments([comment]), |batch, stage| stage.apply(batch));

        batch
            .into_iter()
            .next()
            .unwrap_or_else(|| Record::unlabelled(comment))
    }
}

impl std::fmt::Debug for FeaturePipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeaturePipeline")
            .field("stages", &self.stage_names())
            .field("config", &self.config)
            .finish()
    }
}

fn coerce_comments(raw: RawBatch) -> Batch {
    raw.into_records()
        .into_iter()
        .filter_map(|row| {
            let comment = row.comment.to_comment()?;
            Some(Record {
                comment,
                label: row.label.to_label(),
                features: Default::default(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::RawRecord;

    #[test]
    fn test_stage_order() {
        let config = PipelineConfig::default();
        assert_eq!(
            FeaturePipeline::inference(&config).stage_names(),
            vec![
                "currency",
                "spam_word",
                "emoji",
                "contain",
                "email",
                "phone",
                "scrub",
                "stop_words",
                "lemmatize",
                "length",
            ]
        );

        let training = FeaturePipeline::training(&config).with_oversampling();
        let names = training.stage_names();
        assert_eq!(names.first(), Some(&"dedup"));
        assert_eq!(names.last(), Some(&"oversample"));
        assert_eq!(names.len(), 12);
    }

    #[test]
    fn test_process_comment() {
        let pipeline = FeaturePipeline::inference(&PipelineConfig::default());
        let record = pipeline.process_comment("Win $500 now!!! Call 555-123-4567");

        assert_eq!(record.comment, "win call");
        assert_eq!(record.label, None);
        assert_eq!(record.features.currency, 0.5);
        assert_eq!(record.features.spam_word, 1.0);
        assert_eq!(record.features.emoji, 0.0);
        assert_eq!(record.features.contain, 0.0);
        assert_eq!(record.features.email, 0.0);
        assert_eq!(record.features.phone, 1.0);
        assert_eq!(record.features.length, 8.0_f32 / 50.0);
    }

    #[test]
    fn test_run_training() {
        let raw: RawBatch = vec![
            RawRecord::new("Free cash now", 1_i64),
            RawRecord::new("Free cash now", 1_i64),
            RawRecord::new("see you at lunch", 0_i64),
            RawRecord::new(None::<&str>, 0_i64),
        ]
        .into_iter()
        .collect();

        let batch = FeaturePipeline::training(&PipelineConfig::default()).run(raw);
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].comment, "free cash");
        assert_eq!(batch[0].label, Some(true));
        assert_eq!(batch[1].comment, "see lunch");
    }

    #[test]
    fn test_run_inference_keeps_duplicates() {
        let raw: RawBatch = vec![
            RawRecord::new("hello", None::<bool>),
            RawRecord::new("hello", None::<bool>),
        ]
        .into_iter()
        .collect();

        let batch = FeaturePipeline::inference(&PipelineConfig::default()).run(raw);
        assert_eq!(batch.len(), 2);
        assert!(batch.iter().all(|r| r.label.is_none()));
    }
}
