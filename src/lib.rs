//! # Spamlens
//!
//! Heuristic feature extraction for spam/ham comment classifiers.
//!
//! ## Features
//!
//! - Seven numeric flags per comment: length, currency, spam words, emoji,
//!   links and percentages, email addresses, phone numbers
//! - Comment normalisation: entity scrubbing, stop-word and punctuation
//!   removal, lemmatisation
//! - Dedup and type coercion of raw labelled tables
//! - Seeded oversampling and train/test splitting
//! - CSV, JSONL and named-tensor export

pub mod analysis;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod export;
pub mod features;
pub mod pipeline;

pub mod prelude {
    pub use crate::config::{FeatureConfig, PipelineConfig};
    pub use crate::dataset::{Batch, RawBatch, RawRecord, Record};
    pub use crate::error::{Result, SpamlensError};
    pub use crate::export::FeatureTensors;
    pub use crate::features::{FeatureColumn, FeatureVector};
    pub use crate::pipeline::{FeaturePipeline, train_test_split};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
