//! Pipeline configuration.
//!
//! Normalisation constants, matching modes, resampling and split settings.
//! A [`PipelineConfig`] is built once (defaults or a JSON file), validated,
//! and handed by reference to every stage constructor. Stages copy what
//! they need; nothing reads configuration from global state.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpamlensError};
use crate::features::FeatureColumn;

/// Per-feature divisors applied to raw counts.
///
/// These values are part of the feature contract of already-trained
/// models; changing them changes every feature value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizationConstants {
    pub length: f32,
    pub currency: f32,
    pub spam_word: f32,
    pub emoji: f32,
    pub contain: f32,
    pub email: f32,
    pub phone: f32,
}

impl Default for NormalizationConstants {
    fn default() -> Self {
        Self {
            length: 50.0,
            currency: 2.0,
            spam_word: 1.0,
            emoji: 2.0,
            contain: 1.0,
            email: 1.0,
            phone: 1.0,
        }
    }
}

impl NormalizationConstants {
    /// The divisor for a feature column.
    pub fn max_for(&self, column: FeatureColumn) -> f32 {
        match column {
            FeatureColumn::Length => self.length,
            FeatureColumn::Currency => self.currency,
            FeatureColumn::SpamWord => self.spam_word,
            FeatureColumn::Emoji => self.emoji,
            FeatureColumn::Contain => self.contain,
            FeatureColumn::Email => self.email,
            FeatureColumn::Phone => self.phone,
        }
    }

    fn validate(&self) -> Result<()> {
        for column in FeatureColumn::ALL {
            let max = self.max_for(column);
            if !max.is_finite() || max <= 0.0 {
                return Err(SpamlensError::config(format!(
                    "normalization constant for '{}' must be a positive finite number, got {max}",
                    column.column_name()
                )));
            }
        }
        Ok(())
    }
}

/// How the emoji flag decides which characters count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmojiMatching {
    /// Bracket-class semantics of the deployed model: every curated emoji
    /// counts, and so does every `|` character.
    #[default]
    Legacy,
    /// Only the curated emoji count.
    Curated,
}

/// How spam phrases are matched against a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpamWordMatching {
    /// Match against the comment as written (flags run before lower-casing).
    #[default]
    CaseSensitive,
    /// Lower-case the comment before matching.
    CaseInsensitive,
}

/// Settings shared by the flag extractors.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureConfig {
    pub normalization: NormalizationConstants,
    pub emoji_matching: EmojiMatching,
    pub spam_word_matching: SpamWordMatching,
}

/// Random oversampling of the minority label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OversampleConfig {
    pub seed: u64,
}

impl Default for OversampleConfig {
    fn default() -> Self {
        Self { seed: 73133 }
    }
}

/// Train/test partitioning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitConfig {
    /// Fraction of records assigned to the training partition.
    pub train_fraction: f64,
    pub seed: u64,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            train_fraction: 0.8,
            seed: 0,
        }
    }
}

/// Top-level configuration for a pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub features: FeatureConfig,
    pub oversample: OversampleConfig,
    pub split: SplitConfig,
}

impl PipelineConfig {
    /// Load a configuration from a JSON file. Missing keys keep their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: PipelineConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every value is usable.
    pub fn validate(&self) -> Result<()> {
        self.features.normalization.validate()?;

        let fraction = self.split.train_fraction;
        if !(fraction > 0.0 && fraction < 1.0) {
            return Err(SpamlensError::config(format!(
                "train_fraction must be in (0, 1), got {fraction}"
            )));
        }
        Ok(())
    }
}
