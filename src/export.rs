//! Columnar export of processed batches.
//!
//! A trained network consumes eight named inputs plus the target:
//!
//! | Input        | Type   |
//! |--------------|--------|
//! | `Comment`    | string |
//! | `Length`     | f32    |
//! | `Currency`   | f32    |
//! | `Spam Words` | f32    |
//! | `Emoji`      | f32    |
//! | `Contain`    | f32    |
//! | `Email`      | f32    |
//! | `Phone`      | f32    |
//! | `Spam`       | bool   |
//!
//! [`FeatureTensors`] holds one column per input and serialises with these
//! exact names.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::dataset::Batch;
use crate::error::Result;
use crate::features::FeatureColumn;

/// Name of the target column.
pub const LABEL_INPUT: &str = "Spam";

/// Name of the text column.
pub const COMMENT_INPUT: &str = "Comment";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureTensors {
    #[serde(rename = "Comment")]
    pub comment: Vec<String>,
    #[serde(rename = "Length")]
    pub length: Vec<f32>,
    #[serde(rename = "Currency")]
    pub currency: Vec<f32>,
    #[serde(rename = "Spam Words")]
    pub spam_word: Vec<f32>,
    #[serde(rename = "Emoji")]
    pub emoji: Vec<f32>,
    #[serde(rename = "Contain")]
    pub contain: Vec<f32>,
    #[serde(rename = "Email")]
    pub email: Vec<f32>,
    #[serde(rename = "Phone")]
    pub phone: Vec<f32>,
    /// Absent when any record is unlabelled.
    #[serde(rename = "Spam", default, skip_serializing_if = "Option::is_none")]
    pub label: Option<Vec<bool>>,
}

impl FeatureTensors {
    pub fn from_batch(batch: &Batch) -> Self {
        let n = batch.len();
        let mut tensors = FeatureTensors {
            comment: Vec::with_capacity(n),
            length: Vec::with_capacity(n),
            currency: Vec::with_capacity(n),
            spam_word: Vec::with_capacity(n),
            emoji: Vec::with_capacity(n),
            contain: Vec::with_capacity(n),
            email: Vec::with_capacity(n),
            phone: Vec::with_capacity(n),
            label: None,
        };

        for record in batch {
            tensors.comment.push(record.comment.clone());
            for column in FeatureColumn::ALL {
                tensors
                    .column_mut(column)
                    .push(record.features.get(column));
            }
        }

        tensors.label = batch.iter().map(|r| r.label).collect();
        tensors
    }

    pub fn len(&self) -> usize {
        self.comment.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comment.is_empty()
    }

    pub fn column(&self, column: FeatureColumn) -> &[f32] {
        match column {
            FeatureColumn::Length => &self.length,
            FeatureColumn::Currency => &self.currency,
            FeatureColumn::SpamWord => &self.spam_word,
            FeatureColumn::Emoji => &self.emoji,
            FeatureColumn::Contain => &self.contain,
            FeatureColumn::Email => &self.email,
            FeatureColumn::Phone => &self.phone,
        }
    }

    fn column_mut(&mut self, column: FeatureColumn) -> &mut Vec<f32> {
        match column {
            FeatureColumn::Length => &mut self.length,
            FeatureColumn::Currency => &mut self.currency,
            FeatureColumn::SpamWord => &mut self.spam_word,
            FeatureColumn::Emoji => &mut self.emoji,
            FeatureColumn::Contain => &mut self.contain,
            FeatureColumn::Email => &mut self.email,
            FeatureColumn::Phone => &mut self.phone,
        }
    }

    /// Write as a single JSON object.
    pub fn write_json<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer(writer, self)?;
        Ok(())
    }
}

impl From<&Batch> for FeatureTensors {
    fn from(batch: &Batch) -> Self {
        FeatureTensors::from_batch(batch)
    }
}
