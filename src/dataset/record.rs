//! Raw and processed records.

use serde::{Deserialize, Serialize};

use crate::dataset::field_value::FieldValue;
use crate::features::FeatureVector;

/// One input row before coercion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub comment: FieldValue,
    pub label: FieldValue,
}

impl RawRecord {
    pub fn new<C, L>(comment: C, label: L) -> Self
    where
        C: Into<FieldValue>,
        L: Into<FieldValue>,
    {
        RawRecord {
            comment: comment.into(),
            label: label.into(),
        }
    }
}

/// A coerced record flowing through the pipeline.
///
/// Each stage rewrites `comment` or fills one slot of `features`. The label
/// is `None` only for comments submitted for inference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub comment: String,
    pub label: Option<bool>,
    #[serde(flatten)]
    pub features: FeatureVector,
}

impl Record {
    /// Create a labelled record with zeroed features.
    pub fn labelled<S: Into<String>>(comment: S, label: bool) -> Self {
        Record {
            comment: comment.into(),
            label: Some(label),
            features: FeatureVector::default(),
        }
    }

    /// Create an unlabelled record with zeroed features.
    pub fn unlabelled<S: Into<String>>(comment: S) -> Self {
        Record {
            comment: comment.into(),
            label: None,
            features: FeatureVector::default(),
        }
    }

    pub fn is_spam(&self) -> bool {
        self.label == Some(true)
    }
}
