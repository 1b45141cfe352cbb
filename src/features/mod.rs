//! Heuristic flag extraction.
//!
//! Every flag is a raw count of pattern matches in a comment, divided by a
//! fixed per-feature constant from [`NormalizationConstants`]. Extractors
//! only count; the division happens in one place ([`FlagValue::normalize`])
//! so the float semantics are identical for every column.
//!
//! | Column      | Counts                                              | Max |
//! |-------------|-----------------------------------------------------|-----|
//! | `length`    | characters of the processed comment                 | 50  |
//! | `currency`  | currency symbol next to an amount                   | 2   |
//! | `spam_word` | occurrences of known marketing phrases              | 1   |
//! | `emoji`     | curated emoji                                       | 2   |
//! | `contain`   | percentages, `T&C`, URL-like domains                | 1   |
//! | `email`     | `word@word.word`                                    | 1   |
//! | `phone`     | loose 10-digit numbers plus grouped 3-3-4 numbers   | 1   |
//!
//! Values are not clamped: three currency mentions give `1.5`.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::{FeatureConfig, NormalizationConstants};

pub mod contain;
pub mod currency;
pub mod email;
pub mod emoji;
pub mod length;
pub mod patterns;
pub mod phone;
pub mod spam_words;

pub use contain::ContainFlag;
pub use currency::CurrencyFlag;
pub use email::EmailFlag;
pub use emoji::EmojiFlag;
pub use length::LengthFlag;
pub use phone::PhoneFlag;
pub use spam_words::SpamWordFlag;

/// The seven numeric feature columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureColumn {
    Length,
    Currency,
    SpamWord,
    Emoji,
    Contain,
    Email,
    Phone,
}

impl FeatureColumn {
    /// All columns in output order.
    pub const ALL: [FeatureColumn; 7] = [
        FeatureColumn::Length,
        FeatureColumn::Currency,
        FeatureColumn::SpamWord,
        FeatureColumn::Emoji,
        FeatureColumn::Contain,
        FeatureColumn::Email,
        FeatureColumn::Phone,
    ];

    /// Column name in tabular output.
    pub fn column_name(&self) -> &'static str {
        match self {
            FeatureColumn::Length => "length",
            FeatureColumn::Currency => "currency",
            FeatureColumn::SpamWord => "spam_word",
            FeatureColumn::Emoji => "emoji",
            FeatureColumn::Contain => "contain",
            FeatureColumn::Email => "email",
            FeatureColumn::Phone => "phone",
        }
    }

    /// Input name expected by the trained network.
    pub fn input_name(&self) -> &'static str {
        match self {
            FeatureColumn::Length => "Length",
            FeatureColumn::Currency => "Currency",
            FeatureColumn::SpamWord => "Spam Words",
            FeatureColumn::Emoji => "Emoji",
            FeatureColumn::Contain => "Contain",
            FeatureColumn::Email => "Email",
            FeatureColumn::Phone => "Phone",
        }
    }
}

impl fmt::Display for FeatureColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

/// Per-record feature values.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FeatureVector {
    pub length: f32,
    pub currency: f32,
    pub spam_word: f32,
    pub emoji: f32,
    pub contain: f32,
    pub email: f32,
    pub phone: f32,
}

impl FeatureVector {
    pub fn get(&self, column: FeatureColumn) -> f32 {
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

    pub fn set(&mut self, column: FeatureColumn, value: f32) {
        let slot = match column {
            FeatureColumn::Length => &mut self.length,
            FeatureColumn::Currency => &mut self.currency,
            FeatureColumn::SpamWord => &mut self.spam_word,
            FeatureColumn::Emoji => &mut self.emoji,
            FeatureColumn::Contain => &mut self.contain,
            FeatureColumn::Email => &mut self.email,
            FeatureColumn::Phone => &mut self.phone,
        };
        *slot = value;
    }

    /// Values in [`FeatureColumn::ALL`] order.
    pub fn to_array(&self) -> [f32; 7] {
        FeatureColumn::ALL.map(|column| self.get(column))
    }
}

/// Divides raw counts by the configured constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlagValue {
    max: f32,
}

impl FlagValue {
    pub fn new(column: FeatureColumn, constants: &NormalizationConstants) -> Self {
        FlagValue {
            max: constants.max_for(column),
        }
    }

    /// `count / max` in single precision, the dtype of the model inputs.
    pub fn normalize(&self, count: usize) -> f32 {
        count as f32 / self.max
    }
}

/// Trait for extractors that count one kind of entity in a comment.
///
/// Counting is total: any string yields a count, zero when nothing matches.
pub trait FlagExtractor: Send + Sync {
    /// The column this extractor fills.
    fn column(&self) -> FeatureColumn;

    /// Count matches in the text.
    fn count(&self, text: &str) -> usize;

    /// Get the name of this extractor.
    fn name(&self) -> &'static str;
}

/// The six flags computed from the raw comment, in pipeline order.
pub fn raw_flag_extractors(config: &FeatureConfig) -> Vec<Arc<dyn FlagExtractor>> {
    vec![
        Arc::new(CurrencyFlag::new()),
        Arc::new(SpamWordFlag::new(config.spam_word_matching)),
        Arc::new(EmojiFlag::new(config.emoji_matching)),
        Arc::new(ContainFlag::new()),
        Arc::new(EmailFlag::new()),
        Arc::new(PhoneFlag::new()),
    ]
}
