//! Char filter implementations for text normalization.
//!
//! Char filters rewrite the raw string before it reaches a tokenizer. The
//! feature pipeline uses them on their own as well: the scrubbing stage is
//! nothing more than an ordered chain of char filters.
//!
//! # Available Filters
//!
//! - [`pattern_replace::PatternReplaceCharFilter`] - Regex-based replacement
//! - [`emoji_strip::EmojiStripCharFilter`] - Removes emoji grapheme clusters
//!
//! # Examples
//!
//! ```
//! use spamlens::analysis::char_filter::CharFilter;
//! use spamlens::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
//!
//! let filter = PatternReplaceCharFilter::new(r"\d+", "#").unwrap();
//! assert_eq!(filter.filter("call 555 now"), "call # now");
//! ```

/// Trait for character filters that transform text before tokenization.
///
/// Filters are total: any input string yields an output string.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod emoji_strip;
pub mod pattern_replace;
