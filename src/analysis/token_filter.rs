//! Token filter implementations for token transformation.
//!
//! Filters transform the token stream produced by a tokenizer.
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseFilter`] - Converts tokens to lowercase
//! - [`stop::StopFilter`] - Removes stop words
//! - [`lemma::LemmaFilter`] - Reduces words to their dictionary form
//!
//! # Filter Chaining
//!
//! ```text
//! Tokenizer → Lowercase → Stop Words → Lemmatizer
//! ```

use crate::analysis::token::TokenStream;

/// Trait for filters that transform token streams.
///
/// Filters are total over any token stream.
///
/// # Examples
///
/// ```
/// use spamlens::analysis::token::{Token, TokenStream};
/// use spamlens::analysis::token_filter::Filter;
///
/// struct ReverseFilter;
///
/// impl Filter for ReverseFilter {
///     fn filter(&self, tokens: TokenStream) -> TokenStream {
///         Box::new(tokens.map(|t| {
///             let reversed: String = t.text.chars().rev().collect();
///             t.with_text(reversed)
///         }))
///     }
///
///     fn name(&self) -> &'static str {
///         "reverse"
///     }
/// }
/// ```
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> TokenStream;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod lemma;
pub mod lowercase;
pub mod stop;
