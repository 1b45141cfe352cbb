//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first token-producing step of an analyzer.
//!
//! # Available Tokenizers
//!
//! - [`whitespace::WhitespaceTokenizer`] - Splits on Unicode whitespace
//! - [`regex::RegexTokenizer`] - Splits on a separator pattern
//!
//! # Examples
//!
//! ```
//! use spamlens::analysis::tokenizer::Tokenizer;
//! use spamlens::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello   world").collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::TokenStream;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so a configured pipeline can be shared.
///
/// # Examples
///
/// Implementing a custom tokenizer:
///
/// ```
/// use spamlens::analysis::token::{Token, TokenStream};
/// use spamlens::analysis::tokenizer::Tokenizer;
///
/// struct CommaTokenizer;
///
/// impl Tokenizer for CommaTokenizer {
///     fn tokenize(&self, text: &str) -> TokenStream {
///         let tokens: Vec<Token> = text
///             .split(',')
///             .map(|s| Token::new(s.trim()))
///             .collect();
///         Box::new(tokens.into_iter())
///     }
///
///     fn name(&self) -> &'static str {
///         "comma"
///     }
/// }
/// ```
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> TokenStream;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod regex;
pub mod whitespace;
