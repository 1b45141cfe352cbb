//! Lowercase filter implementation.
//!
//! # Examples
//!
//! ```
//! use spamlens::analysis::token_filter::Filter;
//! use spamlens::analysis::token_filter::lowercase::LowercaseFilter;
//! use spamlens::analysis::token::Token;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Hello"), Token::new("WORLD")];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter())).collect();
//!
//! assert_eq!(filtered[0].text, "hello");
//! assert_eq!(filtered[1].text, "world");
//! ```

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;

/// A filter that converts tokens to lowercase (full Unicode case mapping).
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> TokenStream {
        Box::new(tokens.map(|token| {
            let lowered = token.text.to_lowercase();
            token.with_text(lowered)
        }))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
