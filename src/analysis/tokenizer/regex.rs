//! Regex-based tokenizer implementation.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{Result, SpamlensError};

/// A tokenizer that splits text on a separator pattern.
///
/// The text between separator matches becomes the tokens; empty gaps are
/// skipped, so leading and trailing separators produce nothing.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    separator: Arc<Regex>,
}

impl RegexTokenizer {
    /// Create a new regex tokenizer splitting on the given separator pattern.
    pub fn new(separator: &str) -> Result<Self> {
        let regex = Regex::new(separator)
            .map_err(|e| SpamlensError::analysis(format!("Invalid regex pattern: {e}")))?;
        Ok(Self::from_regex(regex))
    }

    /// Create a tokenizer from an already compiled separator.
    pub fn from_regex(separator: Regex) -> Self {
        RegexTokenizer {
            separator: Arc::new(separator),
        }
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> TokenStream {
        let tokens: Vec<Token> = self
            .separator
            .split(text)
            .filter(|gap| !gap.is_empty())
            .map(Token::new)
            .collect();

        Box::new(tokens.into_iter())
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}
