//! Token types for text analysis.
//!
//! A [`Token`] is the unit that flows from a tokenizer through the token
//! filters of an analyzer. Filters rewrite a token's text or drop the token;
//! the normalisation stages of the feature pipeline join the surviving
//! token texts back into a single comment.
//!
//! # Examples
//!
//! ```
//! use spamlens::analysis::token::{Token, join_tokens};
//!
//! let tokens = vec![Token::new("free"), Token::new("prize")];
//! assert_eq!(join_tokens(Box::new(tokens.into_iter())), "free prize");
//! ```

use std::fmt;

/// A single word produced by a tokenizer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub text: String,
}

impl Token {
    pub fn new<S: Into<String>>(text: S) -> Self {
        Token { text: text.into() }
    }

    /// Replace the text of this token.
    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = text.into();
        self
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

/// Join the text of every token with single spaces.
pub fn join_tokens(tokens: TokenStream) -> String {
    tokens
        .map(|token| token.text)
        .collect::<Vec<_>>()
        .join(" ")
}
