//! Text analysis module for Spamlens.
//!
//! Char filters, tokenizers, token filters and the analyzers that chain
//! them. The normalisation stages of the feature pipeline are built from
//! these parts.

pub mod analyzer;
pub mod char_filter;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::*;
pub use token::*;
