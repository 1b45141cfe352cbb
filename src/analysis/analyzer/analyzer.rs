//! Core analyzer trait definition.
//!
//! An analyzer is a complete text processing chain:
//!
//! ```text
//! Raw Text → Char Filters → Tokenizer → Filter 1 → ... → Filter N → Token Stream
//! ```
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use spamlens::analysis::analyzer::{Analyzer, PipelineAnalyzer};
//! use spamlens::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()));
//! let tokens: Vec<_> = analyzer.analyze("Hello World").collect();
//! assert_eq!(tokens[0].text, "Hello");
//! ```

use crate::analysis::token::{TokenStream, join_tokens};

/// Trait for analyzers that convert text into processed tokens.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> TokenStream;

    /// Analyze the text and join the surviving tokens with single spaces.
    fn analyze_to_string(&self, text: &str) -> String {
        join_tokens(self.analyze(text))
    }

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &str;
}
