//! Pipeline analyzer used by the comment normalizers.
//!
//! # Examples
//!
//! ```
//! use spamlens::analysis::analyzer::{Analyzer, PipelineAnalyzer};
//! use spamlens::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//! use spamlens::analysis::token_filter::lowercase::LowercaseFilter;
//! use spamlens::analysis::token_filter::stop::StopFilter;
//! use std::sync::Arc;
//!
//! let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
//!     .add_filter(Arc::new(LowercaseFilter::new()))
//!     .add_filter(Arc::new(StopFilter::from_words(vec!["the", "and"])))
//!     .with_name("stop_words");
//!
//! assert_eq!(analyzer.analyze_to_string("Claim THE prize AND cash"), "claim prize cash");
//! ```

use std::fmt;
use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::char_filter::CharFilter;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::Tokenizer;

/// Char filters, then a tokenizer, then token filters, each in insertion order.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    name: String,
    char_filters: Vec<Arc<dyn CharFilter>>,
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
}

impl PipelineAnalyzer {
    /// Named `pipeline_<tokenizer>` until [`with_name`](Self::with_name) is called.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            name: format!("pipeline_{}", tokenizer.name()),
            char_filters: Vec::new(),
            tokenizer,
            filters: Vec::new(),
        }
    }

    pub fn add_char_filter(mut self, char_filter: Arc<dyn CharFilter>) -> Self {
        self.char_filters.push(char_filter);
        self
    }

    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> TokenStream {
        let mut rewritten = text.to_string();
        for char_filter in &self.char_filters {
            rewritten = char_filter.filter(&rewritten);
        }

        self.filters
            .iter()
            .fold(self.tokenizer.tokenize(&rewritten), |tokens, filter| {
                filter.filter(tokens)
            })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let char_filters: Vec<&str> = self.char_filters.iter().map(|c| c.name()).collect();
        let filters: Vec<&str> = self.filters.iter().map(|t| t.name()).collect();
        write!(
            f,
            "PipelineAnalyzer({}: {:?} -> {} -> {:?})",
            self.name,
            char_filters,
            self.tokenizer.name(),
            filters
        )
    }
}
