//! Lemmatizing token filter and lemmatizer implementations.

use super::Filter;
use crate::analysis::token::TokenStream;

/// Trait for lemmatization algorithms.
pub trait Lemmatizer: Send + Sync {
    /// Reduce a word to its dictionary form.
    fn lemmatize(&self, word: &str) -> String;

    /// Get the name of this lemmatizer.
    fn name(&self) -> &'static str;
}

pub mod identity;
pub mod noun;

pub use identity::IdentityLemmatizer;
pub use noun::NounLemmatizer;

/// Filter that applies a lemmatizer to every token.
pub struct LemmaFilter {
    lemmatizer: Box<dyn Lemmatizer>,
}

impl std::fmt::Debug for LemmaFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LemmaFilter")
            .field("lemmatizer", &self.lemmatizer.name())
            .finish()
    }
}

impl LemmaFilter {
    /// Create a new lemma filter with the noun lemmatizer.
    pub fn new() -> Self {
        LemmaFilter {
            lemmatizer: Box::new(NounLemmatizer::new()),
        }
    }

    /// Create a lemma filter with a custom lemmatizer.
    pub fn with_lemmatizer(lemmatizer: Box<dyn Lemmatizer>) -> Self {
        LemmaFilter { lemmatizer }
    }
}

impl Default for LemmaFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for LemmaFilter {
    fn filter(&self, tokens: TokenStream) -> TokenStream {
        let lemmatized = tokens
            .map(|token| {
                let lemma = self.lemmatizer.lemmatize(&token.text);
                token.with_text(lemma)
            })
            .collect::<Vec<_>>();

        Box::new(lemmatized.into_iter())
    }

    fn name(&self) -> &'static str {
        "lemma"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_lemma_filter() {
        let filter = LemmaFilter::new();
        let tokens = vec![
            Token::new("prizes"),
            Token::new("offers"),
            Token::new("cities"),
        ];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).collect();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text, "prize");
        assert_eq!(result[1].text, "offer");
        assert_eq!(result[2].text, "city");
    }

    #[test]
    fn test_identity_lemma_filter() {
        let filter = LemmaFilter::with_lemmatizer(Box::new(IdentityLemmatizer::new()));
        let tokens = vec![Token::new("prizes")];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).collect();
        assert_eq!(result[0].text, "prizes");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(LemmaFilter::new().name(), "lemma");
    }
}
