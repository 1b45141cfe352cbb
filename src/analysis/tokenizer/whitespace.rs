//! Whitespace tokenizer implementation.

use super::Tokenizer;

use crate::analysis::token::{Token, TokenStream};

/// A tokenizer that splits text on runs of Unicode whitespace.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> TokenStream {
        let tokens: Vec<Token> = text.split_whitespace().map(Token::new).collect();
        Box::new(tokens.into_iter())
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_tokenizer() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("hello  world\ttest\n").collect();

        assert_eq!(
            tokens,
            vec![Token::new("hello"), Token::new("world"), Token::new("test")]
        );
    }

    #[test]
    fn test_unicode_whitespace_and_multibyte() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("€20\u{00A0}café").collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "€20");
        assert_eq!(tokens[1].text, "café");
    }

    #[test]
    fn test_empty_input() {
        let tokenizer = WhitespaceTokenizer::new();
        assert_eq!(tokenizer.tokenize("   ").count(), 0);
        assert_eq!(tokenizer.tokenize("").count(), 0);
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(WhitespaceTokenizer::new().name(), "whitespace");
    }
}
