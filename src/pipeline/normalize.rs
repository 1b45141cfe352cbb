//! Comment rewrites: scrubbing, stop-word removal and lemmatisation.
//!
//! Each transform is assembled from the analysis building blocks and runs
//! after every raw flag has been computed, because scrubbing deletes the
//! entities those flags count.

use std::sync::Arc;

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::char_filter::CharFilter;
use crate::analysis::char_filter::emoji_strip::EmojiStripCharFilter;
use crate::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
use crate::analysis::token_filter::lemma::{LemmaFilter, Lemmatizer};
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::regex::RegexTokenizer;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::features::patterns;
use crate::pipeline::stage::TextTransform;

/// Removes dollar amounts, phone numbers, links, email addresses and emoji.
///
/// Order matters: links go before addresses, so `john@gmail.com` loses its
/// domain to the link pattern and leaves `john@` behind.
#[derive(Clone)]
pub struct Scrubber {
    char_filters: Vec<Arc<dyn CharFilter>>,
}

impl Scrubber {
    pub fn new() -> Self {
        let removals = [
            &patterns::DOLLAR_AMOUNT,
            &patterns::PHONE_LOOSE,
            &patterns::PHONE_GROUPED,
            &patterns::URL,
            &patterns::EMAIL,
        ];

        let mut char_filters: Vec<Arc<dyn CharFilter>> = removals
            .into_iter()
            .map(|regex| {
                Arc::new(PatternReplaceCharFilter::remove((**regex).clone())) as Arc<dyn CharFilter>
            })
            .collect();
        char_filters.push(Arc::new(EmojiStripCharFilter::new()));

        Scrubber { char_filters }
    }

    pub fn char_filters(&self) -> &[Arc<dyn CharFilter>] {
        &self.char_filters
    }
}

impl Default for Scrubber {
    fn default() -> Self {
        Self::new()
    }
}

impl TextTransform for Scrubber {
    fn transform(&self, text: &str) -> String {
        self.char_filters
            .iter()
            .fold(text.to_string(), |acc, char_filter| char_filter.filter(&acc))
    }

    fn name(&self) -> &'static str {
        "scrub"
    }
}

/// Lower-cases, turns punctuation into spaces and drops English stop words.
///
/// Tokens are re-joined with single spaces.
#[derive(Debug, Clone)]
pub struct StopWordNormalizer {
    analyzer: PipelineAnalyzer,
}

impl StopWordNormalizer {
    pub fn new() -> Self {
        Self::with_stop_filter(StopFilter::new())
    }

    pub fn with_stop_filter(stop_filter: StopFilter) -> Self {
        let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_char_filter(Arc::new(PatternReplaceCharFilter::from_regex(
                patterns::PUNCTUATION_CLASS.clone(),
                " ",
            )))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(stop_filter))
            .with_name("stop_words");

        StopWordNormalizer { analyzer }
    }
}

impl Default for StopWordNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextTransform for StopWordNormalizer {
    fn transform(&self, text: &str) -> String {
        self.analyzer.analyze_to_string(text)
    }

    fn name(&self) -> &'static str {
        "stop_words"
    }
}

/// Splits on runs of non-word characters and lemmatises each token.
#[derive(Debug, Clone)]
pub struct TextLemmatizer {
    analyzer: PipelineAnalyzer,
}

impl TextLemmatizer {
    pub fn new() -> Self {
        Self::with_filter(LemmaFilter::new())
    }

    pub fn with_lemmatizer(lemmatizer: Box<dyn Lemmatizer>) -> Self {
        Self::with_filter(LemmaFilter::with_lemmatizer(lemmatizer))
    }

    fn with_filter(filter: LemmaFilter) -> Self {
        let tokenizer = RegexTokenizer::from_regex(patterns::NON_WORD.clone());
        let analyzer = PipelineAnalyzer::new(Arc::new(tokenizer))
            .add_filter(Arc::new(filter))
            .with_name("lemmatize");

        TextLemmatizer { analyzer }
    }
}

impl Default for TextLemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextTransform for TextLemmatizer {
    fn transform(&self, text: &str) -> String {
        self.analyzer.analyze_to_string(text).trim().to_string()
    }

    fn name(&self) -> &'static str {
        "lemmatize"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token_filter::lemma::IdentityLemmatizer;

    #[test]
    fn test_scrub_removes_entities() {
        let scrubber = Scrubber::new();
        assert_eq!(
            scrubber.transform("Win $500 now!!! Call 555-123-4567"),
            "Win  now!!! Call "
        );
        assert_eq!(scrubber.transform("contact me@x.com"), "contact ");
        assert_eq!(
            scrubber.transform("Visit https://www.example.com/offer now"),
            "Visit /offer now"
        );
        assert_eq!(scrubber.transform("Call +91 9876543210 now"), "Call  now");
    }

    #[test]
    fn test_scrub_link_before_address() {
        assert_eq!(Scrubber::new().transform("john@gmail.com"), "john@");
    }

    #[test]
    fn test_scrub_emoji() {
        let scrubber = Scrubber::new();
        assert_eq!(scrubber.transform("party 🎉 time"), "party  time");
        assert_eq!(scrubber.transform("a|b"), "a|b");
        assert_eq!(scrubber.char_filters().len(), 6);
    }

    #[test]
    fn test_stop_words_and_punctuation() {
        let normalizer = StopWordNormalizer::new();
        assert_eq!(normalizer.transform("Win  now!!! Call "), "win call");
        assert_eq!(normalizer.transform("I don't like THE (new) phone"), "like new phone");
        assert_eq!(normalizer.transform("hello world"), "hello world");
        assert_eq!(normalizer.transform("!!!"), "");
    }

    #[test]
    fn test_stop_words_keep_unlisted_symbols() {
        let normalizer = StopWordNormalizer::new();
        assert_eq!(normalizer.transform("50% off at shop.com"), "50% shop.com");
    }

    #[test]
    fn test_lemmatize() {
        let lemmatizer = TextLemmatizer::new();
        assert_eq!(lemmatizer.transform("free prizes waiting"), "free prize waiting");
        assert_eq!(lemmatizer.transform("50% shop.com"), "50 shop com");
        assert_eq!(lemmatizer.transform("  ...  "), "");
    }

    #[test]
    fn test_lemmatize_with_identity() {
        let lemmatizer = TextLemmatizer::with_lemmatizer(Box::new(IdentityLemmatizer::new()));
        assert_eq!(lemmatizer.transform("cats, dogs"), "cats dogs");
    }
}
