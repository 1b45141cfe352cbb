//! Spam-word flag.
//!
//! Sums the occurrences of each phrase in [`SPAM_WORDS`]. Occurrences are
//! plain substrings, so phrases overlap each other and words inside longer
//! words: `"free trial"` contributes to both `"free"` and `"free trial"`,
//! and `"known"` contains `"now"`.

use crate::config::SpamWordMatching;
use crate::features::{FeatureColumn, FlagExtractor};

/// Marketing phrases counted by [`SpamWordFlag`].
pub const SPAM_WORDS: &[&str] = &[
    "urgent",
    "exclusive",
    "limited time",
    "free",
    "guaranteed",
    "act now",
    "discount",
    "special offer",
    "prize",
    "instant",
    "cash",
    "save",
    "win",
    "best",
    "secret",
    "incredible",
    "congratulations",
    "approved",
    "risk free",
    "hidden",
    "bonus",
    "sale",
    "amazing",
    "extra cash",
    "opportunity",
    "easy",
    "double your",
    "best price",
    "cash back",
    "deal",
    "earn",
    "money",
    "no obligation",
    "profit",
    "results",
    "exciting",
    "unbelievable",
    "jackpot",
    "fantastic",
    "instant access",
    "million dollars",
    "discounted",
    "last chance",
    "exclusive offer",
    "big savings",
    "limited offer",
    "free trial",
    "special promotion",
    "secret revealed",
    "valuable",
    "money-back guarantee",
    "lowest price",
    "save money",
    "make money",
    "no risk",
    "exclusive deal",
    "limited supply",
    "huge",
    "incredible offer",
    "prize winner",
    "earn extra income",
    "limited spots",
    "new offer",
    "best deal",
    "don't miss out",
    "great savings",
    "top offer",
    "double your income",
    "discount code",
    "fast cash",
    "top-rated",
    "best value",
    "no cost",
    "elite",
    "act fast",
    "unbeatable",
    "cash prize",
    "limited availability",
    "special discount",
    "quick cash",
    "no catch",
    "instant approval",
    "big discount",
    "easy money",
    "insider",
    "invitation",
    "free shipping",
    "huge discount",
    "extra income",
    "secret formula",
    "no strings attached",
    "money-making",
    "dream come true",
    "massive",
    "free gift",
    "incredible opportunity",
    "risk-free trial",
    "instant money",
    "special price",
    "no purchase necessary",
    "now",
];

/// Counts spam-word occurrences.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpamWordFlag {
    matching: SpamWordMatching,
}

impl SpamWordFlag {
    pub fn new(matching: SpamWordMatching) -> Self {
        SpamWordFlag { matching }
    }

    pub fn matching(&self) -> SpamWordMatching {
        self.matching
    }

    fn count_phrases(text: &str) -> usize {
        SPAM_WORDS
            .iter()
            .map(|phrase| text.matches(phrase).count())
            .sum()
    }
}

impl FlagExtractor for SpamWordFlag {
    fn column(&self) -> FeatureColumn {
        FeatureColumn::SpamWord
    }

    fn count(&self, text: &str) -> usize {
        match self.matching {
            SpamWordMatching::CaseSensitive => Self::count_phrases(text),
            SpamWordMatching::CaseInsensitive => Self::count_phrases(&text.to_lowercase()),
        }
    }

    fn name(&self) -> &'static str {
        "spam_word"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list() {
        assert_eq!(SPAM_WORDS.len(), 101);
        assert_eq!(SPAM_WORDS.last(), Some(&"now"));
        assert!(SPAM_WORDS.iter().all(|w| w.to_lowercase() == *w));
    }

    #[test]
    fn test_overlapping_phrases() {
        let flag = SpamWordFlag::default();
        // "free", "free trial", "trial" is not listed
        assert_eq!(flag.count("start your free trial"), 2);
        assert_eq!(flag.count("free free"), 2);
        assert_eq!(flag.count("I knew"), 0);
        assert_eq!(flag.count("I know"), 1);
        assert_eq!(flag.count("well known"), 1);
    }

    #[test]
    fn test_case_sensitive_by_default() {
        let flag = SpamWordFlag::default();
        assert_eq!(flag.count("FREE CASH"), 0);
        assert_eq!(flag.count("Win 00 now"), 1);
    }

    #[test]
    fn test_case_insensitive() {
        let flag = SpamWordFlag::new(SpamWordMatching::CaseInsensitive);
        assert_eq!(flag.matching(), SpamWordMatching::CaseInsensitive);
        assert_eq!(flag.count("FREE CASH"), 2);
        assert_eq!(flag.count("Win 00 now"), 2);
    }
}
