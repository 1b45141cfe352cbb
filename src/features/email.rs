use crate::features::patterns::{EMAIL, count_matches};
use crate::features::{FeatureColumn, FlagExtractor};

/// Counts `word@word.word` addresses.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailFlag;

impl EmailFlag {
    pub fn new() -> Self {
        EmailFlag
    }
}

impl FlagExtractor for EmailFlag {
    fn column(&self) -> FeatureColumn {
        FeatureColumn::Email
    }

    fn count(&self, text: &str) -> usize {
        count_matches(&EMAIL, text)
    }

    fn name(&self) -> &'static str {
        "email"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_count() {
        let flag = EmailFlag::new();
        assert_eq!(flag.count("contact me@x.com"), 1);
        assert_eq!(flag.count("a@b.cc or c@d.ee"), 2);
        assert_eq!(flag.count("@handle on twitter"), 0);
    }
}
