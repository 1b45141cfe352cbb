use regex::Regex;

use super::CharFilter;
use crate::error::{Result, SpamlensError};

/// A char filter that replaces every match of a regex pattern.
#[derive(Clone, Debug)]
pub struct PatternReplaceCharFilter {
    pattern: Regex,
    replacement: String,
}

impl PatternReplaceCharFilter {
    /// Create a new pattern replace char filter.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| SpamlensError::analysis(format!("Invalid regex pattern: {e}")))?;
        Ok(Self::from_regex(regex, replacement))
    }

    /// Create a filter from an already compiled regex.
    pub fn from_regex(pattern: Regex, replacement: &str) -> Self {
        Self {
            pattern,
            replacement: replacement.to_string(),
        }
    }

    /// Create a filter that deletes every match.
    pub fn remove(pattern: Regex) -> Self {
        Self::from_regex(pattern, "")
    }

    /// Get the regex pattern used by this filter.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl CharFilter for PatternReplaceCharFilter {
    fn filter(&self, input: &str) -> String {
        // `NoExpand` keeps `$` in replacements literal.
        self.pattern
            .replace_all(input, regex::NoExpand(&self.replacement))
            .into_owned()
    }

    fn name(&self) -> &'static str {
        "pattern_replace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_replace() {
        let filter = PatternReplaceCharFilter::new(r"(\d+)", "NUM").unwrap();
        assert_eq!(filter.filter("Year 2024"), "Year NUM");
    }

    #[test]
    fn test_remove_pattern() {
        let filter = PatternReplaceCharFilter::remove(Regex::new("-").unwrap());
        assert_eq!(filter.filter("123-456-789"), "123456789");
    }

    #[test]
    fn test_replacement_is_literal() {
        let filter = PatternReplaceCharFilter::new("x", "$1").unwrap();
        assert_eq!(filter.filter("axb"), "a$1b");
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(PatternReplaceCharFilter::new("(", "").is_err());
    }
}
