//! Regular expressions shared by the flag extractors and the scrubber.
//!
//! The patterns are part of the feature contract of trained models and are
//! kept verbatim, quirks included (the URL pattern also matches plain
//! `word.word` pairs, the loose phone pattern overlaps the grouped one).

use std::sync::LazyLock;

use regex::Regex;

/// Currency symbol before or after an amount.
pub const CURRENCY_PATTERN: &str =
    r"([\$₤₨€₹₿]+ *[0-9]* *[\.,]?[0-9]*)|([0-9]* *[\.,]?[0-9]* *[\$₤₨€₹₿]+)";

/// Dollar amounts removed by the scrubber, e.g. `$500`, `$1,000.00$`.
pub const DOLLAR_AMOUNT_PATTERN: &str = r"\$[0-9]*([\.,][0-9]{2})*\$?";

/// Percentages and the literal `T&C`.
pub const PERCENT_OR_TERMS_PATTERN: &str = r"[0-9]*%|T&C";

/// Optional scheme, a 2+ character label, one or two 2+ character suffixes.
pub const URL_PATTERN: &str = r"(https://www\.|http://www\.|https://|http://)?[a-zA-Z0-9]{2,}(\.[a-zA-Z0-9]{2,})(\.[a-zA-Z0-9]{2,})?";

pub const EMAIL_PATTERN: &str = r"\w+@\w+\.\w+";

/// Ten digits with an optional country prefix.
pub const PHONE_LOOSE_PATTERN: &str = r"\+?[0-9]?[0-9]? ?0?[0-9]{10}";

/// 3-3-4 digit groups with optional space or dash separators.
pub const PHONE_GROUPED_PATTERN: &str = r"\+?[0-9]?\d{3}[ -]?\d{3}[ -]?\d{4}";

/// Characters replaced by spaces before stop-word removal.
///
/// `$`, `%`, `+`, `.` and `@` are deliberately absent.
pub const PUNCTUATION: &str = "!\"#&'()*,-/:;<=>?[\\]^_`{|}~";

/// Separator for lemmatization.
pub const NON_WORD_PATTERN: &str = r"\W+";

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in pattern should be valid")
}

pub static CURRENCY: LazyLock<Regex> = LazyLock::new(|| compile(CURRENCY_PATTERN));
pub static DOLLAR_AMOUNT: LazyLock<Regex> = LazyLock::new(|| compile(DOLLAR_AMOUNT_PATTERN));
pub static PERCENT_OR_TERMS: LazyLock<Regex> =
    LazyLock::new(|| compile(PERCENT_OR_TERMS_PATTERN));
pub static URL: LazyLock<Regex> = LazyLock::new(|| compile(URL_PATTERN));
pub static EMAIL: LazyLock<Regex> = LazyLock::new(|| compile(EMAIL_PATTERN));
pub static PHONE_LOOSE: LazyLock<Regex> = LazyLock::new(|| compile(PHONE_LOOSE_PATTERN));
pub static PHONE_GROUPED: LazyLock<Regex> = LazyLock::new(|| compile(PHONE_GROUPED_PATTERN));
pub static PUNCTUATION_CLASS: LazyLock<Regex> =
    LazyLock::new(|| compile(&format!("[{}]", regex::escape(PUNCTUATION))));
pub static NON_WORD: LazyLock<Regex> = LazyLock::new(|| compile(NON_WORD_PATTERN));

/// Number of non-overlapping matches.
pub fn count_matches(regex: &Regex, text: &str) -> usize {
    regex.find_iter(text).count()
}
