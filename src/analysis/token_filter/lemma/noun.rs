//! Rule-based English noun lemmatizer.
//!
//! Reduces plural nouns to their singular form, the same job a WordNet
//! noun lemmatizer does with its default part of speech. Without a
//! dictionary to validate candidates, the suffix rules are guarded by an
//! irregular-form table and a list of words that only look plural.
//!
//! # Rules
//!
//! Applied to lowercase ASCII words, first match wins:
//!
//! 1. irregular table (`children` → `child`, `knives` → `knife`, `ads` → `ad`)
//! 2. words of three characters or fewer, invariant words and `-ss`, `-us`, `-is` endings stay as they are
//! 3. `-sses` → `-ss`, `-ies` → `-y`, `-xes` → `-x`, `-shes` → `-sh`,
//!    `-tches`/`-rches`/`-nches`/`-eaches`/`-oaches` drop `-es`,
//!    long `-oes` drops `-es`
//! 4. any other trailing `s` is dropped
//!
//! # Examples
//!
//! ```
//! use spamlens::analysis::token_filter::lemma::Lemmatizer;
//! use spamlens::analysis::token_filter::lemma::noun::NounLemmatizer;
//!
//! let lemmatizer = NounLemmatizer::new();
//! assert_eq!(lemmatizer.lemmatize("prizes"), "prize");
//! assert_eq!(lemmatizer.lemmatize("opportunities"), "opportunity");
//! assert_eq!(lemmatizer.lemmatize("bonus"), "bonus");
//! ```

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use super::Lemmatizer;

const IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("children", "child"),
    ("women", "woman"),
    ("mice", "mouse"),
    ("geese", "goose"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("oxen", "ox"),
    ("men", "man"),
    ("ads", "ad"),
    ("ids", "id"),
    ("goes", "go"),
    ("noes", "no"),
    ("knives", "knife"),
    ("wives", "wife"),
    ("lives", "life"),
    ("leaves", "leaf"),
    ("halves", "half"),
    ("wolves", "wolf"),
    ("shelves", "shelf"),
    ("thieves", "thief"),
    ("loaves", "loaf"),
    ("calves", "calf"),
    ("bonuses", "bonus"),
    ("viruses", "virus"),
    ("campuses", "campus"),
    ("statuses", "status"),
    ("buses", "bus"),
    ("gases", "gas"),
    ("movies", "movie"),
    ("cookies", "cookie"),
    ("calories", "calorie"),
    ("zombies", "zombie"),
    ("rookies", "rookie"),
    ("freebies", "freebie"),
    ("selfies", "selfie"),
    ("smoothies", "smoothie"),
    ("indices", "index"),
    ("matrices", "matrix"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
    ("analyses", "analysis"),
    ("crises", "crisis"),
    ("theses", "thesis"),
];

const INVARIANT_WORDS: &[&str] = &[
    "news",
    "series",
    "species",
    "always",
    "perhaps",
    "sometimes",
    "thanks",
    "whereas",
    "towards",
    "afterwards",
    "besides",
    "ethics",
    "physics",
    "mathematics",
    "economics",
    "politics",
    "headquarters",
    "canvas",
    "atlas",
    "alias",
    "christmas",
    "vegas",
];

static IRREGULAR_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| IRREGULAR_PLURALS.iter().copied().collect());

static INVARIANT_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| INVARIANT_WORDS.iter().copied().collect());

/// English noun lemmatizer driven by suffix rules.
#[derive(Debug, Clone, Default)]
pub struct NounLemmatizer;

impl NounLemmatizer {
    /// Create a new noun lemmatizer.
    pub fn new() -> Self {
        NounLemmatizer
    }

    fn strip(word: &str, suffix_len: usize, replacement: &str) -> String {
        format!("{}{replacement}", &word[..word.len() - suffix_len])
    }
}

impl Lemmatizer for NounLemmatizer {
    fn lemmatize(&self, word: &str) -> String {
        if let Some(lemma) = IRREGULAR_MAP.get(word) {
            return (*lemma).to_string();
        }

        if word.len() <= 3 || !word.bytes().all(|b| b.is_ascii_lowercase()) {
            return word.to_string();
        }

        if INVARIANT_SET.contains(word)
            || word.ends_with("ss")
            || word.ends_with("us")
            || word.ends_with("is")
            || !word.ends_with('s')
        {
            return word.to_string();
        }

        if word.ends_with("sses") {
            return Self::strip(word, 2, "");
        }
        if word.ends_with("ies") && word.len() > 4 {
            return Self::strip(word, 3, "y");
        }
        if word.ends_with("xes") || word.ends_with("shes") {
            return Self::strip(word, 2, "");
        }
        if ["tches", "rches", "nches", "eaches", "oaches"]
            .iter()
            .any(|suffix| word.ends_with(suffix))
        {
            return Self::strip(word, 2, "");
        }
        if word.ends_with("oes") && word.len() > 5 {
            return Self::strip(word, 2, "");
        }

        Self::strip(word, 1, "")
    }

    fn name(&self) -> &'static str {
        "noun"
    }
}
