//! Emoji flag.
//!
//! Counts code points from a curated set of 60 emoji common in promotional
//! messages. Under [`EmojiMatching::Legacy`] the ASCII pipe `|` is counted
//! as well, reproducing the character class that existing models were
//! trained with.

use crate::config::EmojiMatching;
use crate::features::{FeatureColumn, FlagExtractor};

/// The curated emoji, one code point each.
pub const PROMOTIONAL_EMOJI: [char; 60] = [
    '\u{1F4AD}', '\u{1F51D}', '\u{1F197}', '\u{1F389}', '\u{1F38A}', '\u{1F4EF}',
    '\u{1F64C}', '\u{1F602}', '\u{1F4B8}', '\u{1F449}', '\u{1F4E2}', '\u{1F680}',
    '\u{1F4B2}', '\u{1F4A3}', '\u{1F531}', '\u{1F4BC}', '\u{1F199}', '\u{23F3}',
    '\u{2728}', '\u{1F48C}', '\u{1F48E}', '\u{1F195}', '\u{1F51E}', '\u{1F4A1}',
    '\u{1F4B0}', '\u{1F451}', '\u{2B50}', '\u{1F31F}', '\u{1F3A4}', '\u{26A1}',
    '\u{1F4C8}', '\u{1F4B5}', '\u{1F3C6}', '\u{1F4AA}', '\u{1F513}', '\u{1F193}',
    '\u{1F3B0}', '\u{231A}', '\u{1F6A8}', '\u{1F4A2}', '\u{1F4EE}', '\u{1F525}',
    '\u{1F388}', '\u{1F3A5}', '\u{1F514}', '\u{1F4AF}', '\u{1F3B6}', '\u{1F517}',
    '\u{1F381}', '\u{1F4DA}', '\u{1F50A}', '\u{1F44D}', '\u{1F44F}', '\u{1F4F1}',
    '\u{1F4DD}', '\u{1F911}', '\u{1F3C5}', '\u{1F512}', '\u{1F4E3}', '\u{1F4A5}',
];

const LEGACY_SEPARATOR: char = '|';

/// Counts curated emoji code points.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmojiFlag {
    matching: EmojiMatching,
}

impl EmojiFlag {
    pub fn new(matching: EmojiMatching) -> Self {
        EmojiFlag { matching }
    }

    pub fn matching(&self) -> EmojiMatching {
        self.matching
    }

    /// Whether a single code point is counted under this matching mode.
    pub fn is_counted(&self, ch: char) -> bool {
        if ch == LEGACY_SEPARATOR {
            return self.matching == EmojiMatching::Legacy;
        }
        PROMOTIONAL_EMOJI.contains(&ch)
    }
}

impl FlagExtractor for EmojiFlag {
    fn column(&self) -> FeatureColumn {
        FeatureColumn::Emoji
    }

    fn count(&self, text: &str) -> usize {
        text.chars().filter(|&ch| self.is_counted(ch)).count()
    }

    fn name(&self) -> &'static str {
        "emoji"
    }
}
