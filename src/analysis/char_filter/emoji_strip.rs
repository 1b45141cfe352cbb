//! Emoji removal char filter.
//!
//! Works on extended grapheme clusters so that multi-codepoint emoji (ZWJ
//! families, skin-tone modifiers, flags, keycaps) disappear as a whole and
//! do not leave stray joiners or variation selectors behind.

use unicode_segmentation::UnicodeSegmentation;

use super::CharFilter;

/// A char filter that deletes every grapheme cluster that renders as emoji.
#[derive(Clone, Debug, Default)]
pub struct EmojiStripCharFilter;

impl EmojiStripCharFilter {
    /// Create a new emoji strip filter.
    pub fn new() -> Self {
        EmojiStripCharFilter
    }
}

impl CharFilter for EmojiStripCharFilter {
    fn filter(&self, input: &str) -> String {
        input
            .graphemes(true)
            .filter(|grapheme| !is_emoji_grapheme(grapheme))
            .collect()
    }

    fn name(&self) -> &'static str {
        "emoji_strip"
    }
}

/// Whether a grapheme cluster is an emoji, fully qualified or not.
///
/// Membership is decided by the Unicode emoji data bundled with the
/// `emojis` crate. Text-style codepoints such as `©` or `❤` count when the
/// emoji presentation selector would turn them into an emoji.
pub fn is_emoji_grapheme(grapheme: &str) -> bool {
    if emojis::get(grapheme).is_some() {
        return true;
    }

    let bare: String = grapheme
        .chars()
        .filter(|&c| c != VARIATION_SELECTOR_16)
        .collect();
    if bare.is_empty() {
        return false;
    }

    emojis::get(&bare).is_some()
        || emojis::get(&format!("{bare}{VARIATION_SELECTOR_16}")).is_some()
}

const VARIATION_SELECTOR_16: char = '\u{FE0F}';
