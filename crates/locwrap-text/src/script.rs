#![forbid(unsafe_code)]

//! Unicode script classification for break-set selection.
//!
//! Translated strings arrive in many writing systems, and each one marks
//! word and clause boundaries differently: Latin text breaks at spaces and
//! ASCII punctuation, Thai runs words together and relies on a handful of
//! script-specific marks, CJK text uses full-width punctuation. This module
//! classifies characters by block range so that [`crate::BreakSet::detect`]
//! can pick the right preset for a string.
//!
//! Characters inside well-formed `<...>` tags are ignored when detecting the
//! dominant script, since tag names and attributes are always ASCII and would
//! otherwise drown out short translations.
//!
//! # Example
//!
//! ```
//! use locwrap_text::script::{Script, dominant_script};
//!
//! assert_eq!(dominant_script("<b>สวัสดี</b> world"), Script::Thai);
//! assert_eq!(dominant_script("Hello, world"), Script::Latin);
//! assert_eq!(dominant_script("1234 !?"), Script::Common);
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// Script enum
// ---------------------------------------------------------------------------

/// Unicode script classification.
///
/// Only the scripts that select a distinct break preset get their own
/// variant. Everything else with a specific script is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Script {
    /// Script-neutral: spaces, digits, basic punctuation, symbols.
    Common = 0,
    /// Combining marks that inherit the base character's script.
    Inherited,
    /// Latin script.
    Latin,
    /// Thai script.
    Thai,
    /// Lao script.
    Lao,
    /// CJK Unified Ideographs.
    Han,
    /// Hiragana (Japanese).
    Hiragana,
    /// Katakana (Japanese).
    Katakana,
    /// Hangul (Korean).
    Hangul,
    /// Any other specific script (Cyrillic, Arabic, Devanagari, ...).
    Other,
}

impl Script {
    /// Whether this is a "weak" script that carries no language signal.
    #[inline]
    pub const fn is_common_or_inherited(self) -> bool {
        matches!(self, Script::Common | Script::Inherited)
    }

    /// Whether this script writes words without separating spaces.
    #[inline]
    pub const fn is_unspaced(self) -> bool {
        matches!(
            self,
            Script::Thai | Script::Lao | Script::Han | Script::Hiragana | Script::Katakana
        )
    }

    /// Whether this script belongs to the CJK family.
    #[inline]
    pub const fn is_cjk(self) -> bool {
        matches!(
            self,
            Script::Han | Script::Hiragana | Script::Katakana | Script::Hangul
        )
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Common => "common",
            Self::Inherited => "inherited",
            Self::Latin => "latin",
            Self::Thai => "thai",
            Self::Lao => "lao",
            Self::Han => "han",
            Self::Hiragana => "hiragana",
            Self::Katakana => "katakana",
            Self::Hangul => "hangul",
            Self::Other => "other",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// Character-to-script detection
// ---------------------------------------------------------------------------

/// Classify a character's Unicode script via block-range lookup.
#[inline]
pub fn char_script(c: char) -> Script {
    let cp = c as u32;
    match cp {
        0x0000..=0x0040 => Script::Common, // controls, space, digits, ASCII punctuation
        0x0041..=0x005A => Script::Latin,  // A-Z
        0x005B..=0x0060 => Script::Common, // [ \ ] ^ _ `
        0x0061..=0x007A => Script::Latin,  // a-z
        0x007B..=0x00BF => Script::Common, // { | } ~ DEL, Latin-1 punctuation
        0x00C0..=0x00D6 => Script::Latin,
        0x00D7 => Script::Common, // ×
        0x00D8..=0x00F6 => Script::Latin,
        0x00F7 => Script::Common, // ÷
        0x00F8..=0x02AF => Script::Latin, // Latin Extended-A/B, IPA
        0x02B0..=0x02FF => Script::Common, // spacing modifier letters
        0x0300..=0x036F => Script::Inherited, // combining diacritics

        // Thai
        0x0E00..=0x0E7F => Script::Thai,
        // Lao
        0x0E80..=0x0EFF => Script::Lao,

        0x1E00..=0x1EFF => Script::Latin, // Latin Extended Additional

        // Hangul
        0x1100..=0x11FF => Script::Hangul,
        0x3130..=0x318F => Script::Hangul,
        0xA960..=0xA97F => Script::Hangul,
        0xAC00..=0xD7FF => Script::Hangul,

        0x20D0..=0x20FF => Script::Inherited, // combining marks for symbols
        0x2000..=0x2BFF => Script::Common,    // general punctuation through arrows/symbols

        // CJK punctuation is shared across CJK scripts.
        0x3000..=0x303F => Script::Common,
        0x3040..=0x309F => Script::Hiragana,
        0x30A0..=0x30FF => Script::Katakana,
        0x31F0..=0x31FF => Script::Katakana,
        0x2E80..=0x2FDF => Script::Han,
        0x3400..=0x4DBF => Script::Han,
        0x4E00..=0x9FFF => Script::Han,
        0xF900..=0xFAFF => Script::Han,
        0x20000..=0x3134F => Script::Han,

        0xFE00..=0xFE0F => Script::Inherited, // variation selectors
        0xFF01..=0xFF0F => Script::Common,   // full-width punctuation
        0xFF1A..=0xFF20 => Script::Common,
        0xFF21..=0xFF3A => Script::Latin,
        0xFF41..=0xFF5A => Script::Latin,
        0xFF61..=0xFF64 => Script::Common, // halfwidth CJK punctuation
        0xFF65..=0xFF9F => Script::Katakana,

        _ if c.is_whitespace() || c.is_ascii_punctuation() => Script::Common,
        _ if c.is_alphabetic() => Script::Other,
        _ => Script::Common,
    }
}

/// Most frequent specific script among the characters of `text` that lie
/// outside well-formed `<...>` tags.
///
/// Returns [`Script::Common`] when the text has no script-bearing
/// characters. Ties resolve to the script seen first.
pub fn dominant_script(text: &str) -> Script {
    // Indexed by `Script as usize`.
    let mut counts = [0usize; 10];
    let mut first_seen = [usize::MAX; 10];
    let last_close = text.rfind('>');
    let mut in_tag = false;

    for (i, (byte, c)) in text.char_indices().enumerate() {
        if in_tag {
            if c == '>' {
                in_tag = false;
            }
            continue;
        }
        if c == '<' && last_close.is_some_and(|close| close > byte) {
            in_tag = true;
            continue;
        }
        let script = char_script(c);
        if script.is_common_or_inherited() {
            continue;
        }
        let slot = script as usize;
        counts[slot] += 1;
        if first_seen[slot] == usize::MAX {
            first_seen[slot] = i;
        }
    }

    ALL_SCRIPTS
        .iter()
        .copied()
        .filter(|s| counts[*s as usize] > 0)
        .max_by(|a, b| {
            counts[*a as usize]
                .cmp(&counts[*b as usize])
                .then(first_seen[*b as usize].cmp(&first_seen[*a as usize]))
        })
        .unwrap_or(Script::Common)
}

const ALL_SCRIPTS: [Script; 10] = [
    Script::Common,
    Script::Inherited,
    Script::Latin,
    Script::Thai,
    Script::Lao,
    Script::Han,
    Script::Hiragana,
    Script::Katakana,
    Script::Hangul,
    Script::Other,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_letters_are_latin() {
        assert_eq!(char_script('a'), Script::Latin);
        assert_eq!(char_script('Z'), Script::Latin);
        assert_eq!(char_script('é'), Script::Latin);
    }

    #[test]
    fn ascii_punctuation_is_common() {
        for c in [' ', ',', '.', '<', '>', '1', '!'] {
            assert_eq!(char_script(c), Script::Common, "{c:?}");
        }
    }

    #[test]
    fn thai_and_lao_blocks() {
        assert_eq!(char_script('ก'), Script::Thai);
        assert_eq!(char_script('ๆ'), Script::Thai);
        assert_eq!(char_script('ກ'), Script::Lao);
    }

    #[test]
    fn cjk_family() {
        assert_eq!(char_script('漢'), Script::Han);
        assert_eq!(char_script('ひ'), Script::Hiragana);
        assert_eq!(char_script('カ'), Script::Katakana);
        assert_eq!(char_script('한'), Script::Hangul);
        assert_eq!(char_script('、'), Script::Common);
        assert!(Script::Hangul.is_cjk());
        assert!(!Script::Hangul.is_unspaced());
    }

    #[test]
    fn other_alphabets_fall_into_other() {
        assert_eq!(char_script('Ж'), Script::Other);
        assert_eq!(char_script('م'), Script::Other);
    }

    #[test]
    fn combining_marks_are_inherited() {
        assert_eq!(char_script('\u{0301}'), Script::Inherited);
    }

    #[test]
    fn dominant_ignores_tag_contents() {
        let text = "<color=#ff0000 size=large>ดาบ</color>";
        assert_eq!(dominant_script(text), Script::Thai);
    }

    #[test]
    fn dominant_counts_unterminated_tag_text() {
        assert_eq!(dominant_script("<abc"), Script::Latin);
    }

    #[test]
    fn dominant_of_empty_is_common() {
        assert_eq!(dominant_script(""), Script::Common);
        assert_eq!(dominant_script("<b></b>"), Script::Common);
    }

    #[test]
    fn dominant_tie_prefers_first_seen() {
        assert_eq!(dominant_script("ab กข"), Script::Latin);
        assert_eq!(dominant_script("กข ab"), Script::Thai);
    }

    #[test]
    fn display_names() {
        assert_eq!(Script::Thai.to_string(), "thai");
        assert_eq!(Script::Han.to_string(), "han");
    }
}
