#![forbid(unsafe_code)]

//! Break-character sets.
//!
//! A [`BreakSet`] names the characters after or before which a line may be
//! broken. Each break character is kept in the output as its own unit, so
//! choosing a set never changes the text, only where lines may end.
//!
//! Presets are tuned per script; see [`BreakSet::for_script`].

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashSet;

use crate::script::{Script, dominant_script};

/// Break characters shared by every preset.
///
/// Space, comma, period, slash, parentheses, angle brackets, `! ? : ;`,
/// double and single quote, en/em dash, hyphen, guillemets and ellipsis.
pub const DEFAULT_BREAK_CHARS: &[char] = &[
    ' ', ',', '.', '/', '(', ')', '<', '>', '!', '?', ':', ';', '"', '\'', '\u{2013}',
    '\u{2014}', '-', '\u{00AB}', '\u{00BB}', '\u{2039}', '\u{203A}', '\u{2026}',
];

/// Thai and Lao repetition/abbreviation marks and section signs.
pub const THAI_BREAK_CHARS: &[char] = &[
    '\u{0E2F}', // ฯ paiyannoi
    '\u{0E46}', // ๆ mai yamok
    '\u{0E5A}', // ๚ angkhankhu
    '\u{0E5B}', // ๛ khomut
    '\u{0EC6}', // ໆ Lao ko la
    '\u{0EAF}', // ຯ Lao ellipsis
];

/// Ideographic space and full-width CJK punctuation.
pub const CJK_BREAK_CHARS: &[char] = &[
    '\u{3000}', // ideographic space
    '、', '。', '，', '！', '？', '：', '；', '「', '」', '『', '』', '（', '）', '・',
];

/// An immutable set of break characters.
///
/// Cloning is cheap; clones share the same underlying set, so one set can
/// back any number of concurrent wraps.
#[derive(Clone)]
pub struct BreakSet {
    chars: Arc<FxHashSet<char>>,
}

impl BreakSet {
    /// Build a set from an iterator of characters.
    pub fn from_chars(chars: impl IntoIterator<Item = char>) -> Self {
        Self {
            chars: Arc::new(chars.into_iter().collect()),
        }
    }

    /// An empty set. Lines can then only break at tag boundaries.
    #[must_use]
    pub fn empty() -> Self {
        Self::from_chars(std::iter::empty())
    }

    /// The preset for a script.
    ///
    /// Thai and Lao add their own punctuation marks, the CJK family adds the
    /// ideographic space and full-width punctuation. Every other script uses
    /// [`DEFAULT_BREAK_CHARS`].
    #[must_use]
    pub fn for_script(script: Script) -> Self {
        let extra: &[char] = match script {
            Script::Thai | Script::Lao => THAI_BREAK_CHARS,
            s if s.is_cjk() => CJK_BREAK_CHARS,
            _ => &[],
        };
        Self::from_chars(DEFAULT_BREAK_CHARS.iter().chain(extra).copied())
    }

    /// The preset for the dominant script of `text`.
    #[must_use]
    pub fn detect(text: &str) -> Self {
        Self::for_script(dominant_script(text))
    }

    /// A new set with `chars` added.
    #[must_use]
    pub fn with(&self, chars: impl IntoIterator<Item = char>) -> Self {
        let mut chars = chars.into_iter().peekable();
        if chars.peek().is_none() {
            return self.clone();
        }
        let mut set = (*self.chars).clone();
        set.extend(chars);
        Self {
            chars: Arc::new(set),
        }
    }

    /// A new set with `chars` removed.
    #[must_use]
    pub fn without(&self, chars: impl IntoIterator<Item = char>) -> Self {
        let mut chars = chars.into_iter().peekable();
        if chars.peek().is_none() {
            return self.clone();
        }
        let mut set = (*self.chars).clone();
        for c in chars {
            set.remove(&c);
        }
        Self {
            chars: Arc::new(set),
        }
    }

    /// Whether `c` is a break character.
    #[inline]
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The characters in code-point order.
    #[must_use]
    pub fn to_sorted_vec(&self) -> Vec<char> {
        let mut chars: Vec<char> = self.chars.iter().copied().collect();
        chars.sort_unstable();
        chars
    }
}

impl Default for BreakSet {
    fn default() -> Self {
        Self::from_chars(DEFAULT_BREAK_CHARS.iter().copied())
    }
}

impl PartialEq for BreakSet {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.chars, &other.chars) || self.chars == other.chars
    }
}

impl Eq for BreakSet {}

impl fmt::Debug for BreakSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.to_sorted_vec()).finish()
    }
}

impl FromIterator<char> for BreakSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self::from_chars(iter)
    }
}
