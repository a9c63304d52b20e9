#![forbid(unsafe_code)]

//! Markup-aware tokenization.
//!
//! Localized strings carry rich-text tags such as `<color=#f00>` or `</b>`
//! inline with prose. [`tokenize`] splits a paragraph into [`Unit`]s so the
//! line filler can treat each tag as one zero-width, unbreakable piece.
//!
//! Only the minimal `<...>` shape is recognised: a tag runs from `<` to the
//! next `>`. Nothing inside is parsed. A `<` with no closing `>` before the
//! end of the input is not a tag; the rest of the input is kept as one
//! literal run and measured at full width.
//!
//! Tokenization is lossless: the units of a paragraph concatenate back to
//! the paragraph exactly.
//!
//! # Example
//!
//! ```
//! use locwrap_text::BreakSet;
//! use locwrap_text::markup::{Unit, tokenize};
//!
//! let units: Vec<_> = tokenize("Hit <b>hard</b>!", &BreakSet::default()).collect();
//! assert_eq!(
//!     units,
//!     vec![
//!         Unit::Literal("Hit"),
//!         Unit::BreakChar(' '),
//!         Unit::Tag("<b>"),
//!         Unit::Literal("hard"),
//!         Unit::Tag("</b>"),
//!         Unit::BreakChar('!'),
//!     ]
//! );
//! ```

use std::fmt;
use std::iter::FusedIterator;

use crate::break_set::BreakSet;

const TAG_OPEN: char = '<';
const TAG_CLOSE: char = '>';

/// One atomic piece of a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit<'a> {
    /// Ordinary characters, with no break character or tag inside.
    ///
    /// Also used for the tail of an unterminated tag, which may contain
    /// anything.
    Literal(&'a str),
    /// A single break character.
    BreakChar(char),
    /// A whole `<...>` tag, delimiters included.
    Tag(&'a str),
}

impl Unit<'_> {
    /// Width this unit contributes to a line, in code points.
    ///
    /// Tags are zero-width.
    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        match self {
            Self::Literal(text) => text.chars().count(),
            Self::BreakChar(_) => 1,
            Self::Tag(_) => 0,
        }
    }

    /// Append this unit's text to `out`.
    #[inline]
    pub fn push_to(&self, out: &mut String) {
        match self {
            Self::Literal(text) | Self::Tag(text) => out.push_str(text),
            Self::BreakChar(c) => out.push(*c),
        }
    }

    /// Length of this unit's text in bytes.
    #[inline]
    #[must_use]
    pub fn byte_len(&self) -> usize {
        match self {
            Self::Literal(text) | Self::Tag(text) => text.len(),
            Self::BreakChar(c) => c.len_utf8(),
        }
    }

    #[inline]
    #[must_use]
    pub fn is_tag(&self) -> bool {
        matches!(self, Self::Tag(_))
    }
}

impl fmt::Display for Unit<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) | Self::Tag(text) => f.write_str(text),
            Self::BreakChar(c) => write!(f, "{c}"),
        }
    }
}

/// Lazy iterator over the [`Unit`]s of a paragraph.
///
/// Created by [`tokenize`].
#[derive(Debug, Clone)]
pub struct Tokens<'a, 'b> {
    rest: &'a str,
    breaks: &'b BreakSet,
}

/// Split `paragraph` into units using `breaks` as the break characters.
///
/// `<` always opens a tag when a `>` follows it, even if `<` is also in
/// `breaks`. A `>` outside a tag is a break character when `breaks`
/// contains it and literal text otherwise.
#[must_use]
pub fn tokenize<'a, 'b>(paragraph: &'a str, breaks: &'b BreakSet) -> Tokens<'a, 'b> {
    Tokens {
        rest: paragraph,
        breaks,
    }
}

impl<'a> Tokens<'a, '_> {
    /// The input not yet consumed.
    #[must_use]
    pub fn remainder(&self) -> &'a str {
        self.rest
    }

    fn literal_end(&self, rest: &str) -> usize {
        rest.char_indices()
            .skip(1)
            .find(|&(_, c)| c == TAG_OPEN || self.breaks.contains(c))
            .map_or(rest.len(), |(i, _)| i)
    }
}

impl<'a> Iterator for Tokens<'a, '_> {
    type Item = Unit<'a>;

    fn next(&mut self) -> Option<Unit<'a>> {
        let rest = self.rest;
        let first = rest.chars().next()?;

        let unit = if first == TAG_OPEN {
            match rest.find(TAG_CLOSE) {
                Some(close) => Unit::Tag(&rest[..=close]),
                // Unterminated: keep everything as text.
                None => Unit::Literal(rest),
            }
        } else if self.breaks.contains(first) {
            Unit::BreakChar(first)
        } else {
            Unit::Literal(&rest[..self.literal_end(rest)])
        };

        self.rest = &rest[unit.byte_len()..];
        Some(unit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.rest.is_empty() {
            (0, Some(0))
        } else {
            (1, Some(self.rest.len()))
        }
    }
}

impl FusedIterator for Tokens<'_, '_> {}

/// Visible width of `text` in code points, not counting well-formed tags.
///
/// An unterminated tag counts at full width, matching how the line filler
/// measures it.
#[must_use]
pub fn visible_width(text: &str) -> usize {
    let no_breaks = BreakSet::empty();
    tokenize(text, &no_breaks).map(|unit| unit.width()).sum()
}

/// `text` with every well-formed tag removed.
#[must_use]
pub fn strip_tags(text: &str) -> String {
    let no_breaks = BreakSet::empty();
    let mut out = String::with_capacity(text.len());
    for unit in tokenize(text, &no_breaks).filter(|unit| !unit.is_tag()) {
        unit.push_to(&mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn units(text: &str) -> Vec<Unit<'_>> {
        tokenize(text, &BreakSet::default()).collect()
    }

    fn concat(units: &[Unit<'_>]) -> String {
        let mut out = String::new();
        for unit in units {
            unit.push_to(&mut out);
        }
        out
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(units("").is_empty());
    }

    #[test]
    fn words_and_spaces() {
        assert_eq!(
            units("ab cd"),
            vec![
                Unit::Literal("ab"),
                Unit::BreakChar(' '),
                Unit::Literal("cd")
            ]
        );
    }

    #[test]
    fn consecutive_break_chars_are_separate_units() {
        assert_eq!(
            units("a, b"),
            vec![
                Unit::Literal("a"),
                Unit::BreakChar(','),
                Unit::BreakChar(' '),
                Unit::Literal("b")
            ]
        );
    }

    #[test]
    fn tag_is_atomic_even_with_break_chars_inside() {
        assert_eq!(
            units("<color=red size=1.5>x</color>"),
            vec![
                Unit::Tag("<color=red size=1.5>"),
                Unit::Literal("x"),
                Unit::Tag("</color>")
            ]
        );
    }

    #[test]
    fn tag_flushes_pending_literal() {
        assert_eq!(
            units("ab<i>cd"),
            vec![Unit::Literal("ab"), Unit::Tag("<i>"), Unit::Literal("cd")]
        );
    }

    #[test]
    fn open_bracket_inside_tag_is_content() {
        assert_eq!(units("<a<b>c"), vec![Unit::Tag("<a<b>"), Unit::Literal("c")]);
    }

    #[test]
    fn stray_close_bracket_is_break_char() {
        assert_eq!(
            units("a>b"),
            vec![Unit::Literal("a"), Unit::BreakChar('>'), Unit::Literal("b")]
        );
    }

    #[test]
    fn stray_close_bracket_without_break_is_literal() {
        let breaks = BreakSet::from_chars([' ']);
        let got: Vec<_> = tokenize("a>b c", &breaks).collect();
        assert_eq!(
            got,
            vec![Unit::Literal("a>b"), Unit::BreakChar(' '), Unit::Literal("c")]
        );
    }

    #[test]
    fn unterminated_tag_keeps_remaining_text_as_literal() {
        let text = "ok <unterminated tag, never closed";
        let got = units(text);
        assert_eq!(
            got,
            vec![
                Unit::Literal("ok"),
                Unit::BreakChar(' '),
                Unit::Literal("<unterminated tag, never closed")
            ]
        );
        assert_eq!(concat(&got), text);
    }

    #[test]
    fn multibyte_text_is_sliced_on_char_boundaries() {
        let text = "ดาบ <b>ไฟ</b>…จบ";
        let got = units(text);
        assert_eq!(
            got,
            vec![
                Unit::Literal("ดาบ"),
                Unit::BreakChar(' '),
                Unit::Tag("<b>"),
                Unit::Literal("ไฟ"),
                Unit::Tag("</b>"),
                Unit::BreakChar('…'),
                Unit::Literal("จบ"),
            ]
        );
        assert_eq!(concat(&got), text);
    }

    #[test]
    fn widths() {
        assert_eq!(Unit::Tag("<color=red>").width(), 0);
        assert_eq!(Unit::BreakChar('—').width(), 1);
        assert_eq!(Unit::Literal("x").width(), 1);
        assert_eq!(Unit::Literal("ดาบ").width(), 3);
    }

    #[test]
    fn units_outlive_the_break_set() {
        let text = String::from("a,<b>c");
        let units: Vec<Unit<'_>> = {
            let breaks = BreakSet::from_chars([',']);
            tokenize(&text, &breaks).collect()
        };
        assert_eq!(
            units,
            vec![
                Unit::Literal("a"),
                Unit::BreakChar(','),
                Unit::Tag("<b>"),
                Unit::Literal("c")
            ]
        );
    }

    #[test]
    fn remainder_tracks_progress() {
        let breaks = BreakSet::default();
        let mut tokens = tokenize("ab cd", &breaks);
        assert_eq!(tokens.next(), Some(Unit::Literal("ab")));
        assert_eq!(tokens.remainder(), " cd");
        for _ in tokens.by_ref() {}
        assert_eq!(tokens.remainder(), "");
        assert_eq!(tokens.next(), None);
    }

    #[test]
    fn visible_width_skips_tags() {
        assert_eq!(visible_width("<b>bold</b> text"), 9);
        assert_eq!(visible_width("<open"), 5);
        assert_eq!(visible_width(""), 0);
    }

    #[test]
    fn strip_tags_removes_only_complete_tags() {
        assert_eq!(strip_tags("<b>bold</b> and <i"), "bold and <i");
    }

    #[test]
    fn display_matches_text() {
        assert_eq!(Unit::BreakChar('…').to_string(), "…");
        assert_eq!(Unit::Tag("<b>").to_string(), "<b>");
    }
}
