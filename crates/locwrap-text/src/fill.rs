#![forbid(unsafe_code)]

//! Greedy line filling over markup units.
//!
//! [`LineFiller`] packs [`Unit`]s left to right into lines of at most
//! `max_line_width` code points. A line break is inserted immediately before
//! the first unit that would overflow a non-empty line. There is no
//! lookahead and no rebalancing.
//!
//! Units are never split. A single literal run wider than the budget sits
//! on its own line and overflows it, which keeps markup intact at the cost
//! of an occasional long line.
//!
//! Tags are zero-width, so they never cause a break by themselves and a tag
//! that follows a full line stays at the end of that line.

use crate::break_set::BreakSet;
use crate::markup::{Unit, tokenize};

/// Line accumulator for one paragraph.
#[derive(Debug, Clone)]
pub struct LineFiller {
    max_line_width: usize,
    current_width: usize,
    output: String,
    inserted: Vec<usize>,
}

impl LineFiller {
    /// Create a filler for lines of at most `max_line_width` code points.
    #[must_use]
    pub fn new(max_line_width: usize) -> Self {
        Self {
            max_line_width,
            current_width: 0,
            output: String::new(),
            inserted: Vec::new(),
        }
    }

    /// Width of the line currently being filled.
    #[inline]
    #[must_use]
    pub fn current_width(&self) -> usize {
        self.current_width
    }

    /// Append one unit, breaking the line first if it would overflow.
    pub fn push(&mut self, unit: Unit<'_>) {
        let width = unit.width();
        if self.current_width > 0 && self.current_width + width > self.max_line_width {
            self.inserted.push(self.output.len());
            self.output.push('\n');
            self.current_width = 0;
        }
        unit.push_to(&mut self.output);
        self.current_width += width;
    }

    /// Finish the paragraph.
    #[must_use]
    pub fn finish(self) -> FilledParagraph {
        FilledParagraph {
            text: self.output,
            inserted: self.inserted,
        }
    }
}

impl<'a> Extend<Unit<'a>> for LineFiller {
    fn extend<I: IntoIterator<Item = Unit<'a>>>(&mut self, units: I) {
        for unit in units {
            self.push(unit);
        }
    }
}

/// A wrapped paragraph and the positions of the breaks the filler added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilledParagraph {
    text: String,
    inserted: Vec<usize>,
}

impl FilledParagraph {
    /// The wrapped text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }

    /// Byte offsets in [`Self::text`] of every inserted `\n`, ascending.
    #[must_use]
    pub fn inserted_breaks(&self) -> &[usize] {
        &self.inserted
    }

    /// Number of lines in the paragraph.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.inserted.len() + 1
    }

    /// The text with only the inserted breaks removed.
    #[must_use]
    pub fn without_inserted_breaks(&self) -> String {
        let mut out = String::with_capacity(self.text.len());
        let mut start = 0;
        for &at in &self.inserted {
            out.push_str(&self.text[start..at]);
            start = at + 1;
        }
        out.push_str(&self.text[start..]);
        out
    }
}

/// Tokenize and fill one paragraph.
#[must_use]
pub fn fill_paragraph(paragraph: &str, max_line_width: usize, breaks: &BreakSet) -> FilledParagraph {
    let mut filler = LineFiller::new(max_line_width);
    filler.extend(tokenize(paragraph, breaks));
    filler.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(text: &str, width: usize) -> String {
        fill_paragraph(text, width, &BreakSet::default()).into_text()
    }

    #[test]
    fn fits_on_one_line() {
        assert_eq!(fill("hello world", 11), "hello world");
    }

    #[test]
    fn breaks_before_overflowing_unit() {
        // "hello" (5) + " " (1) = 6, "world" would make 11 > 10.
        assert_eq!(fill("hello world", 10), "hello \nworld");
    }

    #[test]
    fn break_char_at_boundary_stays_on_line() {
        // "abcd" fills 4; "," makes 5 which still fits.
        assert_eq!(fill("abcd,efg", 5), "abcd,\nefg");
    }

    #[test]
    fn break_char_past_boundary_starts_next_line() {
        assert_eq!(fill("abcde fg", 5), "abcde\n fg");
    }

    #[test]
    fn oversized_literal_is_kept_whole() {
        assert_eq!(fill("a supercalifragilistic b", 5), "a \nsupercalifragilistic\n b");
    }

    #[test]
    fn oversized_literal_first_does_not_emit_empty_line() {
        assert_eq!(fill("supercalifragilistic", 5), "supercalifragilistic");
    }

    #[test]
    fn tags_are_zero_width() {
        let text = "<color=#ff0000>abc</color> <b>de</b>";
        assert_eq!(fill(text, 6), text);
    }

    #[test]
    fn tag_after_full_line_stays_on_that_line() {
        assert_eq!(fill("abcde</b> x", 5), "abcde</b>\n x");
    }

    #[test]
    fn leading_tag_never_breaks() {
        let mut filler = LineFiller::new(3);
        filler.push(Unit::Tag("<i>"));
        assert_eq!(filler.current_width(), 0);
        filler.push(Unit::Literal("abcdef"));
        assert_eq!(filler.finish().text(), "<i>abcdef");
    }

    #[test]
    fn width_counts_code_points() {
        // Thai with combining vowels: each code point counts as one.
        let text = "สวัสดี ครับ";
        assert_eq!(text.chars().count(), 11);
        assert_eq!(fill(text, 7), "สวัสดี \nครับ");
    }

    #[test]
    fn records_inserted_break_offsets() {
        let filled = fill_paragraph("aa bb cc", 3, &BreakSet::default());
        assert_eq!(filled.text(), "aa \nbb \ncc");
        assert_eq!(filled.inserted_breaks(), &[3, 7]);
        assert_eq!(filled.line_count(), 3);
        assert_eq!(filled.without_inserted_breaks(), "aa bb cc");
    }

    #[test]
    fn empty_paragraph() {
        let filled = fill_paragraph("", 10, &BreakSet::default());
        assert_eq!(filled.text(), "");
        assert_eq!(filled.line_count(), 1);
    }

    #[test]
    fn unterminated_tag_is_measured_as_text() {
        assert_eq!(fill("ab <cdefgh", 4), "ab \n<cdefgh");
    }
}
