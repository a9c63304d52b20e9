#![forbid(unsafe_code)]

//! Paragraph-preserving, markup-aware wrapping.
//!
//! This is the entry point of the crate. [`wrap`] splits its input on hard
//! newlines, reflows each paragraph with the greedy [`crate::fill`] policy,
//! and joins the paragraphs back with `\n`. The result differs from the
//! input only by the line breaks it inserted (and by dropping the `\r` of
//! `\r\n` terminators).
//!
//! Wrapping is cosmetic, so [`wrap`] never fails: on any internal error it
//! logs a warning and hands back the input untouched. Use [`try_wrap`] to see
//! the error instead.
//!
//! # Example
//! ```
//! use locwrap_text::{WrapConfig, wrap};
//!
//! let config = WrapConfig::new(12);
//! let wrapped = wrap("Deal <color=red>heavy</color> damage to all foes", &config);
//! assert_eq!(wrapped, "Deal <color=red>heavy</color> \ndamage to \nall foes");
//! ```

use thiserror::Error;

use crate::break_set::BreakSet;
use crate::fill::fill_paragraph;
use crate::script::Script;

/// Default line budget in code points.
pub const DEFAULT_MAX_LINE_WIDTH: usize = 55;

/// Immutable wrapping configuration.
///
/// Cheap to clone and safe to share across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapConfig {
    max_line_width: usize,
    breaks: BreakSet,
}

impl WrapConfig {
    /// Default break characters with the given line budget.
    #[must_use]
    pub fn new(max_line_width: usize) -> Self {
        Self {
            max_line_width,
            breaks: BreakSet::default(),
        }
    }

    /// The preset break set for `script`.
    #[must_use]
    pub fn for_script(max_line_width: usize, script: Script) -> Self {
        Self::new(max_line_width).with_breaks(BreakSet::for_script(script))
    }

    /// The preset break set for the dominant script of `sample`.
    #[must_use]
    pub fn detect(max_line_width: usize, sample: &str) -> Self {
        Self::new(max_line_width).with_breaks(BreakSet::detect(sample))
    }

    /// Replace the break set.
    #[must_use]
    pub fn with_breaks(mut self, breaks: BreakSet) -> Self {
        self.breaks = breaks;
        self
    }

    #[inline]
    #[must_use]
    pub fn max_line_width(&self) -> usize {
        self.max_line_width
    }

    #[inline]
    #[must_use]
    pub fn breaks(&self) -> &BreakSet {
        &self.breaks
    }
}

impl Default for WrapConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LINE_WIDTH)
    }
}

/// Why a wrap was abandoned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WrapError {
    #[error("max_line_width must be greater than zero")]
    ZeroWidth,

    #[error("paragraph {paragraph} changed while filling lines")]
    Corrupted { paragraph: usize },
}

/// Wrap `text`, returning it unchanged if anything goes wrong.
#[must_use]
pub fn wrap(text: &str, config: &WrapConfig) -> String {
    match try_wrap(text, config) {
        Ok(wrapped) => wrapped,
        Err(error) => {
            tracing::warn!(
                %error,
                text_len = text.len(),
                max_line_width = config.max_line_width,
                "wrap abandoned, returning text unwrapped"
            );
            text.to_string()
        }
    }
}

/// Wrap `text` with an explicit width and break set.
#[must_use]
pub fn wrap_with(text: &str, max_line_width: usize, breaks: &BreakSet) -> String {
    wrap(text, &WrapConfig::new(max_line_width).with_breaks(breaks.clone()))
}

/// Wrap `text` with the break preset for its own dominant script.
#[must_use]
pub fn wrap_auto(text: &str, max_line_width: usize) -> String {
    wrap(text, &WrapConfig::detect(max_line_width, text))
}

/// Wrap `text` and return its lines.
///
/// Lines from both hard and inserted breaks are returned; a trailing `\r`
/// is stripped from each.
#[must_use]
pub fn wrap_lines(text: &str, config: &WrapConfig) -> Vec<String> {
    wrap(text, config)
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}

/// Wrap `text`, reporting failures instead of hiding them.
///
/// Empty input and input no longer than the line budget are returned
/// verbatim. Each filled paragraph is checked against its source; if
/// removing the inserted breaks does not give the source back,
/// [`WrapError::Corrupted`] is returned.
pub fn try_wrap(text: &str, config: &WrapConfig) -> Result<String, WrapError> {
    let width = config.max_line_width;
    if width == 0 {
        return Err(WrapError::ZeroWidth);
    }
    if text.chars().nth(width).is_none() {
        return Ok(text.to_string());
    }

    let mut out = String::with_capacity(text.len() + text.len() / width + 1);
    let mut paragraphs = 0usize;
    let mut inserted = 0usize;

    for (index, raw) in text.split('\n').enumerate() {
        let paragraph = raw.strip_suffix('\r').unwrap_or(raw);
        if index > 0 {
            out.push('\n');
        }

        let filled = fill_paragraph(paragraph, width, &config.breaks);
        if filled.without_inserted_breaks() != paragraph {
            return Err(WrapError::Corrupted { paragraph: index });
        }

        paragraphs += 1;
        inserted += filled.inserted_breaks().len();
        out.push_str(filled.text());
    }

    tracing::trace!(
        paragraphs,
        inserted_breaks = inserted,
        max_line_width = width,
        "wrapped text"
    );
    Ok(out)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn wrap_only_inserts_newlines(s in "[a-z ,.<>]{0,120}", width in 1usize..40) {
            let wrapped = wrap(&s, &WrapConfig::new(width));
            prop_assert_eq!(wrapped.replace('\n', ""), s);
        }

        #[test]
        fn short_input_is_identity(s in "[a-z <>\n]{0,30}") {
            let width = s.chars().count().max(1);
            prop_assert_eq!(wrap(&s, &WrapConfig::new(width)), s);
        }
    }
}
