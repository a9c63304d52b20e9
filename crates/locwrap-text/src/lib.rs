#![forbid(unsafe_code)]

//! Markup-aware line wrapping for localized strings.
//!
//! Translated UI text often embeds rich-text tags (`<color=red>`, `</b>`)
//! and may be written in scripts that do not separate words with spaces.
//! This crate reflows such strings to a fixed width budget without ever
//! splitting a tag and without counting tag characters toward the width.
//!
//! # Pipeline
//! ```text
//!   text ──split on \n──▶ paragraph ──tokenize──▶ units ──fill──▶ lines
//!                                                                   │
//!   wrapped ◀──────────────────join with \n─────────────────────────┘
//! ```
//!
//! - [`markup`] splits a paragraph into literal runs, break characters and
//!   whole tags.
//! - [`fill`] greedily packs those units into lines.
//! - [`wrap`](mod@wrap) is the entry point that handles paragraphs and
//!   never fails.
//! - [`script`] and [`break_set`] choose break characters per writing
//!   system.
//! - [`policy`] loads wrap settings from TOML or JSON (with the
//!   `policy-config` feature).
//!
//! Width is the number of Unicode code points. There is no font metric
//! measurement, no bidi handling and no justification.

pub mod break_set;
pub mod fill;
pub mod markup;
pub mod policy;
pub mod script;
pub mod wrap;

pub use break_set::BreakSet;
pub use fill::{FilledParagraph, LineFiller, fill_paragraph};
pub use markup::{Tokens, Unit, strip_tags, tokenize, visible_width};
pub use policy::{PolicyError, ScriptChoice, WrapPolicy};
pub use script::{Script, char_script, dominant_script};
pub use wrap::{
    DEFAULT_MAX_LINE_WIDTH, WrapConfig, WrapError, try_wrap, wrap, wrap_auto, wrap_lines,
    wrap_with,
};
