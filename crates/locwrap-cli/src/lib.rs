#![forbid(unsafe_code)]

//! `locwrap` command-line tool.

pub mod cli;
pub mod error;
pub mod logging;
pub mod lookup;
pub mod stats;
pub mod wrap;

pub use cli::{run, run_from_env};
pub use error::{CliError, Result};
