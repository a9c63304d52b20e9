use std::path::PathBuf;

use locwrap_i18n::I18nError;
use locwrap_text::{PolicyError, WrapError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("wrap policy error: {0}")]
    Policy(#[from] PolicyError),

    #[error("translation error: {0}")]
    I18n(#[from] I18nError),

    #[error("wrap failed: {0}")]
    Wrap(#[from] WrapError),

    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("required path does not exist: {path}")]
    MissingPath { path: PathBuf },

    #[error("no translation for {target}:{key}")]
    NotFound { target: String, key: String },
}

impl CliError {
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument { .. }
            | Self::Policy(PolicyError::Validation(_))
            | Self::I18n(I18nError::UnknownCategory(_)) => 2,
            _ => 1,
        }
    }

    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}
