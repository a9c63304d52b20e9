#![forbid(unsafe_code)]

//! Wrap policies as data.
//!
//! A [`WrapPolicy`] captures the tunable parts of wrapping (line budget,
//! script preset, break-set adjustments) so they can be shipped next to a
//! translation pack instead of being compiled in.
//!
//! # Loading
//!
//! ```toml
//! # wrap-policy.toml
//! max_line_width = 48
//! script = "thai"
//! extra_breaks = "|"
//! removed_breaks = "'"
//! ```
//!
//! ```rust,ignore
//! let policy = WrapPolicy::from_toml_file("wrap-policy.toml")?;
//! let config = policy.try_into_config(sample_text)?;
//! ```
//!
//! Every field has a default, so `WrapPolicy::default()` resolves to
//! [`WrapConfig::default`] for Latin text.

#[cfg(feature = "policy-config")]
use std::path::Path;
use std::str::FromStr;

#[cfg(feature = "policy-config")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::break_set::BreakSet;
use crate::script::{Script, dominant_script};
use crate::wrap::{DEFAULT_MAX_LINE_WIDTH, WrapConfig};

/// Which break preset a policy selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "policy-config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "policy-config", serde(rename_all = "lowercase"))]
pub enum ScriptChoice {
    /// Detect from the text being wrapped.
    #[default]
    Auto,
    Latin,
    Thai,
    Cjk,
}

impl ScriptChoice {
    /// The break set this choice resolves to for `sample`.
    #[must_use]
    pub fn break_set(self, sample: &str) -> BreakSet {
        match self {
            Self::Auto => BreakSet::detect(sample),
            Self::Latin => BreakSet::for_script(Script::Latin),
            Self::Thai => BreakSet::for_script(Script::Thai),
            Self::Cjk => BreakSet::for_script(Script::Han),
        }
    }

    /// The fixed preset this choice stands for when wrapping `sample`.
    ///
    /// Only [`ScriptChoice::Auto`] looks at `sample`; it never resolves to
    /// itself.
    #[must_use]
    pub fn resolve(self, sample: &str) -> Self {
        match self {
            Self::Auto => match dominant_script(sample) {
                Script::Thai | Script::Lao => Self::Thai,
                script if script.is_cjk() => Self::Cjk,
                _ => Self::Latin,
            },
            fixed => fixed,
        }
    }
}

impl FromStr for ScriptChoice {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "latin" => Ok(Self::Latin),
            "thai" => Ok(Self::Thai),
            "cjk" => Ok(Self::Cjk),
            other => Err(PolicyError::Validation(vec![format!(
                "unknown script {other:?} (expected auto, latin, thai or cjk)"
            )])),
        }
    }
}

/// Serializable wrap configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "policy-config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "policy-config", serde(default))]
pub struct WrapPolicy {
    /// Line budget in code points.
    pub max_line_width: usize,
    /// Break preset.
    pub script: ScriptChoice,
    /// Characters added to the preset.
    pub extra_breaks: String,
    /// Characters removed from the preset.
    pub removed_breaks: String,
}

impl Default for WrapPolicy {
    fn default() -> Self {
        Self {
            max_line_width: DEFAULT_MAX_LINE_WIDTH,
            script: ScriptChoice::Auto,
            extra_breaks: String::new(),
            removed_breaks: String::new(),
        }
    }
}

impl WrapPolicy {
    /// Load from a TOML string.
    #[cfg(feature = "policy-config")]
    pub fn from_toml_str(s: &str) -> Result<Self, PolicyError> {
        Ok(toml::from_str(s)?)
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "policy-config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, PolicyError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "policy-config")]
    pub fn from_json_str(s: &str) -> Result<Self, PolicyError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "policy-config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, PolicyError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Validate the policy.
    ///
    /// Returns a list of problems. An empty list means the policy is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.max_line_width == 0 {
            errors.push("max_line_width must be > 0".into());
        }

        for c in self.extra_breaks.chars() {
            if self.removed_breaks.contains(c) {
                errors.push(format!(
                    "{c:?} is listed in both extra_breaks and removed_breaks"
                ));
            }
        }

        if self.extra_breaks.contains('\n') {
            errors.push("extra_breaks must not contain a newline".into());
        }

        errors
    }

    /// Resolve into a [`WrapConfig`] without validating.
    ///
    /// `sample` is only consulted when `script` is [`ScriptChoice::Auto`].
    #[must_use]
    pub fn to_config(&self, sample: &str) -> WrapConfig {
        let breaks = self
            .script
            .break_set(sample)
            .with(self.extra_breaks.chars())
            .without(self.removed_breaks.chars());
        WrapConfig::new(self.max_line_width).with_breaks(breaks)
    }

    /// Validate, then resolve into a [`WrapConfig`].
    pub fn try_into_config(&self, sample: &str) -> Result<WrapConfig, PolicyError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self.to_config(sample))
        } else {
            Err(PolicyError::Validation(errors))
        }
    }
}

/// Errors from loading or validating a [`WrapPolicy`].
#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "policy-config")]
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[cfg(feature = "policy-config")]
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_matches_default_config() {
        let policy = WrapPolicy::default();
        assert!(policy.validate().is_empty());
        assert_eq!(policy.to_config("plain latin text"), WrapConfig::default());
    }

    #[test]
    fn zero_width_is_rejected() {
        let policy = WrapPolicy {
            max_line_width: 0,
            ..WrapPolicy::default()
        };
        let errors = policy.validate();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("max_line_width"));
        assert!(matches!(
            policy.try_into_config(""),
            Err(PolicyError::Validation(_))
        ));
    }

    #[test]
    fn conflicting_break_lists_are_rejected() {
        let policy = WrapPolicy {
            extra_breaks: "|#".into(),
            removed_breaks: "#".into(),
            ..WrapPolicy::default()
        };
        let errors = policy.validate();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("'#'"));
    }

    #[test]
    fn newline_break_is_rejected() {
        let policy = WrapPolicy {
            extra_breaks: "\n".into(),
            ..WrapPolicy::default()
        };
        assert_eq!(policy.validate().len(), 1);
    }

    #[test]
    fn adjustments_apply_to_preset() {
        let policy = WrapPolicy {
            script: ScriptChoice::Thai,
            extra_breaks: "|".into(),
            removed_breaks: "'".into(),
            ..WrapPolicy::default()
        };
        let config = policy.to_config("ignored");
        assert!(config.breaks().contains('ๆ'));
        assert!(config.breaks().contains('|'));
        assert!(!config.breaks().contains('\''));
    }

    #[test]
    fn auto_detects_from_sample() {
        let config = WrapPolicy::default().to_config("การโจมตีรุนแรง");
        assert!(config.breaks().contains('ๆ'));
    }

    #[test]
    fn auto_resolves_to_a_fixed_preset() {
        assert_eq!(ScriptChoice::Auto.resolve("ภาษาไทยนะ"), ScriptChoice::Thai);
        assert_eq!(ScriptChoice::Auto.resolve("日本語のテキスト"), ScriptChoice::Cjk);
        assert_eq!(ScriptChoice::Auto.resolve("plain words"), ScriptChoice::Latin);
        assert_eq!(ScriptChoice::Auto.resolve(""), ScriptChoice::Latin);
        assert_eq!(ScriptChoice::Thai.resolve("plain words"), ScriptChoice::Thai);
        for sample in ["ภาษาไทย", "日本語", "latin"] {
            let resolved = ScriptChoice::Auto.resolve(sample);
            assert_eq!(resolved.break_set(""), ScriptChoice::Auto.break_set(sample));
        }
    }

    #[test]
    fn script_choice_parses_case_insensitively() {
        assert_eq!("Thai".parse::<ScriptChoice>().ok(), Some(ScriptChoice::Thai));
        assert_eq!(" cjk ".parse::<ScriptChoice>().ok(), Some(ScriptChoice::Cjk));
        assert!("klingon".parse::<ScriptChoice>().is_err());
    }

    #[test]
    fn validation_error_display_joins_messages() {
        let error = PolicyError::Validation(vec!["a".into(), "b".into()]);
        assert_eq!(error.to_string(), "validation errors: a; b");
    }

    #[cfg(feature = "policy-config")]
    #[test]
    fn loads_from_toml() {
        let policy = WrapPolicy::from_toml_str(
            "max_line_width = 40\nscript = \"cjk\"\nextra_breaks = \"|\"\n",
        )
        .expect("valid toml");
        assert_eq!(policy.max_line_width, 40);
        assert_eq!(policy.script, ScriptChoice::Cjk);
        assert_eq!(policy.extra_breaks, "|");
        assert_eq!(policy.removed_breaks, "");
    }

    #[cfg(feature = "policy-config")]
    #[test]
    fn loads_partial_json_with_defaults() {
        let policy = WrapPolicy::from_json_str(r#"{"script": "latin"}"#).expect("valid json");
        assert_eq!(policy.max_line_width, DEFAULT_MAX_LINE_WIDTH);
        assert_eq!(policy.script, ScriptChoice::Latin);
    }

    #[cfg(feature = "policy-config")]
    #[test]
    fn rejects_unknown_script_in_toml() {
        let result = WrapPolicy::from_toml_str("script = \"klingon\"");
        assert!(matches!(result, Err(PolicyError::Toml(_))));
    }

    #[cfg(feature = "policy-config")]
    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("policy.toml");
        std::fs::write(&path, "max_line_width = 30\n").expect("write policy");
        let policy = WrapPolicy::from_toml_file(&path).expect("load policy");
        assert_eq!(policy.max_line_width, 30);

        let missing = WrapPolicy::from_toml_file(dir.path().join("missing.toml"));
        assert!(matches!(missing, Err(PolicyError::Io(_))));
    }

    #[cfg(feature = "policy-config")]
    #[test]
    fn round_trips_through_json() {
        let policy = WrapPolicy {
            max_line_width: 33,
            script: ScriptChoice::Thai,
            extra_breaks: "|".into(),
            removed_breaks: String::new(),
        };
        let json = serde_json::to_string(&policy).expect("serialize");
        assert_eq!(WrapPolicy::from_json_str(&json).expect("parse"), policy);
    }
}
