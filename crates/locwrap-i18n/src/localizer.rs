#![forbid(unsafe_code)]

//! Catalog lookups that come back already wrapped.

use locwrap_text::{PolicyError, ScriptChoice, WrapConfig, WrapPolicy, wrap};

use crate::catalog::{Category, Field, TranslationCatalog};
use crate::key_log::KeyLog;

/// Prefer a non-empty translation over the host's original string.
#[must_use]
pub fn override_or<'a>(original: &'a str, translated: Option<&'a str>) -> &'a str {
    match translated {
        Some(text) if !text.is_empty() => text,
        _ => original,
    }
}

/// A [`TranslationCatalog`] paired with the wrap policy for its strings.
///
/// The break preset is resolved per string, so a policy with
/// [`ScriptChoice::Auto`] wraps Thai entries with Thai breaks and Latin
/// entries with Latin ones.
#[derive(Debug)]
pub struct Localizer {
    catalog: TranslationCatalog,
    policy: WrapPolicy,
    configs: PresetConfigs,
    key_log: KeyLog,
}

/// One resolved config per fixed preset, built once from the policy.
#[derive(Debug)]
struct PresetConfigs {
    latin: WrapConfig,
    thai: WrapConfig,
    cjk: WrapConfig,
}

impl PresetConfigs {
    fn new(policy: &WrapPolicy) -> Self {
        let build = |script| {
            WrapPolicy {
                script,
                ..policy.clone()
            }
            .to_config("")
        };
        Self {
            latin: build(ScriptChoice::Latin),
            thai: build(ScriptChoice::Thai),
            cjk: build(ScriptChoice::Cjk),
        }
    }

    fn get(&self, choice: ScriptChoice) -> &WrapConfig {
        match choice {
            ScriptChoice::Thai => &self.thai,
            ScriptChoice::Cjk => &self.cjk,
            ScriptChoice::Latin | ScriptChoice::Auto => &self.latin,
        }
    }
}

impl Localizer {
    /// Localizer with the default policy.
    #[must_use]
    pub fn new(catalog: TranslationCatalog) -> Self {
        let policy = WrapPolicy::default();
        Self {
            catalog,
            configs: PresetConfigs::new(&policy),
            policy,
            key_log: KeyLog::default(),
        }
    }

    /// Localizer with a validated policy.
    pub fn with_policy(catalog: TranslationCatalog, policy: WrapPolicy) -> Result<Self, PolicyError> {
        let errors = policy.validate();
        if !errors.is_empty() {
            return Err(PolicyError::Validation(errors));
        }
        Ok(Self {
            catalog,
            configs: PresetConfigs::new(&policy),
            policy,
            key_log: KeyLog::default(),
        })
    }

    /// Log every distinct lookup once at debug level.
    #[must_use]
    pub fn with_debug_keys(mut self, enabled: bool) -> Self {
        self.key_log = KeyLog::new(enabled);
        self
    }

    #[must_use]
    pub fn catalog(&self) -> &TranslationCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn policy(&self) -> &WrapPolicy {
        &self.policy
    }

    #[must_use]
    pub fn key_log(&self) -> &KeyLog {
        &self.key_log
    }

    fn config_for(&self, text: &str) -> &WrapConfig {
        self.configs.get(self.policy.script.resolve(text))
    }

    fn wrapped(&self, text: &str) -> String {
        wrap(text, self.config_for(text))
    }

    /// Wrapped translation of `field` for entity `key`.
    #[must_use]
    pub fn get(&self, category: Category, key: &str, field: &Field) -> Option<String> {
        let found = self.catalog.get(category, key, field);
        self.key_log
            .record(category.as_str(), key, found.is_some());
        found.map(|text| self.wrapped(text))
    }

    /// Wrapped UI string for `key`.
    #[must_use]
    pub fn ui(&self, key: &str) -> Option<String> {
        let found = self.catalog.ui(key);
        self.key_log.record("ui", key, found.is_some());
        found.map(|text| self.wrapped(text))
    }

    /// The wrapped translation, or `original` untouched when there is none.
    #[must_use]
    pub fn resolve(&self, category: Category, key: &str, field: &Field, original: &str) -> String {
        let translated = self.get(category, key, field);
        override_or(original, translated.as_deref()).to_string()
    }

    /// [`Localizer::resolve`] for UI strings.
    #[must_use]
    pub fn resolve_ui(&self, key: &str, original: &str) -> String {
        let translated = self.ui(key);
        override_or(original, translated.as_deref()).to_string()
    }
}
