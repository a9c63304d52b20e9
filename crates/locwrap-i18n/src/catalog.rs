#![forbid(unsafe_code)]

//! Translation catalog.
//!
//! A [`TranslationCatalog`] holds the translated strings for one locale.
//! Entity translations are grouped by [`Category`], keyed by entity id, and
//! carry several [`Field`]s (name, description, lore, ...). Plain UI
//! strings live in a separate key→string table.
//!
//! # On-disk layout
//!
//! ```text
//! <locale dir>/
//!   travelers.json     { "<key>": { "<field>": <value>, ... }, ... }
//!   memories.json
//!   essences.json
//!   stars.json
//!   achievements.json
//!   ui.json            { "<key>": "<string>", ... }
//! ```
//!
//! Every file is optional. Field values may be any JSON value: strings are
//! used as-is, `null` means "no translation", and anything else is kept as
//! its JSON text.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};

use serde_json::Value;
use thiserror::Error;

/// Entity groups with their own translation file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Travelers = 0,
    Memories,
    Essences,
    Stars,
    Achievements,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Travelers,
        Category::Memories,
        Category::Essences,
        Category::Stars,
        Category::Achievements,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Travelers => "travelers",
            Self::Memories => "memories",
            Self::Essences => "essences",
            Self::Stars => "stars",
            Self::Achievements => "achievements",
        }
    }

    /// File name of this category inside a locale directory.
    #[must_use]
    pub fn file_name(self) -> String {
        format!("{}.json", self.as_str())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| I18nError::UnknownCategory(s.to_string()))
    }
}

/// A translatable field of an entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    ShortDescription,
    Description,
    Lore,
    /// Any other field name found in the JSON.
    Other(String),
}

impl Field {
    /// The JSON key of this field.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Name => "name",
            Self::ShortDescription => "shortDescription",
            Self::Description => "description",
            Self::Lore => "lore",
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for Field {
    fn from(s: &str) -> Self {
        match s {
            "name" => Self::Name,
            "shortDescription" => Self::ShortDescription,
            "description" => Self::Description,
            "lore" => Self::Lore,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors from building a catalog.
#[derive(Debug, Error)]
pub enum I18nError {
    #[error("translation directory not found: {}", path.display())]
    MissingDirectory { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown category: {0:?}")]
    UnknownCategory(String),
}

/// key → field → text
type EntityTable = HashMap<String, HashMap<String, String>>;

/// Translated strings for one locale.
#[derive(Debug)]
pub struct TranslationCatalog {
    tables: [EntityTable; 5],
    ui: HashMap<String, String>,
    loaded: bool,
    enabled: AtomicBool,
}

impl Default for TranslationCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl TranslationCatalog {
    /// An empty, enabled, not-yet-loaded catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tables: Default::default(),
            ui: HashMap::new(),
            loaded: false,
            enabled: AtomicBool::new(true),
        }
    }

    /// Load every translation file found in `dir`.
    ///
    /// Missing files are skipped. A missing directory, an unreadable file,
    /// or malformed JSON fails the whole load.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, I18nError> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(I18nError::MissingDirectory {
                path: dir.to_path_buf(),
            });
        }

        let mut catalog = Self::new();
        for category in Category::ALL {
            let path = dir.join(category.file_name());
            let Some(raw) = read_optional(&path)? else {
                continue;
            };
            let table = parse_entity_table(&raw).map_err(|source| I18nError::Json {
                path: path.clone(),
                source,
            })?;
            tracing::info!(%category, entries = table.len(), "loaded translations");
            catalog.tables[category as usize] = table;
        }

        let ui_path = dir.join("ui.json");
        if let Some(raw) = read_optional(&ui_path)? {
            let ui: Option<HashMap<String, String>> =
                serde_json::from_str(&raw).map_err(|source| I18nError::Json {
                    path: ui_path.clone(),
                    source,
                })?;
            catalog.ui = ui.unwrap_or_default();
            tracing::info!(entries = catalog.ui.len(), "loaded UI translations");
        }

        catalog.loaded = true;
        Ok(catalog)
    }

    /// Whether the catalog holds loaded or inserted translations.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    /// Turn lookups on or off. While off, every lookup returns `None`.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    fn active(&self) -> bool {
        self.loaded && self.is_enabled()
    }

    /// Translation of `field` for entity `key`.
    #[must_use]
    pub fn get(&self, category: Category, key: &str, field: &Field) -> Option<&str> {
        if !self.active() {
            return None;
        }
        self.tables[category as usize]
            .get(key)?
            .get(field.as_str())
            .map(String::as_str)
    }

    /// Translated UI string for `key`.
    #[must_use]
    pub fn ui(&self, key: &str) -> Option<&str> {
        if !self.active() {
            return None;
        }
        self.ui.get(key).map(String::as_str)
    }

    /// Add or replace one entity field.
    pub fn insert(
        &mut self,
        category: Category,
        key: impl Into<String>,
        field: Field,
        text: impl Into<String>,
    ) {
        self.tables[category as usize]
            .entry(key.into())
            .or_default()
            .insert(field.as_str().to_string(), text.into());
        self.loaded = true;
    }

    /// Add or replace one UI string.
    pub fn insert_ui(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.ui.insert(key.into(), text.into());
        self.loaded = true;
    }

    /// Number of entities in `category`.
    #[must_use]
    pub fn len(&self, category: Category) -> usize {
        self.tables[category as usize].len()
    }

    #[must_use]
    pub fn ui_len(&self) -> usize {
        self.ui.len()
    }

    /// Whether no translations of any kind are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ui.is_empty() && self.tables.iter().all(HashMap::is_empty)
    }

    pub fn memory_name(&self, key: &str) -> Option<&str> {
        self.get(Category::Memories, key, &Field::Name)
    }

    pub fn memory_short_description(&self, key: &str) -> Option<&str> {
        self.get(Category::Memories, key, &Field::ShortDescription)
    }

    pub fn memory_description(&self, key: &str) -> Option<&str> {
        self.get(Category::Memories, key, &Field::Description)
    }

    pub fn memory_lore(&self, key: &str) -> Option<&str> {
        self.get(Category::Memories, key, &Field::Lore)
    }

    pub fn essence_name(&self, key: &str) -> Option<&str> {
        self.get(Category::Essences, key, &Field::Name)
    }

    pub fn essence_description(&self, key: &str) -> Option<&str> {
        self.get(Category::Essences, key, &Field::Description)
    }

    pub fn star_name(&self, key: &str) -> Option<&str> {
        self.get(Category::Stars, key, &Field::Name)
    }

    pub fn star_description(&self, key: &str) -> Option<&str> {
        self.get(Category::Stars, key, &Field::Description)
    }

    pub fn star_lore(&self, key: &str) -> Option<&str> {
        self.get(Category::Stars, key, &Field::Lore)
    }

    pub fn achievement_name(&self, key: &str) -> Option<&str> {
        self.get(Category::Achievements, key, &Field::Name)
    }

    pub fn achievement_description(&self, key: &str) -> Option<&str> {
        self.get(Category::Achievements, key, &Field::Description)
    }

    pub fn traveler_name(&self, key: &str) -> Option<&str> {
        self.get(Category::Travelers, key, &Field::Name)
    }

    pub fn traveler_description(&self, key: &str) -> Option<&str> {
        self.get(Category::Travelers, key, &Field::Description)
    }
}

fn read_optional(path: &Path) -> Result<Option<String>, I18nError> {
    if !path.is_file() {
        tracing::debug!(path = %path.display(), "translation file not present, skipping");
        return Ok(None);
    }
    std::fs::read_to_string(path)
        .map(Some)
        .map_err(|source| I18nError::Io {
            path: path.to_path_buf(),
            source,
        })
}

fn parse_entity_table(raw: &str) -> Result<EntityTable, serde_json::Error> {
    let parsed: Option<HashMap<String, Option<HashMap<String, Value>>>> =
        serde_json::from_str(raw)?;
    Ok(parsed
        .unwrap_or_default()
        .into_iter()
        .map(|(key, fields)| {
            let fields = fields
                .unwrap_or_default()
                .into_iter()
                .filter_map(|(name, value)| field_text(value).map(|text| (name, text)))
                .collect();
            (key, fields)
        })
        .collect())
}

/// Text of a loosely typed JSON field value.
fn field_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}
