#![forbid(unsafe_code)]

//! One-shot lookup tracing for translators.

use std::collections::HashSet;
use std::sync::Mutex;

/// Logs each `category:key` lookup once, tagged FOUND or MISSING.
///
/// Disabled logs record nothing. The seen-set is shared behind a mutex so a
/// `&KeyLog` can be used from several threads.
#[derive(Debug, Default)]
pub struct KeyLog {
    enabled: bool,
    seen: Mutex<HashSet<String>>,
}

impl KeyLog {
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            seen: Mutex::new(HashSet::new()),
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record a lookup. Returns `true` the first time `category:key` is seen.
    pub fn record(&self, category: &str, key: &str, found: bool) -> bool {
        if !self.enabled {
            return false;
        }
        let entry = format!("{category}:{key}");
        let first = self
            .seen
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .insert(entry);
        if first {
            let status = if found { "FOUND" } else { "MISSING" };
            tracing::debug!(category, key, status, "translation lookup");
        }
        first
    }

    /// Number of distinct keys recorded so far.
    #[must_use]
    pub fn seen_count(&self) -> usize {
        self.seen
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .len()
    }
}
