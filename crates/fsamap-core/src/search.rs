//! Per-FSA postal-code search results.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Joins an FSA and an LDU into a six-character postal code.
#[must_use]
pub fn postal_code(fsa: &str, ldu: &str) -> String {
    format!("{fsa}{ldu}")
}

/// One resolved postal code and the lookup payload it returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchEntry {
    pub postal: String,
    pub result: serde_json::Value,
}

/// The growing result set for one FSA.
///
/// Entries keep insertion order and postal codes are unique. Sets are only
/// ever appended to; entries loaded from a previous run are never replaced.
#[derive(Debug, Clone, Default)]
pub struct FsaSearchResults {
    fsa: String,
    entries: Vec<SearchEntry>,
    resolved: HashSet<String>,
}

impl FsaSearchResults {
    #[must_use]
    pub fn new(fsa: &str) -> Self {
        Self {
            fsa: fsa.to_owned(),
            ..Self::default()
        }
    }

    /// Rebuilds a set from persisted entries, keeping the first entry for any
    /// repeated postal code.
    #[must_use]
    pub fn from_entries(fsa: &str, entries: Vec<SearchEntry>) -> Self {
        let mut set = Self::new(fsa);
        for entry in entries {
            set.push(entry);
        }
        set
    }

    #[must_use]
    pub fn fsa(&self) -> &str {
        &self.fsa
    }

    #[must_use]
    pub fn contains(&self, postal: &str) -> bool {
        self.resolved.contains(postal)
    }

    /// Appends an entry. Returns `false` and leaves the set unchanged if the
    /// postal code is already present.
    pub fn push(&mut self, entry: SearchEntry) -> bool {
        if !self.resolved.insert(entry.postal.clone()) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    #[must_use]
    pub fn entries(&self) -> &[SearchEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
