use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Shown/hidden flag per column key of one table. Keys that were never
/// toggled read as visible.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnVisibility {
    entries: BTreeMap<String, bool>,
}

impl ColumnVisibility {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: BTreeMap<String, bool>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &BTreeMap<String, bool> {
        &self.entries
    }

    pub fn is_visible(&self, key: &str) -> bool {
        self.entries.get(key).copied().unwrap_or(true)
    }

    #[must_use]
    pub fn toggled(&self, key: &str, show: bool) -> Self {
        let mut next = self.clone();
        next.entries.insert(key.to_string(), show);
        next
    }

    #[must_use]
    pub fn all_shown<'a>(&self, keys: impl IntoIterator<Item = &'a str>) -> Self {
        let mut next = self.clone();
        for key in keys {
            next.entries.insert(key.to_string(), true);
        }
        next
    }

    pub fn hidden_count<'a>(&self, keys: impl IntoIterator<Item = &'a str>) -> usize {
        keys.into_iter()
            .filter(|key| self.entries.get(*key) == Some(&false))
            .count()
    }
}
