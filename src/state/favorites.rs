//! Favorites collection with set semantics over country codes.
//!
//! DESIGN
//! ======
//! Insertion order is preserved for display; uniqueness is by
//! [`FavoriteEntry::code`]. Collections are small (hand-curated), so
//! membership is a linear scan.

#[cfg(test)]
#[path = "favorites_test.rs"]
mod favorites_test;

use crate::net::types::FavoriteEntry;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Favorites {
    entries: Vec<FavoriteEntry>,
}

impl Favorites {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a persisted collection.
    ///
    /// Never fails: malformed JSON or a non-array yields an empty collection,
    /// entries without a country code are dropped, and repeated codes keep
    /// their first occurrence.
    #[must_use]
    pub fn from_json(raw: &str) -> Self {
        let values = match serde_json::from_str::<serde_json::Value>(raw) {
            Ok(serde_json::Value::Array(values)) => values,
            Ok(_) => {
                log::warn!("favorites: stored value is not an array; starting empty");
                return Self::new();
            }
            Err(e) => {
                log::warn!("favorites: stored value is not valid JSON ({e}); starting empty");
                return Self::new();
            }
        };

        let mut favorites = Self::new();
        for value in values {
            match FavoriteEntry::from_value(value) {
                Ok(entry) => {
                    favorites.insert(entry);
                }
                Err(e) => log::debug!("favorites: dropping stored entry: {e}"),
            }
        }
        favorites
    }

    /// Serialize the full collection for write-through.
    ///
    /// # Errors
    ///
    /// Returns a serde error if a record cannot be encoded.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entries)
    }

    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.entries.iter().any(|e| e.code() == code)
    }

    /// Add `entry`; returns `false` when its code is already present.
    pub fn insert(&mut self, entry: FavoriteEntry) -> bool {
        if self.contains(entry.code()) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Remove the entry for `code`; returns `false` when it was absent.
    pub fn remove(&mut self, code: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.code() != code);
        self.entries.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &FavoriteEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[FavoriteEntry] {
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
