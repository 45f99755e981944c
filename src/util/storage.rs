//! Browser storage behind a two-scope key/value contract.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session keeps its bearer token in the tab-lifetime scope and the
//! favorites collection in the indefinite scope. Both go through
//! [`PersistentStore`] so the session never touches web-sys directly and
//! tests can substitute [`MemoryStore`].
//!
//! TRADE-OFFS
//! ==========
//! There are no cross-key transactions. A write interrupted halfway leaves
//! whatever the browser committed; the session re-derives its state from
//! storage on the next load.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;

/// Storage lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageScope {
    /// Cleared when the browsing session ends (`sessionStorage`).
    Ephemeral,
    /// Survives until explicitly cleared (`localStorage`).
    Durable,
}

/// Errors surfaced by storage writes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// The scope cannot be opened (no window, storage disabled by the user).
    #[error("{0:?} storage unavailable")]
    Unavailable(StorageScope),

    /// The browser refused the write (quota exceeded, security error).
    #[error("{scope:?} storage rejected write to {key}: {reason}")]
    Rejected { scope: StorageScope, key: String, reason: String },
}

/// Key/value access over the two storage scopes.
pub trait PersistentStore {
    fn get(&self, scope: StorageScope, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns a [`StorageError`] if the scope is unavailable or rejects the write.
    fn set(&self, scope: StorageScope, key: &str, value: &str) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns a [`StorageError`] if the scope is unavailable.
    fn remove(&self, scope: StorageScope, key: &str) -> Result<(), StorageError>;
}

// =============================================================================
// BROWSER
// =============================================================================

/// `sessionStorage` / `localStorage` backed store. Outside the browser every
/// read misses and every write reports the scope as unavailable.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStore;

#[cfg(feature = "csr")]
fn web_storage(scope: StorageScope) -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or(StorageError::Unavailable(scope))?;
    let storage = match scope {
        StorageScope::Ephemeral => window.session_storage(),
        StorageScope::Durable => window.local_storage(),
    };
    storage.ok().flatten().ok_or(StorageError::Unavailable(scope))
}

impl PersistentStore for BrowserStore {
    fn get(&self, scope: StorageScope, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            web_storage(scope).ok()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (scope, key);
            None
        }
    }

    fn set(&self, scope: StorageScope, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            web_storage(scope)?.set_item(key, value).map_err(|e| StorageError::Rejected {
                scope,
                key: key.to_owned(),
                reason: format!("{e:?}"),
            })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable(scope))
        }
    }

    fn remove(&self, scope: StorageScope, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            web_storage(scope)?.remove_item(key).map_err(|e| StorageError::Rejected {
                scope,
                key: key.to_owned(),
                reason: format!("{e:?}"),
            })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable(scope))
        }
    }
}

// =============================================================================
// MEMORY
// =============================================================================

/// In-process store used by tests and non-browser embeddings.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<(StorageScope, String), String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style seeding for fixtures.
    #[must_use]
    pub fn with(self, scope: StorageScope, key: &str, value: &str) -> Self {
        self.entries.borrow_mut().insert((scope, key.to_owned()), value.to_owned());
        self
    }

    /// Drop every key in `scope`, as the browser does for `sessionStorage`
    /// when a tab closes.
    pub fn clear_scope(&self, scope: StorageScope) {
        self.entries.borrow_mut().retain(|(s, _), _| *s != scope);
    }
}

impl PersistentStore for MemoryStore {
    fn get(&self, scope: StorageScope, key: &str) -> Option<String> {
        self.entries.borrow().get(&(scope, key.to_owned())).cloned()
    }

    fn set(&self, scope: StorageScope, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert((scope, key.to_owned()), value.to_owned());
        Ok(())
    }

    fn remove(&self, scope: StorageScope, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(&(scope, key.to_owned()));
        Ok(())
    }
}
