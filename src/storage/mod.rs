//! Durable key-value storage behind the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser build writes to `window.localStorage`; native builds, SSR,
//! and tests use [`MemoryStorage`]. Both sit behind [`SessionStorage`] so
//! the store never touches `web-sys` directly.

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

#[cfg(feature = "hydrate")]
mod browser;

#[cfg(feature = "hydrate")]
pub use browser::BrowserStorage;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::error::SessionError;

/// String-keyed storage area with `localStorage` semantics.
///
/// Receivers are `&self`: the backing area is shared mutable state, the
/// same way the browser exposes it.
pub trait SessionStorage {
    /// Read the value stored under `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::StorageUnavailable`] if the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, SessionError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::StorageUnavailable`] if the backend rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), SessionError>;

    /// Delete `key` if present.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::StorageUnavailable`] if the backend cannot be written.
    fn remove_item(&self, key: &str) -> Result<(), SessionError>;

    /// Delete every key in the storage area.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::StorageUnavailable`] if the backend cannot be written.
    fn clear(&self) -> Result<(), SessionError>;
}

/// In-memory storage area.
///
/// Clones share entries, so two stores built from clones of one
/// `MemoryStorage` behave like two tabs of the same origin.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
    quota_bytes: Option<usize>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that rejects writes once keys plus values exceed `bytes`.
    #[must_use]
    pub fn with_quota(bytes: usize) -> Self {
        Self { entries: Rc::default(), quota_bytes: Some(bytes) }
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    fn used_bytes_without(&self, key: &str) -> usize {
        self.entries
            .borrow()
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl SessionStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), SessionError> {
        if let Some(quota) = self.quota_bytes {
            let needed = self.used_bytes_without(key) + key.len() + value.len();
            if needed > quota {
                return Err(SessionError::storage(format!(
                    "quota exceeded ({needed} of {quota} bytes)"
                )));
            }
        }
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), SessionError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        self.entries.borrow_mut().clear();
        Ok(())
    }
}
