//! `window.localStorage` backend. Requires a browser environment.

use crate::error::{SessionError, js_error_message};

use super::SessionStorage;

/// Browser `localStorage` for the page's origin.
#[derive(Clone, Debug)]
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    /// Resolve `window.localStorage`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Environment`] outside a browser page and
    /// [`SessionError::StorageUnavailable`] when storage is disabled.
    pub fn local() -> Result<Self, SessionError> {
        let window = web_sys::window().ok_or_else(|| SessionError::environment("no window"))?;
        let storage = window
            .local_storage()
            .map_err(|e| SessionError::storage(js_error_message(&e)))?
            .ok_or_else(|| SessionError::storage("localStorage is disabled"))?;
        Ok(Self { storage })
    }
}

impl SessionStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, SessionError> {
        self.storage
            .get_item(key)
            .map_err(|e| SessionError::storage(js_error_message(&e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| SessionError::storage(js_error_message(&e)))
    }

    fn remove_item(&self, key: &str) -> Result<(), SessionError> {
        self.storage
            .remove_item(key)
            .map_err(|e| SessionError::storage(js_error_message(&e)))
    }

    fn clear(&self) -> Result<(), SessionError> {
        self.storage
            .clear()
            .map_err(|e| SessionError::storage(js_error_message(&e)))
    }
}
