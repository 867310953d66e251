//! Session-store configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The storage key and bootstrap element id are part of the contract with
//! the server-rendered page, so both default to the values the page emits.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// `localStorage` key holding the JSON-encoded session payload.
pub const DEFAULT_STORAGE_KEY: &str = "authData";

/// Id of the hidden element carrying the server-rendered session hand-off.
pub const DEFAULT_BOOTSTRAP_ELEMENT_ID: &str = "bearer_token";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub storage_key: String,
    pub bootstrap_element_id: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            bootstrap_element_id: DEFAULT_BOOTSTRAP_ELEMENT_ID.to_owned(),
        }
    }
}

impl SessionConfig {
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    #[must_use]
    pub fn with_bootstrap_element_id(mut self, id: impl Into<String>) -> Self {
        self.bootstrap_element_id = id.into();
        self
    }
}
