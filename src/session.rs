//! Session store: the single accessor for session identity and navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login flows write the authentication payload here; route guards and
//! user-aware components read it back. The payload is opaque JSON stored
//! under one key, so there is at most one session at a time.
//!
//! DESIGN
//! ======
//! Storage, the bootstrap hand-off, and history are injected capabilities.
//! The store holds no session state of its own between calls.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::bootstrap::{BootstrapPayload, BootstrapSource, NoBootstrap};
use crate::config::SessionConfig;
use crate::error::SessionError;
use crate::history::{HistoryHandle, MemoryHistory, default_history};
use crate::storage::{MemoryStorage, SessionStorage};

pub struct SessionStore {
    config: SessionConfig,
    storage: Box<dyn SessionStorage>,
    bootstrap: Box<dyn BootstrapSource>,
    history: HistoryHandle,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    /// Store over `storage` and `bootstrap` with the default config.
    ///
    /// History starts as a fresh in-memory history until [`SessionStore::init`].
    pub fn new(
        storage: impl SessionStorage + 'static,
        bootstrap: impl BootstrapSource + 'static,
    ) -> Self {
        Self::with_config(SessionConfig::default(), storage, bootstrap)
    }

    pub fn with_config(
        config: SessionConfig,
        storage: impl SessionStorage + 'static,
        bootstrap: impl BootstrapSource + 'static,
    ) -> Self {
        Self {
            config,
            storage: Box::new(storage),
            bootstrap: Box::new(bootstrap),
            history: Rc::new(MemoryHistory::new()),
        }
    }

    /// Store with no browser dependencies: memory storage, no bootstrap.
    pub fn in_memory() -> Self {
        Self::new(MemoryStorage::new(), NoBootstrap)
    }

    /// Store over `localStorage` and the page's bootstrap element, with
    /// browser history active.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Environment`] outside a browser page and
    /// [`SessionError::StorageUnavailable`] when storage is disabled.
    #[cfg(feature = "hydrate")]
    pub fn browser(config: SessionConfig) -> Result<Self, SessionError> {
        let storage = crate::storage::BrowserStorage::local()?;
        let bootstrap = crate::bootstrap::DomBootstrap::new(config.bootstrap_element_id.clone());
        let mut store = Self::with_config(config, storage, bootstrap);
        store.init(None);
        Ok(store)
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Replace the active history, falling back to [`default_history`].
    pub fn init(&mut self, history: Option<HistoryHandle>) {
        self.history = history.unwrap_or_else(default_history);
    }

    /// The active history handle.
    pub fn history(&self) -> HistoryHandle {
        Rc::clone(&self.history)
    }

    /// Serialize `user_data` and store it, replacing any previous session.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Serialization`] if `user_data` cannot be
    /// encoded and [`SessionError::StorageUnavailable`] if the write is rejected.
    pub fn set_user_data<T: Serialize + ?Sized>(&self, user_data: &T) -> Result<(), SessionError> {
        let raw = serde_json::to_string(user_data)?;
        self.storage.set_item(&self.config.storage_key, &raw)
    }

    /// Current session payload, or `{}` when none is stored.
    ///
    /// A pending bootstrap hand-off is migrated into storage first. The
    /// hand-off is only consumed once its text parses.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Serialization`] for malformed bootstrap or
    /// stored text, and propagates storage and environment failures.
    pub fn user_data(&self) -> Result<Value, SessionError> {
        self.migrate_bootstrap()?;

        match self.storage.get_item(&self.config.storage_key)? {
            Some(raw) if !raw.is_empty() => Ok(serde_json::from_str(&raw)?),
            _ => Ok(Value::Object(Map::new())),
        }
    }

    /// [`SessionStore::user_data`] decoded into `T`.
    ///
    /// # Errors
    ///
    /// Same as [`SessionStore::user_data`], plus
    /// [`SessionError::Serialization`] if the payload does not fit `T`.
    pub fn user_data_as<T: DeserializeOwned>(&self) -> Result<T, SessionError> {
        Ok(serde_json::from_value(self.user_data()?)?)
    }

    /// Whether an active session payload is stored (see [`is_active_session`]).
    ///
    /// # Errors
    ///
    /// Same as [`SessionStore::user_data`].
    pub fn has_session(&self) -> Result<bool, SessionError> {
        Ok(is_active_session(&self.user_data()?))
    }

    /// Delete the session key only, leaving other storage entries alone.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::StorageUnavailable`] if the backend rejects the delete.
    pub fn remove_user_data(&self) -> Result<(), SessionError> {
        self.storage.remove_item(&self.config.storage_key)
    }

    /// Erase the whole storage area, not just the session key.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::StorageUnavailable`] if the backend rejects the wipe.
    pub fn clear(&self) -> Result<(), SessionError> {
        leptos::logging::log!("clearing session storage");
        self.storage.clear()
    }

    fn migrate_bootstrap(&self) -> Result<(), SessionError> {
        let Some(text) = self.bootstrap.read()? else {
            return Ok(());
        };
        let payload = BootstrapPayload::parse(&text)?;
        self.bootstrap.consume()?;
        leptos::logging::log!("session bootstrap migrated into storage");
        self.set_user_data(&payload.session)
    }
}

/// Whether `user_data` represents a signed-in session.
///
/// `null` and the empty object `{}` mean "no session"; any other payload
/// is opaque and counts as active.
pub fn is_active_session(user_data: &Value) -> bool {
    match user_data {
        Value::Null => false,
        Value::Object(map) => !map.is_empty(),
        _ => true,
    }
}
