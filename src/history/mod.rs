//! Navigation history handle carried by the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host application constructs the history and hands it to the store
//! (and anything else that navigates). [`MemoryHistory`] backs native
//! builds, SSR, and tests; `BrowserHistory` wraps `window.history`.

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

#[cfg(feature = "hydrate")]
mod browser;
mod memory;

#[cfg(feature = "hydrate")]
pub use browser::BrowserHistory;
pub use memory::MemoryHistory;

use std::rc::Rc;

use crate::error::SessionError;

/// Shared reference to the active navigation history.
pub type HistoryHandle = Rc<dyn History>;

/// Client-side navigation history.
pub trait History {
    /// Path of the current entry, e.g. `/board/42`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Environment`] if the location cannot be read.
    fn location(&self) -> Result<String, SessionError>;

    /// Append `path` as a new entry, dropping any forward entries.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Environment`] if the navigation is rejected.
    fn push(&self, path: &str) -> Result<(), SessionError>;

    /// Overwrite the current entry with `path`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Environment`] if the navigation is rejected.
    fn replace(&self, path: &str) -> Result<(), SessionError>;

    /// Move `delta` entries back (negative) or forward (positive).
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Environment`] if the navigation is rejected.
    fn go(&self, delta: i32) -> Result<(), SessionError>;

    fn back(&self) -> Result<(), SessionError> {
        self.go(-1)
    }

    fn forward(&self) -> Result<(), SessionError> {
        self.go(1)
    }
}

/// History used when the host does not supply one.
///
/// Browser-backed when a window is available, in-memory otherwise.
pub fn default_history() -> HistoryHandle {
    #[cfg(feature = "hydrate")]
    {
        if let Ok(history) = BrowserHistory::current() {
            return Rc::new(history);
        }
        leptos::logging::warn!("browser history unavailable, using in-memory history");
    }
    Rc::new(MemoryHistory::new())
}
