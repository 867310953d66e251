//! Error type shared by every session-store operation.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here is recovered internally. Callers decide whether a failed
//! read means "no active session" (see `context::should_redirect_unauth`).

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Error returned by session, storage, bootstrap, and history operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The payload could not be converted to or from JSON text.
    #[error("session payload is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),
    /// The durable storage backend is inaccessible, disabled, or full.
    #[error("session storage unavailable: {0}")]
    StorageUnavailable(String),
    /// Browser page APIs were used outside a browser page.
    #[error("browser environment unavailable: {0}")]
    Environment(String),
}

impl SessionError {
    pub(crate) fn storage(message: impl Into<String>) -> Self {
        Self::StorageUnavailable(message.into())
    }

    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    pub(crate) fn environment(message: impl Into<String>) -> Self {
        Self::Environment(message.into())
    }
}

/// Render a thrown JS value as text for error messages.
#[cfg(feature = "hydrate")]
pub(crate) fn js_error_message(value: &wasm_bindgen::JsValue) -> String {
    use wasm_bindgen::JsCast;

    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
