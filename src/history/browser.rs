//! `window.history` wrapper. Requires a browser environment.

use wasm_bindgen::JsValue;

use crate::error::{SessionError, js_error_message};

use super::History;

/// Browser session history for the current page.
#[derive(Clone, Debug)]
pub struct BrowserHistory {
    history: web_sys::History,
    location: web_sys::Location,
}

impl BrowserHistory {
    /// Wrap the current window's history and location.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Environment`] outside a browser page.
    pub fn current() -> Result<Self, SessionError> {
        let window = web_sys::window().ok_or_else(|| SessionError::environment("no window"))?;
        let history = window.history().map_err(|e| SessionError::environment(js_error_message(&e)))?;
        Ok(Self { history, location: window.location() })
    }
}

fn env_err(e: &JsValue) -> SessionError {
    SessionError::environment(js_error_message(e))
}

impl History for BrowserHistory {
    fn location(&self) -> Result<String, SessionError> {
        let pathname = self.location.pathname().map_err(|e| env_err(&e))?;
        let search = self.location.search().map_err(|e| env_err(&e))?;
        let hash = self.location.hash().map_err(|e| env_err(&e))?;
        Ok(format!("{pathname}{search}{hash}"))
    }

    fn push(&self, path: &str) -> Result<(), SessionError> {
        self.history
            .push_state_with_url(&JsValue::NULL, "", Some(path))
            .map_err(|e| env_err(&e))
    }

    fn replace(&self, path: &str) -> Result<(), SessionError> {
        self.history
            .replace_state_with_url(&JsValue::NULL, "", Some(path))
            .map_err(|e| env_err(&e))
    }

    fn go(&self, delta: i32) -> Result<(), SessionError> {
        self.history.go_with_delta(delta).map_err(|e| env_err(&e))
    }
}
