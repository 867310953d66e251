//! Leptos context wiring and the unauthenticated-redirect policy.
//!
//! SYSTEM CONTEXT
//! ==============
//! The root component provides one [`SessionStore`] for the whole app;
//! route components fetch it with [`use_session`] and apply identical
//! redirect behavior when no session is active.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use serde_json::Value;

use crate::error::SessionError;
use crate::history::History;
use crate::session::{SessionStore, is_active_session};

/// Route unauthenticated users are sent to.
pub const LOGIN_PATH: &str = "/login";

/// Copyable handle to the app-wide store. The store is `!Send`, so it
/// lives in local arena storage.
pub type SessionHandle = StoredValue<SessionStore, LocalStorage>;

/// Make `store` available to every descendant component.
pub fn provide_session(store: SessionStore) -> SessionHandle {
    let handle = StoredValue::new_local(store);
    provide_context(handle);
    handle
}

/// The store provided by an ancestor.
///
/// # Panics
///
/// Panics if no ancestor called [`provide_session`].
pub fn use_session() -> SessionHandle {
    expect_context::<SessionHandle>()
}

/// Whether a session read means the user must sign in again.
///
/// A failed read counts as "no active session".
pub fn should_redirect_unauth(user_data: &Result<Value, SessionError>) -> bool {
    match user_data {
        Ok(data) => !is_active_session(data),
        Err(_) => true,
    }
}

/// Redirect to `/login` when the provided store has no active session.
pub fn install_unauth_redirect<F>(session: SessionHandle, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let user_data = session.with_value(SessionStore::user_data);
        if let Err(e) = &user_data {
            leptos::logging::warn!("session read failed: {e}");
        }
        if should_redirect_unauth(&user_data) {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });
}

/// Apply the redirect policy against a [`History`] handle directly.
///
/// Returns `true` if a redirect was issued.
///
/// # Errors
///
/// Returns the history's error if the navigation is rejected.
pub fn redirect_to_login(
    history: &dyn History,
    user_data: &Result<Value, SessionError>,
) -> Result<bool, SessionError> {
    if !should_redirect_unauth(user_data) {
        return Ok(false);
    }
    if history.location()? != LOGIN_PATH {
        history.push(LOGIN_PATH)?;
    }
    Ok(true)
}
