use serde_json::json;

use super::*;
use crate::history::MemoryHistory;

// =============================================================
// should_redirect_unauth
// =============================================================

#[test]
fn redirects_when_session_is_empty() {
    assert!(should_redirect_unauth(&Ok(json!({}))));
}

#[test]
fn redirects_when_read_failed() {
    let err = SessionError::StorageUnavailable("localStorage is disabled".to_owned());
    assert!(should_redirect_unauth(&Err(err)));
}

#[test]
fn does_not_redirect_with_active_session() {
    assert!(!should_redirect_unauth(&Ok(json!({"token": "abc"}))));
}

// =============================================================
// redirect_to_login
// =============================================================

#[test]
fn redirect_to_login_pushes_login_path() {
    let history = MemoryHistory::with_entries(["/", "/board/1"]);
    let redirected = redirect_to_login(&history, &Ok(json!({}))).expect("redirect");
    assert!(redirected);
    assert_eq!(history.location().expect("location"), LOGIN_PATH);
    // The protected page stays reachable with back().
    history.back().expect("back");
    assert_eq!(history.location().expect("location"), "/board/1");
}

#[test]
fn redirect_to_login_is_noop_with_session() {
    let history = MemoryHistory::new();
    let redirected = redirect_to_login(&history, &Ok(json!({"token": "abc"}))).expect("redirect");
    assert!(!redirected);
    assert_eq!(history.len(), 1);
}

#[test]
fn redirect_to_login_does_not_stack_login_entries() {
    let history = MemoryHistory::with_entries(["/login"]);
    assert!(redirect_to_login(&history, &Ok(json!({}))).expect("redirect"));
    assert_eq!(history.len(), 1);
}

// =============================================================
// provide_session / use_session
// =============================================================

#[test]
fn use_session_returns_provided_store() {
    let owner = Owner::new();
    owner.with(|| {
        let provided = provide_session(SessionStore::in_memory());
        provided
            .with_value(|store| store.set_user_data(&json!({"token": "abc"})))
            .expect("set");

        let used = use_session();
        let data = used.with_value(SessionStore::user_data).expect("get");
        assert_eq!(data, json!({"token": "abc"}));
    });
}
