//! In-browser tests for the `web-sys` backends.
//!
//! Run with `wasm-pack test --headless --firefox -- --features hydrate`.

#![cfg(all(target_arch = "wasm32", feature = "hydrate"))]

use std::rc::Rc;

use serde_json::json;
use session_store::bootstrap::{BootstrapSource, DomBootstrap};
use session_store::history::{BrowserHistory, History, HistoryHandle};
use session_store::storage::{BrowserStorage, SessionStorage};
use session_store::{SessionConfig, SessionStore};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().and_then(|w| w.document()).expect("document")
}

fn seed_bootstrap(id: &str, text: &str) {
    let doc = document();
    let el = doc.create_element("div").expect("create element");
    el.set_id(id);
    el.set_text_content(Some(text));
    doc.body().expect("body").append_child(&el).expect("append");
}

fn fresh_local_storage() -> BrowserStorage {
    let storage = BrowserStorage::local().expect("localStorage");
    storage.clear().expect("clear");
    storage
}

#[wasm_bindgen_test]
fn local_storage_round_trips_items() {
    let storage = fresh_local_storage();
    storage.set_item("k", "v").expect("set");
    assert_eq!(storage.get_item("k").expect("get").as_deref(), Some("v"));
    storage.remove_item("k").expect("remove");
    assert_eq!(storage.get_item("k").expect("get"), None);
}

#[wasm_bindgen_test]
fn dom_bootstrap_reads_then_removes_element() {
    seed_bootstrap("seed_read", r#"{"session":{"token":"abc"}}"#);
    let source = DomBootstrap::new("seed_read");
    assert!(source.read().expect("read").is_some());
    source.consume().expect("consume");
    assert!(document().get_element_by_id("seed_read").is_none());
    assert_eq!(source.read().expect("read"), None);
}

#[wasm_bindgen_test]
fn browser_store_migrates_page_bootstrap_once() {
    fresh_local_storage();
    seed_bootstrap("bearer_token", r#"{"session":{"token":"abc"}}"#);

    let store = SessionStore::browser(SessionConfig::default()).expect("store");
    assert_eq!(store.user_data().expect("get"), json!({"token": "abc"}));
    assert!(document().get_element_by_id("bearer_token").is_none());
    assert_eq!(store.user_data().expect("get"), json!({"token": "abc"}));

    store.clear().expect("clear");
    assert_eq!(store.user_data().expect("get"), json!({}));
}

#[wasm_bindgen_test]
fn malformed_page_bootstrap_is_left_in_place() {
    fresh_local_storage();
    seed_bootstrap("seed_bad", "not json");
    let config = SessionConfig::default().with_bootstrap_element_id("seed_bad");
    let store = SessionStore::browser(config).expect("store");
    assert!(store.user_data().is_err());
    assert!(document().get_element_by_id("seed_bad").is_some());
}

#[wasm_bindgen_test]
fn browser_history_push_and_replace_update_location() {
    let history = BrowserHistory::current().expect("history");
    history.push("/session-test/a").expect("push");
    assert_eq!(history.location().expect("location"), "/session-test/a");
    history.replace("/session-test/b").expect("replace");
    assert_eq!(history.location().expect("location"), "/session-test/b");
}

#[wasm_bindgen_test]
fn init_keeps_supplied_browser_history() {
    let mut store = SessionStore::in_memory();
    let handle: HistoryHandle = Rc::new(BrowserHistory::current().expect("history"));
    store.init(Some(Rc::clone(&handle)));
    assert!(Rc::ptr_eq(&store.history(), &handle));
}
