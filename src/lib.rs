//! # session-store
//!
//! Client-side session accessor for the Leptos frontend. Persists the
//! authentication payload in browser `localStorage`, migrates a
//! server-rendered bootstrap credential on first read, and carries the
//! navigation history handle used for client-side redirects.
//!
//! Browser bindings live behind the `hydrate` feature. Without it every
//! capability has an in-memory counterpart, so the crate builds and tests
//! natively and renders deterministically under `ssr`.

pub mod bootstrap;
pub mod config;
pub mod context;
pub mod error;
pub mod history;
pub mod session;
pub mod storage;

pub use bootstrap::{BootstrapSource, NoBootstrap, StaticBootstrap};
pub use config::SessionConfig;
pub use error::SessionError;
pub use history::{History, HistoryHandle, MemoryHistory};
pub use session::SessionStore;
pub use storage::{MemoryStorage, SessionStorage};

/// Route panics and `log` output to the browser console.
///
/// Call once from the hydrate entry point before touching the store.
#[cfg(feature = "hydrate")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    // A second call finds the logger already installed; that is fine.
    let _ = console_log::init_with_level(log::Level::Debug);
}
