//! One-shot session hand-off from the server-rendered page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server may render a hidden element whose text is
//! `{"session": <payload>}`. The store reads it once, migrates the payload
//! into durable storage, and consumes the source so later reads go straight
//! to storage. [`BootstrapSource`] keeps that DOM access out of the store.

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

#[cfg(feature = "hydrate")]
mod dom;

#[cfg(feature = "hydrate")]
pub use dom::DomBootstrap;

use std::cell::RefCell;

use serde::Deserialize;
use serde_json::Value;

use crate::error::SessionError;

/// A pending bootstrap credential that can be read, then consumed.
pub trait BootstrapSource {
    /// Raw bootstrap text if a hand-off is still pending.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Environment`] if the source cannot be inspected.
    fn read(&self) -> Result<Option<String>, SessionError>;

    /// Discard the pending hand-off so later reads return `None`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Environment`] if the source cannot be modified.
    fn consume(&self) -> Result<(), SessionError>;
}

/// Wire shape of the bootstrap text.
#[derive(Debug, Deserialize)]
pub(crate) struct BootstrapPayload {
    pub session: Value,
}

impl BootstrapPayload {
    pub(crate) fn parse(text: &str) -> Result<Self, SessionError> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Source with nothing to hand off.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoBootstrap;

impl BootstrapSource for NoBootstrap {
    fn read(&self) -> Result<Option<String>, SessionError> {
        Ok(None)
    }

    fn consume(&self) -> Result<(), SessionError> {
        Ok(())
    }
}

/// In-memory hand-off text, consumed once.
#[derive(Debug, Default)]
pub struct StaticBootstrap {
    text: RefCell<Option<String>>,
}

impl StaticBootstrap {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: RefCell::new(Some(text.into())) }
    }

    /// Whether the hand-off has not been consumed yet.
    pub fn is_pending(&self) -> bool {
        self.text.borrow().is_some()
    }
}

impl BootstrapSource for StaticBootstrap {
    fn read(&self) -> Result<Option<String>, SessionError> {
        Ok(self.text.borrow().clone())
    }

    fn consume(&self) -> Result<(), SessionError> {
        self.text.borrow_mut().take();
        Ok(())
    }
}
