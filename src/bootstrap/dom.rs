//! Bootstrap hand-off read from a hidden DOM element. Requires a browser
//! environment.

use crate::config::DEFAULT_BOOTSTRAP_ELEMENT_ID;
use crate::error::SessionError;

use super::BootstrapSource;

/// Bootstrap element looked up by id on every call.
///
/// The document is resolved lazily, so constructing one is safe anywhere;
/// only `read`/`consume` need a page.
#[derive(Clone, Debug)]
pub struct DomBootstrap {
    element_id: String,
}

impl Default for DomBootstrap {
    fn default() -> Self {
        Self::new(DEFAULT_BOOTSTRAP_ELEMENT_ID)
    }
}

impl DomBootstrap {
    pub fn new(element_id: impl Into<String>) -> Self {
        Self { element_id: element_id.into() }
    }

    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    fn element(&self) -> Result<Option<web_sys::Element>, SessionError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| SessionError::environment("no document"))?;
        Ok(document.get_element_by_id(&self.element_id))
    }
}

impl BootstrapSource for DomBootstrap {
    fn read(&self) -> Result<Option<String>, SessionError> {
        Ok(self
            .element()?
            .map(|el| el.text_content().unwrap_or_default()))
    }

    fn consume(&self) -> Result<(), SessionError> {
        if let Some(el) = self.element()? {
            el.remove();
        }
        Ok(())
    }
}
