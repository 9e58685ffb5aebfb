use std::cell::RefCell;
use std::rc::Rc;

use serde_json::Value;

use crate::browser::error::BrowserError;
use crate::browser::probe::ElementProbe;
use crate::browser::session::BrowserSession;

// ============================================================================
// Handle traits: what the analyzers need from a live page
// ============================================================================

/// An opaque reference to one live DOM element.
pub trait ElementHandle {
    /// Whether the element is still attached to the document.
    fn is_connected(&self) -> Result<bool, BrowserError>;

    /// Batched read of tag, attributes, visibility, enabled state, click
    /// handler presence and computed colors.
    fn inspect(&self) -> Result<ElementProbe, BrowserError>;
}

/// A loaded page that can be queried for elements.
pub trait PageHandle {
    type Element: ElementHandle;

    /// All elements matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> Result<Vec<Self::Element>, BrowserError>;

    fn url(&self) -> Result<String, BrowserError>;

    /// Evaluate a script in page context and return its JSON result.
    fn evaluate(&self, script: &str) -> Result<Value, BrowserError>;
}

// ============================================================================
// BrowserSession-backed implementation
// ============================================================================

/// Page view over a shared `BrowserSession`.
#[derive(Clone)]
pub struct SessionPage {
    session: Rc<RefCell<BrowserSession>>,
}

impl SessionPage {
    pub fn new(session: Rc<RefCell<BrowserSession>>) -> Self {
        Self { session }
    }
}

impl PageHandle for SessionPage {
    type Element = SessionElement;

    fn query_all(&self, selector: &str) -> Result<Vec<SessionElement>, BrowserError> {
        let ids = self.session.borrow_mut().query_all(selector)?;
        Ok(ids
            .into_iter()
            .map(|id| SessionElement {
                session: Rc::clone(&self.session),
                id,
            })
            .collect())
    }

    fn url(&self) -> Result<String, BrowserError> {
        self.session.borrow_mut().current_url()
    }

    fn evaluate(&self, script: &str) -> Result<Value, BrowserError> {
        self.session.borrow_mut().evaluate(script)
    }
}

/// Element handle living in the browser server, addressed by id.
pub struct SessionElement {
    session: Rc<RefCell<BrowserSession>>,
    id: u64,
}

impl ElementHandle for SessionElement {
    fn is_connected(&self) -> Result<bool, BrowserError> {
        self.session.borrow_mut().is_connected(self.id)
    }

    fn inspect(&self) -> Result<ElementProbe, BrowserError> {
        self.session.borrow_mut().inspect(self.id)
    }
}
