use std::cell::{Cell, RefCell};

use page_testgen::browser::error::BrowserError;
use page_testgen::browser::handle::{ElementHandle, PageHandle};
use page_testgen::browser::probe::ElementProbe;
use serde_json::Value;

/// In-memory stand-in for a live element.
#[derive(Debug, Clone)]
pub struct MockElement {
    probe: Option<ElementProbe>,
    connected: bool,
    connection_check_fails: bool,
}

impl MockElement {
    pub fn attached(probe: ElementProbe) -> Self {
        Self {
            probe: Some(probe),
            connected: true,
            connection_check_fails: false,
        }
    }

    /// Removed from the DOM before inspection.
    pub fn detached(probe: ElementProbe) -> Self {
        Self {
            probe: Some(probe),
            connected: false,
            connection_check_fails: false,
        }
    }

    /// Reports attached, but every property read fails.
    pub fn unreadable() -> Self {
        Self {
            probe: None,
            connected: true,
            connection_check_fails: false,
        }
    }

    /// The attachment check itself throws.
    pub fn broken_connection_check(probe: ElementProbe) -> Self {
        Self {
            probe: Some(probe),
            connected: true,
            connection_check_fails: true,
        }
    }
}

impl ElementHandle for MockElement {
    fn is_connected(&self) -> Result<bool, BrowserError> {
        if self.connection_check_fails {
            return Err(protocol_error("is_connected", "Execution context was destroyed"));
        }
        Ok(self.connected)
    }

    fn inspect(&self) -> Result<ElementProbe, BrowserError> {
        self.probe
            .clone()
            .ok_or_else(|| protocol_error("inspect", "Element is not attached to the DOM"))
    }
}

/// In-memory stand-in for a loaded page.
pub struct MockPage {
    pub url: String,
    pub elements: Vec<MockElement>,
    pub evaluate_result: Value,
    pub fail_query: bool,
    pub last_script: RefCell<Option<String>>,
    /// Number of `query_all` calls; each one replaces the previous handle set
    pub queries: Cell<usize>,
}

impl MockPage {
    pub fn new(url: &str, elements: Vec<MockElement>) -> Self {
        Self {
            url: url.to_string(),
            elements,
            evaluate_result: Value::Null,
            fail_query: false,
            last_script: RefCell::new(None),
            queries: Cell::new(0),
        }
    }
}

impl PageHandle for MockPage {
    type Element = MockElement;

    fn query_all(&self, _selector: &str) -> Result<Vec<MockElement>, BrowserError> {
        if self.fail_query {
            return Err(protocol_error("query_all", "Target page has been closed"));
        }
        self.queries.set(self.queries.get() + 1);
        Ok(self.elements.clone())
    }

    fn url(&self) -> Result<String, BrowserError> {
        Ok(self.url.clone())
    }

    fn evaluate(&self, script: &str) -> Result<Value, BrowserError> {
        *self.last_script.borrow_mut() = Some(script.to_string());
        Ok(self.evaluate_result.clone())
    }
}

fn protocol_error(command: &str, error: &str) -> BrowserError {
    BrowserError::SessionProtocol {
        command: command.into(),
        error: error.into(),
    }
}
