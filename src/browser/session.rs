use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace};

use crate::browser::error::BrowserError;
use crate::browser::probe::ElementProbe;
use crate::config::config_model::BrowserKind;

/// Request sent to browser_server.js over stdin (one JSON line).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum BrowserRequest {
    Navigate { url: String },
    CurrentUrl,
    QueryAll { selector: String },
    IsConnected { handle: u64 },
    Inspect { handle: u64 },
    Evaluate { script: String },
    Quit,
}

impl BrowserRequest {
    pub fn navigate(url: &str) -> Self {
        BrowserRequest::Navigate {
            url: url.to_string(),
        }
    }

    pub fn query_all(selector: &str) -> Self {
        BrowserRequest::QueryAll {
            selector: selector.to_string(),
        }
    }

    pub fn evaluate(script: &str) -> Self {
        BrowserRequest::Evaluate {
            script: script.to_string(),
        }
    }

    /// Command name as it appears on the wire, used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            BrowserRequest::Navigate { .. } => "navigate",
            BrowserRequest::CurrentUrl => "current_url",
            BrowserRequest::QueryAll { .. } => "query_all",
            BrowserRequest::IsConnected { .. } => "is_connected",
            BrowserRequest::Inspect { .. } => "inspect",
            BrowserRequest::Evaluate { .. } => "evaluate",
            BrowserRequest::Quit => "quit",
        }
    }
}

/// Response received from browser_server.js over stdout (one JSON line).
#[derive(Debug, Deserialize)]
pub struct BrowserResponse {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub ready: Option<bool>,
    #[serde(default)]
    pub handles: Option<Vec<u64>>,
    #[serde(default)]
    pub connected: Option<bool>,
}

/// A persistent browser session backed by browser_server.js.
///
/// Launches a long-lived Node.js process that keeps a Playwright browser open.
/// Commands are sent as NDJSON over stdin, responses read from stdout.
/// Element handles live on the server side and are referenced by numeric id.
pub struct BrowserSession {
    child: Child,
    stdin: ChildStdin,
    reader: BufReader<ChildStdout>,
    closed: bool,
}

impl BrowserSession {
    /// Spawn `node <script> <browser>` and wait for the ready signal.
    pub fn launch(script: &str, browser: BrowserKind) -> Result<Self, BrowserError> {
        debug!(script, browser = browser.as_str(), "launching browser server");

        let mut child = Command::new("node")
            .arg(script)
            .arg(browser.as_str())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| BrowserError::SubprocessSpawn {
                script: script.to_string(),
                source: e,
            })?;

        let stdin = child.stdin.take().ok_or_else(|| {
            BrowserError::SessionIO(format!("Failed to capture stdin of {}", script))
        })?;

        let stdout = child.stdout.take().ok_or_else(|| {
            BrowserError::SessionIO(format!("Failed to capture stdout of {}", script))
        })?;

        let mut reader = BufReader::new(stdout);

        let mut line = String::new();
        reader
            .read_line(&mut line)
            .map_err(|e| BrowserError::SessionIO(format!("Failed to read ready signal: {}", e)))?;

        let response: BrowserResponse =
            serde_json::from_str(line.trim()).map_err(|e| BrowserError::JsonParse {
                context: "browser server ready signal".into(),
                source: e,
            })?;

        if !response.ok || response.ready != Some(true) {
            return Err(BrowserError::SessionProtocol {
                command: "launch".into(),
                error: response
                    .error
                    .unwrap_or_else(|| "Did not receive ready signal".into()),
            });
        }

        Ok(BrowserSession {
            child,
            stdin,
            reader,
            closed: false,
        })
    }

    /// Send a request and read the response.
    fn send(&mut self, request: &BrowserRequest) -> Result<BrowserResponse, BrowserError> {
        let json = serde_json::to_string(request).map_err(|e| BrowserError::JsonSerialize {
            context: "BrowserRequest".into(),
            source: e,
        })?;
        trace!(request = %json, "browser request");

        writeln!(self.stdin, "{}", json).map_err(|e| {
            BrowserError::SessionIO(format!("Failed to write to browser server stdin: {}", e))
        })?;

        self.stdin.flush().map_err(|e| {
            BrowserError::SessionIO(format!("Failed to flush browser server stdin: {}", e))
        })?;

        let mut line = String::new();
        self.reader.read_line(&mut line).map_err(|e| {
            BrowserError::SessionIO(format!("Failed to read from browser server stdout: {}", e))
        })?;

        if line.trim().is_empty() {
            return Err(BrowserError::SessionIO(
                "Empty response from browser server (process may have died)".into(),
            ));
        }

        serde_json::from_str(line.trim()).map_err(|e| BrowserError::JsonParse {
            context: format!("{} response", request.name()),
            source: e,
        })
    }

    /// Send a request and verify it succeeded.
    fn send_ok(&mut self, request: &BrowserRequest) -> Result<BrowserResponse, BrowserError> {
        let response = self.send(request)?;
        if !response.ok {
            return Err(BrowserError::SessionProtocol {
                command: request.name().into(),
                error: response.error.unwrap_or_else(|| "Unknown error".into()),
            });
        }
        Ok(response)
    }

    pub fn navigate(&mut self, url: &str) -> Result<(), BrowserError> {
        self.send_ok(&BrowserRequest::navigate(url))?;
        Ok(())
    }

    /// Get the current URL from the browser.
    pub fn current_url(&mut self) -> Result<String, BrowserError> {
        let response = self.send_ok(&BrowserRequest::CurrentUrl)?;
        response.url.ok_or_else(|| BrowserError::SessionProtocol {
            command: "current_url".into(),
            error: "No URL in current_url response".into(),
        })
    }

    /// Resolve a CSS selector to server-side element handle ids, in document order.
    ///
    /// Handles from an earlier query are released by the server first.
    pub fn query_all(&mut self, selector: &str) -> Result<Vec<u64>, BrowserError> {
        let response = self.send_ok(&BrowserRequest::query_all(selector))?;
        Ok(response.handles.unwrap_or_default())
    }

    pub fn is_connected(&mut self, handle: u64) -> Result<bool, BrowserError> {
        let response = self.send_ok(&BrowserRequest::IsConnected { handle })?;
        Ok(response.connected.unwrap_or(false))
    }

    /// Read every property the analyzers need from one element in a single round trip.
    pub fn inspect(&mut self, handle: u64) -> Result<ElementProbe, BrowserError> {
        let response = self.send_ok(&BrowserRequest::Inspect { handle })?;
        let data = response.data.ok_or_else(|| BrowserError::SessionProtocol {
            command: "inspect".into(),
            error: "No data in inspect response".into(),
        })?;
        serde_json::from_value(data).map_err(|e| BrowserError::JsonParse {
            context: "inspect data".into(),
            source: e,
        })
    }

    /// Evaluate a page-level script and return its JSON result.
    pub fn evaluate(&mut self, script: &str) -> Result<Value, BrowserError> {
        let response = self.send_ok(&BrowserRequest::evaluate(script))?;
        Ok(response.data.unwrap_or(Value::Null))
    }

    /// Quit the browser session.
    pub fn quit(&mut self) -> Result<(), BrowserError> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        // Best-effort: the process may already be gone
        let _ = self.send(&BrowserRequest::Quit);
        let _ = self.child.wait();
        Ok(())
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        let _ = self.quit();
    }
}
