use thiserror::Error;

/// Failures talking to the Node.js Playwright server.
#[derive(Debug, Error)]
pub enum BrowserError {
    /// browser_server.js failed to spawn
    #[error("Failed to spawn {script} (is Node.js installed?): {source}")]
    SubprocessSpawn {
        script: String,
        #[source]
        source: std::io::Error,
    },

    /// Reading from or writing to the server pipes failed
    #[error("Browser session I/O error: {0}")]
    SessionIO(String),

    /// Server answered `ok: false` or left out a required field
    #[error("Browser command '{command}' failed: {error}")]
    SessionProtocol { command: String, error: String },

    /// Server output was not valid JSON
    #[error("JSON parse error ({context}): {source}")]
    JsonParse {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// Request could not be serialized
    #[error("JSON serialize error ({context}): {source}")]
    JsonSerialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
