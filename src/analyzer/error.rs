use thiserror::Error;

use crate::browser::error::BrowserError;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// A property read failed, usually because the element left the DOM.
    /// Callers skip the element.
    #[error("element is detached or unreadable: {source}")]
    DetachedElement {
        #[source]
        source: BrowserError,
    },

    /// Page-level failure (query, url lookup)
    #[error(transparent)]
    Browser(#[from] BrowserError),
}
