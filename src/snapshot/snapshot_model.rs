use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analyzer::analysis_model::ElementMap;

/// The persisted result of one page scan.
///
/// This file is the only thing the generation phase reads from the
/// analysis phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub timestamp: DateTime<Utc>,
    pub url: String,
    #[serde(default)]
    pub elements: ElementMap,
}

impl Snapshot {
    /// Stamp a scan result with the current time.
    pub fn new(url: impl Into<String>, elements: ElementMap) -> Self {
        Self {
            timestamp: Utc::now(),
            url: url.into(),
            elements,
        }
    }
}
