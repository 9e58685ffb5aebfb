use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::browser::error::BrowserError;
use crate::browser::handle::PageHandle;

/// Page-context function returning navigation timings in milliseconds,
/// relative to navigation start.
pub const PERFORMANCE_PROBE_FN: &str = "() => {
  const timing = performance.timing;
  const paint = performance.getEntriesByType('paint')[0];
  return {
    loadTime: timing.loadEventEnd - timing.navigationStart,
    domContentLoaded: timing.domContentLoadedEventEnd - timing.navigationStart,
    firstPaint: paint ? paint.startTime : 0,
  };
}";

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    pub load_time_ms: f64,
    pub dom_content_loaded_ms: f64,
    pub first_paint_ms: f64,
}

impl PerformanceMetrics {
    /// Extract from the object produced by [`PERFORMANCE_PROBE_FN`].
    /// Missing or non-numeric fields read as 0.
    pub fn from_value(value: &Value) -> Self {
        let field = |name: &str| value.get(name).and_then(Value::as_f64).unwrap_or(0.0);
        Self {
            load_time_ms: field("loadTime"),
            dom_content_loaded_ms: field("domContentLoaded"),
            first_paint_ms: field("firstPaint"),
        }
    }
}

/// Read navigation timings from a live page.
pub fn measure_performance<P: PageHandle>(page: &P) -> Result<PerformanceMetrics, BrowserError> {
    let script = format!("({})()", PERFORMANCE_PROBE_FN);
    let value = page.evaluate(&script)?;
    Ok(PerformanceMetrics::from_value(&value))
}
