use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info, trace, warn};

use crate::analyzer::analysis_model::{AccessibilityInfo, ElementAnalysis, ElementMap, ElementMetadata};
use crate::analyzer::element_analyzer::analyze_probe;
use crate::analyzer::error::AnalysisError;
use crate::browser::handle::{ElementHandle, PageHandle};
use crate::browser::probe::ElementProbe;
use crate::snapshot::snapshot_model::Snapshot;
use crate::snapshot::store::save_snapshot;

/// Elements considered for analysis.
pub const CANDIDATE_SELECTOR: &str = r#"button, input, select, a, [role="button"]"#;

/// Result of [`WebsiteAnalyzer::analyze_page`].
#[derive(Debug, Clone)]
pub struct PageAnalysis {
    pub url: String,
    pub elements: ElementMap,
    /// Where the snapshot was written, `None` if persisting failed
    pub saved_to: Option<PathBuf>,
}

/// One element's metadata together with its accessibility verdict.
#[derive(Debug, Clone, Serialize)]
pub struct AuditEntry {
    pub metadata: ElementMetadata,
    pub analysis: ElementAnalysis,
}

/// Discovers candidate elements on a page and records their metadata.
pub struct WebsiteAnalyzer {
    output_dir: PathBuf,
}

impl WebsiteAnalyzer {
    /// `output_dir` receives `analysis-results.json`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Scan the page, then persist the snapshot.
    ///
    /// The element map is returned even when writing the snapshot fails.
    pub fn analyze_page<P: PageHandle>(&self, page: &P) -> Result<PageAnalysis, AnalysisError> {
        let elements = self.scan(page)?;

        let url = page.url().unwrap_or_else(|e| {
            warn!(error = %e, "could not read page URL");
            "unknown".to_string()
        });

        let snapshot = Snapshot::new(url.clone(), elements);
        let saved_to = match save_snapshot(&self.output_dir, &snapshot) {
            Ok(path) => Some(path),
            Err(e) => {
                warn!(error = %e, "failed to persist analysis results");
                None
            }
        };

        Ok(PageAnalysis {
            url,
            elements: snapshot.elements,
            saved_to,
        })
    }

    /// Collect metadata for every attached candidate without persisting anything.
    ///
    /// Only the initial query can fail the scan; per-element failures are
    /// logged and the element is skipped.
    pub fn scan<P: PageHandle>(&self, page: &P) -> Result<ElementMap, AnalysisError> {
        let mut elements = ElementMap::new();

        for_each_candidate(page, |probe| {
            let metadata = collect_metadata(&probe);
            if elements.contains_key(&metadata.selector) {
                debug!(selector = %metadata.selector, "selector collision, replacing earlier element");
            }
            // Overwrites keep the first insertion position
            elements.insert(metadata.selector.clone(), metadata);
        })?;

        info!(count = elements.len(), "collected element metadata");
        Ok(elements)
    }

    /// Run the element analyzer over every attached candidate.
    pub fn audit_page<P: PageHandle>(&self, page: &P) -> Result<Vec<AuditEntry>, AnalysisError> {
        let mut entries = Vec::new();
        for_each_candidate(page, |probe| {
            entries.push(AuditEntry {
                metadata: collect_metadata(&probe),
                analysis: analyze_probe(&probe),
            });
        })?;
        Ok(entries)
    }
}

/// Query candidates and hand each attached element's probe to `visit`.
fn for_each_candidate<P, F>(page: &P, mut visit: F) -> Result<(), AnalysisError>
where
    P: PageHandle,
    F: FnMut(ElementProbe),
{
    let handles = page.query_all(CANDIDATE_SELECTOR)?;
    debug!(count = handles.len(), "candidate elements found");

    for (index, handle) in handles.iter().enumerate() {
        // Elements can disappear between enumeration and inspection
        let attached = handle.is_connected().unwrap_or(false);
        if !attached {
            trace!(index, "skipping detached element");
            continue;
        }

        match handle.inspect() {
            Ok(probe) => visit(probe),
            Err(source) => {
                let e = AnalysisError::DetachedElement { source };
                warn!(index, error = %e, "skipping element");
            }
        }
    }

    Ok(())
}

/// Build the persisted record for one element.
pub fn collect_metadata(probe: &ElementProbe) -> ElementMetadata {
    let label = probe
        .non_empty_attribute("aria-label")
        .or_else(|| probe.non_empty_attribute("alt"))
        .unwrap_or_default()
        .to_string();

    ElementMetadata {
        selector: derive_selector(probe),
        r#type: probe.tag.to_lowercase(),
        attributes: probe.attributes.clone(),
        interactable: probe.enabled,
        visibility: probe.visible,
        accessibility: Some(AccessibilityInfo {
            role: probe.role().unwrap_or_default().to_string(),
            label,
            required: Some(probe.attribute("required").is_some()),
        }),
    }
}

/// `#id`, else `.first-class`, else the tag name.
pub fn derive_selector(probe: &ElementProbe) -> String {
    if let Some(id) = probe.id() {
        return format!("#{}", id);
    }
    if let Some(class) = probe.first_class() {
        return format!(".{}", class);
    }
    probe.tag.to_lowercase()
}
