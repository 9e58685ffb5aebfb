use crate::analyzer::analysis_model::ElementMetadata;
use crate::analyzer::website_analyzer::{AuditEntry, PageAnalysis};

// ============================================================================
// Console reporter: formatted terminal output
// ============================================================================

/// Format a page scan for terminal output.
///
/// Produces output like:
/// ```text
/// === Analysis: https://example.com/ ===
/// Found 2 interactive elements
///
/// Element: #submit
///   Type: button
///   Interactable: true
///   Visible: true
///   Accessibility: role="button" label="Submit" required=false
///
/// === Saved to analysis/analysis-results.json ===
/// ```
pub fn format_analysis_report(analysis: &PageAnalysis) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== Analysis: {} ===\n", analysis.url));
    out.push_str(&format!(
        "Found {} interactive elements\n",
        analysis.elements.len()
    ));

    for metadata in analysis.elements.values() {
        out.push('\n');
        out.push_str(&format_element(metadata));
    }

    match &analysis.saved_to {
        Some(path) => out.push_str(&format!("\n=== Saved to {} ===\n", path.display())),
        None => out.push_str("\n=== Results were not saved ===\n"),
    }

    out
}

fn format_element(metadata: &ElementMetadata) -> String {
    let mut out = format!("Element: {}\n", metadata.selector);
    out.push_str(&format!("  Type: {}\n", metadata.r#type));
    out.push_str(&format!("  Interactable: {}\n", metadata.interactable));
    out.push_str(&format!("  Visible: {}\n", metadata.visibility));

    match &metadata.accessibility {
        Some(a) => out.push_str(&format!(
            "  Accessibility: role=\"{}\" label=\"{}\" required={}\n",
            a.role,
            a.label,
            a.required.unwrap_or(false)
        )),
        None => out.push_str("  Accessibility: none\n"),
    }

    out
}

/// Format accessibility scores, one line per element plus its issues.
///
/// ```text
/// === Accessibility Audit ===
///
///  60  #search  [interactive, form]
///     - No ARIA attributes found
///     - Potential contrast issues
///
/// === Average score: 60.0 (1 elements) ===
/// ```
pub fn format_audit_report(entries: &[AuditEntry]) -> String {
    let mut out = String::from("=== Accessibility Audit ===\n\n");

    for entry in entries {
        let analysis = &entry.analysis;
        let mut flags = Vec::new();
        if analysis.is_interactive {
            flags.push("interactive");
        }
        if analysis.is_form_element {
            flags.push("form");
        }
        if analysis.is_navigational {
            flags.push("navigation");
        }

        out.push_str(&format!(
            "{:>3}  {}  [{}]\n",
            analysis.accessibility_score,
            entry.metadata.selector,
            flags.join(", ")
        ));
        for issue in &analysis.potential_issues {
            out.push_str(&format!("    - {}\n", issue));
        }
    }

    let average = if entries.is_empty() {
        0.0
    } else {
        entries
            .iter()
            .map(|e| f64::from(e.analysis.accessibility_score))
            .sum::<f64>()
            / entries.len() as f64
    };

    out.push_str(&format!(
        "\n=== Average score: {:.1} ({} elements) ===\n",
        average,
        entries.len()
    ));

    out
}
