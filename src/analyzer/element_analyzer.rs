use crate::analyzer::analysis_model::ElementAnalysis;
use crate::analyzer::error::AnalysisError;
use crate::browser::handle::ElementHandle;
use crate::browser::probe::ElementProbe;

const INTERACTIVE_TAGS: &[&str] = &["button", "a", "input", "select", "textarea"];
const INTERACTIVE_ROLES: &[&str] = &["button", "link", "menuitem", "tab", "checkbox", "radio"];
const FORM_TAGS: &[&str] = &["input", "select", "textarea", "button"];
const NAVIGATION_ROLES: &[&str] = &["link", "navigation"];
const LABEL_ATTRIBUTES: &[&str] = &["aria-label", "alt", "title"];

pub const MISSING_LABEL_PENALTY: u8 = 25;
pub const MISSING_ARIA_PENALTY: u8 = 15;
pub const POOR_CONTRAST_PENALTY: u8 = 20;

pub const ISSUE_MISSING_LABEL: &str = "Missing accessible label";
pub const ISSUE_NO_ARIA: &str = "No ARIA attributes found";
pub const ISSUE_CONTRAST: &str = "Potential contrast issues";

/// Analyze one live element. Read-only with respect to the page.
///
/// A failed read maps to [`AnalysisError::DetachedElement`].
pub fn analyze_element<E: ElementHandle>(element: &E) -> Result<ElementAnalysis, AnalysisError> {
    let probe = element
        .inspect()
        .map_err(|source| AnalysisError::DetachedElement { source })?;
    Ok(analyze_probe(&probe))
}

/// Score an already-read element.
pub fn analyze_probe(probe: &ElementProbe) -> ElementAnalysis {
    let tag = probe.tag.to_lowercase();
    let role = probe.role();

    let (accessibility_score, potential_issues) = score_accessibility(probe);

    ElementAnalysis {
        is_interactive: is_interactive(&tag, role, probe.has_click_handler),
        is_form_element: FORM_TAGS.contains(&tag.as_str()),
        is_navigational: tag == "a" || role.is_some_and(|r| NAVIGATION_ROLES.contains(&r)),
        accessibility_score,
        potential_issues,
    }
}

fn is_interactive(tag: &str, role: Option<&str>, has_click_handler: bool) -> bool {
    if INTERACTIVE_TAGS.contains(&tag) {
        return true;
    }
    if role.is_some_and(|r| INTERACTIVE_ROLES.contains(&r)) {
        return true;
    }
    has_click_handler
}

/// Start at 100 and subtract a fixed penalty per failed check.
/// Issues are appended in check order: label, aria, contrast.
fn score_accessibility(probe: &ElementProbe) -> (u8, Vec<String>) {
    let mut score: u8 = 100;
    let mut issues = Vec::new();

    let has_label = LABEL_ATTRIBUTES
        .iter()
        .any(|name| probe.non_empty_attribute(name).is_some());
    if !has_label {
        issues.push(ISSUE_MISSING_LABEL.to_string());
        score = score.saturating_sub(MISSING_LABEL_PENALTY);
    }

    let has_aria = probe.attributes.keys().any(|k| k.starts_with("aria-"));
    if !has_aria {
        issues.push(ISSUE_NO_ARIA.to_string());
        score = score.saturating_sub(MISSING_ARIA_PENALTY);
    }

    if !has_distinct_colors(probe) {
        issues.push(ISSUE_CONTRAST.to_string());
        score = score.saturating_sub(POOR_CONTRAST_PENALTY);
    }

    (score, issues)
}

/// Crude contrast heuristic: foreground identical to background.
/// Unknown colors count as distinct.
fn has_distinct_colors(probe: &ElementProbe) -> bool {
    match (&probe.color, &probe.background_color) {
        (Some(fg), Some(bg)) => normalize_color(fg) != normalize_color(bg),
        _ => true,
    }
}

fn normalize_color(color: &str) -> String {
    color
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}
