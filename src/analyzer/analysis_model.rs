use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Elements keyed by derived selector, in discovery order.
pub type ElementMap = IndexMap<String, ElementMetadata>;

/// What the website analyzer records about one element.
///
/// `selector` is derived from id, first class or tag name and is not unique;
/// a later element with the same selector replaces an earlier one in an
/// [`ElementMap`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ElementMetadata {
    pub selector: String,

    /// Lower-cased tag name
    pub r#type: String,

    #[serde(default)]
    pub attributes: IndexMap<String, String>,

    /// Enabled state at scan time
    #[serde(default)]
    pub interactable: bool,

    #[serde(default)]
    pub visibility: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessibility: Option<AccessibilityInfo>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AccessibilityInfo {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
}

/// Interactivity and accessibility verdict for one element. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ElementAnalysis {
    pub is_interactive: bool,
    pub is_form_element: bool,
    pub is_navigational: bool,
    /// 0..=100
    pub accessibility_score: u8,
    /// In check order: label, aria, contrast
    pub potential_issues: Vec<String>,
}
