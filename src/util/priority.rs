use std::cmp::Reverse;

use crate::analyzer::analysis_model::{ElementMap, ElementMetadata};

/// Interactable elements first, then visible ones. Ties keep map order.
pub fn prioritize_elements(elements: &ElementMap) -> Vec<&ElementMetadata> {
    let mut ordered: Vec<&ElementMetadata> = elements.values().collect();
    ordered.sort_by_key(|m| (Reverse(m.interactable), Reverse(m.visibility)));
    ordered
}
