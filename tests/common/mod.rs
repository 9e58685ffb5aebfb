#![allow(dead_code)]

pub mod mock_page;

use indexmap::IndexMap;
use page_testgen::analyzer::analysis_model::{AccessibilityInfo, ElementMap, ElementMetadata};
use page_testgen::browser::probe::ElementProbe;

/// Probe for a tag with the given attributes, visible and enabled,
/// with distinct foreground and background colors.
pub fn probe(tag: &str, attrs: &[(&str, &str)]) -> ElementProbe {
    ElementProbe {
        tag: tag.to_string(),
        attributes: attrs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<IndexMap<_, _>>(),
        visible: true,
        enabled: true,
        has_click_handler: false,
        color: Some("rgb(0, 0, 0)".into()),
        background_color: Some("rgb(255, 255, 255)".into()),
    }
}

pub fn metadata(selector: &str, tag: &str, interactable: bool, visibility: bool) -> ElementMetadata {
    ElementMetadata {
        selector: selector.to_string(),
        r#type: tag.to_string(),
        attributes: IndexMap::new(),
        interactable,
        visibility,
        accessibility: Some(AccessibilityInfo {
            role: String::new(),
            label: String::new(),
            required: Some(false),
        }),
    }
}

pub fn element_map(items: Vec<ElementMetadata>) -> ElementMap {
    items.into_iter().map(|m| (m.selector.clone(), m)).collect()
}

/// The `#submit` button used throughout the scenarios.
pub fn submit_button() -> ElementMetadata {
    ElementMetadata {
        selector: "#submit".into(),
        r#type: "button".into(),
        attributes: IndexMap::new(),
        interactable: true,
        visibility: true,
        accessibility: Some(AccessibilityInfo {
            role: "button".into(),
            label: "Submit".into(),
            required: None,
        }),
    }
}
