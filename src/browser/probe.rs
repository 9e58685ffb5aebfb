use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Properties of one DOM element, read in a single batch.
///
/// The server issues the individual reads concurrently; only the composition
/// done on the Rust side is ordered.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementProbe {
    /// Lower-cased tag name
    pub tag: String,
    #[serde(default)]
    pub attributes: IndexMap<String, String>,
    #[serde(default)]
    pub visible: bool,
    #[serde(default)]
    pub enabled: bool,
    /// Best-effort; the server reports false when listener introspection is unavailable
    #[serde(default)]
    pub has_click_handler: bool,
    /// Computed `color`
    #[serde(default)]
    pub color: Option<String>,
    /// Computed `background-color`
    #[serde(default)]
    pub background_color: Option<String>,
}

impl ElementProbe {
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Attribute value, treating an empty string as absent.
    pub fn non_empty_attribute(&self, name: &str) -> Option<&str> {
        self.attribute(name).filter(|v| !v.is_empty())
    }

    pub fn role(&self) -> Option<&str> {
        self.non_empty_attribute("role")
    }

    pub fn id(&self) -> Option<&str> {
        self.non_empty_attribute("id")
    }

    pub fn first_class(&self) -> Option<&str> {
        self.attribute("class")
            .and_then(|c| c.split_whitespace().next())
    }
}
