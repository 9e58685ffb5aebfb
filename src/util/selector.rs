use crate::analyzer::analysis_model::ElementMetadata;

/// Most specific selector recoverable from recorded attributes:
/// `#id`, then `[data-testid="…"]`, then `.first-class`, then the stored selector.
pub fn unique_selector(metadata: &ElementMetadata) -> String {
    let attr = |name: &str| {
        metadata
            .attributes
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    };

    if let Some(id) = attr("id") {
        return format!("#{}", id);
    }
    if let Some(test_id) = attr("data-testid") {
        return format!("[data-testid=\"{}\"]", test_id.replace('"', "\\\""));
    }
    if let Some(class) = attr("class").and_then(|c| c.split_whitespace().next()) {
        return format!(".{}", class);
    }
    metadata.selector.clone()
}

/// Lowercase, collapse every run of non-`[a-z0-9]` into one `-`, trim `-` at both ends.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;

    for c in name.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c);
        } else {
            pending_separator = true;
        }
    }

    slug
}

/// Test names become file names through the same normalization.
pub fn format_test_name(name: &str) -> String {
    slugify(name)
}
