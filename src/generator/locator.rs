use super::js::{escape_js_regex, escape_js_string};

/// A Playwright locator strategy for a recorded selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    /// `page.getByTestId(..)`
    TestId(String),
    /// `page.getByRole(..)`, optionally filtered by accessible name
    Role {
        role: &'static str,
        name: Option<String>,
    },
    /// `page.locator(..)`, flagged for manual review
    Raw(String),
}

impl Locator {
    /// Render as a TypeScript expression on `page`.
    pub fn to_code(&self) -> String {
        match self {
            Locator::TestId(id) => format!("page.getByTestId('{}')", escape_js_string(id)),
            Locator::Role { role, name: None } => format!("page.getByRole('{}')", role),
            Locator::Role {
                role,
                name: Some(name),
            } => format!(
                "page.getByRole('{}', {{ name: /{}/ }})",
                role,
                escape_js_regex(name)
            ),
            Locator::Raw(selector) => format!(
                "page.locator('{}') /* review: replace with a semantic locator */",
                escape_js_string(selector)
            ),
        }
    }
}

/// A (predicate, strategy) pair. Rules are tried top to bottom.
pub struct LocatorRule {
    pub name: &'static str,
    pub applies: fn(&str) -> bool,
    pub build: fn(&str) -> Locator,
}

pub const LOCATOR_RULES: &[LocatorRule] = &[
    LocatorRule {
        name: "id",
        applies: |s| s.starts_with('#'),
        build: |s| Locator::TestId(s[1..].to_string()),
    },
    LocatorRule {
        name: "bare-link",
        applies: |s| s == "a",
        build: |_| role("link", None),
    },
    LocatorRule {
        name: "bare-button",
        applies: |s| s == "button",
        build: |_| role("button", None),
    },
    LocatorRule {
        name: "bare-input",
        applies: |s| s == "input",
        build: |_| role("textbox", None),
    },
    LocatorRule {
        name: "button-like",
        applies: |s| s.contains("btn") || s.contains("button"),
        build: |s| role("button", Some(s)),
    },
    LocatorRule {
        name: "link-like",
        applies: |s| s.contains("link"),
        build: |s| role("link", Some(s)),
    },
    LocatorRule {
        name: "field-like",
        applies: |s| s.contains("input") || s.contains("field"),
        build: |s| role("textbox", Some(s)),
    },
];

/// Used when no rule matches.
pub static FALLBACK_RULE: LocatorRule = LocatorRule {
    name: "raw",
    applies: |_| true,
    build: |s| Locator::Raw(s.to_string()),
};

fn role(role: &'static str, name: Option<&str>) -> Locator {
    Locator::Role {
        role,
        name: name.map(str::to_string),
    }
}

/// The first rule whose predicate accepts `selector`, or the fallback.
pub fn matching_rule(selector: &str) -> &'static LocatorRule {
    LOCATOR_RULES
        .iter()
        .find(|rule| (rule.applies)(selector))
        .unwrap_or(&FALLBACK_RULE)
}

/// Pick a locator for `selector`. Ambiguous selectors can be misclassified;
/// e.g. `.nav-link-button` resolves to a button.
pub fn locator_for(selector: &str) -> Locator {
    (matching_rule(selector).build)(selector)
}
