use clap::ValueEnum;
use serde::{Deserialize, Serialize};

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `page-testgen.yaml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub suite: TestSuiteConfig,
    #[serde(default)]
    pub analyzer: AnalyzerConfig,
    #[serde(default)]
    pub browser_server: BrowserServerConfig,
}

/// Settings for the generated test suite and the page under analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestSuiteConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    #[serde(default = "default_retries")]
    pub retries: u32,

    #[serde(default = "default_true")]
    pub parallel: bool,

    #[serde(default)]
    pub browser: BrowserKind,
}

impl Default for TestSuiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            retries: default_retries(),
            parallel: true,
            browser: BrowserKind::default(),
        }
    }
}

/// Crawl settings.
///
/// Loaded, defaulted and round-tripped only. The single-page scan uses a
/// fixed candidate selector and `prioritize_elements` a fixed ordering, so
/// nothing in this crate reads these values; they are kept so existing
/// config files stay valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    #[serde(default = "default_crawl_depth")]
    pub crawl_depth: usize,

    #[serde(default = "default_exclude_patterns")]
    pub exclude_patterns: Vec<String>,

    #[serde(default = "default_element_types")]
    pub element_types: Vec<String>,

    #[serde(default)]
    pub priority_rules: PriorityRules,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            crawl_depth: default_crawl_depth(),
            exclude_patterns: default_exclude_patterns(),
            element_types: default_element_types(),
            priority_rules: PriorityRules::default(),
        }
    }
}

/// Keyword lists for the three priority tiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityRules {
    #[serde(default)]
    pub high: Vec<String>,
    #[serde(default)]
    pub medium: Vec<String>,
    #[serde(default)]
    pub low: Vec<String>,
}

impl Default for PriorityRules {
    fn default() -> Self {
        Self {
            high: strings(&["login", "checkout", "payment", "submit", "register"]),
            medium: strings(&["search", "filter", "sort", "navigation"]),
            low: strings(&["footer-links", "social-media", "optional-fields"]),
        }
    }
}

/// Where to find the Node.js Playwright server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrowserServerConfig {
    pub script: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BrowserKind {
    #[default]
    Chromium,
    Firefox,
    Webkit,
}

impl BrowserKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BrowserKind::Chromium => "chromium",
            BrowserKind::Firefox => "firefox",
            BrowserKind::Webkit => "webkit",
        }
    }
}

// Serde default helpers
fn default_base_url() -> String { "https://github.com/".to_string() }
fn default_timeout_ms() -> u64 { 30_000 }
fn default_retries() -> u32 { 2 }
fn default_true() -> bool { true }
fn default_crawl_depth() -> usize { 2 }
fn default_exclude_patterns() -> Vec<String> { strings(&["/api/", "/static/", "/assets/"]) }
fn default_element_types() -> Vec<String> { strings(&["button", "input", "select", "a", "form"]) }

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
