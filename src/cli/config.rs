use clap::{Parser, Subcommand};

use crate::config::config_model::{AppConfig, BrowserKind};

pub const SERVER_SCRIPT_ENV: &str = "PAGE_TESTGEN_SERVER";
pub const DEFAULT_SERVER_SCRIPT: &str = "node/browser_server.js";

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "page-testgen",
    version,
    about = "Scan a web page and generate Playwright tests for its interactive elements"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: page-testgen.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Node.js Playwright server script
    #[arg(long, global = true, env = SERVER_SCRIPT_ENV)]
    pub server_script: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a page and save element metadata
    Analyze {
        /// Page to scan (default: suite.base_url from config)
        #[arg(long)]
        url: Option<String>,

        /// Directory receiving analysis-results.json
        #[arg(short, long, default_value = "analysis")]
        output_dir: String,

        /// Also print per-element accessibility scores
        #[arg(long)]
        audit: bool,

        /// Browser engine (default: suite.browser from config)
        #[arg(long, value_enum)]
        browser: Option<BrowserKind>,
    },

    /// Generate Playwright specs from saved analysis results
    Generate {
        /// Snapshot produced by `analyze`
        #[arg(long, default_value = "analysis/analysis-results.json")]
        snapshot: String,

        /// Output directory for generated specs
        #[arg(short, long, default_value = "tests/generated")]
        output_dir: String,
    },

    /// Analyze then generate in one go
    Pipeline {
        #[arg(long)]
        url: Option<String>,

        #[arg(long, default_value = "analysis")]
        analysis_dir: String,

        #[arg(short, long, default_value = "tests/generated")]
        output_dir: String,

        #[arg(long)]
        audit: bool,

        #[arg(long, value_enum)]
        browser: Option<BrowserKind>,
    },
}

// ============================================================================
// Resolution: CLI > config file > built-in default
// ============================================================================

pub fn resolve_url(cli_url: Option<&str>, config: &AppConfig) -> String {
    cli_url
        .map(str::to_string)
        .unwrap_or_else(|| config.suite.base_url.clone())
}

pub fn resolve_browser(cli_browser: Option<BrowserKind>, config: &AppConfig) -> BrowserKind {
    cli_browser.unwrap_or(config.suite.browser)
}

/// `--server-script` (or its env var), then the config file, then the bundled script.
pub fn resolve_server_script(cli_script: Option<&str>, config: &AppConfig) -> String {
    cli_script
        .or(config.browser_server.script.as_deref())
        .unwrap_or(DEFAULT_SERVER_SCRIPT)
        .to_string()
}
