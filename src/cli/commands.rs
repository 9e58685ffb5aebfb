use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use indexmap::IndexMap;
use tracing::{debug, info};

use crate::analyzer::website_analyzer::{PageAnalysis, WebsiteAnalyzer};
use crate::browser::handle::SessionPage;
use crate::browser::session::BrowserSession;
use crate::config::config_model::{BrowserKind, TestSuiteConfig};
use crate::generator::code_generator::generate_test_files;
use crate::generator::playwright_config::{render_playwright_config, PLAYWRIGHT_CONFIG_FILE};
use crate::generator::test_case_generator::generate_test_suite;
use crate::report::console::{format_analysis_report, format_audit_report};
use crate::snapshot::store::{load_snapshot, snapshot_path};

/// Outcome of a `generate` run.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSummary {
    pub test_cases: usize,
    pub written: Vec<PathBuf>,
}

// ============================================================================
// analyze subcommand
// ============================================================================

pub fn cmd_analyze(
    url: &str,
    output_dir: &str,
    audit: bool,
    browser: BrowserKind,
    server_script: &str,
) -> Result<PageAnalysis, Box<dyn std::error::Error>> {
    info!(url, browser = browser.as_str(), "analyzing website");

    let session = Rc::new(RefCell::new(BrowserSession::launch(server_script, browser)?));
    session.borrow_mut().navigate(url)?;

    let page = SessionPage::new(Rc::clone(&session));
    let analyzer = WebsiteAnalyzer::new(output_dir);
    let analysis = analyzer.analyze_page(&page)?;

    print!("{}", format_analysis_report(&analysis));

    if audit {
        let entries = analyzer.audit_page(&page)?;
        print!("\n{}", format_audit_report(&entries));
    }

    session.borrow_mut().quit()?;
    Ok(analysis)
}

// ============================================================================
// generate subcommand
// ============================================================================

/// Load a snapshot, build the suite and write one spec per test case
/// plus `playwright.config.ts`.
///
/// Fails fast when the snapshot is missing.
pub fn cmd_generate(
    snapshot: &str,
    output_dir: &str,
    suite: &TestSuiteConfig,
) -> Result<GenerationSummary, Box<dyn std::error::Error>> {
    let snapshot_file = Path::new(snapshot);
    info!(path = %snapshot_file.display(), "reading analysis results");
    let snapshot = load_snapshot(snapshot_file)?;
    info!(elements = snapshot.elements.len(), "found elements to test");

    let cases = generate_test_suite(&snapshot.elements);
    info!(count = cases.len(), "generated test cases");

    let files = generate_test_files(&cases);
    info!(count = files.len(), "generated test files");

    let written = write_test_files(Path::new(output_dir), &files, suite)?;

    println!(
        "Generated {} test files from {} test cases in {}/",
        files.len(),
        cases.len(),
        output_dir
    );

    Ok(GenerationSummary {
        test_cases: cases.len(),
        written,
    })
}

/// Write rendered specs and the runner config into `output_dir`,
/// creating it if needed. Returns the written paths in order.
pub fn write_test_files(
    output_dir: &Path,
    files: &IndexMap<String, String>,
    suite: &TestSuiteConfig,
) -> std::io::Result<Vec<PathBuf>> {
    if !output_dir.exists() {
        info!(dir = %output_dir.display(), "creating tests directory");
    }
    std::fs::create_dir_all(output_dir)?;

    let mut written = Vec::with_capacity(files.len() + 1);
    for (file_name, content) in files {
        let path = output_dir.join(file_name);
        std::fs::write(&path, content)?;
        debug!(path = %path.display(), "wrote test file");
        written.push(path);
    }

    let config_path = output_dir.join(PLAYWRIGHT_CONFIG_FILE);
    std::fs::write(&config_path, render_playwright_config(suite))?;
    debug!(path = %config_path.display(), "wrote runner config");
    written.push(config_path);

    Ok(written)
}

// ============================================================================
// pipeline subcommand
// ============================================================================

pub fn cmd_pipeline(
    url: &str,
    analysis_dir: &str,
    output_dir: &str,
    audit: bool,
    suite: &TestSuiteConfig,
    browser: BrowserKind,
    server_script: &str,
) -> Result<GenerationSummary, Box<dyn std::error::Error>> {
    let analysis = cmd_analyze(url, analysis_dir, audit, browser, server_script)?;
    let snapshot = analysis
        .saved_to
        .unwrap_or_else(|| snapshot_path(Path::new(analysis_dir)));
    cmd_generate(&snapshot.to_string_lossy(), output_dir, suite)
}
