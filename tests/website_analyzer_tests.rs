use page_testgen::analyzer::website_analyzer::{collect_metadata, derive_selector, WebsiteAnalyzer};
use page_testgen::snapshot::store::{load_snapshot, SNAPSHOT_FILE};

use crate::common::mock_page::{MockElement, MockPage};
use crate::common::probe;

mod common;

// =========================================================================
// Selector derivation
// =========================================================================

#[test]
fn selector_prefers_id_then_class_then_tag() {
    assert_eq!(derive_selector(&probe("button", &[("id", "go"), ("class", "btn")])), "#go");
    assert_eq!(derive_selector(&probe("button", &[("class", "btn primary")])), ".btn");
    assert_eq!(derive_selector(&probe("BUTTON", &[])), "button");
}

#[test]
fn selector_ignores_empty_id_and_blank_class() {
    assert_eq!(derive_selector(&probe("a", &[("id", ""), ("class", "  nav-link ")])), ".nav-link");
    assert_eq!(derive_selector(&probe("a", &[("class", "   ")])), "a");
}

// =========================================================================
// Metadata collection
// =========================================================================

#[test]
fn metadata_carries_state_and_accessibility() {
    let mut p = probe(
        "input",
        &[("id", "email"), ("aria-label", "Email"), ("required", ""), ("role", "textbox")],
    );
    p.enabled = false;
    p.visible = true;

    let m = collect_metadata(&p);
    assert_eq!(m.selector, "#email");
    assert_eq!(m.r#type, "input");
    assert!(!m.interactable);
    assert!(m.visibility);
    assert_eq!(m.attributes.len(), 4);

    let a = m.accessibility.unwrap();
    assert_eq!(a.role, "textbox");
    assert_eq!(a.label, "Email");
    assert_eq!(a.required, Some(true));
}

#[test]
fn label_falls_back_to_alt_then_empty() {
    let m = collect_metadata(&probe("input", &[("type", "image"), ("alt", "Go")]));
    assert_eq!(m.accessibility.unwrap().label, "Go");

    let m = collect_metadata(&probe("button", &[("title", "ignored")]));
    let a = m.accessibility.unwrap();
    assert_eq!(a.label, "");
    assert_eq!(a.role, "");
    assert_eq!(a.required, Some(false));
}

// =========================================================================
// Page scan
// =========================================================================

#[test]
fn scan_skips_detached_and_failing_elements() {
    let page = MockPage::new(
        "https://example.com/",
        vec![
            MockElement::attached(probe("button", &[("id", "a")])),
            MockElement::detached(probe("button", &[("id", "gone")])),
            MockElement::unreadable(),
            MockElement::broken_connection_check(probe("a", &[("id", "flaky")])),
            MockElement::attached(probe("a", &[("id", "b")])),
        ],
    );

    let dir = tempfile::tempdir().unwrap();
    let elements = WebsiteAnalyzer::new(dir.path()).scan(&page).unwrap();

    let keys: Vec<&str> = elements.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["#a", "#b"]);
}

#[test]
fn colliding_selectors_keep_last_write() {
    let mut first = probe("button", &[("class", "btn"), ("data-n", "1")]);
    first.enabled = true;
    let mut second = probe("button", &[("class", "btn"), ("data-n", "2")]);
    second.enabled = false;

    let page = MockPage::new(
        "https://example.com/",
        vec![
            MockElement::attached(first),
            MockElement::attached(probe("a", &[("id", "home")])),
            MockElement::attached(second),
        ],
    );

    let dir = tempfile::tempdir().unwrap();
    let elements = WebsiteAnalyzer::new(dir.path()).scan(&page).unwrap();

    assert_eq!(elements.len(), 2);
    let btn = &elements[".btn"];
    assert_eq!(btn.attributes["data-n"], "2");
    assert!(!btn.interactable);
    // Position of the first insertion is kept
    assert_eq!(elements.get_index(0).unwrap().0, ".btn");
}

#[test]
fn query_failure_fails_the_scan() {
    let mut page = MockPage::new("https://example.com/", vec![]);
    page.fail_query = true;

    let dir = tempfile::tempdir().unwrap();
    assert!(WebsiteAnalyzer::new(dir.path()).analyze_page(&page).is_err());
}

// =========================================================================
// Persistence
// =========================================================================

#[test]
fn analyze_page_persists_snapshot_and_creates_directory() {
    let page = MockPage::new(
        "https://example.com/login",
        vec![MockElement::attached(probe("button", &[("id", "submit")]))],
    );

    let root = tempfile::tempdir().unwrap();
    let out = root.path().join("nested").join("analysis");
    let analysis = WebsiteAnalyzer::new(&out).analyze_page(&page).unwrap();

    let saved = analysis.saved_to.expect("snapshot should be saved");
    assert_eq!(saved, out.join(SNAPSHOT_FILE));

    let snapshot = load_snapshot(&saved).unwrap();
    assert_eq!(snapshot.url, "https://example.com/login");
    assert_eq!(snapshot.elements, analysis.elements);
    assert!(snapshot.elements.contains_key("#submit"));
}

#[test]
fn analyze_page_returns_elements_when_persisting_fails() {
    let page = MockPage::new(
        "https://example.com/",
        vec![MockElement::attached(probe("button", &[("id", "submit")]))],
    );

    // A regular file where the output directory should go
    let root = tempfile::tempdir().unwrap();
    let blocker = root.path().join("analysis");
    std::fs::write(&blocker, "not a directory").unwrap();

    let analysis = WebsiteAnalyzer::new(&blocker).analyze_page(&page).unwrap();
    assert!(analysis.saved_to.is_none());
    assert_eq!(analysis.elements.len(), 1);
}

// =========================================================================
// Audit
// =========================================================================

#[test]
fn audit_pairs_metadata_with_analysis() {
    let page = MockPage::new(
        "https://example.com/",
        vec![
            MockElement::attached(probe("button", &[("id", "ok"), ("aria-label", "OK")])),
            MockElement::detached(probe("button", &[("id", "gone")])),
            MockElement::attached(probe("a", &[("class", "nav")])),
        ],
    );

    let dir = tempfile::tempdir().unwrap();
    let entries = WebsiteAnalyzer::new(dir.path()).audit_page(&page).unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].metadata.selector, "#ok");
    assert_eq!(entries[0].analysis.accessibility_score, 100);
    assert_eq!(entries[1].metadata.selector, ".nav");
    assert_eq!(entries[1].analysis.accessibility_score, 60);
    assert!(entries[1].analysis.is_navigational);
}

#[test]
fn audit_after_analysis_queries_fresh_handles() {
    let page = MockPage::new(
        "https://example.com/",
        vec![
            MockElement::attached(probe("button", &[("id", "ok")])),
            MockElement::attached(probe("input", &[("id", "q")])),
        ],
    );
    let dir = tempfile::tempdir().unwrap();
    let analyzer = WebsiteAnalyzer::new(dir.path());

    let analysis = analyzer.analyze_page(&page).unwrap();
    let entries = analyzer.audit_page(&page).unwrap();

    assert_eq!(page.queries.get(), 2);
    assert_eq!(analysis.elements.len(), 2);
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].metadata.selector, "#q");
}
