use page_testgen::analyzer::element_analyzer::{
    analyze_element, analyze_probe, ISSUE_CONTRAST, ISSUE_MISSING_LABEL, ISSUE_NO_ARIA,
};
use page_testgen::analyzer::error::AnalysisError;
use proptest::prelude::*;

use crate::common::mock_page::MockElement;
use crate::common::probe;

mod common;

// =========================================================================
// Interactivity
// =========================================================================

#[test]
fn interactive_tags_are_interactive_regardless_of_role() {
    for tag in ["button", "a", "input", "select", "textarea"] {
        let p = probe(tag, &[("role", "presentation")]);
        assert!(analyze_probe(&p).is_interactive, "{} should be interactive", tag);
    }
}

#[test]
fn interactive_roles_make_generic_tags_interactive() {
    for role in ["button", "link", "menuitem", "tab", "checkbox", "radio"] {
        let p = probe("div", &[("role", role)]);
        assert!(analyze_probe(&p).is_interactive, "role {} should be interactive", role);
    }
}

#[test]
fn click_handler_makes_div_interactive() {
    let mut p = probe("div", &[]);
    assert!(!analyze_probe(&p).is_interactive);

    p.has_click_handler = true;
    assert!(analyze_probe(&p).is_interactive);
}

#[test]
fn uppercase_tag_is_normalized() {
    let p = probe("BUTTON", &[]);
    let analysis = analyze_probe(&p);
    assert!(analysis.is_interactive);
    assert!(analysis.is_form_element);
}

// =========================================================================
// Form / navigation flags
// =========================================================================

#[test]
fn form_element_flag() {
    for tag in ["input", "select", "textarea", "button"] {
        assert!(analyze_probe(&probe(tag, &[])).is_form_element, "{}", tag);
    }
    assert!(!analyze_probe(&probe("a", &[])).is_form_element);
    assert!(!analyze_probe(&probe("div", &[])).is_form_element);
}

#[test]
fn navigational_flag() {
    assert!(analyze_probe(&probe("a", &[])).is_navigational);
    assert!(analyze_probe(&probe("div", &[("role", "link")])).is_navigational);
    assert!(analyze_probe(&probe("nav", &[("role", "navigation")])).is_navigational);
    assert!(!analyze_probe(&probe("button", &[])).is_navigational);
}

// =========================================================================
// Accessibility scoring
// =========================================================================

#[test]
fn fully_accessible_element_scores_100() {
    let p = probe("button", &[("aria-label", "Submit")]);
    let analysis = analyze_probe(&p);
    assert_eq!(analysis.accessibility_score, 100);
    assert!(analysis.potential_issues.is_empty());
}

#[test]
fn alt_or_title_counts_as_label() {
    let with_alt = analyze_probe(&probe("input", &[("alt", "Search"), ("aria-hidden", "false")]));
    assert_eq!(with_alt.accessibility_score, 100);

    let with_title = analyze_probe(&probe("a", &[("title", "Home"), ("aria-current", "page")]));
    assert_eq!(with_title.accessibility_score, 100);
}

#[test]
fn empty_label_attribute_is_not_a_label() {
    let p = probe("button", &[("aria-label", ""), ("aria-pressed", "false")]);
    let analysis = analyze_probe(&p);
    assert_eq!(analysis.accessibility_score, 75);
    assert_eq!(analysis.potential_issues, vec![ISSUE_MISSING_LABEL]);
}

#[test]
fn labelled_without_aria_loses_15() {
    let p = probe("img", &[("alt", "Logo")]);
    let analysis = analyze_probe(&p);
    assert_eq!(analysis.accessibility_score, 85);
    assert_eq!(analysis.potential_issues, vec![ISSUE_NO_ARIA]);
}

#[test]
fn identical_colors_lose_20() {
    let mut p = probe("button", &[("aria-label", "Go")]);
    p.color = Some("rgb(0, 0, 0)".into());
    p.background_color = Some("rgb(0,0,0)".into());
    let analysis = analyze_probe(&p);
    assert_eq!(analysis.accessibility_score, 80);
    assert_eq!(analysis.potential_issues, vec![ISSUE_CONTRAST]);
}

#[test]
fn unknown_colors_are_not_penalized() {
    let mut p = probe("button", &[("aria-label", "Go")]);
    p.color = None;
    p.background_color = None;
    assert_eq!(analyze_probe(&p).accessibility_score, 100);
}

#[test]
fn all_checks_fail_in_label_aria_contrast_order() {
    let mut p = probe("div", &[("class", "card")]);
    p.color = Some("red".into());
    p.background_color = Some("red".into());

    let analysis = analyze_probe(&p);
    assert_eq!(analysis.accessibility_score, 40);
    assert_eq!(
        analysis.potential_issues,
        vec![ISSUE_MISSING_LABEL, ISSUE_NO_ARIA, ISSUE_CONTRAST]
    );
}

// =========================================================================
// Handle-level analysis
// =========================================================================

#[test]
fn analyze_element_reads_through_handle() {
    let element = MockElement::attached(probe("a", &[("href", "/"), ("aria-label", "Home")]));
    let analysis = analyze_element(&element).unwrap();
    assert!(analysis.is_interactive);
    assert!(analysis.is_navigational);
    assert_eq!(analysis.accessibility_score, 100);
}

#[test]
fn analyze_element_reports_detached_element() {
    let element = MockElement::unreadable();
    let err = analyze_element(&element).unwrap_err();
    assert!(matches!(err, AnalysisError::DetachedElement { .. }));
    assert!(err.to_string().contains("detached"));
}

// =========================================================================
// Properties
// =========================================================================

proptest! {
    #[test]
    fn score_bounded_and_penalties_applied_once(
        has_label in any::<bool>(),
        has_aria in any::<bool>(),
        same_colors in any::<bool>(),
    ) {
        let mut attrs = Vec::new();
        if has_label {
            attrs.push(("title", "x"));
        }
        if has_aria {
            attrs.push(("aria-describedby", "hint"));
        }
        let mut p = probe("span", &attrs);
        if same_colors {
            p.background_color = p.color.clone();
        }

        let analysis = analyze_probe(&p);
        let expected: i32 = 100
            - (if has_label { 0 } else { 25 })
            - (if has_aria { 0 } else { 15 })
            - (if same_colors { 20 } else { 0 });

        prop_assert!(analysis.accessibility_score <= 100);
        prop_assert_eq!(i32::from(analysis.accessibility_score), expected);

        let failed = [!has_label, !has_aria, same_colors].iter().filter(|f| **f).count();
        prop_assert_eq!(analysis.potential_issues.len(), failed);
    }
}
