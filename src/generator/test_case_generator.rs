use crate::analyzer::analysis_model::{ElementMap, ElementMetadata};

use super::test_case_model::{AssertionKind, Priority, TestCase, TestStep, TestType};

pub const SAMPLE_VALID_INPUT: &str = "test@example.com";
pub const SAMPLE_INVALID_INPUT: &str = "invalid-input";
pub const PERFORMANCE_METRICS: &[&str] = &["FCP", "LCP", "CLS"];
pub const DOCUMENT_SELECTOR: &str = "document";

// ============================================================================
// Test suite generation from a scan snapshot
// ============================================================================

/// Generate the full suite for a snapshot's elements.
///
/// Concatenates three passes in a fixed order:
/// 1. **functional**: an interaction test per interactable element, plus a
///    form validation test per `input`/`form` element
/// 2. **accessibility**: one test per element with accessibility info
/// 3. **performance**: exactly one page load test
///
/// Within a pass, order follows the map. Each pass reads only the snapshot.
pub fn generate_test_suite(elements: &ElementMap) -> Vec<TestCase> {
    let mut cases = functional_tests(elements);
    cases.extend(accessibility_tests(elements));
    cases.extend(performance_tests());
    cases
}

// ============================================================================
// Passes
// ============================================================================

pub fn functional_tests(elements: &ElementMap) -> Vec<TestCase> {
    let mut cases = Vec::new();

    for (selector, metadata) in elements {
        if metadata.interactable {
            cases.push(interaction_test(selector, metadata));
        }

        if is_form_field(metadata) {
            cases.push(form_validation_test(selector, metadata));
        }
    }

    cases
}

pub fn accessibility_tests(elements: &ElementMap) -> Vec<TestCase> {
    elements
        .iter()
        .filter(|(_, metadata)| metadata.accessibility.is_some())
        .map(|(selector, metadata)| TestCase {
            name: format!("Accessibility Test - {}", selector),
            description: format!("Verify accessibility features for {} element", metadata.r#type),
            test_type: TestType::Accessibility,
            priority: Priority::High,
            steps: vec![
                TestStep::verify(
                    selector,
                    AssertionKind::AriaAttributes,
                    "Element should have proper ARIA attributes",
                ),
                TestStep::verify(
                    selector,
                    AssertionKind::Contrast,
                    "Element should have proper contrast ratio",
                ),
            ],
        })
        .collect()
}

/// Always exactly one test, whatever the element count.
pub fn performance_tests() -> Vec<TestCase> {
    vec![TestCase {
        name: "Page Load Performance Test".to_string(),
        description: "Verify page load times and performance metrics".to_string(),
        test_type: TestType::Performance,
        priority: Priority::Medium,
        steps: vec![TestStep::measure(
            DOCUMENT_SELECTOR,
            "Page should load within acceptable time limits",
            PERFORMANCE_METRICS,
        )],
    }]
}

// ============================================================================
// Individual test builders
// ============================================================================

/// Click test, preceded by a visibility check when the element was visible at scan time.
pub fn interaction_test(selector: &str, metadata: &ElementMetadata) -> TestCase {
    let mut steps = Vec::with_capacity(2);
    if metadata.visibility {
        steps.push(TestStep::verify(
            selector,
            AssertionKind::Visible,
            "Element should be visible",
        ));
    }
    steps.push(TestStep::click(
        selector,
        format!("{} should respond to interaction", metadata.r#type),
    ));

    TestCase {
        name: format!("Interaction Test - {}", selector),
        description: format!("Verify {} element interaction", metadata.r#type),
        test_type: TestType::Functional,
        priority: Priority::High,
        steps,
    }
}

pub fn form_validation_test(selector: &str, metadata: &ElementMetadata) -> TestCase {
    TestCase {
        name: format!("Form Validation Test - {}", selector),
        description: format!("Verify form validation for {}", metadata.r#type),
        test_type: TestType::Functional,
        priority: Priority::High,
        steps: vec![TestStep::input(
            selector,
            "Form should validate input correctly",
            SAMPLE_VALID_INPUT,
            SAMPLE_INVALID_INPUT,
        )],
    }
}

fn is_form_field(metadata: &ElementMetadata) -> bool {
    matches!(metadata.r#type.as_str(), "input" | "form")
}
