use indexmap::IndexMap;

use crate::util::perf::PERFORMANCE_PROBE_FN;
use crate::util::selector::slugify;

use super::js::{escape_js_string, sanitize_comment};
use super::locator::locator_for;
use super::test_case_model::{AssertionKind, StepAction, TestCase, TestStep, TestType};

pub const TEST_FILE_EXTENSION: &str = ".spec.ts";

pub const LOAD_TIME_BUDGET_MS: u32 = 3000;
pub const DOM_READY_BUDGET_MS: u32 = 1500;
pub const FIRST_PAINT_BUDGET_MS: u32 = 1000;

/// Value typed into inputs that carry no sample data.
pub const PLACEHOLDER_INPUT: &str = "test";

// ============================================================================
// File generation
// ============================================================================

/// Render every test case into a Playwright spec, keyed by file name.
///
/// Pure: no DOM access, no I/O. Every case gets its own file; when a name
/// slugifies onto an existing file, `-2`, `-3`, ... is appended to the slug.
pub fn generate_test_files(cases: &[TestCase]) -> IndexMap<String, String> {
    cases.iter().fold(IndexMap::new(), |mut files, case| {
        let file_name = free_file_name(&files, &slugify(&case.name));
        files.insert(file_name, render_test_file(case));
        files
    })
}

fn free_file_name(files: &IndexMap<String, String>, slug: &str) -> String {
    let plain = format!("{}{}", slug, TEST_FILE_EXTENSION);
    if !files.contains_key(&plain) {
        return plain;
    }
    (2u32..)
        .map(|n| format!("{}-{}{}", slug, n, TEST_FILE_EXTENSION))
        .find(|candidate| !files.contains_key(candidate))
        .unwrap_or(plain)
}

/// File name for a case before any collision suffix.
pub fn test_file_name(case: &TestCase) -> String {
    format!("{}{}", slugify(&case.name), TEST_FILE_EXTENSION)
}

/// `describe` title for a case.
pub fn suite_title(case: &TestCase) -> &'static str {
    match case.test_type {
        TestType::Accessibility => "Accessibility Tests",
        TestType::Performance => "Performance Tests",
        TestType::Functional if case.steps.iter().any(|s| s.action == StepAction::Input) => {
            "Form Validation Tests"
        }
        TestType::Functional => "Interaction Tests",
    }
}

/// Render one case as a complete `.spec.ts` source file.
pub fn render_test_file(case: &TestCase) -> String {
    let title = suite_title(case);
    let slug = slugify(&case.name);
    let name = escape_js_string(&case.name);

    let needs_axe = case
        .steps
        .iter()
        .any(|s| verify_checks(s).contains(&AssertionKind::Contrast));

    let mut out = String::from("import { test, expect } from '@playwright/test';\n");
    if needs_axe {
        out.push_str("import AxeBuilder from '@axe-core/playwright';\n");
    }

    out.push_str("\n/**\n");
    out.push_str(&format!(" * {}\n", title));
    out.push_str(&format!(" * Target: {}\n", sanitize_comment(&case.name)));
    out.push_str(&format!(" * {}\n", sanitize_comment(&case.description)));
    out.push_str(" * Elements tested:\n");
    for step in &case.steps {
        out.push_str(&format!(
            " *  - {}: {}\n",
            sanitize_comment(&step.selector),
            sanitize_comment(&step.expected_result)
        ));
    }
    out.push_str(" */\n");

    out.push_str(&format!("test.describe('{}', () => {{\n", title));
    out.push_str(
        "  test.beforeEach(async ({ page }) => {
    await page.goto('/');
  });

  test.beforeEach(async ({ page }) => {
    if (process.env.NODE_ENV === 'development') {
      // Highlight elements under test and slow down for visual debugging
      await page.addStyleTag({ content: '[data-testid] { outline: 2px solid red !important; }' });
      page.setDefaultTimeout(2000);
    }
  });

",
    );

    out.push_str(&format!("  test('{}', async ({{ page }}) => {{\n", name));
    out.push_str(&screenshot_block("before", &slug));
    out.push('\n');

    for step in &case.steps {
        if let Some(code) = render_step(step) {
            out.push_str(&indent(&code, 4));
            out.push('\n');
        }
    }

    out.push_str(&screenshot_block("after", &slug));
    out.push_str("  });\n});\n");
    out
}

fn screenshot_block(when: &str, slug: &str) -> String {
    format!(
        "    if (process.env.NODE_ENV === 'development') {{
      await page.screenshot({{ path: 'test-artifacts/{when}-{slug}.png' }});
    }}
"
    )
}

// ============================================================================
// Step rendering
// ============================================================================

/// Render one step, dispatching on its action.
///
/// Executable code is wrapped in a `test.step` block. Unsupported actions
/// and measure steps without metrics become comments. A verify step with no
/// recognised check renders nothing.
pub fn render_step(step: &TestStep) -> Option<String> {
    let body = match &step.action {
        StepAction::Click => render_click(step),
        StepAction::Input => render_input(step),
        StepAction::Verify => {
            let checks: Vec<String> = verify_checks(step)
                .into_iter()
                .map(|kind| render_check(kind, step))
                .collect();
            if checks.is_empty() {
                return None;
            }
            checks.join("\n\n")
        }
        StepAction::Measure => match step.metrics() {
            Some(metrics) => render_measure(metrics),
            None => return Some(format!("// {}", sanitize_comment(&step.expected_result))),
        },
        StepAction::Other(action) => {
            return Some(format!(
                "// Unsupported action: {}\n// {}",
                sanitize_comment(action),
                sanitize_comment(&step.expected_result)
            ));
        }
    };

    Some(format!(
        "await test.step('{}', async () => {{\n{}\n}});",
        escape_js_string(&step.expected_result),
        indent(&body, 2)
    ))
}

/// Checks a verify step asks for.
///
/// Uses the explicit assertion kind when set. Steps without one fall back
/// to keywords in `expectedResult` (`ARIA`, `contrast`); unmatched text
/// yields no checks.
pub fn verify_checks(step: &TestStep) -> Vec<AssertionKind> {
    if step.action != StepAction::Verify {
        return Vec::new();
    }
    if let Some(kind) = step.assertion {
        return vec![kind];
    }

    let mut kinds = Vec::new();
    if step.expected_result.contains("ARIA") {
        kinds.push(AssertionKind::AriaAttributes);
    }
    if step.expected_result.contains("contrast") {
        kinds.push(AssertionKind::Contrast);
    }
    kinds
}

fn render_click(step: &TestStep) -> String {
    format!(
        "const element = {locator};
await expect(element).toBeVisible();
const captureState = () =>
  element.evaluate((el) => ({{
    text: el.textContent?.trim(),
    classes: el.className,
    attributes: Object.fromEntries([...el.attributes].map((a) => [a.name, a.value])),
  }}));

const beforeState = await captureState();
await element.click();
const afterState = await captureState();

// {expected}
expect(afterState).not.toEqual(beforeState);",
        locator = locator_for(&step.selector).to_code(),
        expected = sanitize_comment(&step.expected_result),
    )
}

fn render_input(step: &TestStep) -> String {
    let locator = locator_for(&step.selector).to_code();

    match step.input_data() {
        Some((valid, invalid)) => format!(
            "const element = {locator};
await expect(element).toBeVisible();

// Valid input
await element.fill('{valid}');
await expect(element).toHaveValue('{valid}');
await expect(element).not.toHaveAttribute('aria-invalid', 'true');

// Invalid input
await element.fill('{invalid}');
await expect(element).toHaveValue('{invalid}');
await element.press('Tab');
await expect(element).toHaveAttribute('aria-invalid', 'true');",
            valid = escape_js_string(valid),
            invalid = escape_js_string(invalid),
        ),
        None => format!("await {}.fill('{}');", locator, PLACEHOLDER_INPUT),
    }
}

fn render_check(kind: AssertionKind, step: &TestStep) -> String {
    let locator = locator_for(&step.selector).to_code();

    match kind {
        AssertionKind::Visible => format!("await expect({}).toBeVisible();", locator),
        AssertionKind::AriaAttributes => format!(
            "const ariaElement = {locator};
await expect(ariaElement).toBeVisible();

// Verify ARIA attributes
const ariaAttributes = await ariaElement.evaluate((el) =>
  [...el.attributes].filter((a) => a.name.startsWith('aria-')).map((a) => a.name),
);
expect(ariaAttributes.length).toBeGreaterThan(0);

// Verify role
await expect(ariaElement).toHaveAttribute('role');"
        ),
        AssertionKind::Contrast => format!(
            "const contrastElement = {locator};
await expect(contrastElement).toBeVisible();

// Check color contrast with axe-core, scoped to the element
const contrastResults = await new AxeBuilder({{ page }})
  .include('{selector}')
  .withRules(['color-contrast'])
  .analyze();
expect(contrastResults.violations).toHaveLength(0);",
            selector = escape_js_string(&step.selector),
        ),
    }
}

fn render_measure(metrics: &[String]) -> String {
    format!(
        "// Requested metrics: {requested}
const metrics = await page.evaluate({probe});

expect(metrics.loadTime).toBeLessThan({load});
expect(metrics.domContentLoaded).toBeLessThan({dom});
expect(metrics.firstPaint).toBeLessThan({paint});",
        requested = sanitize_comment(&metrics.join(", ")),
        probe = PERFORMANCE_PROBE_FN,
        load = LOAD_TIME_BUDGET_MS,
        dom = DOM_READY_BUDGET_MS,
        paint = FIRST_PAINT_BUDGET_MS,
    )
}

/// Prefix every non-empty line with `width` spaces.
fn indent(text: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{}{}", pad, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
