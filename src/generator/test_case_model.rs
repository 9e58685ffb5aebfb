use std::fmt;

use serde::{Deserialize, Serialize};

/// An abstract test, independent of any test framework.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub test_type: TestType,
    pub priority: Priority,
    pub steps: Vec<TestStep>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestType {
    Functional,
    Accessibility,
    Performance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// One step of a [`TestCase`].
///
/// The shape of `data` depends on `action`; read it through
/// [`TestStep::input_data`] and [`TestStep::metrics`], which check the action first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestStep {
    pub action: StepAction,
    pub selector: String,
    pub expected_result: String,
    /// Which check a `verify` step performs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assertion: Option<AssertionKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<StepData>,
}

impl TestStep {
    pub fn click(selector: &str, expected_result: impl Into<String>) -> Self {
        Self::new(StepAction::Click, selector, expected_result)
    }

    pub fn verify(selector: &str, assertion: AssertionKind, expected_result: impl Into<String>) -> Self {
        Self {
            assertion: Some(assertion),
            ..Self::new(StepAction::Verify, selector, expected_result)
        }
    }

    pub fn input(
        selector: &str,
        expected_result: impl Into<String>,
        valid_input: &str,
        invalid_input: &str,
    ) -> Self {
        Self {
            data: Some(StepData::Input {
                valid_input: valid_input.to_string(),
                invalid_input: invalid_input.to_string(),
            }),
            ..Self::new(StepAction::Input, selector, expected_result)
        }
    }

    pub fn measure(selector: &str, expected_result: impl Into<String>, metrics: &[&str]) -> Self {
        Self {
            data: Some(StepData::Measure {
                metrics: metrics.iter().map(|m| m.to_string()).collect(),
            }),
            ..Self::new(StepAction::Measure, selector, expected_result)
        }
    }

    pub fn new(action: StepAction, selector: &str, expected_result: impl Into<String>) -> Self {
        Self {
            action,
            selector: selector.to_string(),
            expected_result: expected_result.into(),
            assertion: None,
            data: None,
        }
    }

    /// `(valid, invalid)` sample values, only for `input` steps carrying input data.
    pub fn input_data(&self) -> Option<(&str, &str)> {
        match (&self.action, &self.data) {
            (
                StepAction::Input,
                Some(StepData::Input {
                    valid_input,
                    invalid_input,
                }),
            ) => Some((valid_input.as_str(), invalid_input.as_str())),
            _ => None,
        }
    }

    /// Requested metrics, only for `measure` steps carrying metric data.
    pub fn metrics(&self) -> Option<&[String]> {
        match (&self.action, &self.data) {
            (StepAction::Measure, Some(StepData::Measure { metrics })) => Some(metrics.as_slice()),
            _ => None,
        }
    }
}

/// Step verb. Unknown verbs are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StepAction {
    Click,
    Input,
    Verify,
    Measure,
    Other(String),
}

impl StepAction {
    pub fn as_str(&self) -> &str {
        match self {
            StepAction::Click => "click",
            StepAction::Input => "input",
            StepAction::Verify => "verify",
            StepAction::Measure => "measure",
            StepAction::Other(s) => s,
        }
    }
}

impl From<String> for StepAction {
    fn from(s: String) -> Self {
        let known = match s.as_str() {
            "click" => Some(StepAction::Click),
            "input" => Some(StepAction::Input),
            "verify" => Some(StepAction::Verify),
            "measure" => Some(StepAction::Measure),
            _ => None,
        };
        known.unwrap_or(StepAction::Other(s))
    }
}

impl From<StepAction> for String {
    fn from(action: StepAction) -> Self {
        action.as_str().to_string()
    }
}

impl fmt::Display for StepAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check performed by a `verify` step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssertionKind {
    Visible,
    AriaAttributes,
    Contrast,
}

/// Action-specific payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StepData {
    Input {
        #[serde(rename = "validInput")]
        valid_input: String,
        #[serde(rename = "invalidInput")]
        invalid_input: String,
    },
    Measure {
        metrics: Vec<String>,
    },
}
