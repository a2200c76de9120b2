use std::fmt;

use serde::{Deserialize, Serialize};

use crate::case::case_model::TestCase;

// ============================================================================
// Result validation — substring containment verdict
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TestStatus {
    Passed,
    Failed,
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestStatus::Passed => write!(f, "PASSED"),
            TestStatus::Failed => write!(f, "FAILED"),
        }
    }
}

/// Pass/fail verdict for one test case. Derived per run, not persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationResult {
    pub test_name: String,
    pub status: TestStatus,
    pub details: String,
}

/// Compare the expected-result string against the agent's actual outcome
/// text: case-insensitive substring containment, nothing smarter. This is a
/// deliberately crude heuristic; there is no partial credit or fuzzy match.
pub fn validate_result(case: &TestCase, actual_result: &str) -> ValidationResult {
    let expected = case.expected_result.to_lowercase();
    let actual = actual_result.to_lowercase();

    let status = if actual.contains(&expected) {
        TestStatus::Passed
    } else {
        TestStatus::Failed
    };

    ValidationResult {
        test_name: case.name.clone(),
        status,
        details: actual,
    }
}
