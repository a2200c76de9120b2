use serde::{Deserialize, Serialize};

/// A single QA test scenario, expressed in natural language.
///
/// Built in-memory from the built-in catalog, deserialized from a JSON
/// catalog file, or received over the HTTP API. Immutable once constructed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TestCase {
    /// Optional catalog identifier (e.g. "TC001")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_case_id: Option<String>,

    /// Human-readable name, unique per run. Used as a file-system key
    /// after sanitization (see `class_name::derive_class_name`).
    pub name: String,

    /// What the scenario verifies
    pub description: String,

    /// Optional setup conditions required before the test
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preconditions: Option<String>,

    /// Ordered natural-language steps handed to the browser agent
    pub steps: Vec<String>,

    /// Outcome text the final agent result must contain for a PASSED verdict
    pub expected_result: String,

    /// URL the scenario starts from
    pub url: String,
}

impl TestCase {
    pub fn new(
        name: &str,
        description: &str,
        steps: Vec<String>,
        url: &str,
        expected_result: &str,
    ) -> Self {
        Self {
            test_case_id: None,
            name: name.to_string(),
            description: description.to_string(),
            preconditions: None,
            steps,
            expected_result: expected_result.to_string(),
            url: url.to_string(),
        }
    }
}

// ============================================================================
// Built-in catalog
// ============================================================================

/// Preamble prepended to every built-in scenario. Instructs the agent to
/// behave like a careful human user rather than a script.
pub const COMMON_CASE_STEPS: &str = "IMPORTANT INSTRUCTIONS: As a human user interacting with the website, I will: \
1) Perform each action as naturally as possible, mimicking real user behavior. \
2) If a modal or popup appears, handle every modal. \
3) Ignore any advertisements or promotional content. \
4) Wait for pages to fully load before taking any action. \
5) Use scrolling to find elements that are not immediately visible. \
6) Interact with elements exactly as a human would: click input fields before typing, \
hover over buttons that are not immediately clickable, scroll smoothly before interacting. \
7) Take actions deliberately and carefully. \
8) Pause briefly between actions to simulate human timing. \
9) Always verify my actions have the expected result before proceeding.";

/// The default scenario set used when no catalog file is supplied.
pub fn builtin_cases() -> Vec<TestCase> {
    vec![TestCase::new(
        "Google Search Test",
        "Verifies basic search functionality works correctly",
        vec![
            COMMON_CASE_STEPS.to_string(),
            "Open Google homepage.".to_string(),
            "Verify the search input field is visible.".to_string(),
            "Type \"automation testing\" in the search box.".to_string(),
            "Press Enter or click the search button.".to_string(),
            "Verify search results are displayed with relevant links.".to_string(),
        ],
        "https://www.google.com/",
        "Search results for 'automation testing' are displayed",
    )]
}
