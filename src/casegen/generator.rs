use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::case::case_model::TestCase;
use crate::llm::client::{CompletionClient, CompletionRequest, LlmError};
use crate::llm::response::{extract_text, strip_code_fence};

// ============================================================================
// Test-case catalog generation — URL + brief → structured TestCase list
// ============================================================================

#[derive(Debug, Error)]
pub enum CasegenError {
    #[error("{0}")]
    Completion(#[from] LlmError),

    #[error("failed to parse response as test cases: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Render the catalog-generation prompt for a website URL and a short brief
/// of what the tests should focus on.
pub fn build_case_prompt(url: &str, brief: &str, number_of_cases: u32) -> String {
    format!(
        r#"I am tasked with generating test cases for a website.
The user provides the website URL and a brief description of the tests they want to focus
on (e.g., functionality, usability, performance, security, compatibility, or a
combination). Using this information, create {number_of_cases} test case(s) that cover the
specified areas comprehensively.

**Test Case Format:**
- **test_case_id**: A unique identifier (e.g., TC001).
- **name**: A short descriptive name.
- **description**: What the test aims to verify.
- **preconditions**: Any setup or conditions required before testing.
- **steps**: Clear, step-by-step instructions to execute the test.
- **expected_result**: The anticipated outcome if the website functions correctly.
- **url**: The website URL.

**Considerations:**
- Analyze the website's purpose and features based on the URL and brief.
- Include positive tests (valid inputs), negative tests (invalid inputs), and edge cases.
- Cover common website elements like navigation, forms, links, media, responsiveness, and
  load times.
- If the brief is vague, assume a broad scope and include a mix of functional,
  non-functional, and exploratory tests.

**Example JSON Format:**
```json
[
    {{
        "test_case_id": "TC001",
        "name": "Login Verify Test",
        "description": "Verify login functionality",
        "preconditions": "User must be registered",
        "steps": ["Go to login page", "Enter valid credentials", "Click login button"],
        "expected_result": "User is successfully logged in",
        "url": "{url}"
    }}
]
```

**User Input:**
- Website URL: {url}
- Test Case Focus: {brief}

Generate the test cases in a **structured JSON format**. Respond with ONLY the JSON array,
no explanation."#
    )
}

/// Generates a test-case catalog by asking the completion capability for a
/// structured JSON array and parsing it.
pub struct CaseGenerator {
    llm: Arc<dyn CompletionClient>,
}

impl CaseGenerator {
    pub fn new(llm: Arc<dyn CompletionClient>) -> Self {
        Self { llm }
    }

    /// Request and parse a catalog. Unlike code generation, a malformed
    /// response here is an explicit error: the caller (CLI or HTTP API)
    /// reports it instead of persisting garbage.
    pub async fn generate(
        &self,
        url: &str,
        brief: &str,
        number_of_cases: u32,
    ) -> Result<Vec<TestCase>, CasegenError> {
        let prompt = build_case_prompt(url, brief, number_of_cases);
        let response = self.llm.complete(&CompletionRequest::new(prompt)).await?;

        let text = extract_text(&response);
        let cleaned = strip_code_fence(&text, "json");

        let cases: Vec<TestCase> = serde_json::from_str(&cleaned)?;
        info!("generated {} test case(s) for {}", cases.len(), url);
        Ok(cases)
    }
}
