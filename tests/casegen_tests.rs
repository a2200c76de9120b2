use std::sync::Arc;

use serde_json::json;
use testforge::casegen::generator::{CaseGenerator, CasegenError, build_case_prompt};
use testforge::llm::client::StaticCompletionClient;

// =========================================================================
// Prompt construction
// =========================================================================

#[test]
fn prompt_carries_url_brief_and_count() {
    let prompt = build_case_prompt("https://shop.example.com/", "checkout and payment flows", 3);

    assert!(prompt.contains("Website URL: https://shop.example.com/"));
    assert!(prompt.contains("Test Case Focus: checkout and payment flows"));
    assert!(prompt.contains("create 3 test case(s)"));
    assert!(prompt.contains("structured JSON format"));
}

#[test]
fn prompt_names_every_catalog_field() {
    let prompt = build_case_prompt("https://example.com/", "", 1);

    for field in [
        "test_case_id",
        "name",
        "description",
        "preconditions",
        "steps",
        "expected_result",
        "url",
    ] {
        assert!(prompt.contains(field), "prompt missing field {field}");
    }
}

// =========================================================================
// Catalog generation
// =========================================================================

const FENCED_CATALOG: &str = r#"```json
[
    {
        "test_case_id": "TC001",
        "name": "Login Verify Test",
        "description": "Verify login functionality",
        "preconditions": "User must be registered",
        "steps": ["Go to login page", "Enter valid credentials", "Click login button"],
        "expected_result": "User is successfully logged in",
        "url": "https://app.example.com/"
    },
    {
        "name": "Password Reset Test",
        "description": "Verify password reset flow",
        "steps": ["Click forgot password", "Enter registered email"],
        "expected_result": "Reset email is sent",
        "url": "https://app.example.com/"
    }
]
```"#;

#[tokio::test]
async fn generate_parses_fenced_json_catalog() {
    let llm = Arc::new(StaticCompletionClient::with_text(FENCED_CATALOG));
    let generator = CaseGenerator::new(llm.clone());

    let cases = generator
        .generate("https://app.example.com/", "login flows", 2)
        .await
        .expect("generate catalog");

    assert_eq!(cases.len(), 2);
    assert_eq!(cases[0].name, "Login Verify Test");
    assert_eq!(cases[0].test_case_id.as_deref(), Some("TC001"));
    assert_eq!(cases[1].name, "Password Reset Test");
    assert_eq!(cases[1].test_case_id, None);

    let prompts = llm.recorded_prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("https://app.example.com/"));
    assert!(prompts[0].contains("login flows"));
}

#[tokio::test]
async fn generate_accepts_unfenced_json_too() {
    let llm = Arc::new(StaticCompletionClient::new(json!({
        "content": r#"[{"name": "Smoke Test", "description": "d", "steps": ["s"],
                       "expected_result": "ok", "url": "https://example.com/"}]"#
    })));
    let generator = CaseGenerator::new(llm);

    let cases = generator
        .generate("https://example.com/", "", 1)
        .await
        .expect("generate catalog");
    assert_eq!(cases.len(), 1);
    assert_eq!(cases[0].name, "Smoke Test");
}

#[tokio::test]
async fn prose_response_is_a_parse_error() {
    let llm = Arc::new(StaticCompletionClient::with_text(
        "Sure! Here are some test cases you could try.",
    ));
    let generator = CaseGenerator::new(llm);

    match generator.generate("https://example.com/", "", 1).await {
        Err(CasegenError::Parse(_)) => {}
        other => panic!("expected Parse error, got {:?}", other.map(|c| c.len())),
    }
}
