use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::case::case_model::TestCase;
use crate::server::AppState;

// ============================================================================
// Route handlers
// ============================================================================

type ApiError = (StatusCode, Json<Value>);

fn bad_request() -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": "Missing required parameters" })),
    )
}

fn internal_error(message: String) -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": message })),
    )
}

#[derive(Deserialize)]
pub struct GenerateCasesRequest {
    pub url: Option<String>,
    pub brief: Option<String>,
    pub number_of_cases: Option<u32>,
}

/// `POST /api/generate-test-cases` — generate a catalog from a URL + brief.
/// Missing `url` is a 400; a completion or parse failure is a 500.
pub async fn generate_test_cases(
    State(state): State<Arc<AppState>>,
    Json(body): Json<GenerateCasesRequest>,
) -> Result<Json<Vec<TestCase>>, ApiError> {
    let url = match body.url.as_deref() {
        Some(u) if !u.is_empty() => u,
        _ => return Err(bad_request()),
    };

    let brief = body.brief.as_deref().unwrap_or("");
    let number_of_cases = body.number_of_cases.unwrap_or(1);

    state
        .case_generator
        .generate(url, brief, number_of_cases)
        .await
        .map(Json)
        .map_err(|e| internal_error(e.to_string()))
}

#[derive(Deserialize)]
pub struct RunTestRequest {
    pub test_case: Option<TestCase>,
}

/// `POST /api/run-test` — run one test case through the full pipeline and
/// return its report. Pipeline-level failures (agent error, codegen error
/// string) are part of the report body, not HTTP errors.
pub async fn run_test(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RunTestRequest>,
) -> Result<Json<Value>, ApiError> {
    let case = match body.test_case {
        Some(c) => c,
        None => return Err(bad_request()),
    };

    let report = state.orchestrator.run_case(&case).await;

    serde_json::to_value(&report)
        .map(Json)
        .map_err(|e| internal_error(e.to_string()))
}
