// HTTP API server.
//
// Endpoints:
//   POST /api/generate-test-cases   {url, brief, number_of_cases}
//   POST /api/run-test              {test_case: {...}}

pub mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Router, routing::post};
use tracing::info;

use crate::casegen::generator::CaseGenerator;
use crate::pipeline::orchestrator::Orchestrator;

/// Shared state handed to every handler.
pub struct AppState {
    pub orchestrator: Orchestrator,
    pub case_generator: CaseGenerator,
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/api/generate-test-cases",
            post(routes::generate_test_cases),
        )
        .route("/api/run-test", post(routes::run_test))
        .with_state(state)
}

pub async fn start_server(
    state: Arc<AppState>,
    port: u16,
) -> Result<(), Box<dyn std::error::Error>> {
    let addr: SocketAddr = format!("127.0.0.1:{port}").parse()?;
    let router = build_router(state);

    info!("API listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
