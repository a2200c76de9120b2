use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

// ============================================================================
// Completion capability boundary
// ============================================================================

/// A single completion request: one user-role prompt, with optional
/// per-request model and temperature overrides.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub prompt: String,
    pub model: Option<String>,
    pub temperature: Option<f32>,
}

impl CompletionRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: None,
            temperature: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("completion request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("completion service returned status {status}: {body}")]
    Status { status: u16, body: String },
}

/// External text-completion capability.
///
/// Implementations are injected into every component that needs one; nothing
/// in this crate constructs a default client behind the scenes. The returned
/// value is the provider's loosely-typed response object — callers unwrap it
/// with [`crate::llm::response::extract_text`].
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<Value, LlmError>;
}

// ============================================================================
// Canned client (tests and offline runs)
// ============================================================================

/// Completion client that returns a fixed response and records every prompt
/// it was asked to complete.
pub struct StaticCompletionClient {
    response: Value,
    prompts: Mutex<Vec<String>>,
}

impl StaticCompletionClient {
    pub fn new(response: Value) -> Self {
        Self {
            response,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Convenience constructor for a plain-text response wrapped the way
    /// a chat provider would wrap it.
    pub fn with_text(text: &str) -> Self {
        Self::new(serde_json::json!({ "content": text }))
    }

    /// Prompts seen so far, in call order.
    pub fn recorded_prompts(&self) -> Vec<String> {
        match self.prompts.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[async_trait]
impl CompletionClient for StaticCompletionClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<Value, LlmError> {
        if let Ok(mut guard) = self.prompts.lock() {
            guard.push(request.prompt.clone());
        }
        Ok(self.response.clone())
    }
}
