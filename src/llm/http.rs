use serde_json::{Value, json};
use tracing::debug;

use crate::llm::client::{CompletionClient, CompletionRequest, LlmError};

// ============================================================================
// HTTP completion client (OpenAI-style chat endpoint)
// ============================================================================

pub const DEFAULT_LLM_ENDPOINT: &str = "http://localhost:11434/v1/chat/completions";
pub const DEFAULT_LLM_MODEL: &str = "qwen2.5:1.5b";

/// Completion client backed by an OpenAI-compatible chat-completions
/// endpoint. The prompt is sent as a single user message; the first choice's
/// `message` object is returned when present, otherwise the raw body, so the
/// priority-order extraction in [`crate::llm::response`] applies either way.
pub struct HttpCompletionClient {
    endpoint: String,
    model: String,
    temperature: f32,
    client: reqwest::Client,
}

impl HttpCompletionClient {
    pub fn new(endpoint: &str, model: &str, temperature: f32) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            model: model.to_string(),
            temperature,
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpCompletionClient {
    fn default() -> Self {
        Self::new(DEFAULT_LLM_ENDPOINT, DEFAULT_LLM_MODEL, 0.2)
    }
}

#[async_trait::async_trait]
impl CompletionClient for HttpCompletionClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<Value, LlmError> {
        let model = request.model.as_deref().unwrap_or(&self.model);
        let temperature = request.temperature.unwrap_or(self.temperature);

        let payload = json!({
            "model": model,
            "temperature": temperature,
            "messages": [{ "role": "user", "content": request.prompt }],
        });

        debug!("completion request to {} (model={})", self.endpoint, model);

        let response = self.client.post(&self.endpoint).json(&payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: Value = response.json().await?;

        // Chat providers nest the text under choices[0].message; hand that
        // object to the extractor when it exists.
        match body.pointer("/choices/0/message") {
            Some(message) => Ok(message.clone()),
            None => Ok(body),
        }
    }
}
