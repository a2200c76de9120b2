use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::agent::error::AgentError;
use crate::agent::history::ActionHistory;
use crate::agent::runner::{AgentConfig, BrowserAgent};

// ============================================================================
// Remote agent service client
// ============================================================================

pub const DEFAULT_AGENT_ENDPOINT: &str = "http://localhost:8931/run";

#[derive(Serialize)]
struct AgentRunRequest<'a> {
    task: &'a str,
    use_vision: bool,
    max_actions_per_step: u32,
    max_failures: u32,
    tool_calling_method: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    extend_system_prompt: Option<&'a str>,
}

/// Browser-agent capability backed by a remote agent service.
///
/// Posts the task plus run configuration and decodes
/// `{ "actions": [...], "final_result": "..." }`. Action records pass through
/// as opaque JSON; a missing or non-array `actions` field is a shape error.
pub struct RemoteBrowserAgent {
    endpoint: String,
    client: reqwest::Client,
}

impl RemoteBrowserAgent {
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            client: reqwest::Client::new(),
        }
    }
}

impl Default for RemoteBrowserAgent {
    fn default() -> Self {
        Self::new(DEFAULT_AGENT_ENDPOINT)
    }
}

#[async_trait]
impl BrowserAgent for RemoteBrowserAgent {
    async fn run(&self, task: &str, config: &AgentConfig) -> Result<ActionHistory, AgentError> {
        let request = AgentRunRequest {
            task,
            use_vision: config.use_vision,
            max_actions_per_step: config.max_actions_per_step,
            max_failures: config.max_failures,
            tool_calling_method: &config.tool_calling_method,
            extend_system_prompt: config.extend_system_prompt.as_deref(),
        };

        debug!("agent run request to {}", self.endpoint);

        let response = self.client.post(&self.endpoint).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AgentError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(AgentError::Transport)?;

        if let Some(error) = body.get("error").and_then(Value::as_str) {
            return Err(AgentError::Run(error.to_string()));
        }

        let actions = body
            .get("actions")
            .and_then(Value::as_array)
            .ok_or_else(|| AgentError::Shape("missing 'actions' array".to_string()))?
            .clone();

        let final_result = body
            .get("final_result")
            .and_then(Value::as_str)
            .map(|s| s.to_string());

        Ok(ActionHistory::new(actions, final_result))
    }
}
