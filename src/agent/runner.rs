use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::agent::error::AgentError;
use crate::agent::history::ActionHistory;
use crate::agent::system_prompt::DEFAULT_PROMPT_EXTENSION;
use crate::case::case_model::TestCase;
use crate::trace::conversation::{ConversationEntry, ConversationLog};

// ============================================================================
// Browser-agent capability boundary
// ============================================================================

/// Configuration forwarded to the agent capability with every run.
///
/// `max_failures` is the agent's own failure-tolerance budget; this crate
/// performs no retries of its own anywhere in the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    pub use_vision: bool,
    pub max_actions_per_step: u32,
    pub max_failures: u32,
    pub tool_calling_method: String,

    /// Extra behavioral rules layered onto the agent's base system prompt
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extend_system_prompt: Option<String>,

    /// Where to append the run transcript; None disables the transcript
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_log: Option<PathBuf>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            use_vision: true,
            max_actions_per_step: 10,
            max_failures: 3,
            tool_calling_method: "auto".to_string(),
            extend_system_prompt: Some(DEFAULT_PROMPT_EXTENSION.to_string()),
            conversation_log: Some(PathBuf::from("logs/conversation.jsonl")),
        }
    }
}

/// External autonomous browser-driving capability: interprets a
/// natural-language task against a live page and returns the structured
/// action history. Injected; substituting a different backend never touches
/// the pipeline.
#[async_trait]
pub trait BrowserAgent: Send + Sync {
    async fn run(&self, task: &str, config: &AgentConfig) -> Result<ActionHistory, AgentError>;
}

// ============================================================================
// AgentRunner — turns a TestCase into an agent task and runs it
// ============================================================================

/// Build the natural-language task handed to the agent: the scenario
/// description followed by its steps, semicolon-joined.
pub fn build_task(case: &TestCase) -> String {
    format!(
        "Perform the following case: {}. Steps: {}",
        case.description,
        case.steps.join("; ")
    )
}

pub struct AgentRunner {
    agent: Arc<dyn BrowserAgent>,
    config: AgentConfig,
    transcript: Option<ConversationLog>,
}

impl AgentRunner {
    pub fn new(agent: Arc<dyn BrowserAgent>, config: AgentConfig) -> Self {
        let transcript = config
            .conversation_log
            .as_deref()
            .map(ConversationLog::new);
        Self {
            agent,
            config,
            transcript,
        }
    }

    /// Run one test case through the agent capability.
    ///
    /// Capability errors propagate unmodified; there is no catch-and-retry
    /// here. On success a transcript line is appended fire-and-forget.
    pub async fn run(&self, case: &TestCase) -> Result<ActionHistory, AgentError> {
        let task = build_task(case);
        info!("running agent for '{}' against {}", case.name, case.url);

        let history = self.agent.run(&task, &self.config).await?;

        if let Some(log) = &self.transcript {
            log.append(&ConversationEntry::now(
                &case.name,
                &task,
                history.model_actions().len(),
                history.final_result(),
            ));
        }

        Ok(history)
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }
}
