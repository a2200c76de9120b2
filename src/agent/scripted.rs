use async_trait::async_trait;
use serde_json::{Value, json};

use crate::agent::error::AgentError;
use crate::agent::history::ActionHistory;
use crate::agent::runner::{AgentConfig, BrowserAgent};

// ============================================================================
// Scripted agent — deterministic capability for tests and offline runs
// ============================================================================

/// Agent capability that replays a fixed action history instead of driving a
/// browser. Used by the `--agent scripted` mode and by the test suite.
pub struct ScriptedAgent {
    actions: Vec<Value>,
    final_result: String,
}

impl ScriptedAgent {
    pub fn new(actions: Vec<Value>, final_result: &str) -> Self {
        Self {
            actions,
            final_result: final_result.to_string(),
        }
    }
}

impl Default for ScriptedAgent {
    fn default() -> Self {
        Self {
            actions: vec![
                json!({
                    "go_to_url": { "url": "https://www.google.com/" },
                    "interacted_element": null,
                }),
                json!({
                    "input_text": { "index": 0, "text": "automation testing" },
                    "interacted_element": {
                        "xpath": "html/body/div[1]/div[3]/form/div[1]/div[1]/div[1]/div/div[2]/textarea",
                        "tag_name": "textarea",
                    },
                }),
                json!({
                    "send_keys": { "keys": "Enter" },
                    "interacted_element": null,
                }),
                json!({
                    "done": { "text": "Search results for 'automation testing' are displayed" },
                    "interacted_element": null,
                }),
            ],
            final_result: "Search results for 'automation testing' are displayed".to_string(),
        }
    }
}

#[async_trait]
impl BrowserAgent for ScriptedAgent {
    async fn run(&self, _task: &str, _config: &AgentConfig) -> Result<ActionHistory, AgentError> {
        Ok(ActionHistory::new(
            self.actions.clone(),
            Some(self.final_result.clone()),
        ))
    }
}
