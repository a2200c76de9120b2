use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Action history — ordered record of one agent run
// ============================================================================

/// The structured result of a browser-agent run: the ordered actions the
/// agent performed plus its final free-text result.
///
/// Action records are opaque to this crate (action type, parameters,
/// optional locator metadata) and are persisted verbatim; no schema is
/// enforced beyond being valid JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ActionHistory {
    actions: Vec<Value>,
    final_result: Option<String>,
}

impl ActionHistory {
    pub fn new(actions: Vec<Value>, final_result: Option<String>) -> Self {
        Self {
            actions,
            final_result,
        }
    }

    /// Ordered action records performed during the run.
    pub fn model_actions(&self) -> &[Value] {
        &self.actions
    }

    /// The agent's final free-text outcome, if it produced one.
    pub fn final_result(&self) -> Option<&str> {
        self.final_result.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
