use std::{fs::OpenOptions, io::Write, path::Path, sync::Mutex};

use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::warn;

// ============================================================================
// Conversation transcript — fire-and-forget audit log (JSONL)
// ============================================================================

/// One transcript line: what the agent was asked and what came back.
#[derive(Debug, Serialize)]
pub struct ConversationEntry {
    pub timestamp_ms: u128,
    pub test_name: String,
    pub task: String,
    pub action_count: usize,
    pub final_result: Option<String>,
}

impl ConversationEntry {
    pub fn now(test_name: &str, task: &str, action_count: usize, final_result: Option<&str>) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or_default(),
            test_name: test_name.to_string(),
            task: task.to_string(),
            action_count,
            final_result: final_result.map(|s| s.to_string()),
        }
    }
}

/// Append-only JSONL writer for agent-run transcripts.
///
/// This is an audit/debugging channel, not part of the pipeline's success
/// contract: every failure mode (open, serialize, write) degrades to a
/// warning and the run proceeds.
pub struct ConversationLog {
    file: Option<Mutex<std::fs::File>>,
}

impl ConversationLog {
    pub fn new(path: &Path) -> Self {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    warn!("could not create transcript dir '{}': {}", parent.display(), e);
                    return Self { file: None };
                }
            }
        }

        let file = OpenOptions::new().create(true).append(true).open(path);

        match file {
            Ok(f) => Self {
                file: Some(Mutex::new(f)),
            },
            Err(e) => {
                warn!("could not open transcript file '{}': {}", path.display(), e);
                Self { file: None }
            }
        }
    }

    pub fn append(&self, entry: &ConversationEntry) {
        let file_mutex = match &self.file {
            Some(f) => f,
            None => return, // transcript disabled
        };

        let json = match serde_json::to_string(entry) {
            Ok(j) => j,
            Err(e) => {
                warn!("failed to serialize transcript entry: {}", e);
                return;
            }
        };

        let mut file = match file_mutex.lock() {
            Ok(f) => f,
            Err(e) => {
                warn!("transcript lock poisoned: {}", e);
                return;
            }
        };

        if let Err(e) = writeln!(file, "{}", json) {
            warn!("failed to write transcript entry: {}", e);
        }
    }
}
