use thiserror::Error;

/// Errors surfaced by the browser-agent capability.
///
/// These propagate unmodified out of the runner; retry, if any, is the
/// capability's own responsibility (see `AgentConfig::max_failures`).
#[derive(Debug, Error)]
pub enum AgentError {
    /// The agent service could not be reached or the transport failed
    #[error("agent service request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The agent service answered with a non-success status
    #[error("agent service returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The agent service answered with an unexpected response shape
    #[error("agent service returned unexpected shape: {0}")]
    Shape(String),

    /// The agent itself reported that the run failed
    #[error("agent run failed: {0}")]
    Run(String),
}
