use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::agent::runner::AgentConfig;
use crate::agent::system_prompt::DEFAULT_PROMPT_EXTENSION;

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "testforge",
    version,
    about = "AI-agent-driven QA test execution and code generation"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Completion service endpoint (OpenAI-compatible chat API)
    #[arg(long, global = true)]
    pub llm_endpoint: Option<String>,

    /// Completion model name
    #[arg(long, global = true)]
    pub llm_model: Option<String>,

    /// Browser-agent service endpoint
    #[arg(long, global = true)]
    pub agent_endpoint: Option<String>,

    /// Path to config file (default: testforge.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a catalog of test cases through the agent pipeline
    Run {
        /// Path to a JSON test-case catalog (default: built-in sample cases)
        #[arg(long)]
        catalog: Option<String>,

        /// Agent backend: scripted or remote
        #[arg(long, default_value = "scripted")]
        agent: String,

        /// Code template: java, java-utilities, or playwright
        /// (default: config file, then "java")
        #[arg(long)]
        template: Option<String>,

        /// Directory for persisted action traces
        /// (default: config file, then "results")
        #[arg(long)]
        results_dir: Option<String>,

        /// Directory for generated test source files
        /// (default: config file, then "generated_codes")
        #[arg(long)]
        generated_dir: Option<String>,
    },

    /// Generate a test-case catalog for a website via the completion service
    GenerateCases {
        /// Website URL to generate cases for
        #[arg(long)]
        url: String,

        /// Short description of what the tests should focus on
        #[arg(long, default_value = "")]
        brief: String,

        /// How many test cases to request
        #[arg(long, default_value_t = 1)]
        number_of_cases: u32,

        /// Catalog file to write
        #[arg(short, long, default_value = "test_cases.json")]
        output: String,
    },

    /// Serve the HTTP API
    Serve {
        #[arg(long, default_value_t = 5000)]
        port: u16,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `testforge.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub llm: LlmSection,
    #[serde(default)]
    pub agent: AgentSection,
    #[serde(default)]
    pub run: RunSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LlmSection {
    pub endpoint: Option<String>,
    pub model: Option<String>,
    pub temperature: Option<f32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentSection {
    pub endpoint: Option<String>,

    #[serde(default = "default_true")]
    pub use_vision: bool,

    #[serde(default = "default_ten")]
    pub max_actions_per_step: u32,

    #[serde(default = "default_three")]
    pub max_failures: u32,

    #[serde(default = "default_auto")]
    pub tool_calling_method: String,

    /// Transcript path; absent disables the transcript
    pub conversation_log: Option<PathBuf>,
}

impl Default for AgentSection {
    fn default() -> Self {
        Self {
            endpoint: None,
            use_vision: true,
            max_actions_per_step: 10,
            max_failures: 3,
            tool_calling_method: "auto".to_string(),
            conversation_log: Some(PathBuf::from("logs/conversation.jsonl")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSection {
    #[serde(default = "default_results")]
    pub results_dir: String,

    #[serde(default = "default_generated")]
    pub generated_dir: String,

    #[serde(default = "default_java")]
    pub template: String,

    pub catalog: Option<String>,
}

impl Default for RunSection {
    fn default() -> Self {
        Self {
            results_dir: "results".to_string(),
            generated_dir: "generated_codes".to_string(),
            template: "java".to_string(),
            catalog: None,
        }
    }
}

// Serde default helpers
fn default_true() -> bool { true }
fn default_ten() -> u32 { 10 }
fn default_three() -> u32 { 3 }
fn default_auto() -> String { "auto".to_string() }
fn default_results() -> String { "results".to_string() }
fn default_generated() -> String { "generated_codes".to_string() }
fn default_java() -> String { "java".to_string() }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("testforge.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}

// ============================================================================
// Config Builders (merge CLI args with config file)
// ============================================================================

/// Build the per-run agent configuration from the config file section.
pub fn build_agent_config(section: &AgentSection) -> AgentConfig {
    AgentConfig {
        use_vision: section.use_vision,
        max_actions_per_step: section.max_actions_per_step,
        max_failures: section.max_failures,
        tool_calling_method: section.tool_calling_method.clone(),
        extend_system_prompt: Some(DEFAULT_PROMPT_EXTENSION.to_string()),
        conversation_log: section.conversation_log.clone(),
    }
}
