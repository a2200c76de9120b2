use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::codegen::generator::CodegenOutcome;
use crate::validate::validator::{TestStatus, ValidationResult};

// ============================================================================
// Pipeline reports — one per test case, aggregated by the orchestrator
// ============================================================================

/// Stage at which a pipeline stopped before reaching code generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    Agent,
    TraceStore,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineStage::Agent => write!(f, "agent"),
            PipelineStage::TraceStore => write!(f, "trace-store"),
        }
    }
}

/// Outcome of one per-case pipeline.
///
/// A code-generation failure is not a pipeline failure: the generator's
/// never-throw contract folds it into the `Completed` variant's
/// [`CodegenOutcome`], so the agent run and trace are still reported.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PipelineOutcome {
    Completed {
        trace_path: PathBuf,
        codegen: CodegenOutcome,
        validation: ValidationResult,
    },
    Failed {
        stage: PipelineStage,
        message: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PipelineReport {
    pub test_name: String,
    pub outcome: PipelineOutcome,
}

impl PipelineReport {
    /// Whether the run completed and its validation verdict is PASSED.
    pub fn passed(&self) -> bool {
        matches!(
            &self.outcome,
            PipelineOutcome::Completed { validation, .. }
                if validation.status == TestStatus::Passed
        )
    }
}

// ============================================================================
// Console summary
// ============================================================================

/// Format a run summary for terminal output.
///
/// Produces output like:
/// ```text
/// === Test Run ===
///
/// ✓ PASSED  Google Search Test (4 actions) -> generated_codes/GoogleSearchTest.java
/// ✗ FAILED  Login Test [agent] agent run failed: timeout
///
/// === Results: 1 passed, 1 failed (2 total) ===
/// ```
pub fn format_run_summary(reports: &[PipelineReport]) -> String {
    let mut out = String::new();

    out.push_str("=== Test Run ===\n\n");

    for report in reports {
        match &report.outcome {
            PipelineOutcome::Completed {
                codegen,
                validation,
                ..
            } => {
                let marker = match validation.status {
                    TestStatus::Passed => "\u{2713} PASSED",
                    TestStatus::Failed => "\u{2717} FAILED",
                };
                out.push_str(&format!("{}  {}", marker, report.test_name));
                match codegen {
                    CodegenOutcome::Generated { path, .. } => {
                        out.push_str(&format!(" -> {}\n", path.display()));
                    }
                    CodegenOutcome::Failed { message } => {
                        out.push_str(&format!("\n    [CODEGEN] {}\n", message));
                    }
                }
            }
            PipelineOutcome::Failed { stage, message } => {
                out.push_str(&format!(
                    "\u{2717} FAILED  {} [{}] {}\n",
                    report.test_name, stage, message
                ));
            }
        }
    }

    let total = reports.len();
    let passed = reports.iter().filter(|r| r.passed()).count();
    out.push_str(&format!(
        "\n=== Results: {} passed, {} failed ({} total) ===\n",
        passed,
        total - passed,
        total
    ));

    out
}
