use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info};

use crate::case::case_model::TestCase;
use crate::case::class_name::derive_class_name;
use crate::codegen::templates::TemplateKind;
use crate::llm::client::{CompletionClient, CompletionRequest, LlmError};
use crate::llm::response::{extract_text, strip_code_fence};
use crate::trace::store::{ActionTraceStore, TraceError, to_pretty_json};

// ============================================================================
// Code generation — trace file + test case → synthesized source artifact
// ============================================================================

/// Outcome of one code-generation attempt.
///
/// This component never raises: every internal failure is folded into
/// `Failed` so one test case's code generation cannot abort a concurrent
/// batch. Callers branch on the variant instead of catching errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum CodegenOutcome {
    Generated { class_name: String, path: PathBuf },
    Failed { message: String },
}

impl CodegenOutcome {
    pub fn is_generated(&self) -> bool {
        matches!(self, CodegenOutcome::Generated { .. })
    }
}

#[derive(Debug, Error)]
enum CodegenError {
    #[error("{0}")]
    Trace(#[from] TraceError),

    #[error("{0}")]
    Completion(#[from] LlmError),

    #[error("artifact write failed at '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("completion returned empty code")]
    EmptyCode,
}

pub struct CodeGenerator {
    llm: Arc<dyn CompletionClient>,
    template: TemplateKind,
    output_dir: PathBuf,
}

impl CodeGenerator {
    pub fn new(llm: Arc<dyn CompletionClient>, template: TemplateKind, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            llm,
            template,
            output_dir: output_dir.into(),
        }
    }

    /// Generate test source code reproducing the recorded trace.
    ///
    /// Loads the trace JSON, renders the active template with the derived
    /// class name / pretty trace / bulleted steps, requests a completion,
    /// strips the expected fence wrapper, and writes the artifact to
    /// `<output_dir>/<class_name><ext>`. An existing artifact under the same
    /// derived name is overwritten.
    pub async fn generate(&self, trace_path: &Path, case: &TestCase) -> CodegenOutcome {
        match self.try_generate(trace_path, case).await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!("code generation failed for '{}': {}", case.name, e);
                CodegenOutcome::Failed {
                    message: format!("Error generating test code for '{}': {}", case.name, e),
                }
            }
        }
    }

    async fn try_generate(
        &self,
        trace_path: &Path,
        case: &TestCase,
    ) -> Result<CodegenOutcome, CodegenError> {
        let trace = ActionTraceStore::load(trace_path)?;
        let trace_json = to_pretty_json(&trace).map_err(|source| {
            CodegenError::Trace(TraceError::Malformed {
                path: trace_path.to_path_buf(),
                source,
            })
        })?;

        let class_name = derive_class_name(&case.name);
        let prompt = self.template.render(&class_name, &trace_json, &case.steps);

        let response = self.llm.complete(&CompletionRequest::new(prompt)).await?;
        let text = extract_text(&response);
        let code = strip_code_fence(&text, self.template.fence_language());

        if code.is_empty() {
            return Err(CodegenError::EmptyCode);
        }

        let path = self.artifact_path(&class_name);
        std::fs::create_dir_all(&self.output_dir).map_err(|source| CodegenError::Write {
            path: self.output_dir.clone(),
            source,
        })?;
        std::fs::write(&path, &code).map_err(|source| CodegenError::Write {
            path: path.clone(),
            source,
        })?;

        info!("generated {} for '{}'", path.display(), case.name);

        Ok(CodegenOutcome::Generated { class_name, path })
    }

    /// Artifact path for a derived class name: a pure function of the test
    /// case name, so colliding names share a file (last writer wins).
    pub fn artifact_path(&self, class_name: &str) -> PathBuf {
        self.output_dir
            .join(format!("{class_name}{}", self.template.extension()))
    }
}
