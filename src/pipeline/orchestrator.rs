use futures_util::future::join_all;
use tracing::warn;

use crate::agent::runner::AgentRunner;
use crate::case::case_model::TestCase;
use crate::case::class_name::derive_class_name;
use crate::codegen::generator::CodeGenerator;
use crate::pipeline::report::{PipelineOutcome, PipelineReport, PipelineStage};
use crate::trace::store::ActionTraceStore;
use crate::validate::validator::validate_result;

// ============================================================================
// Orchestrator — agent run → trace save → code generation, fanned out
// concurrently across test cases
// ============================================================================

pub struct Orchestrator {
    runner: AgentRunner,
    store: ActionTraceStore,
    codegen: CodeGenerator,
}

impl Orchestrator {
    pub fn new(runner: AgentRunner, store: ActionTraceStore, codegen: CodeGenerator) -> Self {
        Self {
            runner,
            store,
            codegen,
        }
    }

    /// Run the full pipeline for a single test case, strictly in order:
    /// agent run, then trace persistence, then code generation, then the
    /// substring validation of the agent's final result.
    ///
    /// Errors from the agent or the trace store end the pipeline with a
    /// `Failed` outcome; a code-generation failure is carried inside
    /// `Completed` per the generator's never-throw contract.
    pub async fn run_case(&self, case: &TestCase) -> PipelineReport {
        let history = match self.runner.run(case).await {
            Ok(h) => h,
            Err(e) => {
                warn!("agent run failed for '{}': {}", case.name, e);
                return PipelineReport {
                    test_name: case.name.clone(),
                    outcome: PipelineOutcome::Failed {
                        stage: PipelineStage::Agent,
                        message: e.to_string(),
                    },
                };
            }
        };

        // Trace files share the artifact naming key so a test's trace and
        // generated code sit next to each other under the same identifier.
        let trace_key = derive_class_name(&case.name);
        let trace_path = match self.store.save(&trace_key, history.model_actions()) {
            Ok(p) => p,
            Err(e) => {
                warn!("trace save failed for '{}': {}", case.name, e);
                return PipelineReport {
                    test_name: case.name.clone(),
                    outcome: PipelineOutcome::Failed {
                        stage: PipelineStage::TraceStore,
                        message: e.to_string(),
                    },
                };
            }
        };

        let codegen = self.codegen.generate(&trace_path, case).await;
        let validation = validate_result(case, history.final_result().unwrap_or(""));

        PipelineReport {
            test_name: case.name.clone(),
            outcome: PipelineOutcome::Completed {
                trace_path,
                codegen,
                validation,
            },
        }
    }

    /// Run every test case as an independent pipeline, interleaved
    /// cooperatively on the async runtime.
    ///
    /// There is no ordering guarantee between pipelines, no cancellation of
    /// an in-flight run, and no orchestrator-imposed deadline; a failure in
    /// one pipeline never cancels its siblings. The returned reports keep
    /// the input order.
    pub async fn run_all(&self, cases: &[TestCase]) -> Vec<PipelineReport> {
        join_all(cases.iter().map(|case| self.run_case(case))).await
    }
}
