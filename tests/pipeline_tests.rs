use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use testforge::agent::error::AgentError;
use testforge::agent::history::ActionHistory;
use testforge::agent::runner::{AgentConfig, AgentRunner, BrowserAgent, build_task};
use testforge::agent::scripted::ScriptedAgent;
use testforge::case::case_model::TestCase;
use testforge::codegen::generator::{CodeGenerator, CodegenOutcome};
use testforge::codegen::templates::TemplateKind;
use testforge::llm::client::StaticCompletionClient;
use testforge::pipeline::orchestrator::Orchestrator;
use testforge::pipeline::report::{PipelineOutcome, PipelineStage, format_run_summary};
use testforge::trace::store::ActionTraceStore;
use testforge::validate::validator::TestStatus;

// =========================================================================
// Helpers
// =========================================================================

fn google_case() -> TestCase {
    TestCase::new(
        "Google Search Test",
        "Verifies basic search functionality works correctly",
        vec![
            "Open Google homepage.".to_string(),
            "Type \"automation testing\" in the search box.".to_string(),
            "Press Enter.".to_string(),
        ],
        "https://www.google.com/",
        "Search results for 'automation testing' are displayed",
    )
}

fn quiet_config() -> AgentConfig {
    AgentConfig {
        conversation_log: None,
        ..AgentConfig::default()
    }
}

fn orchestrator_with(agent: Arc<dyn BrowserAgent>, root: &Path) -> Orchestrator {
    let runner = AgentRunner::new(agent, quiet_config());
    let store = ActionTraceStore::new(root.join("results"));
    let codegen = CodeGenerator::new(
        Arc::new(StaticCompletionClient::with_text(
            "```java\npublic class GoogleSearchTest {}\n```",
        )),
        TemplateKind::SeleniumJava,
        root.join("generated_codes"),
    );
    Orchestrator::new(runner, store, codegen)
}

/// Agent that errors for any task mentioning a poison marker and behaves
/// like the scripted agent otherwise.
struct SelectivelyFailingAgent {
    marker: String,
}

#[async_trait]
impl BrowserAgent for SelectivelyFailingAgent {
    async fn run(&self, task: &str, config: &AgentConfig) -> Result<ActionHistory, AgentError> {
        if task.contains(&self.marker) {
            return Err(AgentError::Run("browser session crashed".to_string()));
        }
        ScriptedAgent::default().run(task, config).await
    }
}

// =========================================================================
// Single-case pipeline
// =========================================================================

#[tokio::test]
async fn scripted_run_completes_with_trace_artifact_and_pass() {
    let dir = tempfile::tempdir().expect("tempdir");
    let orchestrator = orchestrator_with(Arc::new(ScriptedAgent::default()), dir.path());

    let report = orchestrator.run_case(&google_case()).await;

    assert_eq!(report.test_name, "Google Search Test");
    assert!(report.passed());

    match &report.outcome {
        PipelineOutcome::Completed {
            trace_path,
            codegen,
            validation,
        } => {
            // Trace lands under the derived class name
            assert_eq!(
                trace_path.file_name().and_then(|n| n.to_str()),
                Some("GoogleSearchTest.json")
            );
            let trace = std::fs::read_to_string(trace_path).expect("trace file");
            assert!(trace.contains("automation testing"));

            match codegen {
                CodegenOutcome::Generated { class_name, path } => {
                    assert_eq!(class_name, "GoogleSearchTest");
                    let code = std::fs::read_to_string(path).expect("artifact");
                    assert_eq!(code, "public class GoogleSearchTest {}");
                }
                other => panic!("expected Generated, got {other:?}"),
            }

            assert_eq!(validation.status, TestStatus::Passed);
        }
        other => panic!("expected Completed, got {other:?}"),
    }
}

#[tokio::test]
async fn agent_failure_stops_the_pipeline_before_trace_and_codegen() {
    let dir = tempfile::tempdir().expect("tempdir");
    let agent = SelectivelyFailingAgent {
        marker: "search".to_string(),
    };
    let orchestrator = orchestrator_with(Arc::new(agent), dir.path());

    let report = orchestrator.run_case(&google_case()).await;

    assert!(!report.passed());
    match &report.outcome {
        PipelineOutcome::Failed { stage, message } => {
            assert_eq!(*stage, PipelineStage::Agent);
            assert!(message.contains("browser session crashed"));
        }
        other => panic!("expected Failed, got {other:?}"),
    }

    // No partial outputs for a run that never produced a history
    assert!(!dir.path().join("results").join("GoogleSearchTest.json").exists());
    assert!(!dir.path().join("generated_codes").exists());
}

#[tokio::test]
async fn mismatched_expectation_completes_but_fails_validation() {
    let dir = tempfile::tempdir().expect("tempdir");
    let orchestrator = orchestrator_with(Arc::new(ScriptedAgent::default()), dir.path());

    let mut case = google_case();
    case.expected_result = "Shopping cart contains three items".to_string();

    let report = orchestrator.run_case(&case).await;

    assert!(!report.passed());
    match &report.outcome {
        PipelineOutcome::Completed { validation, .. } => {
            assert_eq!(validation.status, TestStatus::Failed);
        }
        other => panic!("expected Completed, got {other:?}"),
    }
}

// =========================================================================
// Batch runs
// =========================================================================

#[tokio::test]
async fn batch_reports_keep_input_order_and_isolate_failures() {
    let dir = tempfile::tempdir().expect("tempdir");
    let agent = SelectivelyFailingAgent {
        marker: "checkout".to_string(),
    };
    let orchestrator = orchestrator_with(Arc::new(agent), dir.path());

    let mut poisoned = google_case();
    poisoned.name = "Checkout Test".to_string();
    poisoned.description = "Verifies checkout flow".to_string();
    poisoned.steps = vec!["Open checkout page".to_string()];

    let mut second = google_case();
    second.name = "Second Search Test".to_string();

    let cases = vec![google_case(), poisoned, second];
    let reports = orchestrator.run_all(&cases).await;

    assert_eq!(reports.len(), 3);
    assert_eq!(reports[0].test_name, "Google Search Test");
    assert_eq!(reports[1].test_name, "Checkout Test");
    assert_eq!(reports[2].test_name, "Second Search Test");

    assert!(reports[0].passed());
    assert!(!reports[1].passed());
    assert!(reports[2].passed());

    // The poisoned case's neighbors still produced their artifacts
    assert!(dir.path().join("results").join("GoogleSearchTest.json").exists());
    assert!(dir.path().join("results").join("SecondSearchTest.json").exists());
    assert!(!dir.path().join("results").join("CheckoutTest.json").exists());
}

#[tokio::test]
async fn colliding_case_names_share_one_trace_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let orchestrator = orchestrator_with(Arc::new(ScriptedAgent::default()), dir.path());

    let mut shouting = google_case();
    shouting.name = "GOOGLE SEARCH TEST!!".to_string();

    orchestrator.run_case(&google_case()).await;
    orchestrator.run_case(&shouting).await;

    let results = std::fs::read_dir(dir.path().join("results"))
        .expect("results dir")
        .count();
    assert_eq!(results, 1);
}

// =========================================================================
// Task construction and summary rendering
// =========================================================================

#[test]
fn task_joins_description_and_steps() {
    let task = build_task(&google_case());
    assert_eq!(
        task,
        "Perform the following case: Verifies basic search functionality works correctly. \
         Steps: Open Google homepage.; Type \"automation testing\" in the search box.; Press Enter."
    );
}

#[tokio::test]
async fn summary_lists_verdicts_and_totals() {
    let dir = tempfile::tempdir().expect("tempdir");
    let agent = SelectivelyFailingAgent {
        marker: "checkout".to_string(),
    };
    let orchestrator = orchestrator_with(Arc::new(agent), dir.path());

    let mut poisoned = google_case();
    poisoned.name = "Checkout Test".to_string();
    poisoned.description = "Verifies checkout flow".to_string();

    let reports = orchestrator.run_all(&[google_case(), poisoned]).await;
    let summary = format_run_summary(&reports);

    assert!(summary.contains("\u{2713} PASSED  Google Search Test"));
    assert!(summary.contains("\u{2717} FAILED  Checkout Test [agent]"));
    assert!(summary.contains("=== Results: 1 passed, 1 failed (2 total) ==="));
}
