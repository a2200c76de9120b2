use std::path::Path;
use std::sync::Arc;

use crate::agent::remote::{DEFAULT_AGENT_ENDPOINT, RemoteBrowserAgent};
use crate::agent::runner::{AgentRunner, BrowserAgent};
use crate::agent::scripted::ScriptedAgent;
use crate::case::case_model::builtin_cases;
use crate::case::catalog::{load_catalog, save_catalog};
use crate::casegen::generator::CaseGenerator;
use crate::cli::config::{AppConfig, build_agent_config};
use crate::codegen::generator::CodeGenerator;
use crate::codegen::templates::TemplateKind;
use crate::llm::client::CompletionClient;
use crate::llm::http::{DEFAULT_LLM_ENDPOINT, DEFAULT_LLM_MODEL, HttpCompletionClient};
use crate::pipeline::orchestrator::Orchestrator;
use crate::pipeline::report::format_run_summary;
use crate::server::{AppState, start_server};
use crate::trace::store::ActionTraceStore;

/// Endpoint/model overrides resolved from CLI flags layered over the config
/// file (CLI wins).
pub struct Overrides<'a> {
    pub llm_endpoint: Option<&'a str>,
    pub llm_model: Option<&'a str>,
    pub agent_endpoint: Option<&'a str>,
}

// ============================================================================
// run subcommand
// ============================================================================

/// Run a catalog of test cases through the pipeline and return whether every
/// validation passed.
pub async fn cmd_run(
    catalog: Option<&str>,
    agent_name: &str,
    template_name: Option<&str>,
    results_dir: Option<&str>,
    generated_dir: Option<&str>,
    config: &AppConfig,
    overrides: &Overrides<'_>,
    verbose: u8,
) -> Result<bool, Box<dyn std::error::Error>> {
    // CLI flags win over the config file's run section, whose serde
    // defaults supply the final fallback.
    let template_name = template_name.unwrap_or(&config.run.template);
    let results_dir = results_dir.unwrap_or(&config.run.results_dir);
    let generated_dir = generated_dir.unwrap_or(&config.run.generated_dir);

    let cases = match catalog.or(config.run.catalog.as_deref()) {
        Some(path) => load_catalog(Path::new(path)),
        None => builtin_cases(),
    };

    if cases.is_empty() {
        eprintln!("No test cases to run");
        return Ok(true);
    }

    if verbose > 0 {
        eprintln!("Running {} test case(s) with '{}' agent...", cases.len(), agent_name);
    }

    let orchestrator = build_orchestrator(
        agent_name,
        TemplateKind::from_name(template_name),
        results_dir,
        generated_dir,
        config,
        overrides,
    );

    let start = std::time::Instant::now();
    let reports = orchestrator.run_all(&cases).await;
    let duration = start.elapsed().as_secs_f64();

    print!("{}", format_run_summary(&reports));
    if verbose > 0 {
        eprintln!("Completed in {:.1}s", duration);
    }

    Ok(reports.iter().all(|r| r.passed()))
}

// ============================================================================
// generate-cases subcommand
// ============================================================================

pub async fn cmd_generate_cases(
    url: &str,
    brief: &str,
    number_of_cases: u32,
    output: &str,
    config: &AppConfig,
    overrides: &Overrides<'_>,
) -> Result<(), Box<dyn std::error::Error>> {
    let generator = CaseGenerator::new(build_llm_client(config, overrides));
    let cases = generator.generate(url, brief, number_of_cases).await?;

    save_catalog(Path::new(output), &cases)?;
    println!("Saved {} test case(s) to {}", cases.len(), output);
    Ok(())
}

// ============================================================================
// serve subcommand
// ============================================================================

pub async fn cmd_serve(
    port: u16,
    config: &AppConfig,
    overrides: &Overrides<'_>,
) -> Result<(), Box<dyn std::error::Error>> {
    let orchestrator = build_orchestrator(
        "remote",
        TemplateKind::from_name(&config.run.template),
        &config.run.results_dir,
        &config.run.generated_dir,
        config,
        overrides,
    );
    let case_generator = CaseGenerator::new(build_llm_client(config, overrides));

    let state = Arc::new(AppState {
        orchestrator,
        case_generator,
    });

    start_server(state, port).await
}

// ============================================================================
// Helpers
// ============================================================================

/// Build the completion client: CLI flags win over the config file, with the
/// local-model defaults as the final fallback.
fn build_llm_client(config: &AppConfig, overrides: &Overrides<'_>) -> Arc<dyn CompletionClient> {
    let endpoint = overrides
        .llm_endpoint
        .or(config.llm.endpoint.as_deref())
        .unwrap_or(DEFAULT_LLM_ENDPOINT);
    let model = overrides
        .llm_model
        .or(config.llm.model.as_deref())
        .unwrap_or(DEFAULT_LLM_MODEL);
    let temperature = config.llm.temperature.unwrap_or(0.2);

    Arc::new(HttpCompletionClient::new(endpoint, model, temperature))
}

/// Build the appropriate browser-agent backend based on name.
fn build_agent(
    name: &str,
    config: &AppConfig,
    overrides: &Overrides<'_>,
) -> Arc<dyn BrowserAgent> {
    match name {
        "remote" => {
            let endpoint = overrides
                .agent_endpoint
                .or(config.agent.endpoint.as_deref())
                .unwrap_or(DEFAULT_AGENT_ENDPOINT);
            Arc::new(RemoteBrowserAgent::new(endpoint))
        }
        _ => Arc::new(ScriptedAgent::default()),
    }
}

fn build_orchestrator(
    agent_name: &str,
    template: TemplateKind,
    results_dir: &str,
    generated_dir: &str,
    config: &AppConfig,
    overrides: &Overrides<'_>,
) -> Orchestrator {
    let agent = build_agent(agent_name, config, overrides);
    let runner = AgentRunner::new(agent, build_agent_config(&config.agent));
    let store = ActionTraceStore::new(results_dir);
    let codegen = CodeGenerator::new(build_llm_client(config, overrides), template, generated_dir);

    Orchestrator::new(runner, store, codegen)
}
