use clap::Parser;
use testforge::cli::commands::{Overrides, cmd_generate_cases, cmd_run, cmd_serve};
use testforge::cli::config::{Cli, Commands, load_config};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let config = load_config(cli.config.as_deref());

    // Resolve endpoints: CLI > config file > built-in defaults
    let overrides = Overrides {
        llm_endpoint: cli.llm_endpoint.as_deref(),
        llm_model: cli.llm_model.as_deref(),
        agent_endpoint: cli.agent_endpoint.as_deref(),
    };

    match cli.command {
        Commands::Run {
            catalog,
            agent,
            template,
            results_dir,
            generated_dir,
        } => {
            let all_passed = cmd_run(
                catalog.as_deref(),
                &agent,
                template.as_deref(),
                results_dir.as_deref(),
                generated_dir.as_deref(),
                &config,
                &overrides,
                cli.verbose,
            )
            .await?;
            if !all_passed {
                std::process::exit(1);
            }
        }
        Commands::GenerateCases {
            url,
            brief,
            number_of_cases,
            output,
        } => {
            cmd_generate_cases(&url, &brief, number_of_cases, &output, &config, &overrides)
                .await?;
        }
        Commands::Serve { port } => {
            cmd_serve(port, &config, &overrides).await?;
        }
    }

    Ok(())
}
