//! CLI entrypoint for llm-council
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::Parser;
use council_application::{DecisionStore, RunCouncilInput, RunCouncilUseCase};
use council_domain::CouncilRoster;
use council_infrastructure::{AnthropicGateway, ConfigLoader, JsonSnapshotStore};
use council_presentation::{Cli, ConsoleFormatter, OutputFormat, ProgressReporter};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Load configuration and apply CLI overrides
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!(e))?
    };

    if let Some(model) = &cli.model {
        config.gateway.model = model.clone();
    }
    if let Some(max_tokens) = cli.max_tokens {
        config.gateway.max_tokens = max_tokens;
    }
    if let Some(path) = &cli.decision_out {
        config.output.decision_path = path.clone();
    }
    if let Some(path) = &cli.audit_out {
        config.output.audit_path = path.clone();
    }

    let query = match cli.query {
        Some(q) => q,
        None => bail!("Query is required."),
    };

    info!("Starting llm-council");

    // === Dependency Injection ===
    // Create infrastructure adapter (Anthropic gateway)
    let gateway = Arc::new(AnthropicGateway::from_env(
        config.gateway.model.clone(),
        config.gateway.max_tokens,
    )?);

    if !cli.quiet {
        println!();
        println!("Running LLM Council on query: {}", query);
        println!("Model: {}", config.gateway.model);
        println!();
    }

    // Create use case with injected gateway
    let use_case = RunCouncilUseCase::new(gateway);
    let input = RunCouncilInput::new(query, CouncilRoster::standard());

    // Execute with or without progress reporting
    let decision = if cli.quiet {
        use_case.execute(input).await?
    } else {
        let progress = ProgressReporter::new();
        use_case.execute_with_progress(input, &progress).await?
    };

    // Output results
    let output = match cli.output {
        OutputFormat::Full => ConsoleFormatter::format(&decision),
        OutputFormat::Summary => ConsoleFormatter::format_summary(&decision),
        OutputFormat::Json => ConsoleFormatter::format_json(&decision),
    };

    println!("{}", output);

    // Persist complete snapshots
    if !cli.no_save {
        let store = JsonSnapshotStore::new(
            config.output.decision_path.clone(),
            config.output.audit_path.clone(),
        );
        store.save_decision(&decision)?;
        store.save_audit_log(&use_case.audit_snapshot())?;

        if !cli.quiet {
            println!("Decision saved to {}", store.decision_path().display());
            println!("Audit log saved to {}", store.audit_path().display());
        }
    }

    Ok(())
}
