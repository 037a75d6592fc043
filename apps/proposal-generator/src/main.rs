mod cli;
mod config;
mod errors;
mod extraction;
mod llm_client;
mod models;
mod output;
mod synthesis;
mod workflow;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::Args;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::workflow::{ProposalWorkflow, WorkflowResult};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Config is loaded before logging so a RUST_LOG from .env is honoured.
    let config = Config::from_env();
    let rust_log = config.as_ref().map(|c| c.rust_log.as_str()).unwrap_or("info");
    init_tracing(rust_log, args.debug);

    info!("Starting proposal generator v{}", env!("CARGO_PKG_VERSION"));

    if !args.input.exists() {
        error!("Input file '{}' not found", args.input.display());
        return ExitCode::FAILURE;
    }

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("{e:#}");
            return ExitCode::FAILURE;
        }
    };

    tokio::select! {
        outcome = run(args, config) => match outcome {
            Ok(result) if result.success => ExitCode::SUCCESS,
            Ok(_) => ExitCode::FAILURE,
            Err(e) => {
                error!("{e:#}");
                ExitCode::FAILURE
            }
        },
        Ok(()) = tokio::signal::ctrl_c() => {
            error!("Operation cancelled by user");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args, mut config: Config) -> Result<WorkflowResult> {
    if let Some(model) = args.model {
        config.model = model;
    }

    let llm = LlmClient::new(&config).context("Failed to build LLM client")?;
    info!("LLM client initialized (model: {})", config.model);

    let workflow = ProposalWorkflow::new(Arc::new(llm))?;

    info!("Input file: {}", args.input.display());
    info!("Output folder: {}", args.output.display());

    let result = workflow
        .process_transcript_file(&args.input, &args.output, args.filename.as_deref())
        .await;

    print_outcome(&result, args.debug);
    Ok(result)
}

fn print_outcome(result: &WorkflowResult, debug: bool) {
    match (&result.file_paths, &result.error) {
        (Some(paths), _) => {
            println!("\nSuccess! Proposal generated successfully.");
            println!("Files created:");
            println!("  - Markdown: {}", paths.markdown.display());
            println!("  - JSON: {}", paths.json.display());
        }
        (None, Some(message)) => eprintln!("\nError: {message}"),
        (None, None) => {}
    }

    if !debug {
        return;
    }
    if let Some(proposal) = &result.proposal {
        let customer = &proposal.customer_info;
        println!("\nSummary:");
        println!("  - Company: {}", customer.company_name);
        println!("  - Industry: {}", customer.industry);
        println!("  - Contact: {}", customer.contact_person);
        println!("  - Phases: {}", proposal.phase_names().join(", "));
        println!("  - Total Duration: {} weeks", proposal.total_duration_weeks());
    }
}

fn init_tracing(rust_log: &str, debug: bool) {
    let crate_target = env!("CARGO_CRATE_NAME");
    let filter = if debug {
        EnvFilter::new(format!("{crate_target}=debug"))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("{crate_target}={rust_log}")))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
