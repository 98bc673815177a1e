use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tagwatch_pipeline::{run_compliance_check, CheckFailure, CheckResponse};

#[derive(Debug, Parser)]
#[command(name = "tagwatch-cli")]
#[command(about = "Report catalog products that carry none of the required tags")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run one compliance check now and print the JSON result
    Check {
        /// Pretty-print the JSON result
        #[arg(long)]
        pretty: bool,
    },
    /// Validate the check configuration without calling any API
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().or_else(|_| {
        tracing_subscriber::EnvFilter::try_new(fallback_log_level(|key| std::env::var(key)))
    })?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Check { pretty } => run_check(pretty).await,
        Commands::Config => validate_config(),
    }
}

/// Filter used when `RUST_LOG` is unset: `TAGWATCH_LOG_LEVEL`, else `info`.
fn fallback_log_level<F>(lookup: F) -> String
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    lookup("TAGWATCH_LOG_LEVEL")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| "info".to_string())
}

async fn run_check(pretty: bool) -> anyhow::Result<ExitCode> {
    tracing::info!("starting on-demand tag compliance run");
    let (body, code) = match run_compliance_check(|key: &str| std::env::var(key)).await {
        Ok(report) => (
            serde_json::to_value(CheckResponse::for_request(&report))?,
            ExitCode::SUCCESS,
        ),
        Err(e) => (
            serde_json::to_value(CheckFailure::from(&e))?,
            ExitCode::FAILURE,
        ),
    };

    let rendered = if pretty {
        serde_json::to_string_pretty(&body)?
    } else {
        body.to_string()
    };
    println!("{rendered}");
    Ok(code)
}

fn validate_config() -> anyhow::Result<ExitCode> {
    match tagwatch_core::load_check_config_from_env() {
        Ok(config) => {
            println!("{config:#?}");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("invalid configuration: {e}");
            Ok(ExitCode::FAILURE)
        }
    }
}
