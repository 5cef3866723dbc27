// AuraMind - Mental-health support chat relay
// Main entry point

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;

use auramind::chat::ChatService;
use auramind::config::{load_config, Config};
use auramind::crisis::CrisisDetector;
use auramind::providers::OpenAIProvider;
use auramind::relay::ChatRelay;
use auramind::resources::catalog;
use auramind::server::AppServer;
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "auramind")]
#[command(about = "Mental-health support chat relay", version)]
struct Args {
    /// Run mode (defaults to serve)
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Parser, Debug)]
enum Command {
    /// Run the HTTP server
    Serve {
        /// Bind address (overrides config and AURAMIND_BIND)
        #[arg(long)]
        bind: Option<String>,
    },
    /// Run a message through the crisis detector
    Check {
        /// Message text
        message: String,
    },
    /// Print the resource catalog as JSON
    Resources,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Some(Command::Serve { bind }) => run_server(load_config()?, bind).await,
        None => run_server(load_config()?, None).await,
        Some(Command::Check { message }) => run_check(&load_config()?, &message),
        // Static data, no config needed
        Some(Command::Resources) => {
            println!("{}", render_resources()?);
            Ok(())
        }
    }
}

fn render_resources() -> Result<String> {
    serde_json::to_string_pretty(catalog()).context("Failed to serialize resource catalog")
}

fn build_detector(config: &Config) -> Result<CrisisDetector> {
    match &config.crisis_keywords_path {
        Some(path) => CrisisDetector::load_from_file(path),
        None => Ok(CrisisDetector::default()),
    }
}

fn run_check(config: &Config, message: &str) -> Result<()> {
    let detector = build_detector(config)?;

    match detector.matched_keyword(message) {
        Some(keyword) => println!("crisis: yes (matched '{}')", keyword),
        None => println!("crisis: no"),
    }

    Ok(())
}

async fn run_server(config: Config, bind: Option<String>) -> Result<()> {
    init_tracing(&config)?;
    tracing::debug!(?config, "Configuration loaded");

    let detector = build_detector(&config)?;
    tracing::info!(keywords = detector.keywords().len(), "Crisis detector ready");

    let provider = OpenAIProvider::with_base_url(&config.openai_base_url)?;
    if std::env::var(auramind::providers::openai::API_KEY_ENV).is_err() {
        tracing::warn!("OPENAI_API_KEY is not set; chat replies will fail until it is");
    }

    let relay = ChatRelay::new(Arc::new(provider));
    let server = AppServer::new(ChatService::new(detector, relay));

    let bind_address = bind.unwrap_or(config.bind_address);
    server.serve(&bind_address).await
}

fn init_tracing(config: &Config) -> Result<()> {
    // Default: INFO level, can be overridden with RUST_LOG env var
    let default_level = if config.debug_logging { "debug" } else { "info" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    match &config.log_file {
        Some(log_path) => {
            let log_file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_path)
                .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;

            let file_writer = Arc::new(log_file);
            let file_layer = tracing_subscriber::fmt::layer()
                .with_writer(move || file_writer.clone())
                .with_ansi(false); // No ANSI colors in log file

            tracing_subscriber::registry()
                .with(env_filter)
                .with(file_layer)
                .init();

            eprintln!("AuraMind logs: {}", log_path.display());
        }
        None => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    Ok(())
}
