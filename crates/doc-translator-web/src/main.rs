//! Document Translator Web - HTTP service translating uploaded documents to English.

mod helpers;
mod routes;
mod state;
mod templates;

use anyhow::{Context, Result};
use clap::Parser;
use doc_translator_core::AppConfig;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use state::AppState;

#[derive(Parser, Debug)]
#[command(name = "doc-translator-web")]
#[command(author, version, about = "Document Translator Web Server", long_about = None)]
struct Args {
    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to bind to
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Chat-completion API base URL
    #[arg(long, env = "OPENROUTER_API_BASE")]
    api_base: Option<String>,

    /// API key for the chat-completion provider
    #[arg(long, env = "OPENROUTER_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Model identifier
    #[arg(long, env = "OPENROUTER_MODEL")]
    model: Option<String>,

    /// Maximum characters sent for translation
    #[arg(long)]
    max_chars: Option<usize>,

    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (before parsing args so env vars are available)
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let default_level = match args.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{default_level},lopdf=warn")));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();

    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path).context("Failed to load config file")?
    } else {
        AppConfig::load()
    };

    // Command line and environment override the config file
    if let Some(api_base) = args.api_base {
        config.translator.api_base = api_base;
    }
    if args.api_key.is_some() {
        config.translator.api_key = args.api_key;
    }
    if let Some(model) = args.model {
        config.translator.model = model;
    }
    if let Some(max_chars) = args.max_chars {
        config.max_chars = max_chars;
    }

    info!(
        "Using {} with model {} (max {} characters)",
        config.translator.api_base, config.translator.model, config.max_chars
    );

    let state = Arc::new(
        AppState::new(config).context("Failed to initialize application state")?,
    );

    let app = routes::router(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
