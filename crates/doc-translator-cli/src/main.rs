//! Document Translator CLI - translate a local document to English.

use anyhow::{Context, Result};
use clap::Parser;
use doc_translator_core::{
    AppConfig, DEFAULT_SOURCE_LANG, DocumentTranslator, Lang, UploadedDocument,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "doc-translate")]
#[command(author, version, about = "Translate PDF, DOCX and TXT documents to English", long_about = None)]
struct Args {
    /// Input document
    #[arg(required = true)]
    input: PathBuf,

    /// Output file for the translation (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Source language: a code or name, or "auto" to detect it
    #[arg(short = 's', long, default_value = DEFAULT_SOURCE_LANG)]
    source: String,

    /// Declared content type (default: guessed from the file extension)
    #[arg(long)]
    mime_type: Option<String>,

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

/// The content type a browser would declare for this file.
fn declared_type(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_raw()
        .unwrap_or("application/octet-stream")
        .to_string()
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (before parsing args so env vars are available)
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Setup logging
    let default_level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // RUST_LOG takes precedence over -v
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{default_level},lopdf=warn")));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();

    // Load or create config
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path).context("Failed to load config file")?
    } else {
        AppConfig::load()
    };

    // Override config with CLI arguments
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

    // Fails before reading the input if no API key is configured
    let translator = DocumentTranslator::new(config).context("Failed to initialize translator")?;

    let mime_type = args
        .mime_type
        .unwrap_or_else(|| declared_type(&args.input));

    info!("Loading {} as {}", args.input.display(), mime_type);
    let bytes = std::fs::read(&args.input)
        .context(format!("Failed to read input: {}", args.input.display()))?;

    let mut document = UploadedDocument::new(bytes, mime_type);
    if let Some(name) = args.input.file_name().and_then(|n| n.to_str()) {
        document = document.with_file_name(name);
    }

    let spinner = ProgressBar::new_spinner();
    // Template is hardcoded and valid, unwrap is safe
    #[allow(clippy::unwrap_used)]
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap(),
    );
    spinner.set_message("Translating...");
    spinner.enable_steady_tick(Duration::from_millis(120));

    let result = translator.translate(document, Lang::new(&args.source)).await;
    spinner.finish_and_clear();

    let response = result.context("Translation failed")?;

    if let Some(output_path) = &args.output {
        std::fs::write(output_path, &response.translated_text)
            .context(format!("Failed to write output: {}", output_path.display()))?;
        info!("Translation saved to {}", output_path.display());
    } else {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", response.translated_text).context("Failed to write to stdout")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_type_from_extension() {
        assert_eq!(declared_type(Path::new("report.pdf")), "application/pdf");
        assert_eq!(declared_type(Path::new("notes.txt")), "text/plain");
        assert_eq!(
            declared_type(Path::new("letter.docx")),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        );
        assert_eq!(declared_type(Path::new("no_extension")), "application/octet-stream");
    }

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from(["doc-translate", "file.pdf", "-s", "Spanish", "-vv"]).unwrap();
        assert_eq!(args.input, PathBuf::from("file.pdf"));
        assert_eq!(args.source, "Spanish");
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_source_defaults_to_auto() {
        let args = Args::try_parse_from(["doc-translate", "file.txt"]).unwrap();
        assert!(Lang::new(&args.source).is_auto());
    }

    #[test]
    fn test_init_error_keeps_reason() {
        let config = AppConfig {
            max_chars: 0,
            ..AppConfig::default()
        };
        let err = DocumentTranslator::new(config)
            .context("Failed to initialize translator")
            .err()
            .expect("expected initialization to fail");
        let report = format!("{err:#}");
        assert!(report.contains("Failed to initialize translator"), "got {report}");
        assert!(report.contains("max_chars"), "got {report}");
    }
}
