use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use resume_parser::config::Config;
use resume_parser::extract::extract_text;
use resume_parser::parser::parse_resume;
use resume_parser::persist::write_json;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let input: PathBuf = std::env::args()
        .nth(1)
        .map(Into::into)
        .context("usage: resume-parser <resume.pdf|resume.txt> [output.json]")?;
    let output: PathBuf = std::env::args()
        .nth(2)
        .map(Into::into)
        .unwrap_or_else(|| PathBuf::from(&config.output_path));

    info!("Starting resume parser v{}", env!("CARGO_PKG_VERSION"));

    // PDFs go through the extraction collaborator; anything else is
    // treated as already-extracted plain text.
    let text = match input.extension().and_then(|e| e.to_str()) {
        Some("pdf") => extract_text(&input)?,
        _ => std::fs::read_to_string(&input)
            .with_context(|| format!("failed to read {}", input.display()))?,
    };

    let resume = parse_resume(&text);
    write_json(&resume, &output)?;
    info!("Resume parsed and saved to {}", output.display());

    Ok(())
}
