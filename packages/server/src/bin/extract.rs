//! One-shot extraction CLI
//!
//! Runs the same pipeline as `POST /extract` for a single URL and prints the
//! result, without starting the HTTP server.

use anyhow::{Context, Result};
use clap::Parser;
use docext::ExtractionService;
use server_core::Config;

/// Number of characters shown unless `--full` is passed
const PREVIEW_CHARS: usize = 200;

#[derive(Parser)]
#[command(name = "extract")]
#[command(about = "Extract plain text from a PDF or DOCX URL")]
struct Cli {
    /// Document URL
    url: String,

    /// Print the whole text instead of a preview
    #[arg(long)]
    full: bool,

    /// Print the result as JSON (`{"text", "character_count"}`)
    #[arg(long, conflicts_with = "full")]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env().context("Failed to load configuration")?;

    // Logs go to stderr so stdout stays clean for the extracted text
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_new(&config.log_filter)
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let service = ExtractionService::from_config(&config.extraction_config())
        .context("Failed to create extraction service")?;

    let extracted = service
        .extract(&cli.url)
        .await
        .with_context(|| format!("Extraction failed for {}", cli.url))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&extracted)?);
    } else if cli.full {
        println!("{}", extracted.text);
    } else {
        println!("Extracted {} characters", extracted.character_count);
        let preview: String = extracted.text.chars().take(PREVIEW_CHARS).collect();
        println!("{}", preview);
        if extracted.character_count > PREVIEW_CHARS {
            println!("...");
        }
    }

    Ok(())
}
