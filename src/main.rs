use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use docsim::config::{self, Config};
use docsim::output::terminal;
use docsim::similarity::Tokenization;
use docsim::{Document, DocumentFormat, Pipeline};

/// docsim: compare documents and check sentences by hand.
///
/// Extracts text from plain text, PDF, and Word files, scores how similar two
/// documents are, and lists search links for every sentence of one document.
#[derive(Parser)]
#[command(name = "docsim", version, about)]
struct Cli {
    /// Lowercase whitespace tokens before scoring
    #[arg(long, global = true)]
    lowercase: bool,

    /// Score on word tokens (2+ letters, lowercased) instead of whitespace tokens
    #[arg(long, global = true)]
    words: bool,

    /// Only match the first N characters of each document (N >= 1)
    #[arg(long, global = true, value_parser = parse_max_match_chars)]
    max_match_chars: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split a document into sentences and print search links for each
    Check {
        file: PathBuf,

        /// Declared format (default: inferred from the extension)
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
    },

    /// Split literal text into sentences and print search links for each
    Text {
        text: String,
    },

    /// Compare two documents
    Compare {
        /// Exactly two files
        #[arg(num_args = 1..)]
        files: Vec<PathBuf>,

        /// Declared format for both files (default: inferred per file)
        #[arg(long, value_enum)]
        format: Option<FormatArg>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Max matching passages to print (default: 20)
        #[arg(long, default_value = "20")]
        passages: usize,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Txt,
    Pdf,
    Docx,
}

impl From<FormatArg> for DocumentFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Txt => DocumentFormat::PlainText,
            FormatArg::Pdf => DocumentFormat::Pdf,
            FormatArg::Docx => DocumentFormat::WordProcessing,
        }
    }
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("docsim=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = apply_flags(Config::load()?, &cli);
    let pipeline = Pipeline::with_settings(
        Arc::new(config.sentence_model()),
        config.tokenization,
        config.match_limits(),
    );

    match cli.command {
        Commands::Check { file, format } => {
            let doc = read_document(&file, format)?;
            let outcome = pipeline.check(Some(&doc))?;
            terminal::display_check(&outcome);
        }

        Commands::Text { text } => {
            let outcome = pipeline.check_text(&text);
            terminal::display_check(&outcome);
        }

        Commands::Compare {
            files,
            format,
            json,
            passages,
        } => {
            let docs = files
                .iter()
                .map(|path| read_document(path, format))
                .collect::<Result<Vec<_>>>()?;

            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::with_template("{spinner} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            spinner.set_message("Comparing documents...");
            spinner.enable_steady_tick(Duration::from_millis(100));
            let outcome = pipeline.compare_uploads(&docs);
            spinner.finish_and_clear();

            let outcome = outcome?;
            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                terminal::display_compare(&outcome, passages);
            }
        }
    }

    Ok(())
}

fn parse_max_match_chars(value: &str) -> std::result::Result<usize, String> {
    config::parse_char_limit(value).map_err(|e| e.to_string())
}

/// Command-line flags take precedence over environment configuration.
fn apply_flags(mut config: Config, cli: &Cli) -> Config {
    if cli.words {
        config.tokenization = Tokenization::Words;
    } else if cli.lowercase {
        config.tokenization = Tokenization::Whitespace { lowercase: true };
    }
    if cli.max_match_chars.is_some() {
        config.max_match_chars = cli.max_match_chars;
    }
    config
}

/// Read a file into a Document. The format comes from `--format` or the
/// extension; an unknown extension leaves it unset so the core reports the
/// file as having no content.
fn read_document(path: &Path, format: Option<FormatArg>) -> Result<Document> {
    let bytes = std::fs::read(path).with_context(|| format!("Cannot read '{}'", path.display()))?;

    let format = format.map(DocumentFormat::from).or_else(|| {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(DocumentFormat::from_extension)
    });
    if format.is_none() {
        warn!(path = %path.display(), "Unrecognized file type");
    }

    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string();
    info!(document = %name, bytes = bytes.len(), "Read document");

    Ok(Document::new(name, format, bytes))
}
