//! infer-metadata CLI: tags, steps and kinds for one markdown document.
//!
//! ```text
//! echo "$CONTENT" | infer-metadata - '{"tags":[...],"steps":[...],"kinds":[...]}'
//! infer-metadata content.md '{"tags":[...],"steps":[...],"kinds":[...]}'
//! ```
//!
//! The result goes to stdout; failures write `{"error": ...}` to stderr and
//! exit with status 1.
//!
//! Logging: set `RUST_LOG=omni_infer=debug` to see rule matches on stderr.

use std::io::Write;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use omni_infer::{ErrorPayload, InferError, TextSource, infer_metadata};

#[derive(Parser, Debug)]
#[command(
    name = "infer-metadata",
    version,
    about = "Infer tags, steps and kinds for a markdown document"
)]
struct Cli {
    /// Text source: `-` for stdin, otherwise a file path (may start with `-`).
    #[arg(value_name = "FILE|-", allow_hyphen_values = true)]
    source: TextSource,

    /// Catalog JSON: `{"tags":[...],"steps":[...],"kinds":[...]}`.
    #[arg(value_name = "CATALOGS_JSON")]
    catalog: String,

    /// Output format.
    #[arg(long, short = 'o', value_enum, default_value_t = OutputFormat::Pretty)]
    output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    Json,
    Pretty,
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("omni_infer=warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn emit<T: Serialize>(value: &T, output: OutputFormat) -> Result<()> {
    let rendered = match output {
        OutputFormat::Json => serde_json::to_string(value),
        OutputFormat::Pretty => serde_json::to_string_pretty(value),
    }
    .context("failed to serialize result as JSON")?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{rendered}").context("failed to write result to stdout")?;
    stdout.flush().context("failed to flush stdout")?;
    Ok(())
}

fn report(payload: &ErrorPayload) {
    let rendered = serde_json::to_string(payload)
        .unwrap_or_else(|_| format!("{{\"error\":{:?}}}", payload.error));
    eprintln!("{rendered}");
}

fn main() -> ExitCode {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            tracing::debug!(error = %err, "argument parsing failed");
            report(&InferError::Usage.payload());
            return ExitCode::FAILURE;
        }
    };

    let result = match infer_metadata(&cli.source, &cli.catalog) {
        Ok(result) => result,
        Err(err) => {
            report(&err.payload());
            return ExitCode::FAILURE;
        }
    };

    match emit(&result, cli.output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&ErrorPayload::message(format!("{err:#}")));
            ExitCode::FAILURE
        }
    }
}
