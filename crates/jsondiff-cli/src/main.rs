//! `jsondiff` CLI -- list every structural difference between two JSON files.
//!
//! ## Usage
//!
//! ```sh
//! # Plain report, one line per difference
//! jsondiff old.json new.json
//!
//! # Machine-readable report
//! jsondiff --format json old.json new.json
//!
//! # Fail a CI step when the documents differ
//! jsondiff --exit-code expected.json actual.json
//!
//! # Show debug logs on stderr
//! jsondiff -v old.json new.json
//! ```
//!
//! Exit status: 0 on success, 1 with `--exit-code` when differences were
//! found, 2 on bad usage or when a file cannot be read or parsed.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use jsondiff_core::{Difference, Summary};
use std::path::{Path, PathBuf};
use std::process;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: jsondiff <file1> <file2>";

#[derive(Parser)]
#[command(
    name = "jsondiff",
    version,
    about = "Report every structural difference between two JSON documents"
)]
struct Cli {
    /// The two JSON files to compare (first, second)
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Exit with status 1 when any difference is found
    #[arg(long)]
    exit_code: bool,

    /// Append per-kind counts to the text report
    #[arg(long)]
    summary: bool,

    /// Increase log verbosity on stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let [first, second] = cli.files.as_slice() else {
        println!("{}", USAGE);
        process::exit(2);
    };

    match run(&cli, first, second) {
        Ok(found) if found && cli.exit_code => process::exit(1),
        Ok(_) => {}
        Err(err) => {
            println!("An error occurred: {:#}", err);
            process::exit(2);
        }
    }
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Compare the two files and print the report. Returns whether any
/// difference was found.
fn run(cli: &Cli, first: &Path, second: &Path) -> Result<bool> {
    let left = load_document(first)?;
    let right = load_document(second)?;

    let differences = jsondiff_core::compare(&left, &right);
    let summary = jsondiff_core::summarize(&differences);
    info!(
        first = %first.display(),
        second = %second.display(),
        total = summary.total(),
        "compared documents"
    );

    match cli.format {
        Format::Text => print_text(&differences, cli.summary.then_some(&summary)),
        Format::Json => print_json(&differences, &summary)?,
    }

    Ok(!differences.is_empty())
}

fn load_document(path: &Path) -> Result<serde_json::Value> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    debug!(path = %path.display(), bytes = text.len(), "read document");
    jsondiff_core::parse_document(&text)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

fn print_text(differences: &[Difference], summary: Option<&Summary>) {
    println!("Differences between the two JSON files:");
    for difference in differences {
        println!("{}", difference);
    }
    if let Some(summary) = summary {
        println!();
        println!("Type mismatches:   {}", summary.type_mismatches);
        println!("Value mismatches:  {}", summary.value_mismatches);
        println!("Missing in first:  {}", summary.missing_in_left);
        println!("Missing in second: {}", summary.missing_in_right);
        println!("Total:             {}", summary.total());
    }
}

fn print_json(differences: &[Difference], summary: &Summary) -> Result<()> {
    let mut report = serde_json::Map::new();
    report.insert(
        "differences".to_string(),
        serde_json::to_value(differences).context("Failed to serialize differences")?,
    );
    report.insert(
        "summary".to_string(),
        serde_json::to_value(summary).context("Failed to serialize summary")?,
    );
    let pretty = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
    println!("{}", pretty);
    Ok(())
}
