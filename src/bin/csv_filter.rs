//! Command-line filter: `csv-filter data.csv 2 '>' 100 [out.csv]`.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;

use csv_sieve::data::codec::{encode, encode_quoted};
use csv_sieve::data::filter::{apply, FilterOperator, FilterSpec};
use csv_sieve::data::loader::{export_results, load_file};

/// Filter the rows of a CSV file by one column.
#[derive(Parser, Debug)]
#[command(
    name = "csv-filter",
    version,
    after_help = "Examples:\n  csv-filter data.csv 0 == John\n  csv-filter data.csv 2 '>' 100\n  csv-filter data.csv 1 contains Smith output.csv"
)]
struct Cli {
    /// Path to the CSV file to filter
    input: PathBuf,

    /// Zero-based index of the column to test
    column: usize,

    /// Operator: ==, !=, >, <, >=, <=, contains (or equals, notEquals, ...)
    operator: FilterOperator,

    /// Value to compare against
    #[arg(allow_hyphen_values = true)]
    value: String,

    /// Write results here instead of stdout
    output: Option<PathBuf>,

    /// Quote fields containing commas or quotes
    #[arg(long)]
    quote: bool,

    /// Print the result as a JSON array of rows
    #[arg(long, conflicts_with = "quote")]
    json: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => return fail(&usage_message(&e)),
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => fail(&format!("{e:#}")),
    }
}

fn fail(message: &str) -> ExitCode {
    eprintln!("Error: {message}");
    ExitCode::FAILURE
}

/// clap's rendered error without its own `error: ` prefix.
fn usage_message(e: &clap::Error) -> String {
    let rendered = e.render().to_string();
    let message = rendered.strip_prefix("error: ").unwrap_or(&rendered);
    message.trim_end().to_string()
}

fn run(cli: &Cli) -> Result<()> {
    let grid = load_file(&cli.input)
        .with_context(|| format!("loading '{}'", cli.input.display()))?;

    let spec = FilterSpec::new(cli.column, cli.operator, cli.value.clone());
    let result = apply(&grid, &spec)?;
    log::info!(
        "{} of {} rows matched",
        result.data_rows().len(),
        grid.data_rows().len()
    );

    let mut text = if cli.json {
        serde_json::to_string_pretty(&result).context("serializing result")?
    } else if cli.quote {
        encode_quoted(&result)?
    } else {
        encode(&result)
    };
    text.push('\n');

    match &cli.output {
        Some(path) => export_results(path, &text)?,
        None => print!("{text}"),
    }
    Ok(())
}
