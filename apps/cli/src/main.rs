//! # tipsplit
//!
//! Command-line front end over the tipsplit-core allocator.
//!
//! ## Control Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  argv ──► args (flags) ──► parse (exact values) ──► SplitRequest        │
//! │                                                          │               │
//! │                                                   compute() once        │
//! │                                                          │               │
//! │  stdout ◄── render (text / json / csv) ◄── SplitResult ◄┘               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Exit Codes
//! - 0: success
//! - 1: usage error (bad flags); usage text goes to stderr
//! - 2: parse or allocation error, surfaced verbatim

mod args;
mod parse;
mod render;

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use tipsplit_core::{SplitError, SplitRequest};

use crate::args::{CliArgs, OutputFormat, UsageError, USAGE};
use crate::parse::ParseError;
use crate::render::SplitRecord;

#[derive(Debug, Error)]
enum CliError {
    #[error("{0}")]
    Usage(#[from] UsageError),

    #[error("{0}")]
    Parse(#[from] ParseError),

    #[error("{0}")]
    Split(#[from] SplitError),

    #[error("failed to write output: {0}")]
    Output(String),
}

fn main() {
    // Logs go to stderr so the machine-readable stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => {}
        Err(CliError::Usage(err)) => {
            eprintln!("error: {err}\n\n{USAGE}");
            std::process::exit(1);
        }
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(2);
        }
    }
}

fn run() -> Result<(), CliError> {
    let cli = CliArgs::parse(std::env::args().skip(1))?;
    if cli.help {
        print!("{USAGE}");
        return Ok(());
    }

    let subtotal = parse::parse_money(&cli.subtotal, cli.strict)?;
    let tax = parse::parse_money(&cli.tax, cli.strict)?;
    let tip_percent = parse::parse_percentage(&cli.tip)?;

    let weights: Vec<Decimal> = match (&cli.weights, &cli.people) {
        (Some(weights), _) => parse::parse_weights(weights)?,
        (None, Some(people)) => vec![Decimal::ONE; parse::parse_people(people)?],
        (None, None) => vec![Decimal::ONE],
    };

    let request = SplitRequest {
        subtotal_before_tax: subtotal,
        tax_amount: tax,
        tip_percent,
        tip_basis: cli.tip_basis,
        weights,
        rounding_mode: cli.rounding_mode,
        granularity: cli.granularity,
    };
    debug!(
        subtotal = request.subtotal_before_tax.cents(),
        tax = request.tax_amount.cents(),
        tip_bps = request.tip_percent.bps(),
        people = request.people(),
        "computing split"
    );

    let result = request.compute()?;
    debug!(
        tip = result.tip.cents(),
        grand_total = result.grand_total.cents(),
        "split computed"
    );

    match cli.output {
        OutputFormat::Text => print!("{}", render::render_text(&request, &result)),
        OutputFormat::Json => {
            let record = SplitRecord::new(&request, &result);
            let json =
                render::render_json(&record).map_err(|err| CliError::Output(err.to_string()))?;
            println!("{json}");
        }
        OutputFormat::Csv => {
            let record = SplitRecord::new(&request, &result);
            let csv =
                render::render_csv(&record).map_err(|err| CliError::Output(err.to_string()))?;
            print!("{csv}");
        }
    }

    Ok(())
}
