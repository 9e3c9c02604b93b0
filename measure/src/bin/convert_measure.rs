/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::debug;
use measure::{MeasureError, Registry, UnitsConfig};

#[derive(Parser)]
#[clap(version = env!("CARGO_PKG_VERSION"))]
/// Measurement Converter
///
/// Parses amounts such as "1.5km" or "3 kB", optionally converts them
/// and prints them formatted with their symbol.
struct Args {
    #[clap(long, short)]
    /// Kind of measurement: distance, weight, liquid-volume or file-size.
    kind: String,
    #[clap(long, short)]
    /// JSON unit configuration (the bundled configuration by default).
    config: Option<PathBuf>,
    #[clap(long, short)]
    /// Unit to convert to.
    to: Option<String>,
    #[clap(long, short)]
    /// Number of decimals.
    decimals: Option<usize>,
    #[clap(long)]
    /// Decimal separator.
    decimal_separator: Option<String>,
    #[clap(long)]
    /// Thousands separator.
    thousands_separator: Option<String>,
    #[clap(long, short)]
    /// Output the value and unit as JSON.
    json: bool,
    /// Increase verbosity (may be repeated).
    #[clap(short = 'v', long, action = clap::ArgAction::Count)]
    verbosity: u8,
    #[clap(allow_hyphen_values = true)]
    /// The amounts to convert.
    amount: Vec<String>,
}

fn main() {
    let args = Args::parse();
    init_logger(args.verbosity);

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1)
    }
}

fn init_logger(verbosity: u8) {
    if let Err(e) = simplelog::TermLogger::init(
        match verbosity {
            0 => simplelog::LevelFilter::Warn,
            1 => simplelog::LevelFilter::Debug,
            2.. => simplelog::LevelFilter::Trace,
        },
        simplelog::ConfigBuilder::new().build(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("Error: failed to initialize logging: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), MeasureError> {
    let config = match &args.config {
        Some(path) => UnitsConfig::load(path)?,
        None => UnitsConfig::builtin()?,
    };
    let template = Registry::new(config).make(Some(args.kind.as_str()))?;

    for input in &args.amount {
        let parsed = template.with_amount(input)?;
        let measurement = match &args.to {
            Some(unit) => parsed.convert_str(unit)?,
            None => parsed,
        };
        debug!(
            "{} -> {} {}",
            input,
            measurement.value(),
            measurement.unit_key()
        );

        match args.json {
            false => println!(
                "{}",
                measurement.format_with_symbol(
                    args.decimals,
                    args.decimal_separator.as_deref(),
                    args.thousands_separator.as_deref(),
                )
            ),
            true => println!("{}", measurement.amount_json()?),
        }
    }
    Ok(())
}
