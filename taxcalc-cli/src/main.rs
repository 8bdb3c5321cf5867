use clap::Parser;
use std::{io, num::NonZeroUsize, path::PathBuf};
use taxcalc::report::write_error;
use taxcalc::{run, CliOverrides, Query, TaxConfig, TaxError};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

type Result<T> = std::result::Result<T, TaxError>;

/// Computes bracket tax for a batch of taxpayers, writes load-order and
/// salary-sorted reports, then looks one taxpayer up by name.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input file of name/company/salary lines
    #[arg(short = 'i', long)]
    input: Option<PathBuf>,

    /// Report written in load order
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Report written in ascending salary order
    #[arg(short = 's', long)]
    sorted_output: Option<PathBuf>,

    /// Number of records to read
    #[arg(short = 'n', long)]
    count: Option<NonZeroUsize>,

    /// Name to look up instead of prompting for one
    #[arg(long)]
    name: Option<String>,

    /// Configuration file layered over the default locations
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() {
    if let Err(e) = execute() {
        // Nothing sensible is left to do if stderr itself is gone
        let _ = write_error(&mut io::stderr(), &e);
    }
}

fn execute() -> Result<()> {
    let cli = Cli::parse();

    let config = TaxConfig::load_from(cli.config.as_deref())?.merge_with_cli(CliOverrides {
        input_path: cli.input,
        output_path: cli.output,
        sorted_output_path: cli.sorted_output,
        record_count: cli.count,
        log_level: cli.log_level,
    });

    init_logging(&config.log_level)?;
    debug!("Effective configuration: {:?}", config);

    let query = match cli.name {
        Some(name) => Query::Name(name),
        None => Query::Prompt,
    };

    let stdin = io::stdin();
    run(
        &config,
        query,
        &mut stdin.lock(),
        io::stdout().lock(),
        &mut io::stderr().lock(),
    )?;
    Ok(())
}

/// Logs go to stderr; `RUST_LOG` wins over the configured level
fn init_logging(level: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level).map_err(|e| {
            TaxError::config_error(format!("Invalid log level {:?}: {}", level, e))
        })?,
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
    Ok(())
}
