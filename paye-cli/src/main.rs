mod output;

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use paye_core::models::{PayrollInput, PayrollResult};
use paye_core::{TaxYearRegistry, calculate, calculate_with_config};
use paye_data::TaxTableLoader;

/// UK PAYE take-home pay calculator
#[derive(Parser)]
#[command(
    name = "paye",
    version,
    about = "UK PAYE take-home pay calculator",
    long_about = "Calculates a month-by-month and annual breakdown of gross pay, \
                  income tax, National Insurance, pension and take-home pay using \
                  the cumulative PAYE method."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a payroll calculation from a JSON income profile
    Calculate(CalculateArgs),
    /// List the tax years built into the engine
    Years,
}

#[derive(clap::Args)]
struct CalculateArgs {
    /// Path to the JSON income profile; reads stdin when omitted
    #[arg(long)]
    input: Option<PathBuf>,

    /// Band schedules CSV, overriding the built-in tables
    /// (requires --params)
    #[arg(long, requires = "params")]
    bands: Option<PathBuf>,

    /// Per-year parameters CSV, overriding the built-in tables
    /// (requires --bands)
    #[arg(long, requires = "bands")]
    params: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(error) = run() {
        eprintln!("error: {error:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Calculate(args) => {
            let profile = read_profile(args.input.as_deref())?;
            let result = match (&args.bands, &args.params) {
                (Some(bands), Some(params)) => {
                    calculate_from_tables(&profile, bands, params)?
                }
                _ => calculate(&profile)?,
            };

            match args.format {
                OutputFormat::Table => print!("{}", output::render_table(&result)),
                OutputFormat::Json => println!("{}", output::render_json(&result)?),
            }
            Ok(())
        }
        Commands::Years => {
            for year in TaxYearRegistry::KNOWN_YEARS {
                println!("{year}");
            }
            Ok(())
        }
    }
}

fn read_profile(path: Option<&Path>) -> Result<PayrollInput> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("cannot read profile '{}'", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("cannot read profile from stdin")?;
            buffer
        }
    };

    serde_json::from_str(&raw).context("profile is not a valid JSON income profile")
}

/// Resolves the profile's tax year against CSV tables instead of the
/// built-in registry.
fn calculate_from_tables(
    profile: &PayrollInput,
    bands_path: &Path,
    params_path: &Path,
) -> Result<PayrollResult> {
    let bands = TaxTableLoader::parse_bands(open(bands_path)?)
        .with_context(|| format!("cannot load band schedules from '{}'", bands_path.display()))?;
    let params = TaxTableLoader::parse_year_params(open(params_path)?)
        .with_context(|| format!("cannot load year parameters from '{}'", params_path.display()))?;
    let configs = TaxTableLoader::assemble(&params, &bands)?;
    debug!(years = configs.len(), "assembled tax tables from CSV");

    let Some(config) = configs
        .iter()
        .find(|config| config.tax_year == profile.tax_year)
    else {
        bail!("tax year '{}' is not in the supplied tables", profile.tax_year);
    };

    Ok(calculate_with_config(profile, config))
}

fn open(path: &Path) -> Result<File> {
    File::open(path).with_context(|| format!("cannot open '{}'", path.display()))
}
