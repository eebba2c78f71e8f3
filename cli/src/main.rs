//! Rental forecast command-line front end.
//!
//! Usage:
//!   rental-forecast forecast --day 1000 --week 6000 --month 20000 --days 10
//!   rental-forecast bulk requests.json
//!   rental-forecast subtotal line_items.json
//!
//! Logs go to stderr; set RUST_LOG (e.g. RUST_LOG=rental_pricing_core_rs=debug)
//! or pass -v / -vv.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use serde::Serialize;

use rental_pricing_core_rs::pricing::calculate_sub_total_with;
use rental_pricing_core_rs::{
    format_cents, Forecast, ForecastConfig, ForecastError, ForecastRequest, Forecaster, LineItem,
    RatePlan,
};

#[derive(Parser)]
#[command(name = "rental-forecast", version, about = "Optimal day/week/month rental cost forecasts")]
struct Cli {
    /// JSON file with forecaster limits
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Forecast a single rate plan
    Forecast {
        /// Price of one day (cents)
        #[arg(long)]
        day: i64,

        /// Price of one week (cents)
        #[arg(long)]
        week: i64,

        /// Price of one 28-day month (cents)
        #[arg(long)]
        month: i64,

        /// Rental duration in days
        #[arg(long)]
        days: i64,

        #[arg(long, value_enum, default_value_t = Format::Table)]
        format: Format,
    },

    /// Forecast a JSON array of {"rates": {...}, "duration_days": n}
    Bulk { input: PathBuf },

    /// Price a JSON array of line items
    Subtotal { input: PathBuf },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Table,
    Json,
}

/// One slot of a batch response
#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
enum Outcome<T> {
    Ok(T),
    Error(String),
}

impl<T> From<Result<T, ForecastError>> for Outcome<T> {
    fn from(result: Result<T, ForecastError>) -> Self {
        match result {
            Ok(value) => Outcome::Ok(value),
            Err(e) => Outcome::Error(e.to_string()),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => ForecastConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ForecastConfig::default(),
    };
    tracing::info!(
        "max_duration_days={} parallel_threshold={}",
        config.max_duration_days,
        config.parallel_threshold
    );
    let forecaster = Forecaster::new(config);

    match cli.command {
        Command::Forecast {
            day,
            week,
            month,
            days,
            format,
        } => {
            let rates = RatePlan::new(day, week, month);
            let forecast = forecaster
                .forecast(&rates, days)
                .context("forecast rejected")?;
            match format {
                Format::Table => print_table(&forecast),
                Format::Json => println!("{}", serde_json::to_string_pretty(&forecast)?),
            }
        }
        Command::Bulk { input } => {
            let requests: Vec<ForecastRequest> = read_json(&input)?;
            let outcomes: Vec<Outcome<Forecast>> = forecaster
                .bulk_forecast(&requests)
                .into_iter()
                .map(Outcome::from)
                .collect();
            println!("{}", serde_json::to_string_pretty(&outcomes)?);
        }
        Command::Subtotal { input } => {
            let items: Vec<LineItem> = read_json(&input)?;
            let outcomes: Vec<Outcome<_>> = items
                .iter()
                .map(|item| Outcome::from(calculate_sub_total_with(&forecaster, item)))
                .collect();
            println!("{}", serde_json::to_string_pretty(&outcomes)?);
        }
    }

    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let contents =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("parsing {}", path.display()))
}

fn print_table(forecast: &Forecast) {
    println!(
        "{:>5}  {:>12}  {:>12}  {:<8}  {:<24}  {:>12}  {:>7}",
        "day", "marginal", "total", "strategy", "split", "vs daily", "saved"
    );
    for entry in &forecast.days {
        println!(
            "{:>5}  {:>12}  {:>12}  {:<8}  {:<24}  {:>12}  {:>6.1}%",
            entry.day,
            format_cents(entry.cost_in_cents),
            format_cents(entry.accumulative_cost_in_cents),
            entry.strategy,
            entry.rental_period.describe(),
            format_cents(entry.savings_vs_day_rate_in_cents),
            entry.savings_vs_day_rate_fraction * 100.0
        );
    }
    if let Some(last) = forecast.last() {
        println!();
        println!("{}", last.details.plain_text);
    }
}
