//! CLI entry point for the popular-times generator.
//!
//! Aggregates per-lot occupancy samples into 24-hour average occupancy
//! curves and writes them as JSON for the app. Runs on the built-in
//! reference lots when no input file is given.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use popular_times::output::{print_json, print_pretty, write_popular_times};
use popular_times::parser::load_lots;
use popular_times::sample_data::reference_lots;
use popular_times::{RoundingPolicy, aggregate_lots};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "popular_times")]
#[command(about = "Compute hourly parking occupancy curves", long_about = None)]
struct Cli {
    /// JSON or CSV file with lots (defaults to the built-in reference lots)
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// JSON file to write results to
    #[arg(short, long, default_value = "popularTimes.json")]
    output: PathBuf,

    /// When to round occupancy rates to two decimals
    #[arg(long, value_enum, default_value_t = Rounding::PerSample)]
    rounding: Rounding,

    /// Also log the resulting JSON
    #[arg(long, default_value_t = false)]
    print: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Rounding {
    /// Round each sample's rate, then average
    PerSample,
    /// Average raw rates, then round each hour
    AfterMean,
}

impl From<Rounding> for RoundingPolicy {
    fn from(r: Rounding) -> Self {
        match r {
            Rounding::PerSample => RoundingPolicy::PerSample,
            Rounding::AfterMean => RoundingPolicy::AfterMean,
        }
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/popular_times.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("popular_times.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();
    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let lots = match &cli.input {
        Some(path) => load_lots(path)
            .with_context(|| format!("failed to load lots from {}", path.display()))?,
        None => {
            info!("No input file given, using reference lots");
            reference_lots()
        }
    };

    let policy = RoundingPolicy::from(cli.rounding);
    info!(lots = lots.len(), ?policy, "Aggregating occupancy");

    let popular_times = aggregate_lots(&lots, policy).context("failed to aggregate lots")?;

    for (name, profile) in popular_times.iter() {
        info!(lot = name, max_occupancy = profile.max_occupancy(), "Lot profile ready");
    }

    print_pretty(&popular_times);
    if cli.print {
        print_json(&popular_times)?;
    }

    write_popular_times(&cli.output, &popular_times)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    Ok(())
}
