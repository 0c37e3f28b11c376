//! newslens - correlate financial news sentiment with stock movement.
//!
//! Loads a headline CSV and an OHLCV CSV, runs the text and market
//! analyses, prints a summary and optionally exports the full report
//! as JSON.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pipeline::{AnalysisConfig, AnalysisReport};

#[derive(Parser, Debug)]
#[command(name = "newslens", about = "News sentiment vs. stock movement analysis")]
struct Args {
    /// Path to the news headline CSV.
    #[arg(long, env = "NEWSLENS_NEWS")]
    news: PathBuf,

    /// Path to the OHLCV stock CSV.
    #[arg(long, env = "NEWSLENS_STOCK")]
    stock: PathBuf,

    /// Number of top keywords and publishers to report.
    #[arg(long, default_value_t = 20)]
    top_n: usize,

    /// Simple moving average window.
    #[arg(long, default_value_t = 7, value_parser = clap::value_parser!(u64).range(1..))]
    sma_window: u64,

    /// RSI lookback window.
    #[arg(long, default_value_t = 14, value_parser = clap::value_parser!(u64).range(1..))]
    rsi_window: u64,

    /// Rolling volatility window.
    #[arg(long, default_value_t = 14, value_parser = clap::value_parser!(u64).range(1..))]
    vol_window: u64,

    /// Write the full report as JSON to this path.
    #[arg(long)]
    export: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error("ingestion failed: {0}")]
    Ingest(#[from] ingest::IngestError),
    #[error("export failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("export serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let config = AnalysisConfig::new()
        .top_n(args.top_n)
        .sma_window(args.sma_window as usize)
        .rsi_window(args.rsi_window as usize)
        .volatility_window(args.vol_window as usize);

    let records = ingest::load_news(&args.news)?;
    let bars = ingest::load_stock(&args.stock)?;
    info!(headlines = records.len(), bars = bars.len(), "data loaded");

    let report = AnalysisReport::build(&records, &bars, &config);
    print_summary(&report, &config);

    if let Some(path) = &args.export {
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(path, json)?;
        info!(path = %path.display(), "report exported");
    }

    Ok(())
}

fn print_summary(report: &AnalysisReport, config: &AnalysisConfig) {
    let stats = &report.eda.headline_stats;
    println!("=== Headlines ===");
    println!(
        "{} headlines, length {}..{} chars (mean {:.1})",
        stats.count, stats.min_len, stats.max_len, stats.mean_len
    );

    println!("\n=== Top publishers ===");
    for p in &report.eda.top_publishers {
        println!("{:>6}  {}", p.count, p.publisher);
    }

    println!("\n=== Top {} keywords ===", config.top_n);
    for k in &report.eda.top_keywords {
        println!("{:>6}  {}", k.count, k.keyword);
    }

    println!("\n=== Market ===");
    println!(
        "{} daily returns, {} volatility points, {} SMA points, {} RSI points",
        report.market.daily_returns.len(),
        report.market.volatility.len(),
        report.market.sma.len(),
        report.market.rsi.len()
    );

    println!("\n=== Correlation ===");
    match report.correlation {
        Some(r) => println!("sentiment vs. daily returns: {r:.4}"),
        None => println!("sentiment vs. daily returns: not computable (insufficient overlap)"),
    }
}
