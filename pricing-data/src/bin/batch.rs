use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use pricing_core::calculations::SurveyPricingEngine;
use pricing_data::{BatchReport, StrategyWriter, SurveyLoader};
use tracing_subscriber::EnvFilter;

/// Price every survey in a CSV file and write the three strategies per row.
///
/// Required input columns: product_name, category, unit_cost, business_type,
/// brand_positioning. Optional: target_audience, monthly_sales_volume,
/// desired_margin (defaults to 25), competitors.
#[derive(Parser, Debug)]
#[command(name = "pricing-batch")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the CSV file containing survey answers
    #[arg(short, long)]
    input: PathBuf,

    /// Where to write the strategies CSV (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let records = SurveyLoader::parse_file(&args.input)
        .with_context(|| format!("Failed to load surveys: {}", args.input.display()))?;

    eprintln!("Parsed {} surveys from {}", records.len(), args.input.display());

    let report = BatchReport::price(&SurveyPricingEngine::default(), &records);

    for (row, reason) in &report.skipped {
        eprintln!("Skipped row {row}: {reason}");
    }

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create: {}", path.display()))?;
            StrategyWriter::write(file, &report.rows)
                .with_context(|| format!("Failed to write strategies: {}", path.display()))?;
            eprintln!(
                "Wrote {} strategy rows to {}",
                report.rows.len(),
                path.display()
            );
        }
        None => {
            StrategyWriter::write(io::stdout().lock(), &report.rows)
                .context("Failed to write strategies to stdout")?;
        }
    }

    Ok(())
}
