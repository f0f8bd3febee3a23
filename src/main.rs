//! Reignstat - Reign Statistics CLI
//!
//! A CLI tool that fetches a JSON dataset of historical monarchs and
//! computes the longest single reign, the longest cumulative ruling
//! house, and the most common first name.
//!
//! Exit codes:
//!   0 - Success
//!   1 - Runtime error (fetch, parse, empty dataset, I/O)

mod analysis;
mod cli;
mod config;
mod error;
mod fetch;
mod models;
mod report;

use anyhow::{Context, Result};
use chrono::Utc;
use cli::{Args, OutputFormat};
use config::Config;
use models::{Monarch, ReignStats, ReportMetadata, StatsReport};
use std::time::Instant;
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        return handle_init_config();
    }

    // Initialize logging
    init_logging(&args);

    info!("Reignstat v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    // Run the statistics workflow
    match run_stats(args).await {
        Ok(()) => Ok(()),
        Err(e) => {
            error!("Run failed: {}", e);
            eprintln!("\n❌ Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle --init-config: generate a default .reignstat.toml.
fn handle_init_config() -> Result<()> {
    let path = std::path::Path::new(".reignstat.toml");

    if path.exists() {
        eprintln!("⚠️  .reignstat.toml already exists. Remove it first or edit it manually.");
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content).context("Failed to write .reignstat.toml")?;

    println!("✅ Created .reignstat.toml with default settings.");
    println!("   Edit it to customize the dataset URL, timeout, and report tables.");
    Ok(())
}

/// Initialize logging based on verbosity settings.
fn init_logging(args: &Args) {
    let level = args.log_level();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

/// Run the complete statistics workflow: fetch → aggregate → present.
async fn run_stats(args: Args) -> Result<()> {
    let start_time = Instant::now();

    // Load configuration
    let mut config = load_config(&args)?;
    config.merge_with_args(&args);

    // Step 1: Get the dataset
    let (monarchs, source) = get_dataset(&args, &config).await?;
    println!("📥 Loaded {} monarch records from {}", monarchs.len(), source);

    // Step 2: Resolve reign durations against a fixed reference year
    let reference_year = args.reference_year.unwrap_or_else(models::current_utc_year);
    debug!("Reference year: {}", reference_year);

    let records = models::resolve_all(&monarchs, reference_year)?;

    // Step 3: Aggregate
    let stats = analysis::compute_stats(&records)?;
    print_summary(&stats);

    // Step 4: Optionally write the report
    if let Some(ref output) = args.output {
        let metadata = ReportMetadata {
            dataset_source: source,
            generated_at: Utc::now(),
            reference_year,
            duration_seconds: start_time.elapsed().as_secs_f64(),
        };

        let stats_report = StatsReport {
            metadata,
            stats,
            house_totals: analysis::house_totals(&records),
            first_name_counts: analysis::first_name_counts(&records),
        };

        let options = report::ReportOptions::from(&config.report);
        let content = match args.format {
            OutputFormat::Markdown => report::generate_markdown_report(&stats_report, &options),
            OutputFormat::Json => report::generate_json_report(&stats_report)?,
        };

        std::fs::write(output, &content)
            .with_context(|| format!("Failed to write report to {}", output.display()))?;

        println!("\n✅ Report saved to: {}", output.display());
    }

    Ok(())
}

/// Get the dataset records and a label describing where they came from.
async fn get_dataset(args: &Args, config: &Config) -> Result<(Vec<Monarch>, String)> {
    // Use a local file if specified
    if let Some(ref local) = args.local {
        let monarchs = fetch::load_local(local)?;
        return Ok((monarchs, local.display().to_string()));
    }

    // Fetch over HTTP
    let options = fetch::FetchOptions {
        timeout_seconds: config.dataset.timeout_seconds,
        retries: config.dataset.retries,
        show_progress: !args.quiet,
    };

    let monarchs = fetch::fetch_dataset(&config.dataset.url, &options).await?;
    Ok((monarchs, config.dataset.url.clone()))
}

/// Print the console summary of the computed statistics.
fn print_summary(stats: &ReignStats) {
    println!("\n📊 Reign Statistics:");
    println!("   Total monarchs: {}", stats.total_monarchs);
    println!(
        "   Longest reign: {} ({} years)",
        stats.longest_reign.name, stats.longest_reign.years
    );
    println!(
        "   Longest ruling house: {} ({} years total)",
        stats.longest_house.house, stats.longest_house.years
    );
    println!(
        "   Most common first name: {}",
        stats.most_common_first_name
    );
}

/// Load configuration from file or use defaults.
fn load_config(args: &Args) -> Result<Config> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        info!("Loading config from: {}", config_path.display());
        return Config::load(config_path);
    }

    // Try default location
    match Config::load_default() {
        Ok(Some(config)) => {
            info!("Loaded default config from .reignstat.toml");
            Ok(config)
        }
        Ok(None) => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
        Err(e) => {
            warn!("Failed to load config: {}", e);
            Ok(Config::default())
        }
    }
}
