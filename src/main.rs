//! count-networks - summarize neural network index files
//!
//! Reads the JSON index files in a directory, groups the networks by their
//! training and evaluation years, and prints a count per group.
//!
//! Exit codes:
//!   0 - Success
//!   1 - Runtime error (missing directory, unreadable or malformed index file, etc.)
//!   2 - Invalid command-line arguments

mod analysis;
mod cli;
mod config;
mod index;
mod models;
mod report;
mod scanner;

use analysis::Aggregator;
use anyhow::{Context, Result};
use chrono::Utc;
use cli::{Args, OutputFormat};
use config::{Config, DEFAULT_CONFIG_FILE};
use models::{Report, ReportMetadata};
use scanner::{IndexScanner, ScanConfig};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, error, info};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        return handle_init_config();
    }

    let mut config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };
    config.merge_with_args(&args);

    init_logging(&args, &config)?;

    debug!("Arguments: {:?}", args);
    debug!("Configuration: {:?}", config);

    if let Err(e) = run(&args, &config) {
        error!("Run failed: {:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Handle --init-config: generate a default .count-networks.toml.
fn handle_init_config() -> Result<()> {
    let path = Path::new(DEFAULT_CONFIG_FILE);

    if path.exists() {
        eprintln!(
            "{} already exists. Remove it first or edit it manually.",
            DEFAULT_CONFIG_FILE
        );
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content)
        .with_context(|| format!("Failed to write {}", DEFAULT_CONFIG_FILE))?;

    println!("Created {} with default settings.", DEFAULT_CONFIG_FILE);
    Ok(())
}

/// Initialize logging based on verbosity settings.
///
/// Log lines go to stderr so the report on stdout stays clean.
fn init_logging(args: &Args, config: &Config) -> Result<()> {
    let level = args.log_level(config.general.verbose);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")
}

/// Load configuration from file or use defaults.
fn load_config(args: &Args) -> Result<Config> {
    if let Some(ref config_path) = args.config {
        return Config::load(config_path);
    }

    Ok(Config::load_default()?.unwrap_or_default())
}

/// Read, group and report every index file in the directory.
fn run(args: &Args, config: &Config) -> Result<()> {
    let index_directory: PathBuf = args
        .index_directory
        .clone()
        .context("An index directory is required")?;

    info!("Reading index files from: {}", index_directory.display());

    let aggregator = count_index_files(&index_directory, ScanConfig::from(&config.scanner))?;
    let aggregation = aggregator.finish();

    let report = Report {
        metadata: ReportMetadata {
            index_directory: index_directory.display().to_string(),
            generated_at: Utc::now(),
            files_processed: aggregation.files_processed,
            duration_ms: duration_ms(aggregation.elapsed),
        },
        groups: aggregation.sorted_groups(),
    };

    debug!(
        "{} groups covering {} files",
        report.groups.len(),
        report.total_count()
    );

    let output = match config.report.format {
        OutputFormat::Text => report::generate_text_report(&report),
        OutputFormat::Json => report::generate_json_report(&report)?,
    };

    match args.output {
        Some(ref path) => {
            std::fs::write(path, &output)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            println!("{}", report::generate_status_line(&report));
            println!("Report saved to: {}", path.display());
        }
        None => {
            print!("{}", output);
            if !output.ends_with('\n') {
                println!();
            }
        }
    }

    Ok(())
}

/// Whole milliseconds, saturating at `u64::MAX`.
fn duration_ms(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

/// Scan the directory and feed every index file into a new aggregator.
///
/// The first unreadable or malformed file aborts the whole run.
fn count_index_files(index_directory: &Path, scan_config: ScanConfig) -> Result<Aggregator> {
    let mut aggregator = Aggregator::new();
    let index_scanner = IndexScanner::new(index_directory, scan_config);

    for path in index_scanner.scan()? {
        let path = path?;
        let record = index::read_index_file(&path)?;
        aggregator.add(record);
    }

    info!(
        "Read {} index files from {}",
        aggregator.files_processed(),
        index_scanner.root().display()
    );

    Ok(aggregator)
}
