//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// count-networks - summarize network index files
///
/// Reads every index file in a directory, groups the networks by the years
/// they were trained on and evaluated against, and prints how many networks
/// fall into each group.
///
/// Examples:
///   count-networks ./networks
///   count-networks ./networks --format json --output summary.json
///   count-networks --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory containing the network index files
    #[arg(value_name = "INDEX_DIRECTORY", required_unless_present = "init_config")]
    pub index_directory: Option<PathBuf>,

    /// Enable verbose logging output (logs every parsed index file)
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (errors only)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output format (text, json)
    #[arg(short, long, value_name = "FORMAT", env = "COUNT_NETWORKS_FORMAT")]
    pub format: Option<OutputFormat>,

    /// Write the report to a file instead of standard output
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Path to configuration file
    ///
    /// If not specified, looks for .count-networks.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Extension of index files (default: json)
    #[arg(long, value_name = "EXT")]
    pub extension: Option<String>,

    /// Generate a default .count-networks.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

/// Output format for the report.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned text table (default)
    #[default]
    Text,
    /// JSON document
    Json,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        if self.init_config {
            return Ok(());
        }

        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        if let Some(ref extension) = self.extension {
            let extension = extension.trim_start_matches('.');
            if extension.is_empty() {
                return Err("Extension must not be empty".to_string());
            }
            if extension.contains(['/', '\\']) {
                return Err(format!("Invalid extension: {}", extension));
            }
        }

        Ok(())
    }

    /// Returns the log level, honouring a verbose setting from the config file.
    pub fn log_level(&self, config_verbose: bool) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose || config_verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_args() -> Args {
        Args {
            index_directory: Some(PathBuf::from("/data/networks")),
            verbose: false,
            quiet: false,
            format: None,
            output: None,
            config: None,
            extension: None,
            init_config: false,
        }
    }

    #[test]
    fn test_parse_positional_directory() {
        let args = Args::try_parse_from(["count-networks", "/data/networks"]).unwrap();
        assert_eq!(args.index_directory, Some(PathBuf::from("/data/networks")));
        assert!(!args.init_config);
    }

    #[test]
    fn test_missing_directory_is_rejected() {
        assert!(Args::try_parse_from(["count-networks"]).is_err());
    }

    #[test]
    fn test_init_config_without_directory() {
        let args = Args::try_parse_from(["count-networks", "--init-config"]).unwrap();
        assert!(args.init_config);
        assert!(args.index_directory.is_none());
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Args::try_parse_from(["count-networks", "-v", "-q", "/data"]).is_err());
    }

    #[test]
    fn test_validation_conflicting_options() {
        let mut args = make_args();
        args.verbose = true;
        args.quiet = true;
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validation_extension() {
        let mut args = make_args();
        args.extension = Some(".".to_string());
        assert!(args.validate().is_err());

        args.extension = Some("a/b".to_string());
        assert!(args.validate().is_err());

        args.extension = Some(".idx".to_string());
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_log_level() {
        let mut args = make_args();
        assert_eq!(args.log_level(false), tracing::Level::INFO);
        assert_eq!(args.log_level(true), tracing::Level::DEBUG);

        args.verbose = true;
        assert_eq!(args.log_level(false), tracing::Level::DEBUG);

        args.verbose = false;
        args.quiet = true;
        assert_eq!(args.log_level(true), tracing::Level::ERROR);
    }
}
