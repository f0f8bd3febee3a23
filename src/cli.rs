//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use crate::fetch::DEFAULT_DATASET_URL;
use clap::Parser;
use std::path::PathBuf;

/// Reignstat - reign statistics for public monarch datasets
///
/// Fetch a monarch dataset and compute the longest single reign, the
/// longest cumulative ruling house, and the most common first name.
///
/// Examples:
///   reignstat
///   reignstat --url https://example.com/kings.json
///   reignstat --local fixtures/monarchs.json
///   reignstat --output reigns.md --format markdown
///   reignstat --reference-year 2022
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Dataset URL to fetch
    ///
    /// Must serve a JSON array of monarch records. Can also be set via
    /// REIGNSTAT_URL env var or .reignstat.toml config.
    #[arg(
        short,
        long,
        value_name = "URL",
        default_value = DEFAULT_DATASET_URL,
        env = "REIGNSTAT_URL"
    )]
    pub url: String,

    /// Local JSON file to analyze instead of fetching
    #[arg(long, value_name = "FILE")]
    pub local: Option<PathBuf>,

    /// Output file path for the report
    ///
    /// If not specified, only the console summary is printed.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (markdown, json)
    #[arg(long, default_value = "markdown", value_name = "FORMAT")]
    pub format: OutputFormat,

    /// Reference year for open-ended reigns
    ///
    /// Defaults to the current UTC calendar year. Pinning it makes runs
    /// over datasets with still-reigning monarchs reproducible.
    #[arg(long, value_name = "YEAR")]
    pub reference_year: Option<i32>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Path to configuration file
    ///
    /// If not specified, looks for .reignstat.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (minimal output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate a default .reignstat.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

/// Output format for the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Markdown format (default)
    #[default]
    Markdown,
    /// JSON format
    Json,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        // Skip validation for --init-config
        if self.init_config {
            return Ok(());
        }

        // Validate dataset URL format (not needed when reading a local file)
        if self.local.is_none()
            && !self.url.starts_with("http://")
            && !self.url.starts_with("https://")
        {
            return Err("Dataset URL must start with 'http://' or 'https://'".to_string());
        }

        // Check for conflicting options
        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        // Validate timeout if provided
        if let Some(timeout) = self.timeout {
            if timeout == 0 {
                return Err("Timeout must be at least 1 second".to_string());
            }
        }

        // Validate local file if provided
        if let Some(ref local_path) = self.local {
            if !local_path.exists() {
                return Err(format!(
                    "Local dataset file does not exist: {}",
                    local_path.display()
                ));
            }
            if !local_path.is_file() {
                return Err(format!(
                    "Local dataset path is not a file: {}",
                    local_path.display()
                ));
            }
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
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
            url: DEFAULT_DATASET_URL.to_string(),
            local: None,
            output: None,
            format: OutputFormat::Markdown,
            reference_year: None,
            timeout: None,
            config: None,
            verbose: false,
            quiet: false,
            init_config: false,
        }
    }

    #[test]
    fn test_validation_default_args() {
        assert!(make_args().validate().is_ok());
    }

    #[test]
    fn test_validation_invalid_url() {
        let mut args = make_args();
        args.url = "ftp://example.com/kings".to_string();
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validation_local_skips_url_check() {
        let mut args = make_args();
        args.url = "not-a-url".to_string();
        args.local = Some(PathBuf::from(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/fixtures/monarchs.json"
        )));
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_validation_missing_local_file() {
        let mut args = make_args();
        args.local = Some(PathBuf::from("/nonexistent/monarchs.json"));
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validation_conflicting_options() {
        let mut args = make_args();
        args.verbose = true;
        args.quiet = true;
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validation_zero_timeout() {
        let mut args = make_args();
        args.timeout = Some(0);
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_log_level() {
        let mut args = make_args();
        assert_eq!(args.log_level(), tracing::Level::INFO);

        args.verbose = true;
        assert_eq!(args.log_level(), tracing::Level::DEBUG);

        args.verbose = false;
        args.quiet = true;
        assert_eq!(args.log_level(), tracing::Level::ERROR);
    }
}
