//! Impact CLI - Command Line Operations for Outbreak Impact Estimation
//!
//! This is the operational entry point for the impact estimator.
//!
//! # Commands
//!
//! - `impact estimate --input <file>` - Estimate normal and severe impact from a JSON record
//! - `impact demo` - Estimate impact for the built-in demo region
//! - `impact periods` - Show how period types normalise to days
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate handles file and terminal I/O
//! and delegates every calculation to `impact_core`.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod render;

use config::{CliConfig, LogLevel, OutputFormat};
pub use error::{CliError, Result};

/// Outbreak Impact Estimator CLI
#[derive(Parser)]
#[command(name = "impact")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (defaults to ./impact.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate impact from an input record (JSON)
    Estimate {
        /// Path to input file, or `-` for stdin
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output format (json, table, xml)
        #[arg(short, long)]
        format: Option<String>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Estimate impact for the built-in demo region
    Demo {
        /// Output format (json, table, xml)
        #[arg(short, long)]
        format: Option<String>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Show the day count of each period type
    Periods,
}

fn init_tracing(log_level: LogLevel) {
    // Logs go to stderr so rendered output on stdout stays machine-readable.
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level.as_filter_str())),
        )
        .init();
}

fn resolve_format(flag: Option<&str>, config: &CliConfig) -> Result<OutputFormat> {
    match flag {
        Some(format) => OutputFormat::from_str(format).map_err(|_| {
            CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: json, table, xml",
                format
            ))
        }),
        None => Ok(config.output_format),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = CliConfig::load(cli.config.as_deref())?;
    config.apply_env()?;

    let log_level = if cli.verbose {
        LogLevel::Debug
    } else {
        config.log_level
    };
    init_tracing(log_level);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Estimate {
            input,
            format,
            pretty,
        } => commands::estimate::run(
            input.as_deref(),
            resolve_format(format.as_deref(), &config)?,
            pretty || config.pretty,
        ),
        Commands::Demo { format, pretty } => commands::demo::run(
            resolve_format(format.as_deref(), &config)?,
            pretty || config.pretty,
        ),
        Commands::Periods => commands::periods::run(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_estimate_args() {
        let cli = Cli::try_parse_from([
            "impact", "estimate", "--input", "data.json", "--format", "table",
        ])
        .unwrap();

        match cli.command {
            Commands::Estimate { input, format, .. } => {
                assert_eq!(input, Some(PathBuf::from("data.json")));
                assert_eq!(format.as_deref(), Some("table"));
            }
            _ => panic!("expected estimate command"),
        }
    }

    #[test]
    fn test_resolve_format() {
        let config = CliConfig {
            output_format: OutputFormat::Xml,
            ..Default::default()
        };

        assert_eq!(resolve_format(None, &config).unwrap(), OutputFormat::Xml);
        assert_eq!(
            resolve_format(Some("table"), &config).unwrap(),
            OutputFormat::Table
        );
        assert!(matches!(
            resolve_format(Some("csv"), &config),
            Err(CliError::InvalidArgument(_))
        ));
    }
}
