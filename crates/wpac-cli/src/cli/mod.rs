//! CLI for the wpac analyzer client.

mod commands;
pub mod ui;

use anyhow::Result;
use clap::{Parser, Subcommand};
use ui::OutputFormat;

/// Top-level CLI for the wpac analyzer client.
#[derive(Debug, Parser)]
#[command(name = "wpac")]
#[command(about = "wpac: client for the web page analyzer service", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Submit a URL for analysis and render the result.
    Analyze {
        /// URL to analyze (scheme optional; https:// is assumed).
        url: String,

        /// Analyzer base URL, overriding the configured endpoint.
        #[arg(long, value_name = "URL")]
        endpoint: Option<String>,

        /// Output format for the rendered result.
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Validate a URL locally without contacting the service.
    Check {
        /// URL to validate.
        url: String,
    },
}

impl CliCommand {
    /// Parses argv and runs the selected command. `Ok(false)` means the
    /// submission ended in the error state (nonzero exit, already reported).
    pub async fn run_from_args() -> Result<bool> {
        let cli = Cli::parse();
        match cli.command {
            CliCommand::Analyze {
                url,
                endpoint,
                format,
            } => commands::run_analyze(&url, endpoint.as_deref(), format).await,
            CliCommand::Check { url } => Ok(commands::run_check(&url)),
        }
    }
}
