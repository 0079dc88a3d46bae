//! Docward CLI - confidential document access from the command line.
//!
//! Every invocation loads the layered configuration, builds a fresh chain
//! (`audit -> access -> cache -> core` unless configured otherwise), runs
//! the requested operation, and prints the lookup result and audit log.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use docward_config::Config;
use docward_telemetry::{LogConfig, LogFormat, setup_logging};

mod commands;
mod config_bridge;
mod formatter;
mod theme;

use commands::{config, demo, document};
use formatter::OutputFormat;

/// Docward - layered access to confidential documents
#[derive(Parser)]
#[command(name = "docward")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to an explicit configuration file
    #[arg(short, long, global = true, env = "DOCWARD_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "pretty")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the walkthrough scenario and print the audit log
    Demo,

    /// View a document as a configured user
    View {
        /// Document id (e.g. DOC-002)
        id: String,

        /// Acting user
        #[arg(short, long)]
        user: String,
    },

    /// Replace a document's content as a configured user
    Update {
        /// Document id (e.g. DOC-002)
        id: String,

        /// New content
        content: String,

        /// Acting user
        #[arg(short, long)]
        user: String,
    },

    /// View and check configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the resolved configuration with the source of each value
    Show,
    /// Check that the configuration loads and validates
    Validate,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let loaded = Config::load(cli.config.as_deref());

    // Set up logging from config, with --verbose override.
    let mut log_config = match &loaded {
        Ok(resolved) => config_bridge::to_log_config(&resolved.config),
        Err(_) => LogConfig::new("info").with_format(LogFormat::Compact),
    };
    if cli.verbose {
        "debug".clone_into(&mut log_config.level);
    }
    if let Err(e) = setup_logging(&log_config) {
        eprintln!("Failed to initialize logging: {e}");
    }

    match cli.command {
        Commands::Config {
            command: ConfigCommands::Validate,
        } => config::validate_config(&loaded),
        Commands::Config {
            command: ConfigCommands::Show,
        } => config::show_config(&loaded?, cli.format),
        Commands::Demo => demo::run_demo(&loaded?.config, cli.format),
        Commands::View { id, user } => {
            document::view_document(&loaded?.config, &id, &user, cli.format)
        },
        Commands::Update { id, content, user } => {
            document::update_document(&loaded?.config, &id, &content, &user, cli.format)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_update_with_global_flags() {
        let cli = Cli::try_parse_from([
            "docward",
            "update",
            "DOC-003",
            "new text",
            "--user",
            "employee",
            "--format",
            "json",
            "-v",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(matches!(
            cli.command,
            Commands::Update { ref id, ref content, ref user }
                if id == "DOC-003" && content == "new text" && user == "employee"
        ));
    }

    #[test]
    fn test_view_requires_user() {
        assert!(Cli::try_parse_from(["docward", "view", "DOC-001"]).is_err());
    }
}
