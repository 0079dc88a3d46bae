//! CLI handlers for the `docward config` subcommand.

use anyhow::{Result, anyhow};
use docward_config::{ConfigResult, ResolvedConfig, ShowFormat};

use crate::formatter::OutputFormat;
use crate::theme::Theme;

/// Show the resolved configuration with source annotations.
pub(crate) fn show_config(resolved: &ResolvedConfig, format: OutputFormat) -> Result<()> {
    let show_format = match format {
        OutputFormat::Json => ShowFormat::Json,
        OutputFormat::Pretty => ShowFormat::Toml,
    };

    let output = resolved
        .show(show_format)
        .map_err(|e| anyhow!("failed to format config: {e}"))?;

    println!("{output}");
    Ok(())
}

/// Report whether the configuration loads and validates.
#[allow(clippy::unnecessary_wraps)]
pub(crate) fn validate_config(loaded: &ConfigResult<ResolvedConfig>) -> Result<()> {
    match loaded {
        Ok(resolved) => {
            println!("{}", Theme::success("Configuration is valid."));
            if !resolved.loaded_files.is_empty() {
                println!("\nLoaded files:");
                for path in &resolved.loaded_files {
                    println!("  - {path}");
                }
            }
            println!("\nChain: {}", resolved.config.chain.layers.join(" -> "));
            Ok(())
        },
        Err(e) => {
            eprintln!("{}", Theme::error(&format!("Configuration error: {e}")));
            std::process::exit(1);
        },
    }
}
