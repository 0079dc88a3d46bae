//! Post-merge configuration validation.
//!
//! Validates that deserialized [`Config`](crate::Config) values are within
//! acceptable ranges and that cross-field invariants hold.

use std::collections::HashSet;

use crate::error::{ConfigError, ConfigResult};
use crate::types::Config;

/// Layer names the chain knows how to build.
pub const KNOWN_LAYERS: &[&str] = &["audit", "access", "cache"];

/// Accepted `logging.format` values.
pub const KNOWN_LOG_FORMATS: &[&str] = &["pretty", "compact", "json", "full"];

/// Accepted `logging.level` values.
pub const KNOWN_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a fully-merged and deserialized configuration.
///
/// # Errors
///
/// Returns the first validation error found.
pub fn validate(config: &Config) -> ConfigResult<()> {
    validate_chain(config)?;
    validate_logging(config)?;
    validate_documents(config)?;
    validate_users(config)?;
    Ok(())
}

fn invalid(field: impl Into<String>, message: impl Into<String>) -> ConfigError {
    ConfigError::ValidationError {
        field: field.into(),
        message: message.into(),
    }
}

fn validate_chain(config: &Config) -> ConfigResult<()> {
    // Names match the chain builder: surrounding space and case are ignored.
    let layers: Vec<String> = config
        .chain
        .layers
        .iter()
        .map(|name| name.trim().to_ascii_lowercase())
        .collect();
    let mut seen = HashSet::new();

    for (name, normalized) in config.chain.layers.iter().zip(&layers) {
        if !KNOWN_LAYERS.contains(&normalized.as_str()) {
            return Err(invalid(
                "chain.layers",
                format!(
                    "unknown layer '{name}'; expected one of: {}",
                    KNOWN_LAYERS.join(", ")
                ),
            ));
        }
        if !seen.insert(normalized.as_str()) {
            return Err(invalid(
                "chain.layers",
                format!("layer '{name}' listed more than once"),
            ));
        }
    }

    let position = |wanted: &str| layers.iter().position(|l| l == wanted);
    let cache_outside_access = matches!(
        (position("cache"), position("access")),
        (Some(cache), Some(access)) if cache < access
    );
    if cache_outside_access && !config.chain.allow_unsafe_order {
        return Err(invalid(
            "chain.layers",
            "'cache' is outside 'access': cached documents would skip the clearance \
             check (set chain.allow_unsafe_order = true to permit)",
        ));
    }

    Ok(())
}

fn validate_logging(config: &Config) -> ConfigResult<()> {
    let logging = &config.logging;

    if !KNOWN_LOG_LEVELS.contains(&logging.level.to_ascii_lowercase().as_str()) {
        return Err(invalid(
            "logging.level",
            format!(
                "unknown level '{}'; expected one of: {}",
                logging.level,
                KNOWN_LOG_LEVELS.join(", ")
            ),
        ));
    }

    if !KNOWN_LOG_FORMATS.contains(&logging.format.to_ascii_lowercase().as_str()) {
        return Err(invalid(
            "logging.format",
            format!(
                "unknown format '{}'; expected one of: {}",
                logging.format,
                KNOWN_LOG_FORMATS.join(", ")
            ),
        ));
    }

    Ok(())
}

fn validate_documents(config: &Config) -> ConfigResult<()> {
    let mut seen = HashSet::new();
    for (index, doc) in config.documents.iter().enumerate() {
        let id = doc.id.trim();
        if id.is_empty() {
            return Err(invalid(
                format!("documents[{index}].id"),
                "document id must not be empty",
            ));
        }
        if !seen.insert(id) {
            return Err(invalid(
                format!("documents[{index}].id"),
                format!("duplicate document id '{id}'"),
            ));
        }
    }
    Ok(())
}

fn validate_users(config: &Config) -> ConfigResult<()> {
    let mut seen = HashSet::new();
    for (index, user) in config.users.iter().enumerate() {
        let name = user.name.trim();
        if name.is_empty() {
            return Err(invalid(
                format!("users[{index}].name"),
                "username must not be empty",
            ));
        }
        if !seen.insert(name) {
            return Err(invalid(
                format!("users[{index}].name"),
                format!("duplicate user '{name}'"),
            ));
        }
    }
    Ok(())
}
