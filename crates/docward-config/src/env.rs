//! Environment variable fallbacks.
//!
//! Environment variables are **fallback**, not override: they only apply
//! to fields that no config file set.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{ConfigError, ConfigResult};
use crate::merge::{ConfigLayer, FieldSources, set_path};

/// How an environment variable's text becomes a TOML value.
#[derive(Clone, Copy)]
enum EnvKind {
    String,
    Integer,
}

struct EnvMapping {
    var_name: &'static str,
    field_paths: &'static [&'static str],
    kind: EnvKind,
}

const ENV_MAPPINGS: &[EnvMapping] = &[
    EnvMapping {
        var_name: "DOCWARD_LOG_LEVEL",
        field_paths: &["logging.level"],
        kind: EnvKind::String,
    },
    EnvMapping {
        var_name: "DOCWARD_LOG_FORMAT",
        field_paths: &["logging.format"],
        kind: EnvKind::String,
    },
    EnvMapping {
        var_name: "DOCWARD_LATENCY_MS",
        field_paths: &[
            "repository.connect_latency_ms",
            "repository.get_latency_ms",
            "repository.update_latency_ms",
        ],
        kind: EnvKind::Integer,
    },
];

/// Snapshot the `DOCWARD_*` variables of the current process.
#[must_use]
pub fn collect_env_vars() -> HashMap<String, String> {
    std::env::vars()
        .filter(|(name, _)| name.starts_with("DOCWARD_"))
        .collect()
}

/// Apply environment fallbacks to fields still at their default.
///
/// Returns the number of fields set.
///
/// # Errors
///
/// Returns [`ConfigError::EnvError`] if a numeric variable does not parse.
pub fn apply_env_fallbacks<S: std::hash::BuildHasher>(
    merged: &mut toml::Value,
    sources: &mut FieldSources,
    env_vars: &HashMap<String, String, S>,
) -> ConfigResult<usize> {
    let mut count: usize = 0;

    for mapping in ENV_MAPPINGS {
        let Some(raw) = env_vars.get(mapping.var_name) else {
            continue;
        };
        let value = parse(mapping, raw)?;

        for path in mapping.field_paths {
            let set_by_file = sources
                .get(*path)
                .is_some_and(|layer| *layer > ConfigLayer::Defaults);
            if set_by_file {
                debug!(var = mapping.var_name, field = *path, "config file wins over env var");
                continue;
            }
            set_path(merged, path, value.clone());
            sources.insert((*path).to_owned(), ConfigLayer::Env);
            count = count.saturating_add(1);
        }
    }

    Ok(count)
}

fn parse(mapping: &EnvMapping, raw: &str) -> ConfigResult<toml::Value> {
    match mapping.kind {
        EnvKind::String => Ok(toml::Value::String(raw.trim().to_owned())),
        EnvKind::Integer => raw
            .trim()
            .parse::<u32>()
            .map(|n| toml::Value::Integer(i64::from(n)))
            .map_err(|e| ConfigError::EnvError {
                var_name: mapping.var_name.to_owned(),
                message: format!("expected a non-negative integer: {e}"),
            }),
    }
}
