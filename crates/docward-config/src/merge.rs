//! Layered TOML merging with per-field source tracking.

use std::collections::BTreeMap;
use std::fmt;

/// Where a configuration value came from, lowest precedence first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConfigLayer {
    /// Embedded `defaults.toml`.
    Defaults,
    /// `~/.docward/config.toml`.
    User,
    /// File passed explicitly (`--config`).
    Explicit,
    /// `DOCWARD_*` environment variable.
    Env,
}

impl fmt::Display for ConfigLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Defaults => "defaults",
            Self::User => "user",
            Self::Explicit => "explicit",
            Self::Env => "env",
        })
    }
}

/// Dotted field path (e.g. `"logging.level"`) to the layer that set it.
pub type FieldSources = BTreeMap<String, ConfigLayer>;

/// Deep-merge `overlay` into `base`, recording which layer set each leaf.
///
/// Tables merge key by key; any other value (arrays included) replaces
/// the base value wholesale.
pub fn deep_merge_tracking(
    base: &mut toml::Value,
    overlay: &toml::Value,
    prefix: &str,
    layer: ConfigLayer,
    sources: &mut FieldSources,
) {
    match (base, overlay) {
        (toml::Value::Table(base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let path = join(prefix, key);
                match base_table.get_mut(key) {
                    Some(base_val) if overlay_val.is_table() && base_val.is_table() => {
                        deep_merge_tracking(base_val, overlay_val, &path, layer, sources);
                    },
                    Some(base_val) => {
                        *base_val = overlay_val.clone();
                        forget_below(&path, sources);
                        record_leaves(overlay_val, &path, layer, sources);
                    },
                    None => {
                        base_table.insert(key.clone(), overlay_val.clone());
                        record_leaves(overlay_val, &path, layer, sources);
                    },
                }
            }
        },
        (base, overlay) => {
            *base = overlay.clone();
            forget_below(prefix, sources);
            record_leaves(overlay, prefix, layer, sources);
        },
    }
}

/// Record every leaf under `value` as set by `layer`.
///
/// Arrays are leaves: `[[users]]` is attributed as a whole.
pub fn record_leaves(
    value: &toml::Value,
    prefix: &str,
    layer: ConfigLayer,
    sources: &mut FieldSources,
) {
    if let toml::Value::Table(table) = value {
        for (key, child) in table {
            record_leaves(child, &join(prefix, key), layer, sources);
        }
    } else if !prefix.is_empty() {
        sources.insert(prefix.to_owned(), layer);
    }
}

/// Set the value at dotted `path`, creating intermediate tables.
pub fn set_path(root: &mut toml::Value, path: &str, value: toml::Value) {
    let mut current = root;
    let mut parts = path.split('.').peekable();
    while let Some(part) = parts.next() {
        let Some(table) = current.as_table_mut() else {
            return;
        };
        if parts.peek().is_none() {
            table.insert(part.to_owned(), value);
            return;
        }
        current = table
            .entry(part.to_owned())
            .or_insert(toml::Value::Table(toml::map::Map::new()));
    }
}

fn forget_below(prefix: &str, sources: &mut FieldSources) {
    let nested = format!("{prefix}.");
    sources.retain(|path, _| path != prefix && !path.starts_with(&nested));
}

fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_owned()
    } else {
        format!("{prefix}.{key}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> toml::Value {
        toml::from_str(s).unwrap()
    }

    #[test]
    fn test_overlay_wins_and_is_recorded() {
        let mut base = parse("[logging]\nlevel = \"info\"\nformat = \"pretty\"\n");
        let mut sources = FieldSources::new();
        record_leaves(&base.clone(), "", ConfigLayer::Defaults, &mut sources);

        deep_merge_tracking(
            &mut base,
            &parse("[logging]\nlevel = \"debug\"\n"),
            "",
            ConfigLayer::User,
            &mut sources,
        );

        assert_eq!(base["logging"]["level"].as_str(), Some("debug"));
        assert_eq!(base["logging"]["format"].as_str(), Some("pretty"));
        assert_eq!(sources["logging.level"], ConfigLayer::User);
        assert_eq!(sources["logging.format"], ConfigLayer::Defaults);
    }

    #[test]
    fn test_arrays_replace() {
        let mut base = parse("[chain]\nlayers = [\"audit\", \"access\", \"cache\"]\n");
        let mut sources = FieldSources::new();

        deep_merge_tracking(
            &mut base,
            &parse("[chain]\nlayers = [\"access\"]\n"),
            "",
            ConfigLayer::Explicit,
            &mut sources,
        );

        assert_eq!(base["chain"]["layers"].as_array().unwrap().len(), 1);
        assert_eq!(sources["chain.layers"], ConfigLayer::Explicit);
    }

    #[test]
    fn test_new_keys_are_added() {
        let mut base = parse("[cache]\n");
        let mut sources = FieldSources::new();

        deep_merge_tracking(
            &mut base,
            &parse("[cache]\nmax_entries = 8\n"),
            "",
            ConfigLayer::User,
            &mut sources,
        );

        assert_eq!(base["cache"]["max_entries"].as_integer(), Some(8));
        assert_eq!(sources["cache.max_entries"], ConfigLayer::User);
    }

    #[test]
    fn test_set_path_creates_tables() {
        let mut root = parse("");
        set_path(&mut root, "repository.get_latency_ms", toml::Value::Integer(0));
        assert_eq!(root["repository"]["get_latency_ms"].as_integer(), Some(0));
    }
}
