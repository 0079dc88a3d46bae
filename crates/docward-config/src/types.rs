//! Configuration types for docward.
//!
//! All types in this module are self-contained with no dependencies on other
//! internal docward crates. Domain types are mirrored here and converted at
//! the boundary. Every struct implements [`Default`] with the same values as
//! the embedded `defaults.toml`, so a bare `[section]` header produces a
//! working configuration.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Top-level Config
// ---------------------------------------------------------------------------

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Document store behaviour.
    pub repository: RepositorySection,
    /// Snapshot cache bound.
    pub cache: CacheSection,
    /// Layer order.
    pub chain: ChainSection,
    /// Logging level, format, and per-crate directives.
    pub logging: LoggingSection,
    /// Extra documents seeded into the store.
    pub documents: Vec<DocumentEntry>,
    /// Named users available to the CLI.
    pub users: Vec<UserEntry>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repository: RepositorySection::default(),
            cache: CacheSection::default(),
            chain: ChainSection::default(),
            logging: LoggingSection::default(),
            documents: Vec::new(),
            users: vec![UserEntry::new("manager", 5), UserEntry::new("employee", 2)],
        }
    }
}

impl Config {
    /// Find a configured user by name.
    #[must_use]
    pub fn user(&self, name: &str) -> Option<&UserEntry> {
        self.users.iter().find(|u| u.name == name)
    }
}

// ---------------------------------------------------------------------------
// RepositorySection
// ---------------------------------------------------------------------------

/// Simulated store latency and seeding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositorySection {
    /// Delay paid once when the store is opened.
    pub connect_latency_ms: u64,
    /// Delay paid on every read.
    pub get_latency_ms: u64,
    /// Delay paid on every write.
    pub update_latency_ms: u64,
    /// Open the store on first use rather than at startup.
    pub lazy: bool,
    /// Start from the reference catalogue (DOC-001..DOC-003).
    pub seed_defaults: bool,
}

impl Default for RepositorySection {
    fn default() -> Self {
        Self {
            connect_latency_ms: 1000,
            get_latency_ms: 500,
            update_latency_ms: 300,
            lazy: true,
            seed_defaults: true,
        }
    }
}

// ---------------------------------------------------------------------------
// CacheSection
// ---------------------------------------------------------------------------

/// Cache bound.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheSection {
    /// Maximum snapshots held; unbounded when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_entries: Option<usize>,
}

// ---------------------------------------------------------------------------
// ChainSection
// ---------------------------------------------------------------------------

/// Layer composition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainSection {
    /// Layer names, outermost first (`"audit"`, `"access"`, `"cache"`).
    pub layers: Vec<String>,
    /// Permit a cache outside access control. Only useful for
    /// demonstrating why that order leaks documents.
    pub allow_unsafe_order: bool,
}

impl Default for ChainSection {
    fn default() -> Self {
        Self {
            layers: vec!["audit".to_owned(), "access".to_owned(), "cache".to_owned()],
            allow_unsafe_order: false,
        }
    }
}

// ---------------------------------------------------------------------------
// LoggingSection
// ---------------------------------------------------------------------------

/// Logging and tracing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Global log level filter (`"trace"`, `"debug"`, `"info"`, `"warn"`,
    /// `"error"`).
    pub level: String,
    /// Output format: `"pretty"`, `"compact"`, `"json"`, or `"full"`.
    pub format: String,
    /// Per-crate tracing directives (e.g. `["docward_cache=debug"]`).
    pub directives: Vec<String>,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: "pretty".to_owned(),
            directives: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Documents and users
// ---------------------------------------------------------------------------

/// A document to seed into the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentEntry {
    /// Document identifier.
    pub id: String,
    /// Title.
    pub title: String,
    /// Body text.
    #[serde(default)]
    pub content: String,
    /// Minimum clearance required to read it.
    pub security_level: u32,
}

/// A named user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserEntry {
    /// Username.
    pub name: String,
    /// Clearance level.
    pub clearance: u32,
}

impl UserEntry {
    /// Create a user entry.
    #[must_use]
    pub fn new(name: impl Into<String>, clearance: u32) -> Self {
        Self {
            name: name.into(),
            clearance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.chain.layers, vec!["audit", "access", "cache"]);
        assert_eq!(config.repository.get_latency_ms, 500);
        assert_eq!(config.cache.max_entries, None);
    }

    #[test]
    fn test_bare_section_header() {
        let config: Config = toml::from_str("[logging]\n").unwrap();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_documents_parse() {
        let config: Config = toml::from_str(
            r#"
            [[documents]]
            id = "DOC-100"
            title = "Board Minutes"
            security_level = 4
        "#,
        )
        .unwrap();
        assert_eq!(config.documents.len(), 1);
        assert_eq!(config.documents[0].content, "");
        assert_eq!(config.documents[0].security_level, 4);
    }

    #[test]
    fn test_user_lookup() {
        let config = Config::default();
        assert_eq!(config.user("manager").map(|u| u.clearance), Some(5));
        assert!(config.user("intern").is_none());
    }
}
