//! Bridge from `docward_config::Config` to domain types.
//!
//! The config crate knows nothing about documents, users, or layers; all
//! conversion happens here, at startup.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use docward_cache::CacheConfig;
use docward_chain::ReferenceChain;
use docward_config::Config;
use docward_core::{ClearanceLevel, Document, SecurityLevel, User};
use docward_storage::{
    DocumentRepository, LazyRepository, Latency, MemoryDocumentRepository, reference_catalogue,
};
use docward_telemetry::{LogConfig, LogFormat};
use tracing::debug;

/// Convert config to [`LogConfig`].
#[must_use]
pub(crate) fn to_log_config(cfg: &Config) -> LogConfig {
    let format = cfg
        .logging
        .format
        .parse::<LogFormat>()
        .unwrap_or(LogFormat::Compact);

    LogConfig::new(&cfg.logging.level)
        .with_format(format)
        .with_directives(cfg.logging.directives.iter().cloned())
}

/// Convert config to the repository's [`Latency`].
#[must_use]
pub(crate) fn to_latency(cfg: &Config) -> Latency {
    let repo = &cfg.repository;
    Latency {
        connect: Duration::from_millis(repo.connect_latency_ms),
        get: Duration::from_millis(repo.get_latency_ms),
        update: Duration::from_millis(repo.update_latency_ms),
    }
}

/// Convert config to [`CacheConfig`].
#[must_use]
pub(crate) fn to_cache_config(cfg: &Config) -> CacheConfig {
    match cfg.cache.max_entries {
        Some(max) => CacheConfig::new().with_max_entries(max),
        None => CacheConfig::new(),
    }
}

/// Documents the repository starts with.
///
/// Configured documents replace catalogue entries with the same id.
#[must_use]
pub(crate) fn to_documents(cfg: &Config) -> Vec<Document> {
    let mut documents = if cfg.repository.seed_defaults {
        reference_catalogue()
    } else {
        Vec::new()
    };

    for entry in &cfg.documents {
        let doc = Document::new(
            entry.id.trim(),
            entry.title.as_str(),
            entry.content.as_str(),
            SecurityLevel::new(entry.security_level),
        );
        documents.retain(|existing| existing.id() != doc.id());
        documents.push(doc);
    }

    documents
}

/// Build the repository described by `[repository]` and `[[documents]]`.
///
/// An eager store pays its connect latency here; a lazy one on first use.
#[must_use]
pub(crate) fn build_repository(cfg: &Config) -> Arc<dyn DocumentRepository> {
    let latency = to_latency(cfg);
    let documents = to_documents(cfg);

    if cfg.repository.lazy {
        debug!(documents = documents.len(), "deferring repository connection");
        Arc::new(LazyRepository::new(move || {
            Arc::new(MemoryDocumentRepository::with_documents(
                documents.clone(),
                latency,
            ))
        }))
    } else {
        Arc::new(MemoryDocumentRepository::with_documents(documents, latency))
    }
}

/// Build the chain described by `[chain]` over a fresh repository.
///
/// # Errors
///
/// Returns an error if a layer name is unknown or repeated.
pub(crate) fn build_chain(cfg: &Config) -> Result<ReferenceChain> {
    let chain = ReferenceChain::from_names(
        build_repository(cfg),
        &cfg.chain.layers,
        to_cache_config(cfg),
    )
    .context("failed to build document chain")?;
    debug!(layers = ?chain.kinds(), "chain ready");
    Ok(chain)
}

/// Look up a configured user by name.
///
/// # Errors
///
/// Returns an error if no `[[users]]` entry has that name.
pub(crate) fn resolve_user(cfg: &Config, name: &str) -> Result<User> {
    let entry = cfg.user(name.trim()).with_context(|| {
        let known: Vec<&str> = cfg.users.iter().map(|u| u.name.as_str()).collect();
        format!("unknown user '{name}' (configured: {})", known.join(", "))
    })?;
    Ok(User::new(
        entry.name.as_str(),
        ClearanceLevel::new(entry.clearance),
    ))
}
