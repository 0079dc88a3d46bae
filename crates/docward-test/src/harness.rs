//! Test harness helpers.

use std::io::Write;

use tempfile::NamedTempFile;
use tracing_subscriber::EnvFilter;

/// Write `toml` to a fresh `.toml` file that lives as long as the handle.
///
/// # Panics
///
/// Panics if the file cannot be created or written.
#[must_use]
pub fn test_config_file(toml: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("docward-")
        .suffix(".toml")
        .tempfile()
        .expect("Failed to create temp config file");
    file.write_all(toml.as_bytes())
        .expect("Failed to write temp config file");
    file
}

/// Route `tracing` output from the code under test into the test harness.
///
/// `filter` uses `EnvFilter` syntax, e.g. `"docward_cache=debug"`. Only the
/// first call in a test binary installs a subscriber.
pub fn setup_test_logging(filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_test_writer()
        .try_init();
}
