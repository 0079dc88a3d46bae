//! Docward Telemetry - Logging setup for docward binaries and tests.
//!
//! Every docward crate logs through `tracing` macros. This crate installs
//! the global subscriber: an [`EnvFilter`](tracing_subscriber::EnvFilter)
//! built from a level plus per-crate directives, and one formatting layer
//! writing to stdout, stderr, or a rotating file.
//!
//! # Example
//!
//! ```rust,no_run
//! use docward_telemetry::{LogConfig, LogFormat, setup_logging};
//!
//! # fn main() -> Result<(), docward_telemetry::TelemetryError> {
//! let config = LogConfig::new("debug")
//!     .with_format(LogFormat::Compact)
//!     .with_directive("docward_cache=trace");
//!
//! setup_logging(&config)?;
//! tracing::info!("logging ready");
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod prelude;

mod error;
mod logging;

pub use error::{TelemetryError, TelemetryResult};
pub use logging::{
    FileRotation, LogConfig, LogFormat, LogTarget, setup_default_logging, setup_logging,
};
