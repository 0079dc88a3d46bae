//! Telemetry error types.

use thiserror::Error;

/// Errors that can occur while setting up logging.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// A level, format, or directive could not be understood.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A global subscriber was already installed, or installing failed.
    #[error("Initialization error: {0}")]
    InitError(String),

    /// The log directory could not be prepared.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for telemetry operations.
pub type TelemetryResult<T> = Result<T, TelemetryError>;
