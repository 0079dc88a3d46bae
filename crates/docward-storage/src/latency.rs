//! Simulated store latency.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Repository operation a delay applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepositoryOp {
    /// Opening the store.
    Connect,
    /// Loading a document.
    Get,
    /// Writing a document.
    Update,
}

/// Blocking delay applied to each repository call.
///
/// Tests use [`Latency::none`]; demos use [`Latency::simulated`] to make
/// the cost of uncached reads visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Latency {
    /// Delay when the store is opened.
    pub connect: Duration,
    /// Delay per `get`.
    pub get: Duration,
    /// Delay per `update`.
    pub update: Duration,
}

impl Latency {
    /// No delay at all.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            connect: Duration::ZERO,
            get: Duration::ZERO,
            update: Duration::ZERO,
        }
    }

    /// A heavyweight store: 1s connect, 500ms per read, 300ms per write.
    #[must_use]
    pub const fn simulated() -> Self {
        Self {
            connect: Duration::from_millis(1000),
            get: Duration::from_millis(500),
            update: Duration::from_millis(300),
        }
    }

    /// Same delay for every operation.
    #[must_use]
    pub const fn uniform(delay: Duration) -> Self {
        Self {
            connect: delay,
            get: delay,
            update: delay,
        }
    }

    /// Delay configured for `op`.
    #[must_use]
    pub const fn for_op(&self, op: RepositoryOp) -> Duration {
        match op {
            RepositoryOp::Connect => self.connect,
            RepositoryOp::Get => self.get,
            RepositoryOp::Update => self.update,
        }
    }

    /// Block the current thread for the delay configured for `op`.
    pub fn wait(&self, op: RepositoryOp) {
        let delay = self.for_op(op);
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
}
