//! Error types for debug output configuration and delivery.
//!
//! This module provides:
//! - `Stage`: Indicates where an error occurred
//! - `DebugError`: A single error with the destination it concerns
//!
//! Only configuration paths (opening targets, parsing settings, installing a
//! `log` backend) hand a `DebugError` to the caller. `Debugger::print` and the
//! gate operations swallow delivery failures: the host program must never
//! depend on debug output succeeding. `PrefixedWriter::write` is the one
//! delivery path that reports failures, converted back into `std::io::Error`.

use std::fmt;
use std::io;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Turning an output name into a standard stream
    ResolveOutput,
    Parse,
    /// Error while writing to or flushing the current destination
    Write,
    /// Error while registering a global `log` backend
    Install,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::ResolveOutput => write!(f, "ResolveOutput"),
            Stage::Parse => write!(f, "Parse"),
            Stage::Write => write!(f, "Write"),
            Stage::Install => write!(f, "Install"),
        }
    }
}

#[derive(Debug, Error)]
#[error("[{stage}] {target}: {error}")]
pub struct DebugError {
    /// Stage where the error occurred
    pub stage: Stage,
    /// Identifier of the destination ("-" for stdout, file path, etc.)
    pub target: String,
    /// The underlying error
    #[source]
    pub error: Box<dyn std::error::Error + Send + Sync>,
}

impl DebugError {
    pub fn new(
        stage: Stage,
        target: impl Into<String>,
        error: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            stage,
            target: target.into(),
            error: error.into(),
        }
    }

    /// Build a write-stage error from a failed destination write.
    pub(crate) fn write(target: impl Into<String>, error: io::Error) -> Self {
        Self::new(Stage::Write, target, error)
    }

    /// The `io::ErrorKind` of the underlying error, or `Other` when it is not
    /// an I/O error.
    pub fn io_kind(&self) -> io::ErrorKind {
        self.error
            .downcast_ref::<io::Error>()
            .map(io::Error::kind)
            .unwrap_or(io::ErrorKind::Other)
    }
}

/// Keeps the original `ErrorKind` so generic `Write` callers can still match
/// on it, while the message names the destination.
impl From<DebugError> for io::Error {
    fn from(e: DebugError) -> Self {
        io::Error::new(e.io_kind(), e)
    }
}

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;
