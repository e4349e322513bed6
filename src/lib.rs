//! # debugtap
//!
//! Runtime-togglable debug output for long-running programs.
//!
//! ## Overview
//!
//! debugtap provides:
//! - **A gate**: `Debugger::enable` / `Debugger::disable` at any time; while
//!   disabled, output costs one atomic load and nothing is written
//! - **A swappable destination**: `Debugger::set_output` redirects every later
//!   write, including writes through writers handed out earlier
//! - **Prefixed writers**: `debugger.writer().prefix("net: ")` yields a
//!   `std::io::Write` that prepends a fixed string and follows the gate and the
//!   destination of its debugger
//! - **Line logging**: `LineLogger` composes with a prefixed writer and can be
//!   installed as the `log` crate backend
//! - **Configuration**: build a debugger from a `DebugConfig` (JSON/YAML/TOML
//!   behind features) or with `DebuggerBuilder`; files and sockets are opened
//!   by the host and passed in as plain writers
//!
//! ## Quick Start
//!
//! ```rust
//! use debugtap::{Debugger, InMemorySink};
//! use std::io::Write;
//!
//! let first = InMemorySink::new("first");
//! let second = InMemorySink::new("second");
//!
//! let debugger = Debugger::new(first.writer());
//! debugger.enable();
//! debugger.print("line1");
//!
//! let mut writer = debugger.writer().prefix("writer: ");
//! debugger.set_output(second.writer());
//! writer.write_all(b"line2").unwrap();
//!
//! assert!(first.contents_string().trim_end().ends_with("line1"));
//! assert_eq!(second.contents_string(), "writer: line2");
//! ```
//!
//! ## Error semantics
//!
//! - `print`, `flush`, `enable` and `disable` never fail; a destination that
//!   rejects a write just loses that line.
//! - `PrefixedWriter::write` returns the destination's error when enabled, and
//!   reports full success without I/O when disabled.
//! - Config parsing, stream names (`"stdout".parse::<StdStream>()`) and
//!   `LineLogger::install` return `DebugError`.
//!
//! ## Features
//!
//! - `json` / `yaml` / `toml` - Parse `DebugConfig` from those formats
//! - `async` - `PrefixedWriter` implements `tokio::io::AsyncWrite`
//! - `miette` - Pretty error reporting with miette

pub mod builder;
pub mod config;
pub mod debugger;
pub mod error;
pub mod io;
pub mod line_logger;
pub mod writer;

// Re-exports for convenience
pub use builder::DebuggerBuilder;
pub use config::{DebugConfig, WriterConfig};
pub use debugger::Debugger;
pub use error::{DebugError, Stage};
pub use io::{InMemorySink, InMemoryWriteHandle, StdStream};
pub use line_logger::{LineLogger, Timestamp};
pub use writer::{PrefixedWriter, WriterBuilder};

// Miette re-exports
#[cfg(feature = "miette")]
pub use error::DebugDiagnostic;

// Internal test modules (see src/tests)
#[cfg(test)]
mod tests;
