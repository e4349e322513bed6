//! Configuration types for debug output.
//!
//! `DebugConfig` covers what can be decided without the host's help: the
//! initial gate state, which standard stream to write to, and the prefixes of
//! named writers. Files, sockets and other sinks are opened by the host and
//! passed to [`Debugger::set_output`](crate::Debugger::set_output).

mod settings;

pub use settings::{DebugConfig, WriterConfig};
