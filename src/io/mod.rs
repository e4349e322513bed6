//! Byte-sink destinations for debug output.
//!
//! The debugger only needs `std::io::Write + Send`; the host opens files or
//! sockets itself. This module covers the destinations the crate can name on
//! its own:
//! - `StdStream`: stdout or stderr, selectable from configuration
//! - `InMemorySink`: a shared buffer for tests and in-process capture

mod memory;
mod stream;

pub use memory::{InMemorySink, InMemoryWriteHandle};
pub use stream::StdStream;
