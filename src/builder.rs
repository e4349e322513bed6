//! Builder for creating Debugger instances.

use std::fmt;
use std::io::Write;

use crate::config::DebugConfig;
use crate::debugger::{Debugger, Destination};
use crate::io::StdStream;

/// Where a built debugger writes.
enum Output {
    Stream(StdStream),
    Host(Destination),
}

pub struct DebuggerBuilder {
    enabled: bool,
    output: Output,
}

impl DebuggerBuilder {
    pub fn new() -> Self {
        Self {
            enabled: false,
            output: Output::Stream(StdStream::default()),
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Write to stdout or stderr. Replaces any earlier destination.
    pub fn output(mut self, stream: StdStream) -> Self {
        self.output = Output::Stream(stream);
        self
    }

    /// Write to a sink the host has already opened, named `id` in errors.
    /// Replaces any earlier destination.
    pub fn destination<W>(mut self, id: impl Into<String>, destination: W) -> Self
    where
        W: Write + Send + 'static,
    {
        self.output = Output::Host(Destination::new(id, Box::new(destination)));
        self
    }

    pub fn build(self) -> Debugger {
        let destination = match self.output {
            Output::Stream(stream) => Destination::new(stream.id(), stream.writer()),
            Output::Host(destination) => destination,
        };
        Debugger::from_destination(self.enabled, destination)
    }

    pub fn from_config(config: &DebugConfig) -> Self {
        let builder = DebuggerBuilder::new().enabled(config.enabled);
        match config.output {
            Some(stream) => builder.output(stream),
            None => builder,
        }
    }
}

impl Default for DebuggerBuilder {
    fn default() -> Self {
        DebuggerBuilder::new()
    }
}

impl fmt::Debug for DebuggerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let output = match &self.output {
            Output::Stream(stream) => stream.id(),
            Output::Host(destination) => destination.id(),
        };
        f.debug_struct("DebuggerBuilder")
            .field("enabled", &self.enabled)
            .field("output", &output)
            .finish()
    }
}

impl Debugger {
    /// Build a debugger from declarative settings.
    ///
    /// Named writers are created afterwards with [`DebugConfig::writer`].
    pub fn from_config(config: &DebugConfig) -> Self {
        DebuggerBuilder::from_config(config).build()
    }
}
