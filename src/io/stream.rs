//! The process's standard streams as debug destinations.

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{DebugError, Stage};

/// A standard stream a debugger can be pointed at by name.
///
/// Anything else (a file, a socket, a pipe) is opened by the host and handed
/// to [`Debugger::set_output`](crate::Debugger::set_output) as a plain writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StdStream {
    #[serde(alias = "-")]
    Stdout,
    #[default]
    Stderr,
}

impl StdStream {
    /// Id reported by `Debugger::output_id`: "-" for stdout, "stderr" for stderr.
    pub fn id(self) -> &'static str {
        match self {
            StdStream::Stdout => "-",
            StdStream::Stderr => "stderr",
        }
    }

    pub fn writer(self) -> Box<dyn Write + Send> {
        match self {
            StdStream::Stdout => Box::new(io::stdout()),
            StdStream::Stderr => Box::new(io::stderr()),
        }
    }
}

impl FromStr for StdStream {
    type Err = DebugError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "-" | "stdout" => Ok(StdStream::Stdout),
            "stderr" => Ok(StdStream::Stderr),
            other => Err(DebugError::new(
                Stage::ResolveOutput,
                other,
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("unknown output stream: {other}"),
                ),
            )),
        }
    }
}

impl fmt::Display for StdStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
