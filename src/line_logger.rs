//! A line-oriented logger over any `std::io::Write`.
//!
//! [`LineLogger`] is the generic "timestamp + prefix + text + newline" logger
//! that prefixed writers are designed to sit under. Each line goes out in a
//! single `write_all`, so when the output is a
//! [`PrefixedWriter`](crate::PrefixedWriter) the writer's prefix lands at the
//! start of every line:
//!
//! ```rust
//! use debugtap::{Debugger, InMemorySink, LineLogger, Timestamp};
//!
//! let sink = InMemorySink::new("buf");
//! let debugger = Debugger::new(sink.writer());
//! debugger.enable();
//!
//! let logger = LineLogger::new(debugger.writer().prefix("net: "), "conn ", Timestamp::None);
//! logger.print("accepted").unwrap();
//!
//! assert_eq!(sink.contents_string(), "net: conn accepted\n");
//! ```
//!
//! It also implements [`log::Log`], so a host can route the `log` macros
//! through a debugger with [`LineLogger::install`].

use std::fmt;
use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::Local;
use log::{LevelFilter, Log, Metadata, Record};

use crate::error::{DebugError, Stage};

/// Timestamp written at the start of each line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Timestamp {
    /// No timestamp
    None,
    /// Local date and time, `2024/01/31 13:45:07 `
    #[default]
    DateTime,
    /// Local date and time with microseconds, `2024/01/31 13:45:07.123456 `
    DateTimeMicros,
}

impl Timestamp {
    fn format(self) -> Option<&'static str> {
        match self {
            Timestamp::None => None,
            Timestamp::DateTime => Some("%Y/%m/%d %H:%M:%S "),
            Timestamp::DateTimeMicros => Some("%Y/%m/%d %H:%M:%S%.6f "),
        }
    }
}

/// Render `<timestamp><prefix><text>\n`. The newline is only added when `text`
/// does not already end with one.
pub(crate) fn render_line(timestamp: Timestamp, prefix: &str, text: &str) -> String {
    let mut line = match timestamp.format() {
        Some(fmt) => Local::now().format(fmt).to_string(),
        None => String::new(),
    };
    line.reserve(prefix.len() + text.len() + 1);
    line.push_str(prefix);
    line.push_str(text);
    if !text.ends_with('\n') {
        line.push('\n');
    }
    line
}

struct Inner<W> {
    out: W,
    prefix: String,
}

/// Line logger writing one complete line per call.
pub struct LineLogger<W: Write + Send> {
    inner: Mutex<Inner<W>>,
    timestamp: Timestamp,
    level: LevelFilter,
}

impl<W: Write + Send> LineLogger<W> {
    pub fn new(out: W, prefix: impl Into<String>, timestamp: Timestamp) -> Self {
        Self {
            inner: Mutex::new(Inner {
                out,
                prefix: prefix.into(),
            }),
            timestamp,
            level: LevelFilter::Trace,
        }
    }

    /// Maximum level accepted through the `log` facade.
    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    fn lock(&self) -> MutexGuard<'_, Inner<W>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Write `text` as one line.
    pub fn print(&self, text: &str) -> io::Result<()> {
        let mut inner = self.lock();
        let line = render_line(self.timestamp, &inner.prefix, text);
        inner.out.write_all(line.as_bytes())
    }

    pub fn prefix(&self) -> String {
        self.lock().prefix.clone()
    }

    pub fn set_prefix(&self, prefix: impl Into<String>) {
        self.lock().prefix = prefix.into();
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    pub fn into_inner(self) -> W {
        self.inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .out
    }
}

impl<W: Write + Send + 'static> LineLogger<W> {
    /// Register this logger as the process-wide `log` backend and raise the
    /// global max level to this logger's level.
    pub fn install(self) -> Result<(), DebugError> {
        let level = self.level;
        log::set_boxed_logger(Box::new(self))
            .map_err(|e| DebugError::new(Stage::Install, "log", e))?;
        log::set_max_level(level);
        Ok(())
    }
}

impl<W: Write + Send> Log for LineLogger<W> {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let text = format!("{} {}: {}", record.level(), record.target(), record.args());
        let _ = self.print(&text);
    }

    fn flush(&self) {
        let _ = self.lock().out.flush();
    }
}

impl<W: Write + Send> fmt::Debug for LineLogger<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineLogger")
            .field("prefix", &self.prefix())
            .field("timestamp", &self.timestamp)
            .field("level", &self.level)
            .finish()
    }
}
