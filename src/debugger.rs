//! The debugger: an enable/disable gate in front of a swappable destination.
//!
//! A [`Debugger`] owns two pieces of shared state, the gate and the current
//! destination. Both live behind one mutex so every write observes a single,
//! consistent `(enabled, destination)` pair. An atomic mirror of the gate lets
//! disabled calls return before touching the lock or formatting anything.
//!
//! Writers created through [`Debugger::writer`] keep only a weak handle to the
//! shared state and read it on every write, so `enable`, `disable` and
//! `set_output` apply to them immediately.

use std::fmt;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use crate::error::DebugError;
use crate::io::StdStream;
use crate::line_logger::{Timestamp, render_line};
use crate::writer::WriterBuilder;

/// Id reported by `output_id` for destinations passed without one.
pub const CUSTOM_OUTPUT_ID: &str = "custom";

/// The current byte sink and the id used to name it in errors.
pub(crate) struct Destination {
    id: String,
    out: Box<dyn Write + Send>,
}

impl Destination {
    pub(crate) fn new(id: impl Into<String>, out: Box<dyn Write + Send>) -> Self {
        Self { id: id.into(), out }
    }

    pub(crate) fn id(&self) -> &str {
        &self.id
    }
}

struct State {
    enabled: bool,
    destination: Destination,
}

/// State shared between a debugger and the writers it hands out.
pub(crate) struct Shared {
    /// Lock-free copy of `State::enabled`, only written while the lock is held.
    enabled: AtomicBool,
    state: Mutex<State>,
}

impl Shared {
    fn new(enabled: bool, destination: Destination) -> Self {
        Self {
            enabled: AtomicBool::new(enabled),
            state: Mutex::new(State {
                enabled,
                destination,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        // A panic inside some destination's `write` must not silence every
        // later debug call.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    fn set_enabled(&self, enabled: bool) {
        let mut state = self.lock();
        state.enabled = enabled;
        self.enabled.store(enabled, Ordering::Release);
    }

    /// Renders and writes one chunk to the current destination if the gate is
    /// open. Returns `Ok(false)` when the chunk was dropped by the gate.
    ///
    /// The gate is re-checked under the lock, so a concurrent `disable` either
    /// happens before the whole chunk or after it.
    pub(crate) fn emit<F>(&self, render: F) -> Result<bool, DebugError>
    where
        F: FnOnce() -> Vec<u8>,
    {
        if !self.is_enabled() {
            return Ok(false);
        }

        let mut state = self.lock();
        if !state.enabled {
            return Ok(false);
        }

        let bytes = render();
        let dest = &mut state.destination;
        dest.out
            .write_all(&bytes)
            .map_err(|e| DebugError::write(&dest.id, e))?;
        Ok(true)
    }

    pub(crate) fn flush(&self) -> Result<(), DebugError> {
        let mut state = self.lock();
        let dest = &mut state.destination;
        dest.out.flush().map_err(|e| DebugError::write(&dest.id, e))
    }

    fn replace(&self, destination: Destination) -> Destination {
        let mut state = self.lock();
        std::mem::replace(&mut state.destination, destination)
    }

    fn output_id(&self) -> String {
        self.lock().destination.id().to_owned()
    }
}

/// Runtime-togglable debug output.
///
/// Created disabled. While disabled every [`print`](Debugger::print) and every
/// write through a [`PrefixedWriter`](crate::PrefixedWriter) is dropped without
/// formatting or I/O.
///
/// ```rust
/// use debugtap::{Debugger, InMemorySink};
///
/// let sink = InMemorySink::new("buf");
/// let debugger = Debugger::new(sink.writer());
///
/// debugger.print("dropped");
/// debugger.enable();
/// debugger.print("kept");
///
/// assert_eq!(sink.lines().len(), 1);
/// assert!(sink.lines()[0].ends_with("kept"));
/// ```
pub struct Debugger {
    shared: Arc<Shared>,
}

impl Debugger {
    /// Create a disabled debugger writing to `destination`.
    pub fn new<W>(destination: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self::with_id(CUSTOM_OUTPUT_ID, destination)
    }

    /// Create a disabled debugger whose destination is named `id` in errors.
    pub fn with_id<W>(id: impl Into<String>, destination: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self::from_destination(false, Destination::new(id, Box::new(destination)))
    }

    pub(crate) fn from_destination(enabled: bool, destination: Destination) -> Self {
        Self {
            shared: Arc::new(Shared::new(enabled, destination)),
        }
    }

    /// Turn output on. Idempotent.
    pub fn enable(&self) {
        self.shared.set_enabled(true);
    }

    /// Turn output off. Idempotent. Output issued while disabled is discarded,
    /// not buffered.
    pub fn disable(&self) {
        self.shared.set_enabled(false);
    }

    pub fn is_enabled(&self) -> bool {
        self.shared.is_enabled()
    }

    /// Replace the destination. Does not touch the gate.
    ///
    /// Writes already holding the lock finish on the old destination; every
    /// later write, including those through existing prefixed writers, lands
    /// on the new one. The old destination is flushed and dropped.
    pub fn set_output<W>(&self, destination: W)
    where
        W: Write + Send + 'static,
    {
        self.set_output_with_id(CUSTOM_OUTPUT_ID, destination);
    }

    /// Like [`set_output`](Debugger::set_output), naming the new destination.
    pub fn set_output_with_id<W>(&self, id: impl Into<String>, destination: W)
    where
        W: Write + Send + 'static,
    {
        self.swap(Destination::new(id, Box::new(destination)));
    }

    /// Point the debugger at stdout or stderr.
    pub fn set_stream(&self, stream: StdStream) {
        self.swap(Destination::new(stream.id(), stream.writer()));
    }

    fn swap(&self, destination: Destination) {
        let mut old = self.shared.replace(destination);
        // Nobody can reach the old destination any more.
        let _ = old.out.flush();
    }

    /// Id of the current destination ("-", "stderr", a host-chosen id, or `"custom"`).
    pub fn output_id(&self) -> String {
        self.shared.output_id()
    }

    /// Write `text` as one timestamped line.
    ///
    /// Does nothing while disabled. A trailing newline is added unless `text`
    /// already ends with one. Destination failures are swallowed.
    pub fn print(&self, text: &str) {
        let _ = self.try_print(text);
    }

    /// The delivery path behind [`print`](Debugger::print), with the outcome.
    pub(crate) fn try_print(&self, text: &str) -> Result<bool, DebugError> {
        self.shared
            .emit(|| render_line(Timestamp::DateTime, "", text).into_bytes())
    }

    /// Flush the current destination, swallowing failures.
    pub fn flush(&self) {
        let _ = self.shared.flush();
    }

    /// Start building a prefixed writer bound to this debugger.
    pub fn writer(&self) -> WriterBuilder<'_> {
        WriterBuilder::new(self)
    }

    pub(crate) fn downgrade(&self) -> Weak<Shared> {
        Arc::downgrade(&self.shared)
    }
}

impl Default for Debugger {
    /// A disabled debugger writing to stderr.
    fn default() -> Self {
        let stream = StdStream::Stderr;
        Self::from_destination(false, Destination::new(stream.id(), stream.writer()))
    }
}

impl fmt::Debug for Debugger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debugger")
            .field("enabled", &self.is_enabled())
            .field("output", &self.output_id())
            .finish()
    }
}
