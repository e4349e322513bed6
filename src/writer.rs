//! Prefixed writers bound to a [`Debugger`].
//!
//! A [`PrefixedWriter`] is a view, not a sink of its own: it carries a fixed
//! prefix and a weak handle to the debugger's shared state. Each write reads
//! the gate and the destination afresh, so a writer created once can be handed
//! to any `std::io::Write` consumer (a [`LineLogger`](crate::LineLogger), a
//! `BufWriter`, `writeln!`) and still follow `enable`, `disable` and
//! `set_output`.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Weak};

use crate::debugger::{Debugger, Shared};

/// Builder returned by [`Debugger::writer`].
#[derive(Debug)]
pub struct WriterBuilder<'a> {
    debugger: &'a Debugger,
}

impl<'a> WriterBuilder<'a> {
    pub(crate) fn new(debugger: &'a Debugger) -> Self {
        Self { debugger }
    }

    /// Fix the prefix and produce a writer bound to the debugger.
    pub fn prefix(self, prefix: impl Into<String>) -> PrefixedWriter {
        PrefixedWriter {
            prefix: Arc::from(prefix.into()),
            owner: self.debugger.downgrade(),
        }
    }
}

/// Writes `prefix ++ bytes` to its debugger's current destination.
///
/// While the debugger is disabled, `write` reports every byte as accepted and
/// performs no I/O. Generic consumers treat a short count or an error as
/// fatal, and debugging being off must not break them. When enabled, the
/// reported count is the length of the caller's buffer (the prefix is not
/// counted) and destination errors are returned as-is.
///
/// No newline is added; framing is the caller's job. Every `write` call gets
/// the prefix, so a line split over several writes (`write!` with arguments
/// does that) should be formatted first or sent through a
/// [`LineLogger`](crate::LineLogger).
///
/// The writer never keeps its debugger alive. Once the debugger is dropped
/// the writer behaves as if it were disabled.
#[derive(Clone)]
pub struct PrefixedWriter {
    prefix: Arc<str>,
    owner: Weak<Shared>,
}

impl PrefixedWriter {
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Whether a write right now would reach the destination.
    pub fn is_enabled(&self) -> bool {
        self.owner
            .upgrade()
            .is_some_and(|shared| shared.is_enabled())
    }

    /// Whether the debugger that created this writer still exists.
    pub fn is_attached(&self) -> bool {
        self.owner.strong_count() > 0
    }

    fn write_prefixed(&self, buf: &[u8]) -> io::Result<usize> {
        let Some(shared) = self.owner.upgrade() else {
            return Ok(buf.len());
        };

        shared.emit(|| {
            let mut bytes = Vec::with_capacity(self.prefix.len() + buf.len());
            bytes.extend_from_slice(self.prefix.as_bytes());
            bytes.extend_from_slice(buf);
            bytes
        })?;

        Ok(buf.len())
    }

    fn flush_destination(&self) -> io::Result<()> {
        match self.owner.upgrade() {
            Some(shared) if shared.is_enabled() => Ok(shared.flush()?),
            _ => Ok(()),
        }
    }
}

impl fmt::Debug for PrefixedWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrefixedWriter")
            .field("prefix", &self.prefix)
            .field("attached", &self.is_attached())
            .finish()
    }
}

impl Write for PrefixedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_prefixed(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_destination()
    }
}

impl Write for &PrefixedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_prefixed(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_destination()
    }
}

#[cfg(feature = "async")]
mod async_impl {
    use std::io;
    use std::pin::Pin;
    use std::task::{Context, Poll};

    use tokio::io::AsyncWrite;

    use super::PrefixedWriter;

    /// The destination is synchronous, so every poll completes immediately.
    impl AsyncWrite for PrefixedWriter {
        fn poll_write(
            self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
            buf: &[u8],
        ) -> Poll<io::Result<usize>> {
            Poll::Ready(self.write_prefixed(buf))
        }

        fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
            Poll::Ready(self.flush_destination())
        }

        fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
            Poll::Ready(self.flush_destination())
        }
    }
}
