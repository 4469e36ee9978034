//! crates/logging/src/tracing_bridge.rs
//! Bridge from rendered grouplog lines to `tracing` events.
//!
//! Deployments already standardised on `tracing` can route any level (or a
//! whole group, via `SinkSet::uniform`) into their subscriber instead of a
//! raw stream: [`tracing_sink`] returns an ordinary [`Sink`] whose writes
//! become `tracing` events at a level mapped from the grouplog severity.
//!
//! The nine severities fold onto tracing's five levels: Notice joins Info,
//! Alert joins Warn, and Critical/Emergency join Error.

use std::io::{self, Write};

use grouplog_core::Severity;
use grouplog_sink::Sink;

/// Tracing target carried by every bridged event.
pub const TRACING_TARGET: &str = "grouplog";

/// A sink that emits each written line as a `tracing` event.
#[must_use]
pub fn tracing_sink(severity: Severity) -> Sink {
    Sink::from_writer(TracingWriter { severity })
}

struct TracingWriter {
    severity: Severity,
}

impl Write for TracingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text = String::from_utf8_lossy(buf);
        let line = text.trim_end_matches('\n');
        match self.severity {
            Severity::Trace => tracing::trace!(target: TRACING_TARGET, "{line}"),
            Severity::Debug => tracing::debug!(target: TRACING_TARGET, "{line}"),
            Severity::Info | Severity::Notice => tracing::info!(target: TRACING_TARGET, "{line}"),
            Severity::Warning | Severity::Alert => {
                tracing::warn!(target: TRACING_TARGET, "{line}");
            }
            Severity::Error | Severity::Critical | Severity::Emergency => {
                tracing::error!(target: TRACING_TARGET, "{line}");
            }
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
