//! crates/logging-sink/src/sink.rs
//! Cloneable handles over shared writable destinations.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// A shared, cheaply cloneable handle over a writable destination.
///
/// Every clone refers to the same underlying writer; a private mutex
/// serializes writes so two levels (or two groups) routed at the same
/// destination cannot interleave inside a line. The destination itself is
/// an externally shared resource; no coordination beyond that single writer
/// lock is provided.
///
/// # Examples
///
/// ```
/// use grouplog_sink::Sink;
///
/// let sink = Sink::from_writer(Vec::new());
/// sink.write_line("TRACE: hello\n")?;
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone)]
pub struct Sink {
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl Sink {
    /// A sink over the process standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::from_writer(io::stdout())
    }

    /// A sink over the process standard error.
    #[must_use]
    pub fn stderr() -> Self {
        Self::from_writer(io::stderr())
    }

    /// A sink that accepts and drops everything.
    ///
    /// Use this to silence a level whose destination slot must still be
    /// set.
    #[must_use]
    pub fn discard() -> Self {
        Self::from_writer(io::sink())
    }

    /// Wraps an arbitrary writer.
    #[must_use]
    pub fn from_writer<W>(writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self {
            writer: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    /// Writes one composed line and flushes the destination.
    ///
    /// The write happens under the sink lock as a single `write_all`, so a
    /// line is never split between concurrent writers of this handle.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        writer.write_all(line.as_bytes())?;
        writer.flush()
    }

    /// Whether two handles refer to the same destination.
    #[must_use]
    pub fn same(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.writer, &b.writer)
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink").finish_non_exhaustive()
    }
}
