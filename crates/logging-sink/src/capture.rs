//! crates/logging-sink/src/capture.rs
//! In-memory capture destination for tests and examples.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

use crate::sink::Sink;

/// An in-memory destination whose contents stay observable.
///
/// [`sink`](Self::sink) hands out [`Sink`] handles writing into the shared
/// buffer; the `Capture` itself keeps read access. Tests point every level
/// of a group at captures and assert on the collected lines.
///
/// # Examples
///
/// ```
/// use grouplog_sink::Capture;
///
/// let capture = Capture::new();
/// capture.sink().write_line("DEBUG: probe\n")?;
/// assert_eq!(capture.lines(), ["DEBUG: probe"]);
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct Capture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

struct CaptureWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Capture {
    /// An empty capture buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink handle writing into this capture.
    #[must_use]
    pub fn sink(&self) -> Sink {
        Sink::from_writer(CaptureWriter {
            buffer: Arc::clone(&self.buffer),
        })
    }

    /// Bytes collected so far.
    #[must_use]
    pub fn contents(&self) -> Vec<u8> {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Collected bytes as UTF-8 text.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.contents()).into_owned()
    }

    /// Collected text split into lines, trailing newline dropped.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.text().lines().map(str::to_owned).collect()
    }

    /// Number of bytes collected so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether nothing has been written yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drains and returns the collected text.
    pub fn take_text(&self) -> String {
        let bytes = std::mem::take(
            &mut *self
                .buffer
                .lock()
                .unwrap_or_else(PoisonError::into_inner),
        );
        String::from_utf8_lossy(&bytes).into_owned()
    }
}
