//! crates/logging/src/state.rs
//! Lock-guarded interior shared by a group and its level handles.

use std::io;
use std::sync::{Mutex, MutexGuard, PoisonError};

use grouplog_core::{Annotation, Callsite, FormatFlags, LineFormat, Severity};
use grouplog_sink::Sink;

/// Interior behind one mutex. A group and its nine levels share one
/// `Shared`; a standalone level owns a `Shared` holding a single record.
pub(crate) struct Shared {
    state: Mutex<State>,
}

impl Shared {
    pub(crate) fn new(state: State) -> Self {
        Self {
            state: Mutex::new(state),
        }
    }

    /// Locks the interior, recovering from poisoning. A logging facility
    /// keeps working after an unrelated panic on another thread.
    pub(crate) fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

pub(crate) struct State {
    pub(crate) name: String,
    pub(crate) ignore_all: bool,
    pub(crate) levels: Box<[LevelState]>,
}

/// One level record: formatting state, destination, suppression, counters.
pub(crate) struct LevelState {
    pub(crate) severity: Severity,
    pub(crate) format: LineFormat,
    pub(crate) sink: Sink,
    pub(crate) ignore: bool,
    pub(crate) lines: u64,
    pub(crate) bytes: u64,
}

impl LevelState {
    pub(crate) fn new(
        severity: Severity,
        prefix: String,
        flags: FormatFlags,
        annotation: Annotation,
        sink: Sink,
    ) -> Self {
        Self {
            severity,
            format: LineFormat::new(prefix, flags, annotation),
            sink,
            ignore: false,
            lines: 0,
            bytes: 0,
        }
    }

    /// Effective suppression: the level's own flag, or the group-wide one.
    pub(crate) fn suppressed(&self, ignore_all: bool) -> bool {
        self.ignore || ignore_all
    }

    /// Renders and writes one line, updating the counters. Counters track
    /// attempted emissions; a failed write still counts.
    pub(crate) fn emit(&mut self, callsite: Option<&Callsite>, msg: &str) -> io::Result<()> {
        let line = self.format.render(callsite, msg);
        self.lines += 1;
        self.bytes += line.len() as u64;
        self.sink.write_line(&line)
    }
}
