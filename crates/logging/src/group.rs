//! crates/logging/src/group.rs
//! Nine levels bundled under one label, one lock, and one ignore-all switch.

use std::fmt;
use std::io;
use std::panic::Location;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use grouplog_core::{Annotation, Callsite, FormatFlags, Severity};
use grouplog_sink::Sink;

use crate::config::GroupConfig;
use crate::error::{ConfigError, ConfigResult};
use crate::level::Level;
use crate::state::{LevelState, Shared, State};

/// Process-wide counter making group display names unique.
static GROUP_COUNTER: AtomicU32 = AtomicU32::new(0);

/// One destination slot per level; `None` marks a slot the caller never
/// set, which fails construction.
///
/// [`standard`](Self::standard) is the documented default split: the six
/// levels up to Alert share a stdout handle, Error/Critical/Emergency
/// share a stderr handle.
#[derive(Clone, Debug, Default)]
pub struct SinkSet {
    /// Trace destination.
    pub trace: Option<Sink>,
    /// Debug destination.
    pub debug: Option<Sink>,
    /// Info destination.
    pub info: Option<Sink>,
    /// Notice destination.
    pub notice: Option<Sink>,
    /// Warning destination.
    pub warning: Option<Sink>,
    /// Alert destination.
    pub alert: Option<Sink>,
    /// Error destination.
    pub error: Option<Sink>,
    /// Critical destination.
    pub critical: Option<Sink>,
    /// Emergency destination.
    pub emergency: Option<Sink>,
}

impl SinkSet {
    /// The standard split: six levels to stdout, three to stderr.
    #[must_use]
    pub fn standard() -> Self {
        let out = Sink::stdout();
        let err = Sink::stderr();
        let mut sinks = Self::default();
        for severity in Severity::ALL {
            let stream = if severity.uses_stderr() { &err } else { &out };
            *sinks.slot_mut(severity) = Some(stream.clone());
        }
        sinks
    }

    /// Every level routed at clones of one destination.
    #[must_use]
    pub fn uniform(sink: &Sink) -> Self {
        let mut sinks = Self::default();
        for severity in Severity::ALL {
            *sinks.slot_mut(severity) = Some(sink.clone());
        }
        sinks
    }

    /// The destination assigned to `severity`, if set.
    #[must_use]
    pub fn get(&self, severity: Severity) -> Option<&Sink> {
        match severity {
            Severity::Trace => self.trace.as_ref(),
            Severity::Debug => self.debug.as_ref(),
            Severity::Info => self.info.as_ref(),
            Severity::Notice => self.notice.as_ref(),
            Severity::Warning => self.warning.as_ref(),
            Severity::Alert => self.alert.as_ref(),
            Severity::Error => self.error.as_ref(),
            Severity::Critical => self.critical.as_ref(),
            Severity::Emergency => self.emergency.as_ref(),
        }
    }

    fn slot_mut(&mut self, severity: Severity) -> &mut Option<Sink> {
        match severity {
            Severity::Trace => &mut self.trace,
            Severity::Debug => &mut self.debug,
            Severity::Info => &mut self.info,
            Severity::Notice => &mut self.notice,
            Severity::Warning => &mut self.warning,
            Severity::Alert => &mut self.alert,
            Severity::Error => &mut self.error,
            Severity::Critical => &mut self.critical,
            Severity::Emergency => &mut self.emergency,
        }
    }
}

/// A named bundle of all nine levels.
///
/// Every setter and print call on the group, and on any of its levels,
/// serializes on the group's single lock, so group-wide updates are atomic
/// with respect to emissions. Clones share the same group.
///
/// # Examples
///
/// ```
/// use grouplog::{Annotation, FormatFlags, Group, SinkSet};
/// use grouplog_sink::Capture;
///
/// let capture = Capture::new();
/// let group = Group::with_sinks(
///     "app:",
///     Annotation::OFF,
///     FormatFlags::OFF,
///     SinkSet::uniform(&capture.sink()),
/// )?;
///
/// group.warning().print("low disk")?;
/// assert_eq!(capture.lines(), ["app:WARNING: low disk"]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone)]
pub struct Group {
    shared: Arc<Shared>,
}

impl Group {
    /// Creates a group with default flags and the standard destinations.
    pub fn new(label: &str, annotation: Annotation) -> ConfigResult<Self> {
        Self::with_sinks(label, annotation, FormatFlags::default(), SinkSet::standard())
    }

    /// Creates a group with explicit flags and destinations.
    ///
    /// Fails with [`ConfigError::MissingSink`] on the first level whose
    /// destination slot is `None`.
    pub fn with_sinks(
        label: &str,
        annotation: Annotation,
        flags: FormatFlags,
        sinks: SinkSet,
    ) -> ConfigResult<Self> {
        let mut levels = Vec::with_capacity(Severity::ALL.len());
        for severity in Severity::ALL {
            let sink = sinks
                .get(severity)
                .cloned()
                .ok_or(ConfigError::MissingSink(severity))?;
            levels.push(LevelState::new(
                severity,
                format!("{label}{}", severity.token()),
                flags,
                annotation,
                sink,
            ));
        }

        let count = GROUP_COUNTER.fetch_add(1, Ordering::SeqCst) + 1;
        let state = State {
            name: format!("{label}<{count}>"),
            ignore_all: false,
            levels: levels.into_boxed_slice(),
        };
        Ok(Self {
            shared: Arc::new(Shared::new(state)),
        })
    }

    /// Creates a group with default flags and the standard destinations,
    /// panicking on a configuration error.
    ///
    /// The "must succeed" companion of [`new`](Self::new), kept as a
    /// distinct constructor for call sites where a misconfigured logger is
    /// unrecoverable anyway.
    #[must_use]
    pub fn must_new(label: &str, annotation: Annotation) -> Self {
        match Self::new(label, annotation) {
            Ok(group) => group,
            Err(err) => panic!("group construction failed: {err}"),
        }
    }

    /// [`with_sinks`](Self::with_sinks) that panics on a configuration
    /// error instead of returning it.
    #[must_use]
    pub fn must_with_sinks(
        label: &str,
        annotation: Annotation,
        flags: FormatFlags,
        sinks: SinkSet,
    ) -> Self {
        match Self::with_sinks(label, annotation, flags, sinks) {
            Ok(group) => group,
            Err(err) => panic!("group construction failed: {err}"),
        }
    }

    /// Creates a group from a [`GroupConfig`] bundle and destinations.
    pub fn from_config(config: &GroupConfig, sinks: SinkSet) -> ConfigResult<Self> {
        let group = Self::with_sinks(&config.label, config.annotation, config.flags, sinks)?;
        group.set_align_file(config.align_file);
        group.set_align_func(config.align_func);
        Ok(group)
    }

    /// The group's unique display name: the label plus a process-wide
    /// construction counter, e.g. `"glog:<3>"`.
    #[must_use]
    pub fn name(&self) -> String {
        self.shared.lock().name.clone()
    }

    /// The group-wide suppression flag.
    #[must_use]
    pub fn ignore_all(&self) -> bool {
        self.shared.lock().ignore_all
    }

    /// Sets the group-wide suppression flag.
    pub fn set_ignore_all(&self, ignore: bool) {
        self.shared.lock().ignore_all = ignore;
    }

    /// Sets the format flags of all nine levels at once.
    pub fn set_flags(&self, flags: FormatFlags) {
        self.for_each(|level| level.format.set_flags(flags));
    }

    /// Sets the annotation configuration of all nine levels at once.
    pub fn set_annotation(&self, annotation: Annotation) {
        self.for_each(|level| level.format.set_annotation(annotation));
    }

    /// Sets each level's individual suppression flag.
    pub fn set_ignore(&self, ignore: bool) {
        self.for_each(|level| level.ignore = ignore);
    }

    /// Rebuilds every level's prefix as `label` plus the level token.
    pub fn set_label(&self, label: &str) {
        self.for_each(|level| {
            level
                .format
                .set_prefix(format!("{label}{}", level.severity.token()));
        });
    }

    /// Routes all nine levels at clones of one destination.
    pub fn set_sink(&self, sink: &Sink) {
        self.for_each(|level| level.sink = sink.clone());
    }

    /// Sets every level's file field minimum width, clamped per field.
    pub fn set_align_file(&self, min_width: usize) {
        self.for_each(|level| level.format.align_mut().set_file(min_width));
    }

    /// Sets every level's function field minimum width, clamped per field.
    pub fn set_align_func(&self, min_width: usize) {
        self.for_each(|level| level.format.align_mut().set_func(min_width));
    }

    /// Emits `msg` through all nine levels in emission order, skipping
    /// suppressed levels.
    ///
    /// Every level is attempted; the first write error is returned after
    /// the sweep so one failing destination does not silence the rest.
    #[track_caller]
    pub fn println(&self, msg: impl fmt::Display) -> io::Result<()> {
        self.sweep(&Callsite::from_caller(Location::caller()), &msg.to_string())
    }

    /// [`println`](Self::println) gated on a predicate; a false predicate
    /// writes nothing.
    #[track_caller]
    pub fn println_if(&self, cond: bool, msg: impl fmt::Display) -> io::Result<()> {
        if cond { self.println(msg) } else { Ok(()) }
    }

    /// [`println`](Self::println) with an explicit call site, for macros.
    pub fn println_at(&self, callsite: Callsite, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.sweep(&callsite, &args.to_string())
    }

    /// Handle to the level with the given severity.
    #[must_use]
    pub fn level(&self, severity: Severity) -> Level {
        Level {
            shared: Arc::clone(&self.shared),
            slot: severity.index(),
        }
    }

    /// Handles to all nine levels in emission order.
    #[must_use]
    pub fn levels(&self) -> Vec<Level> {
        Severity::ALL.into_iter().map(|s| self.level(s)).collect()
    }

    /// The Trace level.
    #[must_use]
    pub fn trace(&self) -> Level {
        self.level(Severity::Trace)
    }

    /// The Debug level.
    #[must_use]
    pub fn debug(&self) -> Level {
        self.level(Severity::Debug)
    }

    /// The Info level.
    #[must_use]
    pub fn info(&self) -> Level {
        self.level(Severity::Info)
    }

    /// The Notice level.
    #[must_use]
    pub fn notice(&self) -> Level {
        self.level(Severity::Notice)
    }

    /// The Warning level.
    #[must_use]
    pub fn warning(&self) -> Level {
        self.level(Severity::Warning)
    }

    /// The Alert level.
    #[must_use]
    pub fn alert(&self) -> Level {
        self.level(Severity::Alert)
    }

    /// The Error level.
    #[must_use]
    pub fn error(&self) -> Level {
        self.level(Severity::Error)
    }

    /// The Critical level.
    #[must_use]
    pub fn critical(&self) -> Level {
        self.level(Severity::Critical)
    }

    /// The Emergency level.
    #[must_use]
    pub fn emergency(&self) -> Level {
        self.level(Severity::Emergency)
    }

    fn sweep(&self, callsite: &Callsite, text: &str) -> io::Result<()> {
        let mut state = self.shared.lock();
        let ignore_all = state.ignore_all;
        let mut first_err = None;
        for level in &mut state.levels {
            if level.suppressed(ignore_all) {
                continue;
            }
            if let Err(err) = level.emit(Some(callsite), text) {
                first_err.get_or_insert(err);
            }
        }
        first_err.map_or(Ok(()), Err)
    }

    fn for_each(&self, mut apply: impl FnMut(&mut LevelState)) {
        let mut state = self.shared.lock();
        for level in &mut state.levels {
            apply(level);
        }
    }
}

impl fmt::Debug for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Group")
            .field("name", &self.name())
            .field("ignore_all", &self.ignore_all())
            .finish_non_exhaustive()
    }
}
