//! crates/logging/src/level.rs
//! A single severity's handle: print family, routing, and suppression.

use std::fmt;
use std::io;
use std::panic::Location;
use std::sync::Arc;

use grouplog_core::{Annotation, Callsite, FormatFlags, Severity};
use grouplog_sink::Sink;

use crate::state::{LevelState, Shared, State};

/// Emission counters for one level.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct LevelStats {
    /// Lines handed to the destination.
    pub lines: u64,
    /// Bytes of composed output handed to the destination.
    pub bytes: u64,
}

/// Handle to one logging level.
///
/// Levels obtained from a [`Group`](crate::Group) share the group's lock,
/// so every setter and print call serializes with the rest of the group.
/// A standalone level owns a private lock of the same shape.
///
/// Print-family methods return the destination's `io::Error` once per
/// failed write; callers are free to ignore it. All of them are
/// `#[track_caller]`, so file/line annotations name the real call site.
/// Function-name annotations additionally need the enclosing function,
/// which only the [`print_log!`](crate::print_log) family of macros can
/// capture.
///
/// # Examples
///
/// ```
/// use grouplog::{Annotation, FormatFlags, Level, Severity};
/// use grouplog_sink::Capture;
///
/// let capture = Capture::new();
/// let level = Level::standalone(
///     Severity::Info,
///     "app:INFO: ",
///     FormatFlags::OFF,
///     Annotation::OFF,
///     capture.sink(),
/// );
///
/// level.print("ready")?;
/// assert_eq!(capture.lines(), ["app:INFO: ready"]);
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone)]
pub struct Level {
    pub(crate) shared: Arc<Shared>,
    pub(crate) slot: usize,
}

impl Level {
    /// Creates a level that belongs to no group.
    ///
    /// The level owns a private lock, so independent levels never contend
    /// with each other. `prefix` is the full line prefix; group-owned
    /// levels derive theirs from the group label and the severity token.
    pub fn standalone(
        severity: Severity,
        prefix: impl Into<String>,
        flags: FormatFlags,
        annotation: Annotation,
        sink: Sink,
    ) -> Self {
        let prefix = prefix.into();
        let state = State {
            name: prefix.clone(),
            ignore_all: false,
            levels: Box::new([LevelState::new(severity, prefix, flags, annotation, sink)]),
        };
        Self {
            shared: Arc::new(Shared::new(state)),
            slot: 0,
        }
    }

    /// The conventional process-wide trace level, explicitly constructed.
    ///
    /// Replaces the package-global trace logger of similar facilities:
    /// build one at the process entry point and pass it where needed.
    #[must_use]
    pub fn default_trace() -> Self {
        Self::standalone(
            Severity::Trace,
            "GTRACE: ",
            FormatFlags::default(),
            Annotation::default(),
            Sink::stdout(),
        )
    }

    /// The level's severity.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.with(|level| level.severity)
    }

    /// The severity's mixed-case name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.severity().name()
    }

    /// Current format flags.
    #[must_use]
    pub fn flags(&self) -> FormatFlags {
        self.with(|level| level.format.flags())
    }

    /// Replaces the format flags.
    pub fn set_flags(&self, flags: FormatFlags) {
        self.with_mut(|level| level.format.set_flags(flags));
    }

    /// Current annotation configuration.
    #[must_use]
    pub fn annotation(&self) -> Annotation {
        self.with(|level| level.format.annotation())
    }

    /// Replaces the annotation configuration.
    pub fn set_annotation(&self, annotation: Annotation) {
        self.with_mut(|level| level.format.set_annotation(annotation));
    }

    /// The level's own suppression flag.
    #[must_use]
    pub fn ignore(&self) -> bool {
        self.with(|level| level.ignore)
    }

    /// Sets the level's own suppression flag.
    pub fn set_ignore(&self, ignore: bool) {
        self.with_mut(|level| level.ignore = ignore);
    }

    /// A handle to the level's destination.
    #[must_use]
    pub fn sink(&self) -> Sink {
        self.with(|level| level.sink.clone())
    }

    /// Replaces the level's destination.
    pub fn set_sink(&self, sink: Sink) {
        self.with_mut(|level| level.sink = sink);
    }

    /// The full line prefix, label and level token included.
    #[must_use]
    pub fn prefix(&self) -> String {
        self.with(|level| level.format.prefix().to_owned())
    }

    /// Overrides the full line prefix.
    ///
    /// A later group-wide `set_label` rebuilds the prefix from the label
    /// and the level token, replacing this override.
    pub fn set_prefix(&self, prefix: impl Into<String>) {
        let prefix = prefix.into();
        self.with_mut(|level| level.format.set_prefix(prefix));
    }

    /// Minimum width of the file field.
    #[must_use]
    pub fn align_file(&self) -> usize {
        self.with(|level| level.format.align().file())
    }

    /// Sets the file field minimum width, clamped to the field maximum.
    pub fn set_align_file(&self, min_width: usize) {
        self.with_mut(|level| level.format.align_mut().set_file(min_width));
    }

    /// Minimum width of the function field.
    #[must_use]
    pub fn align_func(&self) -> usize {
        self.with(|level| level.format.align().func())
    }

    /// Sets the function field minimum width, clamped to the field maximum.
    pub fn set_align_func(&self, min_width: usize) {
        self.with_mut(|level| level.format.align_mut().set_func(min_width));
    }

    /// Emission counters.
    #[must_use]
    pub fn stats(&self) -> LevelStats {
        self.with(|level| LevelStats {
            lines: level.lines,
            bytes: level.bytes,
        })
    }

    /// Emits `msg` unless the level is suppressed.
    #[track_caller]
    pub fn print(&self, msg: impl fmt::Display) -> io::Result<()> {
        self.emit(Callsite::from_caller(Location::caller()), &msg.to_string(), false)
    }

    /// Emits preformatted arguments unless the level is suppressed.
    #[track_caller]
    pub fn print_fmt(&self, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.emit(Callsite::from_caller(Location::caller()), &args.to_string(), false)
    }

    /// Emits `msg` when `cond` holds and the level is not suppressed.
    ///
    /// A false predicate writes nothing and returns `Ok(())`.
    #[track_caller]
    pub fn print_if(&self, cond: bool, msg: impl fmt::Display) -> io::Result<()> {
        if cond { self.print(msg) } else { Ok(()) }
    }

    /// Formatted variant of [`print_if`](Self::print_if).
    #[track_caller]
    pub fn print_fmt_if(&self, cond: bool, args: fmt::Arguments<'_>) -> io::Result<()> {
        if cond { self.print_fmt(args) } else { Ok(()) }
    }

    /// Emits with an explicit call site. The emission macros use this to
    /// carry function names captured at their expansion site.
    pub fn print_at(&self, callsite: Callsite, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.emit(callsite, &args.to_string(), false)
    }

    /// Conditional variant of [`print_at`](Self::print_at).
    pub fn print_at_if(
        &self,
        cond: bool,
        callsite: Callsite,
        args: fmt::Arguments<'_>,
    ) -> io::Result<()> {
        if cond {
            self.print_at(callsite, args)
        } else {
            Ok(())
        }
    }

    /// Emits regardless of suppression, then terminates the process with
    /// exit code 1. The write's outcome does not change the exit.
    #[track_caller]
    pub fn fatal(&self, msg: impl fmt::Display) -> ! {
        let _ = self.emit(Callsite::from_caller(Location::caller()), &msg.to_string(), true);
        std::process::exit(1);
    }

    /// Formatted variant of [`fatal`](Self::fatal).
    #[track_caller]
    pub fn fatal_fmt(&self, args: fmt::Arguments<'_>) -> ! {
        let _ = self.emit(Callsite::from_caller(Location::caller()), &args.to_string(), true);
        std::process::exit(1);
    }

    /// [`fatal`](Self::fatal) with an explicit call site, for the macros.
    pub fn fatal_at(&self, callsite: Callsite, args: fmt::Arguments<'_>) -> ! {
        let _ = self.emit(callsite, &args.to_string(), true);
        std::process::exit(1);
    }

    /// Emits regardless of suppression, then panics with the message so
    /// the failure unwinds instead of exiting.
    #[track_caller]
    pub fn panic(&self, msg: impl fmt::Display) -> ! {
        let text = msg.to_string();
        let _ = self.emit(Callsite::from_caller(Location::caller()), &text, true);
        panic!("{text}");
    }

    /// Formatted variant of [`panic`](Self::panic).
    #[track_caller]
    pub fn panic_fmt(&self, args: fmt::Arguments<'_>) -> ! {
        let text = args.to_string();
        let _ = self.emit(Callsite::from_caller(Location::caller()), &text, true);
        panic!("{text}");
    }

    /// [`panic`](Self::panic) with an explicit call site, for the macros.
    pub fn panic_at(&self, callsite: Callsite, args: fmt::Arguments<'_>) -> ! {
        let text = args.to_string();
        let _ = self.emit(callsite, &text, true);
        panic!("{text}");
    }

    /// Renders and writes one line under the shared lock. `force` bypasses
    /// suppression for the fatal and panic paths.
    fn emit(&self, callsite: Callsite, text: &str, force: bool) -> io::Result<()> {
        let mut state = self.shared.lock();
        if !force && state.levels[self.slot].suppressed(state.ignore_all) {
            return Ok(());
        }
        state.levels[self.slot].emit(Some(&callsite), text)
    }

    fn with<T>(&self, read: impl FnOnce(&LevelState) -> T) -> T {
        let state = self.shared.lock();
        read(&state.levels[self.slot])
    }

    fn with_mut<T>(&self, write: impl FnOnce(&mut LevelState) -> T) -> T {
        let mut state = self.shared.lock();
        write(&mut state.levels[self.slot])
    }
}

impl fmt::Debug for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Level")
            .field("severity", &self.severity())
            .field("ignore", &self.ignore())
            .finish_non_exhaustive()
    }
}
