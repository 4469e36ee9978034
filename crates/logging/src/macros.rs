//! crates/logging/src/macros.rs
//! Emission macros that capture the enclosing function at the call site.
//!
//! The print methods on [`Level`](crate::Level) know the caller's file and
//! line, but only a macro expanded inside the calling function can name
//! that function. These wrappers pair `callsite!()` with the explicit
//! call-site entry points so `FN:` annotations carry real names.

/// Formats and emits through a level, capturing the enclosing function.
///
/// # Example
/// ```
/// use grouplog::{Annotation, FormatFlags, Level, Severity, print_log};
/// use grouplog_sink::Capture;
///
/// let capture = Capture::new();
/// let level = Level::standalone(
///     Severity::Debug,
///     "x:DEBUG: ",
///     FormatFlags::OFF,
///     Annotation::BASE,
///     capture.sink(),
/// );
///
/// print_log!(level, "answer {}", 42)?;
/// assert!(capture.text().contains("FN:"));
/// assert!(capture.text().ends_with("answer 42\n"));
/// # Ok::<(), std::io::Error>(())
/// ```
#[macro_export]
macro_rules! print_log {
    ($level:expr, $($arg:tt)*) => {
        $level.print_at($crate::callsite!(), ::std::format_args!($($arg)*))
    };
}

/// Conditional form of [`print_log!`]; a false predicate writes nothing.
///
/// # Example
/// ```ignore
/// cond_log!(level, attempts > 3, "still failing after {attempts} tries");
/// ```
#[macro_export]
macro_rules! cond_log {
    ($level:expr, $cond:expr, $($arg:tt)*) => {
        $level.print_at_if($cond, $crate::callsite!(), ::std::format_args!($($arg)*))
    };
}

/// Emits regardless of suppression, then exits the process with code 1.
///
/// # Example
/// ```ignore
/// fatal_log!(level, "unrecoverable: {err}");
/// ```
#[macro_export]
macro_rules! fatal_log {
    ($level:expr, $($arg:tt)*) => {
        $level.fatal_at($crate::callsite!(), ::std::format_args!($($arg)*))
    };
}

/// Emits regardless of suppression, then panics with the message.
///
/// # Example
/// ```ignore
/// panic_log!(level, "invariant broken: {detail}");
/// ```
#[macro_export]
macro_rules! panic_log {
    ($level:expr, $($arg:tt)*) => {
        $level.panic_at($crate::callsite!(), ::std::format_args!($($arg)*))
    };
}
