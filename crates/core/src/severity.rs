//! crates/core/src/severity.rs
//! The nine fixed logging severities and their per-level defaults.

use std::fmt;

/// Severity of an emitted log line.
///
/// The nine levels are fixed; [`Severity::ALL`] lists them in emission
/// order, which is also the order a group walks when printing through every
/// level.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    /// Fine-grained flow tracing.
    Trace,
    /// Developer diagnostics.
    Debug,
    /// Routine informational output.
    Info,
    /// Normal but noteworthy events.
    Notice,
    /// Something unexpected that does not stop the program.
    Warning,
    /// A condition that should be acted on promptly.
    Alert,
    /// An operation failed.
    Error,
    /// A failure that threatens further operation.
    Critical,
    /// The program cannot continue safely.
    Emergency,
}

impl Severity {
    /// All severities in emission order.
    pub const ALL: [Self; 9] = [
        Self::Trace,
        Self::Debug,
        Self::Info,
        Self::Notice,
        Self::Warning,
        Self::Alert,
        Self::Error,
        Self::Critical,
        Self::Emergency,
    ];

    /// Base label token appended to a group label, trailing space included.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Trace => "TRACE: ",
            Self::Debug => "DEBUG: ",
            Self::Info => "INFO: ",
            Self::Notice => "NOTICE: ",
            Self::Warning => "WARNING: ",
            Self::Alert => "ALERT: ",
            Self::Error => "ERROR: ",
            Self::Critical => "CRITICAL: ",
            Self::Emergency => "EMERGENCY: ",
        }
    }

    /// Mixed-case level name, e.g. `"Notice"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Trace => "Trace",
            Self::Debug => "Debug",
            Self::Info => "Info",
            Self::Notice => "Notice",
            Self::Warning => "Warning",
            Self::Alert => "Alert",
            Self::Error => "Error",
            Self::Critical => "Critical",
            Self::Emergency => "Emergency",
        }
    }

    /// Whether the level defaults to the standard error stream.
    ///
    /// Error, Critical, and Emergency default to stderr; the remaining six
    /// levels default to stdout.
    #[must_use]
    pub const fn uses_stderr(self) -> bool {
        matches!(self, Self::Error | Self::Critical | Self::Emergency)
    }

    /// Position of the level in [`Severity::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
