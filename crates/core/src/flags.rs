//! crates/core/src/flags.rs
//! Format flags and caller-annotation modes shared by every level.

/// Per-level formatting flags controlling the line prefix annotations.
///
/// A plain field struct with named preset constants rather than an integer
/// bitfield. When both file flags are set, `short_file` wins.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormatFlags {
    /// Render the date as `YYYY/MM/DD`.
    pub date: bool,
    /// Render the time as `HH:MM:SS`.
    pub time: bool,
    /// Extend the time with microseconds (`.ffffff`); implies a time field.
    pub microseconds: bool,
    /// Render the caller file as its final path component.
    pub short_file: bool,
    /// Render the caller file as the full compile-time path.
    pub long_file: bool,
}

impl FormatFlags {
    /// Every annotation disabled; lines carry only prefix and message.
    pub const OFF: Self = Self {
        date: false,
        time: false,
        microseconds: false,
        short_file: false,
        long_file: false,
    };

    /// Date, time, and short file name.
    pub const DATE_TIME_SHORT: Self = Self {
        date: true,
        time: true,
        short_file: true,
        ..Self::OFF
    };

    /// Date, time, and full file path.
    pub const DATE_TIME_LONG: Self = Self {
        date: true,
        time: true,
        long_file: true,
        ..Self::OFF
    };

    /// Date, microsecond time, and short file name.
    pub const DATE_TIME_SHORT_MICRO: Self = Self {
        microseconds: true,
        ..Self::DATE_TIME_SHORT
    };

    /// Date, microsecond time, and full file path.
    pub const DATE_TIME_LONG_MICRO: Self = Self {
        microseconds: true,
        ..Self::DATE_TIME_LONG
    };

    /// Whether any file annotation is requested.
    #[must_use]
    pub const fn wants_file(self) -> bool {
        self.short_file || self.long_file
    }

    /// Whether a time field is rendered (microseconds implies time).
    #[must_use]
    pub const fn wants_time(self) -> bool {
        self.time || self.microseconds
    }
}

impl Default for FormatFlags {
    fn default() -> Self {
        Self::DATE_TIME_SHORT
    }
}

/// How much of the caller's function path an emitted line carries.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FunctionName {
    /// No function-name annotation.
    Off,
    /// Final path segment only, e.g. `connect`.
    Base,
    /// Fully qualified path, e.g. `daemon::session::connect`.
    Full,
}

/// Caller-annotation configuration for a level.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Annotation {
    /// Function-name annotation mode.
    pub function: FunctionName,
    /// Strip the configured source root from long file paths.
    pub trim_source_root: bool,
}

impl Annotation {
    /// No function names, no path trimming.
    pub const OFF: Self = Self {
        function: FunctionName::Off,
        trim_source_root: false,
    };

    /// Base function names with source-root trimming. The default.
    pub const BASE: Self = Self {
        function: FunctionName::Base,
        trim_source_root: true,
    };

    /// Fully qualified function names with source-root trimming.
    pub const FULL: Self = Self {
        function: FunctionName::Full,
        trim_source_root: true,
    };
}

impl Default for Annotation {
    fn default() -> Self {
        Self::BASE
    }
}

/// Minimum field widths for the `file:line` and `FN:` annotations.
///
/// Each width pads its field with trailing spaces up to the configured
/// minimum so columns line up across messages. Setters clamp to the
/// per-field maximum; widths are `usize`, so no lower clamp is needed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alignment {
    file: usize,
    func: usize,
}

impl Alignment {
    /// Default minimum width of the file field.
    pub const FILE_DEFAULT: usize = 24;
    /// Largest accepted minimum width of the file field.
    pub const FILE_MAX: usize = 50;
    /// Default minimum width of the function field.
    pub const FUNC_DEFAULT: usize = 0;
    /// Largest accepted minimum width of the function field.
    pub const FUNC_MAX: usize = 50;

    /// Alignment with the default widths.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            file: Self::FILE_DEFAULT,
            func: Self::FUNC_DEFAULT,
        }
    }

    /// Minimum width of the file field.
    #[must_use]
    pub const fn file(self) -> usize {
        self.file
    }

    /// Minimum width of the function field.
    #[must_use]
    pub const fn func(self) -> usize {
        self.func
    }

    /// Sets the file field minimum width, clamped to [`Self::FILE_MAX`].
    pub fn set_file(&mut self, min_width: usize) {
        self.file = min_width.min(Self::FILE_MAX);
    }

    /// Sets the function field minimum width, clamped to [`Self::FUNC_MAX`].
    pub fn set_func(&mut self, min_width: usize) {
        self.func = min_width.min(Self::FUNC_MAX);
    }
}

impl Default for Alignment {
    fn default() -> Self {
        Self::new()
    }
}
