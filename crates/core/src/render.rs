//! crates/core/src/render.rs
//! Single-pass composition of an output line from its configured parts.

use std::fmt::Write as _;

use chrono::{DateTime, Local};

use crate::callsite::Callsite;
use crate::flags::{Alignment, Annotation, FormatFlags, FunctionName};

/// Line-composition state for one level: prefix, flags, annotations, and
/// field alignment.
///
/// [`render`](Self::render) performs the whole composition in one linear
/// pass: prefix, optional date/time, optional padded `file:line`, optional
/// padded `FN:name()`, then the message with a guaranteed trailing newline.
///
/// # Examples
///
/// ```
/// use grouplog_core::{Annotation, Callsite, FormatFlags, LineFormat};
///
/// let mut format = LineFormat::new("glog:TRACE: ", FormatFlags::OFF, Annotation::OFF);
/// format.align_mut().set_file(0);
///
/// let line = format.render(None, "hello");
/// assert_eq!(line, "glog:TRACE: hello\n");
///
/// let mut format = LineFormat::new(
///     "",
///     FormatFlags { short_file: true, ..FormatFlags::OFF },
///     Annotation::OFF,
/// );
/// format.align_mut().set_file(0);
/// let line = format.render(Some(&Callsite::new("src/io/copy.rs", 41, None)), "copied");
/// assert_eq!(line, "copy.rs:41 copied\n");
/// ```
#[derive(Clone, Debug)]
pub struct LineFormat {
    prefix: String,
    flags: FormatFlags,
    annotation: Annotation,
    align: Alignment,
}

impl LineFormat {
    /// Creates a format with the default alignment widths.
    pub fn new(prefix: impl Into<String>, flags: FormatFlags, annotation: Annotation) -> Self {
        Self {
            prefix: prefix.into(),
            flags,
            annotation,
            align: Alignment::new(),
        }
    }

    /// The full line prefix, label and level token included.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Replaces the line prefix.
    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        self.prefix = prefix.into();
    }

    /// Current format flags.
    #[must_use]
    pub const fn flags(&self) -> FormatFlags {
        self.flags
    }

    /// Replaces the format flags.
    pub fn set_flags(&mut self, flags: FormatFlags) {
        self.flags = flags;
    }

    /// Current annotation configuration.
    #[must_use]
    pub const fn annotation(&self) -> Annotation {
        self.annotation
    }

    /// Replaces the annotation configuration.
    pub fn set_annotation(&mut self, annotation: Annotation) {
        self.annotation = annotation;
    }

    /// Field alignment widths.
    #[must_use]
    pub const fn align(&self) -> Alignment {
        self.align
    }

    /// Mutable access to the field alignment widths.
    pub fn align_mut(&mut self) -> &mut Alignment {
        &mut self.align
    }

    /// Composes one output line for `msg`.
    ///
    /// Annotations that need a [`Callsite`] are skipped when none is
    /// supplied. A trailing newline is appended unless `msg` already ends
    /// with one.
    #[must_use]
    pub fn render(&self, callsite: Option<&Callsite>, msg: &str) -> String {
        self.render_at(callsite, msg, Local::now())
    }

    /// [`render`](Self::render) with an explicit timestamp, for tests.
    #[must_use]
    pub fn render_at(&self, callsite: Option<&Callsite>, msg: &str, now: DateTime<Local>) -> String {
        let mut line = String::with_capacity(self.prefix.len() + msg.len() + 48);
        line.push_str(&self.prefix);

        if self.flags.date {
            let _ = write!(line, "{} ", now.format("%Y/%m/%d"));
        }
        if self.flags.wants_time() {
            if self.flags.microseconds {
                let _ = write!(line, "{} ", now.format("%H:%M:%S%.6f"));
            } else {
                let _ = write!(line, "{} ", now.format("%H:%M:%S"));
            }
        }

        if self.flags.wants_file() {
            if let Some(callsite) = callsite {
                let start = line.len();
                let file = if self.flags.short_file {
                    callsite.file_base()
                } else if self.annotation.trim_source_root {
                    callsite.file_trimmed()
                } else {
                    callsite.file()
                };
                let _ = write!(line, "{}:{} ", file, callsite.line());
                pad_field(&mut line, start, self.align.file());
            }
        }

        if let Some(function) = self.function_name(callsite) {
            let start = line.len();
            let _ = write!(line, "FN:{function}() ");
            pad_field(&mut line, start, self.align.func());
        }

        line.push_str(msg);
        if !line.ends_with('\n') {
            line.push('\n');
        }
        line
    }

    fn function_name(&self, callsite: Option<&Callsite>) -> Option<&'static str> {
        let callsite = callsite?;
        match self.annotation.function {
            FunctionName::Off => None,
            FunctionName::Base => callsite.function_base(),
            FunctionName::Full => callsite.function(),
        }
    }
}

/// Pads the field that started at byte `start` with trailing spaces up to
/// `min_width`.
fn pad_field(line: &mut String, start: usize, min_width: usize) {
    let width = line.len() - start;
    for _ in width..min_width {
        line.push(' ');
    }
}
