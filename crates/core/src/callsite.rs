//! crates/core/src/callsite.rs
//! Caller capture: file, line, and optional function path.

use std::panic::Location;
use std::sync::OnceLock;

/// Environment variable naming a path prefix to strip from long file paths.
pub const SOURCE_ROOT_ENV: &str = "GROUPLOG_SOURCE_ROOT";

static SOURCE_ROOT: OnceLock<Option<String>> = OnceLock::new();

/// Source-root prefix used when trimming long file paths, read once from
/// [`SOURCE_ROOT_ENV`]. A trailing separator is appended if missing so the
/// trimmed path never starts with `/`.
#[must_use]
pub fn source_root() -> Option<&'static str> {
    SOURCE_ROOT
        .get_or_init(|| {
            std::env::var(SOURCE_ROOT_ENV).ok().map(|mut root| {
                if !root.ends_with('/') {
                    root.push('/');
                }
                root
            })
        })
        .as_deref()
}

/// A captured call site.
///
/// `file` and `line` always refer to the caller; `function` is present only
/// when the capture came from the [`callsite!`](crate::callsite) macro,
/// which can see the enclosing function at expansion time. Print methods
/// annotated `#[track_caller]` produce callsites without a function.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Callsite {
    file: &'static str,
    line: u32,
    function: Option<&'static str>,
}

impl Callsite {
    /// Creates a call site from explicit parts.
    #[must_use]
    pub const fn new(file: &'static str, line: u32, function: Option<&'static str>) -> Self {
        Self {
            file,
            line,
            function,
        }
    }

    /// Creates a call site from a tracked caller location (no function name).
    #[must_use]
    pub fn from_caller(location: &'static Location<'static>) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
            function: None,
        }
    }

    /// Compile-time path of the caller's file.
    #[must_use]
    pub const fn file(&self) -> &'static str {
        self.file
    }

    /// Final component of the caller's file path.
    #[must_use]
    pub fn file_base(&self) -> &'static str {
        self.file
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(self.file)
    }

    /// Caller's file path with the configured source root stripped.
    #[must_use]
    pub fn file_trimmed(&self) -> &'static str {
        match source_root() {
            Some(root) => self.file.strip_prefix(root).unwrap_or(self.file),
            None => self.file,
        }
    }

    /// One-based line number of the call.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Fully qualified function path, when captured by the macro.
    #[must_use]
    pub const fn function(&self) -> Option<&'static str> {
        self.function
    }

    /// Final `::` segment of the function path.
    #[must_use]
    pub fn function_base(&self) -> Option<&'static str> {
        self.function
            .map(|path| path.rsplit("::").next().unwrap_or(path))
    }
}

/// Captures the current call site, including the enclosing function path.
///
/// The function path comes from `std::any::type_name` applied to an item
/// nested in the expansion, so the capture is static and does not touch the
/// runtime call stack.
///
/// # Examples
///
/// ```
/// let here = grouplog_core::callsite!();
/// assert!(here.file().ends_with(".rs"));
/// assert!(here.function().is_some());
/// ```
#[macro_export]
macro_rules! callsite {
    () => {{
        fn __here() {}
        fn __name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let __path = __name_of(__here);
        let __path = &__path[..__path.len() - "::__here".len()];
        $crate::Callsite::new(
            ::std::file!(),
            ::std::line!(),
            ::std::option::Option::Some(__path),
        )
    }};
}
