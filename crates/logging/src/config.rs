//! crates/logging/src/config.rs
//! Construction-time configuration bundle for a group.

use grouplog_core::{Alignment, Annotation, FormatFlags};

/// Everything a group needs besides its destinations.
///
/// The bundle exists so deployments can keep logger settings in
/// configuration files; with the `serde` feature it derives the usual
/// serialization traits. Destinations stay out of the bundle because
/// writers are runtime handles, not data.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupConfig {
    /// Group label prepended to every level token.
    pub label: String,
    /// Format flags applied to all nine levels.
    pub flags: FormatFlags,
    /// Annotation configuration applied to all nine levels.
    pub annotation: Annotation,
    /// Minimum width of the file field, clamped on application.
    pub align_file: usize,
    /// Minimum width of the function field, clamped on application.
    pub align_func: usize,
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self {
            label: String::new(),
            flags: FormatFlags::default(),
            annotation: Annotation::default(),
            align_file: Alignment::FILE_DEFAULT,
            align_func: Alignment::FUNC_DEFAULT,
        }
    }
}
