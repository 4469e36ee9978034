#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `grouplog-core` holds the pieces every grouplog level shares: the nine
//! fixed severities, the per-level [`FormatFlags`] and caller
//! [`Annotation`] configuration, [`Callsite`] capture, and the
//! [`LineFormat`] renderer that composes one output line per emission.
//!
//! # Design
//!
//! Rendering is a single linear pass with no intermediate records: prefix,
//! optional date/time, optional padded `file:line`, optional padded
//! `FN:name()`, then the message. Caller file and line come from
//! `#[track_caller]` locations or from the [`callsite!`] macro, which also
//! captures the enclosing function path statically; nothing inspects the
//! runtime stack.
//!
//! # Examples
//!
//! ```
//! use grouplog_core::{Annotation, FormatFlags, LineFormat, Severity, callsite};
//!
//! let mut format = LineFormat::new(
//!     format!("demo:{}", Severity::Info.token()),
//!     FormatFlags::OFF,
//!     Annotation::OFF,
//! );
//! format.align_mut().set_file(0);
//!
//! let line = format.render(Some(&callsite!()), "ready");
//! assert_eq!(line, "demo:INFO: ready\n");
//! ```

mod callsite;
mod flags;
mod render;
mod severity;

pub use callsite::{Callsite, SOURCE_ROOT_ENV, source_root};
pub use flags::{Alignment, Annotation, FormatFlags, FunctionName};
pub use render::LineFormat;
pub use severity::Severity;
