#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `grouplog` bundles nine fixed logging severities (Trace through
//! Emergency) under a shared label so that one program can run several
//! independently routed, independently silenced logger groups whose output
//! stays trivially greppable: `glog:TRACE:` versus `blog:ERROR:`.
//!
//! # Design
//!
//! A [`Group`] owns nine level records behind one mutex; [`Level`] handles
//! index into it, so group-wide updates (label, flags, destinations,
//! ignore-all) are atomic with respect to every emission. Each level
//! carries its own [`Sink`], format flags, caller annotations, alignment
//! widths, and emission counters. A level's effective suppression is its
//! own ignore flag OR the group's ignore-all switch; `fatal`/`panic`
//! variants bypass suppression, write, and then terminate or unwind.
//!
//! # Errors
//!
//! Construction fails with [`ConfigError::MissingSink`] when a destination
//! slot was left unset ([`Group::must_new`] panics instead). Print-family
//! calls return the destination's `io::Error` once per failed write; the
//! caller decides whether to surface it.
//!
//! # Examples
//!
//! ```
//! use grouplog::{Annotation, FormatFlags, Group, SinkSet};
//! use grouplog_sink::Capture;
//!
//! let capture = Capture::new();
//! let group = Group::with_sinks(
//!     "glog:",
//!     Annotation::OFF,
//!     FormatFlags::OFF,
//!     SinkSet::uniform(&capture.sink()),
//! )?;
//!
//! group.info().print("service started")?;
//! group.error().print_if(false, "not emitted")?;
//! group.notice().set_ignore(true);
//! group.notice().print("suppressed")?;
//!
//! assert_eq!(capture.lines(), ["glog:INFO: service started"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod config;
mod error;
mod group;
mod level;
mod macros;
mod state;
#[cfg(feature = "tracing")]
pub mod tracing_bridge;

pub use config::GroupConfig;
pub use error::{ConfigError, ConfigResult};
pub use group::{Group, SinkSet};
pub use level::{Level, LevelStats};

pub use grouplog_core::{
    Alignment, Annotation, Callsite, FormatFlags, FunctionName, LineFormat, SOURCE_ROOT_ENV,
    Severity, callsite, source_root,
};
pub use grouplog_sink::{Capture, Sink};
