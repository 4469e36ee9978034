//! crates/logging/src/error.rs
//!
//! Error types for group construction.

use grouplog_core::Severity;
use thiserror::Error;

/// Result type for group construction.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while constructing a group.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A level's destination was left unset.
    #[error("{0} sink is unset; use Sink::discard() to silence a level")]
    MissingSink(Severity),
}
