//! Error types for layout operations.

use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum LayoutError {
    /// An event's start or end could not be parsed as a datetime.
    /// Carries the offending input text verbatim.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// The configured timezone is not a valid IANA identifier.
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
