//! Error types for eventcal.

use thiserror::Error;

use crate::validate::ConflictReport;

/// Errors that can occur while deriving calendar data.
///
/// Incomplete records and unparseable dates are not errors: they are
/// filtered out with a diagnostic. The only fatal pipeline condition is a
/// duplicate slug in strict mode.
#[derive(Error, Debug)]
pub enum EventCalError {
    #[error("{0}")]
    DuplicateSlugs(ConflictReport),

    #[error("Invalid mode '{0}'. Expected 'strict' or 'lenient'")]
    InvalidMode(String),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),
}

/// Result type alias for eventcal operations.
pub type EventCalResult<T> = Result<T, EventCalError>;
