//! Error types for the seeker crate.

use thiserror::Error;

/// Errors that can occur when configuring queries or pagination.
///
/// Resolution and filtering themselves never fail; these only guard the
/// values a caller builds them from.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeekerError {
    /// A page size of zero was requested.
    #[error("page size must be at least 1, got {0}")]
    InvalidPageSize(usize),
}

/// Result type for seeker operations.
pub type Result<T> = std::result::Result<T, SeekerError>;
