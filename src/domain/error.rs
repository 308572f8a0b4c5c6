//! Domain-level errors.
//!
//! These errors represent business rule violations. They are independent
//! of infrastructure concerns (HTTP, database).

use thiserror::Error;

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Malformed or empty email address
    #[error("{0}")]
    InvalidEmail(String),

    /// Empty, whitespace-only, or over-long name
    #[error("{0}")]
    InvalidName(String),

    /// Activation requested for a user that is already active
    #[error("User is already active")]
    AlreadyActive,

    /// Deactivation requested for a user that is already inactive
    #[error("User is already inactive")]
    AlreadyInactive,
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
