//! Domain-level errors.
//!
//! These errors represent business rule violations and domain logic failures.
//! They are independent of infrastructure concerns (database, CLI).

use thiserror::Error;

use crate::validation::RecordErrors;

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone)]
pub enum DomainError {
    /// Validation failed for a single input
    #[error("Validation error: {0}")]
    Validation(String),

    /// A record failed one or more field/base validations
    #[error("Validation failed: {0}")]
    Invalid(RecordErrors),
}

impl DomainError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        DomainError::Validation(msg.into())
    }
}

impl From<RecordErrors> for DomainError {
    fn from(errors: RecordErrors) -> Self {
        DomainError::Invalid(errors)
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
