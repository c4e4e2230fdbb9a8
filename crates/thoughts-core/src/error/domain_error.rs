//! Domain errors - error types for the domain layer

use thiserror::Error;
use validator::ValidationErrors;

/// Domain layer errors
///
/// A like against an id that matches no row is a store error like any
/// other; callers cannot tell it apart from a failed query.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Thought validation failed: {0}")]
    InvalidThought(#[from] ValidationErrors),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidThought(_) => "VALIDATION_ERROR",
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidThought(_))
    }

    /// Field-level validation details, if any
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::InvalidThought(errors) => Some(errors),
            _ => None,
        }
    }
}
