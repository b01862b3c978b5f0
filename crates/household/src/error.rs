use thiserror::Error;

/// Domain-specific errors for roster operations.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("no roster member with id {0}")]
    PersonNotFound(String),
}

/// Result type for roster operations that may fail with [`RosterError`].
pub type RosterResult<T> = Result<T, RosterError>;
