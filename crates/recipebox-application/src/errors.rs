//! Application layer error types
//!
//! These errors represent application-level failures that are suitable
//! for API/UI consumption. They wrap domain errors with additional context.

use thiserror::Error;

use recipebox_domain::errors::DomainError;

/// Application layer result type
pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Application layer errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApplicationError {
    // === Validation Errors ===

    /// Caller input failed value-object validation
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    /// The converter has no ratio for the requested unit pair
    #[error("Conversion unavailable: {0}")]
    ConversionUnavailable(String),

    // === Infrastructure Errors ===

    /// Repository operation failed
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl ApplicationError {
    /// Whether the error was caused by caller input rather than the system
    pub fn is_caller_error(&self) -> bool {
        !matches!(self, ApplicationError::RepositoryError(_))
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::ConversionUnavailable { .. } => {
                ApplicationError::ConversionUnavailable(err.to_string())
            }
            other => ApplicationError::ValidationFailed(other.to_string()),
        }
    }
}
