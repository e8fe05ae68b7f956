//! Domain errors for RecipeBox

use thiserror::Error;

use crate::value_objects::Unit;

/// Core domain errors
///
/// Every variant is raised synchronously by a constructor or mutator and names
/// the single input it rejects.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Validation error: {field} - {reason}")]
    ValidationError { field: String, reason: String },

    #[error("\"{name}\" is not a valid unit")]
    UnknownUnit { name: String },

    #[error("Invalid image uri \"{uri}\": {reason}")]
    InvalidImageUri { uri: String, reason: String },

    #[error("Unit '{from}' is not convertible to '{to}'")]
    ConversionUnavailable { from: Unit, to: Unit },
}

impl DomainError {
    pub(crate) fn validation(field: &str, reason: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    /// Name of the input this error is attributed to
    pub fn field(&self) -> &str {
        match self {
            DomainError::ValidationError { field, .. } => field,
            DomainError::UnknownUnit { .. } => "unit",
            DomainError::InvalidImageUri { .. } => "image",
            DomainError::ConversionUnavailable { .. } => "unit",
        }
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
