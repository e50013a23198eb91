//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Raised at construction (or validated mutation) time. A failed check never
/// leaves a partially built value behind.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation. The message names the field and the
    /// rejected value.
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Message without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            DomainError::Validation(msg) => msg.as_str(),
        }
    }
}
