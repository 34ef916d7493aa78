// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error(
        "expected an instance of type '{expected}' for attribute '{attribute}', got '{actual}' instead"
    )]
    TypeMismatch {
        expected: &'static str,
        attribute: String,
        actual: &'static str,
    },
    #[error("attribute '{attribute}' has not been set")]
    NotInitialized { attribute: String },
    #[error("articles can only be compared with other articles")]
    NotComparable,
    #[error("field is not bound to an attribute name")]
    Unbound,
}

impl DomainError {
    pub fn not_initialized(attribute: impl Into<String>) -> Self {
        Self::NotInitialized {
            attribute: attribute.into(),
        }
    }
}
