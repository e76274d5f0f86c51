//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, caller-visible failures. Missing values
/// from lookups (`get`, `remove`) are modeled as `Option`, not as errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A caller-supplied value violated a precondition (blank name, negative
    /// price or weight, non-positive capacity).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An operation targeted an identifier that is not present.
    #[error("not found: {0}")]
    NotFound(String),
}

impl DomainError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// The bare message, without the variant prefix added by `Display`.
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidArgument(msg) | Self::NotFound(msg) => msg,
        }
    }
}
