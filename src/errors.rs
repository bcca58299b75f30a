//! Centralized error handling.
//!
//! Provides the unified error taxonomy for the crate. Store-specific
//! failures are translated into this taxonomy at the repository boundary,
//! so callers never depend on driver error shapes.

use thiserror::Error;

/// Failures raised while converting between documents and domain entities.
///
/// A mapping failure indicates data corruption or schema drift; it is never
/// retried and always surfaces to the caller unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    #[error("missing required field `{0}`")]
    MissingField(String),

    #[error("malformed field `{field}`: {reason}")]
    Malformed { field: String, reason: String },

    #[error("codec error: {0}")]
    Codec(String),
}

impl MappingError {
    pub fn missing(field: impl Into<String>) -> Self {
        MappingError::MissingField(field.into())
    }

    pub fn malformed(field: impl Into<String>, reason: impl Into<String>) -> Self {
        MappingError::Malformed {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Repository error types.
///
/// `NotFound` and `DuplicateIdentifier` are domain-level outcomes;
/// `StoreUnavailable` and `Timeout` are transient and left to the caller
/// to retry. The repository itself never retries, keeping every operation
/// a single idempotent request.
#[derive(Error, Debug)]
pub enum RepoError {
    #[error(transparent)]
    Mapping(#[from] MappingError),

    #[error("no document with identifier `{0}`")]
    NotFound(String),

    #[error("identifier `{0}` already exists")]
    DuplicateIdentifier(String),

    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("operation exceeded its deadline")]
    Timeout,
}

impl RepoError {
    pub fn not_found(id: impl Into<String>) -> Self {
        RepoError::NotFound(id.into())
    }

    pub fn duplicate(id: impl Into<String>) -> Self {
        RepoError::DuplicateIdentifier(id.into())
    }

    pub fn unavailable(detail: impl Into<String>) -> Self {
        RepoError::StoreUnavailable(detail.into())
    }

    /// Whether a caller may reasonably retry the failed operation.
    pub fn is_transient(&self) -> bool {
        matches!(self, RepoError::StoreUnavailable(_) | RepoError::Timeout)
    }
}

/// Result type alias
pub type RepoResult<T> = Result<T, RepoError>;

/// Extension trait for Option -> RepoError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self, id: &str) -> RepoResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, id: &str) -> RepoResult<T> {
        self.ok_or_else(|| RepoError::not_found(id))
    }
}
