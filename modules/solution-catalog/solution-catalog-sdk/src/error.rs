//! Error types for the `solution-catalog` module.
//!
//! Transport-agnostic error definitions returned by the SDK traits.

use thiserror::Error;

/// Error type for solution catalog operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolutionCatalogError {
    /// Unknown module, solution, or environment identifier.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The operation is not allowed on the target (e.g. install outside a
    /// development environment).
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// The operation conflicts with existing state (e.g. duplicate install).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The input is malformed.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SolutionCatalogError {
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    #[must_use]
    pub fn invalid_operation(message: impl Into<String>) -> Self {
        Self::InvalidOperation(message.into())
    }

    #[must_use]
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    #[must_use]
    pub const fn is_invalid_operation(&self) -> bool {
        matches!(self, Self::InvalidOperation(_))
    }

    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }

    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
