//! Cross-cutting error types for Zumbara.
//!
//! Domain-specific errors (e.g., `ApiError`, `NavigatorError`) live in their
//! respective crates. They converge into `anyhow` at the `zmb-cli` boundary.

use thiserror::Error;

use crate::validate::ValidationError;

/// Errors that can be raised by any Zumbara crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Form input failed validation before submission.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A flat category list does not describe a forest.
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
