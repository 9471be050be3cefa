//! Cross-cutting error types for Harbor.
//!
//! Domain-specific errors (e.g., `StoreError`, `FlowError`) are defined in
//! their respective crates. They converge into `anyhow` in `harbor-cli`.

use thiserror::Error;

/// Errors that can be raised by any Harbor crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation (format, unknown enum value).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    /// Shorthand for a [`CoreError::NotFound`] on a numeric id.
    #[must_use]
    pub fn not_found(entity_type: &str, id: u32) -> Self {
        Self::NotFound {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        }
    }
}
