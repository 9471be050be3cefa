//! Schema registry errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    /// No schema is registered under this name.
    #[error("no schema registered as '{0}'")]
    NotFound(String),

    /// The instance broke one or more schema rules; one message per violation.
    #[error("schema validation failed: {}", errors.join("; "))]
    ValidationFailed { errors: Vec<String> },

    /// A registered schema could not be compiled into a validator.
    #[error("invalid schema: {0}")]
    Generation(String),
}
