use harbor_schema::SchemaError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlowError {
    #[error("generative model is not configured (set HARBOR_GENAI__API_KEY)")]
    NotConfigured,

    #[error("unknown flow: {0}")]
    UnknownFlow(String),

    #[error("invalid input for {flow}: {}", errors.join("; "))]
    InvalidInput {
        flow: &'static str,
        errors: Vec<String>,
    },

    #[error("model output for {flow} does not match its schema: {}", errors.join("; "))]
    InvalidOutput {
        flow: &'static str,
        errors: Vec<String>,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("model API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("malformed model response: {0}")]
    MalformedResponse(String),

    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FlowError {
    /// Map a schema validation failure onto the input or output side.
    pub(crate) fn from_validation(flow: &'static str, error: SchemaError, input: bool) -> Self {
        match error {
            SchemaError::ValidationFailed { errors } if input => Self::InvalidInput { flow, errors },
            SchemaError::ValidationFailed { errors } => Self::InvalidOutput { flow, errors },
            other => Self::Schema(other),
        }
    }
}
