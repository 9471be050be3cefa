//! Store and backend error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// HTTP transport error talking to the hosted backend.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Backend refused the project API key.
    #[error("backend rejected the API key for {collection}")]
    Unauthorized { collection: String },

    /// Backend has no such project or collection.
    #[error("collection {0} not found in the backend project")]
    CollectionNotFound(String),

    /// Backend returned 429 Too Many Requests.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    /// Backend payload did not match the expected record shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// Record lookup by id returned nothing.
    #[error("{entity_type} {id} not found")]
    NotFound { entity_type: &'static str, id: u32 },

    /// Every id up to `u32::MAX` is taken, so no new record can be minted.
    #[error("no {entity_type} id left to assign")]
    IdsExhausted { entity_type: &'static str },

    /// A status change not allowed by the member status machine.
    #[error("Invalid state transition: team member {id} from {from} to {to}")]
    InvalidTransition { id: u32, from: String, to: String },
}
