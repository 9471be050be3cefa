//! Status mapping for hosted collection responses.

use crate::error::StoreError;

/// Body excerpts longer than this are cut before they land in an error.
const MAX_BODY_EXCERPT: usize = 200;

/// Retry hint used when the backend sends 429 without a usable `Retry-After`.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Map a collection response onto [`StoreError`], passing successes through.
///
/// - 401/403: the project API key was refused.
/// - 404: the project or the collection does not exist.
/// - 429: rate limited; `Retry-After` is read as whole seconds.
/// - anything else unsuccessful: [`StoreError::Api`] with a body excerpt.
pub async fn check_collection(
    resp: reqwest::Response,
    collection: &str,
) -> Result<reqwest::Response, StoreError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    match status.as_u16() {
        401 | 403 => Err(StoreError::Unauthorized {
            collection: collection.to_string(),
        }),
        404 => Err(StoreError::CollectionNotFound(collection.to_string())),
        429 => Err(StoreError::RateLimited {
            retry_after_secs: retry_after_secs(&resp),
        }),
        code => {
            let body = resp.text().await.unwrap_or_default();
            Err(StoreError::Api {
                status: code,
                message: format!("{collection}: {}", excerpt(body.trim())),
            })
        }
    }
}

fn retry_after_secs(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}

fn excerpt(body: &str) -> String {
    match body.char_indices().nth(MAX_BODY_EXCERPT) {
        Some((cut, _)) => format!("{}…", &body[..cut]),
        None => body.to_string(),
    }
}
