//! Error handling for `generateContent` responses.
//!
//! Failed calls carry a Google API error envelope:
//! `{"error": {"code", "message", "status", "details": [...]}}`. Rate-limit
//! replies put the retry hint in a `RetryInfo` detail (`"retryDelay": "7s"`)
//! rather than, or as well as, the `Retry-After` header.

use serde::Deserialize;

use crate::error::FlowError;

const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

#[derive(Debug, Deserialize)]
struct Envelope {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: String,
    #[serde(default)]
    details: Vec<serde_json::Value>,
}

impl ApiError {
    /// Seconds from the first `RetryInfo` detail, e.g. `"7s"` or `"1.5s"`.
    fn retry_delay_secs(&self) -> Option<u64> {
        self.details.iter().find_map(|detail| {
            let delay = detail.get("retryDelay")?.as_str()?.strip_suffix('s')?;
            let (whole, fraction) = delay.split_once('.').unwrap_or((delay, ""));
            let whole: u64 = whole.parse().ok()?;
            // Round up so callers never retry early.
            if fraction.trim_end_matches('0').is_empty() {
                Some(whole)
            } else {
                Some(whole.saturating_add(1))
            }
        })
    }
}

/// Pass successful responses through; turn model API failures into [`FlowError`].
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, FlowError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let header_retry = resp
        .headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok());
    let body = resp.text().await.unwrap_or_default();
    let envelope = serde_json::from_str::<Envelope>(&body).ok();

    if status.as_u16() == 429 {
        let retry_after_secs = header_retry
            .or_else(|| envelope.as_ref().and_then(|e| e.error.retry_delay_secs()))
            .unwrap_or(DEFAULT_RETRY_AFTER_SECS);
        return Err(FlowError::RateLimited { retry_after_secs });
    }

    let message = match envelope {
        Some(Envelope { error }) if !error.status.is_empty() => {
            format!("{}: {}", error.status, error.message)
        }
        Some(Envelope { error }) => error.message,
        None => body.trim().to_string(),
    };
    Err(FlowError::Api {
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn response(status: u16, retry_after: Option<&str>, body: &str) -> reqwest::Response {
        let mut builder = ::http::Response::builder().status(status);
        if let Some(value) = retry_after {
            builder = builder.header("Retry-After", value);
        }
        reqwest::Response::from(builder.body(body.to_string()).unwrap())
    }

    #[tokio::test]
    async fn retry_delay_comes_from_the_envelope() {
        let body = r#"{"error": {"code": 429, "message": "Quota exceeded", "status": "RESOURCE_EXHAUSTED",
            "details": [{"@type": "type.googleapis.com/google.rpc.RetryInfo", "retryDelay": "6.2s"}]}}"#;
        let err = check_response(response(429, None, body)).await.unwrap_err();
        assert!(matches!(
            err,
            FlowError::RateLimited {
                retry_after_secs: 7
            }
        ));
    }

    #[tokio::test]
    async fn retry_after_header_wins() {
        let err = check_response(response(429, Some("3"), "{}")).await.unwrap_err();
        assert!(matches!(
            err,
            FlowError::RateLimited {
                retry_after_secs: 3
            }
        ));
    }

    #[tokio::test]
    async fn rate_limit_without_hint_waits_a_minute() {
        let err = check_response(response(429, None, "")).await.unwrap_err();
        assert!(matches!(
            err,
            FlowError::RateLimited {
                retry_after_secs: 60
            }
        ));
    }

    #[tokio::test]
    async fn envelope_status_and_message_are_reported() {
        let body = r#"{"error": {"code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT"}}"#;
        let err = check_response(response(400, None, body)).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "model API error (400): INVALID_ARGUMENT: API key not valid"
        );
    }

    #[tokio::test]
    async fn plain_body_is_kept() {
        let err = check_response(response(500, None, "upstream failure\n"))
            .await
            .unwrap_err();
        assert!(matches!(err, FlowError::Api { status: 500, ref message } if message == "upstream failure"));
    }
}
