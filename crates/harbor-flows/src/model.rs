//! Generative model clients.

use std::future::Future;
use std::time::Duration;

use harbor_config::GenAiConfig;
use serde_json::{Value, json};

use crate::error::FlowError;
use crate::http::check_response;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// One prompt for one flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelRequest {
    pub flow: &'static str,
    pub prompt: String,
}

/// Anything that turns a prompt into a JSON value.
pub trait GenerativeModel {
    fn generate(
        &self,
        request: &ModelRequest,
    ) -> impl Future<Output = Result<Value, FlowError>> + Send;
}

/// Model used when no API key is configured. Every call fails with
/// [`FlowError::NotConfigured`], so only fallback flows produce output.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableModel;

impl GenerativeModel for UnavailableModel {
    async fn generate(&self, request: &ModelRequest) -> Result<Value, FlowError> {
        tracing::debug!(flow = request.flow, "model unavailable");
        Err(FlowError::NotConfigured)
    }
}

/// `generateContent` client for the configured generative-language API.
///
/// One attempt per call; the request timeout comes from
/// `genai.request_timeout_secs`.
#[derive(Debug, Clone)]
pub struct HttpModel {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl HttpModel {
    /// # Errors
    ///
    /// Returns [`FlowError::NotConfigured`] without an API key, or
    /// [`FlowError::Http`] if the client cannot be built.
    pub fn new(config: &GenAiConfig) -> Result<Self, FlowError> {
        if !config.is_configured() {
            return Err(FlowError::NotConfigured);
        }
        let http = reqwest::Client::builder()
            .user_agent("harbor/0.1")
            .timeout(Duration::from_secs(config.request_timeout_secs.max(1)))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url,
            urlencoding::encode(&self.model)
        )
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    fn request_body(prompt: &str) -> Value {
        json!({
            "contents": [{ "role": "user", "parts": [{ "text": prompt }] }],
            "generationConfig": { "responseMimeType": "application/json" }
        })
    }
}

impl GenerativeModel for HttpModel {
    async fn generate(&self, request: &ModelRequest) -> Result<Value, FlowError> {
        tracing::debug!(flow = request.flow, model = %self.model, "calling generative model");
        let resp = self
            .http
            .post(self.endpoint())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&Self::request_body(&request.prompt))
            .send()
            .await?;
        let resp = check_response(resp).await?;
        let body: Value = resp.json().await?;
        let text = candidate_text(&body)?;
        extract_json(text)
    }
}

/// Either a live client or the unavailable placeholder, chosen from config.
#[derive(Debug, Clone)]
pub enum ConfiguredModel {
    Http(HttpModel),
    Unavailable(UnavailableModel),
}

impl ConfiguredModel {
    /// Build the live client when `genai` is configured.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::Http`] if the HTTP client cannot be built.
    pub fn from_config(config: &GenAiConfig) -> Result<Self, FlowError> {
        if config.is_configured() {
            HttpModel::new(config).map(Self::Http)
        } else {
            tracing::warn!("genai is not configured; only fallback flows will answer");
            Ok(Self::Unavailable(UnavailableModel))
        }
    }

    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Http(_))
    }
}

impl GenerativeModel for ConfiguredModel {
    async fn generate(&self, request: &ModelRequest) -> Result<Value, FlowError> {
        match self {
            Self::Http(model) => model.generate(request).await,
            Self::Unavailable(model) => model.generate(request).await,
        }
    }
}

/// Text of the first part of the first candidate.
fn candidate_text(body: &Value) -> Result<&str, FlowError> {
    body.pointer("/candidates/0/content/parts/0/text")
        .and_then(Value::as_str)
        .ok_or_else(|| FlowError::MalformedResponse("no candidate text in response".into()))
}

/// Parse model text as JSON, tolerating a surrounding markdown fence.
pub(crate) fn extract_json(text: &str) -> Result<Value, FlowError> {
    let trimmed = text.trim();
    if let Ok(value) = serde_json::from_str(trimmed) {
        return Ok(value);
    }

    let unfenced = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.trim_end().strip_suffix("```"))
        .map(str::trim);
    match unfenced {
        Some(inner) => serde_json::from_str(inner)
            .map_err(|e| FlowError::MalformedResponse(format!("fenced JSON: {e}"))),
        None => Err(FlowError::MalformedResponse(format!(
            "response is not JSON ({} bytes)",
            trimmed.len()
        ))),
    }
}
