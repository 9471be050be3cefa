//! Request and response shapes seen by the cache.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequestMode {
    Navigate,
    SameOrigin,
    Cors,
    NoCors,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestInfo {
    pub method: String,
    pub path: String,
    pub mode: RequestMode,
    pub accept: Option<String>,
}

impl RequestInfo {
    /// Plain same-origin GET.
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: "GET".into(),
            path: path.into(),
            mode: RequestMode::SameOrigin,
            accept: None,
        }
    }

    /// Top-level page navigation.
    #[must_use]
    pub fn navigate(path: impl Into<String>) -> Self {
        Self {
            mode: RequestMode::Navigate,
            accept: Some("text/html".into()),
            ..Self::get(path)
        }
    }

    #[must_use]
    pub fn is_get(&self) -> bool {
        self.method.eq_ignore_ascii_case("GET")
    }

    /// Navigation by mode or by an HTML `Accept` header.
    #[must_use]
    pub fn is_navigation(&self) -> bool {
        self.mode == RequestMode::Navigate
            || self
                .accept
                .as_deref()
                .is_some_and(|accept| accept.contains("text/html"))
    }

    /// Path without fragment; the cache key.
    #[must_use]
    pub fn cache_key(&self) -> &str {
        self.path.split('#').next().unwrap_or_default()
    }

    /// Path without query string or fragment.
    #[must_use]
    pub fn pathname(&self) -> &str {
        self.path.split(['?', '#']).next().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CachedResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl CachedResponse {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}
