//! Per-request caching strategy.

use std::fmt;

use serde::Serialize;

use crate::request::RequestInfo;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Serve from cache; fetch and store on a miss.
    CacheFirst,
    /// Fetch and store; serve the cached copy when the network fails.
    NetworkFirst,
    /// Network only, never cached.
    Passthrough,
}

impl Strategy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CacheFirst => "cache_first",
            Self::NetworkFirst => "network_first",
            Self::Passthrough => "passthrough",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const STATIC_PREFIXES: &[&str] = &["/_next/static/", "/static/", "/icons/"];

const STATIC_EXTENSIONS: &[&str] = &[
    "js", "css", "png", "jpg", "jpeg", "gif", "svg", "ico", "webp", "woff", "woff2", "ttf",
];

fn is_static_asset(pathname: &str) -> bool {
    if pathname == "/manifest.json" || STATIC_PREFIXES.iter().any(|p| pathname.starts_with(p)) {
        return true;
    }
    let file = pathname.rsplit('/').next().unwrap_or_default();
    file.rsplit_once('.').is_some_and(|(_, ext)| {
        STATIC_EXTENSIONS
            .iter()
            .any(|known| known.eq_ignore_ascii_case(ext))
    })
}

/// Pick the strategy for `request`.
///
/// Non-GET requests pass through. Static assets are cache-first even under
/// `/api/`; API calls and navigations are network-first.
#[must_use]
pub fn classify(request: &RequestInfo) -> Strategy {
    if !request.is_get() {
        return Strategy::Passthrough;
    }
    let pathname = request.pathname();
    if is_static_asset(pathname) {
        Strategy::CacheFirst
    } else if pathname.starts_with("/api/") || request.is_navigation() {
        Strategy::NetworkFirst
    } else {
        Strategy::Passthrough
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::request::RequestMode;

    #[rstest]
    #[case(RequestInfo::get("/_next/static/chunks/app.js"), Strategy::CacheFirst)]
    #[case(RequestInfo::get("/icons/icon-192.png"), Strategy::CacheFirst)]
    #[case(RequestInfo::get("/fonts/inter.WOFF2"), Strategy::CacheFirst)]
    #[case(RequestInfo::get("/manifest.json"), Strategy::CacheFirst)]
    #[case(RequestInfo::navigate("/lawyer/dashboard"), Strategy::NetworkFirst)]
    #[case(RequestInfo::get("/api/clients?page=2"), Strategy::NetworkFirst)]
    #[case(RequestInfo::get("/api/avatars/emma.png"), Strategy::CacheFirst)]
    #[case(RequestInfo::get("/lawyer/dashboard"), Strategy::Passthrough)]
    fn classifies_gets(#[case] request: RequestInfo, #[case] expected: Strategy) {
        assert_eq!(classify(&request), expected);
    }

    #[test]
    fn non_get_is_passthrough() {
        let request = RequestInfo {
            method: "POST".into(),
            ..RequestInfo::get("/api/clients")
        };
        assert_eq!(classify(&request), Strategy::Passthrough);
    }

    #[test]
    fn html_accept_counts_as_navigation() {
        let request = RequestInfo {
            mode: RequestMode::Cors,
            accept: Some("text/html,application/xhtml+xml".into()),
            ..RequestInfo::get("/client/overview")
        };
        assert_eq!(classify(&request), Strategy::NetworkFirst);
    }
}
