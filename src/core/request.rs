//! Request-scoped query-parameter snapshot
//!
//! [`RequestQuery`] captures the one piece of request state the parsers need:
//! the base URL and the ordered query-parameter multi-map. It is built once
//! per request and passed by reference to the parsers, which keeps them pure
//! and free of framework globals.

use axum::http::Uri;
use url::form_urlencoded;

/// The current request's base URL and query parameters
///
/// Keys may repeat (JSON:API `fields[...]` commonly does); the original
/// encounter order is preserved.
#[derive(Debug, Clone, Default)]
pub struct RequestQuery {
    base_url: String,
    params: Vec<(String, String)>,
}

impl RequestQuery {
    /// Create from already-decoded key/value pairs
    pub fn new(base_url: impl Into<String>, params: Vec<(String, String)>) -> Self {
        Self {
            base_url: base_url.into(),
            params,
        }
    }

    /// Create from an axum [`Uri`], decoding its query string
    ///
    /// The base URL is supplied separately because a `Uri` extracted from a
    /// request is usually origin-relative.
    pub fn from_uri(base_url: impl Into<String>, uri: &Uri) -> Self {
        let params = uri
            .query()
            .map(|query| {
                form_urlencoded::parse(query.as_bytes())
                    .into_owned()
                    .collect()
            })
            .unwrap_or_default();
        Self::new(base_url, params)
    }

    /// The request's base URL, without a query string
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// First value for `key`, if any
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All key/value pairs in encounter order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Re-serialize the parameters as `k=v&k2=v2`, skipping `except`
    ///
    /// Values are intentionally not percent-escaped: pagination links embed
    /// the query string in its human-readable form.
    pub fn unescaped_query_without(&self, except: &str) -> String {
        self.params
            .iter()
            .filter(|(k, _)| k != except)
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&")
    }
}
