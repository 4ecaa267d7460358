//! HTTP response types for the Ads API SDK.
//!
//! This module provides the [`HttpResponse`] type and related types for
//! parsing and accessing API response data.

use std::collections::HashMap;

/// Rate limit information parsed from the Ads API rate limit headers.
///
/// Account-scoped endpoints report limits through the
/// `x-account-rate-limit-*` headers; other endpoints use `x-rate-limit-*`.
/// Parsing prefers the account-scoped headers when both are present.
///
/// # Example
///
/// ```rust
/// use twitter_ads::clients::RateLimit;
/// use std::collections::HashMap;
///
/// let mut headers = HashMap::new();
/// headers.insert("x-rate-limit-limit".to_string(), vec!["2000".to_string()]);
/// headers.insert("x-rate-limit-remaining".to_string(), vec!["1999".to_string()]);
/// headers.insert("x-rate-limit-reset".to_string(), vec!["1672531200".to_string()]);
///
/// let limit = RateLimit::from_headers(&headers).unwrap();
/// assert_eq!(limit.limit, 2000);
/// assert_eq!(limit.remaining, 1999);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimit {
    /// The total number of requests allowed in the current window.
    pub limit: u32,
    /// The number of requests remaining in the current window.
    pub remaining: u32,
    /// Unix timestamp at which the current window resets.
    pub reset: u64,
}

impl RateLimit {
    /// Parses rate limit information from response headers.
    ///
    /// Returns `None` if no complete set of rate limit headers is present.
    #[must_use]
    pub fn from_headers(headers: &HashMap<String, Vec<String>>) -> Option<Self> {
        Self::parse_prefix(headers, "x-account-rate-limit")
            .or_else(|| Self::parse_prefix(headers, "x-rate-limit"))
    }

    fn parse_prefix(headers: &HashMap<String, Vec<String>>, prefix: &str) -> Option<Self> {
        let first = |suffix: &str| {
            headers
                .get(&format!("{prefix}-{suffix}"))
                .and_then(|values| values.first())
        };

        Some(Self {
            limit: first("limit")?.parse().ok()?,
            remaining: first("remaining")?.parse().ok()?,
            reset: first("reset")?.parse().ok()?,
        })
    }
}

/// An HTTP response from the Ads API.
///
/// Contains the response status code, headers, parsed JSON body, and rate
/// limit information extracted from the headers.
///
/// Ads API response bodies wrap their payload in a `data` field, with
/// pagination metadata (`next_cursor`, `total_count`) alongside it.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
    /// Rate limit information, if the rate limit headers were present.
    pub rate_limit: Option<RateLimit>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse` with automatic header parsing.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let rate_limit = RateLimit::from_headers(&headers);

        Self {
            code,
            headers,
            body,
            rate_limit,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `x-request-id` header value, if present.
    ///
    /// This ID is useful for debugging and should be included in error reports.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("x-request-id")
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `data` field of the response body, if present.
    #[must_use]
    pub fn data(&self) -> Option<&serde_json::Value> {
        self.body.get("data")
    }

    /// Returns the `next_cursor` pagination token, if present and non-null.
    #[must_use]
    pub fn next_cursor(&self) -> Option<&str> {
        self.body.get("next_cursor").and_then(serde_json::Value::as_str)
    }

    /// Returns the `total_count` field of the response body, if present.
    #[must_use]
    pub fn total_count(&self) -> Option<u64> {
        self.body.get("total_count").and_then(serde_json::Value::as_u64)
    }
}
