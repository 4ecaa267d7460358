//! HTTP client for Ads API communication.
//!
//! This module provides the [`AdsClient`] type for making authenticated
//! requests to the Ads API.

use std::collections::HashMap;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::request::{HttpMethod, HttpRequest};
use crate::clients::response::HttpResponse;
use crate::config::{AdsConfig, ApiVersion};

/// Production Ads API host.
pub const DEFAULT_HOST: &str = "https://ads-api.twitter.com";

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Ads API.
///
/// The client handles:
/// - Base URI construction from the configured host and API version
/// - Default headers including User-Agent and the bearer token
/// - Response body and rate limit header parsing
///
/// # Thread Safety
///
/// `AdsClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use twitter_ads::{AdsClient, AdsConfig, AccessToken};
///
/// let config = AdsConfig::builder()
///     .access_token(AccessToken::new("bearer-token")?)
///     .build()?;
///
/// let client = AdsClient::new(&config);
/// let response = client.get("accounts/18ce54d4x5t", None).await?;
/// ```
#[derive(Debug, Clone)]
pub struct AdsClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://ads-api.twitter.com`).
    base_uri: String,
    /// API version segment inserted after the base URI.
    api_version: ApiVersion,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify AdsClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AdsClient>();
};

impl AdsClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &AdsConfig) -> Self {
        let base_uri = config
            .host()
            .map_or_else(|| DEFAULT_HOST.to_string(), ToString::to_string);

        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}Twitter Ads API Library v{SDK_VERSION} | Rust {rust_version}"
        );

        // Build default headers
        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", config.access_token().as_ref()),
        );

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_uri,
            api_version: config.api_version().clone(),
            default_headers,
        }
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the API version for this client.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a GET request to the given path.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if a network error occurs or a non-2xx
    /// response is received.
    pub async fn get(
        &self,
        path: impl Into<String>,
        params: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, HttpError> {
        let mut builder = HttpRequest::builder(HttpMethod::Get, path);
        if let Some(params) = params {
            builder = builder.params(params);
        }
        self.request(builder.build()).await
    }

    /// Sends a POST request to the given path.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if a network error occurs or a non-2xx
    /// response is received.
    pub async fn post(
        &self,
        path: impl Into<String>,
        params: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, HttpError> {
        let mut builder = HttpRequest::builder(HttpMethod::Post, path);
        if let Some(params) = params {
            builder = builder.params(params);
        }
        self.request(builder.build()).await
    }

    /// Sends a PUT request to the given path.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if a network error occurs or a non-2xx
    /// response is received.
    pub async fn put(
        &self,
        path: impl Into<String>,
        params: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, HttpError> {
        let mut builder = HttpRequest::builder(HttpMethod::Put, path);
        if let Some(params) = params {
            builder = builder.params(params);
        }
        self.request(builder.build()).await
    }

    /// Sends a DELETE request to the given path.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if a network error occurs or a non-2xx
    /// response is received.
    pub async fn delete(&self, path: impl Into<String>) -> Result<HttpResponse, HttpError> {
        self.request(HttpRequest::builder(HttpMethod::Delete, path).build())
            .await
    }

    /// Sends an HTTP request to the Ads API.
    ///
    /// This method handles URL construction, header merging, response
    /// parsing, and error serialization. Parameters are always sent as the
    /// query string, which is how the Ads API accepts write operations.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        // Build full URL
        let url = format!(
            "{}/{}/{}",
            self.base_uri,
            self.api_version,
            request.path.trim_start_matches('/')
        );

        // Merge headers
        let mut headers = self.default_headers.clone();
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(params) = &request.params {
            req_builder = req_builder.query(params);
        }

        tracing::debug!(method = %request.http_method, path = %request.path, "sending Ads API request");

        let res = req_builder.send().await?;

        // Parse response
        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await.unwrap_or_default();

        let body = if body_text.is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text).unwrap_or_else(|_| {
                // For 5xx errors, return raw body as string value
                if code >= 500 {
                    serde_json::json!({ "raw_body": body_text })
                } else {
                    serde_json::json!({})
                }
            })
        };

        let response = HttpResponse::new(code, res_headers, body);

        if response.is_ok() {
            return Ok(response);
        }

        let error_message = Self::serialize_error(&response);
        tracing::warn!(
            method = %request.http_method,
            path = %request.path,
            code,
            "Ads API request failed: {error_message}"
        );

        Err(HttpError::Response(HttpResponseError {
            code,
            message: error_message,
            request_id: response.request_id().map(String::from),
        }))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Serializes the error payload of a failed response to JSON.
    fn serialize_error(response: &HttpResponse) -> String {
        let mut error_body = serde_json::Map::new();

        if let Some(errors) = response.body.get("errors") {
            error_body.insert("errors".to_string(), errors.clone());
        }
        if let Some(request) = response.body.get("request") {
            error_body.insert("request".to_string(), request.clone());
        }
        if let Some(raw_body) = response.body.get("raw_body") {
            error_body.insert("raw_body".to_string(), raw_body.clone());
        }

        if let Some(request_id) = response.request_id() {
            error_body.insert(
                "request_id".to_string(),
                serde_json::json!(request_id.to_string()),
            );
        }

        serde_json::to_string(&error_body).unwrap_or_else(|_| "{}".to_string())
    }
}
