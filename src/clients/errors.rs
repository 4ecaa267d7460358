//! HTTP-specific error types for the Ads API SDK.
//!
//! # Error Handling
//!
//! The SDK uses specific error types for different failure scenarios:
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the API
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! # Example
//!
//! ```rust,ignore
//! use twitter_ads::clients::{AdsClient, HttpError};
//!
//! match client.get("accounts/18ce54d4x5t", None).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) => {
//!         println!("API error {}: {}", e.code, e.message);
//!     }
//!     Err(HttpError::Network(e)) => {
//!         println!("Network error: {}", e);
//!     }
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request receives a non-successful response.
///
/// The message is the serialized `errors` payload from the response body,
/// in JSON format.
///
/// # Example
///
/// ```rust
/// use twitter_ads::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: r#"{"errors":[{"code":"NOT_FOUND","message":"resource not found"}]}"#.to_string(),
///     request_id: Some("abc-123".to_string()),
/// };
///
/// println!("Status {}: {}", error.code, error.message);
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Serialized error message in JSON format.
    pub message: String,
    /// Reference ID for error reporting (from the `x-request-id` header).
    pub request_id: Option<String>,
}

/// Unified error type for all HTTP-related errors.
///
/// Use pattern matching to handle specific error types.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_response_error_displays_message() {
        let error = HttpResponseError {
            code: 404,
            message: r#"{"errors":[{"message":"Not Found"}]}"#.to_string(),
            request_id: None,
        };
        assert_eq!(error.to_string(), r#"{"errors":[{"message":"Not Found"}]}"#);
    }

    #[test]
    fn test_http_response_error_carries_request_id() {
        let error = HttpResponseError {
            code: 500,
            message: r#"{"errors":[{"message":"Internal Server Error"}],"request_id":"abc-123"}"#
                .to_string(),
            request_id: Some("abc-123".to_string()),
        };
        assert_eq!(error.request_id, Some("abc-123".to_string()));
        assert!(error.to_string().contains("abc-123"));
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let http_error: &dyn std::error::Error = &HttpResponseError {
            code: 400,
            message: "test".to_string(),
            request_id: None,
        };
        let _ = http_error;
    }
}
