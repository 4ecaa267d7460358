//! HTTP client types for Ads API communication.
//!
//! This module provides the foundational HTTP client layer for making
//! authenticated requests to the Ads API. It handles request/response
//! processing and rate limit header parsing.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`AdsClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`RateLimit`]: Rate limit information parsed from response headers
//!
//! # Example
//!
//! ```rust,ignore
//! use twitter_ads::{AdsClient, AdsConfig, AccessToken};
//!
//! let config = AdsConfig::builder()
//!     .access_token(AccessToken::new("bearer-token")?)
//!     .build()?;
//!
//! let client = AdsClient::new(&config);
//! let response = client.get("accounts/18ce54d4x5t/campaigns", None).await?;
//!
//! if let Some(data) = response.data() {
//!     println!("Campaigns: {data}");
//! }
//! ```

mod client;
mod errors;
mod request;
mod response;

pub use client::{AdsClient, DEFAULT_HOST, SDK_VERSION};
pub use errors::{HttpError, HttpResponseError};
pub use request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use response::{HttpResponse, RateLimit};
