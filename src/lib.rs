//! # Twitter Ads API Rust SDK
//!
//! A Rust SDK core for the Twitter Ads API, providing type-safe
//! configuration, an async HTTP client, and a generic resource layer with
//! CRUD operations and cursor pagination.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`AdsConfig`] and [`AdsConfigBuilder`]
//! - Validated newtypes for the bearer token and account identifiers
//! - An async HTTP client with rate limit header parsing
//! - A [`Resource`] trait giving entities `load`, `all`, `reload`, `save`,
//!   and `delete` operations
//! - [`Cursor`] pagination over collection responses
//!
//! ## Quick Start
//!
//! ```rust
//! use twitter_ads::{AdsConfig, AccessToken, ApiVersion};
//!
//! // Create configuration using the builder pattern
//! let config = AdsConfig::builder()
//!     .access_token(AccessToken::new("your-bearer-token").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Defining a Resource
//!
//! Entities implement the [`Resource`] trait by declaring their name, path
//! templates, and writable properties:
//!
//! ```rust
//! use twitter_ads::resource::{FieldBag, Resource, ResourceEndpoints};
//!
//! #[derive(Debug, Clone, Default)]
//! struct Campaign {
//!     fields: FieldBag,
//! }
//!
//! impl Resource for Campaign {
//!     const NAME: &'static str = "campaign";
//!     const ENDPOINTS: ResourceEndpoints = ResourceEndpoints::new(
//!         "accounts/{account_id}/campaigns",
//!         "accounts/{account_id}/campaigns/{id}",
//!     );
//!     const PROPERTIES: &'static [&'static str] =
//!         &["name", "funding_instrument_id", "start_time", "end_time", "paused"];
//!
//!     fn fields(&self) -> &FieldBag {
//!         &self.fields
//!     }
//!
//!     fn fields_mut(&mut self) -> &mut FieldBag {
//!         &mut self.fields
//!     }
//! }
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use twitter_ads::{Account, AccountId, AdsClient, AdsConfig, AccessToken};
//! use twitter_ads::resource::Resource;
//!
//! let config = AdsConfig::builder()
//!     .access_token(AccessToken::new("your-bearer-token")?)
//!     .build()?;
//!
//! let client = AdsClient::new(&config);
//! let account = Account::new(client, AccountId::new("18ce54d4x5t")?);
//!
//! // Load a single entity
//! let mut campaign = Campaign::load(&account, "8yn7m", None).await?;
//!
//! // Update and persist it
//! campaign.fields_mut().set("name", "renamed campaign");
//! campaign.save(&account).await?;
//!
//! // List and paginate
//! let cursor = Campaign::all(&account, None).await?;
//! let campaigns = cursor.collect_all(&account).await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Explicit scoping**: Operations take the [`Account`] rather than
//!   entities holding connection state
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime

pub mod account;
pub mod clients;
pub mod config;
pub mod error;
pub mod resource;

// Re-export public types at crate root for convenience
pub use account::Account;
pub use config::{AccessToken, AccountId, AdsConfig, AdsConfigBuilder, ApiVersion};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    AdsClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, RateLimit,
};

// Re-export resource layer types
pub use resource::{
    Cursor, FieldBag, FieldValue, Loaded, Resource, ResourceEndpoints, ResourceError,
};
