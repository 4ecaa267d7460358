//! Configuration types for the Ads API SDK.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`AdsConfig`]: The main configuration struct holding all SDK settings
//! - [`AdsConfigBuilder`]: A builder for constructing [`AdsConfig`] instances
//! - [`AccessToken`]: A validated bearer token newtype with masked debug output
//! - [`AccountId`]: A validated advertiser account identifier
//! - [`ApiVersion`]: The Ads API version to use
//!
//! # Example
//!
//! ```rust
//! use twitter_ads::{AdsConfig, AccessToken, ApiVersion};
//!
//! let config = AdsConfig::builder()
//!     .access_token(AccessToken::new("my-bearer-token").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;
mod version;

pub use newtypes::{AccessToken, AccountId};
pub use version::ApiVersion;

use crate::error::ConfigError;

/// Configuration for the Ads API SDK.
///
/// This struct holds all configuration needed for SDK operations, including
/// the bearer token, API version, and optional host override.
///
/// # Thread Safety
///
/// `AdsConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use twitter_ads::{AdsConfig, AccessToken};
///
/// let config = AdsConfig::builder()
///     .access_token(AccessToken::new("token").unwrap())
///     .build()
///     .unwrap();
///
/// assert!(config.host().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct AdsConfig {
    access_token: AccessToken,
    api_version: ApiVersion,
    host: Option<String>,
    user_agent_prefix: Option<String>,
}

impl AdsConfig {
    /// Creates a new builder for constructing an `AdsConfig`.
    #[must_use]
    pub fn builder() -> AdsConfigBuilder {
        AdsConfigBuilder::new()
    }

    /// Returns the access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the host override, if configured.
    ///
    /// When `None`, the client uses the production Ads API host.
    #[must_use]
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify AdsConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AdsConfig>();
};

/// Builder for constructing [`AdsConfig`] instances.
///
/// The only required field is `access_token`. All other fields have
/// sensible defaults.
///
/// # Defaults
///
/// - `api_version`: Latest known version
/// - `host`: `None` (production Ads API host)
/// - `user_agent_prefix`: `None`
///
/// # Example
///
/// ```rust
/// use twitter_ads::{AdsConfig, AccessToken, ApiVersion};
///
/// let config = AdsConfig::builder()
///     .access_token(AccessToken::new("token").unwrap())
///     .api_version(ApiVersion::V11)
///     .host("https://ads-api-sandbox.twitter.com")
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct AdsConfigBuilder {
    access_token: Option<AccessToken>,
    api_version: Option<ApiVersion>,
    host: Option<String>,
    user_agent_prefix: Option<String>,
}

impl AdsConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the access token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the host, overriding the production Ads API host.
    ///
    /// Useful for pointing the client at the sandbox environment or a
    /// local test server. The value must include a scheme.
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`AdsConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `access_token` is not
    /// set, or [`ConfigError::InvalidHost`] if the host has no scheme.
    pub fn build(self) -> Result<AdsConfig, ConfigError> {
        let access_token = self.access_token.ok_or(ConfigError::MissingRequiredField {
            field: "access_token",
        })?;

        let host = match self.host {
            Some(host) => {
                let host = host.trim().trim_end_matches('/').to_string();
                if !host.contains("://") {
                    return Err(ConfigError::InvalidHost { url: host });
                }
                Some(host)
            }
            None => None,
        };

        Ok(AdsConfig {
            access_token,
            api_version: self.api_version.unwrap_or_else(ApiVersion::latest),
            host,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_access_token() {
        let result = AdsConfigBuilder::new().build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "access_token"
            })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = AdsConfig::builder()
            .access_token(AccessToken::new("token").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.api_version(), &ApiVersion::latest());
        assert!(config.host().is_none());
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_rejects_host_without_scheme() {
        let result = AdsConfig::builder()
            .access_token(AccessToken::new("token").unwrap())
            .host("ads-api.twitter.com")
            .build();

        assert!(matches!(result, Err(ConfigError::InvalidHost { .. })));
    }

    #[test]
    fn test_builder_normalizes_host_trailing_slash() {
        let config = AdsConfig::builder()
            .access_token(AccessToken::new("token").unwrap())
            .host("https://ads-api-sandbox.twitter.com/")
            .build()
            .unwrap();

        assert_eq!(config.host(), Some("https://ads-api-sandbox.twitter.com"));
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = AdsConfig::builder()
            .access_token(AccessToken::new("token").unwrap())
            .api_version(ApiVersion::V11)
            .host("https://localhost:3000")
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        assert_eq!(config.api_version(), &ApiVersion::V11);
        assert_eq!(config.host(), Some("https://localhost:3000"));
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
    }

    #[test]
    fn test_config_is_clone_and_debug() {
        let config = AdsConfig::builder()
            .access_token(AccessToken::new("token").unwrap())
            .build()
            .unwrap();

        let cloned = config.clone();
        assert_eq!(cloned.api_version(), config.api_version());

        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("AdsConfig"));
        assert!(debug_str.contains("AccessToken(*****)"));
    }
}
