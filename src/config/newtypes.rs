//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated Ads API account identifier.
///
/// Account identifiers are the base36 strings Twitter assigns to advertiser
/// accounts (for example `18ce54d4x5t`). Input is trimmed and lowercased on
/// construction, and only lowercase alphanumeric characters are accepted.
///
/// # Serialization
///
/// `AccountId` serializes to and deserializes from its plain string form:
///
/// ```rust
/// use twitter_ads::AccountId;
///
/// let id = AccountId::new("18ce54d4x5t").unwrap();
/// let json = serde_json::to_string(&id).unwrap();
/// assert_eq!(json, r#""18ce54d4x5t""#);
/// ```
///
/// # Example
///
/// ```rust
/// use twitter_ads::AccountId;
///
/// let id = AccountId::new("  18CE54D4X5T ").unwrap();
/// assert_eq!(id.as_ref(), "18ce54d4x5t");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AccountId(String);

impl AccountId {
    /// Creates a new validated account identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidAccountId`] if the identifier is empty
    /// or contains characters outside `a-z0-9`.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        let id = id.trim().to_lowercase();

        if id.is_empty() || !id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()) {
            return Err(ConfigError::InvalidAccountId { id });
        }

        Ok(Self(id))
    }
}

impl AsRef<str> for AccountId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for AccountId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for AccountId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated OAuth 2.0 bearer token.
///
/// This newtype ensures the token is non-empty and masks its value
/// in debug output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the token value, displaying only
/// `AccessToken(*****)` instead of the actual token.
///
/// # Example
///
/// ```rust
/// use twitter_ads::AccessToken;
///
/// let token = AccessToken::new("my-bearer-token").unwrap();
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_id_normalizes_case_and_whitespace() {
        let id = AccountId::new("  18CE54D4X5T ").unwrap();
        assert_eq!(id.as_ref(), "18ce54d4x5t");
        assert_eq!(id.to_string(), "18ce54d4x5t");
    }

    #[test]
    fn test_account_id_rejects_invalid_ids() {
        // Empty
        assert!(AccountId::new("").is_err());
        assert!(AccountId::new("   ").is_err());

        // Invalid characters
        assert!(AccountId::new("abc def").is_err());
        assert!(AccountId::new("abc_def").is_err());
        assert!(AccountId::new("abc-def").is_err());
    }

    #[test]
    fn test_account_id_serializes_to_string() {
        let id = AccountId::new("18ce54d4x5t").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, r#""18ce54d4x5t""#);
    }

    #[test]
    fn test_account_id_deserializes_from_string() {
        let id: AccountId = serde_json::from_str(r#""18ce54d4x5t""#).unwrap();
        assert_eq!(id.as_ref(), "18ce54d4x5t");
    }

    #[test]
    fn test_access_token_rejects_empty_string() {
        let result = AccessToken::new("");
        assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
    }

    #[test]
    fn test_access_token_masks_value_in_debug() {
        let token = AccessToken::new("super-secret-token").unwrap();
        let debug_output = format!("{:?}", token);
        assert_eq!(debug_output, "AccessToken(*****)");
        assert!(!debug_output.contains("super-secret-token"));
    }
}
