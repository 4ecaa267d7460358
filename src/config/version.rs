//! Ads API version definitions.
//!
//! This module provides the [`ApiVersion`] enum for specifying which version
//! of the Ads API to use.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Ads API version.
///
/// The Ads API versions with small integers (`11`, `12`) rather than dates.
/// This enum provides variants for known versions plus a `Custom` variant for
/// future versions that this crate does not yet know about.
///
/// # Example
///
/// ```rust
/// use twitter_ads::ApiVersion;
///
/// // Use the latest known version
/// let version = ApiVersion::latest();
///
/// // Parse from string
/// let version: ApiVersion = "12".parse().unwrap();
/// assert_eq!(version, ApiVersion::V12);
///
/// // Display as string
/// assert_eq!(format!("{}", ApiVersion::V12), "12");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// Ads API version 11.
    V11,
    /// Ads API version 12.
    V12,
    /// Custom version string for future or unrecognized versions.
    Custom(String),
}

impl ApiVersion {
    /// Returns the latest known API version.
    ///
    /// This should be updated when new versions are released.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V12
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let version_str = match self {
            Self::V11 => "11",
            Self::V12 => "12",
            Self::Custom(s) => s,
        };
        f.write_str(version_str)
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        match s {
            "11" => Ok(Self::V11),
            "12" => Ok(Self::V12),
            _ => {
                // Versions are positive integers; anything else is invalid.
                if !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()) {
                    Ok(Self::Custom(s.to_string()))
                } else {
                    Err(ConfigError::InvalidApiVersion {
                        version: s.to_string(),
                    })
                }
            }
        }
    }
}
