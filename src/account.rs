//! Advertiser account handle for scoping API operations.
//!
//! Every resource operation in the Ads API is scoped to an advertiser
//! account. The [`Account`] type pairs a validated [`AccountId`] with an
//! [`AdsClient`] so resource operations can build account-scoped paths and
//! issue requests through a single handle.

use crate::clients::AdsClient;
use crate::config::AccountId;

/// An advertiser account handle.
///
/// Holds the validated account identifier together with the client used to
/// reach the API. Because [`AccountId`] is validated on construction, an
/// `Account` always refers to a well-formed account.
///
/// # Example
///
/// ```rust,ignore
/// use twitter_ads::{Account, AccountId, AdsClient, AdsConfig, AccessToken};
///
/// let config = AdsConfig::builder()
///     .access_token(AccessToken::new("bearer-token")?)
///     .build()?;
///
/// let client = AdsClient::new(&config);
/// let account = Account::new(client, AccountId::new("18ce54d4x5t")?);
/// ```
#[derive(Debug, Clone)]
pub struct Account {
    id: AccountId,
    client: AdsClient,
}

impl Account {
    /// Creates a new account handle.
    #[must_use]
    pub const fn new(client: AdsClient, id: AccountId) -> Self {
        Self { id, client }
    }

    /// Returns the account identifier.
    #[must_use]
    pub const fn id(&self) -> &AccountId {
        &self.id
    }

    /// Returns the client used for requests against this account.
    #[must_use]
    pub const fn client(&self) -> &AdsClient {
        &self.client
    }
}

// Verify Account is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Account>();
};
