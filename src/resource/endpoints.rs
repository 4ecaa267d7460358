//! Path building infrastructure for Ads API resources.
//!
//! Resource paths are declared as templates with `{account_id}` and `{id}`
//! placeholders. Each resource carries a pair of templates, one for the
//! collection and one for a single entity, and path building is plain
//! placeholder substitution.
//!
//! # Example
//!
//! ```rust
//! use twitter_ads::resource::{ResourceEndpoints, collection_path, single_path};
//!
//! const CAMPAIGNS: ResourceEndpoints = ResourceEndpoints::new(
//!     "accounts/{account_id}/campaigns",
//!     "accounts/{account_id}/campaigns/{id}",
//! );
//!
//! let url = collection_path(&CAMPAIGNS, "18ce54d4x5t");
//! assert_eq!(url, "accounts/18ce54d4x5t/campaigns");
//!
//! let url = single_path(&CAMPAIGNS, "18ce54d4x5t", "8yn7m");
//! assert_eq!(url, "accounts/18ce54d4x5t/campaigns/8yn7m");
//! ```

/// Placeholder for the advertiser account identifier in path templates.
pub const ACCOUNT_ID_PLACEHOLDER: &str = "{account_id}";

/// Placeholder for the entity identifier in path templates.
pub const ID_PLACEHOLDER: &str = "{id}";

/// The path templates for a resource.
///
/// Defined as constants on each resource type so path configuration lives
/// next to the resource declaration.
///
/// # Example
///
/// ```rust
/// use twitter_ads::resource::ResourceEndpoints;
///
/// const LINE_ITEMS: ResourceEndpoints = ResourceEndpoints::new(
///     "accounts/{account_id}/line_items",
///     "accounts/{account_id}/line_items/{id}",
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceEndpoints {
    /// Template for the collection (e.g., `accounts/{account_id}/campaigns`).
    pub collection: &'static str,
    /// Template for a single entity (e.g., `accounts/{account_id}/campaigns/{id}`).
    pub single: &'static str,
}

impl ResourceEndpoints {
    /// Creates a new endpoints pair.
    ///
    /// This is a `const fn` to allow endpoints to be defined as constants.
    #[must_use]
    pub const fn new(collection: &'static str, single: &'static str) -> Self {
        Self { collection, single }
    }
}

/// Builds the collection path by substituting `{account_id}`.
///
/// Substitution is literal string replacement; placeholders absent from
/// the template are left untouched.
#[must_use]
pub fn collection_path(endpoints: &ResourceEndpoints, account_id: &str) -> String {
    endpoints
        .collection
        .replace(ACCOUNT_ID_PLACEHOLDER, account_id)
}

/// Builds the single-entity path by substituting `{account_id}` and `{id}`.
#[must_use]
pub fn single_path(endpoints: &ResourceEndpoints, account_id: &str, id: &str) -> String {
    endpoints
        .single
        .replace(ACCOUNT_ID_PLACEHOLDER, account_id)
        .replace(ID_PLACEHOLDER, id)
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceEndpoints>();
};
