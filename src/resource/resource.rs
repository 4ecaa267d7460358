//! Resource trait for CRUD operations against the Ads API.
//!
//! This module defines the [`Resource`] trait, which provides a standardized
//! interface for account-scoped API entities. Resources that implement this
//! trait gain `load()`, `all()`, `reload()`, `save()`, and `delete()`
//! methods, plus [`Resource::load_resource`] for id-or-collection dispatch.
//!
//! # Implementing a Resource
//!
//! 1. Define a struct holding a [`FieldBag`]
//! 2. Declare the resource's name, endpoints, and writable properties
//! 3. The trait provides default implementations for all operations
//!
//! # Example
//!
//! ```rust,ignore
//! use twitter_ads::resource::{FieldBag, Resource, ResourceEndpoints};
//!
//! #[derive(Debug, Clone, Default)]
//! pub struct Campaign {
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
//!
//! // Usage:
//! let campaign = Campaign::load(&account, "8yn7m", None).await?;
//! let all = Campaign::all(&account, None).await?;
//! ```

use std::collections::HashMap;

use serde_json::Value;

use crate::account::Account;
use crate::clients::HttpResponse;
use crate::resource::cursor::Cursor;
use crate::resource::endpoints::{collection_path, single_path, ResourceEndpoints};
use crate::resource::errors::ResourceError;
use crate::resource::fields::FieldBag;

/// The result of [`Resource::load_resource`].
///
/// Holds either a single hydrated entity or a cursor over the collection,
/// depending on whether an identifier was supplied.
#[derive(Debug)]
pub enum Loaded<R: Resource> {
    /// A single entity, loaded by id.
    One(R),
    /// A cursor over the collection.
    Many(Cursor<R>),
}

/// An account-scoped API entity that can be loaded, listed, saved, and
/// deleted.
///
/// Implementors declare the resource's name, path templates, and writable
/// properties, and get default implementations for every operation. All
/// operations take the [`Account`] explicitly; entities hold no connection
/// state of their own.
///
/// # Associated Constants
///
/// - `NAME`: The singular resource name, used in error messages
/// - `ENDPOINTS`: Collection and single-entity path templates
/// - `PROPERTIES`: The writable properties serialized by [`save`](Self::save)
#[allow(async_fn_in_trait)]
pub trait Resource: Default + Send + Sync + Sized {
    /// The singular name of the resource (e.g., "campaign").
    const NAME: &'static str;

    /// The path templates for this resource.
    const ENDPOINTS: ResourceEndpoints;

    /// The writable properties sent by [`save`](Self::save).
    ///
    /// Read-only attributes (server timestamps, derived state) stay out of
    /// this list so they are never echoed back to the API.
    const PROPERTIES: &'static [&'static str];

    /// Returns the entity's attribute bag.
    fn fields(&self) -> &FieldBag;

    /// Returns the entity's attribute bag for mutation.
    fn fields_mut(&mut self) -> &mut FieldBag;

    /// Returns the entity's identifier, if hydrated.
    ///
    /// Returns `None` for new entities that have not been saved yet.
    #[must_use]
    fn id(&self) -> Option<&str> {
        self.fields().id()
    }

    /// Hydrates this entity from a response data object.
    ///
    /// Attributes merge over existing ones, so hydrating from a partial
    /// payload only overwrites the fields it mentions.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnexpectedValue`] if `data` is not an
    /// object, or [`ResourceError::Hydration`] on a malformed temporal
    /// field.
    fn from_response(&mut self, data: &Value) -> Result<&mut Self, ResourceError> {
        self.fields_mut().hydrate(data)?;
        Ok(self)
    }

    /// Serializes the writable properties into request parameters.
    ///
    /// Unset and null properties are excluded.
    #[must_use]
    fn to_params(&self) -> HashMap<String, String> {
        self.fields().to_params(Self::PROPERTIES)
    }

    /// Loads a single entity by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] on transport or API failure, or
    /// [`ResourceError::MissingData`] if the response had no data payload.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let campaign = Campaign::load(&account, "8yn7m", None).await?;
    /// ```
    async fn load(
        account: &Account,
        id: &str,
        params: Option<HashMap<String, String>>,
    ) -> Result<Self, ResourceError> {
        let path = single_path(&Self::ENDPOINTS, account.id().as_ref(), id);
        let response = account.client().get(path, params).await?;

        let mut resource = Self::default();
        resource.from_response(Self::data_of(&response)?)?;
        Ok(resource)
    }

    /// Lists the collection, returning a cursor over the first page.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] on transport or API failure, or
    /// [`ResourceError::UnexpectedValue`] if the data payload is not an
    /// array.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let mut cursor = Campaign::all(&account, None).await?;
    /// for campaign in cursor.items() {
    ///     println!("{:?}", campaign.id());
    /// }
    /// ```
    async fn all(
        account: &Account,
        params: Option<HashMap<String, String>>,
    ) -> Result<Cursor<Self>, ResourceError> {
        let params = params.unwrap_or_default();
        let path = collection_path(&Self::ENDPOINTS, account.id().as_ref());

        let request_params = if params.is_empty() {
            None
        } else {
            Some(params.clone())
        };
        let response = account.client().get(path, request_params).await?;

        Cursor::from_response(&response, params)
    }

    /// Loads either a single entity or the collection, depending on
    /// whether a non-empty id is supplied.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`load`](Self::load) or
    /// [`all`](Self::all).
    async fn load_resource(
        account: &Account,
        id: Option<&str>,
        params: Option<HashMap<String, String>>,
    ) -> Result<Loaded<Self>, ResourceError> {
        match id.filter(|id| !id.is_empty()) {
            Some(id) => Ok(Loaded::One(Self::load(account, id, params).await?)),
            None => Ok(Loaded::Many(Self::all(account, params).await?)),
        }
    }

    /// Refreshes this entity from the API.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotLoaded`] without issuing a request if
    /// the entity has no identifier yet.
    async fn reload(
        &mut self,
        account: &Account,
        params: Option<HashMap<String, String>>,
    ) -> Result<&mut Self, ResourceError> {
        let id = self
            .id()
            .filter(|id| !id.is_empty())
            .ok_or(ResourceError::NotLoaded)?
            .to_string();

        let path = single_path(&Self::ENDPOINTS, account.id().as_ref(), &id);
        let response = account.client().get(path, params).await?;
        self.from_response(Self::data_of(&response)?)
    }

    /// Persists this entity, creating or updating as appropriate.
    ///
    /// Entities with an identifier are updated with a PUT to the single
    /// path; entities without one are created with a POST to the
    /// collection path. Either way the entity is rehydrated from the
    /// returned representation, picking up server-assigned fields.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] on transport or API failure, or
    /// [`ResourceError::MissingData`] if the response had no data payload.
    async fn save(&mut self, account: &Account) -> Result<&mut Self, ResourceError> {
        let params = self.to_params();
        let params = if params.is_empty() { None } else { Some(params) };

        let existing_id = self
            .id()
            .filter(|id| !id.is_empty())
            .map(ToString::to_string);

        let response = match existing_id {
            Some(id) => {
                let path = single_path(&Self::ENDPOINTS, account.id().as_ref(), &id);
                account.client().put(path, params).await?
            }
            None => {
                let path = collection_path(&Self::ENDPOINTS, account.id().as_ref());
                account.client().post(path, params).await?
            }
        };

        self.from_response(Self::data_of(&response)?)
    }

    /// Deletes this entity.
    ///
    /// The API echoes back the deleted representation (with its terminal
    /// state, e.g. `deleted: true`), which is hydrated into the entity.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotLoaded`] without issuing a request if
    /// the entity has no identifier yet.
    async fn delete(&mut self, account: &Account) -> Result<&mut Self, ResourceError> {
        let id = self
            .id()
            .filter(|id| !id.is_empty())
            .ok_or(ResourceError::NotLoaded)?
            .to_string();

        let path = single_path(&Self::ENDPOINTS, account.id().as_ref(), &id);
        let response = account.client().delete(path).await?;
        self.from_response(Self::data_of(&response)?)
    }

    /// Extracts the data payload of a response.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingData`] if the body has no `data`
    /// field.
    fn data_of(response: &HttpResponse) -> Result<&Value, ResourceError> {
        response.data().ok_or(ResourceError::MissingData {
            resource: Self::NAME,
        })
    }
}
