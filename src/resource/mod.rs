//! Resource access layer for the Ads API.
//!
//! This module provides the generic machinery behind every API entity:
//! path templating, attribute hydration, parameter serialization, CRUD
//! operations, and cursor pagination.
//!
//! # Overview
//!
//! - [`Resource`]: The trait implemented by each API entity
//! - [`ResourceEndpoints`]: Path templates with `{account_id}`/`{id}` placeholders
//! - [`FieldBag`] and [`FieldValue`]: Schemaless attribute storage
//! - [`Cursor`]: Pagination over collection responses
//! - [`Loaded`]: Single-or-collection result of [`Resource::load_resource`]
//! - [`ResourceError`]: Errors raised by resource operations

mod cursor;
mod endpoints;
mod errors;
mod fields;
#[allow(clippy::module_inception)]
mod resource;
mod value;

pub use cursor::Cursor;
pub use endpoints::{
    collection_path, single_path, ResourceEndpoints, ACCOUNT_ID_PLACEHOLDER, ID_PLACEHOLDER,
};
pub use errors::ResourceError;
pub use fields::{FieldBag, TIME_FIELDS};
pub use resource::{Loaded, Resource};
pub use value::FieldValue;
