//! Error types for resource operations.

use crate::clients::HttpError;
use thiserror::Error;

/// Errors raised by resource operations.
///
/// HTTP transport failures are wrapped transparently; the remaining
/// variants cover entity-level failures detected before or after the
/// request.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The entity has no identifier, so an instance operation cannot
    /// build its path. Raised before any request is made.
    #[error("Error loading entity")]
    NotLoaded,

    /// The response body had no `data` field to hydrate from.
    #[error("response for {resource} contained no data")]
    MissingData {
        /// The resource the response was for.
        resource: &'static str,
    },

    /// A field value could not be parsed during hydration.
    #[error("failed to hydrate field {field}: {detail}")]
    Hydration {
        /// The field that failed to parse.
        field: String,
        /// What went wrong.
        detail: String,
    },

    /// The response payload had an unexpected shape.
    #[error("unexpected value: expected {expected}, found {found}")]
    UnexpectedValue {
        /// The shape that was expected.
        expected: &'static str,
        /// The shape that was found.
        found: &'static str,
    },

    /// An HTTP transport or API error.
    #[error(transparent)]
    Http(#[from] HttpError),
}
