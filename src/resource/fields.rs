//! Attribute storage and hydration for resources.
//!
//! Every resource keeps its attributes in a [`FieldBag`], a name-to-value
//! map hydrated from API responses. Hydration applies temporal coercion to
//! the well-known timestamp fields; serialization back to request
//! parameters applies the inverse coercions.

use std::collections::HashMap;

use serde_json::Value;

use crate::resource::errors::ResourceError;
use crate::resource::value::FieldValue;

/// Fields parsed as timestamps during hydration.
///
/// These are the temporal fields the Ads API reports on its entities. A
/// null value for one of these fields is skipped during hydration, leaving
/// any previously stored value in place.
pub const TIME_FIELDS: &[&str] = &[
    "created_at",
    "updated_at",
    "start_time",
    "end_time",
    "timezone_switch_at",
];

/// The attribute map of a resource.
///
/// Hydration merges response attributes over existing ones, so repeated
/// hydration from the same payload is idempotent and partial payloads only
/// overwrite the fields they mention.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldBag {
    fields: HashMap<String, FieldValue>,
}

impl FieldBag {
    /// Creates an empty field bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of a field, if set.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Sets a field value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Returns `true` if no fields are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the number of fields set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Iterates over every set field and its value.
    ///
    /// Useful for dumping an entity without knowing its field names in
    /// advance. Iteration order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Returns the entity identifier, if hydrated.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.get("id").and_then(FieldValue::as_str)
    }

    /// Merges the attributes of a response object into this bag.
    ///
    /// Temporal fields (see [`TIME_FIELDS`]) are parsed as RFC 3339
    /// timestamps; a null temporal value is skipped rather than stored.
    /// All other fields overwrite any existing value, nulls included.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnexpectedValue`] if `data` is not a JSON
    /// object, or [`ResourceError::Hydration`] if a temporal field cannot
    /// be parsed.
    pub fn hydrate(&mut self, data: &Value) -> Result<(), ResourceError> {
        let object = data.as_object().ok_or(ResourceError::UnexpectedValue {
            expected: "object",
            found: json_kind(data),
        })?;

        for (name, value) in object {
            if TIME_FIELDS.contains(&name.as_str()) {
                match value {
                    Value::Null => {}
                    Value::String(raw) => {
                        let parsed = chrono::DateTime::parse_from_rfc3339(raw).map_err(|e| {
                            ResourceError::Hydration {
                                field: name.clone(),
                                detail: e.to_string(),
                            }
                        })?;
                        self.fields.insert(
                            name.clone(),
                            FieldValue::Time(parsed.with_timezone(&chrono::Utc)),
                        );
                    }
                    other => {
                        return Err(ResourceError::Hydration {
                            field: name.clone(),
                            detail: format!("expected timestamp string, found {}", json_kind(other)),
                        });
                    }
                }
            } else {
                self.fields
                    .insert(name.clone(), FieldValue::from_json(value));
            }
        }

        Ok(())
    }

    /// Serializes the named properties into request parameters.
    ///
    /// Only properties that are set and non-null are included. Values are
    /// coerced via [`FieldValue::to_param`].
    #[must_use]
    pub fn to_params(&self, properties: &[&str]) -> HashMap<String, String> {
        let mut params = HashMap::new();
        for name in properties {
            if let Some(value) = self.fields.get(*name) {
                if let Some(param) = value.to_param() {
                    params.insert((*name).to_string(), param);
                }
            }
        }
        params
    }
}

/// Returns a static name for a JSON value's kind, for error messages.
const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
