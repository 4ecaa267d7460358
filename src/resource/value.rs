//! Field value representation for resource attributes.
//!
//! API entities are schemaless on the wire, so attribute values are held in
//! a [`FieldValue`] union. Temporal fields are parsed into
//! [`DateTime<Utc>`] during hydration; everything else maps directly from
//! its JSON form.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

/// A single attribute value of a resource.
///
/// Values are produced by hydration from API responses and consumed by
/// parameter serialization when writing back to the API.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// An explicit JSON null.
    Null,
    /// A boolean value.
    Bool(bool),
    /// A numeric value.
    Number(serde_json::Number),
    /// A string value.
    Str(String),
    /// A parsed timestamp. Only produced for known temporal fields.
    Time(DateTime<Utc>),
    /// A list of values.
    List(Vec<FieldValue>),
    /// A nested JSON object, kept as-is.
    Json(Value),
}

impl FieldValue {
    /// Converts a JSON value into a `FieldValue`.
    ///
    /// No temporal parsing happens here; hydration handles that for the
    /// fields declared temporal.
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(*b),
            Value::Number(n) => Self::Number(n.clone()),
            Value::String(s) => Self::Str(s.clone()),
            Value::Array(items) => Self::List(items.iter().map(Self::from_json).collect()),
            Value::Object(_) => Self::Json(value.clone()),
        }
    }

    /// Serializes this value for use as a request parameter.
    ///
    /// Returns `None` for null values, which are excluded from request
    /// parameters entirely. Coercions:
    ///
    /// - booleans become `"true"` / `"false"`
    /// - timestamps become ISO-8601 (RFC 3339) strings
    /// - lists become comma-joined element values
    /// - nested objects become compact JSON
    #[must_use]
    pub fn to_param(&self) -> Option<String> {
        match self {
            Self::Null => None,
            Self::Bool(b) => Some(if *b { "true" } else { "false" }.to_string()),
            Self::Number(n) => Some(n.to_string()),
            Self::Str(s) => Some(s.clone()),
            Self::Time(t) => Some(t.to_rfc3339_opts(SecondsFormat::Secs, true)),
            Self::List(items) => Some(
                items
                    .iter()
                    .filter_map(Self::to_param)
                    .collect::<Vec<_>>()
                    .join(","),
            ),
            Self::Json(v) => Some(v.to_string()),
        }
    }

    /// Returns `true` if this value is null.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the string value, if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the boolean value, if this is a boolean.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the timestamp, if this is a parsed temporal value.
    #[must_use]
    pub const fn as_time(&self) -> Option<&DateTime<Utc>> {
        match self {
            Self::Time(t) => Some(t),
            _ => None,
        }
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<u64> for FieldValue {
    fn from(value: u64) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Time(value)
    }
}

impl From<Vec<FieldValue>> for FieldValue {
    fn from(value: Vec<FieldValue>) -> Self {
        Self::List(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_from_json_maps_scalar_types() {
        assert_eq!(FieldValue::from_json(&json!(null)), FieldValue::Null);
        assert_eq!(FieldValue::from_json(&json!(true)), FieldValue::Bool(true));
        assert_eq!(
            FieldValue::from_json(&json!("paused")),
            FieldValue::Str("paused".to_string())
        );
    }

    #[test]
    fn test_from_json_maps_arrays_recursively() {
        let value = FieldValue::from_json(&json!(["a", "b"]));
        assert_eq!(
            value,
            FieldValue::List(vec![FieldValue::from("a"), FieldValue::from("b")])
        );
    }

    #[test]
    fn test_from_json_keeps_objects_as_json() {
        let value = FieldValue::from_json(&json!({"bid": 100}));
        assert_eq!(value, FieldValue::Json(json!({"bid": 100})));
    }

    #[test]
    fn test_to_param_coerces_booleans() {
        assert_eq!(FieldValue::Bool(true).to_param(), Some("true".to_string()));
        assert_eq!(
            FieldValue::Bool(false).to_param(),
            Some("false".to_string())
        );
    }

    #[test]
    fn test_to_param_formats_timestamps_as_iso8601() {
        let time = Utc.with_ymd_and_hms(2023, 1, 15, 12, 30, 0).unwrap();
        assert_eq!(
            FieldValue::Time(time).to_param(),
            Some("2023-01-15T12:30:00Z".to_string())
        );
    }

    #[test]
    fn test_to_param_joins_lists_with_commas() {
        let value = FieldValue::List(vec![
            FieldValue::from("8yn7m"),
            FieldValue::from("9fx2k"),
            FieldValue::from(3i64),
        ]);
        assert_eq!(value.to_param(), Some("8yn7m,9fx2k,3".to_string()));
    }

    #[test]
    fn test_to_param_excludes_null() {
        assert_eq!(FieldValue::Null.to_param(), None);
    }

    #[test]
    fn test_to_param_compacts_json_objects() {
        let value = FieldValue::Json(json!({"bid": 100}));
        assert_eq!(value.to_param(), Some(r#"{"bid":100}"#.to_string()));
    }

    #[test]
    fn test_accessors() {
        assert!(FieldValue::Null.is_null());
        assert_eq!(FieldValue::from("x").as_str(), Some("x"));
        assert_eq!(FieldValue::Bool(true).as_bool(), Some(true));
        assert!(FieldValue::from("x").as_time().is_none());
    }
}
