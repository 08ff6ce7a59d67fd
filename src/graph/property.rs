//! Property value types for graph nodes and edges

use indexmap::IndexMap;
use serde::ser::{Error as SerError, Serialize, Serializer};
use std::fmt;

/// Property value attached to a node or edge
///
/// A closed set of scalar variants:
/// - String
/// - Integer (i64)
/// - Float (f64)
/// - Boolean
/// - Null
///
/// Any value is accepted at insertion time. Export is stricter: a
/// non-finite float (`NaN`, infinity) has no JSON representation and fails
/// serialization (see [`crate::export::ExportError`]).
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Null,
}

impl PropertyValue {
    /// Check if value is null
    pub fn is_null(&self) -> bool {
        matches!(self, PropertyValue::Null)
    }

    /// Get string value if this is a string
    pub fn as_string(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get integer value if this is an integer
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            PropertyValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get float value if this is a float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            PropertyValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get boolean value if this is a boolean
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            PropertyValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get type name as string
    pub fn type_name(&self) -> &'static str {
        match self {
            PropertyValue::String(_) => "String",
            PropertyValue::Integer(_) => "Integer",
            PropertyValue::Float(_) => "Float",
            PropertyValue::Boolean(_) => "Boolean",
            PropertyValue::Null => "Null",
        }
    }
}

// Serialization is hand-written rather than derived: serde_json renders a
// non-finite f64 as `null`, which would silently corrupt the export. The
// contract is permissive insertion, strict export.
impl Serialize for PropertyValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PropertyValue::String(s) => serializer.serialize_str(s),
            PropertyValue::Integer(i) => serializer.serialize_i64(*i),
            PropertyValue::Float(f) => {
                if !f.is_finite() {
                    return Err(S::Error::custom(format!(
                        "non-finite float {} is not serializable",
                        f
                    )));
                }
                serializer.serialize_f64(*f)
            }
            PropertyValue::Boolean(b) => serializer.serialize_bool(*b),
            PropertyValue::Null => serializer.serialize_unit(),
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::String(s) => write!(f, "\"{}\"", s),
            PropertyValue::Integer(i) => write!(f, "{}", i),
            PropertyValue::Float(fl) => write!(f, "{}", fl),
            PropertyValue::Boolean(b) => write!(f, "{}", b),
            PropertyValue::Null => write!(f, "null"),
        }
    }
}

// Convenience conversions
impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        PropertyValue::String(s)
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::String(s.to_string())
    }
}

impl From<i64> for PropertyValue {
    fn from(i: i64) -> Self {
        PropertyValue::Integer(i)
    }
}

impl From<i32> for PropertyValue {
    fn from(i: i32) -> Self {
        PropertyValue::Integer(i as i64)
    }
}

impl From<f64> for PropertyValue {
    fn from(f: f64) -> Self {
        PropertyValue::Float(f)
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        PropertyValue::Boolean(b)
    }
}

impl<T: Into<PropertyValue>> From<Option<T>> for PropertyValue {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => PropertyValue::Null,
        }
    }
}

/// Property map for storing node and edge properties
///
/// Insertion-ordered so that exports are deterministic and stable across
/// repeated serialization of the same graph.
pub type PropertyMap = IndexMap<String, PropertyValue>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_value_types() {
        assert_eq!(
            PropertyValue::String("test".to_string()).type_name(),
            "String"
        );
        assert_eq!(PropertyValue::Integer(42).type_name(), "Integer");
        assert_eq!(PropertyValue::Float(3.14).type_name(), "Float");
        assert_eq!(PropertyValue::Boolean(true).type_name(), "Boolean");
        assert_eq!(PropertyValue::Null.type_name(), "Null");
    }

    #[test]
    fn test_property_value_conversions() {
        let string_prop: PropertyValue = "hello".into();
        assert_eq!(string_prop.as_string(), Some("hello"));

        let int_prop: PropertyValue = 42i64.into();
        assert_eq!(int_prop.as_integer(), Some(42));

        let float_prop: PropertyValue = 3.14.into();
        assert_eq!(float_prop.as_float(), Some(3.14));

        let bool_prop: PropertyValue = true.into();
        assert_eq!(bool_prop.as_boolean(), Some(true));

        let null_prop: PropertyValue = Option::<i64>::None.into();
        assert!(null_prop.is_null());
    }

    #[test]
    fn test_property_map_preserves_insertion_order() {
        let mut props = PropertyMap::new();
        props.insert("zeta".to_string(), "last-name-first".into());
        props.insert("alpha".to_string(), 1i64.into());
        props.insert("mid".to_string(), true.into());

        let keys: Vec<&str> = props.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_serialize_scalars() {
        assert_eq!(
            serde_json::to_string(&PropertyValue::String("a".into())).unwrap(),
            "\"a\""
        );
        assert_eq!(
            serde_json::to_string(&PropertyValue::Integer(7)).unwrap(),
            "7"
        );
        assert_eq!(
            serde_json::to_string(&PropertyValue::Boolean(false)).unwrap(),
            "false"
        );
        assert_eq!(serde_json::to_string(&PropertyValue::Null).unwrap(), "null");
    }

    #[test]
    fn test_serialize_rejects_non_finite_floats() {
        assert!(serde_json::to_string(&PropertyValue::Float(f64::NAN)).is_err());
        assert!(serde_json::to_string(&PropertyValue::Float(f64::INFINITY)).is_err());
        assert!(serde_json::to_string(&PropertyValue::Float(f64::NEG_INFINITY)).is_err());
        assert!(serde_json::to_string(&PropertyValue::Float(0.5)).is_ok());
    }
}
