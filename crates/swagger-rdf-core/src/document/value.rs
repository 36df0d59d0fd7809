//! Scalar and polymorphic document values.

use super::ordered::OrderedMap;
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use std::fmt;

/// A scalar document value in its string form.
///
/// Strings are kept verbatim; numbers and booleans are stringified. Null,
/// arrays and objects are rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scalar(pub String);

impl Scalar {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// JSON text of a float: `1.0` stays `1.0`.
fn float_string(v: f64) -> String {
    serde_json::Number::from_f64(v)
        .map(|n| n.to_string())
        .unwrap_or_else(|| v.to_string())
}

struct ScalarVisitor;

impl<'de> Visitor<'de> for ScalarVisitor {
    type Value = Scalar;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, number or boolean")
    }

    fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Scalar, E> {
        Ok(Scalar(v.to_string()))
    }

    fn visit_string<E: serde::de::Error>(self, v: String) -> Result<Scalar, E> {
        Ok(Scalar(v))
    }

    fn visit_bool<E: serde::de::Error>(self, v: bool) -> Result<Scalar, E> {
        Ok(Scalar(v.to_string()))
    }

    fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Scalar, E> {
        Ok(Scalar(v.to_string()))
    }

    fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Scalar, E> {
        Ok(Scalar(v.to_string()))
    }

    fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<Scalar, E> {
        Ok(Scalar(float_string(v)))
    }
}

impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ScalarVisitor)
    }
}

/// Value of a direct security-definition property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecurityValue {
    /// A scalar, e.g. `"type": "apiKey"`.
    Text(String),
    /// A nested object, e.g. `"scopes": {"read": "Read access"}`.
    Object(OrderedMap<Scalar>),
}

impl<'de> Deserialize<'de> for SecurityValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SecurityValueVisitor;

        impl<'de> Visitor<'de> for SecurityValueVisitor {
            type Value = SecurityValue;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string or an object")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<SecurityValue, E> {
                Ok(SecurityValue::Text(v.to_string()))
            }

            fn visit_string<E: serde::de::Error>(self, v: String) -> Result<SecurityValue, E> {
                Ok(SecurityValue::Text(v))
            }

            fn visit_bool<E: serde::de::Error>(self, v: bool) -> Result<SecurityValue, E> {
                Ok(SecurityValue::Text(v.to_string()))
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<SecurityValue, E> {
                Ok(SecurityValue::Text(v.to_string()))
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<SecurityValue, E> {
                Ok(SecurityValue::Text(v.to_string()))
            }

            fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<SecurityValue, E> {
                Ok(SecurityValue::Text(float_string(v)))
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<SecurityValue, A::Error> {
                let mut entries = Vec::new();
                while let Some(entry) = access.next_entry::<String, Scalar>()? {
                    entries.push(entry);
                }
                Ok(SecurityValue::Object(entries.into_iter().collect()))
            }
        }

        deserializer.deserialize_any(SecurityValueVisitor)
    }
}
