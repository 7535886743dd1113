//! Polymorphic JSON-RPC request identifiers.
//!
//! JSON-RPC allows the `id` member to be a number or a string. The two forms
//! are kept apart: an identifier received as the string `"42"` is not equal
//! to one received as the number `42`, and each re-encodes in the form it
//! arrived in.

use std::fmt;

use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::error::DecodeError;
use crate::options::NegativeIdPolicy;

/// Identifier correlating a request with its response.
///
/// # Example
///
/// ```
/// use lspwire_jsonrpc::RequestId;
///
/// let numeric = RequestId::from(42_u64);
/// let text = RequestId::from("42");
/// assert_ne!(numeric, text);
/// assert_eq!(numeric.to_string(), "42");
/// assert_eq!(text.to_string(), "\"42\"");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RequestId {
    /// Identifier sent as a JSON number.
    Numeric(u64),
    /// Identifier sent as a JSON string.
    Text(String),
}

impl RequestId {
    /// Decodes an identifier from a raw JSON value.
    ///
    /// Unsigned integers become [`RequestId::Numeric`] and strings become
    /// [`RequestId::Text`]. Negative integers are handled according to
    /// `policy`; every other JSON type is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::MalformedIdentifier`] when the value is neither
    /// an acceptable integer nor a string.
    pub fn from_value(value: Value, policy: NegativeIdPolicy) -> Result<Self, DecodeError> {
        match value {
            Value::Number(ref number) => match (number.as_u64(), number.as_i64(), policy) {
                (Some(unsigned), _, _) => Ok(Self::Numeric(unsigned)),
                (None, Some(signed), NegativeIdPolicy::Stringify) => {
                    Ok(Self::Text(signed.to_string()))
                }
                _ => Err(DecodeError::malformed_identifier(&value)),
            },
            Value::String(text) => Ok(Self::Text(text)),
            other => Err(DecodeError::malformed_identifier(&other)),
        }
    }

    /// Encodes the identifier as the JSON value it travels as.
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Self::Numeric(number) => Value::from(*number),
            Self::Text(text) => Value::String(text.clone()),
        }
    }

    /// Returns `true` for identifiers carried as JSON strings.
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Returns the numeric value when the identifier is numeric.
    #[must_use]
    pub const fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Numeric(number) => Some(*number),
            Self::Text(_) => None,
        }
    }

    /// Returns the text when the identifier is a string.
    #[must_use]
    pub const fn as_str(&self) -> Option<&str> {
        match self {
            Self::Numeric(_) => None,
            Self::Text(text) => Some(text.as_str()),
        }
    }
}

/// Renders the identifier as it appears on the wire: digits for numbers and a
/// JSON string literal for text.
impl fmt::Display for RequestId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(number) => write!(formatter, "{number}"),
            Self::Text(text) => {
                let literal = serde_json::to_string(text).map_err(|_| fmt::Error)?;
                formatter.write_str(&literal)
            }
        }
    }
}

impl From<u64> for RequestId {
    fn from(number: u64) -> Self {
        Self::Numeric(number)
    }
}

impl From<String> for RequestId {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for RequestId {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl Serialize for RequestId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Numeric(number) => serializer.serialize_u64(*number),
            Self::Text(text) => serializer.serialize_str(text),
        }
    }
}

impl<'de> Deserialize<'de> for RequestId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(RequestIdVisitor)
    }
}

struct RequestIdVisitor;

impl Visitor<'_> for RequestIdVisitor {
    type Value = RequestId;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("an unsigned integer or a string")
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(RequestId::Numeric(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        u64::try_from(value)
            .map(RequestId::Numeric)
            .map_err(|_| E::invalid_value(Unexpected::Signed(value), &self))
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(RequestId::Text(value.to_owned()))
    }

    fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(RequestId::Text(value))
    }
}
