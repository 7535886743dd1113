//! JSON-RPC error objects and well-known error codes.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Numeric error code carried in a response error object.
///
/// Codes between `-32768` and `-32000` inclusive are reserved for
/// protocol-level errors. Everything else is available to applications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorCode(i64);

impl ErrorCode {
    /// Invalid JSON was received.
    pub const PARSE_ERROR: Self = Self(-32700);
    /// The JSON sent is not a valid request object.
    pub const INVALID_REQUEST: Self = Self(-32600);
    /// The method does not exist or is not available.
    pub const METHOD_NOT_FOUND: Self = Self(-32601);
    /// Invalid method parameters.
    pub const INVALID_PARAMS: Self = Self(-32602);
    /// Internal JSON-RPC error.
    pub const INTERNAL_ERROR: Self = Self(-32603);
    /// A request arrived before the server received `initialize`.
    pub const SERVER_NOT_INITIALIZED: Self = Self(-32002);
    /// Generic fallback code.
    pub const UNKNOWN_ERROR_CODE: Self = Self(-32001);
    /// A syntactically valid request failed for a reason the server can name.
    pub const REQUEST_FAILED: Self = Self(-32803);
    /// The server cancelled the request.
    pub const SERVER_CANCELLED: Self = Self(-32802);
    /// Document content changed while the request was being processed.
    pub const CONTENT_MODIFIED: Self = Self(-32801);
    /// The client cancelled the request.
    pub const REQUEST_CANCELLED: Self = Self(-32800);

    const RESERVED_START: i64 = -32768;
    const RESERVED_END: i64 = -32000;

    /// Wraps a raw code.
    #[must_use]
    pub const fn new(code: i64) -> Self {
        Self(code)
    }

    /// Returns the raw code.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Returns `true` when the code lies in the protocol-reserved range.
    #[must_use]
    pub const fn is_reserved(self) -> bool {
        self.0 >= Self::RESERVED_START && self.0 <= Self::RESERVED_END
    }

    /// Returns the conventional name for well-known codes.
    #[must_use]
    pub const fn name(self) -> Option<&'static str> {
        let name = match self.0 {
            -32700 => "ParseError",
            -32600 => "InvalidRequest",
            -32601 => "MethodNotFound",
            -32602 => "InvalidParams",
            -32603 => "InternalError",
            -32002 => "ServerNotInitialized",
            -32001 => "UnknownErrorCode",
            -32803 => "RequestFailed",
            -32802 => "ServerCancelled",
            -32801 => "ContentModified",
            -32800 => "RequestCancelled",
            _ => return None,
        };
        Some(name)
    }
}

impl From<i64> for ErrorCode {
    fn from(code: i64) -> Self {
        Self(code)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(formatter, "{name} ({})", self.0),
            None => write!(formatter, "{}", self.0),
        }
    }
}

/// Error object carried by a failed response.
///
/// An explicit `"data": null` survives decoding as `Some(Value::Null)`, kept
/// apart from an absent member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
#[error("{message} [{code}]")]
pub struct ResponseError {
    code: ErrorCode,
    message: String,
    #[serde(
        default,
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    data: Option<Value>,
}

impl ResponseError {
    /// Creates an error object without extra data.
    #[must_use]
    pub fn new(code: impl Into<ErrorCode>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            data: None,
        }
    }

    /// Attaches structured diagnostic data.
    #[must_use]
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Returns the error code.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Returns the human-readable message.
    #[must_use]
    pub const fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Returns the optional diagnostic data.
    #[must_use]
    pub const fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }
}

fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
