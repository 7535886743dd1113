//! Errors raised while decoding envelopes and payloads.
//!
//! Every failure is reported through a `thiserror`-derived type with
//! structured context so callers can decide whether to reply with an error
//! response, drop the message, or close the connection.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

use crate::error_code::ErrorCode;

/// Errors produced while turning raw JSON into a [`crate::Message`].
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The `id` member is present but is neither an acceptable integer nor a
    /// string.
    #[error("malformed request id: expected an unsigned integer or a string, found {found}")]
    MalformedIdentifier {
        /// Rendering of the offending JSON value.
        found: String,
    },

    /// The object matches none of the request, notification or response
    /// shapes.
    #[error("invalid JSON-RPC envelope: {violation}")]
    InvalidEnvelope {
        /// The structural rule that was broken.
        violation: EnvelopeViolation,
    },

    /// The `jsonrpc` member is present but is not `"2.0"`.
    #[error("unsupported JSON-RPC version {found}, expected \"2.0\"")]
    UnsupportedProtocolVersion {
        /// Rendering of the received version member.
        found: String,
    },

    /// The raw bytes were not JSON at all.
    #[error("message is not valid JSON: {0}")]
    Parse(#[source] serde_json::Error),
}

impl DecodeError {
    pub(crate) fn malformed_identifier(value: &Value) -> Self {
        Self::MalformedIdentifier {
            found: describe(value),
        }
    }

    pub(crate) const fn invalid(violation: EnvelopeViolation) -> Self {
        Self::InvalidEnvelope { violation }
    }

    pub(crate) fn unsupported_version(value: &Value) -> Self {
        Self::UnsupportedProtocolVersion {
            found: describe(value),
        }
    }

    /// Returns the error code a server should reply with.
    ///
    /// Unparseable input maps to [`ErrorCode::PARSE_ERROR`]; every structural
    /// problem maps to [`ErrorCode::INVALID_REQUEST`].
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::Parse(_) => ErrorCode::PARSE_ERROR,
            Self::MalformedIdentifier { .. }
            | Self::InvalidEnvelope { .. }
            | Self::UnsupportedProtocolVersion { .. } => ErrorCode::INVALID_REQUEST,
        }
    }
}

/// Structural rule broken by an invalid envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnvelopeViolation {
    /// The top-level value is not a JSON object.
    NotAnObject,
    /// The top-level value is an array; batches are not supported.
    BatchUnsupported,
    /// The `jsonrpc` member is missing under strict version checking.
    MissingVersion,
    /// Neither `method` nor `id` is present.
    MissingMethodAndId,
    /// The `method` member is not a string.
    MethodNotString,
    /// The `params` member is neither an object nor an array.
    ParamsNotStructured,
    /// A request or notification carries `result` or `error`.
    UnexpectedResponseMember,
    /// A response carries both `result` and `error`.
    ResultAndError,
    /// A response carries neither `result` nor `error`.
    MissingResultOrError,
    /// The `error` member is not a valid error object.
    MalformedErrorObject,
    /// A request carries a `null` identifier.
    NullRequestId,
}

impl EnvelopeViolation {
    /// Returns a short description of the broken rule.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::NotAnObject => "message is not a JSON object",
            Self::BatchUnsupported => "batch messages are not supported",
            Self::MissingVersion => "missing \"jsonrpc\" member",
            Self::MissingMethodAndId => "message has neither \"method\" nor \"id\"",
            Self::MethodNotString => "\"method\" must be a string",
            Self::ParamsNotStructured => "\"params\" must be an object or an array",
            Self::UnexpectedResponseMember => {
                "requests and notifications must not carry \"result\" or \"error\""
            }
            Self::ResultAndError => "response carries both \"result\" and \"error\"",
            Self::MissingResultOrError => "response carries neither \"result\" nor \"error\"",
            Self::MalformedErrorObject => {
                "\"error\" must be an object with an integer \"code\" and a string \"message\""
            }
            Self::NullRequestId => "request id must not be null",
        }
    }
}

impl fmt::Display for EnvelopeViolation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.description())
    }
}

/// Which opaque payload a typed decode was attempted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadKind {
    /// The `params` member of a request or notification.
    Params,
    /// The `result` member of a successful response.
    Result,
}

impl fmt::Display for PayloadKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(match self {
            Self::Params => "params",
            Self::Result => "result",
        })
    }
}

/// A method-specific payload did not match the expected structure.
#[derive(Debug, Error)]
#[error("failed to decode {kind} for '{method}': {source}")]
pub struct PayloadDecodeError {
    method: String,
    kind: PayloadKind,
    #[source]
    source: serde_json::Error,
}

impl PayloadDecodeError {
    pub(crate) fn new(method: &str, kind: PayloadKind, source: serde_json::Error) -> Self {
        Self {
            method: method.to_owned(),
            kind,
            source,
        }
    }

    /// Returns the method whose payload failed to decode.
    #[must_use]
    pub const fn method(&self) -> &str {
        self.method.as_str()
    }

    /// Returns the payload that failed to decode.
    #[must_use]
    pub const fn kind(&self) -> PayloadKind {
        self.kind
    }
}

/// Parameters handed to a request or notification constructor cannot travel
/// on the wire.
#[derive(Debug, Error)]
pub enum ParamsError {
    /// Typed parameters failed to serialise.
    #[error("failed to serialise params: {0}")]
    Serialise(#[from] serde_json::Error),

    /// The parameters are a JSON scalar; only objects and arrays may be sent.
    #[error("params must be an object or an array, found {found}")]
    NotStructured {
        /// Rendering of the rejected value.
        found: String,
    },
}

impl ParamsError {
    pub(crate) fn not_structured(value: &Value) -> Self {
        Self::NotStructured {
            found: describe(value),
        }
    }
}

/// Renders a JSON value for error messages without echoing large payloads.
fn describe(value: &Value) -> String {
    match value {
        Value::Object(_) => String::from("an object"),
        Value::Array(_) => String::from("an array"),
        scalar => scalar.to_string(),
    }
}
