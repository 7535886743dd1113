//! Envelope classification, decoding and encoding.
//!
//! Decoding works on an already-parsed [`serde_json::Value`] so it can sit
//! behind any framing layer. Checks run in a fixed order: the value must be
//! an object, its shape is classified from the `method`, `id`, `result` and
//! `error` members, the identifier is decoded, the `jsonrpc` version is
//! checked, and finally the shape-specific members are validated.

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::JSONRPC_VERSION;
use crate::error::{DecodeError, EnvelopeViolation};
use crate::error_code::ResponseError;
use crate::id::RequestId;
use crate::message::{Message, MessageKind, Notification, Outcome, Request, Response};
use crate::options::{DecodeOptions, VersionCheck};

/// Tracing target for codec events.
pub const CODEC_TARGET: &str = "lspwire_jsonrpc::codec";

/// Decodes raw messages with a fixed set of [`DecodeOptions`].
///
/// The decoder holds no mutable state and may be shared freely between
/// threads.
///
/// # Example
///
/// ```
/// use lspwire_jsonrpc::{DecodeOptions, Decoder, MessageKind, NegativeIdPolicy, RequestId};
///
/// let decoder = Decoder::new(
///     DecodeOptions::default().with_negative_ids(NegativeIdPolicy::Stringify),
/// );
/// let message = decoder
///     .decode_str(r#"{"jsonrpc":"2.0","id":-7,"method":"shutdown"}"#)
///     .expect("decode");
/// assert_eq!(message.kind(), MessageKind::Request);
/// assert_eq!(message.id(), Some(&RequestId::from("-7")));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Decoder {
    options: DecodeOptions,
}

impl Decoder {
    /// Creates a decoder using `options`.
    #[must_use]
    pub const fn new(options: DecodeOptions) -> Self {
        Self { options }
    }

    /// Returns the options in effect.
    #[must_use]
    pub const fn options(&self) -> DecodeOptions {
        self.options
    }

    /// Decodes a parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] when the value is not a valid JSON-RPC 2.0
    /// message.
    pub fn decode(&self, value: Value) -> Result<Message, DecodeError> {
        let outcome = decode_envelope(value, &self.options);
        match &outcome {
            Ok(message) => trace!(
                target: CODEC_TARGET,
                kind = %message.kind(),
                method = ?message.method(),
                id = ?message.id(),
                "decoded message"
            ),
            Err(error) => debug!(target: CODEC_TARGET, %error, "rejected message"),
        }
        outcome
    }

    /// Salvages the identifier of a message this decoder rejected.
    ///
    /// See [`recover_id_with`].
    #[must_use]
    pub fn recover_id(&self, raw: &Value) -> Option<RequestId> {
        recover_id_with(raw, &self.options)
    }

    /// Parses and decodes a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Parse`] when `text` is not JSON, otherwise as
    /// [`Decoder::decode`].
    pub fn decode_str(&self, text: &str) -> Result<Message, DecodeError> {
        let value = serde_json::from_str(text).map_err(parse_failure)?;
        self.decode(value)
    }

    /// Parses and decodes a JSON document from bytes.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Parse`] when `bytes` are not JSON, otherwise as
    /// [`Decoder::decode`].
    pub fn decode_slice(&self, bytes: &[u8]) -> Result<Message, DecodeError> {
        let value = serde_json::from_slice(bytes).map_err(parse_failure)?;
        self.decode(value)
    }
}

/// Decodes a parsed JSON value with default options.
///
/// # Errors
///
/// Returns [`DecodeError`] when the value is not a valid JSON-RPC 2.0
/// message.
pub fn decode(value: Value) -> Result<Message, DecodeError> {
    Decoder::default().decode(value)
}

/// Decodes a parsed JSON value with explicit options.
///
/// # Errors
///
/// Returns [`DecodeError`] when the value is not a valid JSON-RPC 2.0
/// message under `options`.
pub fn decode_with(value: Value, options: &DecodeOptions) -> Result<Message, DecodeError> {
    Decoder::new(*options).decode(value)
}

/// Parses and decodes a JSON document with default options.
///
/// # Errors
///
/// Returns [`DecodeError::Parse`] for invalid JSON, otherwise as [`decode`].
pub fn decode_str(text: &str) -> Result<Message, DecodeError> {
    Decoder::default().decode_str(text)
}

/// Parses and decodes a JSON document from bytes with default options.
///
/// # Errors
///
/// Returns [`DecodeError::Parse`] for invalid JSON, otherwise as [`decode`].
pub fn decode_slice(bytes: &[u8]) -> Result<Message, DecodeError> {
    Decoder::default().decode_slice(bytes)
}

/// Determines the envelope shape of a JSON object without decoding it.
///
/// A `method` member makes the object a request (with `id`) or notification
/// (without). An object carrying only `id` is a response.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidEnvelope`] when the object carries both
/// `result` and `error`, or neither `method` nor `id`.
pub fn classify(object: &Map<String, Value>) -> Result<MessageKind, DecodeError> {
    if object.contains_key("result") && object.contains_key("error") {
        return Err(DecodeError::invalid(EnvelopeViolation::ResultAndError));
    }
    match (object.contains_key("method"), object.contains_key("id")) {
        (true, true) => Ok(MessageKind::Request),
        (true, false) => Ok(MessageKind::Notification),
        (false, true) => Ok(MessageKind::Response),
        (false, false) => Err(DecodeError::invalid(EnvelopeViolation::MissingMethodAndId)),
    }
}

/// Salvages the identifier from a message that may have failed to decode,
/// using the default [`DecodeOptions`].
///
/// Returns `None` when `raw` is not an object, has no `id`, or its `id` is
/// not a valid identifier.
#[must_use]
pub fn recover_id(raw: &Value) -> Option<RequestId> {
    recover_id_with(raw, &DecodeOptions::default())
}

/// Salvages the identifier from a message under `options`.
///
/// A negative `id` is recovered in its stringified form when `options` accept
/// negative identifiers, so the error reply echoes what the decoder would have
/// produced.
#[must_use]
pub fn recover_id_with(raw: &Value, options: &DecodeOptions) -> Option<RequestId> {
    let id = raw.as_object()?.get("id")?;
    RequestId::from_value(id.clone(), options.negative_ids()).ok()
}

/// Encodes a message as a JSON value.
#[must_use]
pub fn encode(message: &Message) -> Value {
    let mut object = Map::new();
    object.insert(String::from("jsonrpc"), Value::from(JSONRPC_VERSION));
    match message {
        Message::Request(request) => {
            object.insert(String::from("id"), request.id().to_value());
            object.insert(String::from("method"), Value::from(request.method()));
            if let Some(params) = request.params() {
                object.insert(String::from("params"), params.clone());
            }
        }
        Message::Notification(notification) => {
            object.insert(String::from("method"), Value::from(notification.method()));
            if let Some(params) = notification.params() {
                object.insert(String::from("params"), params.clone());
            }
        }
        Message::Response(response) => {
            let id = response.id().map_or(Value::Null, RequestId::to_value);
            object.insert(String::from("id"), id);
            match response.outcome() {
                Outcome::Success(result) => {
                    object.insert(String::from("result"), result.clone());
                }
                Outcome::Failure(error) => {
                    object.insert(String::from("error"), encode_error_object(error));
                }
            }
        }
    }
    Value::Object(object)
}

/// Encodes a message as compact JSON text.
///
/// Members are written in the order `jsonrpc`, `id`, `method`, `params`,
/// `result`, `error`, skipping those the envelope does not carry.
///
/// # Errors
///
/// Returns the serialiser error, which cannot occur for well-formed values.
pub fn encode_to_string(message: &Message) -> Result<String, serde_json::Error> {
    serde_json::to_string(message)
}

/// Encodes a message as compact JSON bytes.
///
/// # Errors
///
/// Returns the serialiser error, which cannot occur for well-formed values.
pub fn encode_to_vec(message: &Message) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(message)
}

fn encode_error_object(error: &ResponseError) -> Value {
    let mut object = Map::new();
    object.insert(String::from("code"), Value::from(error.code().value()));
    object.insert(String::from("message"), Value::from(error.message()));
    if let Some(data) = error.data() {
        object.insert(String::from("data"), data.clone());
    }
    Value::Object(object)
}

fn parse_failure(source: serde_json::Error) -> DecodeError {
    debug!(target: CODEC_TARGET, error = %source, "message is not valid JSON");
    DecodeError::Parse(source)
}

fn decode_envelope(value: Value, options: &DecodeOptions) -> Result<Message, DecodeError> {
    let mut object = match value {
        Value::Object(object) => object,
        Value::Array(_) => return Err(DecodeError::invalid(EnvelopeViolation::BatchUnsupported)),
        _ => return Err(DecodeError::invalid(EnvelopeViolation::NotAnObject)),
    };

    match classify(&object)? {
        MessageKind::Request => {
            let id = match object.remove("id") {
                Some(Value::Null) | None => {
                    return Err(DecodeError::invalid(EnvelopeViolation::NullRequestId));
                }
                Some(raw) => RequestId::from_value(raw, options.negative_ids())?,
            };
            check_version(&object, options.version_check())?;
            let (method, params) = take_call(&mut object)?;
            Ok(Message::Request(Request::from_parts(id, method, params)))
        }
        MessageKind::Notification => {
            check_version(&object, options.version_check())?;
            let (method, params) = take_call(&mut object)?;
            Ok(Message::Notification(Notification::from_parts(method, params)))
        }
        MessageKind::Response => {
            let id = match object.remove("id") {
                Some(Value::Null) | None => None,
                Some(raw) => Some(RequestId::from_value(raw, options.negative_ids())?),
            };
            check_version(&object, options.version_check())?;
            let outcome = take_outcome(&mut object)?;
            Ok(Message::Response(Response::from_parts(id, outcome)))
        }
    }
}

fn check_version(object: &Map<String, Value>, check: VersionCheck) -> Result<(), DecodeError> {
    match (object.get("jsonrpc"), check) {
        (None, VersionCheck::Strict) => Err(DecodeError::invalid(EnvelopeViolation::MissingVersion)),
        (None, VersionCheck::Lenient) => Ok(()),
        (Some(Value::String(version)), _) if version == JSONRPC_VERSION => Ok(()),
        (Some(other), _) => Err(DecodeError::unsupported_version(other)),
    }
}

fn take_call(object: &mut Map<String, Value>) -> Result<(String, Option<Value>), DecodeError> {
    if object.contains_key("result") || object.contains_key("error") {
        return Err(DecodeError::invalid(
            EnvelopeViolation::UnexpectedResponseMember,
        ));
    }
    let method = match object.remove("method") {
        Some(Value::String(method)) => method,
        _ => return Err(DecodeError::invalid(EnvelopeViolation::MethodNotString)),
    };
    let params = match object.remove("params") {
        None | Some(Value::Null) => None,
        Some(params @ (Value::Object(_) | Value::Array(_))) => Some(params),
        Some(_) => return Err(DecodeError::invalid(EnvelopeViolation::ParamsNotStructured)),
    };
    Ok((method, params))
}

fn take_outcome(object: &mut Map<String, Value>) -> Result<Outcome, DecodeError> {
    match (object.remove("result"), object.remove("error")) {
        (Some(result), None) => Ok(Outcome::Success(result)),
        (None, Some(error)) => serde_json::from_value::<ResponseError>(error)
            .map(Outcome::Failure)
            .map_err(|_| DecodeError::invalid(EnvelopeViolation::MalformedErrorObject)),
        (None, None) => Err(DecodeError::invalid(
            EnvelopeViolation::MissingResultOrError,
        )),
        (Some(_), Some(_)) => Err(DecodeError::invalid(EnvelopeViolation::ResultAndError)),
    }
}
