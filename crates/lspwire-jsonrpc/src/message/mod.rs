//! Request, notification and response envelopes.
//!
//! Payloads (`params`, `result`, `error.data`) stay opaque JSON values at this
//! layer. The method name alone determines their shape, so re-decoding into a
//! concrete structure is left to the caller through [`Request::params_as`],
//! [`Notification::params_as`] and [`Response::result_as`].

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use strum::Display;

use crate::JSONRPC_VERSION;
use crate::codec;
use crate::error::{DecodeError, ParamsError, PayloadDecodeError, PayloadKind};
use crate::error_code::ResponseError;
use crate::id::RequestId;

static NULL_PAYLOAD: Value = Value::Null;

/// The three envelope shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum MessageKind {
    /// A call expecting a correlated response.
    Request,
    /// A fire-and-forget call.
    Notification,
    /// A reply to an earlier request.
    Response,
}

/// A call that expects a response carrying the same identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    id: RequestId,
    method: String,
    params: Option<Value>,
}

impl Request {
    /// Creates a request without parameters.
    #[must_use]
    pub fn new(id: impl Into<RequestId>, method: impl Into<String>) -> Self {
        Self::from_parts(id.into(), method.into(), None)
    }

    /// Creates a request with opaque parameters.
    ///
    /// `Some(Value::Null)` is stored as absent parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ParamsError::NotStructured`] when `params` is a JSON scalar.
    pub fn try_new(
        id: impl Into<RequestId>,
        method: impl Into<String>,
        params: Option<Value>,
    ) -> Result<Self, ParamsError> {
        Ok(Self::from_parts(id.into(), method.into(), structured(params)?))
    }

    /// Creates a request by serialising typed parameters.
    ///
    /// Parameters that serialise to `null`, such as `()`, are omitted.
    ///
    /// # Errors
    ///
    /// Returns [`ParamsError`] when `params` cannot be serialised or does not
    /// serialise to an object or an array.
    pub fn with_params<P>(
        id: impl Into<RequestId>,
        method: impl Into<String>,
        params: &P,
    ) -> Result<Self, ParamsError>
    where
        P: Serialize + ?Sized,
    {
        Self::try_new(id, method, Some(serde_json::to_value(params)?))
    }

    pub(crate) const fn from_parts(id: RequestId, method: String, params: Option<Value>) -> Self {
        Self { id, method, params }
    }

    /// Returns the request identifier.
    #[must_use]
    pub const fn id(&self) -> &RequestId {
        &self.id
    }

    /// Returns the method name.
    #[must_use]
    pub const fn method(&self) -> &str {
        self.method.as_str()
    }

    /// Returns the opaque parameters, if any.
    #[must_use]
    pub const fn params(&self) -> Option<&Value> {
        self.params.as_ref()
    }

    /// Decodes the parameters into the structure expected for the method.
    ///
    /// Absent parameters decode as JSON `null`, which suits `()` and
    /// `Option<T>` targets.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadDecodeError`] when the parameters do not match `T`.
    pub fn params_as<T>(&self) -> Result<T, PayloadDecodeError>
    where
        T: DeserializeOwned,
    {
        decode_payload(&self.method, PayloadKind::Params, self.params.as_ref())
    }

    /// Splits the request into identifier, method and parameters.
    #[must_use]
    pub fn into_parts(self) -> (RequestId, String, Option<Value>) {
        (self.id, self.method, self.params)
    }
}

/// A call with no identifier and no reply.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    method: String,
    params: Option<Value>,
}

impl Notification {
    /// Creates a notification without parameters.
    #[must_use]
    pub fn new(method: impl Into<String>) -> Self {
        Self::from_parts(method.into(), None)
    }

    /// Creates a notification with opaque parameters.
    ///
    /// `Some(Value::Null)` is stored as absent parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ParamsError::NotStructured`] when `params` is a JSON scalar.
    pub fn try_new(method: impl Into<String>, params: Option<Value>) -> Result<Self, ParamsError> {
        Ok(Self::from_parts(method.into(), structured(params)?))
    }

    /// Creates a notification by serialising typed parameters.
    ///
    /// Parameters that serialise to `null` are omitted.
    ///
    /// # Errors
    ///
    /// Returns [`ParamsError`] when `params` cannot be serialised or does not
    /// serialise to an object or an array.
    pub fn with_params<P>(method: impl Into<String>, params: &P) -> Result<Self, ParamsError>
    where
        P: Serialize + ?Sized,
    {
        Self::try_new(method, Some(serde_json::to_value(params)?))
    }

    pub(crate) const fn from_parts(method: String, params: Option<Value>) -> Self {
        Self { method, params }
    }

    /// Returns the method name.
    #[must_use]
    pub const fn method(&self) -> &str {
        self.method.as_str()
    }

    /// Returns the opaque parameters, if any.
    #[must_use]
    pub const fn params(&self) -> Option<&Value> {
        self.params.as_ref()
    }

    /// Decodes the parameters into the structure expected for the method.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadDecodeError`] when the parameters do not match `T`.
    pub fn params_as<T>(&self) -> Result<T, PayloadDecodeError>
    where
        T: DeserializeOwned,
    {
        decode_payload(&self.method, PayloadKind::Params, self.params.as_ref())
    }

    /// Splits the notification into method and parameters.
    #[must_use]
    pub fn into_parts(self) -> (String, Option<Value>) {
        (self.method, self.params)
    }
}

/// Outcome carried by a response: exactly one of a result or an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The request succeeded. The value may be JSON `null`.
    Success(Value),
    /// The request failed.
    Failure(ResponseError),
}

/// A reply to an earlier request.
///
/// The identifier is absent only for error replies to messages whose own
/// identifier could not be recovered; it then travels as `"id": null`.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    id: Option<RequestId>,
    outcome: Outcome,
}

impl Response {
    /// Creates a successful response.
    #[must_use]
    pub fn success(id: impl Into<RequestId>, result: Value) -> Self {
        Self {
            id: Some(id.into()),
            outcome: Outcome::Success(result),
        }
    }

    /// Creates a successful response by serialising a typed result.
    ///
    /// # Errors
    ///
    /// Returns the serialisation error when `result` cannot be represented as
    /// JSON.
    pub fn success_with<R>(id: impl Into<RequestId>, result: &R) -> Result<Self, serde_json::Error>
    where
        R: Serialize + ?Sized,
    {
        let value = serde_json::to_value(result)?;
        Ok(Self::success(id, value))
    }

    /// Creates a failed response.
    #[must_use]
    pub const fn failure(id: Option<RequestId>, error: ResponseError) -> Self {
        Self {
            id,
            outcome: Outcome::Failure(error),
        }
    }

    pub(crate) const fn from_parts(id: Option<RequestId>, outcome: Outcome) -> Self {
        Self { id, outcome }
    }

    /// Builds the error reply for a message that failed to decode.
    ///
    /// Pair this with [`codec::Decoder::recover_id`] to echo the identifier
    /// when one could be salvaged from the raw message.
    #[must_use]
    pub fn from_decode_error(id: Option<RequestId>, error: &DecodeError) -> Self {
        Self::failure(id, ResponseError::new(error.error_code(), error.to_string()))
    }

    /// Returns the identifier of the request being answered.
    #[must_use]
    pub const fn id(&self) -> Option<&RequestId> {
        self.id.as_ref()
    }

    /// Returns the response outcome.
    #[must_use]
    pub const fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Returns the result of a successful response.
    #[must_use]
    pub const fn result(&self) -> Option<&Value> {
        match &self.outcome {
            Outcome::Success(result) => Some(result),
            Outcome::Failure(_) => None,
        }
    }

    /// Returns the error of a failed response.
    #[must_use]
    pub const fn error(&self) -> Option<&ResponseError> {
        match &self.outcome {
            Outcome::Success(_) => None,
            Outcome::Failure(error) => Some(error),
        }
    }

    /// Returns `true` when the response carries an error object.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.outcome, Outcome::Failure(_))
    }

    /// Decodes the result into the structure expected for `method`.
    ///
    /// The caller supplies the method name because responses do not carry
    /// one; it is typically looked up from the pending request table.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadDecodeError`] when the response is an error response
    /// or the result does not match `T`.
    pub fn result_as<T>(&self, method: &str) -> Result<T, PayloadDecodeError>
    where
        T: DeserializeOwned,
    {
        match &self.outcome {
            Outcome::Success(result) => decode_payload(method, PayloadKind::Result, Some(result)),
            Outcome::Failure(error) => Err(PayloadDecodeError::new(
                method,
                PayloadKind::Result,
                de::Error::custom(format_args!("response carries an error: {error}")),
            )),
        }
    }

    /// Converts the response into a standard [`Result`].
    ///
    /// # Errors
    ///
    /// Returns the error object of a failed response.
    pub fn into_result(self) -> Result<Value, ResponseError> {
        match self.outcome {
            Outcome::Success(result) => Ok(result),
            Outcome::Failure(error) => Err(error),
        }
    }
}

/// Any JSON-RPC message.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// A request.
    Request(Request),
    /// A notification.
    Notification(Notification),
    /// A response.
    Response(Response),
}

impl Message {
    /// Returns the envelope shape.
    #[must_use]
    pub const fn kind(&self) -> MessageKind {
        match self {
            Self::Request(_) => MessageKind::Request,
            Self::Notification(_) => MessageKind::Notification,
            Self::Response(_) => MessageKind::Response,
        }
    }

    /// Returns the method name of requests and notifications.
    #[must_use]
    pub const fn method(&self) -> Option<&str> {
        match self {
            Self::Request(request) => Some(request.method()),
            Self::Notification(notification) => Some(notification.method()),
            Self::Response(_) => None,
        }
    }

    /// Returns the identifier of requests and responses.
    #[must_use]
    pub const fn id(&self) -> Option<&RequestId> {
        match self {
            Self::Request(request) => Some(request.id()),
            Self::Notification(_) => None,
            Self::Response(response) => response.id(),
        }
    }
}

impl From<Request> for Message {
    fn from(request: Request) -> Self {
        Self::Request(request)
    }
}

impl From<Notification> for Message {
    fn from(notification: Notification) -> Self {
        Self::Notification(notification)
    }
}

impl From<Response> for Message {
    fn from(response: Response) -> Self {
        Self::Response(response)
    }
}

fn structured(params: Option<Value>) -> Result<Option<Value>, ParamsError> {
    match params {
        None | Some(Value::Null) => Ok(None),
        Some(params @ (Value::Object(_) | Value::Array(_))) => Ok(Some(params)),
        Some(scalar) => Err(ParamsError::not_structured(&scalar)),
    }
}

fn decode_payload<T>(
    method: &str,
    kind: PayloadKind,
    payload: Option<&Value>,
) -> Result<T, PayloadDecodeError>
where
    T: DeserializeOwned,
{
    T::deserialize(payload.unwrap_or(&NULL_PAYLOAD))
        .map_err(|source| PayloadDecodeError::new(method, kind, source))
}

// Borrowed wire shapes. Field order here is the order members are written.

#[derive(Serialize)]
struct RequestWire<'a> {
    jsonrpc: &'static str,
    id: &'a RequestId,
    method: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    params: Option<&'a Value>,
}

#[derive(Serialize)]
struct NotificationWire<'a> {
    jsonrpc: &'static str,
    method: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    params: Option<&'a Value>,
}

#[derive(Serialize)]
struct ResponseWire<'a> {
    jsonrpc: &'static str,
    id: Option<&'a RequestId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<&'a Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a ResponseError>,
}

impl Serialize for Request {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        RequestWire {
            jsonrpc: JSONRPC_VERSION,
            id: &self.id,
            method: &self.method,
            params: self.params.as_ref(),
        }
        .serialize(serializer)
    }
}

impl Serialize for Notification {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        NotificationWire {
            jsonrpc: JSONRPC_VERSION,
            method: &self.method,
            params: self.params.as_ref(),
        }
        .serialize(serializer)
    }
}

impl Serialize for Response {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        ResponseWire {
            jsonrpc: JSONRPC_VERSION,
            id: self.id.as_ref(),
            result: self.result(),
            error: self.error(),
        }
        .serialize(serializer)
    }
}

impl Serialize for Message {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Request(request) => request.serialize(serializer),
            Self::Notification(notification) => notification.serialize(serializer),
            Self::Response(response) => response.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Message {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        codec::decode(value).map_err(de::Error::custom)
    }
}
