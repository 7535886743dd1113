//! JSON-RPC 2.0 envelopes for the Language Server Protocol.
//!
//! This crate turns parsed JSON values into typed [`Message`] envelopes and
//! back. Requests, notifications and responses are distinguished by the
//! members they carry, and request identifiers keep the JSON type they were
//! sent with: `42` and `"42"` are different identifiers.
//!
//! Payloads stay opaque until the caller asks for a concrete structure with
//! [`Request::params_as`], [`Notification::params_as`] or
//! [`Response::result_as`]. Framing (such as `Content-Length` headers) and
//! method dispatch are out of scope.
//!
//! # Example
//!
//! ```
//! use lspwire_jsonrpc::{Message, RequestId, decode_str, encode_to_string};
//!
//! let message = decode_str(r#"{"jsonrpc":"2.0","id":"abc","method":"shutdown"}"#)
//!     .expect("decode request");
//! let Message::Request(request) = &message else {
//!     panic!("expected a request");
//! };
//! assert_eq!(request.id(), &RequestId::from("abc"));
//! assert_eq!(
//!     encode_to_string(&message).expect("encode"),
//!     r#"{"jsonrpc":"2.0","id":"abc","method":"shutdown"}"#,
//! );
//! ```
//!
//! Decoding emits `tracing` events under the [`CODEC_TARGET`] target:
//! rejected messages at `debug`, decoded ones at `trace`.

pub mod codec;
mod error;
mod error_code;
mod id;
mod message;
mod options;

pub use codec::{
    CODEC_TARGET, Decoder, classify, decode, decode_slice, decode_str, decode_with, encode,
    encode_to_string, encode_to_vec, recover_id, recover_id_with,
};
pub use error::{DecodeError, EnvelopeViolation, ParamsError, PayloadDecodeError, PayloadKind};
pub use error_code::{ErrorCode, ResponseError};
pub use id::RequestId;
pub use message::{Message, MessageKind, Notification, Outcome, Request, Response};
pub use options::{DecodeOptions, NegativeIdPolicy, VersionCheck};

/// The protocol version every envelope carries in its `jsonrpc` member.
pub const JSONRPC_VERSION: &str = "2.0";

#[cfg(test)]
mod tests;
