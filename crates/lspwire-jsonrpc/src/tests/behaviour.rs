//! Behaviour-driven step definitions for the envelope codec.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, then, when};
use serde_json::Value;

use crate::{
    DecodeError, DecodeOptions, Decoder, Message, NegativeIdPolicy, RequestId, Response,
    VersionCheck, encode,
};

mod scenarios;

// =============================================================================
// Test World
// =============================================================================

/// State shared across BDD steps.
#[derive(Default)]
struct TestWorld {
    /// Raw message texts in the order they were given.
    raw: Vec<String>,
    /// Decoder settings.
    options: DecodeOptions,
    /// Decode outcomes, one per raw message.
    outcomes: Vec<Result<Message, DecodeError>>,
}

impl TestWorld {
    fn outcome(&self, index: usize) -> &Result<Message, DecodeError> {
        self.outcomes.get(index).expect("message was not decoded")
    }

    fn message(&self, index: usize) -> &Message {
        self.outcome(index)
            .as_ref()
            .expect("expected decoding to succeed")
    }
}

#[fixture]
fn world() -> RefCell<TestWorld> {
    RefCell::new(TestWorld::default())
}

/// Strips surrounding double quotes from a string if present.
fn strip_quotes(s: &str) -> &str {
    s.trim_matches('"')
}

/// Returns the raw text registered under a fixture name.
fn fixture_message(name: &str) -> &'static str {
    match name {
        "numeric_request" => r#"{"jsonrpc":"2.0","id":42,"method":"shutdown"}"#,
        "text_request" => r#"{"jsonrpc":"2.0","id":"42","method":"shutdown"}"#,
        "boolean_id" => r#"{"id":true}"#,
        "negative_id" => r#"{"jsonrpc":"2.0","id":-7,"method":"shutdown"}"#,
        "initialized_notification" => r#"{"jsonrpc":"2.0","method":"initialized","params":{}}"#,
        "hover_result" => {
            r#"{"jsonrpc":"2.0","id":7,"result":{"contents":{"kind":"markdown","value":"fn main()"}}}"#
        }
        "versionless_notification" => r#"{"method":"exit"}"#,
        "batch" => r#"[{"jsonrpc":"2.0","method":"exit"}]"#,
        "truncated" => r#"{"jsonrpc":"2.0","id":1,"#,
        other => panic!("unknown message fixture '{other}'"),
    }
}

// =============================================================================
// Given Steps
// =============================================================================

fn push_raw(world: &RefCell<TestWorld>, name: &str) {
    let raw = fixture_message(strip_quotes(name));
    world.borrow_mut().raw.push(raw.to_owned());
}

#[given("the raw message {name}")]
fn given_raw_message(world: &RefCell<TestWorld>, name: String) {
    push_raw(world, &name);
}

#[given("a second raw message {name}")]
fn given_second_raw_message(world: &RefCell<TestWorld>, name: String) {
    push_raw(world, &name);
}

#[given("negative identifiers are stringified")]
fn given_stringified_negative_ids(world: &RefCell<TestWorld>) {
    let mut w = world.borrow_mut();
    w.options = w.options.with_negative_ids(NegativeIdPolicy::Stringify);
}

#[given("the version check is lenient")]
fn given_lenient_version_check(world: &RefCell<TestWorld>) {
    let mut w = world.borrow_mut();
    w.options = w.options.with_version_check(VersionCheck::Lenient);
}

// =============================================================================
// When Steps
// =============================================================================

fn decode_all(world: &RefCell<TestWorld>) {
    let mut w = world.borrow_mut();
    let decoder = Decoder::new(w.options);
    let outcomes: Vec<_> = w.raw.iter().map(|raw| decoder.decode_str(raw)).collect();
    w.outcomes = outcomes;
}

#[when("the message is decoded")]
fn when_decoded(world: &RefCell<TestWorld>) {
    decode_all(world);
}

#[when("both messages are decoded")]
fn when_both_decoded(world: &RefCell<TestWorld>) {
    decode_all(world);
}

// =============================================================================
// Then Steps
// =============================================================================

#[then("the message is a {kind}")]
fn then_message_kind(world: &RefCell<TestWorld>, kind: String) {
    let w = world.borrow();
    assert_eq!(w.message(0).kind().to_string(), strip_quotes(&kind));
}

#[then("the first identifier is numeric {value}")]
fn then_first_numeric(world: &RefCell<TestWorld>, value: u64) {
    let w = world.borrow();
    assert_eq!(w.message(0).id(), Some(&RequestId::Numeric(value)));
}

#[then("the first identifier is the text {text}")]
fn then_first_text(world: &RefCell<TestWorld>, text: String) {
    let w = world.borrow();
    assert_eq!(w.message(0).id(), Some(&RequestId::from(strip_quotes(&text))));
}

#[then("the second identifier is the text {text}")]
fn then_second_text(world: &RefCell<TestWorld>, text: String) {
    let w = world.borrow();
    assert_eq!(w.message(1).id(), Some(&RequestId::from(strip_quotes(&text))));
}

#[then("the identifiers differ")]
fn then_identifiers_differ(world: &RefCell<TestWorld>) {
    let w = world.borrow();
    assert_ne!(w.message(0).id(), w.message(1).id());
}

#[then("the message has no identifier")]
fn then_no_identifier(world: &RefCell<TestWorld>) {
    let w = world.borrow();
    assert_eq!(w.message(0).id(), None);
}

#[then("re-encoding yields the raw message")]
fn then_re_encodes(world: &RefCell<TestWorld>) {
    let w = world.borrow();
    let raw: Value = serde_json::from_str(&w.raw[0]).expect("fixture is valid JSON");
    assert_eq!(encode(w.message(0)), raw);
}

#[then("decoding fails with {error_kind}")]
fn then_decoding_fails(world: &RefCell<TestWorld>, error_kind: String) {
    let w = world.borrow();
    let error = w
        .outcome(0)
        .as_ref()
        .expect_err("expected decoding to fail");
    let matched = match strip_quotes(&error_kind) {
        "malformed_identifier" => matches!(error, DecodeError::MalformedIdentifier { .. }),
        "invalid_envelope" => matches!(error, DecodeError::InvalidEnvelope { .. }),
        "unsupported_version" => matches!(error, DecodeError::UnsupportedProtocolVersion { .. }),
        "parse" => matches!(error, DecodeError::Parse(_)),
        other => panic!(
            "unsupported error kind: '{other}' \
             (supported: malformed_identifier, invalid_envelope, unsupported_version, parse)"
        ),
    };
    assert!(matched, "expected {error_kind}, got: {error}");
}

#[then("the error reply code is {code}")]
fn then_error_reply_code(world: &RefCell<TestWorld>, code: i64) {
    let w = world.borrow();
    let error = w
        .outcome(0)
        .as_ref()
        .expect_err("expected decoding to fail");
    let raw = serde_json::from_str::<Value>(&w.raw[0]).ok();
    let decoder = Decoder::new(w.options);
    let id = raw.as_ref().and_then(|value| decoder.recover_id(value));
    let reply = Response::from_decode_error(id, error);
    let reply_error = reply.error().expect("error reply");
    assert_eq!(reply_error.code().value(), code);
}
