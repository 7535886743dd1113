//! Tests for schema validation of known payloads.

use lspwire_jsonrpc::decode_str;
use rstest::{fixture, rstest};

use super::*;

#[fixture]
fn session() -> Session {
    Session::new(true)
}

fn check(session: &mut Session, raw: &str) -> PayloadCheck {
    let message = decode_str(raw).expect("decode");
    session.check(&message)
}

#[test]
fn disabled_sessions_skip_everything() {
    let mut session = Session::new(false);
    let outcome = check(
        &mut session,
        r#"{"jsonrpc":"2.0","id":1,"method":"textDocument/hover","params":{}}"#,
    );
    assert_eq!(outcome, PayloadCheck::Skipped);
}

#[rstest]
#[case::initialize(
    r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"processId":null,"rootUri":null,"capabilities":{}}}"#,
    "InitializeParams"
)]
#[case::hover(
    r#"{"jsonrpc":"2.0","id":2,"method":"textDocument/hover","params":{"textDocument":{"uri":"file:///a.rs"},"position":{"line":0,"character":3}}}"#,
    "HoverParams"
)]
#[case::definition(
    r#"{"jsonrpc":"2.0","id":3,"method":"textDocument/definition","params":{"textDocument":{"uri":"file:///a.rs"},"position":{"line":4,"character":0}}}"#,
    "GotoParams"
)]
#[case::diagnostics(
    r#"{"jsonrpc":"2.0","method":"textDocument/publishDiagnostics","params":{"uri":"file:///a.rs","diagnostics":[]}}"#,
    "PublishDiagnosticsParams"
)]
#[case::progress(
    r#"{"jsonrpc":"2.0","method":"$/progress","params":{"token":"t1","value":{"kind":"end"}}}"#,
    "ProgressParams"
)]
fn known_params_are_valid(
    mut session: Session,
    #[case] raw: &str,
    #[case] schema: &'static str,
) {
    assert_eq!(check(&mut session, raw), PayloadCheck::Valid(schema));
}

#[rstest]
fn mismatched_params_are_invalid(mut session: Session) {
    let outcome = check(
        &mut session,
        r#"{"jsonrpc":"2.0","id":2,"method":"textDocument/hover","params":{"textDocument":{"uri":"file:///a.rs"}}}"#,
    );
    let PayloadCheck::Invalid { schema, reason } = outcome else {
        panic!("expected an invalid payload, got {outcome:?}");
    };
    assert_eq!(schema, "HoverParams");
    assert!(reason.contains("textDocument/hover"), "reason: {reason}");
    assert!(reason.contains("position"), "reason: {reason}");
}

#[rstest]
fn unknown_methods_are_skipped(mut session: Session) {
    let outcome = check(
        &mut session,
        r#"{"jsonrpc":"2.0","id":9,"method":"custom/ping","params":[1,2]}"#,
    );
    assert_eq!(outcome, PayloadCheck::Skipped);
}

#[rstest]
fn responses_are_checked_against_their_request(mut session: Session) {
    check(
        &mut session,
        r#"{"jsonrpc":"2.0","id":"init","method":"initialize","params":{"capabilities":{}}}"#,
    );
    let reply = check(
        &mut session,
        r#"{"jsonrpc":"2.0","id":"init","result":{"capabilities":{"hoverProvider":true}}}"#,
    );
    assert_eq!(reply, PayloadCheck::Valid("InitializeResult"));

    let duplicate = check(
        &mut session,
        r#"{"jsonrpc":"2.0","id":"init","result":{"capabilities":{}}}"#,
    );
    assert_eq!(duplicate, PayloadCheck::Skipped);
}

#[rstest]
fn numeric_and_text_ids_do_not_match(mut session: Session) {
    check(
        &mut session,
        r#"{"jsonrpc":"2.0","id":5,"method":"textDocument/hover","params":{"textDocument":{"uri":"file:///a.rs"},"position":{"line":0,"character":0}}}"#,
    );
    let reply = check(&mut session, r#"{"jsonrpc":"2.0","id":"5","result":42}"#);
    assert_eq!(reply, PayloadCheck::Skipped);
}

#[rstest]
fn mismatched_results_are_invalid(mut session: Session) {
    check(
        &mut session,
        r#"{"jsonrpc":"2.0","id":5,"method":"textDocument/hover","params":{"textDocument":{"uri":"file:///a.rs"},"position":{"line":0,"character":0}}}"#,
    );
    let reply = check(&mut session, r#"{"jsonrpc":"2.0","id":5,"result":42}"#);
    assert!(reply.is_invalid(), "got {reply:?}");
}

#[rstest]
fn error_responses_are_not_checked(mut session: Session) {
    check(
        &mut session,
        r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"capabilities":{}}}"#,
    );
    let reply = check(
        &mut session,
        r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32603,"message":"boom"}}"#,
    );
    assert_eq!(reply, PayloadCheck::Skipped);
}

#[rstest]
fn shutdown_expects_a_null_result(mut session: Session) {
    check(&mut session, r#"{"jsonrpc":"2.0","id":8,"method":"shutdown"}"#);
    let reply = check(&mut session, r#"{"jsonrpc":"2.0","id":8,"result":null}"#);
    assert_eq!(reply, PayloadCheck::Valid("null"));
}
