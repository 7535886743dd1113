//! Runtime tests driving [`crate::run`] with in-memory streams.

use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

use insta::assert_snapshot;
use lspwire_jsonrpc::{DecodeOptions, NegativeIdPolicy};
use rstest::rstest;
use tempfile::NamedTempFile;

use crate::{InspectConfig, OutputFormat, inspect_stream, run};

const SESSION: &str = concat!(
    r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"processId":null,"rootUri":null,"capabilities":{}}}"#,
    "\n",
    r#"{"jsonrpc":"2.0","id":1,"result":{"capabilities":{"hoverProvider":true}}}"#,
    "\n",
    "\n",
    r#"{"jsonrpc":"2.0","method":"initialized","params":{}}"#,
    "\n",
);

struct Outcome {
    exit: ExitCode,
    stdout: String,
    stderr: String,
}

fn invoke(args: &[&str], stdin: &str) -> Outcome {
    let argv: Vec<OsString> = std::iter::once("lspwire")
        .chain(args.iter().copied())
        .map(OsString::from)
        .collect();
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let exit = run(argv, stdin.as_bytes(), &mut stdout, &mut stderr);
    Outcome {
        exit,
        stdout: String::from_utf8(stdout).expect("utf8 stdout"),
        stderr: String::from_utf8(stderr).expect("utf8 stderr"),
    }
}

#[test]
fn clean_session_succeeds() {
    let outcome = invoke(&["--validate-payloads"], SESSION);
    assert_eq!(outcome.exit, ExitCode::SUCCESS);
    assert_snapshot!(outcome.stdout, @r"
    line 1: request initialize id=1 [InitializeParams: ok]
    line 2: response id=1 [InitializeResult: ok]
    line 4: notification initialized
    3 messages, 0 failed
    ");
}

#[test]
fn malformed_message_fails_the_run() {
    let input = concat!(
        r#"{"jsonrpc":"2.0","id":true,"method":"shutdown"}"#,
        "\n",
        r#"{"jsonrpc":"2.0","method":"exit"}"#,
        "\n",
    );
    let outcome = invoke(&["--output", "json"], input);
    assert_eq!(outcome.exit, ExitCode::FAILURE);
    assert_snapshot!(outcome.stdout, @r#"
    {"line":1,"error":"malformed request id: expected an unsigned integer or a string, found true"}
    {"line":2,"kind":"notification","method":"exit"}
    {"summary":{"messages":2,"failed":1}}
    "#);
}

#[test]
fn invalid_utf8_line_is_reported_and_skipped() {
    let mut input = Vec::new();
    input.extend_from_slice(b"{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"shutdown\"}\n");
    input.extend_from_slice(b"{\"jsonrpc\":\"2.0\",\"method\":\"\xff\"}\n");
    input.extend_from_slice(b"{\"jsonrpc\":\"2.0\",\"method\":\"exit\"}\r\n");
    let mut output = Vec::new();
    let summary =
        inspect_stream(&InspectConfig::default(), input.as_slice(), &mut output).expect("inspect");
    assert_eq!(summary.messages(), 3);
    assert_eq!(summary.failed(), 1);

    let text = String::from_utf8(output).expect("utf8 report");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.first(), Some(&"line 1: request shutdown id=1"));
    assert!(
        lines
            .get(1)
            .is_some_and(|line| line.starts_with("line 2: error: message is not valid JSON")),
        "report: {text}"
    );
    assert_eq!(lines.get(2), Some(&"line 3: notification exit"));
    assert_eq!(lines.get(3), Some(&"3 messages, 1 failed"));
}

#[rstest]
#[case::default_rejects(&[], ExitCode::FAILURE)]
#[case::stringify_accepts(&["--negative-ids", "stringify"], ExitCode::SUCCESS)]
fn negative_id_policy_follows_the_flag(#[case] args: &[&str], #[case] expected: ExitCode) {
    let outcome = invoke(args, "{\"jsonrpc\":\"2.0\",\"id\":-3,\"method\":\"shutdown\"}\n");
    assert_eq!(outcome.exit, expected);
}

#[test]
fn input_file_replaces_stdin() {
    let mut file = NamedTempFile::new().expect("create input");
    writeln!(file, r#"{{"jsonrpc":"2.0","id":"a","result":[]}}"#).expect("write input");
    let path = file.path().to_str().expect("utf8 path");
    let outcome = invoke(&[path], "not json\n");
    assert_eq!(outcome.exit, ExitCode::SUCCESS);
    assert!(outcome.stdout.starts_with("line 1: response id=\"a\""));
}

#[rstest]
#[case::unknown_flag(&["--frobnicate"])]
#[case::bad_enum_value(&["--output", "xml"])]
fn usage_errors_exit_with_two(#[case] args: &[&str]) {
    let outcome = invoke(args, "");
    assert_eq!(outcome.exit, ExitCode::from(2));
    assert!(outcome.stderr.starts_with("error:"), "stderr: {}", outcome.stderr);
    assert!(outcome.stdout.is_empty());
}

#[test]
fn help_goes_to_stdout() {
    let outcome = invoke(&["--help"], "");
    assert_eq!(outcome.exit, ExitCode::SUCCESS);
    assert!(outcome.stdout.contains("--validate-payloads"));
}

#[test]
fn missing_input_file_is_reported() {
    let outcome = invoke(&["/nonexistent/messages.jsonl"], "");
    assert_eq!(outcome.exit, ExitCode::FAILURE);
    assert!(outcome.stderr.contains("failed to open input /nonexistent/messages.jsonl"));
}

#[test]
fn library_entry_point_uses_the_given_config() {
    let config = InspectConfig::default()
        .with_decode_options(
            DecodeOptions::default().with_negative_ids(NegativeIdPolicy::Stringify),
        )
        .with_payload_validation(true)
        .with_output(OutputFormat::Json);
    let input = "{\"jsonrpc\":\"2.0\",\"id\":-1,\"method\":\"exit\"}\n";
    let mut output = Vec::new();
    let summary = inspect_stream(&config, input.as_bytes(), &mut output).expect("inspect");
    assert!(summary.is_clean());
    assert_eq!(summary.messages(), 1);
    assert_snapshot!(String::from_utf8(output).expect("utf8"), @r#"
    {"line":1,"kind":"request","method":"exit","id":"-1"}
    {"summary":{"messages":1,"failed":0}}
    "#);
}
