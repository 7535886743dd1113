//! Wire compatibility with the `lsp-types` crate.
//!
//! Each record is encoded here, decoded by `lsp-types`, and re-encoded; the
//! two JSON values must agree. The reverse direction starts from JSON that
//! `lsp-types` produced.

use std::fmt::Debug;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::common::{MarkupContent, NumberOrString};
use crate::completion::{CompletionItem, CompletionItemKind};
use crate::diagnostic::{Diagnostic, DiagnosticSeverity, DiagnosticTag};
use crate::document::{Position, Range};
use crate::hover::{Hover, HoverParams};
use crate::initialize::{ClientInfo, InitializeParams, TraceValue};
use crate::progress::{
    ProgressToken, WorkDoneProgress, WorkDoneProgressBegin, WorkDoneProgressParams,
};
use crate::text_document::{TextDocumentItem, TextDocumentPositionParams};

/// Encodes `ours`, decodes it as `Theirs`, and checks both encodings match.
fn assert_accepted_by<Theirs>(ours: &impl Serialize)
where
    Theirs: Serialize + DeserializeOwned + Debug,
{
    let encoded = serde_json::to_value(ours).expect("serialise");
    let theirs: Theirs = serde_json::from_value(encoded.clone())
        .unwrap_or_else(|err| panic!("lsp-types rejected {encoded}: {err}"));
    assert_eq!(serde_json::to_value(&theirs).expect("re-serialise"), encoded);
}

/// Encodes `theirs`, decodes it as `Ours`, and checks both encodings match.
fn assert_accepts<Ours>(theirs: &impl Serialize) -> Ours
where
    Ours: Serialize + DeserializeOwned,
{
    let encoded = serde_json::to_value(theirs).expect("serialise");
    let ours: Ours = serde_json::from_value(encoded.clone())
        .unwrap_or_else(|err| panic!("rejected lsp-types output {encoded}: {err}"));
    assert_eq!(serde_json::to_value(&ours).expect("re-serialise"), encoded);
    ours
}

fn span() -> Range {
    Range::new(Position::new(3, 4), Position::new(3, 11))
}

// ---------------------------------------------------------------------------
// Our encodings decode as lsp-types
// ---------------------------------------------------------------------------

#[test]
fn positions_and_ranges() {
    assert_accepted_by::<lsp_types::Position>(&Position::new(0, 17));
    assert_accepted_by::<lsp_types::Range>(&span());
}

#[test]
fn diagnostics() {
    let mut diagnostic = Diagnostic::new(span(), DiagnosticSeverity::WARNING, "unused variable");
    diagnostic.code = Some(NumberOrString::Number(6133));
    diagnostic.source = Some(String::from("ts"));
    diagnostic.tags = Some(vec![DiagnosticTag::UNNECESSARY]);
    diagnostic.data = Some(json!({"fix": "prefix"}));
    assert_accepted_by::<lsp_types::Diagnostic>(&diagnostic);
}

#[test]
fn hover_requests_and_results() {
    let params = HoverParams {
        text_document_position_params: TextDocumentPositionParams::new(
            "file:///src/main.rs",
            Position::new(9, 2),
        ),
        work_done_progress_params: WorkDoneProgressParams {
            work_done_token: Some(ProgressToken::Number(3)),
        },
    };
    assert_accepted_by::<lsp_types::HoverParams>(&params);

    let hover = Hover {
        contents: MarkupContent::markdown("```rust\nfn main()\n```"),
        range: Some(span()),
    };
    assert_accepted_by::<lsp_types::Hover>(&hover);
}

#[test]
fn opened_documents() {
    let item = TextDocumentItem {
        uri: String::from("file:///src/lib.rs"),
        language_id: String::from("rust"),
        version: 1,
        text: String::from("pub fn answer() -> u8 { 42 }\n"),
    };
    assert_accepted_by::<lsp_types::TextDocumentItem>(&item);
}

#[test]
fn completion_items() {
    let mut item = CompletionItem::new("to_owned", CompletionItemKind::METHOD);
    item.detail = Some(String::from("fn to_owned(&self) -> String"));
    item.sort_text = Some(String::from("0001"));
    assert_accepted_by::<lsp_types::CompletionItem>(&item);
}

#[test]
fn initialize_params() {
    let params = InitializeParams {
        process_id: Some(4242),
        client_info: Some(ClientInfo {
            name: String::from("lspwire"),
            version: Some(String::from("0.1.0")),
        }),
        root_uri: Some(String::from("file:///workspace")),
        trace: Some(TraceValue::Verbose),
        ..InitializeParams::default()
    };
    assert_accepted_by::<lsp_types::InitializeParams>(&params);
    assert_accepted_by::<lsp_types::InitializeParams>(&InitializeParams::default());
}

#[test]
fn work_done_progress() {
    let begin = WorkDoneProgress::Begin(WorkDoneProgressBegin {
        title: String::from("Indexing"),
        cancellable: Some(false),
        message: Some(String::from("3/10 crates")),
        percentage: Some(30),
    });
    assert_accepted_by::<lsp_types::WorkDoneProgress>(&begin);
}

// ---------------------------------------------------------------------------
// lsp-types encodings decode here
// ---------------------------------------------------------------------------

#[test]
fn accepts_lsp_types_ranges() {
    let theirs = lsp_types::Range::new(
        lsp_types::Position::new(1, 0),
        lsp_types::Position::new(2, 8),
    );
    let ours: Range = assert_accepts(&theirs);
    assert_eq!(ours, Range::new(Position::new(1, 0), Position::new(2, 8)));
}

#[test]
fn accepts_lsp_types_diagnostics() {
    let theirs = lsp_types::Diagnostic {
        range: lsp_types::Range::new(
            lsp_types::Position::new(0, 0),
            lsp_types::Position::new(0, 5),
        ),
        severity: Some(lsp_types::DiagnosticSeverity::HINT),
        code: Some(lsp_types::NumberOrString::String(String::from("W1"))),
        message: String::from("consider renaming"),
        tags: Some(vec![lsp_types::DiagnosticTag::DEPRECATED]),
        ..lsp_types::Diagnostic::default()
    };
    let ours: Diagnostic = assert_accepts(&theirs);
    assert_eq!(ours.severity, Some(DiagnosticSeverity::HINT));
    assert_eq!(ours.tags, Some(vec![DiagnosticTag::DEPRECATED]));
    assert_eq!(ours.code, Some(NumberOrString::String(String::from("W1"))));
}

#[test]
fn accepts_lsp_types_initialize_params() {
    let raw = json!({
        "processId": 77,
        "rootUri": null,
        "capabilities": {"workspace": {"applyEdit": true}},
        "trace": "off"
    });
    let theirs: lsp_types::InitializeParams =
        serde_json::from_value(raw).expect("lsp-types decodes its own shape");
    let ours: InitializeParams = assert_accepts(&theirs);
    assert_eq!(ours.process_id, Some(77));
    assert_eq!(ours.trace, Some(TraceValue::Off));
}
