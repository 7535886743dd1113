//! Record encodings: field names, optional members and mixins.

use insta::assert_snapshot;
use rstest::rstest;
use serde_json::{Value, json};

use crate::capabilities::{ChangeNotifications, ServerCapabilities};
use crate::common::{BooleanOr, MarkupContent, NumberOrString, PartialResultParams};
use crate::completion::{CompletionItem, CompletionItemKind, CompletionList};
use crate::diagnostic::{Diagnostic, DiagnosticRelatedInformation, DiagnosticSeverity};
use crate::document::{Location, Position, Range};
use crate::goto::{ReferenceContext, ReferenceParams};
use crate::initialize::InitializeParams;
use crate::progress::{
    ProgressToken, WorkDoneProgress, WorkDoneProgressBegin, WorkDoneProgressEnd,
    WorkDoneProgressParams,
};
use crate::registration::{Unregistration, UnregistrationParams};
use crate::semantic_tokens::{SemanticTokensFullOptions, SemanticTokensOptions};
use crate::text_document::{
    TextDocumentIdentifier, TextDocumentPositionParams, VersionedTextDocumentIdentifier,
};

fn span(start: (u32, u32), end: (u32, u32)) -> Range {
    Range::new(Position::new(start.0, start.1), Position::new(end.0, end.1))
}

fn to_text<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).expect("serialise")
}

// ---------------------------------------------------------------------------
// Documents and positions
// ---------------------------------------------------------------------------

#[rstest]
#[case::start(Position::new(1, 0), true)]
#[case::inside(Position::new(1, 9), true)]
#[case::end_is_exclusive(Position::new(2, 0), false)]
#[case::before(Position::new(0, 99), false)]
fn range_contains(#[case] position: Position, #[case] expected: bool) {
    assert_eq!(span((1, 0), (2, 0)).contains(position), expected);
}

#[test]
fn empty_range() {
    assert!(span((4, 2), (4, 2)).is_empty());
    assert!(!span((4, 2), (4, 3)).is_empty());
}

#[test]
fn versioned_identifier_flattens_the_uri() {
    let identifier = VersionedTextDocumentIdentifier {
        text_document: TextDocumentIdentifier::new("file:///a.rs"),
        version: 3,
    };
    assert_snapshot!(to_text(&identifier), @r#"{"uri":"file:///a.rs","version":3}"#);
}

// ---------------------------------------------------------------------------
// Initialisation
// ---------------------------------------------------------------------------

#[test]
fn initialize_params_always_write_nullable_members() {
    assert_snapshot!(
        to_text(&InitializeParams::default()),
        @r#"{"processId":null,"rootUri":null,"capabilities":{}}"#
    );
}

#[test]
fn initialize_params_accept_missing_nullable_members() {
    let params: InitializeParams = serde_json::from_value(json!({
        "capabilities": {"workspace": {"configuration": true}},
        "workDoneToken": "init-1",
        "trace": "messages"
    }))
    .expect("deserialise");
    assert_eq!(params.process_id, None);
    assert_eq!(params.root_uri, None);
    assert_eq!(
        params.work_done_progress_params.work_done_token,
        Some(ProgressToken::from("init-1"))
    );
    let workspace = params.capabilities.workspace.expect("workspace capabilities");
    assert_eq!(workspace.configuration, Some(true));
}

#[test]
fn server_capabilities_accept_switches_and_options() {
    let capabilities: ServerCapabilities = serde_json::from_value(json!({
        "hoverProvider": true,
        "renameProvider": {"prepareProvider": true},
        "definitionProvider": false,
        "workspace": {
            "workspaceFolders": {"supported": true, "changeNotifications": "folders-1"}
        }
    }))
    .expect("deserialise");

    assert_eq!(capabilities.hover_provider, Some(BooleanOr::Bool(true)));
    let rename = capabilities.rename_provider.expect("rename provider");
    assert!(rename.is_enabled());
    assert!(matches!(
        rename,
        BooleanOr::Options(options) if options.prepare_provider == Some(true)
    ));
    assert!(
        !capabilities
            .definition_provider
            .expect("definition provider")
            .is_enabled()
    );
    let folders = capabilities
        .workspace
        .and_then(|workspace| workspace.workspace_folders)
        .expect("workspace folders");
    assert_eq!(
        folders.change_notifications,
        Some(ChangeNotifications::Id(String::from("folders-1")))
    );
}

#[rstest]
#[case::switch(json!(true), SemanticTokensFullOptions::Bool(true))]
#[case::delta(json!({"delta": true}), SemanticTokensFullOptions::Delta { delta: Some(true) })]
#[case::empty_object(json!({}), SemanticTokensFullOptions::Delta { delta: None })]
fn semantic_tokens_full_forms(#[case] full: Value, #[case] expected: SemanticTokensFullOptions) {
    let options: SemanticTokensOptions = serde_json::from_value(json!({
        "legend": {"tokenTypes": ["function"], "tokenModifiers": []},
        "full": full
    }))
    .expect("deserialise");
    assert_eq!(options.full, Some(expected));
}

// ---------------------------------------------------------------------------
// Features
// ---------------------------------------------------------------------------

#[test]
fn diagnostic_uses_protocol_member_names() {
    let mut diagnostic = Diagnostic::new(
        span((0, 4), (0, 9)),
        DiagnosticSeverity::ERROR,
        "mismatched types",
    );
    diagnostic.code = Some(NumberOrString::String(String::from("E0308")));
    diagnostic.source = Some(String::from("rustc"));
    diagnostic.related_information = Some(vec![DiagnosticRelatedInformation {
        location: Location {
            uri: String::from("file:///lib.rs"),
            range: span((2, 0), (2, 3)),
        },
        message: String::from("expected due to this"),
    }]);

    let value = serde_json::to_value(&diagnostic).expect("serialise");
    assert_eq!(value["source"], json!("rustc"));
    assert_eq!(value["code"], json!("E0308"));
    assert_eq!(value["severity"], json!(1));
    assert_eq!(
        value["relatedInformation"][0]["message"],
        json!("expected due to this")
    );
    assert!(value.get("tags").is_none());
}

#[test]
fn reference_params_carry_the_position() {
    let params = ReferenceParams {
        text_document_position_params: TextDocumentPositionParams::new(
            "file:///a.rs",
            Position::new(7, 1),
        ),
        work_done_progress_params: WorkDoneProgressParams::default(),
        partial_result_params: PartialResultParams::default(),
        context: ReferenceContext {
            include_declaration: true,
        },
    };
    assert_snapshot!(
        to_text(&params),
        @r#"{"textDocument":{"uri":"file:///a.rs"},"position":{"line":7,"character":1},"context":{"includeDeclaration":true}}"#
    );
}

#[test]
fn completion_item_kind_is_a_single_value() {
    let mut item = CompletionItem::new("push", CompletionItemKind::METHOD);
    item.documentation = Some(MarkupContent::markdown("Appends an element."));
    let list = CompletionList {
        is_incomplete: false,
        items: vec![item],
    };
    assert_snapshot!(
        to_text(&list),
        @r#"{"isIncomplete":false,"items":[{"label":"push","kind":2,"documentation":{"kind":"markdown","value":"Appends an element."}}]}"#
    );
}

#[test]
fn unregistration_keeps_the_protocol_spelling() {
    let params = UnregistrationParams {
        unregistrations: vec![Unregistration {
            id: String::from("watch-1"),
            method: String::from("workspace/didChangeWatchedFiles"),
        }],
    };
    let value = serde_json::to_value(&params).expect("serialise");
    assert!(value.get("unregisterations").is_some());
    let decoded: UnregistrationParams = serde_json::from_value(value).expect("deserialise");
    assert_eq!(decoded, params);
}

// ---------------------------------------------------------------------------
// Progress
// ---------------------------------------------------------------------------

#[test]
fn work_done_progress_is_tagged_by_kind() {
    let begin = WorkDoneProgress::Begin(WorkDoneProgressBegin {
        title: String::from("Indexing"),
        percentage: Some(0),
        ..WorkDoneProgressBegin::default()
    });
    assert_snapshot!(to_text(&begin), @r#"{"kind":"begin","title":"Indexing","percentage":0}"#);

    let end: WorkDoneProgress =
        serde_json::from_value(json!({"kind": "end", "message": "done"})).expect("deserialise");
    assert_eq!(
        end,
        WorkDoneProgress::End(WorkDoneProgressEnd {
            message: Some(String::from("done"))
        })
    );
}

#[rstest]
#[case::number(json!(7), ProgressToken::Number(7), "7")]
#[case::text(json!("abc"), ProgressToken::from("abc"), "\"abc\"")]
fn progress_tokens_keep_their_form(
    #[case] raw: Value,
    #[case] expected: ProgressToken,
    #[case] display: &str,
) {
    let token: ProgressToken = serde_json::from_value(raw.clone()).expect("deserialise");
    assert_eq!(token, expected);
    assert_eq!(token.to_string(), display);
    assert_eq!(serde_json::to_value(&token).expect("serialise"), raw);
}
