//! Code completion.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::command::Command;
use crate::common::{MarkupContent, PartialResultParams};
use crate::macros::lsp_enum;
use crate::progress::{WorkDoneProgressOptions, WorkDoneProgressParams};
use crate::text_document::{TextDocumentPositionParams, TextEdit};

lsp_enum! {
    /// How a completion request was triggered.
    pub struct CompletionTriggerKind(i32) {
        /// Typed identifier, manual invocation or API call.
        INVOKED = 1 => "Invoked",
        /// A trigger character from the server's options was typed.
        TRIGGER_CHARACTER = 2 => "TriggerCharacter",
        /// Re-triggered because the previous list was incomplete.
        TRIGGER_FOR_INCOMPLETE_COMPLETIONS = 3 => "TriggerForIncompleteCompletions",
    }
}

/// Context of a completion request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionContext {
    pub trigger_kind: CompletionTriggerKind,
    /// The character that triggered completion, for
    /// [`CompletionTriggerKind::TRIGGER_CHARACTER`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_character: Option<String>,
}

lsp_enum! {
    /// Interpretation of a completion item's insert text.
    pub struct InsertTextFormat(i32) {
        /// Inserted verbatim.
        PLAIN_TEXT = 1 => "PlainText",
        /// A snippet with tab stops and placeholders.
        SNIPPET = 2 => "Snippet",
    }
}

lsp_enum! {
    /// Extra annotations on a completion item.
    pub struct CompletionItemTag(i32) {
        /// The item is deprecated.
        DEPRECATED = 1 => "Deprecated",
    }
}

lsp_enum! {
    /// Kind of a completion item, used to pick an icon.
    pub struct CompletionItemKind(i32) {
        /// Plain text.
        TEXT = 1 => "Text",
        /// A method.
        METHOD = 2 => "Method",
        /// A function.
        FUNCTION = 3 => "Function",
        /// A constructor.
        CONSTRUCTOR = 4 => "Constructor",
        /// A field.
        FIELD = 5 => "Field",
        /// A variable.
        VARIABLE = 6 => "Variable",
        /// A class.
        CLASS = 7 => "Class",
        /// An interface.
        INTERFACE = 8 => "Interface",
        /// A module.
        MODULE = 9 => "Module",
        /// A property.
        PROPERTY = 10 => "Property",
        /// A unit.
        UNIT = 11 => "Unit",
        /// A value.
        VALUE = 12 => "Value",
        /// An enumeration.
        ENUM = 13 => "Enum",
        /// A keyword.
        KEYWORD = 14 => "Keyword",
        /// A snippet.
        SNIPPET = 15 => "Snippet",
        /// A colour.
        COLOR = 16 => "Color",
        /// A file.
        FILE = 17 => "File",
        /// A reference.
        REFERENCE = 18 => "Reference",
        /// A folder.
        FOLDER = 19 => "Folder",
        /// An enumeration member.
        ENUM_MEMBER = 20 => "EnumMember",
        /// A constant.
        CONSTANT = 21 => "Constant",
        /// A struct.
        STRUCT = 22 => "Struct",
        /// An event.
        EVENT = 23 => "Event",
        /// An operator.
        OPERATOR = 24 => "Operator",
        /// A type parameter.
        TYPE_PARAMETER = 25 => "TypeParameter",
    }
}

/// A single completion proposal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionItem {
    /// Text shown in the list; also inserted when no insert text is given.
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<CompletionItemKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<CompletionItemTag>>,
    /// Extra detail, such as type or symbol information.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<MarkupContent>,
    /// Select this item when the list is shown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preselect: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insert_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insert_text_format: Option<InsertTextFormat>,
    /// Edit applied instead of inserting the label or insert text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_edit: Option<TextEdit>,
    /// Edits elsewhere in the document, such as an added import.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_text_edits: Option<Vec<TextEdit>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit_characters: Option<Vec<String>>,
    /// Command run after insertion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<Command>,
    /// Preserved between `textDocument/completion` and
    /// `completionItem/resolve`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl CompletionItem {
    /// Creates an item with a label and kind.
    #[must_use]
    pub fn new(label: impl Into<String>, kind: CompletionItemKind) -> Self {
        Self {
            label: label.into(),
            kind: Some(kind),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionOptions {
    #[serde(flatten)]
    pub work_done_progress_options: WorkDoneProgressOptions,
    /// Characters that trigger completion automatically, such as `.`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_characters: Option<Vec<String>>,
    /// Characters that accept any item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_commit_characters: Option<Vec<String>>,
    /// Whether the server supports `completionItem/resolve`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolve_provider: Option<bool>,
}

/// Parameters of `textDocument/completion`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionParams {
    #[serde(flatten)]
    pub text_document_position_params: TextDocumentPositionParams,
    #[serde(flatten)]
    pub work_done_progress_params: WorkDoneProgressParams,
    #[serde(flatten)]
    pub partial_result_params: PartialResultParams,
    /// Absent when the client does not send trigger context.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<CompletionContext>,
}

/// A completion result that may be refined by further typing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionList {
    /// When `true`, further typing should re-request completion.
    pub is_incomplete: bool,
    pub items: Vec<CompletionItem>,
}
