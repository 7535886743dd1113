//! Signature help shown while typing call arguments.

use serde::{Deserialize, Serialize};

use crate::common::{MarkupContent, TextDocumentRegistrationOptions};
use crate::macros::lsp_enum;
use crate::progress::{WorkDoneProgressOptions, WorkDoneProgressParams};
use crate::text_document::TextDocumentPositionParams;

/// A parameter of a callable signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterInformation {
    /// Parameter label; a substring of the signature label.
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<MarkupContent>,
}

/// A callable signature with its parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureInformation {
    /// Label shown in the user interface, such as `fn push(&mut self, value: T)`.
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<MarkupContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<ParameterInformation>>,
}

/// Result of `textDocument/signatureHelp`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureHelp {
    pub signatures: Vec<SignatureInformation>,
    /// Index into `signatures`; defaults to the first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_signature: Option<u32>,
    /// Index into the active signature's parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_parameter: Option<u32>,
}

lsp_enum! {
    /// How a signature help request was triggered.
    pub struct SignatureHelpTriggerKind(i32) {
        /// Manual invocation.
        INVOKED = 1 => "Invoked",
        /// A trigger character was typed.
        TRIGGER_CHARACTER = 2 => "TriggerCharacter",
        /// The cursor moved or the document changed.
        CONTENT_CHANGE = 3 => "ContentChange",
    }
}

/// Context of a signature help request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureHelpContext {
    pub trigger_kind: SignatureHelpTriggerKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_character: Option<String>,
    /// `true` when signature help was already showing.
    pub is_retrigger: bool,
    /// The help currently shown, when retriggered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_signature_help: Option<SignatureHelp>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureHelpOptions {
    #[serde(flatten)]
    pub work_done_progress_options: WorkDoneProgressOptions,
    /// Characters that trigger signature help, such as `(`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_characters: Option<Vec<String>>,
    /// Characters that re-trigger signature help while it is showing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retrigger_characters: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureHelpRegistrationOptions {
    #[serde(flatten)]
    pub text_document_registration_options: TextDocumentRegistrationOptions,
    #[serde(flatten)]
    pub signature_help_options: SignatureHelpOptions,
}

/// Parameters of `textDocument/signatureHelp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureHelpParams {
    #[serde(flatten)]
    pub text_document_position_params: TextDocumentPositionParams,
    #[serde(flatten)]
    pub work_done_progress_params: WorkDoneProgressParams,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<SignatureHelpContext>,
}
