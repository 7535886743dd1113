//! Code lenses: commands shown inline with source text.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::command::Command;
use crate::common::{PartialResultParams, TextDocumentRegistrationOptions};
use crate::document::Range;
use crate::progress::{WorkDoneProgressOptions, WorkDoneProgressParams};
use crate::text_document::TextDocumentIdentifier;

/// A command attached to a range of source text.
///
/// A lens without a command is unresolved; `codeLens/resolve` fills it in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeLens {
    pub range: Range,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<Command>,
    /// Preserved between `textDocument/codeLens` and `codeLens/resolve`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeLensOptions {
    #[serde(flatten)]
    pub work_done_progress_options: WorkDoneProgressOptions,
    /// Whether the server supports `codeLens/resolve`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolve_provider: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeLensRegistrationOptions {
    #[serde(flatten)]
    pub text_document_registration_options: TextDocumentRegistrationOptions,
    #[serde(flatten)]
    pub code_lens_options: CodeLensOptions,
}

/// Parameters of `textDocument/codeLens`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeLensParams {
    #[serde(flatten)]
    pub work_done_progress_params: WorkDoneProgressParams,
    #[serde(flatten)]
    pub partial_result_params: PartialResultParams,
    pub text_document: TextDocumentIdentifier,
}
