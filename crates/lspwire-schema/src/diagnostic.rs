//! Compiler and linter diagnostics.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::common::NumberOrString;
use crate::document::{DocumentUri, Location, Range};
use crate::macros::lsp_enum;

lsp_enum! {
    /// How severe a diagnostic is.
    pub struct DiagnosticSeverity(i32) {
        /// Reports an error.
        ERROR = 1 => "Error",
        /// Reports a warning.
        WARNING = 2 => "Warning",
        /// Reports information.
        INFORMATION = 3 => "Information",
        /// Reports a hint.
        HINT = 4 => "Hint",
    }
}

lsp_enum! {
    /// Extra rendering hints for a diagnostic.
    pub struct DiagnosticTag(i32) {
        /// Unused or unnecessary code, usually rendered faded out.
        UNNECESSARY = 1 => "Unnecessary",
        /// Deprecated code, usually rendered struck through.
        DEPRECATED = 2 => "Deprecated",
    }
}

/// A problem reported for a range of a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub range: Range,
    /// When absent, the client decides how to present the diagnostic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<DiagnosticSeverity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<NumberOrString>,
    /// Tool that produced the diagnostic, such as `rustc`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<DiagnosticTag>>,
    /// Related locations, such as the earlier definition of a duplicate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_information: Option<Vec<DiagnosticRelatedInformation>>,
    /// Preserved between `textDocument/publishDiagnostics` and
    /// `textDocument/codeAction`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl Diagnostic {
    /// Creates a diagnostic with a severity and message only.
    #[must_use]
    pub fn new(range: Range, severity: DiagnosticSeverity, message: impl Into<String>) -> Self {
        Self {
            range,
            severity: Some(severity),
            code: None,
            source: None,
            message: message.into(),
            tags: None,
            related_information: None,
            data: None,
        }
    }
}

/// A location related to a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticRelatedInformation {
    pub location: Location,
    pub message: String,
}

/// Parameters of `textDocument/publishDiagnostics`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublishDiagnosticsParams {
    pub uri: DocumentUri,
    /// Version of the document the diagnostics were computed for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i32>,
    /// The full set of diagnostics; an empty list clears earlier ones.
    pub diagnostics: Vec<Diagnostic>,
}
