//! Text document identifiers, filters and edits.

use serde::{Deserialize, Serialize};

use crate::document::{DocumentUri, Position, Range};

/// Identifies a text document by URI.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextDocumentIdentifier {
    pub uri: DocumentUri,
}

impl TextDocumentIdentifier {
    /// Creates an identifier.
    #[must_use]
    pub fn new(uri: impl Into<DocumentUri>) -> Self {
        Self { uri: uri.into() }
    }
}

/// A document transferred from the client to the server when it is opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextDocumentItem {
    pub uri: DocumentUri,
    pub language_id: String,
    /// Increases after each change, including undo and redo.
    pub version: i32,
    pub text: String,
}

/// A document identifier pinned to a specific version.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VersionedTextDocumentIdentifier {
    #[serde(flatten)]
    pub text_document: TextDocumentIdentifier,
    pub version: i32,
}

/// Mixin carrying a document and a position inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextDocumentPositionParams {
    pub text_document: TextDocumentIdentifier,
    pub position: Position,
}

impl TextDocumentPositionParams {
    /// Creates position parameters.
    #[must_use]
    pub fn new(uri: impl Into<DocumentUri>, position: Position) -> Self {
        Self {
            text_document: TextDocumentIdentifier::new(uri),
            position,
        }
    }
}

/// Selects documents by language, URI scheme or glob pattern.
///
/// Every present member must match for the filter to apply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentFilter {
    /// Language identifier, such as `rust`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// URI scheme, such as `file` or `untitled`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    /// Glob pattern, such as `*.{rs,toml}`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

/// A combination of filters; a document matches when any filter does.
pub type DocumentSelector = Vec<DocumentFilter>;

/// A textual replacement applied to a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextEdit {
    /// Range to replace. An empty range inserts.
    pub range: Range,
    /// Replacement text. An empty string deletes.
    pub new_text: String,
}
