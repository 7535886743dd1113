//! Mixins and small records shared across features.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::progress::ProgressToken;
use crate::text_document::DocumentSelector;

/// Registration options for features that can be registered statically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticRegistrationOptions {
    /// Identifier used to unregister the feature later.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Registration options scoped to a set of documents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextDocumentRegistrationOptions {
    /// Documents the registration applies to. When absent, the client-side
    /// selector is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_selector: Option<DocumentSelector>,
}

/// Format of a [`MarkupContent`] value.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MarkupKind {
    /// Plain text, rendered verbatim.
    #[default]
    PlainText,
    /// GitHub-flavoured Markdown.
    Markdown,
}

/// Human-readable text in a declared format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkupContent {
    pub kind: MarkupKind,
    pub value: String,
}

impl MarkupContent {
    /// Creates Markdown content.
    #[must_use]
    pub fn markdown(value: impl Into<String>) -> Self {
        Self {
            kind: MarkupKind::Markdown,
            value: value.into(),
        }
    }

    /// Creates plain-text content.
    #[must_use]
    pub fn plain_text(value: impl Into<String>) -> Self {
        Self {
            kind: MarkupKind::PlainText,
            value: value.into(),
        }
    }
}

/// Mixin for requests that may stream partial results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialResultParams {
    /// Token used to report partial results through `$/progress`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partial_result_token: Option<ProgressToken>,
}

/// A value that is either a boolean switch or a detailed options record.
///
/// Server capabilities use this shape for most providers: `true` enables a
/// feature with default options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BooleanOr<T> {
    /// Plain switch.
    Bool(bool),
    /// Detailed options.
    Options(T),
}

impl<T> BooleanOr<T> {
    /// Returns `true` unless the value is the switch `false`.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        !matches!(self, Self::Bool(false))
    }
}

/// An integer or a string, as used by diagnostic codes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberOrString {
    /// Integer form.
    Number(i32),
    /// String form.
    String(String),
}
