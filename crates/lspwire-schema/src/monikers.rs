//! Cross-index symbol monikers.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::common::{PartialResultParams, TextDocumentRegistrationOptions};
use crate::progress::{WorkDoneProgressOptions, WorkDoneProgressParams};
use crate::text_document::TextDocumentPositionParams;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonikerOptions {
    #[serde(flatten)]
    pub work_done_progress_options: WorkDoneProgressOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonikerRegistrationOptions {
    #[serde(flatten)]
    pub text_document_registration_options: TextDocumentRegistrationOptions,
    #[serde(flatten)]
    pub moniker_options: MonikerOptions,
}

/// Parameters of `textDocument/moniker`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonikerParams {
    #[serde(flatten)]
    pub text_document_position_params: TextDocumentPositionParams,
    #[serde(flatten)]
    pub work_done_progress_params: WorkDoneProgressParams,
    #[serde(flatten)]
    pub partial_result_params: PartialResultParams,
}

/// Scope within which a moniker identifier is unique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum UniquenessLevel {
    /// Unique inside a document.
    Document,
    /// Unique inside a project.
    Project,
    /// Unique inside a group of projects.
    Group,
    /// Unique inside the moniker scheme.
    Scheme,
    /// Globally unique.
    Global,
}

/// Whether a moniker is imported into or exported from the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MonikerKind {
    /// Imported from another project.
    Import,
    /// Exported to other projects.
    Export,
    /// Local to the project.
    Local,
}

/// Identifier of a symbol that stays stable across indexes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Moniker {
    /// Scheme of the identifier, such as `tsc` or `.Net`.
    pub scheme: String,
    pub identifier: String,
    pub unique: UniquenessLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<MonikerKind>,
}
