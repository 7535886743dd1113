//! Ranges that are edited together, such as matching XML tags.

use serde::{Deserialize, Serialize};

use crate::common::{StaticRegistrationOptions, TextDocumentRegistrationOptions};
use crate::document::Range;
use crate::progress::{WorkDoneProgressOptions, WorkDoneProgressParams};
use crate::text_document::TextDocumentPositionParams;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedEditingRangeOptions {
    #[serde(flatten)]
    pub work_done_progress_options: WorkDoneProgressOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedEditingRangeRegistrationOptions {
    #[serde(flatten)]
    pub text_document_registration_options: TextDocumentRegistrationOptions,
    #[serde(flatten)]
    pub linked_editing_range_options: LinkedEditingRangeOptions,
    #[serde(flatten)]
    pub static_registration_options: StaticRegistrationOptions,
}

/// Parameters of `textDocument/linkedEditingRange`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedEditingRangeParams {
    #[serde(flatten)]
    pub text_document_position_params: TextDocumentPositionParams,
    #[serde(flatten)]
    pub work_done_progress_params: WorkDoneProgressParams,
}

/// Result of `textDocument/linkedEditingRange`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedEditingRanges {
    /// Ranges with identical length and content.
    pub ranges: Vec<Range>,
    /// Pattern describing valid contents for the ranges.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_pattern: Option<String>,
}
