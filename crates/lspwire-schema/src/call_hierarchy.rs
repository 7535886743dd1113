//! Call hierarchy navigation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::common::{
    PartialResultParams, StaticRegistrationOptions, TextDocumentRegistrationOptions,
};
use crate::document::{DocumentUri, Range};
use crate::progress::{WorkDoneProgressOptions, WorkDoneProgressParams};
use crate::symbols::{SymbolKind, SymbolTag};
use crate::text_document::TextDocumentPositionParams;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallHierarchyOptions {
    #[serde(flatten)]
    pub work_done_progress_options: WorkDoneProgressOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallHierarchyRegistrationOptions {
    #[serde(flatten)]
    pub text_document_registration_options: TextDocumentRegistrationOptions,
    #[serde(flatten)]
    pub call_hierarchy_options: CallHierarchyOptions,
    #[serde(flatten)]
    pub static_registration_options: StaticRegistrationOptions,
}

/// Parameters of `textDocument/prepareCallHierarchy`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallHierarchyPrepareParams {
    #[serde(flatten)]
    pub text_document_position_params: TextDocumentPositionParams,
    #[serde(flatten)]
    pub work_done_progress_params: WorkDoneProgressParams,
}

/// A node in the call hierarchy, such as a function or method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallHierarchyItem {
    pub name: String,
    pub kind: SymbolKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<SymbolTag>>,
    /// Extra detail, such as the function signature.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    pub uri: DocumentUri,
    /// Full extent of the item, including its body.
    pub range: Range,
    /// Span to select and reveal, such as the item's name.
    pub selection_range: Range,
    /// Preserved between the prepare call and the incoming/outgoing calls.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Parameters of `callHierarchy/incomingCalls`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallHierarchyIncomingCallsParams {
    #[serde(flatten)]
    pub work_done_progress_params: WorkDoneProgressParams,
    #[serde(flatten)]
    pub partial_result_params: PartialResultParams,
    pub item: CallHierarchyItem,
}

/// A caller of the item the request was made for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallHierarchyIncomingCall {
    pub from: CallHierarchyItem,
    /// Call sites inside `from`.
    pub from_ranges: Vec<Range>,
}

/// Parameters of `callHierarchy/outgoingCalls`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallHierarchyOutgoingCallsParams {
    #[serde(flatten)]
    pub work_done_progress_params: WorkDoneProgressParams,
    #[serde(flatten)]
    pub partial_result_params: PartialResultParams,
    pub item: CallHierarchyItem,
}

/// A callee of the item the request was made for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallHierarchyOutgoingCall {
    pub to: CallHierarchyItem,
    /// Call sites inside the caller, relative to the request item.
    pub from_ranges: Vec<Range>,
}
