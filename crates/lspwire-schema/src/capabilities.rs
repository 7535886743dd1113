//! Client and server capability announcements exchanged by `initialize`.
//!
//! Only the capabilities backed by records in this crate are modelled in
//! detail. Everything else is carried as opaque JSON so that nothing a peer
//! sends is lost on a round trip.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::call_hierarchy::CallHierarchyOptions;
use crate::code_lens::CodeLensOptions;
use crate::common::BooleanOr;
use crate::completion::CompletionOptions;
use crate::files::RenameOptions;
use crate::goto::{
    DeclarationOptions, DefinitionOptions, ImplementationOptions, ReferenceOptions,
    TypeDefinitionOptions,
};
use crate::hover::HoverOptions;
use crate::linked_editing_range::LinkedEditingRangeOptions;
use crate::monikers::MonikerOptions;
use crate::semantic_tokens::SemanticTokensOptions;
use crate::signature::SignatureHelpOptions;
use crate::symbols::WorkspaceSymbolOptions;

// -----------------------------------------------------------------------------
// Client side
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidChangeConfigurationClientCapabilities {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic_registration: Option<bool>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidChangeWatchedFilesClientCapabilities {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic_registration: Option<bool>,
}

/// Workspace-level features the client supports.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceClientCapabilities {
    /// Supports `workspace/applyEdit`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apply_edit: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub did_change_configuration: Option<DidChangeConfigurationClientCapabilities>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub did_change_watched_files: Option<DidChangeWatchedFilesClientCapabilities>,
    /// Supports `workspace/symbol`, with client-specific detail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<Value>,
    /// Supports multi-root workspaces.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_folders: Option<bool>,
    /// Supports `workspace/configuration`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration: Option<bool>,
}

/// Features the client announces in `initialize`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientCapabilities {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace: Option<WorkspaceClientCapabilities>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_document: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub general: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experimental: Option<Value>,
}

// -----------------------------------------------------------------------------
// Server side
// -----------------------------------------------------------------------------

/// How the server wants to hear about workspace folder changes.
///
/// A string is a registration identifier the server can later use to
/// unregister the notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChangeNotifications {
    /// Plain switch.
    Bool(bool),
    /// Registration identifier.
    Id(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceFoldersServerCapabilities {
    /// The server supports multi-root workspaces.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supported: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_notifications: Option<ChangeNotifications>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceServerCapabilities {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_folders: Option<WorkspaceFoldersServerCapabilities>,
}

/// Features the server announces in its `initialize` result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerCapabilities {
    /// Text synchronisation kind or options, kept opaque.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_document_sync: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hover_provider: Option<BooleanOr<HoverOptions>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_provider: Option<CompletionOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature_help_provider: Option<SignatureHelpOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declaration_provider: Option<BooleanOr<DeclarationOptions>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition_provider: Option<BooleanOr<DefinitionOptions>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_definition_provider: Option<BooleanOr<TypeDefinitionOptions>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implementation_provider: Option<BooleanOr<ImplementationOptions>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub references_provider: Option<BooleanOr<ReferenceOptions>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_lens_provider: Option<CodeLensOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rename_provider: Option<BooleanOr<RenameOptions>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_hierarchy_provider: Option<BooleanOr<CallHierarchyOptions>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semantic_tokens_provider: Option<SemanticTokensOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moniker_provider: Option<BooleanOr<MonikerOptions>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_editing_range_provider: Option<BooleanOr<LinkedEditingRangeOptions>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_symbol_provider: Option<BooleanOr<WorkspaceSymbolOptions>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace: Option<WorkspaceServerCapabilities>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experimental: Option<Value>,
}
