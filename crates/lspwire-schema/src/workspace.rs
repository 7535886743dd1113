//! Workspace folders.

use serde::{Deserialize, Serialize};

use crate::document::DocumentUri;

/// A root folder open in the client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkspaceFolder {
    pub uri: DocumentUri,
    /// Name shown in the user interface.
    pub name: String,
}

/// Folders added to and removed from the workspace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceFoldersChangeEvent {
    pub added: Vec<WorkspaceFolder>,
    pub removed: Vec<WorkspaceFolder>,
}

/// Parameters of `workspace/didChangeWorkspaceFolders`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DidChangeWorkspaceFoldersParams {
    pub event: WorkspaceFoldersChangeEvent,
}
