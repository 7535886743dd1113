//! Method names for the requests and notifications this crate has payloads
//! for.

// Lifecycle
pub const INITIALIZE: &str = "initialize";
pub const INITIALIZED: &str = "initialized";
pub const SHUTDOWN: &str = "shutdown";
pub const EXIT: &str = "exit";

// Window
pub const WINDOW_SHOW_MESSAGE: &str = "window/showMessage";
pub const WINDOW_SHOW_MESSAGE_REQUEST: &str = "window/showMessageRequest";
pub const WINDOW_LOG_MESSAGE: &str = "window/logMessage";
pub const WINDOW_WORK_DONE_PROGRESS_CREATE: &str = "window/workDoneProgress/create";
pub const WINDOW_WORK_DONE_PROGRESS_CANCEL: &str = "window/workDoneProgress/cancel";
pub const PROGRESS: &str = "$/progress";

// Registration
pub const CLIENT_REGISTER_CAPABILITY: &str = "client/registerCapability";
pub const CLIENT_UNREGISTER_CAPABILITY: &str = "client/unregisterCapability";

// Workspace
pub const WORKSPACE_DID_CHANGE_CONFIGURATION: &str = "workspace/didChangeConfiguration";
pub const WORKSPACE_CONFIGURATION: &str = "workspace/configuration";
pub const WORKSPACE_DID_CHANGE_WORKSPACE_FOLDERS: &str = "workspace/didChangeWorkspaceFolders";
pub const WORKSPACE_DID_CHANGE_WATCHED_FILES: &str = "workspace/didChangeWatchedFiles";
pub const WORKSPACE_SYMBOL: &str = "workspace/symbol";

// Text document
pub const TEXT_DOCUMENT_PUBLISH_DIAGNOSTICS: &str = "textDocument/publishDiagnostics";
pub const TEXT_DOCUMENT_HOVER: &str = "textDocument/hover";
pub const TEXT_DOCUMENT_COMPLETION: &str = "textDocument/completion";
pub const COMPLETION_ITEM_RESOLVE: &str = "completionItem/resolve";
pub const TEXT_DOCUMENT_SIGNATURE_HELP: &str = "textDocument/signatureHelp";
pub const TEXT_DOCUMENT_DECLARATION: &str = "textDocument/declaration";
pub const TEXT_DOCUMENT_DEFINITION: &str = "textDocument/definition";
pub const TEXT_DOCUMENT_TYPE_DEFINITION: &str = "textDocument/typeDefinition";
pub const TEXT_DOCUMENT_IMPLEMENTATION: &str = "textDocument/implementation";
pub const TEXT_DOCUMENT_REFERENCES: &str = "textDocument/references";
pub const TEXT_DOCUMENT_CODE_LENS: &str = "textDocument/codeLens";
pub const CODE_LENS_RESOLVE: &str = "codeLens/resolve";
pub const TEXT_DOCUMENT_RENAME: &str = "textDocument/rename";
pub const TEXT_DOCUMENT_PREPARE_RENAME: &str = "textDocument/prepareRename";
pub const TEXT_DOCUMENT_PREPARE_CALL_HIERARCHY: &str = "textDocument/prepareCallHierarchy";
pub const CALL_HIERARCHY_INCOMING_CALLS: &str = "callHierarchy/incomingCalls";
pub const CALL_HIERARCHY_OUTGOING_CALLS: &str = "callHierarchy/outgoingCalls";
pub const TEXT_DOCUMENT_SEMANTIC_TOKENS_FULL: &str = "textDocument/semanticTokens/full";
pub const TEXT_DOCUMENT_SEMANTIC_TOKENS_FULL_DELTA: &str = "textDocument/semanticTokens/full/delta";
pub const TEXT_DOCUMENT_SEMANTIC_TOKENS_RANGE: &str = "textDocument/semanticTokens/range";
pub const TEXT_DOCUMENT_MONIKER: &str = "textDocument/moniker";
pub const TEXT_DOCUMENT_LINKED_EDITING_RANGE: &str = "textDocument/linkedEditingRange";
