//! Schema checks for the payloads of known methods.
//!
//! Requests record their method in a pending table so the matching response
//! can be checked against the result type of that method.

use std::collections::HashMap;

use lspwire_jsonrpc::{Message, Notification, PayloadDecodeError, Request, RequestId, Response};
use lspwire_schema::call_hierarchy::{
    CallHierarchyIncomingCall, CallHierarchyIncomingCallsParams, CallHierarchyItem,
    CallHierarchyOutgoingCall, CallHierarchyOutgoingCallsParams, CallHierarchyPrepareParams,
};
use lspwire_schema::code_lens::{CodeLens, CodeLensParams};
use lspwire_schema::completion::{CompletionItem, CompletionParams};
use lspwire_schema::configuration::{ConfigurationParams, DidChangeConfigurationParams};
use lspwire_schema::diagnostic::PublishDiagnosticsParams;
use lspwire_schema::document::Location;
use lspwire_schema::files::{DidChangeWatchedFilesParams, PrepareRenameParams, RenameParams};
use lspwire_schema::goto::{GotoParams, ReferenceParams};
use lspwire_schema::hover::{Hover, HoverParams};
use lspwire_schema::initialize::{InitializeParams, InitializeResult};
use lspwire_schema::linked_editing_range::{LinkedEditingRangeParams, LinkedEditingRanges};
use lspwire_schema::methods;
use lspwire_schema::monikers::{Moniker, MonikerParams};
use lspwire_schema::progress::{
    ProgressParams, WorkDoneProgressCancelParams, WorkDoneProgressCreateParams,
};
use lspwire_schema::registration::{RegistrationParams, UnregistrationParams};
use lspwire_schema::semantic_tokens::{
    SemanticTokens, SemanticTokensDeltaParams, SemanticTokensParams, SemanticTokensRangeParams,
};
use lspwire_schema::signature::{SignatureHelp, SignatureHelpParams};
use lspwire_schema::symbols::WorkspaceSymbolParams;
use lspwire_schema::window::{
    LogMessageParams, MessageActionItem, ShowMessageParams, ShowMessageRequestParams,
};
use lspwire_schema::workspace::DidChangeWorkspaceFoldersParams;
use serde::de::DeserializeOwned;

use crate::report::PayloadCheck;

/// A payload that can be decoded into the schema type for its method.
trait Payload {
    /// Method whose schema applies.
    fn method(&self) -> &str;

    /// Decodes the payload into `T`.
    fn decode<T: DeserializeOwned>(&self) -> Result<T, PayloadDecodeError>;
}

impl Payload for Request {
    fn method(&self) -> &str {
        Self::method(self)
    }

    fn decode<T: DeserializeOwned>(&self) -> Result<T, PayloadDecodeError> {
        self.params_as()
    }
}

impl Payload for Notification {
    fn method(&self) -> &str {
        Self::method(self)
    }

    fn decode<T: DeserializeOwned>(&self) -> Result<T, PayloadDecodeError> {
        self.params_as()
    }
}

/// A successful response paired with the method of its request.
struct ResultPayload<'a> {
    response: &'a Response,
    method: &'a str,
}

impl Payload for ResultPayload<'_> {
    fn method(&self) -> &str {
        self.method
    }

    fn decode<T: DeserializeOwned>(&self) -> Result<T, PayloadDecodeError> {
        self.response.result_as(self.method)
    }
}

/// Tracks outstanding requests across a message stream.
#[derive(Debug, Default)]
pub(crate) struct Session {
    enabled: bool,
    pending: HashMap<RequestId, String>,
}

impl Session {
    pub(crate) fn new(enabled: bool) -> Self {
        Self {
            enabled,
            pending: HashMap::new(),
        }
    }

    /// Checks the payload of one message.
    pub(crate) fn check(&mut self, message: &Message) -> PayloadCheck {
        if !self.enabled {
            return PayloadCheck::Skipped;
        }
        match message {
            Message::Request(request) => {
                self.pending
                    .insert(request.id().clone(), request.method().to_owned());
                check_params(request)
            }
            Message::Notification(notification) => check_params(notification),
            Message::Response(response) => self.check_response(response),
        }
    }

    fn check_response(&mut self, response: &Response) -> PayloadCheck {
        let Some(method) = response.id().and_then(|id| self.pending.remove(id)) else {
            return PayloadCheck::Skipped;
        };
        if response.is_error() {
            return PayloadCheck::Skipped;
        }
        check_result(&ResultPayload {
            response,
            method: &method,
        })
    }
}

fn check_as<T, P>(payload: &P, schema: &'static str) -> PayloadCheck
where
    T: DeserializeOwned,
    P: Payload,
{
    match payload.decode::<T>() {
        Ok(_) => PayloadCheck::Valid(schema),
        Err(error) => PayloadCheck::Invalid {
            schema,
            reason: error.to_string(),
        },
    }
}

fn check_params<P: Payload>(payload: &P) -> PayloadCheck {
    match payload.method() {
        methods::INITIALIZE => check_as::<InitializeParams, _>(payload, "InitializeParams"),
        methods::WINDOW_SHOW_MESSAGE => check_as::<ShowMessageParams, _>(payload, "ShowMessageParams"),
        methods::WINDOW_SHOW_MESSAGE_REQUEST => {
            check_as::<ShowMessageRequestParams, _>(payload, "ShowMessageRequestParams")
        }
        methods::WINDOW_LOG_MESSAGE => check_as::<LogMessageParams, _>(payload, "LogMessageParams"),
        methods::WINDOW_WORK_DONE_PROGRESS_CREATE => {
            check_as::<WorkDoneProgressCreateParams, _>(payload, "WorkDoneProgressCreateParams")
        }
        methods::WINDOW_WORK_DONE_PROGRESS_CANCEL => {
            check_as::<WorkDoneProgressCancelParams, _>(payload, "WorkDoneProgressCancelParams")
        }
        methods::PROGRESS => check_as::<ProgressParams, _>(payload, "ProgressParams"),
        methods::CLIENT_REGISTER_CAPABILITY => {
            check_as::<RegistrationParams, _>(payload, "RegistrationParams")
        }
        methods::CLIENT_UNREGISTER_CAPABILITY => {
            check_as::<UnregistrationParams, _>(payload, "UnregistrationParams")
        }
        methods::WORKSPACE_DID_CHANGE_CONFIGURATION => {
            check_as::<DidChangeConfigurationParams, _>(payload, "DidChangeConfigurationParams")
        }
        methods::WORKSPACE_CONFIGURATION => {
            check_as::<ConfigurationParams, _>(payload, "ConfigurationParams")
        }
        methods::WORKSPACE_DID_CHANGE_WORKSPACE_FOLDERS => check_as::<
            DidChangeWorkspaceFoldersParams,
            _,
        >(payload, "DidChangeWorkspaceFoldersParams"),
        methods::WORKSPACE_DID_CHANGE_WATCHED_FILES => {
            check_as::<DidChangeWatchedFilesParams, _>(payload, "DidChangeWatchedFilesParams")
        }
        methods::WORKSPACE_SYMBOL => {
            check_as::<WorkspaceSymbolParams, _>(payload, "WorkspaceSymbolParams")
        }
        methods::TEXT_DOCUMENT_PUBLISH_DIAGNOSTICS => {
            check_as::<PublishDiagnosticsParams, _>(payload, "PublishDiagnosticsParams")
        }
        methods::TEXT_DOCUMENT_HOVER => check_as::<HoverParams, _>(payload, "HoverParams"),
        methods::TEXT_DOCUMENT_COMPLETION => {
            check_as::<CompletionParams, _>(payload, "CompletionParams")
        }
        methods::COMPLETION_ITEM_RESOLVE => check_as::<CompletionItem, _>(payload, "CompletionItem"),
        methods::TEXT_DOCUMENT_SIGNATURE_HELP => {
            check_as::<SignatureHelpParams, _>(payload, "SignatureHelpParams")
        }
        methods::TEXT_DOCUMENT_DECLARATION
        | methods::TEXT_DOCUMENT_DEFINITION
        | methods::TEXT_DOCUMENT_TYPE_DEFINITION
        | methods::TEXT_DOCUMENT_IMPLEMENTATION => check_as::<GotoParams, _>(payload, "GotoParams"),
        methods::TEXT_DOCUMENT_REFERENCES => {
            check_as::<ReferenceParams, _>(payload, "ReferenceParams")
        }
        methods::TEXT_DOCUMENT_CODE_LENS => check_as::<CodeLensParams, _>(payload, "CodeLensParams"),
        methods::CODE_LENS_RESOLVE => check_as::<CodeLens, _>(payload, "CodeLens"),
        methods::TEXT_DOCUMENT_RENAME => check_as::<RenameParams, _>(payload, "RenameParams"),
        methods::TEXT_DOCUMENT_PREPARE_RENAME => {
            check_as::<PrepareRenameParams, _>(payload, "PrepareRenameParams")
        }
        methods::TEXT_DOCUMENT_PREPARE_CALL_HIERARCHY => {
            check_as::<CallHierarchyPrepareParams, _>(payload, "CallHierarchyPrepareParams")
        }
        methods::CALL_HIERARCHY_INCOMING_CALLS => check_as::<CallHierarchyIncomingCallsParams, _>(
            payload,
            "CallHierarchyIncomingCallsParams",
        ),
        methods::CALL_HIERARCHY_OUTGOING_CALLS => check_as::<CallHierarchyOutgoingCallsParams, _>(
            payload,
            "CallHierarchyOutgoingCallsParams",
        ),
        methods::TEXT_DOCUMENT_SEMANTIC_TOKENS_FULL => {
            check_as::<SemanticTokensParams, _>(payload, "SemanticTokensParams")
        }
        methods::TEXT_DOCUMENT_SEMANTIC_TOKENS_FULL_DELTA => {
            check_as::<SemanticTokensDeltaParams, _>(payload, "SemanticTokensDeltaParams")
        }
        methods::TEXT_DOCUMENT_SEMANTIC_TOKENS_RANGE => {
            check_as::<SemanticTokensRangeParams, _>(payload, "SemanticTokensRangeParams")
        }
        methods::TEXT_DOCUMENT_MONIKER => check_as::<MonikerParams, _>(payload, "MonikerParams"),
        methods::TEXT_DOCUMENT_LINKED_EDITING_RANGE => {
            check_as::<LinkedEditingRangeParams, _>(payload, "LinkedEditingRangeParams")
        }
        _ => PayloadCheck::Skipped,
    }
}

fn check_result<P: Payload>(payload: &P) -> PayloadCheck {
    match payload.method() {
        methods::INITIALIZE => check_as::<InitializeResult, _>(payload, "InitializeResult"),
        methods::SHUTDOWN
        | methods::CLIENT_REGISTER_CAPABILITY
        | methods::CLIENT_UNREGISTER_CAPABILITY
        | methods::WINDOW_WORK_DONE_PROGRESS_CREATE => check_as::<(), _>(payload, "null"),
        methods::WINDOW_SHOW_MESSAGE_REQUEST => {
            check_as::<Option<MessageActionItem>, _>(payload, "MessageActionItem")
        }
        methods::TEXT_DOCUMENT_HOVER => check_as::<Option<Hover>, _>(payload, "Hover"),
        methods::COMPLETION_ITEM_RESOLVE => check_as::<CompletionItem, _>(payload, "CompletionItem"),
        methods::TEXT_DOCUMENT_SIGNATURE_HELP => {
            check_as::<Option<SignatureHelp>, _>(payload, "SignatureHelp")
        }
        methods::TEXT_DOCUMENT_REFERENCES => {
            check_as::<Option<Vec<Location>>, _>(payload, "Location[]")
        }
        methods::TEXT_DOCUMENT_CODE_LENS => {
            check_as::<Option<Vec<CodeLens>>, _>(payload, "CodeLens[]")
        }
        methods::CODE_LENS_RESOLVE => check_as::<CodeLens, _>(payload, "CodeLens"),
        methods::TEXT_DOCUMENT_PREPARE_CALL_HIERARCHY => {
            check_as::<Option<Vec<CallHierarchyItem>>, _>(payload, "CallHierarchyItem[]")
        }
        methods::CALL_HIERARCHY_INCOMING_CALLS => {
            check_as::<Option<Vec<CallHierarchyIncomingCall>>, _>(
                payload,
                "CallHierarchyIncomingCall[]",
            )
        }
        methods::CALL_HIERARCHY_OUTGOING_CALLS => {
            check_as::<Option<Vec<CallHierarchyOutgoingCall>>, _>(
                payload,
                "CallHierarchyOutgoingCall[]",
            )
        }
        methods::TEXT_DOCUMENT_SEMANTIC_TOKENS_FULL
        | methods::TEXT_DOCUMENT_SEMANTIC_TOKENS_RANGE => {
            check_as::<Option<SemanticTokens>, _>(payload, "SemanticTokens")
        }
        methods::TEXT_DOCUMENT_MONIKER => check_as::<Option<Vec<Moniker>>, _>(payload, "Moniker[]"),
        methods::TEXT_DOCUMENT_LINKED_EDITING_RANGE => {
            check_as::<Option<LinkedEditingRanges>, _>(payload, "LinkedEditingRanges")
        }
        _ => PayloadCheck::Skipped,
    }
}

#[cfg(test)]
mod tests;
