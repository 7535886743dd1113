//! File watching and rename support.

use std::fmt;
use std::ops::BitOr;

use serde::{Deserialize, Serialize};

use crate::common::TextDocumentRegistrationOptions;
use crate::document::DocumentUri;
use crate::macros::lsp_enum;
use crate::progress::{WorkDoneProgressOptions, WorkDoneProgressParams};
use crate::text_document::TextDocumentPositionParams;

/// Bit set of file events a watcher is interested in.
///
/// Displays as the `/`-separated flag names, such as `create/change`, or
/// `<unknown>` when empty or carrying bits outside the known flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WatchKind(u32);

impl WatchKind {
    /// Interested in file creation.
    pub const CREATE: Self = Self(1);
    /// Interested in file changes.
    pub const CHANGE: Self = Self(2);
    /// Interested in file deletion.
    pub const DELETE: Self = Self(4);
    /// Interested in every event; the protocol default.
    pub const ALL: Self = Self(7);

    const FLAGS: [(Self, &'static str); 3] = [
        (Self::CREATE, "create"),
        (Self::CHANGE, "change"),
        (Self::DELETE, "delete"),
    ];

    /// Wraps raw bits.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Returns the raw bits.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns `true` when every flag in `other` is set.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns `true` when no flag is set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` when only known flags are set.
    #[must_use]
    pub const fn is_known(self) -> bool {
        self.0 & !Self::ALL.0 == 0
    }
}

impl Default for WatchKind {
    fn default() -> Self {
        Self::ALL
    }
}

impl BitOr for WatchKind {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl fmt::Display for WatchKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() || !self.is_known() {
            return formatter.write_str("<unknown>");
        }
        let mut separator = "";
        for (flag, name) in Self::FLAGS {
            if self.contains(flag) {
                write!(formatter, "{separator}{name}")?;
                separator = "/";
            }
        }
        Ok(())
    }
}

lsp_enum! {
    /// What happened to a watched file.
    pub struct FileChangeType(i32) {
        /// The file was created.
        CREATED = 1 => "Created",
        /// The file was changed.
        CHANGED = 2 => "Changed",
        /// The file was deleted.
        DELETED = 3 => "Deleted",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSystemWatcher {
    /// Glob pattern, such as `**/*.rs`.
    pub glob_pattern: String,
    /// Events of interest. Absent means [`WatchKind::ALL`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<WatchKind>,
}

/// A change to a watched file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEvent {
    pub uri: DocumentUri,
    #[serde(rename = "type")]
    pub typ: FileChangeType,
}

/// Registration options of `workspace/didChangeWatchedFiles`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DidChangeWatchedFilesRegistrationOptions {
    pub watchers: Vec<FileSystemWatcher>,
}

/// Parameters of `workspace/didChangeWatchedFiles`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DidChangeWatchedFilesParams {
    pub changes: Vec<FileEvent>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameOptions {
    #[serde(flatten)]
    pub work_done_progress_options: WorkDoneProgressOptions,
    /// Whether the server supports `textDocument/prepareRename`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prepare_provider: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameRegistrationOptions {
    #[serde(flatten)]
    pub text_document_registration_options: TextDocumentRegistrationOptions,
    #[serde(flatten)]
    pub rename_options: RenameOptions,
}

/// Parameters of `textDocument/rename`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameParams {
    #[serde(flatten)]
    pub text_document_position_params: TextDocumentPositionParams,
    #[serde(flatten)]
    pub work_done_progress_params: WorkDoneProgressParams,
    pub new_name: String,
}

/// Parameters of `textDocument/prepareRename`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrepareRenameParams {
    #[serde(flatten)]
    pub text_document_position_params: TextDocumentPositionParams,
    #[serde(flatten)]
    pub work_done_progress_params: WorkDoneProgressParams,
}
