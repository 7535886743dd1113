//! Symbol kinds and workspace symbol search.

use serde::{Deserialize, Serialize};

use crate::common::PartialResultParams;
use crate::macros::lsp_enum;
use crate::progress::{WorkDoneProgressOptions, WorkDoneProgressParams};

lsp_enum! {
    /// Kind of a program symbol.
    pub struct SymbolKind(i32) {
        /// A file.
        FILE = 1 => "File",
        /// A module.
        MODULE = 2 => "Module",
        /// A namespace.
        NAMESPACE = 3 => "Namespace",
        /// A package.
        PACKAGE = 4 => "Package",
        /// A class.
        CLASS = 5 => "Class",
        /// A method.
        METHOD = 6 => "Method",
        /// A property.
        PROPERTY = 7 => "Property",
        /// A field.
        FIELD = 8 => "Field",
        /// A constructor.
        CONSTRUCTOR = 9 => "Constructor",
        /// An enumeration.
        ENUM = 10 => "Enum",
        /// An interface.
        INTERFACE = 11 => "Interface",
        /// A function.
        FUNCTION = 12 => "Function",
        /// A variable.
        VARIABLE = 13 => "Variable",
        /// A constant.
        CONSTANT = 14 => "Constant",
        /// A string.
        STRING = 15 => "String",
        /// A number.
        NUMBER = 16 => "Number",
        /// A boolean.
        BOOLEAN = 17 => "Boolean",
        /// An array.
        ARRAY = 18 => "Array",
        /// An object.
        OBJECT = 19 => "Object",
        /// A key.
        KEY = 20 => "Key",
        /// Null.
        NULL = 21 => "Null",
        /// An enumeration member.
        ENUM_MEMBER = 22 => "EnumMember",
        /// A struct.
        STRUCT = 23 => "Struct",
        /// An event.
        EVENT = 24 => "Event",
        /// An operator.
        OPERATOR = 25 => "Operator",
        /// A type parameter.
        TYPE_PARAMETER = 26 => "TypeParameter",
    }
}

lsp_enum! {
    /// Extra annotations on a symbol.
    pub struct SymbolTag(i32) {
        /// The symbol is deprecated.
        DEPRECATED = 1 => "Deprecated",
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceSymbolOptions {
    #[serde(flatten)]
    pub work_done_progress_options: WorkDoneProgressOptions,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceSymbolRegistrationOptions {
    #[serde(flatten)]
    pub workspace_symbol_options: WorkspaceSymbolOptions,
}

/// Parameters of `workspace/symbol`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceSymbolParams {
    #[serde(flatten)]
    pub work_done_progress_params: WorkDoneProgressParams,
    #[serde(flatten)]
    pub partial_result_params: PartialResultParams,
    /// Filter text; an empty query asks for all symbols.
    pub query: String,
}
