//! Language Server Protocol data records.
//!
//! Plain serde records for the parameters, results and capability
//! descriptors exchanged between an editor and a language server. Field
//! names follow the protocol's camelCase spelling on the wire, optional
//! members are `Option`s omitted when `None`, and the protocol's mixin
//! interfaces are composed with `#[serde(flatten)]` fields.
//!
//! Integer enumerations such as [`symbols::SymbolKind`] are open newtypes:
//! unknown values survive a round trip and display as the raw number. String
//! enumerations such as [`common::MarkupKind`] are closed Rust enums that
//! display and parse their wire names.
//!
//! # Example
//!
//! ```
//! use lspwire_schema::document::Position;
//! use lspwire_schema::hover::HoverParams;
//! use lspwire_schema::text_document::TextDocumentPositionParams;
//!
//! let params = HoverParams {
//!     text_document_position_params: TextDocumentPositionParams::new(
//!         "file:///src/main.rs",
//!         Position::new(3, 7),
//!     ),
//!     work_done_progress_params: Default::default(),
//! };
//! let json = serde_json::to_string(&params).expect("serialise");
//! assert_eq!(
//!     json,
//!     r#"{"textDocument":{"uri":"file:///src/main.rs"},"position":{"line":3,"character":7}}"#
//! );
//! ```

mod macros;

pub mod call_hierarchy;
pub mod capabilities;
pub mod code_lens;
pub mod command;
pub mod common;
pub mod completion;
pub mod configuration;
pub mod diagnostic;
pub mod document;
pub mod files;
pub mod goto;
pub mod hover;
pub mod initialize;
pub mod linked_editing_range;
pub mod methods;
pub mod monikers;
pub mod progress;
pub mod registration;
pub mod semantic_tokens;
pub mod signature;
pub mod symbols;
pub mod text_document;
pub mod window;
pub mod workspace;

#[cfg(test)]
mod tests;
