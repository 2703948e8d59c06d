//! # mml-parser
//!
//! Parser and renderers for MML, a line-oriented markup format.
//!
//! File Layout
//!
//!     The crate follows the flow of data through the toolchain, one module per stage:
//!
//!     src/mml
//!       ├── lexing       Line tokenizer and tag dispatch
//!       ├── building     The document builder, an explicit fold over directives
//!       ├── parsing      Public parse entry points and diagnostics
//!       ├── ast          The document tree
//!       ├── formats      Renderers (html, json, text, mml, mmlc) and their registry
//!       ├── mmlc         Dictionary compression of raw lines and of documents
//!       ├── validation   Structural checks over a finished document
//!       └── stats        Source and document statistics
//!
//!     Data flows one way: raw text, line tokens, directives, builder, immutable
//!     Document, renderer, string. Nothing holds state across parse calls.
//!
//! For testing helpers, see the [testing module](mml::testing).

pub mod mml;

pub use mml::ast::{ContentNode, Document, Image, Link, Metadata, Section};
pub use mml::error::{FormatError, MmlcError, ParseError};
pub use mml::formats::{
    from_json, to_html, to_html_with, to_json, to_mml, to_plain_text, FormatRegistry, Formatter,
    HtmlOptions,
};
pub use mml::lexing::Tag;
pub use mml::mmlc::{compress_document, compress_lines, decompress_lines, Compressor, Dictionary};
pub use mml::parsing::{
    load, parse, parse_bytes, parse_value, parse_with_report, Diagnostic, ParseReport,
};
pub use mml::stats::DocumentStats;
pub use mml::validation::{validate, ValidationIssue};
