//! Output formats
//!
//! Every renderer is a pure function from a finished [Document](crate::mml::ast::Document)
//! to a string. They share nothing with each other or with the builder:
//! - html: standalone HTML5 page
//! - json: serde serialization of the tree, and its decoder
//! - text: plain text with underlined headings
//! - mml: canonical MML source, re-parses to the same tree
//! - mmlc: dictionary-compressed MML
//!
//! Each one is also wrapped in a [Formatter] so callers can pick a format by name
//! through the [FormatRegistry].

pub mod html;
pub mod json;
pub mod mmlc;
pub mod registry;
pub mod source;
pub mod text;

pub use html::{to_html, to_html_with, HtmlFormatter, HtmlOptions};
pub use json::{from_json, to_json, JsonFormatter};
pub use mmlc::MmlcFormatter;
pub use registry::{FormatRegistry, Formatter};
pub use source::{to_mml, MmlFormatter};
pub use text::{to_plain_text, TextFormatter};
