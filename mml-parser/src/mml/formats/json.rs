//! JSON renderer
//!
//! A pretty-printed serde serialization of the tree. Field order follows the
//! struct definitions: title, metadata, sections, links.

use crate::mml::ast::Document;
use crate::mml::error::FormatError;
use crate::mml::formats::Formatter;

pub fn to_json(doc: &Document) -> Result<String, FormatError> {
    serde_json::to_string_pretty(doc).map_err(|e| FormatError::SerializationError(e.to_string()))
}

/// Decode a document previously rendered by [to_json]
pub fn from_json(json: &str) -> Result<Document, FormatError> {
    serde_json::from_str(json).map_err(|e| FormatError::SerializationError(e.to_string()))
}

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        to_json(doc)
    }

    fn description(&self) -> &str {
        "Pretty-printed JSON document tree"
    }
}
