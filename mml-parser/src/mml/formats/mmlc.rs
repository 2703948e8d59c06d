//! MMLC as an output format
//!
//! Structure-aware compression of a parsed document. See [crate::mml::mmlc].

use crate::mml::ast::Document;
use crate::mml::error::FormatError;
use crate::mml::formats::Formatter;
use crate::mml::mmlc::{Compressor, Dictionary};

#[derive(Debug, Clone, Default)]
pub struct MmlcFormatter {
    compressor: Compressor,
}

impl MmlcFormatter {
    pub fn new(dictionary: Dictionary) -> Self {
        Self {
            compressor: Compressor::new(dictionary),
        }
    }
}

impl Formatter for MmlcFormatter {
    fn name(&self) -> &str {
        "mmlc"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(self.compressor.compress_document(doc))
    }

    fn description(&self) -> &str {
        "Dictionary-compressed MML"
    }
}
