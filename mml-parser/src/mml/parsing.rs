//! Parsing entry points
//!
//! `parse` is the whole pipeline: tokenize, dispatch, fold. It never fails on
//! text. Lines it cannot use are skipped, unknown tags and orphaned content are
//! reported as [Diagnostic]s, and a complete [Document] always comes back.
//!
//! The fallible entry points exist for callers holding input that may not be
//! text at all: raw bytes, an untyped JSON value, a file path. They reject such
//! input with [ParseError::InvalidInput] before any tokenization happens.

use crate::mml::ast::Document;
use crate::mml::building::build;
use crate::mml::error::ParseError;
use crate::mml::lexing::{directives, Tag};
use std::fmt;
use std::fs;
use std::path::Path;

/// A non-fatal event noticed while building
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The tag is not part of MML. No node was created.
    UnknownTag { line: usize, tag: String },
    /// Content that needs a section appeared before the first `H:` and was dropped
    OrphanedContent { line: usize, tag: Tag },
}

impl Diagnostic {
    pub fn line(&self) -> usize {
        match self {
            Diagnostic::UnknownTag { line, .. } | Diagnostic::OrphanedContent { line, .. } => *line,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnknownTag { line, tag } => {
                write!(f, "line {line}: unknown tag '{tag}' ignored")
            }
            Diagnostic::OrphanedContent { line, tag } => {
                write!(f, "line {line}: '{tag}' outside of any section dropped")
            }
        }
    }
}

/// A document together with everything noticed while building it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseReport {
    pub document: Document,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseReport {
    pub fn unknown_tags(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d, Diagnostic::UnknownTag { .. }))
    }
}

/// Parse MML source into a document
pub fn parse(source: &str) -> Document {
    parse_with_report(source).document
}

/// Parse MML source, keeping diagnostics
pub fn parse_with_report(source: &str) -> ParseReport {
    let report = build(directives(source));
    log::debug!(
        "Parsed {} section(s) with {} diagnostic(s)",
        report.document.sections.len(),
        report.diagnostics.len()
    );
    report
}

/// Check that bytes are UTF-8 text
pub fn decode(bytes: &[u8]) -> Result<&str, ParseError> {
    std::str::from_utf8(bytes).map_err(|e| {
        ParseError::InvalidInput(format!(
            "expected UTF-8 text, invalid byte after position {}",
            e.valid_up_to()
        ))
    })
}

/// Parse raw bytes. Fails if they are not UTF-8.
pub fn parse_bytes(bytes: &[u8]) -> Result<Document, ParseError> {
    decode(bytes).map(parse)
}

/// Parse an untyped value. Only JSON strings are MML source.
pub fn parse_value(value: &serde_json::Value) -> Result<Document, ParseError> {
    use serde_json::Value;

    let found = match value {
        Value::String(source) => return Ok(parse(source)),
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    };
    Err(ParseError::InvalidInput(format!(
        "expected a string, found {found}"
    )))
}

/// Read and parse a file
pub fn load(path: impl AsRef<Path>) -> Result<Document, ParseError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_bytes(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_value_accepts_strings() {
        let doc = parse_value(&json!("T:Doc")).unwrap();
        assert_eq!(doc.title.as_deref(), Some("Doc"));
    }

    #[test]
    fn test_parse_value_rejects_non_strings() {
        for value in [json!(null), json!(42), json!({}), json!([]), json!(true)] {
            let err = parse_value(&value).unwrap_err();
            assert!(err.is_invalid_input(), "{value} should be rejected");
        }
    }

    #[test]
    fn test_parse_value_message() {
        let err = parse_value(&json!(42)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid MML input: expected a string, found a number"
        );
    }

    #[test]
    fn test_parse_bytes_rejects_invalid_utf8() {
        let err = parse_bytes(&[b'T', b':', 0xff, 0xfe]).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("position 2"));
    }

    #[test]
    fn test_parse_bytes_accepts_utf8() {
        let doc = parse_bytes("T:Évacuation".as_bytes()).unwrap();
        assert_eq!(doc.title.as_deref(), Some("Évacuation"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load("/definitely/not/here.mml").unwrap_err();
        assert!(matches!(err, ParseError::Io { .. }));
    }

    #[test]
    fn test_empty_source_gives_empty_document() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn test_report_collects_diagnostics() {
        let report = parse_with_report("X:foo\nP:orphan\nT:Doc");
        assert_eq!(report.document.title.as_deref(), Some("Doc"));
        assert_eq!(report.diagnostics.len(), 2);
        assert_eq!(report.unknown_tags().count(), 1);
        assert_eq!(report.diagnostics[0].line(), 1);
        assert_eq!(
            report.diagnostics[0].to_string(),
            "line 1: unknown tag 'X' ignored"
        );
        assert_eq!(
            report.diagnostics[1].to_string(),
            "line 2: 'P' outside of any section dropped"
        );
    }
}
