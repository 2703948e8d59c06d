//! Error types
//!
//! Only input that cannot be treated as text is fatal to a parse. Everything the
//! grammar can represent degrades gracefully and is reported as a
//! [`Diagnostic`](crate::mml::parsing::Diagnostic) instead.

use std::path::PathBuf;

/// Errors that prevent a document from being produced at all
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The input was not a string (a non-string value, or bytes that are not UTF-8)
    #[error("Invalid MML input: {0}")]
    InvalidInput(String),
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ParseError {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, ParseError::InvalidInput(_))
    }
}

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Error during serialization or deserialization
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Errors raised while building an MMLC dictionary
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MmlcError {
    #[error("Invalid MMLC dictionary: {0}")]
    InvalidDictionary(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_display() {
        let err1 = FormatError::FormatNotFound("test".to_string());
        assert_eq!(format!("{err1}"), "Format 'test' not found");

        let err2 = FormatError::SerializationError("error".to_string());
        assert_eq!(format!("{err2}"), "Serialization error: error");
    }

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::InvalidInput("expected a string, found null".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid MML input: expected a string, found null"
        );
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_io_error_keeps_source() {
        use std::error::Error;

        let err = ParseError::Io {
            path: PathBuf::from("missing.mml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert!(err.to_string().starts_with("Failed to read missing.mml"));
        assert!(err.source().is_some());
        assert!(!err.is_invalid_input());
    }
}
