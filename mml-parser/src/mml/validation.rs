//! Structural validation
//!
//! Parsing never fails on text, so a document can be well-formed and still
//! useless. These checks catch the common cases. They are advisory: the CLI
//! `validate` command turns them into a non-zero exit, nothing else does.

use crate::mml::ast::Document;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// No title, no global metadata and no sections
    EmptyDocument,
    /// 1-based section position
    SectionMissingTitle { index: usize },
    /// 1-based global link position
    GlobalLinkMissingUrl { index: usize },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::EmptyDocument => write!(f, "Document is empty or malformed"),
            ValidationIssue::SectionMissingTitle { index } => {
                write!(f, "Section {index}: missing title")
            }
            ValidationIssue::GlobalLinkMissingUrl { index } => {
                write!(f, "Global link {index}: missing URL")
            }
        }
    }
}

pub fn validate(doc: &Document) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if doc.display_title().is_none() && doc.metadata.is_empty() && doc.sections.is_empty() {
        issues.push(ValidationIssue::EmptyDocument);
    }

    issues.extend(
        doc.sections
            .iter()
            .enumerate()
            .filter(|(_, section)| section.title.is_empty())
            .map(|(i, _)| ValidationIssue::SectionMissingTitle { index: i + 1 }),
    );

    issues.extend(
        doc.links
            .iter()
            .enumerate()
            .filter(|(_, link)| link.url.is_empty())
            .map(|(i, _)| ValidationIssue::GlobalLinkMissingUrl { index: i + 1 }),
    );

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mml::parsing::parse;

    #[test]
    fn test_valid_document() {
        assert!(validate(&parse("T:Doc\nH:S\nP:text")).is_empty());
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(validate(&parse("")), vec![ValidationIssue::EmptyDocument]);
        assert_eq!(validate(&parse("T:")), vec![ValidationIssue::EmptyDocument]);
    }

    #[test]
    fn test_global_links_alone_are_empty() {
        let issues = validate(&parse("L:Home|/"));
        assert_eq!(issues, vec![ValidationIssue::EmptyDocument]);
    }

    #[test]
    fn test_positions_are_one_based() {
        let issues = validate(&parse("L:Ok|/\nL:Broken\nT:Doc\nH:Fine\nH:"));
        assert_eq!(
            issues,
            vec![
                ValidationIssue::SectionMissingTitle { index: 2 },
                ValidationIssue::GlobalLinkMissingUrl { index: 2 },
            ]
        );
        assert_eq!(issues[0].to_string(), "Section 2: missing title");
        assert_eq!(issues[1].to_string(), "Global link 2: missing URL");
    }
}
