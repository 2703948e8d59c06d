//! Lexer
//!
//!     MML is one directive per line, so lexing is two small steps:
//!
//!         1. Line tokenization (this module). Split the source into lines, trim them,
//!            and keep only lines that are non-empty and contain the `:` delimiter.
//!            Everything else is not MML and is silently skipped.
//!
//!         2. Tag dispatch. See [tag](tag). Split a kept line at its first `:` into a
//!            normalized [Tag](tag::Tag) and its trimmed content.
//!
//!     Both steps borrow from the source; nothing is copied until the builder takes
//!     ownership of content strings.
//!
//!     The tokenizer is lazy and restartable: [LineTokens] is `Clone`, and calling
//!     [tokenize] again on the same source yields the same sequence.

pub mod tag;

pub use tag::{dispatch, split_pair, Directive, Tag};

use std::iter::{Enumerate, FusedIterator};
use std::str::Lines;

/// Separates a tag from its content
pub const DELIMITER: char = ':';

/// A trimmed source line that contains the delimiter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// 1-based line number in the original source
    pub number: usize,
    pub text: &'a str,
}

/// Iterator over the directive-bearing lines of a source
#[derive(Debug, Clone)]
pub struct LineTokens<'a> {
    lines: Enumerate<Lines<'a>>,
}

impl<'a> Iterator for LineTokens<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        for (index, raw) in self.lines.by_ref() {
            let text = raw.trim();
            if !text.is_empty() && text.contains(DELIMITER) {
                return Some(Line {
                    number: index + 1,
                    text,
                });
            }
        }
        None
    }
}

impl FusedIterator for LineTokens<'_> {}

/// Tokenize a source into its directive-bearing lines
pub fn tokenize(source: &str) -> LineTokens<'_> {
    LineTokens {
        lines: source.lines().enumerate(),
    }
}

/// Tokenize and dispatch in one pass
pub fn directives(source: &str) -> impl Iterator<Item = Directive<'_>> + Clone {
    tokenize(source).filter_map(dispatch)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(source: &str) -> Vec<&str> {
        tokenize(source).map(|line| line.text).collect()
    }

    #[test]
    fn test_skips_blank_and_undelimited_lines() {
        let source = "T:Title\n\n   \njust prose\nH:Section\n";
        assert_eq!(texts(source), vec!["T:Title", "H:Section"]);
    }

    #[test]
    fn test_trims_lines() {
        assert_eq!(texts("   P:  padded  \t"), vec!["P:  padded"]);
    }

    #[test]
    fn test_line_numbers_count_skipped_lines() {
        let numbers: Vec<_> = tokenize("\nno delimiter\nT:A\n\nH:B")
            .map(|line| line.number)
            .collect();
        assert_eq!(numbers, vec![3, 5]);
    }

    #[test]
    fn test_handles_crlf() {
        assert_eq!(texts("T:A\r\nH:B\r\n"), vec!["T:A", "H:B"]);
    }

    #[test]
    fn test_restartable() {
        let tokens = tokenize("T:A\nH:B");
        let first: Vec<_> = tokens.clone().collect();
        let second: Vec<_> = tokens.collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn test_empty_source() {
        assert_eq!(tokenize("").count(), 0);
    }

    #[test]
    fn test_directives_pipeline() {
        let tags: Vec<_> = directives("t:Title\nnoise\nimg:Map|map.png")
            .map(|d| d.tag)
            .collect();
        assert_eq!(tags, vec![Tag::Title, Tag::Image]);
    }
}
