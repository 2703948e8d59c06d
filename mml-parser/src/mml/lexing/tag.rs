//! Tag dispatch
//!
//! Classifies a tokenized line. The tag is everything before the first `:`,
//! trimmed and uppercased, so `t`, ` T ` and `T` are the same tag. The content is
//! everything after it, trimmed. Further colons belong to the content.

use super::{Line, DELIMITER};
use std::fmt;

/// Separates key from value (M), text from url (L) and description from url (IMG)
pub const PAIR_SEPARATOR: char = '|';

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tag {
    /// `T`
    Title,
    /// `H`
    Section,
    /// `P`
    Paragraph,
    /// `M`
    Metadata,
    /// `L`
    Link,
    /// `Q`
    Quote,
    /// `C`
    Code,
    /// `IMG`
    Image,
    /// Anything else, normalized (trimmed and uppercased)
    Unknown(String),
}

impl Tag {
    /// All recognized tags
    pub const KNOWN: [Tag; 8] = [
        Tag::Title,
        Tag::Section,
        Tag::Paragraph,
        Tag::Metadata,
        Tag::Link,
        Tag::Quote,
        Tag::Code,
        Tag::Image,
    ];

    /// Classify a raw tag segment
    pub fn from_raw(raw: &str) -> Self {
        let normalized = raw.trim().to_uppercase();
        match normalized.as_str() {
            "T" => Tag::Title,
            "H" => Tag::Section,
            "P" => Tag::Paragraph,
            "M" => Tag::Metadata,
            "L" => Tag::Link,
            "Q" => Tag::Quote,
            "C" => Tag::Code,
            "IMG" => Tag::Image,
            _ => Tag::Unknown(normalized),
        }
    }

    /// The canonical source spelling
    pub fn as_str(&self) -> &str {
        match self {
            Tag::Title => "T",
            Tag::Section => "H",
            Tag::Paragraph => "P",
            Tag::Metadata => "M",
            Tag::Link => "L",
            Tag::Quote => "Q",
            Tag::Code => "C",
            Tag::Image => "IMG",
            Tag::Unknown(name) => name,
        }
    }

    /// MMLC digit code
    pub fn code(&self) -> Option<char> {
        match self {
            Tag::Title => Some('1'),
            Tag::Section => Some('2'),
            Tag::Metadata => Some('3'),
            Tag::Paragraph => Some('4'),
            Tag::Link => Some('5'),
            Tag::Image => Some('6'),
            Tag::Code => Some('7'),
            Tag::Quote => Some('8'),
            Tag::Unknown(_) => None,
        }
    }

    /// Reverse of [`Tag::code`]
    pub fn from_code(code: &str) -> Option<Self> {
        Tag::KNOWN
            .into_iter()
            .find(|tag| tag.code().is_some_and(|c| code.len() == 1 && code.starts_with(c)))
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Tag::Unknown(_))
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dispatched line: what the builder consumes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive<'a> {
    pub line: usize,
    pub tag: Tag,
    pub content: &'a str,
}

/// Split a tokenized line at its first delimiter.
///
/// Returns `None` only for lines without a delimiter, which the tokenizer never yields.
pub fn dispatch(line: Line<'_>) -> Option<Directive<'_>> {
    let (raw_tag, content) = line.text.split_once(DELIMITER)?;
    Some(Directive {
        line: line.number,
        tag: Tag::from_raw(raw_tag),
        content: content.trim(),
    })
}

/// Split `left|right` on the first `|`, trimming both halves.
///
/// A missing separator gives an empty right half. There is no escaping, so a `|`
/// meant to be part of the left half ends it early.
pub fn split_pair(content: &str) -> (&str, &str) {
    match content.split_once(PAIR_SEPARATOR) {
        Some((left, right)) => (left.trim(), right.trim()),
        None => (content.trim(), ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn line(text: &str) -> Line<'_> {
        Line { number: 1, text }
    }

    #[rstest]
    #[case("T", Tag::Title)]
    #[case("t", Tag::Title)]
    #[case(" T ", Tag::Title)]
    #[case("h", Tag::Section)]
    #[case("p", Tag::Paragraph)]
    #[case("m", Tag::Metadata)]
    #[case("l", Tag::Link)]
    #[case("q", Tag::Quote)]
    #[case("c", Tag::Code)]
    #[case("img", Tag::Image)]
    #[case("Img", Tag::Image)]
    fn test_from_raw_is_case_insensitive(#[case] raw: &str, #[case] expected: Tag) {
        assert_eq!(Tag::from_raw(raw), expected);
    }

    #[test]
    fn test_unknown_tag_is_normalized() {
        assert_eq!(Tag::from_raw(" cfg "), Tag::Unknown("CFG".to_string()));
        assert!(!Tag::from_raw("x").is_known());
    }

    #[test]
    fn test_dispatch_splits_on_first_colon() {
        let directive = dispatch(line("P: time is 10:30 ")).unwrap();
        assert_eq!(directive.tag, Tag::Paragraph);
        assert_eq!(directive.content, "time is 10:30");
    }

    #[test]
    fn test_dispatch_empty_content() {
        let directive = dispatch(line("H:")).unwrap();
        assert_eq!(directive.tag, Tag::Section);
        assert_eq!(directive.content, "");
    }

    #[test]
    fn test_dispatch_without_delimiter() {
        assert!(dispatch(line("no delimiter")).is_none());
    }

    #[test]
    fn test_split_pair() {
        assert_eq!(split_pair("Author | Jane "), ("Author", "Jane"));
        assert_eq!(split_pair("Draft"), ("Draft", ""));
        assert_eq!(split_pair("a|b|c"), ("a", "b|c"));
        assert_eq!(split_pair("|only value"), ("", "only value"));
    }

    #[test]
    fn test_codes_round_trip() {
        for tag in Tag::KNOWN {
            let code = tag.code().unwrap().to_string();
            assert_eq!(Tag::from_code(&code), Some(tag));
        }
        assert_eq!(Tag::from_code("9"), None);
        assert_eq!(Tag::from_code("12"), None);
        assert_eq!(Tag::Unknown("X".into()).code(), None);
    }

    #[test]
    fn test_display_uses_source_spelling() {
        assert_eq!(Tag::Image.to_string(), "IMG");
        assert_eq!(Tag::Unknown("CFG".into()).to_string(), "CFG");
    }
}
