//! Plain-text renderer
//!
//! Headings are underlined (`=` for the title, `-` for sections) with one mark per
//! character, so non-ASCII titles get a matching underline. Every block is
//! followed by a blank line and trailing whitespace is trimmed from the result.

use crate::mml::ast::{ContentNode, Document, Image, Link};
use crate::mml::error::FormatError;
use crate::mml::formats::Formatter;

pub fn to_plain_text(doc: &Document) -> String {
    let mut text = String::new();

    if let Some(title) = doc.display_title() {
        push_heading(&mut text, title, '=');
    }

    for section in &doc.sections {
        push_heading(&mut text, &section.title, '-');
        for node in &section.children {
            match node {
                ContentNode::Paragraph { content } => text.push_str(content),
                ContentNode::Quote { content } => {
                    text.push_str("> ");
                    text.push_str(content);
                }
                ContentNode::Code { content } => {
                    text.push_str("```\n");
                    text.push_str(content);
                    text.push_str("\n```");
                }
                ContentNode::Link(Link { text: label, url }) => {
                    text.push_str(&format!("[{label}]({url})"));
                }
                ContentNode::Image(Image { description, .. }) => {
                    text.push_str(&format!("[Image: {description}]"));
                }
            }
            text.push_str("\n\n");
        }
    }

    text.truncate(text.trim_end().len());
    text
}

fn push_heading(text: &mut String, heading: &str, mark: char) {
    let underline = mark.to_string().repeat(heading.chars().count());
    text.push_str(heading);
    text.push('\n');
    text.push_str(&underline);
    text.push_str("\n\n");
}

pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(to_plain_text(doc))
    }

    fn description(&self) -> &str {
        "Plain text with underlined headings"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mml::parsing::parse;

    #[test]
    fn test_underline_counts_chars() {
        let text = to_plain_text(&parse("T:Évacuation"));
        assert_eq!(text, "Évacuation\n==========");
    }

    #[test]
    fn test_blocks() {
        let doc = parse("H:S\nP:para\nQ:quote\nC:let x = 1;\nL:Docs|https://d.org\nIMG:Map|m.png");
        let expected = "S\n-\n\npara\n\n> quote\n\n```\nlet x = 1;\n```\n\n[Docs](https://d.org)\n\n[Image: Map]";
        assert_eq!(to_plain_text(&doc), expected);
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(to_plain_text(&Document::new()), "");
    }

    #[test]
    fn test_empty_title_is_skipped() {
        assert_eq!(to_plain_text(&parse("T:\nH:S")), "S\n-");
    }
}
