//! Canonical MML serializer
//!
//! Re-emits a document as MML source in a fixed order: title, global metadata,
//! global links, then each section preceded by a blank line. Parsing the output
//! gives back the same tree for anything the parser can produce. Source layout
//! (comments, blank lines, tag case, a title declared late) is not preserved.

use crate::mml::ast::{ContentNode, Document, Image, Link, Metadata};
use crate::mml::error::FormatError;
use crate::mml::formats::Formatter;
use crate::mml::lexing::tag::PAIR_SEPARATOR;
use crate::mml::lexing::{Tag, DELIMITER};

pub fn to_mml(doc: &Document) -> String {
    let mut out = String::new();

    if let Some(title) = &doc.title {
        push_line(&mut out, &Tag::Title, title);
    }
    push_metadata(&mut out, &doc.metadata);
    for link in &doc.links {
        push_link(&mut out, link);
    }

    for section in &doc.sections {
        if !out.is_empty() {
            out.push('\n');
        }
        push_line(&mut out, &Tag::Section, &section.title);
        push_metadata(&mut out, &section.metadata);
        for node in &section.children {
            match node {
                ContentNode::Paragraph { content } => push_line(&mut out, &Tag::Paragraph, content),
                ContentNode::Quote { content } => push_line(&mut out, &Tag::Quote, content),
                ContentNode::Code { content } => push_line(&mut out, &Tag::Code, content),
                ContentNode::Link(link) => push_link(&mut out, link),
                ContentNode::Image(Image { description, url }) => {
                    push_line(&mut out, &Tag::Image, &pair(description, url))
                }
            }
        }
    }

    out
}

fn push_line(out: &mut String, tag: &Tag, content: &str) {
    out.push_str(tag.as_str());
    out.push(DELIMITER);
    out.push_str(content);
    out.push('\n');
}

fn push_metadata(out: &mut String, metadata: &Metadata) {
    for (key, value) in metadata {
        push_line(out, &Tag::Metadata, &format!("{key}{PAIR_SEPARATOR}{value}"));
    }
}

fn push_link(out: &mut String, link: &Link) {
    push_line(out, &Tag::Link, &pair(&link.text, &link.url));
}

fn pair(left: &str, right: &str) -> String {
    if right.is_empty() {
        left.to_string()
    } else {
        format!("{left}{PAIR_SEPARATOR}{right}")
    }
}

pub struct MmlFormatter;

impl Formatter for MmlFormatter {
    fn name(&self) -> &str {
        "mml"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(to_mml(doc))
    }

    fn description(&self) -> &str {
        "Canonical MML source"
    }
}
