//! MMLC compression
//!
//!     MMLC shortens MML for constrained links: tags become single digits and
//!     frequent words become short codes. It is lossy and not meant to be parsed as
//!     MML again.
//!
//!     There are two ways in:
//!
//!         compress_lines      A raw-text transform. Each line is handled on its own
//!                             with no idea of document structure. The whole content of
//!                             a line goes through word substitution, URLs included.
//!                             Line count and every `|` are preserved.
//!
//!         compress_document   Walks a parsed tree in canonical order. Only prose is
//!                             substituted: titles, metadata values, paragraph and
//!                             quote text, link text, image descriptions. Metadata keys,
//!                             URLs and code lines are emitted as is.
//!
//!     decompress_lines maps digit tags and word codes back. It is the inverse of
//!     compress_document: code lines, metadata keys and URLs are left as they are.
//!     Output of compress_lines, which also substitutes inside those, keeps its
//!     codes there. Any word in the original text that happened to equal a code is
//!     expanded too, so the result is a best effort reading aid and not the
//!     original source.

mod dictionary;

pub use dictionary::{Dictionary, DEFAULT_ENTRIES};

use crate::mml::ast::{ContentNode, Document, Image, Link};
use crate::mml::lexing::{split_pair, Tag, DELIMITER};
use crate::mml::lexing::tag::PAIR_SEPARATOR;

/// Applies a [Dictionary] in either direction
#[derive(Debug, Clone, Default)]
pub struct Compressor {
    dictionary: Dictionary,
}

impl Compressor {
    pub fn new(dictionary: Dictionary) -> Self {
        Self { dictionary }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn compress_lines(&self, source: &str) -> String {
        source
            .split('\n')
            .map(|raw| self.compress_line(raw))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn compress_line(&self, raw: &str) -> String {
        let line = raw.trim();
        let Some((tag, content)) = line.split_once(DELIMITER) else {
            return line.to_string();
        };

        let tag = Tag::from_raw(tag);
        let code = match tag.code() {
            Some(code) => code.to_string(),
            None => tag.as_str().to_string(),
        };
        format!("{code}{DELIMITER}{}", self.dictionary.substitute(content.trim()))
    }

    pub fn compress_document(&self, doc: &Document) -> String {
        let mut lines = Vec::new();

        if let Some(title) = &doc.title {
            lines.push(self.prose_line(Tag::Title, title));
        }
        for (key, value) in &doc.metadata {
            lines.push(self.metadata_line(key, value));
        }
        for link in &doc.links {
            lines.push(self.link_line(link));
        }

        for section in &doc.sections {
            lines.push(self.prose_line(Tag::Section, &section.title));
            for (key, value) in &section.metadata {
                lines.push(self.metadata_line(key, value));
            }
            for node in &section.children {
                lines.push(match node {
                    ContentNode::Paragraph { content } => self.prose_line(Tag::Paragraph, content),
                    ContentNode::Quote { content } => self.prose_line(Tag::Quote, content),
                    ContentNode::Code { content } => coded(&Tag::Code, content),
                    ContentNode::Link(link) => self.link_line(link),
                    ContentNode::Image(Image { description, url }) => coded(
                        &Tag::Image,
                        &with_url(&self.dictionary.substitute(description), url),
                    ),
                });
            }
        }

        lines.join("\n")
    }

    fn prose_line(&self, tag: Tag, text: &str) -> String {
        coded(&tag, &self.dictionary.substitute(text))
    }

    fn metadata_line(&self, key: &str, value: &str) -> String {
        let value = self.dictionary.substitute(value);
        coded(&Tag::Metadata, &format!("{key}{PAIR_SEPARATOR}{value}"))
    }

    fn link_line(&self, link: &Link) -> String {
        let text = self.dictionary.substitute(&link.text);
        coded(&Tag::Link, &with_url(&text, &link.url))
    }

    pub fn decompress_lines(&self, compressed: &str) -> String {
        compressed
            .split('\n')
            .map(|raw| self.decompress_line(raw))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn decompress_line(&self, raw: &str) -> String {
        let line = raw.trim();
        let Some((code, content)) = line.split_once(DELIMITER) else {
            return line.to_string();
        };

        let code = code.trim();
        let content = content.trim();
        let Some(tag) = Tag::from_code(code) else {
            return format!("{code}{DELIMITER}{}", self.dictionary.expand(content));
        };

        let expanded = match tag {
            Tag::Code => content.to_string(),
            Tag::Metadata => {
                let (key, value) = split_pair(content);
                format!("{key}{PAIR_SEPARATOR}{}", self.dictionary.expand(value))
            }
            Tag::Link | Tag::Image => {
                let (text, url) = split_pair(content);
                with_url(&self.dictionary.expand(text), url)
            }
            _ => self.dictionary.expand(content),
        };
        format!("{tag}{DELIMITER}{expanded}")
    }
}

fn coded(tag: &Tag, content: &str) -> String {
    match tag.code() {
        Some(code) => format!("{code}{DELIMITER}{content}"),
        None => format!("{tag}{DELIMITER}{content}"),
    }
}

fn with_url(text: &str, url: &str) -> String {
    if url.is_empty() {
        text.to_string()
    } else {
        format!("{text}{PAIR_SEPARATOR}{url}")
    }
}

/// Compress raw MML line by line with the built-in dictionary
pub fn compress_lines(source: &str) -> String {
    Compressor::default().compress_lines(source)
}

/// Compress a parsed document with the built-in dictionary
pub fn compress_document(doc: &Document) -> String {
    Compressor::default().compress_document(doc)
}

/// Expand MMLC back to readable MML with the built-in dictionary
pub fn decompress_lines(compressed: &str) -> String {
    Compressor::default().decompress_lines(compressed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mml::parsing::parse;

    #[test]
    fn test_compress_lines_codes_tags() {
        let compressed = compress_lines("T:Rapport\nh:Secteur 4\nimg:Carte|map.png\nX:Alerte");
        assert_eq!(compressed, "1:R\n2:S 4\n6:Carte|map.png\nX:A");
    }

    #[test]
    fn test_compress_lines_keeps_extra_colons() {
        assert_eq!(compress_lines("P: départ 10:30 Urgent"), "4:départ 10:30 U");
    }

    #[test]
    fn test_compress_lines_passes_through_non_directives() {
        let source = "  just prose  \n\n   \nT:x";
        assert_eq!(compress_lines(source), "just prose\n\n\n1:x");
    }

    #[test]
    fn test_compress_lines_is_not_structure_aware() {
        assert_eq!(
            compress_lines("M:Secteur|Secteur\nC:Patient"),
            "3:S|S\n7:P1"
        );
    }

    #[test]
    fn test_compress_document_only_touches_prose() {
        let doc = parse(
            "T:Rapport Urgent\nM:Secteur|Secteur Nord\nL:Alerte|https://x.org/Alerte\n\
             H:Patient\nP:Victime Stable\nC:Critique()\nIMG:Médical|Médical.png\nQ:Évacuation",
        );
        let expected = [
            "1:R U",
            "3:Secteur|S Nord",
            "5:A|https://x.org/Alerte",
            "2:P1",
            "4:V S1",
            "7:Critique()",
            "6:M|Médical.png",
            "8:E",
        ]
        .join("\n");
        assert_eq!(compress_document(&doc), expected);
    }

    #[test]
    fn test_compress_document_link_without_url() {
        let doc = parse("H:S\nL:Docs");
        assert_eq!(compress_document(&doc), "2:S\n5:Docs");
    }

    #[test]
    fn test_compress_empty_document() {
        assert_eq!(compress_document(&Document::new()), "");
    }

    #[test]
    fn test_decompress_lines() {
        let expanded = decompress_lines("1:R\n3:S|S\n6:M|M.png\n7:C\n9:A\n\nprose");
        assert_eq!(
            expanded,
            "T:Rapport\nM:S|Secteur\nIMG:Médical|M.png\nC:C\n9:Alerte\n\nprose"
        );
    }

    #[test]
    fn test_decompress_reverses_document_compression() {
        let source = "T:Rapport Urgent\nH:Secteur 4\nP:Patient Stable\nL:Alerte|https://a.org";
        let doc = parse(source);
        let round = parse(&decompress_lines(&compress_document(&doc)));
        assert_eq!(round, doc);
    }

    #[test]
    fn test_custom_dictionary() {
        let compressor = Compressor::new(Dictionary::new([("Fire", "F")]).unwrap());
        assert_eq!(compressor.compress_lines("P:Fire Rapport"), "4:F Rapport");
    }
}
