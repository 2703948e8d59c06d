//! Document statistics
//!
//! Combines counts from the parsed tree with measurements of the source text.
//! The signal ratio is the share of characters that are not tag syntax, where tag
//! syntax is everything up to and including the first `:` of each non-blank line.

use crate::mml::ast::Document;
use crate::mml::lexing::DELIMITER;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DocumentStats {
    pub has_title: bool,
    pub sections: usize,
    /// Paragraphs inside sections
    pub paragraphs: usize,
    /// Section links plus global links
    pub links: usize,
    pub images: usize,
    /// Global metadata entries
    pub metadata: usize,
    /// UTF-8 size of the source
    pub bytes: usize,
    /// Non-blank source lines
    pub lines: usize,
    /// Rounded percentage, 0 for an empty source
    pub signal_ratio: u8,
}

impl DocumentStats {
    pub fn collect(source: &str, doc: &Document) -> Self {
        let (paragraphs, section_links, images) = doc.count_by_type();

        Self {
            has_title: doc.display_title().is_some(),
            sections: doc.sections.len(),
            paragraphs,
            links: section_links + doc.links.len(),
            images,
            metadata: doc.metadata.len(),
            bytes: source.len(),
            lines: source.lines().filter(|line| !line.trim().is_empty()).count(),
            signal_ratio: signal_ratio(source),
        }
    }
}

fn signal_ratio(source: &str) -> u8 {
    let total = source.chars().count();
    if total == 0 {
        return 0;
    }

    let syntax: usize = source
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| line.split_once(DELIMITER))
        .map(|(tag, _)| tag.chars().count() + 1)
        .sum();

    let signal = total.saturating_sub(syntax) as f64;
    (signal / total as f64 * 100.0).round() as u8
}
