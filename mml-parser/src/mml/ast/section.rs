//! Section element
//!
//! Created once per `H:` line, in source order. Two sections with the same title
//! are still two sections.

use super::content::{ContentNode, Image, Link};
use super::Metadata;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub children: Vec<ContentNode>,
}

impl Section {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            metadata: Metadata::new(),
            children: Vec::new(),
        }
    }

    pub fn iter_paragraphs(&self) -> impl Iterator<Item = &str> {
        self.children.iter().filter_map(|node| node.as_paragraph())
    }

    pub fn iter_links(&self) -> impl Iterator<Item = &Link> {
        self.children.iter().filter_map(|node| node.as_link())
    }

    pub fn iter_images(&self) -> impl Iterator<Item = &Image> {
        self.children.iter().filter_map(|node| node.as_image())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_child_iterators() {
        let mut section = Section::with_title("Intervention");
        section.children = vec![
            ContentNode::paragraph("Arrivée sur site"),
            ContentNode::link("Carte", "https://example.com/carte"),
            ContentNode::quote("Tout est calme"),
            ContentNode::image("Bâtiment", "batiment.png"),
            ContentNode::paragraph("Départ"),
        ];

        let paragraphs: Vec<_> = section.iter_paragraphs().collect();
        assert_eq!(paragraphs, vec!["Arrivée sur site", "Départ"]);
        let links: Vec<_> = section.iter_links().map(|link| link.text.as_str()).collect();
        assert_eq!(links, vec!["Carte"]);
        let images: Vec<_> = section.iter_images().map(|image| image.url.as_str()).collect();
        assert_eq!(images, vec!["batiment.png"]);
    }
}
