//! Document element
//!
//! The root of the tree. Holds the title, the global scope (metadata and links
//! declared before any section) and the sections in source order.

use super::content::{ContentNode, Link};
use super::section::Section;
use super::Metadata;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub sections: Vec<Section>,
    /// Global links only. Links inside a section are children of that section.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// The title if present and non-empty. Renderers treat `T:` with no text as untitled.
    pub fn display_title(&self) -> Option<&str> {
        self.title.as_deref().filter(|title| !title.is_empty())
    }

    /// All section children, in document order
    pub fn iter_nodes(&self) -> impl Iterator<Item = &ContentNode> {
        self.sections.iter().flat_map(|section| section.children.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.metadata.is_empty()
            && self.sections.is_empty()
            && self.links.is_empty()
    }

    /// Counts of (paragraphs, links, images) across all sections.
    /// Global links are not included.
    pub fn count_by_type(&self) -> (usize, usize, usize) {
        self.iter_nodes()
            .fold((0, 0, 0), |(paragraphs, links, images), node| match node {
                ContentNode::Paragraph { .. } => (paragraphs + 1, links, images),
                ContentNode::Link(_) => (paragraphs, links + 1, images),
                ContentNode::Image(_) => (paragraphs, links, images + 1),
                ContentNode::Quote { .. } | ContentNode::Code { .. } => {
                    (paragraphs, links, images)
                }
            })
    }
}
