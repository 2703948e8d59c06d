//! Content nodes
//!
//! The children of a section. Serialized with an internal `type` tag so the JSON
//! reads `{"type": "paragraph", "content": "..."}`.

use serde::{Deserialize, Serialize};

/// A hyperlink, either a section child or a global link
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub text: String,
    /// Empty when the source line had no `|url` part
    #[serde(default)]
    pub url: String,
}

impl Link {
    pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: url.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub description: String,
    #[serde(default)]
    pub url: String,
}

impl Image {
    pub fn new(description: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            url: url.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentNode {
    Paragraph { content: String },
    Quote { content: String },
    /// A single code line. Consecutive `C:` lines are never joined.
    Code { content: String },
    Link(Link),
    Image(Image),
}

impl ContentNode {
    pub fn paragraph(content: impl Into<String>) -> Self {
        ContentNode::Paragraph {
            content: content.into(),
        }
    }

    pub fn quote(content: impl Into<String>) -> Self {
        ContentNode::Quote {
            content: content.into(),
        }
    }

    pub fn code(content: impl Into<String>) -> Self {
        ContentNode::Code {
            content: content.into(),
        }
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        ContentNode::Link(Link::new(text, url))
    }

    pub fn image(description: impl Into<String>, url: impl Into<String>) -> Self {
        ContentNode::Image(Image::new(description, url))
    }

    /// The lowercase variant name, as it appears in the JSON `type` field
    pub fn node_type(&self) -> &'static str {
        match self {
            ContentNode::Paragraph { .. } => "paragraph",
            ContentNode::Quote { .. } => "quote",
            ContentNode::Code { .. } => "code",
            ContentNode::Link(_) => "link",
            ContentNode::Image(_) => "image",
        }
    }

    /// Text of a paragraph, quote or code node
    pub fn text_content(&self) -> Option<&str> {
        match self {
            ContentNode::Paragraph { content }
            | ContentNode::Quote { content }
            | ContentNode::Code { content } => Some(content),
            ContentNode::Link(_) | ContentNode::Image(_) => None,
        }
    }

    pub fn as_paragraph(&self) -> Option<&str> {
        match self {
            ContentNode::Paragraph { content } => Some(content),
            _ => None,
        }
    }

    pub fn as_link(&self) -> Option<&Link> {
        match self {
            ContentNode::Link(link) => Some(link),
            _ => None,
        }
    }

    pub fn as_image(&self) -> Option<&Image> {
        match self {
            ContentNode::Image(image) => Some(image),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_type_matches_serde_tag() {
        let nodes = vec![
            ContentNode::paragraph("p"),
            ContentNode::quote("q"),
            ContentNode::code("c"),
            ContentNode::link("l", "u"),
            ContentNode::image("i", "u"),
        ];

        for node in nodes {
            let value = serde_json::to_value(&node).unwrap();
            assert_eq!(value["type"], node.node_type());
        }
    }

    #[test]
    fn test_link_serializes_flat() {
        let json = serde_json::to_value(ContentNode::link("Docs", "https://example.com")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "link", "text": "Docs", "url": "https://example.com"})
        );
    }

    #[test]
    fn test_missing_url_decodes_as_empty() {
        let node: ContentNode =
            serde_json::from_str(r#"{"type": "image", "description": "Map"}"#).unwrap();
        assert_eq!(node, ContentNode::image("Map", ""));
    }

    #[test]
    fn test_accessors() {
        assert_eq!(ContentNode::paragraph("x").as_paragraph(), Some("x"));
        assert_eq!(ContentNode::quote("x").as_paragraph(), None);
        assert_eq!(ContentNode::code("x").text_content(), Some("x"));
        assert!(ContentNode::link("a", "b").text_content().is_none());
        assert_eq!(ContentNode::link("a", "b").as_link().unwrap().url, "b");
        assert_eq!(
            ContentNode::image("a", "b").as_image().unwrap().description,
            "a"
        );
    }
}
