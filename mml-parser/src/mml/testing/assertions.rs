//! Fluent assertions over the document tree

use crate::mml::ast::{ContentNode, Document, Image, Link, Metadata, Section};

fn summarize(children: &[ContentNode]) -> String {
    children
        .iter()
        .map(|node| node.node_type())
        .collect::<Vec<_>>()
        .join(", ")
}

fn assert_metadata(metadata: &Metadata, key: &str, expected: &str, context: &str) {
    match metadata.get(key) {
        Some(actual) => assert_eq!(
            actual, expected,
            "{}: Expected metadata '{}' to be '{}', found '{}'",
            context, key, expected, actual
        ),
        None => panic!(
            "{}: Expected metadata '{}', found keys [{}]",
            context,
            key,
            metadata.keys().cloned().collect::<Vec<_>>().join(", ")
        ),
    }
}

pub struct DocumentAssertion<'a> {
    pub(crate) doc: &'a Document,
    pub(crate) context: String,
}

impl<'a> DocumentAssertion<'a> {
    pub fn title(self, expected: &str) -> Self {
        assert_eq!(
            self.doc.title.as_deref(),
            Some(expected),
            "{}: Expected title '{}'",
            self.context,
            expected
        );
        self
    }

    pub fn no_title(self) -> Self {
        assert!(
            self.doc.title.is_none(),
            "{}: Expected no title, found {:?}",
            self.context,
            self.doc.title
        );
        self
    }

    pub fn metadata(self, key: &str, expected: &str) -> Self {
        assert_metadata(&self.doc.metadata, key, expected, &self.context);
        self
    }

    pub fn metadata_count(self, expected: usize) -> Self {
        let actual = self.doc.metadata.len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} global metadata entries, found {}",
            self.context, expected, actual
        );
        self
    }

    pub fn section_count(self, expected: usize) -> Self {
        let actual = self.doc.sections.len();
        let titles: Vec<_> = self.doc.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            actual, expected,
            "{}: Expected {} sections, found {}: {:?}",
            self.context, expected, actual, titles
        );
        self
    }

    pub fn section<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(SectionAssertion<'a>),
    {
        assert!(
            index < self.doc.sections.len(),
            "{}: Section index {} out of bounds (document has {} sections)",
            self.context,
            index,
            self.doc.sections.len()
        );
        assertion(SectionAssertion {
            section: &self.doc.sections[index],
            context: format!("{}.sections[{}]", self.context, index),
        });
        self
    }

    pub fn global_link_count(self, expected: usize) -> Self {
        let actual = self.doc.links.len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} global links, found {}",
            self.context, expected, actual
        );
        self
    }

    pub fn global_link<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(LinkAssertion<'a>),
    {
        assert!(
            index < self.doc.links.len(),
            "{}: Global link index {} out of bounds (document has {} global links)",
            self.context,
            index,
            self.doc.links.len()
        );
        assertion(LinkAssertion {
            link: &self.doc.links[index],
            context: format!("{}.links[{}]", self.context, index),
        });
        self
    }
}

pub struct SectionAssertion<'a> {
    pub(crate) section: &'a Section,
    pub(crate) context: String,
}

impl<'a> SectionAssertion<'a> {
    pub fn title(self, expected: &str) -> Self {
        assert_eq!(
            self.section.title, expected,
            "{}: Expected section title '{}', found '{}'",
            self.context, expected, self.section.title
        );
        self
    }

    pub fn metadata(self, key: &str, expected: &str) -> Self {
        assert_metadata(&self.section.metadata, key, expected, &self.context);
        self
    }

    pub fn metadata_count(self, expected: usize) -> Self {
        let actual = self.section.metadata.len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} metadata entries, found {}",
            self.context, expected, actual
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        let actual = self.section.children.len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} children, found {}: [{}]",
            self.context,
            expected,
            actual,
            summarize(&self.section.children)
        );
        self
    }

    /// Assert the sequence of child types, e.g. `["paragraph", "link"]`
    pub fn child_types(self, expected: &[&str]) -> Self {
        let actual: Vec<_> = self.section.children.iter().map(|n| n.node_type()).collect();
        assert_eq!(
            actual, expected,
            "{}: Unexpected child types",
            self.context
        );
        self
    }

    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        assert!(
            index < self.section.children.len(),
            "{}: Child index {} out of bounds (section has {} children)",
            self.context,
            index,
            self.section.children.len()
        );
        assertion(NodeAssertion {
            node: &self.section.children[index],
            context: format!("{}.children[{}]", self.context, index),
        });
        self
    }
}

pub struct NodeAssertion<'a> {
    pub(crate) node: &'a ContentNode,
    pub(crate) context: String,
}

impl<'a> NodeAssertion<'a> {
    fn text_node(self, expected_type: &str) -> TextAssertion<'a> {
        let node: &'a ContentNode = self.node;
        match (node.node_type() == expected_type, node.text_content()) {
            (true, Some(text)) => TextAssertion {
                text,
                context: self.context,
            },
            _ => panic!(
                "{}: Expected {}, found {}",
                self.context,
                expected_type,
                node.node_type()
            ),
        }
    }

    pub fn assert_paragraph(self) -> TextAssertion<'a> {
        self.text_node("paragraph")
    }

    pub fn assert_quote(self) -> TextAssertion<'a> {
        self.text_node("quote")
    }

    pub fn assert_code(self) -> TextAssertion<'a> {
        self.text_node("code")
    }

    pub fn assert_link(self) -> LinkAssertion<'a> {
        match self.node {
            ContentNode::Link(link) => LinkAssertion {
                link,
                context: self.context,
            },
            other => panic!("{}: Expected link, found {}", self.context, other.node_type()),
        }
    }

    pub fn assert_image(self) -> ImageAssertion<'a> {
        match self.node {
            ContentNode::Image(image) => ImageAssertion {
                image,
                context: self.context,
            },
            other => panic!("{}: Expected image, found {}", self.context, other.node_type()),
        }
    }
}

pub struct TextAssertion<'a> {
    pub(crate) text: &'a str,
    pub(crate) context: String,
}

impl TextAssertion<'_> {
    pub fn text(self, expected: &str) -> Self {
        assert_eq!(
            self.text, expected,
            "{}: Expected text to be '{}', but got '{}'",
            self.context, expected, self.text
        );
        self
    }

    pub fn text_starts_with(self, prefix: &str) -> Self {
        assert!(
            self.text.starts_with(prefix),
            "{}: Expected text to start with '{}', but got '{}'",
            self.context,
            prefix,
            self.text
        );
        self
    }

    pub fn text_contains(self, substring: &str) -> Self {
        assert!(
            self.text.contains(substring),
            "{}: Expected text to contain '{}', but got '{}'",
            self.context,
            substring,
            self.text
        );
        self
    }
}

pub struct LinkAssertion<'a> {
    pub(crate) link: &'a Link,
    pub(crate) context: String,
}

impl LinkAssertion<'_> {
    pub fn text(self, expected: &str) -> Self {
        assert_eq!(
            self.link.text, expected,
            "{}: Expected link text '{}', found '{}'",
            self.context, expected, self.link.text
        );
        self
    }

    pub fn url(self, expected: &str) -> Self {
        assert_eq!(
            self.link.url, expected,
            "{}: Expected link url '{}', found '{}'",
            self.context, expected, self.link.url
        );
        self
    }
}

pub struct ImageAssertion<'a> {
    pub(crate) image: &'a Image,
    pub(crate) context: String,
}

impl ImageAssertion<'_> {
    pub fn description(self, expected: &str) -> Self {
        assert_eq!(
            self.image.description, expected,
            "{}: Expected image description '{}', found '{}'",
            self.context, expected, self.image.description
        );
        self
    }

    pub fn url(self, expected: &str) -> Self {
        assert_eq!(
            self.image.url, expected,
            "{}: Expected image url '{}', found '{}'",
            self.context, expected, self.image.url
        );
        self
    }
}
