//! Document building
//!
//!     The builder is a reducer: [BuilderState::apply] takes the state and one
//!     [Directive] and returns the next state. A parse is a fold of the directive
//!     stream over [BuilderState::new]. Nothing is shared between folds, so concurrent
//!     parses never see each other's cursor.
//!
//!     State is the document under construction plus one cursor: the index of the
//!     section currently receiving content, `None` before the first `H:`.
//!
//!     Transitions:
//!
//!         T    overwrite the document title
//!         H    push a new section, move the cursor to it
//!         M    insert into the cursor section's metadata, else the document's
//!         L    append to the cursor section, else to the document's global links
//!         P Q C IMG
//!              append to the cursor section, else drop (reported as orphaned)
//!         ?    unknown tag: no node, reported
//!
//!     Only metadata and links have a global scope. The other content tags have
//!     nowhere to go before a section exists and are dropped.

use crate::mml::ast::{ContentNode, Document, Link, Section};
use crate::mml::lexing::{split_pair, Directive, Tag};
use crate::mml::parsing::{Diagnostic, ParseReport};

#[derive(Debug, Clone, Default)]
pub struct BuilderState {
    document: Document,
    current_section: Option<usize>,
    diagnostics: Vec<Diagnostic>,
}

impl BuilderState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the section currently receiving content
    pub fn current_section(&self) -> Option<usize> {
        self.current_section
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Apply one directive and return the next state
    pub fn apply(mut self, directive: Directive<'_>) -> Self {
        let Directive { line, tag, content } = directive;
        log::trace!("line {}: {} {:?}", line, tag, content);

        match tag {
            Tag::Title => {
                self.document.title = Some(content.to_string());
            }
            Tag::Section => {
                self.document
                    .sections
                    .push(Section::with_title(content));
                self.current_section = Some(self.document.sections.len() - 1);
            }
            Tag::Metadata => {
                let (key, value) = split_pair(content);
                let target = match self.current_section {
                    Some(index) => &mut self.document.sections[index].metadata,
                    None => &mut self.document.metadata,
                };
                target.insert(key.to_string(), value.to_string());
            }
            Tag::Link => {
                let (text, url) = split_pair(content);
                let link = Link::new(text, url);
                match self.current_section {
                    Some(index) => self.document.sections[index]
                        .children
                        .push(ContentNode::Link(link)),
                    None => self.document.links.push(link),
                }
            }
            Tag::Paragraph => {
                self.push_child(line, Tag::Paragraph, ContentNode::paragraph(content));
            }
            Tag::Quote => {
                self.push_child(line, Tag::Quote, ContentNode::quote(content));
            }
            Tag::Code => {
                self.push_child(line, Tag::Code, ContentNode::code(content));
            }
            Tag::Image => {
                let (description, url) = split_pair(content);
                let node = ContentNode::image(description, url);
                self.push_child(line, Tag::Image, node);
            }
            Tag::Unknown(name) => {
                log::warn!("Unknown MML tag '{}' on line {}", name, line);
                self.diagnostics
                    .push(Diagnostic::UnknownTag { line, tag: name });
            }
        }

        self
    }

    fn push_child(&mut self, line: usize, tag: Tag, node: ContentNode) {
        match self.current_section {
            Some(index) => self.document.sections[index].children.push(node),
            None => {
                log::debug!("Dropping {} on line {}: no open section", tag, line);
                self.diagnostics
                    .push(Diagnostic::OrphanedContent { line, tag });
            }
        }
    }

    /// End the fold. The cursor is discarded with the state.
    pub fn finish(self) -> ParseReport {
        ParseReport {
            document: self.document,
            diagnostics: self.diagnostics,
        }
    }
}

/// Fold a directive stream into a document
pub fn build<'a, I>(directives: I) -> ParseReport
where
    I: IntoIterator<Item = Directive<'a>>,
{
    directives
        .into_iter()
        .fold(BuilderState::new(), BuilderState::apply)
        .finish()
}
