//! Testing utilities
//!
//!     Two rules keep the test suite honest:
//!
//!         1. Prefer the curated samples in [samples] over ad-hoc source strings. They
//!            are reviewed MML and every test that uses them agrees on what the input is.
//!
//!         2. Check trees with [assert_doc] instead of walking fields by hand. The fluent
//!            assertions name what they check, carry a context path into every failure
//!            message, and keep tests stable if the tree layout changes.
//!
//! Usage Example
//!
//!     ```rust,ignore
//!     use mml_parser::mml::testing::{assert_doc, samples};
//!
//!     let doc = samples::emergency_report();
//!     assert_doc(&doc)
//!         .title("Rapport Urgent")
//!         .section_count(2)
//!         .section(0, |section| {
//!             section
//!                 .title("Secteur Nord")
//!                 .metadata("Statut", "Critique")
//!                 .child(0, |child| {
//!                     child.assert_paragraph().text_starts_with("Patient");
//!                 });
//!         });
//!     ```

mod assertions;
pub mod samples;

pub use assertions::{
    DocumentAssertion, ImageAssertion, LinkAssertion, NodeAssertion, SectionAssertion,
    TextAssertion,
};

use crate::mml::ast::Document;

/// Create an assertion builder for a document
pub fn assert_doc(doc: &Document) -> DocumentAssertion<'_> {
    DocumentAssertion {
        doc,
        context: "document".to_string(),
    }
}
