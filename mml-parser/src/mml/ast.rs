//! Document tree
//!
//!     The tree is deliberately shallow: a Document owns Sections, a Section owns its
//!     ContentNodes. Nothing points back up, nothing is shared.
//!
//!     Global scope (metadata and links declared before the first section) lives on
//!     the Document itself. Everything else lives on the Section that was open when
//!     it was declared.
//!
//!     All types derive serde so the JSON renderer is a plain serialization of this
//!     module, and decoding that JSON gives back an equal tree.

mod content;
mod document;
mod section;

pub use content::{ContentNode, Image, Link};
pub use document::Document;
pub use section::Section;

use std::collections::BTreeMap;

/// Key/value metadata for a scope. Keys are unique, the last write wins.
pub type Metadata = BTreeMap<String, String>;
