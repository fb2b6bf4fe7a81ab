//! # Docedit DOM
//!
//! Tree abstraction consumed by the editing core, plus an in-memory XML
//! document implementing it.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ editor: edits, inverses, undo/redo history  │
//! └─────────────────────────────────────────────┘
//!                     ↓ TreeAdapter
//! ┌─────────────────────────────────────────────┐
//! │ dom: parent/sibling navigation              │
//! │  - insert_before / remove_child             │
//! │  - namespaced attribute get/set/remove      │
//! │  - Document: arena-backed implementation    │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use docedit_dom::{Document, TreeAdapter};
//!
//! let mut doc = Document::new();
//! let scl = doc.create_element("SCL").unwrap();
//! let root = doc.root();
//! doc.append_child(root, scl).unwrap();
//! doc.set_attribute(scl, "version", "2007").unwrap();
//!
//! assert_eq!(doc.outer_xml(root), r#"<SCL version="2007"/>"#);
//! ```

mod adapter;
mod document;
mod error;
pub mod names;
mod node;

pub use adapter::TreeAdapter;
pub use document::Document;
pub use error::{DomError, DomResult};
pub use node::{Attribute, Element, NodeId, NodeKind};
