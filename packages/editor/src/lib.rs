//! # Docedit Editor
//!
//! Editing core for tree-shaped documents: edits, their inverses, and a
//! linear undo/redo history.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ session: edit intent from the UI            │
//! └─────────────────────────────────────────────┘
//!                     ↓ handle_edit
//! ┌─────────────────────────────────────────────┐
//! │ history: {undo, redo} entries + cursor      │
//! │  - record truncates the redo branch         │
//! │  - undo/redo replay stored edits            │
//! └─────────────────────────────────────────────┘
//!                     ↓ Edit::apply
//! ┌─────────────────────────────────────────────┐
//! │ engine: mutate tree, return inverse edit    │
//! └─────────────────────────────────────────────┘
//!                     ↓ TreeAdapter
//! ┌─────────────────────────────────────────────┐
//! │ dom: the document tree                      │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Inverse at apply time**: every applied edit yields the edit that
//!    restores the previous state exactly
//! 2. **Rejections are absorbed**: an edit the tree refuses becomes a
//!    no-op instead of an error
//! 3. **Linear history**: recording after undo discards the redo branch
//!
//! ## Usage
//!
//! ```rust
//! use docedit_dom::{Document, TreeAdapter};
//! use docedit_editor::{AttributeValue, Edit, EditSession};
//!
//! let mut doc = Document::new();
//! let root = doc.root();
//! let scl = doc.create_element("SCL").unwrap();
//! doc.append_child(root, scl).unwrap();
//!
//! let mut session = EditSession::new("station.scd", doc);
//! session.handle_edit(Edit::update(scl, [("version", AttributeValue::plain("2007"))]));
//! assert_eq!(session.document().get_attribute(scl, "version").as_deref(), Some("2007"));
//!
//! session.undo(1);
//! assert_eq!(session.document().get_attribute(scl, "version"), None);
//! ```

mod config;
mod describe;
mod edit;
mod engine;
mod errors;
mod history;
mod session;

pub use config::{EditorConfig, DEFAULT_CONFIG_NAME};
pub use describe::{EntryDescription, LogLine};
pub use edit::{AttributeValue, Attributes, Edit, Insert, Remove, Update};
pub use engine::local_attribute_name;
pub use errors::EditorError;
pub use history::{History, LogEntry};
pub use session::EditSession;

// Re-export the tree abstraction for convenience
pub use docedit_dom::TreeAdapter;
