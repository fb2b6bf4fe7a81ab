//! # Edit Session
//!
//! Ties one document to its undo/redo history.
//!
//! The session is the only writer of its document: edits arrive through
//! [`EditSession::handle_edit`] and are replayed by `undo`/`redo`. Read
//! access to the tree is exposed for rendering.

use crate::config::EditorConfig;
use crate::describe::LogLine;
use crate::edit::Edit;
use crate::history::History;
use docedit_dom::TreeAdapter;
use tracing::info;

/// Single-user editing session over one document
pub struct EditSession<T: TreeAdapter> {
    /// Name of the document being edited
    doc_name: String,

    /// Document being edited
    document: T,

    /// Undo/redo log for `document`
    history: History<T::Node>,
}

impl<T: TreeAdapter> EditSession<T> {
    /// Create a session with default configuration
    pub fn new(doc_name: impl Into<String>, document: T) -> Self {
        Self::with_config(doc_name, document, &EditorConfig::default())
    }

    pub fn with_config(doc_name: impl Into<String>, document: T, config: &EditorConfig) -> Self {
        Self {
            doc_name: doc_name.into(),
            document,
            history: History::with_max_entries(config.max_history),
        }
    }

    /// Replace the edited document, starting a fresh history.
    ///
    /// Entries recorded against the previous document reference its
    /// nodes and cannot be replayed on the new one.
    pub fn open(&mut self, doc_name: impl Into<String>, document: T) -> T {
        self.doc_name = doc_name.into();
        self.history = History::with_max_entries(self.history.max_entries());
        info!(doc_name = %self.doc_name, "Opened document");
        std::mem::replace(&mut self.document, document)
    }

    /// Apply an edit coming from the UI and record it
    pub fn handle_edit(&mut self, edit: Edit<T::Node>) {
        self.history.record(&mut self.document, edit);
    }

    /// Undo the last `n` edits
    pub fn undo(&mut self, n: usize) -> usize {
        self.history.undo(&mut self.document, n)
    }

    /// Redo the last `n` undone edits
    pub fn redo(&mut self, n: usize) -> usize {
        self.history.redo(&mut self.document, n)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn edit_count(&self) -> usize {
        self.history.edit_count()
    }

    /// History list, newest first
    pub fn log(&self) -> Vec<LogLine> {
        self.history.log(&self.document)
    }

    pub fn history(&self) -> &History<T::Node> {
        &self.history
    }

    pub fn document(&self) -> &T {
        &self.document
    }

    pub fn doc_name(&self) -> &str {
        &self.doc_name
    }
}
