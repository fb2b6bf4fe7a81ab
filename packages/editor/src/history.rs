//! # Edit History
//!
//! Linear undo/redo log over applied edits.
//!
//! ## Design
//!
//! - `record` applies an edit once and stores it with the inverse it
//!   produced
//! - `edit_count` is the cursor: entries before it are applied, entries
//!   from it on are undone but still redoable
//! - Recording after an undo truncates the log at the cursor, so the
//!   abandoned redo branch is gone for good
//! - Undo/redo replay the stored edits and never re-record them
//!
//! ## Example
//!
//! ```rust
//! use docedit_dom::{Document, TreeAdapter};
//! use docedit_editor::{Edit, History};
//!
//! let mut doc = Document::new();
//! let scl = doc.create_element("SCL").unwrap();
//! let mut history = History::new();
//!
//! let root = doc.root();
//! history.record(&mut doc, Edit::insert(scl, root, None));
//! assert_eq!(doc.parent(scl), Some(root));
//!
//! history.undo(&mut doc, 1);
//! assert_eq!(doc.parent(scl), None);
//!
//! history.redo(&mut doc, 1);
//! assert_eq!(doc.parent(scl), Some(root));
//! ```

use crate::edit::Edit;
use docedit_dom::TreeAdapter;
use std::fmt::Debug;
use tracing::{debug, instrument};

/// One recorded step: the edit that was applied and the edit undoing it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry<N> {
    pub undo: Edit<N>,
    pub redo: Edit<N>,
}

/// Undo/redo log for one editing session
#[derive(Debug, Clone)]
pub struct History<N> {
    /// Recorded entries, oldest first
    entries: Vec<LogEntry<N>>,

    /// Number of entries currently applied
    edit_count: usize,

    /// Maximum number of entries kept (0 = unlimited)
    max_entries: usize,
}

impl<N: Copy + Debug> History<N> {
    /// Create an unbounded history
    pub fn new() -> Self {
        Self::with_max_entries(0)
    }

    /// Create a history keeping at most `max_entries` entries (0 = unlimited)
    pub fn with_max_entries(max_entries: usize) -> Self {
        Self {
            entries: Vec::new(),
            edit_count: 0,
            max_entries,
        }
    }

    /// Apply `edit` to `tree` and record it together with its inverse
    ///
    /// Any undone entries are discarded first.
    #[instrument(level = "debug", skip_all, fields(edit_count = self.edit_count, entries = self.entries.len()))]
    pub fn record<T>(&mut self, tree: &mut T, edit: Edit<N>)
    where
        T: TreeAdapter<Node = N>,
    {
        if self.edit_count < self.entries.len() {
            debug!(
                discarded = self.entries.len() - self.edit_count,
                "Truncating redo branch"
            );
            self.entries.truncate(self.edit_count);
        }

        let undo = edit.apply(tree);
        self.entries.push(LogEntry { undo, redo: edit });
        self.edit_count += 1;

        if self.max_entries > 0 && self.entries.len() > self.max_entries {
            let excess = self.entries.len() - self.max_entries;
            self.entries.drain(..excess);
            self.edit_count -= excess;
            debug!(dropped = excess, "History limit reached - dropped oldest entries");
        }
    }

    /// Undo up to `n` entries, returning how many were undone
    #[instrument(level = "debug", skip(self, tree), fields(edit_count = self.edit_count))]
    pub fn undo<T>(&mut self, tree: &mut T, n: usize) -> usize
    where
        T: TreeAdapter<Node = N>,
    {
        let mut undone = 0;
        while undone < n && self.can_undo() {
            let entry = &self.entries[self.edit_count - 1];
            entry.undo.apply(tree);
            self.edit_count -= 1;
            undone += 1;
        }
        undone
    }

    /// Redo up to `n` undone entries, returning how many were redone
    #[instrument(level = "debug", skip(self, tree), fields(edit_count = self.edit_count))]
    pub fn redo<T>(&mut self, tree: &mut T, n: usize) -> usize
    where
        T: TreeAdapter<Node = N>,
    {
        let mut redone = 0;
        while redone < n && self.can_redo() {
            let entry = &self.entries[self.edit_count];
            entry.redo.apply(tree);
            self.edit_count += 1;
            redone += 1;
        }
        redone
    }
}

impl<N> History<N> {
    pub fn can_undo(&self) -> bool {
        self.edit_count > 0
    }

    pub fn can_redo(&self) -> bool {
        self.edit_count < self.entries.len()
    }

    /// Number of entries currently applied
    pub fn edit_count(&self) -> usize {
        self.edit_count
    }

    /// Index of the most recently applied entry
    pub fn last(&self) -> Option<usize> {
        self.edit_count.checked_sub(1)
    }

    /// All retained entries, oldest first
    pub fn entries(&self) -> &[LogEntry<N>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn undo_levels(&self) -> usize {
        self.edit_count
    }

    pub fn redo_levels(&self) -> usize {
        self.entries.len() - self.edit_count
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Forget all entries without touching the tree
    pub fn clear(&mut self) {
        self.entries.clear();
        self.edit_count = 0;
    }
}

impl<N: Copy + Debug> Default for History<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edit::AttributeValue;
    use docedit_dom::{Document, NodeId};

    fn fixture() -> (Document, NodeId) {
        let mut doc = Document::new();
        let root = doc.root();
        let scl = doc.create_element("SCL").unwrap();
        doc.append_child(root, scl).unwrap();
        (doc, scl)
    }

    fn set_version(scl: NodeId, version: &str) -> Edit<NodeId> {
        Edit::update(scl, [("version", AttributeValue::plain(version))])
    }

    #[test]
    fn test_history_creation() {
        let history: History<NodeId> = History::new();
        assert_eq!(history.edit_count(), 0);
        assert_eq!(history.len(), 0);
        assert_eq!(history.last(), None);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_record_stores_inverse() {
        let (mut doc, scl) = fixture();
        let mut history = History::new();

        history.record(&mut doc, set_version(scl, "2007"));

        assert_eq!(history.edit_count(), 1);
        assert_eq!(history.last(), Some(0));
        assert_eq!(
            history.entries()[0],
            LogEntry {
                undo: Edit::update(scl, [("version", AttributeValue::Removed)]),
                redo: set_version(scl, "2007"),
            }
        );
    }

    #[test]
    fn test_undo_redo_on_empty_history() {
        let (mut doc, _) = fixture();
        let mut history: History<NodeId> = History::new();

        assert_eq!(history.undo(&mut doc, 1), 0);
        assert_eq!(history.redo(&mut doc, 1), 0);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_zero_steps_is_noop() {
        let (mut doc, scl) = fixture();
        let mut history = History::new();
        history.record(&mut doc, set_version(scl, "2007"));

        assert_eq!(history.undo(&mut doc, 0), 0);
        assert_eq!(history.edit_count(), 1);
        assert_eq!(doc.get_attribute(scl, "version").as_deref(), Some("2007"));
    }

    #[test]
    fn test_undo_and_redo_move_cursor() {
        let (mut doc, scl) = fixture();
        let mut history = History::new();

        history.record(&mut doc, set_version(scl, "2003"));
        history.record(&mut doc, set_version(scl, "2007"));

        assert_eq!(history.undo(&mut doc, 1), 1);
        assert_eq!(doc.get_attribute(scl, "version").as_deref(), Some("2003"));
        assert_eq!(history.undo_levels(), 1);
        assert_eq!(history.redo_levels(), 1);

        assert_eq!(history.redo(&mut doc, 1), 1);
        assert_eq!(doc.get_attribute(scl, "version").as_deref(), Some("2007"));
        assert!(!history.can_redo());
    }

    #[test]
    fn test_multi_step_undo_stops_at_start() {
        let (mut doc, scl) = fixture();
        let mut history = History::new();
        history.record(&mut doc, set_version(scl, "a"));
        history.record(&mut doc, set_version(scl, "b"));

        assert_eq!(history.undo(&mut doc, 5), 2);
        assert_eq!(history.edit_count(), 0);
        assert_eq!(doc.get_attribute(scl, "version"), None);

        assert_eq!(history.redo(&mut doc, 5), 2);
        assert_eq!(doc.get_attribute(scl, "version").as_deref(), Some("b"));
    }

    #[test]
    fn test_record_after_undo_truncates() {
        let (mut doc, scl) = fixture();
        let mut history = History::new();
        for version in ["1", "2", "3"] {
            history.record(&mut doc, set_version(scl, version));
        }

        history.undo(&mut doc, 2);
        history.record(&mut doc, set_version(scl, "4"));

        assert_eq!(history.len(), 2);
        assert_eq!(history.edit_count(), 2);
        assert!(!history.can_redo());
        assert_eq!(history.entries()[1].redo, set_version(scl, "4"));
    }

    #[test]
    fn test_max_entries_enforced() {
        let (mut doc, scl) = fixture();
        let mut history = History::with_max_entries(2);

        for i in 0..3 {
            history.record(&mut doc, set_version(scl, &i.to_string()));
        }

        assert_eq!(history.len(), 2);
        assert_eq!(history.edit_count(), 2);
        assert_eq!(history.undo(&mut doc, 5), 2);
        assert_eq!(doc.get_attribute(scl, "version").as_deref(), Some("0"));
    }

    #[test]
    fn test_clear() {
        let (mut doc, scl) = fixture();
        let mut history = History::new();
        history.record(&mut doc, set_version(scl, "1"));

        history.clear();
        assert!(history.is_empty());
        assert!(!history.can_undo());
        assert_eq!(doc.get_attribute(scl, "version").as_deref(), Some("1"));
    }
}
