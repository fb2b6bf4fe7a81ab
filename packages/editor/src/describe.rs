//! Human-readable summaries of history entries, as shown in an editing
//! history list.

use crate::edit::Edit;
use crate::history::{History, LogEntry};
use docedit_dom::TreeAdapter;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryDescription {
    /// A batch edit touching `count` nodes (at least)
    Changed { count: usize },
    Moved { node: String, parent: String },
    Inserted { node: String, parent: String },
    Removed { node: String },
    Updated { element: String },
}

impl fmt::Display for EntryDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryDescription::Changed { count } => write!(f, "≥ {} nodes changed", count),
            EntryDescription::Moved { node, parent } => write!(f, "{} moved to {}", node, parent),
            EntryDescription::Inserted { node, parent } => {
                write!(f, "{} inserted into {}", node, parent)
            }
            EntryDescription::Removed { node } => write!(f, "{} removed", node),
            EntryDescription::Updated { element } => write!(f, "{} updated", element),
        }
    }
}

impl<N: Copy> LogEntry<N> {
    /// Summarize what this entry's forward edit does.
    ///
    /// An insert whose inverse is another insert relocated an attached
    /// node, so it reads as a move.
    pub fn describe<T>(&self, tree: &T) -> EntryDescription
    where
        T: TreeAdapter<Node = N>,
    {
        match &self.redo {
            Edit::Complex(edits) => EntryDescription::Changed { count: edits.len() },
            Edit::Insert(insert) => {
                let node = tree.node_name(insert.node);
                let parent = tree.node_name(insert.parent);
                if matches!(self.undo, Edit::Insert(_)) {
                    EntryDescription::Moved { node, parent }
                } else {
                    EntryDescription::Inserted { node, parent }
                }
            }
            Edit::Remove(remove) => EntryDescription::Removed {
                node: tree.node_name(remove.node),
            },
            Edit::Update(update) => EntryDescription::Updated {
                element: tree.node_name(update.element),
            },
        }
    }
}

/// One line of the history list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub index: usize,
    pub description: EntryDescription,
    /// Whether this is the most recently applied entry
    pub active: bool,
}

impl<N: Copy> History<N> {
    /// Describe every retained entry, newest first
    pub fn log<T>(&self, tree: &T) -> Vec<LogLine>
    where
        T: TreeAdapter<Node = N>,
    {
        let last = self.last();
        self.entries()
            .iter()
            .enumerate()
            .rev()
            .map(|(index, entry)| LogLine {
                index,
                description: entry.describe(tree),
                active: last == Some(index),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edit::AttributeValue;
    use docedit_dom::{Document, NodeId};

    fn fixture() -> (Document, NodeId, NodeId) {
        let mut doc = Document::new();
        let root = doc.root();
        let scl = doc.create_element("SCL").unwrap();
        let bay = doc.create_element("Bay").unwrap();
        doc.append_child(root, scl).unwrap();
        (doc, scl, bay)
    }

    #[test]
    fn test_describe_insert_and_move() {
        let (mut doc, scl, bay) = fixture();
        let voltage = doc.create_element("VoltageLevel").unwrap();
        doc.append_child(scl, voltage).unwrap();
        let mut history = History::new();

        history.record(&mut doc, Edit::insert(bay, scl, None));
        history.record(&mut doc, Edit::insert(bay, voltage, None));

        let entries = history.entries();
        assert_eq!(entries[0].describe(&doc).to_string(), "Bay inserted into SCL");
        assert_eq!(entries[1].describe(&doc).to_string(), "Bay moved to VoltageLevel");
    }

    #[test]
    fn test_describe_remove_update_and_batch() {
        let (mut doc, scl, bay) = fixture();
        let mut history = History::new();

        history.record(&mut doc, Edit::update(scl, [("version", AttributeValue::plain("2007"))]));
        history.record(
            &mut doc,
            Edit::complex([Edit::insert(bay, scl, None), Edit::remove(bay)]),
        );
        history.record(&mut doc, Edit::remove(scl));

        let described: Vec<String> = history
            .entries()
            .iter()
            .map(|entry| entry.describe(&doc).to_string())
            .collect();
        assert_eq!(
            described,
            vec!["SCL updated", "≥ 2 nodes changed", "SCL removed"]
        );
    }

    #[test]
    fn test_log_is_newest_first_with_active_marker() {
        let (mut doc, scl, bay) = fixture();
        let mut history = History::new();
        history.record(&mut doc, Edit::insert(bay, scl, None));
        history.record(&mut doc, Edit::remove(bay));
        history.undo(&mut doc, 1);

        let log = history.log(&doc);
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].index, 1);
        assert!(!log[0].active);
        assert_eq!(log[1].index, 0);
        assert!(log[1].active);
        assert_eq!(log[1].description.to_string(), "Bay inserted into SCL");
    }

    #[test]
    fn test_empty_log() {
        let (doc, ..) = fixture();
        let history: History<NodeId> = History::new();
        assert!(history.log(&doc).is_empty());
    }
}
