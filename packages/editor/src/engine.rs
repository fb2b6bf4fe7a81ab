//! # Edit Engine
//!
//! Applies an [`Edit`] to a tree and returns the edit that undoes it.
//!
//! ## Semantics
//!
//! ### Insert
//! - Captures the node's current parent and next sibling first
//! - Inverse of a move is an `Insert` back to the old spot
//! - Inverse of a fresh insertion is a `Remove`
//!
//! ### Update
//! - Snapshots every targeted attribute before writing any of them
//! - Namespaced attributes are read back through their namespace
//! - Attributes the tree refuses to write are left out of the inverse
//!
//! ### Remove
//! - Inverse re-inserts at the captured parent/next sibling
//!
//! ### Complex
//! - Applied front to back, inverses collected back to front
//!
//! Tree rejections never escape: the affected operation becomes a no-op
//! and contributes nothing to the inverse.

use crate::edit::{AttributeValue, Attributes, Edit, Insert, Remove, Update};
use docedit_dom::TreeAdapter;
use tracing::debug;

/// Local part of a possibly prefixed attribute name.
///
/// `"xlink:href"` gives `"href"`; names without a colon come back as is.
/// Only the segment after the first colon is kept.
pub fn local_attribute_name(attribute: &str) -> &str {
    match attribute.split(':').nth(1) {
        Some(local) => local,
        None => attribute,
    }
}

impl<N: Copy + std::fmt::Debug> Edit<N> {
    /// Apply this edit to `tree` and return its inverse
    pub fn apply<T>(&self, tree: &mut T) -> Edit<N>
    where
        T: TreeAdapter<Node = N>,
    {
        match self {
            Edit::Insert(insert) => handle_insert(tree, insert),
            Edit::Update(update) => handle_update(tree, update),
            Edit::Remove(remove) => handle_remove(tree, remove),
            Edit::Complex(edits) => {
                let mut inverses: Vec<Edit<N>> = edits.iter().map(|edit| edit.apply(tree)).collect();
                inverses.reverse();
                Edit::Complex(inverses)
            }
        }
    }
}

fn handle_insert<T: TreeAdapter>(tree: &mut T, insert: &Insert<T::Node>) -> Edit<T::Node> {
    let Insert {
        node,
        parent,
        reference,
    } = *insert;

    let prior_parent = tree.parent(node);
    let prior_next_sibling = tree.next_sibling(node);

    if let Err(e) = tree.insert_before(parent, node, reference) {
        debug!(?node, ?parent, error = %e, "insert rejected - skipping");
        return Edit::noop();
    }

    match prior_parent {
        Some(prior_parent) => Edit::insert(node, prior_parent, prior_next_sibling),
        None => Edit::remove(node),
    }
}

fn handle_update<T: TreeAdapter>(tree: &mut T, update: &Update<T::Node>) -> Edit<T::Node> {
    let element = update.element;
    let mut old_attributes: Attributes = update.attributes.clone();

    // Snapshot everything before the first write
    for (name, value) in update.attributes.iter().rev() {
        let old = match value {
            AttributeValue::Namespaced { namespace_uri, .. } => AttributeValue::Namespaced {
                value: tree.get_attribute_ns(element, namespace_uri, local_attribute_name(name)),
                namespace_uri: namespace_uri.clone(),
            },
            AttributeValue::Removed | AttributeValue::Plain(_) => {
                match tree.attribute_namespace(element, name) {
                    Some(namespace_uri) => AttributeValue::Namespaced {
                        value: tree.get_attribute(element, name),
                        namespace_uri,
                    },
                    None => tree.get_attribute(element, name).into(),
                }
            }
        };
        old_attributes.insert(name.clone(), old);
    }

    for (name, value) in &update.attributes {
        let result = match value {
            AttributeValue::Namespaced {
                value: Some(value),
                namespace_uri,
            } => tree.set_attribute_ns(element, namespace_uri, name, value),
            AttributeValue::Namespaced {
                value: None,
                namespace_uri,
            } => tree.remove_attribute_ns(element, namespace_uri, local_attribute_name(name)),
            AttributeValue::Removed => tree.remove_attribute(element, name),
            AttributeValue::Plain(value) => tree.set_attribute(element, name, value),
        };

        if let Err(e) = result {
            debug!(?element, attribute = %name, error = %e, "attribute update rejected - dropping from inverse");
            old_attributes.shift_remove(name);
        }
    }

    if old_attributes.is_empty() {
        return Edit::noop();
    }

    Edit::Update(Update {
        element,
        attributes: old_attributes,
    })
}

fn handle_remove<T: TreeAdapter>(tree: &mut T, remove: &Remove<T::Node>) -> Edit<T::Node> {
    let node = remove.node;
    let Some(parent) = tree.parent(node) else {
        return Edit::noop();
    };
    let reference = tree.next_sibling(node);

    if let Err(e) = tree.remove_child(parent, node) {
        debug!(?node, ?parent, error = %e, "remove rejected - skipping");
        return Edit::noop();
    }

    Edit::insert(node, parent, reference)
}
