//! # Tree Adapter
//!
//! The capability set an editing core needs from a mutable tree:
//! structural insertion/removal, sibling navigation, and namespaced
//! attribute access.
//!
//! Every mutation is fallible. Implementations reject structurally
//! invalid requests with a [`DomError`] and must leave the tree untouched
//! when they do.

use crate::error::DomResult;
use std::fmt::Debug;
use std::hash::Hash;

pub trait TreeAdapter {
    /// Opaque handle identifying a node. The tree owns node lifetime;
    /// callers only hold handles.
    type Node: Copy + Eq + Hash + Debug;

    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    fn next_sibling(&self, node: Self::Node) -> Option<Self::Node>;

    /// Tag name for elements, `#text`/`#comment`/`#document` otherwise.
    fn node_name(&self, node: Self::Node) -> String;

    /// Insert `node` into `parent` before `reference`, appending when
    /// `reference` is `None`. A node that already has a parent is moved.
    fn insert_before(
        &mut self,
        parent: Self::Node,
        node: Self::Node,
        reference: Option<Self::Node>,
    ) -> DomResult<()>;

    fn remove_child(&mut self, parent: Self::Node, node: Self::Node) -> DomResult<()>;

    fn get_attribute(&self, element: Self::Node, name: &str) -> Option<String>;

    /// Namespace of the attribute whose qualified name is `name`, if it
    /// has one.
    fn attribute_namespace(&self, element: Self::Node, name: &str) -> Option<String>;

    fn get_attribute_ns(&self, element: Self::Node, namespace: &str, local_name: &str)
        -> Option<String>;

    fn set_attribute(&mut self, element: Self::Node, name: &str, value: &str) -> DomResult<()>;

    fn set_attribute_ns(
        &mut self,
        element: Self::Node,
        namespace: &str,
        qualified_name: &str,
        value: &str,
    ) -> DomResult<()>;

    fn remove_attribute(&mut self, element: Self::Node, name: &str) -> DomResult<()>;

    fn remove_attribute_ns(
        &mut self,
        element: Self::Node,
        namespace: &str,
        local_name: &str,
    ) -> DomResult<()>;
}
