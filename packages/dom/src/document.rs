//! # In-memory XML Document
//!
//! Arena-backed tree implementing [`TreeAdapter`] with DOM-compatible
//! rejection rules.
//!
//! ## Layout
//!
//! ```text
//! Document
//! └── nodes: Vec<NodeData>      # index == NodeId
//!     ├── kind                  # document / element / text / comment
//!     ├── parent: Option<NodeId>
//!     └── children: Vec<NodeId> # document order
//! ```
//!
//! Nodes are never freed. Removing a node only detaches it, so handles
//! held by an edit history stay meaningful.

use crate::adapter::TreeAdapter;
use crate::error::{DomError, DomResult};
use crate::names::{validate_and_extract, validate_name};
use crate::node::{Attribute, Element, NodeId, NodeKind};
use tracing::trace;

#[derive(Debug, Clone)]
struct NodeData {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl NodeData {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            parent: None,
            children: Vec::new(),
        }
    }
}

/// Editable XML document
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<NodeData>,
}

impl Document {
    /// Create an empty document holding only its root node
    pub fn new() -> Self {
        Self {
            nodes: vec![NodeData::new(NodeKind::Document)],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    fn alloc(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData::new(kind));
        id
    }

    /// Create a detached element without a namespace
    pub fn create_element(&mut self, name: &str) -> DomResult<NodeId> {
        validate_name(name)?;
        Ok(self.alloc(NodeKind::Element(Element {
            namespace_uri: None,
            tag_name: name.to_string(),
            attributes: Vec::new(),
        })))
    }

    /// Create a detached element in `namespace`
    pub fn create_element_ns(&mut self, namespace: &str, qualified_name: &str) -> DomResult<NodeId> {
        let name = validate_and_extract(namespace, qualified_name)?;
        Ok(self.alloc(NodeKind::Element(Element {
            namespace_uri: name.namespace_uri.clone(),
            tag_name: name.qualified(),
            attributes: Vec::new(),
        })))
    }

    pub fn create_text(&mut self, data: impl Into<String>) -> NodeId {
        self.alloc(NodeKind::Text(data.into()))
    }

    pub fn create_comment(&mut self, data: impl Into<String>) -> NodeId {
        self.alloc(NodeKind::Comment(data.into()))
    }

    pub fn contains(&self, node: NodeId) -> bool {
        node.0 < self.nodes.len()
    }

    pub fn kind(&self, node: NodeId) -> Option<&NodeKind> {
        self.nodes.get(node.0).map(|data| &data.kind)
    }

    pub fn element(&self, node: NodeId) -> Option<&Element> {
        match self.kind(node) {
            Some(NodeKind::Element(element)) => Some(element),
            _ => None,
        }
    }

    fn element_mut(&mut self, node: NodeId) -> DomResult<&mut Element> {
        match self.nodes.get_mut(node.0) {
            Some(NodeData {
                kind: NodeKind::Element(element),
                ..
            }) => Ok(element),
            Some(_) => Err(DomError::NotAnElement(node)),
            None => Err(DomError::UnknownNode(node)),
        }
    }

    fn check(&self, node: NodeId) -> DomResult<()> {
        if self.contains(node) {
            Ok(())
        } else {
            Err(DomError::UnknownNode(node))
        }
    }

    /// Children of `node` in document order (empty for unknown handles)
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.nodes
            .get(node.0)
            .map(|data| data.children.as_slice())
            .unwrap_or(&[])
    }

    /// The single element child of the document root, if any
    pub fn document_element(&self) -> Option<NodeId> {
        self.children(self.root())
            .iter()
            .copied()
            .find(|&child| self.nodes[child.0].kind.is_element())
    }

    /// Whether `ancestor` is `node` or one of its ancestors
    pub fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.nodes.get(id.0).and_then(|data| data.parent);
        }
        false
    }

    pub fn append_child(&mut self, parent: NodeId, node: NodeId) -> DomResult<()> {
        self.insert_before(parent, node, None)
    }

    fn detach(&mut self, node: NodeId) {
        if let Some(parent) = self.nodes[node.0].parent.take() {
            self.nodes[parent.0].children.retain(|&child| child != node);
        }
    }

    fn validate_insertion(
        &self,
        parent: NodeId,
        node: NodeId,
        reference: Option<NodeId>,
    ) -> DomResult<()> {
        self.check(parent)?;
        self.check(node)?;
        if let Some(reference) = reference {
            self.check(reference)?;
        }

        let parent_kind = &self.nodes[parent.0].kind;
        if !parent_kind.is_container() {
            return Err(DomError::hierarchy(format!(
                "{} cannot have children",
                parent_kind.node_name()
            )));
        }

        let node_kind = &self.nodes[node.0].kind;
        if matches!(node_kind, NodeKind::Document) {
            return Err(DomError::hierarchy("the document node cannot be inserted"));
        }

        if self.is_inclusive_ancestor(node, parent) {
            return Err(DomError::hierarchy("the new child is an ancestor of the parent"));
        }

        if let Some(reference) = reference {
            if self.nodes[reference.0].parent != Some(parent) {
                return Err(DomError::not_found("reference node is not a child of parent"));
            }
        }

        if matches!(parent_kind, NodeKind::Document) {
            match node_kind {
                NodeKind::Text(_) => {
                    return Err(DomError::hierarchy("text cannot be a child of the document"));
                }
                NodeKind::Element(_) => {
                    let occupied = self.nodes[parent.0]
                        .children
                        .iter()
                        .any(|&child| child != node && self.nodes[child.0].kind.is_element());
                    if occupied {
                        return Err(DomError::hierarchy("the document already has an element"));
                    }
                }
                _ => {}
            }
        }

        Ok(())
    }

    /// Serialize `node` and its subtree as XML.
    ///
    /// Attributes are written under their qualified names in stored
    /// order; no namespace declarations are synthesized.
    pub fn outer_xml(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.write_xml(node, &mut out);
        out
    }

    fn write_xml(&self, node: NodeId, out: &mut String) {
        let Some(data) = self.nodes.get(node.0) else {
            return;
        };

        match &data.kind {
            NodeKind::Document => {
                for &child in &data.children {
                    self.write_xml(child, out);
                }
            }
            NodeKind::Element(element) => {
                out.push('<');
                out.push_str(&element.tag_name);
                for attr in &element.attributes {
                    out.push(' ');
                    out.push_str(&attr.qualified_name());
                    out.push_str("=\"");
                    push_escaped(out, &attr.value, true);
                    out.push('"');
                }
                if data.children.is_empty() {
                    out.push_str("/>");
                } else {
                    out.push('>');
                    for &child in &data.children {
                        self.write_xml(child, out);
                    }
                    out.push_str("</");
                    out.push_str(&element.tag_name);
                    out.push('>');
                }
            }
            NodeKind::Text(text) => push_escaped(out, text, false),
            NodeKind::Comment(comment) => {
                out.push_str("<!--");
                out.push_str(comment);
                out.push_str("-->");
            }
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

fn push_escaped(out: &mut String, text: &str, in_attribute: bool) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if in_attribute => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

impl TreeAdapter for Document {
    type Node = NodeId;

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node.0).and_then(|data| data.parent)
    }

    fn next_sibling(&self, node: NodeId) -> Option<NodeId> {
        let parent = self.parent(node)?;
        let siblings = &self.nodes[parent.0].children;
        let pos = siblings.iter().position(|&child| child == node)?;
        siblings.get(pos + 1).copied()
    }

    fn node_name(&self, node: NodeId) -> String {
        self.kind(node).map(NodeKind::node_name).unwrap_or_default()
    }

    fn insert_before(
        &mut self,
        parent: NodeId,
        node: NodeId,
        reference: Option<NodeId>,
    ) -> DomResult<()> {
        self.validate_insertion(parent, node, reference)?;

        let reference = if reference == Some(node) {
            self.next_sibling(node)
        } else {
            reference
        };

        self.detach(node);

        let children = &mut self.nodes[parent.0].children;
        let index = reference
            .and_then(|reference| children.iter().position(|&child| child == reference))
            .unwrap_or(children.len());
        children.insert(index, node);
        self.nodes[node.0].parent = Some(parent);

        trace!(?node, ?parent, index, "inserted node");
        Ok(())
    }

    fn remove_child(&mut self, parent: NodeId, node: NodeId) -> DomResult<()> {
        self.check(parent)?;
        self.check(node)?;

        if self.nodes[node.0].parent != Some(parent) {
            return Err(DomError::not_found("node is not a child of parent"));
        }

        self.detach(node);
        trace!(?node, ?parent, "removed node");
        Ok(())
    }

    fn get_attribute(&self, element: NodeId, name: &str) -> Option<String> {
        self.element(element)?
            .attribute(name)
            .map(|attr| attr.value.clone())
    }

    fn attribute_namespace(&self, element: NodeId, name: &str) -> Option<String> {
        self.element(element)?.attribute(name)?.namespace_uri.clone()
    }

    fn get_attribute_ns(&self, element: NodeId, namespace: &str, local_name: &str) -> Option<String> {
        self.element(element)?
            .attribute_ns(namespace, local_name)
            .map(|attr| attr.value.clone())
    }

    fn set_attribute(&mut self, element: NodeId, name: &str, value: &str) -> DomResult<()> {
        validate_name(name)?;
        let element = self.element_mut(element)?;

        match element
            .attributes
            .iter_mut()
            .find(|attr| attr.has_qualified_name(name))
        {
            Some(attr) => attr.value = value.to_string(),
            None => element.attributes.push(Attribute {
                namespace_uri: None,
                prefix: None,
                local_name: name.to_string(),
                value: value.to_string(),
            }),
        }
        Ok(())
    }

    fn set_attribute_ns(
        &mut self,
        element: NodeId,
        namespace: &str,
        qualified_name: &str,
        value: &str,
    ) -> DomResult<()> {
        let name = validate_and_extract(namespace, qualified_name)?;
        let element = self.element_mut(element)?;

        match element
            .attributes
            .iter_mut()
            .find(|attr| attr.has_namespaced_name(namespace, &name.local_name))
        {
            Some(attr) => attr.value = value.to_string(),
            None => element.attributes.push(Attribute {
                namespace_uri: name.namespace_uri,
                prefix: name.prefix,
                local_name: name.local_name,
                value: value.to_string(),
            }),
        }
        Ok(())
    }

    fn remove_attribute(&mut self, element: NodeId, name: &str) -> DomResult<()> {
        let element = self.element_mut(element)?;
        if let Some(pos) = element
            .attributes
            .iter()
            .position(|attr| attr.has_qualified_name(name))
        {
            element.attributes.remove(pos);
        }
        Ok(())
    }

    fn remove_attribute_ns(&mut self, element: NodeId, namespace: &str, local_name: &str) -> DomResult<()> {
        let element = self.element_mut(element)?;
        if let Some(pos) = element
            .attributes
            .iter()
            .position(|attr| attr.has_namespaced_name(namespace, local_name))
        {
            element.attributes.remove(pos);
        }
        Ok(())
    }
}
