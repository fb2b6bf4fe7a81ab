//! Node handles and node payloads stored in the arena.

/// Opaque handle to a node owned by a [`crate::Document`].
///
/// Handles stay valid for the lifetime of the document, including while
/// the node is detached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub namespace_uri: Option<String>,
    pub prefix: Option<String>,
    pub local_name: String,
    pub value: String,
}

impl Attribute {
    pub fn qualified_name(&self) -> String {
        match &self.prefix {
            Some(prefix) => format!("{}:{}", prefix, self.local_name),
            None => self.local_name.clone(),
        }
    }

    /// Compare against a raw (possibly prefixed) attribute name.
    pub fn has_qualified_name(&self, name: &str) -> bool {
        match &self.prefix {
            Some(prefix) => name
                .strip_prefix(prefix.as_str())
                .and_then(|rest| rest.strip_prefix(':'))
                .is_some_and(|local| local == self.local_name),
            None => name == self.local_name,
        }
    }

    /// Compare against a `(namespace, local name)` pair; empty namespace
    /// matches attributes without one.
    pub fn has_namespaced_name(&self, namespace: &str, local_name: &str) -> bool {
        self.namespace_uri.as_deref().unwrap_or("") == namespace && self.local_name == local_name
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub namespace_uri: Option<String>,
    pub tag_name: String,
    pub(crate) attributes: Vec<Attribute>,
}

impl Element {
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// First attribute whose qualified name is `name`.
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|attr| attr.has_qualified_name(name))
    }

    pub fn attribute_ns(&self, namespace: &str, local_name: &str) -> Option<&Attribute> {
        self.attributes
            .iter()
            .find(|attr| attr.has_namespaced_name(namespace, local_name))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    Element(Element),
    Text(String),
    Comment(String),
}

impl NodeKind {
    pub fn is_element(&self) -> bool {
        matches!(self, NodeKind::Element(_))
    }

    /// Only the document and elements can hold children.
    pub fn is_container(&self) -> bool {
        matches!(self, NodeKind::Document | NodeKind::Element(_))
    }

    pub fn node_name(&self) -> String {
        match self {
            NodeKind::Document => "#document".to_string(),
            NodeKind::Element(element) => element.tag_name.clone(),
            NodeKind::Text(_) => "#text".to_string(),
            NodeKind::Comment(_) => "#comment".to_string(),
        }
    }
}
