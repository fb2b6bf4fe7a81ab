//! # Edits
//!
//! Descriptions of tree mutations. An [`Edit`] carries intent only; it is
//! turned into an actual mutation (and its inverse) by [`Edit::apply`].
//!
//! ## Variants
//!
//! - `Insert`: put a node into a parent before a reference sibling
//!   (append when there is none). Moves the node if it is attached.
//! - `Update`: set or remove a batch of attributes on one element.
//! - `Remove`: detach a node from its parent.
//! - `Complex`: an ordered batch applied and undone as one unit. The
//!   empty batch is the no-op edit.

use indexmap::IndexMap;

/// New value for one attribute of an [`Update`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    /// Remove the attribute
    Removed,

    /// Set a plain (namespace-less) value
    Plain(String),

    /// Set (`Some`) or remove (`None`) the attribute identified by
    /// `(namespace_uri, local name)`
    Namespaced {
        value: Option<String>,
        namespace_uri: String,
    },
}

impl AttributeValue {
    pub fn plain(value: impl Into<String>) -> Self {
        Self::Plain(value.into())
    }

    pub fn namespaced(value: impl Into<String>, namespace_uri: impl Into<String>) -> Self {
        Self::Namespaced {
            value: Some(value.into()),
            namespace_uri: namespace_uri.into(),
        }
    }

    pub fn namespaced_removed(namespace_uri: impl Into<String>) -> Self {
        Self::Namespaced {
            value: None,
            namespace_uri: namespace_uri.into(),
        }
    }

    /// The string value, if this sets one
    pub fn value(&self) -> Option<&str> {
        match self {
            AttributeValue::Removed => None,
            AttributeValue::Plain(value) => Some(value),
            AttributeValue::Namespaced { value, .. } => value.as_deref(),
        }
    }

    pub fn namespace_uri(&self) -> Option<&str> {
        match self {
            AttributeValue::Namespaced { namespace_uri, .. } => Some(namespace_uri),
            _ => None,
        }
    }
}

impl From<Option<String>> for AttributeValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(AttributeValue::Removed, AttributeValue::Plain)
    }
}

/// Attribute batch keyed by raw attribute name, in insertion order
pub type Attributes = IndexMap<String, AttributeValue>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insert<N> {
    pub node: N,
    pub parent: N,
    pub reference: Option<N>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update<N> {
    pub element: N,
    pub attributes: Attributes,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Remove<N> {
    pub node: N,
}

/// One atomic or compound tree mutation over node handles `N`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit<N> {
    Insert(Insert<N>),
    Update(Update<N>),
    Remove(Remove<N>),
    Complex(Vec<Edit<N>>),
}

impl<N> Edit<N> {
    /// The empty batch; applying it does nothing
    pub fn noop() -> Self {
        Edit::Complex(Vec::new())
    }

    pub fn is_noop(&self) -> bool {
        matches!(self, Edit::Complex(edits) if edits.is_empty())
    }

    pub fn insert(node: N, parent: N, reference: Option<N>) -> Self {
        Edit::Insert(Insert {
            node,
            parent,
            reference,
        })
    }

    pub fn update<K, I>(element: N, attributes: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, AttributeValue)>,
    {
        Edit::Update(Update {
            element,
            attributes: attributes
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        })
    }

    pub fn remove(node: N) -> Self {
        Edit::Remove(Remove { node })
    }

    pub fn complex(edits: impl IntoIterator<Item = Edit<N>>) -> Self {
        Edit::Complex(edits.into_iter().collect())
    }
}

impl<N> From<Insert<N>> for Edit<N> {
    fn from(insert: Insert<N>) -> Self {
        Edit::Insert(insert)
    }
}

impl<N> From<Update<N>> for Edit<N> {
    fn from(update: Update<N>) -> Self {
        Edit::Update(update)
    }
}

impl<N> From<Remove<N>> for Edit<N> {
    fn from(remove: Remove<N>) -> Self {
        Edit::Remove(remove)
    }
}

impl<N> From<Vec<Edit<N>>> for Edit<N> {
    fn from(edits: Vec<Edit<N>>) -> Self {
        Edit::Complex(edits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_is_empty_complex() {
        let edit: Edit<u32> = Edit::noop();
        assert!(edit.is_noop());
        assert_eq!(edit, Edit::Complex(vec![]));
        assert!(!Edit::complex([Edit::remove(1u32)]).is_noop());
    }

    #[test]
    fn test_update_keeps_insertion_order() {
        let edit = Edit::update(
            7u32,
            [
                ("z", AttributeValue::plain("1")),
                ("a", AttributeValue::Removed),
                ("m", AttributeValue::namespaced("x", "urn:m")),
            ],
        );

        let Edit::Update(update) = edit else {
            panic!("expected update");
        };
        let keys: Vec<_> = update.attributes.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_attribute_value_accessors() {
        assert_eq!(AttributeValue::plain("1").value(), Some("1"));
        assert_eq!(AttributeValue::Removed.value(), None);
        let ns = AttributeValue::namespaced_removed("urn:x");
        assert_eq!(ns.value(), None);
        assert_eq!(ns.namespace_uri(), Some("urn:x"));
        assert_eq!(AttributeValue::from(None), AttributeValue::Removed);
        assert_eq!(
            AttributeValue::from(Some("v".to_string())),
            AttributeValue::plain("v")
        );
    }
}
