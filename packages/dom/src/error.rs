//! Error types for tree mutations

use crate::NodeId;
use thiserror::Error;

pub type DomResult<T> = Result<T, DomError>;

/// Structural rejections raised by the in-memory document.
///
/// These mirror the DOM exception names so adapters over a real DOM can
/// map onto the same variants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomError {
    #[error("Unknown node: {0:?}")]
    UnknownNode(NodeId),

    #[error("Hierarchy request error: {0}")]
    HierarchyRequest(String),

    #[error("Node not found: {0}")]
    NotFound(String),

    #[error("Node is not an element: {0:?}")]
    NotAnElement(NodeId),

    #[error("Invalid character in name: {0:?}")]
    InvalidCharacter(String),

    #[error("Namespace error: {0}")]
    Namespace(String),
}

impl DomError {
    pub fn hierarchy(message: impl Into<String>) -> Self {
        Self::HierarchyRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn namespace(message: impl Into<String>) -> Self {
        Self::Namespace(message.into())
    }
}
