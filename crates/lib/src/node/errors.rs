//! Error types for document-node operations.

use thiserror::Error;

/// Structured errors raised by collection nodes.
///
/// Lookup misses are not errors anywhere in this module — `get`, `has`,
/// and `delete` report absence as an ordinary value. The variants here
/// cover the two genuine failure kinds: a caller inserting over an
/// existing key without overwrite permission, and a map whose item
/// sequence was left malformed by external mutation.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum NodeError {
    /// A key was inserted over an existing entry without overwrite permission
    #[error("key {key} already set in this map")]
    DuplicateKey { key: String },

    /// A map's item sequence contained something other than a key/value pair
    #[error("map items must all be pairs; found {found} instead")]
    InvalidStructure { found: String },
}

impl NodeError {
    /// Check if this error is a duplicate-key rejection
    pub fn is_duplicate_key(&self) -> bool {
        matches!(self, NodeError::DuplicateKey { .. })
    }

    /// Check if this error reports a malformed item sequence
    pub fn is_invalid_structure(&self) -> bool {
        matches!(self, NodeError::InvalidStructure { .. })
    }

    /// Get the rejected key if this is a duplicate-key error
    pub fn key(&self) -> Option<&str> {
        match self {
            NodeError::DuplicateKey { key } => Some(key),
            _ => None,
        }
    }
}

// Conversion from NodeError to the main Error type
impl From<NodeError> for crate::Error {
    fn from(err: NodeError) -> Self {
        crate::Error::Node(err)
    }
}
