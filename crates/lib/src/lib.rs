//!
//! Quill: a source-fidelity document model for structured text.
//! This library provides the in-memory node types a parser for a
//! hierarchical text format (YAML-like configuration and data files)
//! builds its documents from.
//!
//! ## Core Concepts
//!
//! * **Nodes (`node::Node`)**: The value kinds of the document tree — bare
//!   primitives, wrapped scalars with source metadata, mappings, sequences,
//!   and key/value pairs.
//! * **Mappings (`node::MapNode`)**: The ordered mapping node. Entries keep
//!   insertion order (or comparator order), keys are unique under a rule that
//!   spans bare and wrapped keys, and overwrites preserve value-node metadata.
//! * **Scalars (`node::Scalar`)**: A payload plus the anchor, comments, and
//!   quoting style worth writing back out.
//! * **Plain projection (`plain::Plain`)**: The metadata-free value graph a
//!   document converts into for ordinary data access.
//! * **Rendering (`render`)**: The flow/block layout engine collection nodes
//!   delegate their text output to.

pub mod node;
pub mod plain;
pub mod render;

// Re-export the document types for easier access.
pub use node::{
    CollectionStyle, Entry, MapNode, Node, NodeError, Resolved, Scalar, ScalarStyle, ScalarValue,
    SeqNode, SortEntries,
};
pub use plain::{ContainerKind, Plain, PlainContext};
pub use render::RenderContext;

/// Result type used throughout the Quill library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Quill library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured errors from the node module
    #[error(transparent)]
    Node(node::NodeError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Node(_) => "node",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error is a duplicate-key rejection from `add`.
    pub fn is_duplicate_key(&self) -> bool {
        match self {
            Error::Node(node_err) => node_err.is_duplicate_key(),
            _ => false,
        }
    }

    /// Check if this error reports a malformed item sequence.
    pub fn is_invalid_structure(&self) -> bool {
        match self {
            Error::Node(node_err) => node_err.is_invalid_structure(),
            _ => false,
        }
    }

    /// Check if this error is serialization-related.
    pub fn is_serialize_error(&self) -> bool {
        matches!(self, Error::Serialize(_))
    }
}
