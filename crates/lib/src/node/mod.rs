//! Document nodes: the value kinds a parsed document is built from.
//!
//! A document is a tree of [`Node`]s. Scalar-valued nodes come in two
//! forms — a bare [`ScalarValue`] with no source metadata, and a wrapped
//! [`Scalar`] that remembers anchors, comments, and quoting style.
//! Collections are the ordered mapping ([`MapNode`]) and the sequence
//! ([`SeqNode`]); a mapping's items are key/value [`Entry`] pairs.
//!
//! Node kind is an explicit enum tag: every operation that cares what a
//! node is (key equality, unwrap-on-read, rendering) dispatches on the
//! variant rather than inspecting types at runtime.

use std::fmt;

use crate::plain::{ContainerKind, Plain, PlainContext};
use crate::render::{self, RenderContext};

mod entry;
mod errors;
mod map;
mod scalar;
mod seq;

pub use entry::Entry;
pub use errors::NodeError;
pub use map::{MapNode, SortEntries};
pub use scalar::{Scalar, ScalarStyle, ScalarValue};
pub use seq::SeqNode;

/// Emission style for a collection node.
///
/// `Block` renders one item per line; `Flow` renders inline between
/// bracket tokens. A collection with no style tag lets the renderer
/// decide from context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionStyle {
    /// One item per indented line
    Block,
    /// Inline between brackets, `{..}` or `[..]`
    Flow,
}

/// A node in the document tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Bare primitive with no source metadata
    Raw(ScalarValue),
    /// Wrapped scalar carrying anchor/comment/style metadata
    Scalar(Scalar),
    /// Nested mapping
    Map(MapNode),
    /// Nested sequence
    Seq(SeqNode),
    /// A key/value entry in item position. Well-formed mapping items are
    /// all pairs; the variant is visible so the invariant is checkable.
    Pair(Box<Entry>),
}

/// What a node dissolves to when read.
///
/// Scalar-valued nodes resolve to their payload, so callers reading a
/// mapping get ordinary values by default; collection nodes resolve to
/// themselves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolved<'a> {
    /// Payload of a bare or wrapped scalar
    Value(&'a ScalarValue),
    /// A node with no scalar payload
    Node(&'a Node),
}

impl Node {
    /// Returns the scalar payload of a bare or wrapped scalar node.
    pub fn scalar_value(&self) -> Option<&ScalarValue> {
        match self {
            Node::Raw(value) => Some(value),
            Node::Scalar(scalar) => Some(&scalar.value),
            _ => None,
        }
    }

    /// Resolves this node for reading: scalars dissolve to their
    /// payload, collections and pairs stay nodes.
    pub fn resolve(&self) -> Resolved<'_> {
        match self.scalar_value() {
            Some(value) => Resolved::Value(value),
            None => Resolved::Node(self),
        }
    }

    /// Returns the node kind as a string
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Raw(_) => "raw scalar",
            Node::Scalar(_) => "scalar",
            Node::Map(_) => "map",
            Node::Seq(_) => "seq",
            Node::Pair(_) => "pair",
        }
    }

    /// Returns the entry if this node is a key/value pair
    pub fn as_pair(&self) -> Option<&Entry> {
        match self {
            Node::Pair(entry) => Some(entry),
            _ => None,
        }
    }

    /// Mutable counterpart of [`as_pair`](Self::as_pair)
    pub fn as_pair_mut(&mut self) -> Option<&mut Entry> {
        match self {
            Node::Pair(entry) => Some(entry),
            _ => None,
        }
    }

    /// Projects this node into a plain value graph.
    ///
    /// Scalars project as their payload; collections recurse through the
    /// same context. A pair in node position projects as a single-entry
    /// container.
    pub fn to_plain(&self, ctx: &mut PlainContext<'_>) -> Plain {
        match self {
            Node::Raw(value) => Plain::from(value),
            Node::Scalar(scalar) => Plain::from(&scalar.value),
            Node::Map(map) => map.to_plain(ctx),
            Node::Seq(seq) => seq.to_plain(ctx),
            Node::Pair(entry) => {
                let kind = if ctx.map_as_map {
                    ContainerKind::Map
                } else {
                    ContainerKind::Object
                };
                let mut target = kind.empty();
                entry.add_to_plain(ctx, &mut target);
                target
            }
        }
    }

    /// Serializes the plain projection of this node as JSON.
    pub fn to_json(&self) -> crate::Result<String> {
        let plain = self.to_plain(&mut PlainContext::default());
        Ok(serde_json::to_string(&plain)?)
    }

    /// Renders this node as document text.
    pub fn to_text(&self, ctx: &RenderContext) -> crate::Result<String> {
        match self {
            Node::Raw(value) => Ok(render::scalar(value, None, ctx)),
            Node::Scalar(scalar) => Ok(render::scalar(&scalar.value, scalar.style, ctx)),
            Node::Map(map) => map.to_text(ctx),
            Node::Seq(seq) => seq.to_text(ctx),
            Node::Pair(entry) => Ok(render::pair(entry, ctx)?.text),
        }
    }
}

impl Default for Node {
    fn default() -> Self {
        Node::Raw(ScalarValue::Null)
    }
}

impl fmt::Display for Node {
    /// Diagnostic fallback rendering: the JSON-like encoding of the
    /// plain projection. Not guaranteed to round-trip.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_plain(&mut PlainContext::default()))
    }
}

impl<'a> Resolved<'a> {
    /// Returns the scalar payload, if this resolved to one
    pub fn as_value(&self) -> Option<&'a ScalarValue> {
        match self {
            Resolved::Value(value) => Some(value),
            Resolved::Node(_) => None,
        }
    }

    /// Returns true if this resolved to a null payload
    pub fn is_null(&self) -> bool {
        matches!(self, Resolved::Value(ScalarValue::Null))
    }

    /// Attempts to read a boolean payload
    pub fn as_bool(&self) -> Option<bool> {
        match self.as_value() {
            Some(ScalarValue::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to read an integer payload
    pub fn as_int(&self) -> Option<i64> {
        match self.as_value() {
            Some(ScalarValue::Int(n)) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to read a float payload
    pub fn as_f64(&self) -> Option<f64> {
        match self.as_value() {
            Some(ScalarValue::Float(x)) => Some(*x),
            _ => None,
        }
    }

    /// Attempts to read a string payload
    pub fn as_str(&self) -> Option<&'a str> {
        match self.as_value() {
            Some(ScalarValue::Str(s)) => Some(s),
            _ => None,
        }
    }

    /// Attempts to read a nested mapping
    pub fn as_map(&self) -> Option<&'a MapNode> {
        match self {
            Resolved::Node(Node::Map(map)) => Some(map),
            _ => None,
        }
    }

    /// Attempts to read a nested sequence
    pub fn as_seq(&self) -> Option<&'a SeqNode> {
        match self {
            Resolved::Node(Node::Seq(seq)) => Some(seq),
            _ => None,
        }
    }
}

// Convenient From implementations for common types
impl From<ScalarValue> for Node {
    fn from(value: ScalarValue) -> Self {
        Node::Raw(value)
    }
}

impl From<Scalar> for Node {
    fn from(value: Scalar) -> Self {
        Node::Scalar(value)
    }
}

impl From<MapNode> for Node {
    fn from(value: MapNode) -> Self {
        Node::Map(value)
    }
}

impl From<SeqNode> for Node {
    fn from(value: SeqNode) -> Self {
        Node::Seq(value)
    }
}

impl From<Entry> for Node {
    fn from(value: Entry) -> Self {
        Node::Pair(Box::new(value))
    }
}

impl From<bool> for Node {
    fn from(value: bool) -> Self {
        Node::Raw(value.into())
    }
}

impl From<i64> for Node {
    fn from(value: i64) -> Self {
        Node::Raw(value.into())
    }
}

impl From<i32> for Node {
    fn from(value: i32) -> Self {
        Node::Raw(value.into())
    }
}

impl From<u32> for Node {
    fn from(value: u32) -> Self {
        Node::Raw(value.into())
    }
}

impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Node::Raw(value.into())
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::Raw(value.into())
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::Raw(value.into())
    }
}
