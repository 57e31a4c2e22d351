//! The key/value entry of a mapping node.

use super::{Node, ScalarValue};
use crate::plain::{Plain, PlainContext};

/// One key/value entry of a [`MapNode`](super::MapNode).
///
/// The entry owns its key and value nodes. Comment, anchor, and style
/// bookkeeping lives on the wrapped nodes themselves — the mapping node
/// overwrites a wrapped scalar's payload in place precisely so that
/// state is not lost with the entry's value.
///
/// `value` is `None` for a key written without a value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Entry {
    pub key: Node,
    pub value: Option<Node>,
}

impl Entry {
    /// Creates an entry from a key and a value.
    pub fn new(key: impl Into<Node>, value: impl Into<Node>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
        }
    }

    /// Creates an entry with a key and no value.
    pub fn key_only(key: impl Into<Node>) -> Self {
        Self {
            key: key.into(),
            value: None,
        }
    }

    /// True when the value is absent, a bare null, or a wrapped null
    /// carrying no comments or anchor.
    pub fn has_null_value(&self) -> bool {
        match &self.value {
            None => true,
            Some(Node::Raw(ScalarValue::Null)) => true,
            Some(Node::Scalar(scalar)) => {
                scalar.value == ScalarValue::Null
                    && scalar.anchor.is_none()
                    && scalar.comment.is_none()
                    && scalar.comment_before.is_none()
            }
            _ => false,
        }
    }

    /// Contributes this entry's key/value pair into a plain container,
    /// recursing through the same conversion context.
    pub fn add_to_plain(&self, ctx: &mut PlainContext<'_>, target: &mut Plain) {
        let key = self.key.to_plain(ctx);
        let value = match &self.value {
            Some(node) => node.to_plain(ctx),
            None => Plain::Null,
        };
        target.insert_pair(key, value);
    }
}

impl<K: Into<Node>, V: Into<Node>> From<(K, V)> for Entry {
    fn from((key, value): (K, V)) -> Self {
        Entry::new(key, value)
    }
}
