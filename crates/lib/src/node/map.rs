//! The ordered mapping node.

use std::cmp::Ordering;

use tracing::trace;

use super::{CollectionStyle, Entry, Node, NodeError, Resolved, ScalarValue};
use crate::plain::{ContainerKind, Plain, PlainContext};
use crate::render::{self, CollectionLayout, RenderContext};

/// Comparator maintaining sorted entry order on insertion.
pub type SortEntries = fn(&Entry, &Entry) -> Ordering;

static NULL: ScalarValue = ScalarValue::Null;

/// An ordered mapping of key/value entries.
///
/// Entries keep insertion order unless the node was built with a sort
/// comparator, in which case each insertion lands at its sorted
/// position. Keys are unique under the node's key-equality rule: two
/// keys match when they are structurally equal, or when both carry
/// scalar payloads (bare or wrapped, in any combination) that compare
/// equal. Lookup by the raw value `"a"`, by `Scalar::new("a")`, or by a
/// wrapped key taken from another entry all find the same entry.
///
/// `items` is public so callers can walk or rearrange entries directly;
/// well-formed items are all [`Node::Pair`]. The mutating operations
/// preserve that shape, and [`to_text`](Self::to_text) rejects a
/// sequence where external mutation broke it.
#[derive(Debug, Clone, Default)]
pub struct MapNode {
    /// Ordered entry sequence; well-formed items are all pairs
    pub items: Vec<Node>,
    /// Emission style tag, `None` lets the renderer decide
    pub style: Option<CollectionStyle>,
    sort_entries: Option<SortEntries>,
}

impl MapNode {
    /// Creates an empty mapping with insertion-order semantics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty mapping that keeps entries sorted under `cmp`.
    ///
    /// The comparator belongs to this node alone; every insertion finds
    /// its position incrementally, so the sequence stays non-decreasing
    /// under `cmp` without ever re-sorting.
    pub fn with_sort(cmp: SortEntries) -> Self {
        Self {
            sort_entries: Some(cmp),
            ..Self::default()
        }
    }

    /// Number of entries in the mapping
    pub fn len(&self) -> usize {
        self.items.iter().filter_map(Node::as_pair).count()
    }

    /// Returns true if the mapping has no entries
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Iterates over the key/value entries in sequence order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.items.iter().filter_map(Node::as_pair)
    }

    /// Finds the entry matching `key` under the key-equality rule.
    ///
    /// Non-pair items are skipped; the first match in sequence order
    /// wins.
    pub fn find_pair(&self, key: &Node) -> Option<&Entry> {
        self.iter().find(|entry| keys_match(&entry.key, key))
    }

    /// Mutable counterpart of [`find_pair`](Self::find_pair)
    pub fn find_pair_mut(&mut self, key: &Node) -> Option<&mut Entry> {
        self.items
            .iter_mut()
            .filter_map(Node::as_pair_mut)
            .find(|entry| keys_match(&entry.key, key))
    }

    /// Adds an entry to the mapping.
    ///
    /// Accepts a full [`Entry`] or anything that converts into one, such
    /// as a `(key, value)` pair. If the key already exists and
    /// `overwrite` is false, fails with [`NodeError::DuplicateKey`].
    /// With `overwrite` set, an existing wrapped-scalar value takes the
    /// new payload in place when the incoming value is a bare scalar, so
    /// comments and anchors attached to the value node survive; any
    /// other combination replaces the value wholesale.
    pub fn add(&mut self, entry: impl Into<Entry>, overwrite: bool) -> crate::Result<()> {
        let entry = entry.into();
        if let Some(prev) = self.find_pair_mut(&entry.key) {
            if !overwrite {
                return Err(NodeError::DuplicateKey {
                    key: key_text(&entry.key),
                }
                .into());
            }
            match (&mut prev.value, entry.value) {
                // Keep the old node and its comments and anchors
                (Some(Node::Scalar(existing)), Some(Node::Raw(payload))) => {
                    existing.value = payload;
                }
                (slot, value) => *slot = value,
            }
        } else if let Some(cmp) = self.sort_entries {
            let pos = self.items.iter().position(|item| match item.as_pair() {
                Some(existing) => cmp(&entry, existing) == Ordering::Less,
                None => false,
            });
            match pos {
                Some(i) => self.items.insert(i, entry.into()),
                None => self.items.push(entry.into()),
            }
        } else {
            self.items.push(entry.into());
        }
        Ok(())
    }

    /// Sets `key` to `value`, inserting or overwriting as needed.
    pub fn set(&mut self, key: impl Into<Node>, value: impl Into<Node>) {
        self.add(Entry::new(key, value), true)
            .expect("add with overwrite never reports a duplicate");
    }

    /// Reads the value for `key`, unwrapping scalar payloads.
    ///
    /// Returns `None` when the key is absent; an entry with no value
    /// reads as a null payload. Use [`get_node`](Self::get_node) to
    /// reach the value node itself with its metadata intact.
    pub fn get(&self, key: impl Into<Node>) -> Option<Resolved<'_>> {
        let entry = self.find_pair(&key.into())?;
        match &entry.value {
            Some(node) => Some(node.resolve()),
            None => Some(Resolved::Value(&NULL)),
        }
    }

    /// Reads the value node for `key` without unwrapping.
    pub fn get_node(&self, key: impl Into<Node>) -> Option<&Node> {
        self.find_pair(&key.into())?.value.as_ref()
    }

    /// Returns true if an entry matches `key`
    pub fn has(&self, key: impl Into<Node>) -> bool {
        self.find_pair(&key.into()).is_some()
    }

    /// Removes the first entry matching `key`.
    ///
    /// Returns false when no entry matches; absence is not an error.
    pub fn delete(&mut self, key: impl Into<Node>) -> bool {
        let key = key.into();
        let pos = self.items.iter().position(|item| match item.as_pair() {
            Some(entry) => keys_match(&entry.key, &key),
            None => false,
        });
        match pos {
            Some(i) => {
                self.items.remove(i);
                true
            }
            None => false,
        }
    }

    /// Projects the mapping into a plain associative value.
    ///
    /// The container kind follows `ctx.map_as_map`: object-like with
    /// stringified keys by default, map-like with arbitrary plain keys
    /// on request.
    pub fn to_plain(&self, ctx: &mut PlainContext<'_>) -> Plain {
        let kind = if ctx.map_as_map {
            ContainerKind::Map
        } else {
            ContainerKind::Object
        };
        self.to_plain_as(ctx, kind)
    }

    /// Projects the mapping into a container of the given kind.
    ///
    /// The context's `on_create` hook receives the fresh empty container
    /// before any entry populates it, so a caller tracking in-progress
    /// conversions can register it ahead of recursion. Entries
    /// contribute in sequence order; the container replaces on plain-key
    /// collision, so the last contribution wins.
    pub fn to_plain_as(&self, ctx: &mut PlainContext<'_>, kind: ContainerKind) -> Plain {
        let mut target = kind.empty();
        if let Some(on_create) = ctx.on_create.as_mut() {
            on_create(&target);
        }
        for entry in self.items.iter().filter_map(Node::as_pair) {
            entry.add_to_plain(ctx, &mut target);
        }
        target
    }

    /// Renders the mapping as document text.
    ///
    /// Fails with [`NodeError::InvalidStructure`] if any item in the
    /// sequence is not a pair.
    pub fn to_text(&self, ctx: &RenderContext) -> crate::Result<String> {
        self.to_text_with(ctx, None, None)
    }

    /// Renders the mapping, reporting trailing-comment and kept-newline
    /// endings through the callbacks.
    pub fn to_text_with(
        &self,
        ctx: &RenderContext,
        on_comment: Option<&mut dyn FnMut()>,
        on_chomp_keep: Option<&mut dyn FnMut()>,
    ) -> crate::Result<String> {
        for item in &self.items {
            if item.as_pair().is_none() {
                return Err(NodeError::InvalidStructure {
                    found: item.kind_name().to_string(),
                }
                .into());
            }
        }
        // The hint lives in a call-local context copy; the node itself
        // never remembers that its values were all null.
        let mut ctx = ctx.clone();
        if !ctx.all_null_values && self.iter().all(Entry::has_null_value) {
            trace!(entries = self.len(), "rendering map with all-null values");
            ctx.all_null_values = true;
        }
        if self.style == Some(CollectionStyle::Flow) {
            ctx.in_flow = true;
        }
        let layout = CollectionLayout {
            flow_open: "{",
            flow_close: "}",
            item_indent: ctx.indent.clone(),
        };
        let entries: Vec<&Entry> = self.iter().collect();
        render::collection(
            &ctx,
            &layout,
            &entries,
            |entry, ctx| render::pair(entry, ctx),
            on_comment,
            on_chomp_keep,
        )
    }
}

// The comparator is deliberately left out of equality: two mappings are
// equal when they hold the same entries in the same order with the same
// style tag.
impl PartialEq for MapNode {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items && self.style == other.style
    }
}

/// The key-equality rule: structural equality, or equal scalar payloads
/// across any combination of bare and wrapped keys.
fn keys_match(entry_key: &Node, key: &Node) -> bool {
    if entry_key == key {
        return true;
    }
    match (entry_key.scalar_value(), key.scalar_value()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Key description used in error messages: scalar payloads print bare,
/// collections fall back to the diagnostic encoding.
fn key_text(key: &Node) -> String {
    match key.scalar_value() {
        Some(value) => value.to_string(),
        None => key.to_string(),
    }
}
