//! The ordered sequence node.

use super::{CollectionStyle, Node, Resolved};
use crate::plain::{Plain, PlainContext};
use crate::render::{self, CollectionLayout, RenderContext, Rendered};

/// An ordered sequence of nodes.
///
/// The sequence sibling of [`MapNode`](super::MapNode): items are
/// addressed by position, read through the same resolve semantics, and
/// rendered by the same engine with `[` `]` brackets and `- ` block
/// items.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SeqNode {
    /// Ordered item sequence
    pub items: Vec<Node>,
    /// Emission style tag, `None` lets the renderer decide
    pub style: Option<CollectionStyle>,
}

impl SeqNode {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of items in the sequence
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the sequence has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends an item.
    pub fn push(&mut self, item: impl Into<Node>) {
        self.items.push(item.into());
    }

    /// Reads the item at `index`, unwrapping scalar payloads.
    pub fn get(&self, index: usize) -> Option<Resolved<'_>> {
        self.items.get(index).map(Node::resolve)
    }

    /// Reads the item node at `index` without unwrapping.
    pub fn get_node(&self, index: usize) -> Option<&Node> {
        self.items.get(index)
    }

    /// Removes the item at `index`.
    ///
    /// Returns false when the index is out of bounds.
    pub fn delete(&mut self, index: usize) -> bool {
        if index < self.items.len() {
            self.items.remove(index);
            true
        } else {
            false
        }
    }

    /// Iterates over the items in order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.items.iter()
    }

    /// Projects the sequence into a plain value list.
    pub fn to_plain(&self, ctx: &mut PlainContext<'_>) -> Plain {
        let mut target = Plain::Seq(Vec::with_capacity(self.items.len()));
        if let Some(on_create) = ctx.on_create.as_mut() {
            on_create(&target);
        }
        let Plain::Seq(values) = &mut target else {
            unreachable!()
        };
        for item in &self.items {
            values.push(item.to_plain(ctx));
        }
        target
    }

    /// Renders the sequence as document text.
    pub fn to_text(&self, ctx: &RenderContext) -> crate::Result<String> {
        self.to_text_with(ctx, None, None)
    }

    /// Renders the sequence, reporting trailing-comment and kept-newline
    /// endings through the callbacks.
    pub fn to_text_with(
        &self,
        ctx: &RenderContext,
        on_comment: Option<&mut dyn FnMut()>,
        on_chomp_keep: Option<&mut dyn FnMut()>,
    ) -> crate::Result<String> {
        let mut ctx = ctx.clone();
        if self.style == Some(CollectionStyle::Flow) {
            ctx.in_flow = true;
        }
        let layout = CollectionLayout {
            flow_open: "[",
            flow_close: "]",
            item_indent: ctx.indent.clone(),
        };
        render::collection(
            &ctx,
            &layout,
            &self.items,
            |item, ctx| {
                let comment = match item {
                    Node::Scalar(scalar) => scalar.comment.clone(),
                    _ => None,
                };
                if ctx.in_flow {
                    return Ok(Rendered {
                        text: item.to_text(ctx)?,
                        comment,
                    });
                }
                // Block items sit behind the `- ` indicator; a nested
                // block collection continues on the indicator's line.
                let item_ctx = ctx.indented();
                Ok(Rendered {
                    text: format!("- {}", item.to_text(&item_ctx)?),
                    comment,
                })
            },
            on_comment,
            on_chomp_keep,
        )
    }
}

impl<T: Into<Node>> FromIterator<T> for SeqNode {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}
