//! Collection-to-text rendering engine.
//!
//! Collection nodes do not lay out their own text. They hand the engine
//! their items, a per-item formatting function, and bracket tokens, and
//! the engine decides between flow and block layout, folds long flow
//! lines, and places trailing comments. The [`RenderContext`] carries
//! the layout state threaded through nested collections.

use tracing::trace;

use crate::node::{CollectionStyle, Entry, Node, ScalarStyle, ScalarValue};

/// Layout state for one rendering pass.
///
/// Contexts are cheap to clone; nested collections derive a child
/// context with [`indented`](Self::indented) instead of mutating the
/// parent's.
#[derive(Debug, Clone)]
pub struct RenderContext {
    /// Current indentation prefix
    pub indent: String,
    /// Spaces added per nesting level
    pub indent_step: usize,
    /// Column width past which flow collections fold onto lines
    pub width: usize,
    /// True inside a flow collection; block layout is unavailable there
    pub in_flow: bool,
    /// Hint that every value in the collection being rendered is null,
    /// letting mappings render as bare key enumerations
    pub all_null_values: bool,
}

impl RenderContext {
    /// Creates a root context with default layout settings.
    pub fn new() -> Self {
        Self {
            indent: String::new(),
            indent_step: 2,
            width: 80,
            in_flow: false,
            all_null_values: false,
        }
    }

    /// Derives the context for one nesting level deeper.
    ///
    /// The all-null hint applies to a single collection and does not
    /// travel into its children.
    pub fn indented(&self) -> Self {
        Self {
            indent: format!("{}{}", self.indent, " ".repeat(self.indent_step)),
            all_null_values: false,
            ..self.clone()
        }
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Bracket tokens and item placement for one collection kind.
#[derive(Debug, Clone)]
pub struct CollectionLayout {
    /// Opening flow bracket, `{` or `[`
    pub flow_open: &'static str,
    /// Closing flow bracket, `}` or `]`
    pub flow_close: &'static str,
    /// Indentation prefix for block items after the first
    pub item_indent: String,
}

/// One rendered collection item.
///
/// A trailing comment is kept out of `text` so the engine can place it
/// after the item separator in folded flow layout.
#[derive(Debug, Clone)]
pub struct Rendered {
    /// The item's text, possibly spanning multiple lines in block layout
    pub text: String,
    /// Trailing comment to place at the end of the item's line
    pub comment: Option<String>,
}

/// Lays out a collection's items as text.
///
/// Flow layout (the context is inside a flow collection) renders a
/// single line between the bracket tokens, folding one item per line
/// when the line would pass the context width or any item carries a
/// comment. Block layout renders one item per line at `item_indent`.
/// Empty collections render as the bare bracket pair in either layout.
///
/// `on_comment` is invoked when the rendered text ends with a trailing
/// comment, `on_chomp_keep` when it keeps a trailing newline; callers
/// that append further text use them to avoid swallowing either.
pub fn collection<T>(
    ctx: &RenderContext,
    layout: &CollectionLayout,
    items: &[T],
    mut render_item: impl FnMut(&T, &RenderContext) -> crate::Result<Rendered>,
    on_comment: Option<&mut dyn FnMut()>,
    on_chomp_keep: Option<&mut dyn FnMut()>,
) -> crate::Result<String> {
    trace!(items = items.len(), flow = ctx.in_flow, "rendering collection");
    if items.is_empty() {
        return Ok(format!("{}{}", layout.flow_open, layout.flow_close));
    }
    let mut trailing_comment = false;
    let text = if ctx.in_flow {
        // Flow items nest one level deeper; the all-null hint belongs to
        // this collection's own items, so it carries over.
        let mut item_ctx = ctx.indented();
        item_ctx.all_null_values = ctx.all_null_values;
        let rendered: Vec<Rendered> = items
            .iter()
            .map(|item| render_item(item, &item_ctx))
            .collect::<crate::Result<_>>()?;

        let has_comment = rendered.iter().any(|item| item.comment.is_some());
        let one_line = format!(
            "{} {} {}",
            layout.flow_open,
            rendered
                .iter()
                .map(|item| item.text.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            layout.flow_close
        );
        if !has_comment && ctx.indent.len() + one_line.len() <= ctx.width {
            one_line
        } else {
            // Fold: one item per line, comments after the separator so
            // they never swallow it.
            let mut lines = vec![layout.flow_open.to_string()];
            let last = rendered.len() - 1;
            for (i, item) in rendered.iter().enumerate() {
                let mut line = format!("{}{}", item_ctx.indent, item.text);
                if i != last {
                    line.push(',');
                }
                if let Some(comment) = &item.comment {
                    line.push_str(&format!(" # {comment}"));
                }
                lines.push(line);
            }
            lines.push(format!("{}{}", ctx.indent, layout.flow_close));
            lines.join("\n")
        }
    } else {
        let mut lines = Vec::with_capacity(items.len());
        for item in items {
            let item = render_item(item, ctx)?;
            let mut line = item.text;
            trailing_comment = item.comment.is_some();
            if let Some(comment) = &item.comment {
                line.push_str(&format!(" # {comment}"));
            }
            lines.push(line);
        }
        lines.join(&format!("\n{}", layout.item_indent))
    };
    if text.ends_with('\n') {
        if let Some(chomp) = on_chomp_keep {
            chomp();
        }
    } else if trailing_comment
        && let Some(comment) = on_comment
    {
        comment();
    }
    Ok(text)
}

/// Formats one key/value entry of a mapping.
///
/// Comment lines attached before the key render above it; collection
/// keys use the explicit-key form (`? key` with the value on its own
/// `:` line); under the all-null hint a null-valued entry renders as a
/// bare `key:` in block layout and a bare key in flow. A trailing
/// comment on the value node is returned separately for the engine to
/// place.
pub fn pair(entry: &Entry, ctx: &RenderContext) -> crate::Result<Rendered> {
    let mut prefix = String::new();
    if !ctx.in_flow
        && let Node::Scalar(key) = &entry.key
        && let Some(before) = &key.comment_before
    {
        for line in before.lines() {
            prefix.push_str(&format!("# {line}\n{}", ctx.indent));
        }
    }

    let explicit_key = matches!(entry.key, Node::Map(_) | Node::Seq(_));
    let key_text = match &entry.key {
        Node::Scalar(key) => {
            let text = scalar(&key.value, key.style, ctx);
            match &key.anchor {
                Some(anchor) => format!("&{anchor} {text}"),
                None => text,
            }
        }
        // Collection keys render inline regardless of their style tag
        other => {
            let mut flow_ctx = ctx.indented();
            flow_ctx.in_flow = true;
            other.to_text(&flow_ctx)?
        }
    };

    let null_value = entry.has_null_value();
    if null_value && (ctx.all_null_values || entry.value.is_none()) {
        let text = match (explicit_key, ctx.in_flow) {
            (true, _) => format!("{prefix}? {key_text}"),
            (false, true) => format!("{prefix}{key_text}"),
            (false, false) => format!("{prefix}{key_text}:"),
        };
        return Ok(Rendered {
            text,
            comment: None,
        });
    }

    let value = entry.value.as_ref().expect("null-valued entries returned above");
    let comment = match value {
        Node::Scalar(scalar) => scalar.comment.clone(),
        _ => None,
    };
    let anchor = match value {
        Node::Scalar(scalar) => scalar
            .anchor
            .as_ref()
            .map(|anchor| format!("&{anchor} "))
            .unwrap_or_default(),
        _ => String::new(),
    };

    let block_child = !ctx.in_flow
        && match value {
            Node::Map(map) => map.style != Some(CollectionStyle::Flow) && !map.is_empty(),
            Node::Seq(seq) => seq.style != Some(CollectionStyle::Flow) && !seq.is_empty(),
            _ => false,
        };
    let text = if block_child {
        let child_ctx = ctx.indented();
        let child = value.to_text(&child_ctx)?;
        if explicit_key {
            format!(
                "{prefix}? {key_text}\n{}:\n{}{child}",
                ctx.indent, child_ctx.indent
            )
        } else {
            format!("{prefix}{key_text}:\n{}{child}", child_ctx.indent)
        }
    } else {
        let value_text = value.to_text(ctx)?;
        if explicit_key && !ctx.in_flow {
            format!("{prefix}? {key_text}\n{}: {anchor}{value_text}", ctx.indent)
        } else {
            format!("{prefix}{key_text}: {anchor}{value_text}")
        }
    };
    Ok(Rendered { text, comment })
}

/// Emits one scalar payload as text.
///
/// Strings follow the requested quoting style; plain style falls back
/// to single quotes when the text would misparse bare. Floats keep a
/// `.0` on integral values so they read back as floats, and non-finite
/// values use the `.inf`/`.nan` spellings.
pub fn scalar(value: &ScalarValue, style: Option<ScalarStyle>, ctx: &RenderContext) -> String {
    match value {
        ScalarValue::Null => "null".to_string(),
        ScalarValue::Bool(b) => b.to_string(),
        ScalarValue::Int(n) => n.to_string(),
        ScalarValue::Float(x) => {
            if x.is_nan() {
                ".nan".to_string()
            } else if x.is_infinite() {
                if *x < 0.0 { "-.inf" } else { ".inf" }.to_string()
            } else if x.fract() == 0.0 && x.abs() < 1e17 {
                format!("{x:.1}")
            } else {
                x.to_string()
            }
        }
        ScalarValue::Str(s) => match style {
            Some(ScalarStyle::SingleQuoted) => single_quoted(s),
            Some(ScalarStyle::DoubleQuoted) => double_quoted(s),
            Some(ScalarStyle::Plain) | None => {
                // Flow indicators are only reserved inside flow collections
                let flow_unsafe = ctx.in_flow && s.contains([',', '[', ']', '{', '}']);
                if s.contains(['\n', '\r']) {
                    double_quoted(s)
                } else if needs_quoting(s) || flow_unsafe {
                    single_quoted(s)
                } else {
                    s.clone()
                }
            }
        },
    }
}

/// True when a string cannot be written bare without changing meaning.
fn needs_quoting(s: &str) -> bool {
    let Some(first) = s.chars().next() else {
        // Empty strings must be quoted
        return true;
    };
    if s.trim() != s {
        return true;
    }
    if "!&*?|>%@`\"'#,[]{}-:".contains(first) {
        return true;
    }
    if s.contains(": ") || s.ends_with(':') || s.contains(" #") {
        return true;
    }
    // Bare text that reads as another scalar type must be quoted
    matches!(s, "null" | "~" | "true" | "false" | ".inf" | "-.inf" | ".nan")
        || s.parse::<i64>().is_ok()
        || s.parse::<f64>().is_ok()
}

fn single_quoted(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

fn double_quoted(s: &str) -> String {
    let escaped = s
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t");
    format!("\"{escaped}\"")
}
