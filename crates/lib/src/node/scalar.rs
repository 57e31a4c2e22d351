//! Scalar payloads and the wrapped scalar node.
//!
//! [`ScalarValue`] is the bare payload a scalar-valued node carries.
//! [`Scalar`] wraps a payload together with the source metadata the
//! document model preserves: an anchor name, comments, and the quoting
//! style the scalar was written with. The mapping node reads `.value`
//! for key equality and unwrap-on-read, and writes it in place when
//! overwriting so the metadata survives.

use std::fmt;

use serde::{Serialize, Serializer};

/// Bare scalar payload.
///
/// Equality is strict per payload kind; floats compare by IEEE equality.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    /// Null/empty value
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating-point value
    Float(f64),
    /// Text string value
    Str(String),
}

impl ScalarValue {
    /// Returns true if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, ScalarValue::Null)
    }

    /// Returns the payload kind as a string
    pub fn kind_name(&self) -> &'static str {
        match self {
            ScalarValue::Null => "null",
            ScalarValue::Bool(_) => "bool",
            ScalarValue::Int(_) => "int",
            ScalarValue::Float(_) => "float",
            ScalarValue::Str(_) => "str",
        }
    }
}

impl Default for ScalarValue {
    fn default() -> Self {
        ScalarValue::Null
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Null => write!(f, "null"),
            ScalarValue::Bool(b) => write!(f, "{b}"),
            ScalarValue::Int(n) => write!(f, "{n}"),
            ScalarValue::Float(x) => write!(f, "{x}"),
            ScalarValue::Str(s) => write!(f, "{s}"),
        }
    }
}

impl Serialize for ScalarValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ScalarValue::Null => serializer.serialize_unit(),
            ScalarValue::Bool(b) => serializer.serialize_bool(*b),
            ScalarValue::Int(n) => serializer.serialize_i64(*n),
            ScalarValue::Float(x) => serializer.serialize_f64(*x),
            ScalarValue::Str(s) => serializer.serialize_str(s),
        }
    }
}

impl From<bool> for ScalarValue {
    fn from(value: bool) -> Self {
        ScalarValue::Bool(value)
    }
}

impl From<i64> for ScalarValue {
    fn from(value: i64) -> Self {
        ScalarValue::Int(value)
    }
}

impl From<i32> for ScalarValue {
    fn from(value: i32) -> Self {
        ScalarValue::Int(value as i64)
    }
}

impl From<u32> for ScalarValue {
    fn from(value: u32) -> Self {
        ScalarValue::Int(value as i64)
    }
}

impl From<f64> for ScalarValue {
    fn from(value: f64) -> Self {
        ScalarValue::Float(value)
    }
}

impl From<String> for ScalarValue {
    fn from(value: String) -> Self {
        ScalarValue::Str(value)
    }
}

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        ScalarValue::Str(value.to_string())
    }
}

// PartialEq implementations for comparing payloads with plain types
impl PartialEq<str> for ScalarValue {
    fn eq(&self, other: &str) -> bool {
        match self {
            ScalarValue::Str(s) => s == other,
            _ => false,
        }
    }
}

impl PartialEq<&str> for ScalarValue {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<i64> for ScalarValue {
    fn eq(&self, other: &i64) -> bool {
        match self {
            ScalarValue::Int(n) => n == other,
            _ => false,
        }
    }
}

impl PartialEq<bool> for ScalarValue {
    fn eq(&self, other: &bool) -> bool {
        match self {
            ScalarValue::Bool(b) => b == other,
            _ => false,
        }
    }
}

/// Quoting style a scalar was written with, or should be written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarStyle {
    /// Unquoted plain style
    Plain,
    /// 'single quoted'
    SingleQuoted,
    /// "double quoted"
    DoubleQuoted,
}

/// A scalar node: a payload plus the source metadata worth preserving.
///
/// The payload is mutable in place — overwriting a mapping entry whose
/// value is a `Scalar` assigns a new payload into the existing node, so
/// the anchor, comments, and style attached to it survive the write.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scalar {
    /// The scalar payload
    pub value: ScalarValue,
    /// Anchor name (`&name`), if the scalar is an anchor target
    pub anchor: Option<String>,
    /// Comment on the same line as the scalar
    pub comment: Option<String>,
    /// Comment lines preceding the scalar
    pub comment_before: Option<String>,
    /// Quoting style; `None` lets the renderer choose
    pub style: Option<ScalarStyle>,
}

impl Scalar {
    /// Creates a scalar node with no metadata.
    pub fn new(value: impl Into<ScalarValue>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    /// Attaches an anchor name.
    pub fn with_anchor(mut self, anchor: impl Into<String>) -> Self {
        self.anchor = Some(anchor.into());
        self
    }

    /// Attaches a same-line comment.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Attaches preceding comment lines.
    pub fn with_comment_before(mut self, comment: impl Into<String>) -> Self {
        self.comment_before = Some(comment.into());
        self
    }

    /// Sets the quoting style.
    pub fn with_style(mut self, style: ScalarStyle) -> Self {
        self.style = Some(style);
        self
    }
}
