//! Plain value graph produced by projecting a node tree.
//!
//! [`Plain`] is the metadata-free counterpart of the node types: what a
//! caller gets when it asks a document for ordinary data instead of a
//! source-fidelity tree. Containers come in two kinds — object-like
//! with stringified keys, map-like with arbitrary plain keys — selected
//! through the conversion context, mirroring the two associative shapes
//! host programs expect.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::node::ScalarValue;

/// Plain in-memory value.
///
/// Containers preserve contribution order and replace on key collision,
/// so the last contribution wins. `Object` stringifies keys; `Map`
/// keeps arbitrary plain keys.
#[derive(Debug, Clone, PartialEq)]
pub enum Plain {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    /// Ordered sequence of values
    Seq(Vec<Plain>),
    /// Object-like container: ordered, string keys
    Object(Vec<(String, Plain)>),
    /// Map-like container: ordered, arbitrary keys
    Map(Vec<(Plain, Plain)>),
}

/// Container kind for associative projection targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    Object,
    Map,
}

impl ContainerKind {
    /// Fresh empty container of this kind.
    pub fn empty(self) -> Plain {
        match self {
            ContainerKind::Object => Plain::Object(Vec::new()),
            ContainerKind::Map => Plain::Map(Vec::new()),
        }
    }
}

/// Conversion context threaded through a plain projection.
pub struct PlainContext<'a> {
    /// Prefer map-like containers (arbitrary keys) over object-like ones.
    pub map_as_map: bool,
    /// Invoked with each freshly created container before its entries
    /// are populated, so a caller can register in-progress conversions.
    pub on_create: Option<&'a mut dyn FnMut(&Plain)>,
}

impl Default for PlainContext<'_> {
    fn default() -> Self {
        Self {
            map_as_map: false,
            on_create: None,
        }
    }
}

impl fmt::Debug for PlainContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlainContext")
            .field("map_as_map", &self.map_as_map)
            .field("on_create", &self.on_create.is_some())
            .finish()
    }
}

impl Plain {
    /// Inserts a key/value pair into a container, replacing any existing
    /// entry with an equal key. Non-container targets ignore the pair.
    pub fn insert_pair(&mut self, key: Plain, value: Plain) {
        match self {
            Plain::Object(entries) => {
                let key = key.key_string();
                match entries.iter_mut().find(|(existing, _)| *existing == key) {
                    Some((_, slot)) => *slot = value,
                    None => entries.push((key, value)),
                }
            }
            Plain::Map(entries) => match entries.iter_mut().find(|(existing, _)| *existing == key) {
                Some((_, slot)) => *slot = value,
                None => entries.push((key, value)),
            },
            _ => {}
        }
    }

    /// Key text used when contributing into an object-like container.
    pub fn key_string(&self) -> String {
        match self {
            Plain::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

impl From<&ScalarValue> for Plain {
    fn from(value: &ScalarValue) -> Self {
        match value {
            ScalarValue::Null => Plain::Null,
            ScalarValue::Bool(b) => Plain::Bool(*b),
            ScalarValue::Int(n) => Plain::Int(*n),
            ScalarValue::Float(x) => Plain::Float(*x),
            ScalarValue::Str(s) => Plain::String(s.clone()),
        }
    }
}

impl From<ScalarValue> for Plain {
    fn from(value: ScalarValue) -> Self {
        Plain::from(&value)
    }
}

impl fmt::Display for Plain {
    /// JSON-like encoding for human-readable output. Intended for
    /// display and diagnostics, not round-tripping; use serde for
    /// strict serialization.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Plain::Null => write!(f, "null"),
            Plain::Bool(b) => write!(f, "{b}"),
            Plain::Int(n) => write!(f, "{n}"),
            Plain::Float(x) => write!(f, "{x}"),
            Plain::String(s) => {
                write!(f, "\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
            }
            Plain::Seq(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Plain::Object(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(
                        f,
                        "\"{}\":{value}",
                        key.replace('\\', "\\\\").replace('"', "\\\"")
                    )?;
                }
                write!(f, "}}")
            }
            Plain::Map(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{key}:{value}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl Serialize for Plain {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Plain::Null => serializer.serialize_unit(),
            Plain::Bool(b) => serializer.serialize_bool(*b),
            Plain::Int(n) => serializer.serialize_i64(*n),
            Plain::Float(x) => serializer.serialize_f64(*x),
            Plain::String(s) => serializer.serialize_str(s),
            Plain::Seq(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Plain::Object(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            Plain::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}
