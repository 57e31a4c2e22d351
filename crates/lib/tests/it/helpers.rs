//! Shared helpers for the integration test suite.

use std::cmp::Ordering;

use quill::{Entry, MapNode};

/// Comparator ordering entries by the text of their scalar keys.
///
/// Entries with non-scalar keys sort by their diagnostic encoding, so
/// the ordering is total.
pub fn by_key_ascending(a: &Entry, b: &Entry) -> Ordering {
    entry_key_text(a).cmp(&entry_key_text(b))
}

fn entry_key_text(entry: &Entry) -> String {
    match entry.key.scalar_value() {
        Some(value) => value.to_string(),
        None => entry.key.to_string(),
    }
}

/// The map's scalar key texts in sequence order.
pub fn keys_of(map: &MapNode) -> Vec<String> {
    map.iter().map(entry_key_text).collect()
}

/// A three-entry insertion-ordered map used across tests.
pub fn sample_map() -> MapNode {
    let mut map = MapNode::new();
    map.set("name", "quill");
    map.set("stars", 42);
    map.set("archived", false);
    map
}
