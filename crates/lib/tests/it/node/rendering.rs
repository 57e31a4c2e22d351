//! Text rendering: block and flow layout, the all-null hint, comments,
//! and scalar quoting.

use quill::{
    CollectionStyle, Entry, MapNode, Node, RenderContext, Scalar, ScalarStyle, ScalarValue,
    SeqNode,
};

use crate::helpers::sample_map;

fn text_of(node: impl Into<Node>) -> String {
    node.into().to_text(&RenderContext::new()).unwrap()
}

#[test]
fn test_block_map() {
    let map = sample_map();
    assert_eq!(text_of(map), "name: quill\nstars: 42\narchived: false");
}

#[test]
fn test_flow_map() {
    let mut map = sample_map();
    map.style = Some(CollectionStyle::Flow);
    assert_eq!(text_of(map), "{ name: quill, stars: 42, archived: false }");
}

#[test]
fn test_empty_collections_render_as_brackets() {
    assert_eq!(text_of(MapNode::new()), "{}");
    assert_eq!(text_of(SeqNode::new()), "[]");
}

#[test]
fn test_nested_block_collections() {
    let mut inner = MapNode::new();
    inner.set("x", 1);
    inner.set("y", 2);
    let mut nums = SeqNode::new();
    nums.push(1);
    nums.push(2);

    let mut map = MapNode::new();
    map.set("inner", inner);
    map.set("nums", nums);

    assert_eq!(
        text_of(map),
        "inner:\n  x: 1\n  y: 2\nnums:\n  - 1\n  - 2"
    );
}

#[test]
fn test_flow_collection_inside_block_map() {
    let mut nums = SeqNode::new();
    nums.push(1);
    nums.push(2);
    nums.style = Some(CollectionStyle::Flow);

    let mut map = MapNode::new();
    map.set("nums", nums);
    assert_eq!(text_of(map), "nums: [ 1, 2 ]");
}

#[test]
fn test_flow_map_folds_past_width() {
    let mut map = MapNode::new();
    map.set("a", 1);
    map.set("b", 2);
    map.style = Some(CollectionStyle::Flow);

    let ctx = RenderContext {
        width: 10,
        ..RenderContext::new()
    };
    assert_eq!(
        Node::from(map).to_text(&ctx).unwrap(),
        "{\n  a: 1,\n  b: 2\n}"
    );
}

#[test]
fn test_all_null_map_renders_as_key_enumeration() {
    let mut map = MapNode::new();
    map.set("read", ScalarValue::Null);
    map.add(Entry::key_only("write"), false).unwrap();

    assert_eq!(text_of(map.clone()), "read:\nwrite:");

    // Same node in flow style drops the values entirely
    map.style = Some(CollectionStyle::Flow);
    assert_eq!(text_of(map), "{ read, write }");
}

#[test]
fn test_all_null_hint_is_one_shot() {
    let mut map = MapNode::new();
    map.set("read", ScalarValue::Null);
    assert_eq!(text_of(map.clone()), "read:");

    // Rendering derived the hint for that call only; the node itself
    // did not change and renders the mixed map normally
    map.set("level", 3);
    assert_eq!(text_of(map), "read: null\nlevel: 3");
}

#[test]
fn test_to_text_rejects_non_pair_items() {
    let mut map = MapNode::new();
    map.set("a", 1);
    map.items.push(Node::from(5));

    let err = map.to_text(&RenderContext::new()).unwrap_err();
    assert!(err.is_invalid_structure());
    assert!(err.to_string().contains("pairs"));
}

#[test]
fn test_value_comments_and_anchors() {
    let mut map = MapNode::new();
    map.set("port", Scalar::new(80).with_comment("default"));
    map.set("host", Scalar::new("localhost").with_anchor("host"));

    assert_eq!(
        text_of(map),
        "port: 80 # default\nhost: &host localhost"
    );
}

#[test]
fn test_comment_before_renders_above_the_key() {
    let mut map = MapNode::new();
    map.add(
        Entry::new(Scalar::new("port").with_comment_before("listener settings"), 80),
        false,
    )
    .unwrap();
    map.set("host", "localhost");

    assert_eq!(
        text_of(map),
        "# listener settings\nport: 80\nhost: localhost"
    );
}

#[test]
fn test_on_comment_fires_for_trailing_comment() {
    let mut map = MapNode::new();
    map.set("port", Scalar::new(80).with_comment("default"));

    let mut fired = false;
    let mut on_comment = || fired = true;
    map.to_text_with(&RenderContext::new(), Some(&mut on_comment), None)
        .unwrap();
    assert!(fired);

    // No trailing comment, no callback
    let mut map = MapNode::new();
    map.set("port", 80);
    let mut fired = false;
    let mut on_comment = || fired = true;
    map.to_text_with(&RenderContext::new(), Some(&mut on_comment), None)
        .unwrap();
    assert!(!fired);
}

#[test]
fn test_flow_comment_forces_fold() {
    let mut map = MapNode::new();
    map.set("a", Scalar::new(1).with_comment("kept"));
    map.set("b", 2);
    map.style = Some(CollectionStyle::Flow);

    assert_eq!(text_of(map), "{\n  a: 1, # kept\n  b: 2\n}");
}

#[test]
fn test_collection_key_uses_explicit_form() {
    let mut key = SeqNode::new();
    key.push("a");
    key.push("b");

    let mut map = MapNode::new();
    map.add(Entry::new(key, 1), false).unwrap();

    assert_eq!(text_of(map), "? [ a, b ]\n: 1");
}

#[test]
fn test_scalar_quoting() {
    assert_eq!(text_of("plain words"), "plain words");
    assert_eq!(text_of(""), "''");
    assert_eq!(text_of("true"), "'true'");
    assert_eq!(text_of("123"), "'123'");
    assert_eq!(text_of("a: b"), "'a: b'");
    assert_eq!(text_of("#leading"), "'#leading'");
    assert_eq!(text_of(" padded "), "' padded '");
    assert_eq!(text_of("line\nbreak"), "\"line\\nbreak\"");
}

#[test]
fn test_scalar_styles() {
    assert_eq!(
        text_of(Scalar::new("don't").with_style(ScalarStyle::SingleQuoted)),
        "'don''t'"
    );
    assert_eq!(
        text_of(Scalar::new("tab\there").with_style(ScalarStyle::DoubleQuoted)),
        "\"tab\\there\""
    );
}

#[test]
fn test_float_emission() {
    assert_eq!(text_of(1.5), "1.5");
    assert_eq!(text_of(2.0), "2.0");
    assert_eq!(text_of(f64::INFINITY), ".inf");
    assert_eq!(text_of(f64::NEG_INFINITY), "-.inf");
    assert_eq!(text_of(f64::NAN), ".nan");
}

#[test]
fn test_seq_block_rendering() {
    let mut seq = SeqNode::new();
    seq.push("first");
    seq.push(Scalar::new("second").with_comment("noted"));

    let mut nested = MapNode::new();
    nested.set("x", 1);
    seq.push(nested);

    assert_eq!(
        text_of(seq),
        "- first\n- second # noted\n- x: 1"
    );
}

#[test]
fn test_seq_delete_and_get() {
    let mut seq = SeqNode::new();
    seq.push(1);
    seq.push(2);

    assert_eq!(seq.get(0).and_then(|v| v.as_int()), Some(1));
    assert!(seq.delete(0));
    assert_eq!(seq.get(0).and_then(|v| v.as_int()), Some(2));
    assert!(!seq.delete(5));
    assert_eq!(seq.len(), 1);
}
