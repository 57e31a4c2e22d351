//! Plain-value projection and JSON serialization.

use quill::{ContainerKind, MapNode, Node, Plain, PlainContext, Scalar, SeqNode};

use crate::helpers::sample_map;

#[test]
fn test_object_projection_keeps_entry_order() {
    let map = sample_map();
    let plain = map.to_plain(&mut PlainContext::default());

    assert_eq!(
        plain,
        Plain::Object(vec![
            ("name".to_string(), Plain::String("quill".to_string())),
            ("stars".to_string(), Plain::Int(42)),
            ("archived".to_string(), Plain::Bool(false)),
        ])
    );
}

#[test]
fn test_map_projection_keeps_arbitrary_keys() {
    let mut map = MapNode::new();
    map.set(1i64, "one");
    map.set(true, "yes");

    let mut ctx = PlainContext {
        map_as_map: true,
        ..PlainContext::default()
    };
    assert_eq!(
        map.to_plain(&mut ctx),
        Plain::Map(vec![
            (Plain::Int(1), Plain::String("one".to_string())),
            (Plain::Bool(true), Plain::String("yes".to_string())),
        ])
    );

    // The object projection of the same node stringifies the keys
    let plain = map.to_plain(&mut PlainContext::default());
    assert_eq!(
        plain,
        Plain::Object(vec![
            ("1".to_string(), Plain::String("one".to_string())),
            ("true".to_string(), Plain::String("yes".to_string())),
        ])
    );
}

#[test]
fn test_forced_container_kind() {
    let mut map = MapNode::new();
    map.set("a", 1);

    // The caller can force the kind regardless of the context default
    let plain = map.to_plain_as(&mut PlainContext::default(), ContainerKind::Map);
    assert_eq!(
        plain,
        Plain::Map(vec![(
            Plain::String("a".to_string()),
            Plain::Int(1)
        )])
    );
}

#[test]
fn test_projection_unwraps_scalars_and_recurses() {
    let mut inner = MapNode::new();
    inner.set("x", Scalar::new(1).with_comment("dropped in projection"));
    let mut seq = SeqNode::new();
    seq.push(true);
    seq.push(Scalar::new("two"));

    let mut map = MapNode::new();
    map.set("inner", inner);
    map.set("items", seq);

    let plain = map.to_plain(&mut PlainContext::default());
    assert_eq!(
        plain,
        Plain::Object(vec![
            (
                "inner".to_string(),
                Plain::Object(vec![("x".to_string(), Plain::Int(1))]),
            ),
            (
                "items".to_string(),
                Plain::Seq(vec![Plain::Bool(true), Plain::String("two".to_string())]),
            ),
        ])
    );
}

#[test]
fn test_on_create_sees_containers_before_population() {
    let mut inner = MapNode::new();
    inner.set("x", 1);
    let mut map = MapNode::new();
    map.set("inner", inner);

    let mut created = Vec::new();
    let mut on_create = |container: &Plain| created.push(container.clone());
    let mut ctx = PlainContext {
        map_as_map: false,
        on_create: Some(&mut on_create),
    };
    map.to_plain(&mut ctx);

    // Outer container first, then the nested one, each still empty when
    // the hook runs
    assert_eq!(
        created,
        vec![Plain::Object(Vec::new()), Plain::Object(Vec::new())]
    );
}

#[test]
fn test_colliding_plain_keys_last_wins() {
    let mut map = MapNode::new();
    // Str("1") and Int(1) are distinct entry keys, but both stringify
    // to "1" in the object projection
    map.set("1", "from text");
    map.set(1i64, "from int");

    let plain = map.to_plain(&mut PlainContext::default());
    assert_eq!(
        plain,
        Plain::Object(vec![(
            "1".to_string(),
            Plain::String("from int".to_string())
        )])
    );
}

#[test]
fn test_key_without_value_projects_as_null() {
    let mut map = MapNode::new();
    map.add(quill::Entry::key_only("pending"), false).unwrap();

    let plain = map.to_plain(&mut PlainContext::default());
    assert_eq!(
        plain,
        Plain::Object(vec![("pending".to_string(), Plain::Null)])
    );
}

#[test]
fn test_json_serialization_of_projection() {
    let map = sample_map();
    let json = Node::from(map).to_json().unwrap();
    assert_eq!(json, r#"{"name":"quill","stars":42,"archived":false}"#);
}

#[test]
fn test_display_is_the_diagnostic_fallback() {
    let mut map = MapNode::new();
    map.set("a", 1);
    map.set("b", Scalar::new("two"));

    // No rendering context: the JSON-like structural encoding
    assert_eq!(
        format!("{}", Node::from(map)),
        r#"{"a":1,"b":"two"}"#
    );
}
