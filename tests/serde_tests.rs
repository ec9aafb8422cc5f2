use serde_json::json;
use vdf::{vdf, Value};

#[test]
fn test_leaf_values_serialize_as_strings() {
    let node = vdf! { "key" => "value" };
    assert_eq!(serde_json::to_value(&node).unwrap(), json!({ "key": "value" }));
}

#[test]
fn test_repeated_keys_serialize_as_arrays() {
    let node = vdf! {
        "key" => "a",
        "key" => "b",
    };
    assert_eq!(
        serde_json::to_value(&node).unwrap(),
        json!({ "key": ["a", "b"] }),
    );
}

#[test]
fn test_nested_nodes_serialize_as_objects() {
    let node = vdf! {
        "outer" => {
            "inner" => "1",
        },
    };
    assert_eq!(
        serde_json::to_value(&node).unwrap(),
        json!({ "outer": { "inner": "1" } }),
    );
}

#[test]
fn test_empty_node_serializes_as_empty_object() {
    let node = vdf! {};
    assert_eq!(serde_json::to_value(&node).unwrap(), json!({}));
}

#[test]
fn test_mixed_slots_serialize_as_heterogeneous_arrays() {
    let node = vdf! {
        "k" => "leaf",
        "k" => { "x" => "y" },
    };
    assert_eq!(
        serde_json::to_value(&node).unwrap(),
        json!({ "k": ["leaf", { "x": "y" }] }),
    );
}

#[test]
fn test_value_serializes_directly() {
    assert_eq!(
        serde_json::to_value(Value::from("hello")).unwrap(),
        json!("hello"),
    );
    assert_eq!(
        serde_json::to_value(Value::Node(vdf! { "a" => "1" })).unwrap(),
        json!({ "a": "1" }),
    );
}

#[test]
fn test_parsed_manifest_projects_to_json() {
    let root = vdf::parse(
        r#"
"AppState"
{
    "appid"   "440"
    "depot"   { "manifest" "12345" }
    "depot"   { "manifest" "67890" }
}
"#,
    )
    .unwrap();

    assert_eq!(
        serde_json::to_value(&root).unwrap(),
        json!({
            "AppState": {
                "appid": "440",
                "depot": [
                    { "manifest": "12345" },
                    { "manifest": "67890" },
                ],
            },
        }),
    );
}
