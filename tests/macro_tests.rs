use vdf::{vdf, Value, VdfNode};

#[test]
fn test_vdf_macro_empty() {
    let node = vdf! {};
    assert_eq!(node, VdfNode::new());
    assert!(node.is_empty());
}

#[test]
fn test_vdf_macro_flat_pairs() {
    let node = vdf! {
        "name" => "Alice",
        "role" => "admin",
    };
    assert_eq!(node.len(), 2);
    assert_eq!(node.get_str("name"), Some("Alice"));
    assert_eq!(node.get_str("role"), Some("admin"));
}

#[test]
fn test_vdf_macro_repeated_keys() {
    let node = vdf! {
        "tag" => "first",
        "tag" => "second",
        "tag" => "third",
    };
    assert_eq!(node.len(), 1);
    assert_eq!(node.values("tag"), 3);
    assert_eq!(node.get_str_at("tag", 2), Some("third"));
}

#[test]
fn test_vdf_macro_nested_nodes() {
    let node = vdf! {
        "user" => {
            "id" => "123",
            "name" => "Bob",
            "settings" => {
                "volume" => "0.5",
            },
        },
        "count" => "42",
    };

    assert_eq!(node.get_str("count"), Some("42"));

    let user = node.get_node("user").expect("user node");
    assert_eq!(user.get_str("id"), Some("123"));
    assert_eq!(user.get_str("name"), Some("Bob"));

    let settings = user.get_node("settings").expect("settings node");
    assert_eq!(settings.get_str("volume"), Some("0.5"));
}

#[test]
fn test_vdf_macro_empty_child_node() {
    let node = vdf! { "empty" => {} };
    let child = node.get_node("empty").expect("child node");
    assert!(child.is_empty());
}

#[test]
fn test_vdf_macro_accepts_expressions() {
    let name = String::from("Carol");
    let prebuilt = vdf! { "key" => "value" };

    let node = vdf! {
        "name" => name,
        "child" => prebuilt,
        "leaf" => (Value::from("direct")),
    };
    assert_eq!(node.get_str("name"), Some("Carol"));
    assert_eq!(node.get_node("child").unwrap().get_str("key"), Some("value"));
    assert_eq!(node.get_str("leaf"), Some("direct"));
}

#[test]
fn test_vdf_macro_matches_parsed_text() {
    let built = vdf! {
        "root" => {
            "key" => "a",
            "key" => "b",
            "sub" => { "inner" => "1" },
        },
    };
    let parsed = vdf::parse(
        "\"root\" { \"key\" \"a\" \"key\" \"b\" \"sub\" { \"inner\" \"1\" } }",
    )
    .unwrap();
    assert_eq!(built, parsed);
}
