use vdf::{vdf, WriteOptions, Writer};

#[test]
fn test_simple_pair_shape() {
    let node = vdf! { "key" => "value" };
    assert_eq!(vdf::to_string(&node), "\"key\" \"value\"\n");
}

#[test]
fn test_keys_come_out_sorted() {
    let node = vdf! {
        "zeta" => "1",
        "alpha" => "2",
        "mid" => "3",
    };
    assert_eq!(
        vdf::to_string(&node),
        "\"alpha\" \"2\"\n\"mid\" \"3\"\n\"zeta\" \"1\"\n",
    );
}

#[test]
fn test_nested_node_shape() {
    let node = vdf! { "root" => { "key" => "value" } };
    assert_eq!(
        vdf::to_string(&node),
        "\"root\" {\n    \"key\" \"value\"\n}\n",
    );
}

#[test]
fn test_brace_on_own_line_shape() {
    let node = vdf! { "root" => { "key" => "value" } };
    assert_eq!(
        vdf::to_string_pretty(&node),
        "\"root\"\n{\n    \"key\" \"value\"\n}\n",
    );
}

#[test]
fn test_custom_indent_width() {
    let node = vdf! { "root" => { "sub" => { "key" => "value" } } };
    let options = WriteOptions::new().with_indent(2);
    assert_eq!(
        vdf::to_string_with_options(&node, options),
        "\"root\" {\n  \"sub\" {\n    \"key\" \"value\"\n  }\n}\n",
    );
}

#[test]
fn test_two_levels_of_default_indentation() {
    let node = vdf! { "a" => { "b" => { "c" => "d" } } };
    assert_eq!(
        vdf::to_string(&node),
        "\"a\" {\n    \"b\" {\n        \"c\" \"d\"\n    }\n}\n",
    );
}

#[test]
fn test_empty_child_stays_on_the_key_line() {
    let node = vdf! { "empty" => {} };
    assert_eq!(vdf::to_string(&node), "\"empty\" {}\n");

    let pretty = vdf::to_string_pretty(&node);
    assert_eq!(pretty, "\"empty\"\n{}\n");
}

#[test]
fn test_repeated_leaf_values_each_on_their_own_line() {
    let node = vdf! {
        "key" => "a",
        "key" => "b",
        "key" => "c",
    };
    assert_eq!(
        vdf::to_string(&node),
        "\"key\" \"a\"\n\"key\" \"b\"\n\"key\" \"c\"\n",
    );
}

#[test]
fn test_sibling_nodes_concatenate_without_a_newline() {
    // Only leaf runs get the separating newline; sibling nodes butt up
    // against each other. The output stays parseable.
    let node = vdf! {
        "k" => { "a" => "1" },
        "k" => { "b" => "2" },
    };
    let text = vdf::to_string(&node);
    assert_eq!(text, "\"k\" {\n    \"a\" \"1\"\n}\"k\" {\n    \"b\" \"2\"\n}\n");
    assert_eq!(vdf::parse(&text).unwrap(), node);
}

#[test]
fn test_mixed_leaf_and_node_slots() {
    let node = vdf! {
        "k" => "a",
        "k" => {},
    };
    let text = vdf::to_string(&node);
    assert_eq!(text, "\"k\" \"a\"\n\"k\" {}\n");
    assert_eq!(vdf::parse(&text).unwrap(), node);
}

#[test]
fn test_escaping_on_write() {
    let node = vdf! { "he\"llo" => "a\\b\nc" };
    assert_eq!(vdf::to_string(&node), "\"he\\\"llo\" \"a\\\\b\\nc\"\n");
}

#[test]
fn test_escaped_output_reparses_to_the_same_tree() {
    let node = vdf! {
        "quote\"key" => "back\\slash",
        "multi" => "line\none",
        "tab" => "kept\tliteral",
        "empty" => "",
    };
    let back = vdf::parse(&vdf::to_string(&node)).unwrap();
    assert_eq!(back, node);
}

#[test]
fn test_writer_with_default_options_matches_to_string() {
    let node = vdf! { "root" => { "key" => "value" } };
    let writer = Writer::with_options(WriteOptions::new());
    assert_eq!(writer.write(&node), vdf::to_string(&node));
    assert_eq!(Writer::new().write(&node), vdf::to_string(&node));
}
