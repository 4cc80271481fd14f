//! Tier 3: Merge-on-save through the edit session

use jsonsync::{EditState, Notification};
use serde_json::json;

use crate::test_utils::TestDoc;

#[test]
fn test_merge_precedence() {
    let t = TestDoc::open(r#"{"obj": {"a": 1, "b": 2}}"#);
    let merged = t.edit(r#"$["obj"]"#, r#"{"b": 3, "c": 4}"#).unwrap();

    assert_eq!(merged, json!({"a": 1, "b": 3, "c": 4}));
    assert_eq!(t.value(), json!({"obj": {"a": 1, "b": 3, "c": 4}}));
    assert_eq!(
        t.last_notification(),
        Some(Notification::Success("Changes saved!".to_string()))
    );
}

#[test]
fn test_replacement_on_type_mismatch() {
    let t = TestDoc::open(r#"{"list": [1, 2, 3]}"#);
    // Arrays have no node of their own; the host supplies one
    t.doc
        .graph()
        .set_selected(jsonsync::GraphNode::new(
            "host",
            vec![],
            Some(jsonsync::JsonPath::root().key("list")),
        ));
    t.doc.begin_edit().unwrap();
    t.doc.update_buffer(r#"{"x": 1}"#).unwrap();

    assert_eq!(t.doc.save().unwrap(), json!({"x": 1}));
    assert_eq!(t.value(), json!({"list": {"x": 1}}));
}

#[test]
fn test_merge_into_object_with_empty_key() {
    let t = TestDoc::open(r#"{"o": {"": 1}}"#);
    let merged = t.edit(r#"$["o"]"#, r#"{"z": 2}"#).unwrap();

    assert_eq!(merged, json!({"": 1, "z": 2}));
    assert_eq!(t.value(), json!({"o": {"": 1, "z": 2}}));
    assert!(matches!(
        t.doc.inline_save("5"),
        Err(jsonsync::Error::NotScalar { .. })
    ));
}

#[test]
fn test_invalid_input_keeps_document_and_state() {
    let t = TestDoc::open(r#"{"obj": {"a": 1}}"#);
    t.doc.select_path(r#"$["obj"]"#).unwrap();
    t.doc.begin_edit().unwrap();
    t.doc.update_buffer("{a: 1}").unwrap();
    let before = t.doc.get_json().unwrap();

    let err = t.doc.save().unwrap_err();

    assert!(matches!(err, jsonsync::Error::InvalidJson { .. }));
    assert_eq!(t.doc.get_json().unwrap(), before);
    assert_eq!(
        t.doc.buffer().unwrap(),
        ("{a: 1}".to_string(), EditState::Editing)
    );
    assert_eq!(
        t.last_notification(),
        Some(Notification::Error("Invalid JSON format".to_string()))
    );
}

#[test]
fn test_save_leaves_unedited_children() {
    let t = TestDoc::open(r#"{"user": {"name": "Alice", "address": {"city": "Oslo"}, "tags": ["x"]}}"#);
    t.edit(r#"$["user"]"#, r#"{"name": "Bob"}"#).unwrap();

    assert_eq!(
        t.value(),
        json!({"user": {"name": "Bob", "address": {"city": "Oslo"}, "tags": ["x"]}})
    );
}

#[test]
fn test_buffer_after_save_is_pretty_merged_value() {
    let t = TestDoc::open(r#"{"obj": {"a": 1}}"#);
    t.edit(r#"$["obj"]"#, r#"{"b": true}"#).unwrap();

    assert_eq!(
        t.doc.buffer().unwrap(),
        (
            "{\n  \"a\": 1,\n  \"b\": true\n}".to_string(),
            EditState::Viewing
        )
    );
}

#[test]
fn test_inline_edit_of_array_element() {
    let t = TestDoc::open(r#"{"tags": ["a", "b"], "n": [1]}"#);

    t.doc.select_path(r#"$["tags"][1]"#).unwrap();
    assert_eq!(t.doc.inline_save("z").unwrap(), json!("z"));

    t.doc.select_path(r#"$["n"][0]"#).unwrap();
    assert_eq!(t.doc.inline_save("7").unwrap(), json!(7));

    assert_eq!(t.value(), json!({"tags": ["a", "z"], "n": [7]}));
}

#[test]
fn test_inline_edit_requires_scalar() {
    let t = TestDoc::open(r#"{"a": 1}"#);
    t.doc.select_node("1").unwrap();
    assert_eq!(
        t.doc.inline_save("2").unwrap_err(),
        jsonsync::Error::NotScalar { id: "1".to_string() }
    );
}

#[test]
fn test_save_without_selection() {
    let t = TestDoc::open(r#"{"a": 1}"#);
    assert_eq!(t.doc.begin_edit().unwrap_err(), jsonsync::Error::NoSelection);
    assert_eq!(t.doc.save().unwrap_err(), jsonsync::Error::NotEditing);
}
