//! Tier 1: Node row invariants

use jsonsync::rows::{rows_to_editable_text, text_to_rows};
use jsonsync::{EditState, NodeRow, RowType};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

use crate::test_utils::TestDoc;

#[test]
fn test_scalar_row_shortcut() {
    assert_eq!(rows_to_editable_text(&[NodeRow::scalar(json!(42))]), "42");
}

#[test]
fn test_empty_key_counts_as_keyless() {
    let row = NodeRow::new(Some(String::new()), json!(true), RowType::Boolean);
    assert_eq!(rows_to_editable_text(&[row]), "true");
}

#[test]
fn test_scalar_node_buffer_through_api() {
    let t = TestDoc::open(r#"{"n": [42]}"#);
    t.doc.select_path(r#"$["n"][0]"#).unwrap();
    assert_eq!(
        t.doc.buffer().unwrap(),
        ("42".to_string(), EditState::Viewing)
    );
}

#[test]
fn test_nested_rows_are_not_editable() {
    let t = TestDoc::open(r#"{"a": 1, "b": {"c": 2}, "d": [3]}"#);
    t.doc.select_node("1").unwrap();
    assert_eq!(t.doc.begin_edit().unwrap(), "{\n  \"a\": 1\n}");
}

fn flat_object() -> impl Strategy<Value = Map<String, Value>> {
    proptest::collection::btree_map("[a-z]{1,6}", "[a-zA-Z0-9 ]{0,10}", 0..6).prop_map(|m| {
        m.into_iter()
            .map(|(k, v)| (k, Value::String(v)))
            .collect()
    })
}

proptest! {
    #[test]
    fn test_rows_round_trip_plain_objects(obj in flat_object()) {
        let value = Value::Object(obj);
        let rows = text_to_rows(&value);
        let text = rows_to_editable_text(&rows);
        let back: Value = serde_json::from_str(&text).unwrap();
        prop_assert_eq!(back, value);
    }
}
