//! Tier 4: Stale edits and cancellation

use jsonsync::{EditState, GraphNode, JsonPath, NodeRow, SyncOptions};
use serde_json::json;

use crate::test_utils::TestDoc;

#[test]
fn test_background_change_keeps_buffer_while_editing() {
    let t = TestDoc::open(r#"{"obj": {"a": 1}}"#);
    t.doc.select_path(r#"$["obj"]"#).unwrap();
    t.doc.begin_edit().unwrap();
    t.doc.update_buffer(r#"{"a": 99}"#).unwrap();

    t.editor.type_text(r#"{"obj": {"a": 2}}"#);
    assert!(t.doc.editor_changed().unwrap());

    assert_eq!(
        t.doc.buffer().unwrap(),
        (r#"{"a": 99}"#.to_string(), EditState::Editing)
    );
}

#[test]
fn test_cancel_resnapshots_current_content() {
    let t = TestDoc::open(r#"{"obj": {"a": 1}}"#);
    t.doc.select_path(r#"$["obj"]"#).unwrap();
    t.doc.begin_edit().unwrap();
    t.doc.update_buffer(r#"{"a": 99}"#).unwrap();

    t.doc.set_json(r#"{"obj": {"a": 2}}"#).unwrap();
    t.doc.cancel().unwrap();

    assert_eq!(
        t.doc.buffer().unwrap(),
        ("{\n  \"a\": 2\n}".to_string(), EditState::Viewing)
    );
}

#[test]
fn test_viewing_buffer_follows_document() {
    let t = TestDoc::open(r#"{"obj": {"a": 1}}"#);
    t.doc.select_path(r#"$["obj"]"#).unwrap();

    t.editor.type_text(r#"{"obj": {"a": 3}}"#);
    t.doc.editor_changed().unwrap();

    assert_eq!(t.doc.buffer().unwrap().0, "{\n  \"a\": 3\n}");
}

#[test]
fn test_selection_cleared_when_node_disappears() {
    let t = TestDoc::open(r#"{"obj": {"a": 1}}"#);
    t.doc.select_path(r#"$["obj"]"#).unwrap();

    t.doc.set_json(r#"{"other": 1}"#).unwrap();

    assert_eq!(t.doc.selected_node().unwrap(), None);
    assert_eq!(t.doc.path_label().unwrap(), "$");
    assert_eq!(t.doc.buffer().unwrap().0, "{}");
}

#[test]
fn test_save_after_shape_change_is_rejected() {
    let t = TestDoc::open(r#"{"obj": "text"}"#);
    t.doc.graph().set_selected(GraphNode::new(
        "stale",
        vec![NodeRow::from_value("a", json!(1))],
        Some(JsonPath::root().key("obj")),
    ));
    t.doc.begin_edit().unwrap();
    t.doc.update_buffer(r#"{"a": 2}"#).unwrap();

    let err = t.doc.save().unwrap_err();
    assert!(matches!(err, jsonsync::Error::AddressingMismatch { .. }));
    assert_eq!(t.value(), json!({"obj": "text"}));
    assert_eq!(t.doc.buffer().unwrap().1, EditState::Editing);
}

#[test]
fn test_lenient_paths_allow_shape_change() {
    let t = TestDoc::with_options(r#"{"obj": "text"}"#, SyncOptions::new().strict_paths(false));
    t.doc.graph().set_selected(GraphNode::new(
        "stale",
        vec![NodeRow::from_value("a", json!(1))],
        Some(JsonPath::root().key("obj")),
    ));
    t.doc.begin_edit().unwrap();
    t.doc.update_buffer(r#"{"a": 2}"#).unwrap();

    t.doc.save().unwrap();
    assert_eq!(t.value(), json!({"obj": {"a": 2}}));
}

#[test]
fn test_node_without_path_reports_not_found() {
    let t = TestDoc::open(r#"{"a": 1}"#);
    t.doc
        .graph()
        .set_selected(GraphNode::new("orphan", vec![], None));
    t.doc.begin_edit().unwrap();
    t.doc.update_buffer(r#"{"a": 2}"#).unwrap();

    assert_eq!(t.doc.save().unwrap_err(), jsonsync::Error::PathNotFound);
    assert_eq!(
        t.last_notification(),
        Some(jsonsync::Notification::Error("Path not found".to_string()))
    );
}
