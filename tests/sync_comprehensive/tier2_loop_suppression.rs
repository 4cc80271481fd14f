//! Tier 2: Loop suppression between the store and the editor

use jsonsync::{ContentsUpdate, TextEditor};

use crate::test_utils::TestDoc;

#[test]
fn test_set_json_pushes_suppressed_write() {
    let t = TestDoc::open("{}");
    t.doc.set_json(r#"{"a": 1}"#).unwrap();

    assert_eq!(
        t.editor.last_update(),
        Some(ContentsUpdate::internal(r#"{"a": 1}"#))
    );
    assert_eq!(t.editor.take_change_notifications(), 0);
}

#[test]
fn test_editor_change_never_writes_back() {
    let t = TestDoc::open("{}");
    t.editor.type_text(r#"{"typed": [1, 2]}"#);

    assert!(t.doc.editor_changed().unwrap());
    assert!(t.editor.updates().is_empty());
    assert_eq!(t.doc.get_json().unwrap(), r#"{"typed": [1, 2]}"#);
}

#[test]
fn test_each_change_notification_settles() {
    let t = TestDoc::open("{}");

    t.editor.type_text(r#"{"v": 1}"#);
    let mut pulls = 0;
    // A host forwards every change notification to the document
    while t.editor.take_change_notifications() > 0 {
        t.doc.editor_changed().unwrap();
        pulls += 1;
    }
    assert_eq!(pulls, 1);

    t.doc.set_json(r#"{"v": 2}"#).unwrap();
    assert_eq!(t.editor.take_change_notifications(), 0);
}

#[test]
fn test_save_does_not_echo() {
    let t = TestDoc::open(r#"{"a": {"b": 1}}"#);
    t.edit(r#"$["a"]"#, r#"{"b": 2}"#).unwrap();

    assert_eq!(t.editor.take_change_notifications(), 0);
    assert!(!t.doc.editor_changed().unwrap());
    assert_eq!(t.editor.contents(), t.doc.get_json().unwrap());
}

#[test]
fn test_invalid_editor_text_is_held_back() {
    let t = TestDoc::open(r#"{"a": 1}"#);
    t.editor.type_text(r#"{"a": 1, "b""#);

    assert!(!t.doc.editor_changed().unwrap());
    assert_eq!(t.doc.get_json().unwrap(), r#"{"a": 1}"#);
    // The user's half-typed text stays in the editor
    assert_eq!(t.editor.contents(), r#"{"a": 1, "b""#);
}

#[test]
fn test_set_json_rejects_invalid() {
    let t = TestDoc::open(r#"{"a": 1}"#);
    let err = t.doc.set_json("[1,").unwrap_err();
    assert!(matches!(err, jsonsync::Error::InvalidJson { .. }));
    assert!(t.editor.updates().is_empty());
}

#[test]
fn test_clear_pushes_empty_document() {
    let t = TestDoc::open(r#"{"a": 1}"#);
    t.doc.clear().unwrap();

    assert_eq!(t.doc.get_json().unwrap(), "{}");
    assert_eq!(t.editor.last_update(), Some(ContentsUpdate::internal("{}")));
    assert_eq!(t.doc.graph().node_count(), 0);
}
