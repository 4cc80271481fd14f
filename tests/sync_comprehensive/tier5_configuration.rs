//! Tier 5: Configuration and diagnostics

use jsonsync::{registry, AccessMode, Notification, SyncOptions};
use serde_json::json;

use crate::test_utils::TestDoc;

#[test]
fn test_options_from_toml() {
    let opts = jsonsync::options_from_toml(
        r#"
access_mode = "read-only"
strict_paths = false
success_message = "Saved"
"#,
    )
    .unwrap();

    assert_eq!(opts.access_mode, AccessMode::ReadOnly);
    assert!(!opts.strict_paths);
    assert_eq!(opts.success_message, "Saved");
}

#[test]
fn test_options_from_toml_defaults() {
    assert_eq!(jsonsync::options_from_toml("").unwrap(), SyncOptions::default());
}

#[test]
fn test_options_from_bad_toml() {
    let err = jsonsync::options_from_toml("access_mode = \"sometimes\"").unwrap_err();
    assert!(matches!(err, jsonsync::Error::Config { .. }));
}

#[test]
fn test_read_only_document() {
    let t = TestDoc::with_options(
        r#"{"obj": {"a": 1}}"#,
        SyncOptions::new().access_mode(AccessMode::ReadOnly),
    );

    assert_eq!(t.doc.set_json("{}").unwrap_err(), jsonsync::Error::ReadOnly);
    assert_eq!(
        t.edit(r#"$["obj"]"#, r#"{"a": 2}"#).unwrap_err(),
        jsonsync::Error::ReadOnly
    );
    assert_eq!(t.value(), json!({"obj": {"a": 1}}));
    assert_eq!(
        t.last_notification(),
        Some(Notification::Error("document is read-only".to_string()))
    );
}

#[test]
fn test_custom_success_message() {
    let t = TestDoc::with_options(
        r#"{"obj": {"a": 1}}"#,
        SyncOptions::new().success_message("Node updated"),
    );
    t.edit(r#"$["obj"]"#, r#"{"a": 2}"#).unwrap();
    assert_eq!(
        t.last_notification(),
        Some(Notification::Success("Node updated".to_string()))
    );
}

#[test]
fn test_seed_from_invalid_editor_text() {
    let t = TestDoc::open("not json at all");
    assert_eq!(t.doc.get_json().unwrap(), "{}");
    assert_eq!(t.doc.graph().node_count(), 1);
}

#[test]
fn test_published_store_is_reachable() {
    let t = TestDoc::open(r#"{"diag": true}"#);
    t.doc.publish();

    let store = registry::published_store().unwrap();
    assert_eq!(store.get_json(), r#"{"diag": true}"#);
    registry::unpublish();
}
