//! Tier 1: Path addressing invariants

use jsonsync::json::{format, read_value_at, write_value_at};
use jsonsync::{JsonPath, PathSegment, SyncError};
use proptest::prelude::*;
use serde_json::json;

#[test]
fn test_root_formats_as_dollar() {
    assert_eq!(format(&JsonPath::root()), "$");
}

#[test]
fn test_mixed_path_format() {
    let path = JsonPath::root().key("a").index(0).key("b");
    assert_eq!(format(&path), r#"$["a"][0]["b"]"#);
    assert_eq!(path.to_string(), format(&path));
}

#[test]
fn test_path_label_matches_format() {
    let t = crate::test_utils::TestDoc::open(r#"{"users": [{"name": "Alice"}]}"#);
    t.doc.select_path(r#"$["users"][0]"#).unwrap();
    assert_eq!(t.doc.path_label().unwrap(), r#"$["users"][0]"#);
}

#[test]
fn test_write_through_missing_intermediate_fails() {
    let mut doc = json!({"a": {}});
    let path = JsonPath::root().key("a").key("missing").key("leaf");
    let err = write_value_at(&mut doc, &path, json!(1)).unwrap_err();
    assert!(matches!(err, SyncError::PathResolution { .. }));
    assert_eq!(doc, json!({"a": {}}));
}

#[test]
fn test_array_append_and_out_of_range() {
    let mut doc = json!({"list": [1]});
    write_value_at(&mut doc, &JsonPath::root().key("list").index(1), json!(2)).unwrap();
    assert_eq!(doc, json!({"list": [1, 2]}));

    let err = write_value_at(&mut doc, &JsonPath::root().key("list").index(5), json!(3))
        .unwrap_err();
    assert_eq!(
        err,
        SyncError::IndexOutOfRange {
            path: r#"$["list"][5]"#.to_string(),
            index: 5,
            len: 2,
        }
    );
}

fn key() -> impl Strategy<Value = String> {
    "[a-z\"\\\\ ]{0,8}"
}

proptest! {
    #[test]
    fn test_write_then_read_returns_value(keys in proptest::collection::vec(key(), 1..4), n in any::<i64>()) {
        // Build the nested objects the path walks through
        let mut doc = json!({});
        let mut path = JsonPath::root();
        for k in &keys[..keys.len() - 1] {
            path.push(k.as_str());
            let cur = path.clone();
            if read_value_at(&doc, &cur).unwrap().map_or(true, |v| !v.is_object()) {
                write_value_at(&mut doc, &cur, json!({})).unwrap();
            }
        }
        path.push(keys[keys.len() - 1].as_str());

        write_value_at(&mut doc, &path, json!(n)).unwrap();
        prop_assert_eq!(read_value_at(&doc, &path).unwrap(), Some(&json!(n)));

        let parsed: JsonPath = format(&path).parse().unwrap();
        prop_assert_eq!(parsed.segments().last(), Some(&PathSegment::Key(keys[keys.len() - 1].clone())));
    }
}
