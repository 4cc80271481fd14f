//! Merge-on-save policy
//!
//! When a node is saved, the edited value is combined with whatever currently
//! lives at the node's path:
//! - both objects: shallow merge, the edited keys win, other keys survive
//! - anything else: the edited value replaces the existing one

use serde_json::Value;

/// Combine an edited value with the value currently stored at its path
///
/// # Examples
///
/// ```
/// use jsonsync_core::merge::merge_values;
/// use serde_json::json;
///
/// let merged = merge_values(Some(&json!({"a": 1, "b": 2})), json!({"b": 3, "c": 4}));
/// assert_eq!(merged, json!({"a": 1, "b": 3, "c": 4}));
/// ```
pub fn merge_values(existing: Option<&Value>, input: Value) -> Value {
    match (existing, input) {
        (Some(Value::Object(current)), Value::Object(edits)) => {
            let mut merged = current.clone();
            for (k, v) in edits {
                merged.insert(k, v);
            }
            Value::Object(merged)
        }
        (_, input) => input,
    }
}
