//! Node rows: the flat key/value/type view of a graph node
//!
//! A graph node displays its content as an ordered list of [`NodeRow`]s.
//! This module converts that list into the text a user edits, and a merged
//! JSON value back into rows.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Kind of value a row displays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowType {
    /// Text
    String,
    /// Integer or float
    Number,
    /// true / false
    Boolean,
    /// null
    Null,
    /// Nested object, rendered as its own node
    Object,
    /// Nested array, rendered as its own node(s)
    Array,
}

impl RowType {
    /// Row type matching a JSON value's kind
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => RowType::Null,
            Value::Bool(_) => RowType::Boolean,
            Value::Number(_) => RowType::Number,
            Value::String(_) => RowType::String,
            Value::Array(_) => RowType::Array,
            Value::Object(_) => RowType::Object,
        }
    }

    /// Object and array rows stand for child nodes
    pub fn is_nested(self) -> bool {
        matches!(self, RowType::Object | RowType::Array)
    }
}

impl fmt::Display for RowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RowType::String => "string",
            RowType::Number => "number",
            RowType::Boolean => "boolean",
            RowType::Null => "null",
            RowType::Object => "object",
            RowType::Array => "array",
        };
        f.write_str(s)
    }
}

/// One displayed field of a graph node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRow {
    /// Object key; `None` for a scalar node's single row
    pub key: Option<String>,
    /// Displayed value
    pub value: Value,
    /// Kind of the displayed field
    #[serde(rename = "type")]
    pub row_type: RowType,
}

impl NodeRow {
    /// Create a row with an explicit type
    pub fn new(key: Option<String>, value: Value, row_type: RowType) -> Self {
        Self {
            key,
            value,
            row_type,
        }
    }

    /// Create a keyed row, inferring the type from the value
    pub fn from_value(key: impl Into<String>, value: Value) -> Self {
        let row_type = RowType::of(&value);
        Self::new(Some(key.into()), value, row_type)
    }

    /// Create the single keyless row of a scalar node
    pub fn scalar(value: Value) -> Self {
        let row_type = RowType::of(&value);
        Self::new(None, value, row_type)
    }

    /// True for a row without a key
    pub fn is_keyless(&self) -> bool {
        self.key.as_deref().map_or(true, str::is_empty)
    }
}

/// Plain-text rendering of a value
///
/// Strings are emitted raw, other scalars in their literal form and
/// containers as compact JSON.
pub fn coerce_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Text shown in the node editor for a node's rows
///
/// - no rows: `{}`
/// - one keyless row: the value as plain text
/// - otherwise: the primitive keyed rows as a pretty-printed object
///
/// Object and array rows are skipped; they are separate nodes in the graph.
///
/// # Examples
///
/// ```
/// use jsonsync_core::rows::{rows_to_editable_text, NodeRow};
/// use serde_json::json;
///
/// assert_eq!(rows_to_editable_text(&[]), "{}");
/// assert_eq!(rows_to_editable_text(&[NodeRow::scalar(json!(42))]), "42");
/// ```
pub fn rows_to_editable_text(rows: &[NodeRow]) -> String {
    match rows {
        [] => "{}".to_string(),
        [only] if only.is_keyless() => coerce_to_string(&only.value),
        _ => {
            let mut obj = Map::new();
            for row in rows.iter().filter(|r| !r.row_type.is_nested()) {
                if let Some(key) = row.key.as_deref().filter(|k| !k.is_empty()) {
                    obj.insert(key.to_string(), row.value.clone());
                }
            }
            pretty(&Value::Object(obj))
        }
    }
}

/// Rows displayed for a value after it was saved into the document
///
/// Object members become one row each: nested containers as `object` rows
/// holding their pretty JSON text, everything else as `string` rows holding
/// the plain-text value. Arrays yield one row per element keyed by index.
/// A scalar yields a single keyless row of its own type.
pub fn text_to_rows(value: &Value) -> Vec<NodeRow> {
    match value {
        Value::Object(map) => map
            .iter()
            .map(|(k, v)| display_row(k.clone(), v))
            .collect(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, v)| display_row(i.to_string(), v))
            .collect(),
        scalar => vec![NodeRow::scalar(scalar.clone())],
    }
}

fn display_row(key: String, value: &Value) -> NodeRow {
    if value.is_object() || value.is_array() {
        NodeRow::new(Some(key), Value::String(pretty(value)), RowType::Object)
    } else {
        NodeRow::new(
            Some(key),
            Value::String(coerce_to_string(value)),
            RowType::String,
        )
    }
}
