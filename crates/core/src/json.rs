//! Path addressing for JSON documents
//!
//! This module defines how a graph node locates its value inside the document:
//! - JsonPath: ordered key/index sequence (e.g. `$["users"][0]["name"]`)
//! - PathSegment: individual path component (Key or Index)
//! - resolve/read/write helpers that walk a `serde_json::Value` tree
//!
//! JSON values themselves are plain `serde_json::Value`, the tagged union
//! {Null, Bool, Number, String, Array, Object}.

use crate::error::{Result, SyncError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// JsonPath and PathSegment
// =============================================================================

/// Error type for JSON path parsing
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathParseError {
    /// Path text does not start with `$`
    #[error("path must start with '$'")]
    MissingRoot,
    /// Unclosed bracket
    #[error("unclosed bracket starting at position {0}")]
    UnclosedBracket(usize),
    /// Invalid array index
    #[error("invalid array index at position {0}: {1}")]
    InvalidIndex(usize, String),
    /// Quoted key is not a valid JSON string
    #[error("invalid quoted key at position {0}: {1}")]
    InvalidKey(usize, String),
    /// Unexpected character
    #[error("unexpected character '{0}' at position {1}")]
    UnexpectedChar(char, usize),
}

/// A segment in a JSON path
///
/// Serializes untagged, so a path travels as `["users", 0, "name"]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// Array index: `[0]`
    Index(usize),
    /// Object key: `["foo"]`
    Key(String),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(k) => write!(f, "[{}]", quote_key(k)),
            PathSegment::Index(i) => write!(f, "[{}]", i),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(k: &str) -> Self {
        PathSegment::Key(k.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(k: String) -> Self {
        PathSegment::Key(k)
    }
}

impl From<usize> for PathSegment {
    fn from(i: usize) -> Self {
        PathSegment::Index(i)
    }
}

/// JSON string literal for a key; escapes quotes and control characters
fn quote_key(key: &str) -> String {
    Value::String(key.to_string()).to_string()
}

/// A path into a JSON document
///
/// The empty path is the document root. The canonical text form is bracket
/// notation rooted at `$`:
///
/// | Path | Text |
/// |------|------|
/// | root | `$` |
/// | `users`, `0`, `name` | `$["users"][0]["name"]` |
///
/// # Examples
///
/// ```
/// use jsonsync_core::json::JsonPath;
///
/// let name = JsonPath::root().key("users").index(0).key("name");
/// assert_eq!(name.to_string(), r#"$["users"][0]["name"]"#);
///
/// let parsed: JsonPath = r#"$["users"][0]["name"]"#.parse().unwrap();
/// assert_eq!(parsed, name);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct JsonPath {
    segments: Vec<PathSegment>,
}

impl JsonPath {
    /// The document root, `$`
    pub fn root() -> Self {
        Self::default()
    }

    /// Segments from the root down
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// True for `$`
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Descend into an object member
    pub fn key(self, key: impl Into<String>) -> Self {
        self.child(PathSegment::Key(key.into()))
    }

    /// Descend into an array element
    pub fn index(self, idx: usize) -> Self {
        self.child(PathSegment::Index(idx))
    }

    fn child(mut self, seg: PathSegment) -> Self {
        self.segments.push(seg);
        self
    }

    /// Descend one level in place
    pub fn push(&mut self, seg: impl Into<PathSegment>) {
        self.segments.push(seg.into());
    }
}

impl<S: Into<PathSegment>> FromIterator<S> for JsonPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        JsonPath {
            segments: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Canonical display string for a path
///
/// `$` for the root, then `[N]` per index and `["key"]` per key.
pub fn format(path: &JsonPath) -> String {
    let mut result = String::from("$");
    for seg in &path.segments {
        result.push_str(&seg.to_string());
    }
    result
}

impl fmt::Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format(self))
    }
}

impl FromStr for JsonPath {
    type Err = PathParseError;

    /// Parse the canonical form produced by [`format`]
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.first() != Some(&b'$') {
            return Err(PathParseError::MissingRoot);
        }

        let mut segments = Vec::new();
        let mut i = 1;

        while i < bytes.len() {
            if bytes[i] != b'[' {
                return Err(unexpected_at(s, i));
            }
            let start = i;
            i += 1;

            if i < bytes.len() && bytes[i] == b'"' {
                // Quoted key: scan to the closing quote, honoring escapes
                let key_start = i;
                i += 1;
                while i < bytes.len() && bytes[i] != b'"' {
                    if bytes[i] == b'\\' {
                        i += 1;
                    }
                    i += 1;
                }
                if i >= bytes.len() {
                    return Err(PathParseError::UnclosedBracket(start));
                }
                let literal = &s[key_start..=i];
                let key: String = serde_json::from_str(literal)
                    .map_err(|_| PathParseError::InvalidKey(key_start, literal.to_string()))?;
                i += 1;
                if i >= bytes.len() {
                    return Err(PathParseError::UnclosedBracket(start));
                }
                if bytes[i] != b']' {
                    return Err(unexpected_at(s, i));
                }
                segments.push(PathSegment::Key(key));
            } else {
                let idx_start = i;
                while i < bytes.len() && bytes[i] != b']' {
                    i += 1;
                }
                if i >= bytes.len() {
                    return Err(PathParseError::UnclosedBracket(start));
                }
                let idx_str = &s[idx_start..i];
                let idx = idx_str
                    .parse::<usize>()
                    .map_err(|_| PathParseError::InvalidIndex(idx_start, idx_str.to_string()))?;
                segments.push(PathSegment::Index(idx));
            }
            i += 1; // Skip closing bracket
        }

        Ok(JsonPath { segments })
    }
}

fn unexpected_at(s: &str, byte_pos: usize) -> PathParseError {
    let c = s[byte_pos..].chars().next().unwrap_or('\0');
    PathParseError::UnexpectedChar(c, byte_pos)
}

// =============================================================================
// Resolution
// =============================================================================

/// Human-readable kind of a JSON value, as used in error messages
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// The container holding the value a path points at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedContainer<'a> {
    /// Object or array that holds the addressed value
    pub parent: &'a Value,
    /// Final path segment, to be applied to `parent`
    pub last: &'a PathSegment,
}

fn step<'a>(current: &'a Value, seg: &PathSegment, path: &JsonPath) -> Result<&'a Value> {
    match (current, seg) {
        (Value::Object(map), PathSegment::Key(k)) => map.get(k).ok_or_else(|| {
            SyncError::path_resolution(path.to_string(), format!("missing key {}", quote_key(k)))
        }),
        (Value::Array(items), PathSegment::Index(i)) => items.get(*i).ok_or_else(|| {
            SyncError::path_resolution(
                path.to_string(),
                format!("index {} out of range (length {})", i, items.len()),
            )
        }),
        (other, seg) => Err(SyncError::path_resolution(
            path.to_string(),
            format!("cannot apply {} to a {}", seg, kind_name(other)),
        )),
    }
}

fn step_mut<'a>(current: &'a mut Value, seg: &PathSegment, path: &JsonPath) -> Result<&'a mut Value> {
    match (current, seg) {
        (Value::Object(map), PathSegment::Key(k)) => map.get_mut(k).ok_or_else(|| {
            SyncError::path_resolution(path.to_string(), format!("missing key {}", quote_key(k)))
        }),
        (Value::Array(items), PathSegment::Index(i)) => {
            let len = items.len();
            items.get_mut(*i).ok_or_else(|| {
                SyncError::path_resolution(
                    path.to_string(),
                    format!("index {} out of range (length {})", i, len),
                )
            })
        }
        (other, seg) => Err(SyncError::path_resolution(
            path.to_string(),
            format!("cannot apply {} to a {}", seg, kind_name(other)),
        )),
    }
}

fn split_last(path: &JsonPath) -> Result<(&PathSegment, &[PathSegment])> {
    path.segments
        .split_last()
        .ok_or_else(|| SyncError::path_resolution("$", "the root has no parent container"))
}

fn require_container(value: &Value, path: &JsonPath) -> Result<()> {
    if value.is_object() || value.is_array() {
        Ok(())
    } else {
        Err(SyncError::path_resolution(
            path.to_string(),
            format!("parent is a {}, not a container", kind_name(value)),
        ))
    }
}

/// Walk all segments but the last and return the container they reach
///
/// Fails when an intermediate segment does not exist or indexes into a
/// non-container, when the reached parent is not a container, or when the
/// path is the root.
pub fn resolve_container<'a>(root: &'a Value, path: &'a JsonPath) -> Result<ResolvedContainer<'a>> {
    let (last, init) = split_last(path)?;
    let mut current = root;
    for seg in init {
        current = step(current, seg, path)?;
    }
    require_container(current, path)?;
    Ok(ResolvedContainer {
        parent: current,
        last,
    })
}

/// Mutable counterpart of [`resolve_container`]
pub fn resolve_container_mut<'a>(
    root: &'a mut Value,
    path: &'a JsonPath,
) -> Result<(&'a mut Value, &'a PathSegment)> {
    let (last, init) = split_last(path)?;
    let mut current = root;
    for seg in init {
        current = step_mut(current, seg, path)?;
    }
    require_container(current, path)?;
    Ok((current, last))
}

/// Read the value a path points at
///
/// Returns `Ok(None)` when the parent container exists but holds nothing at
/// the final segment. The root path reads the whole value.
pub fn read_value_at<'a>(root: &'a Value, path: &'a JsonPath) -> Result<Option<&'a Value>> {
    if path.is_root() {
        return Ok(Some(root));
    }
    let resolved = resolve_container(root, path)?;
    Ok(match (resolved.parent, resolved.last) {
        (Value::Object(map), PathSegment::Key(k)) => map.get(k),
        (Value::Array(items), PathSegment::Index(i)) => items.get(*i),
        _ => None,
    })
}

/// Write a value at a path, mutating the parent container in place
///
/// Objects accept new keys. Arrays accept an existing index or the append
/// position (`index == len`). The root path replaces the whole value.
pub fn write_value_at(root: &mut Value, path: &JsonPath, value: Value) -> Result<()> {
    if path.is_root() {
        *root = value;
        return Ok(());
    }
    let (parent, last) = resolve_container_mut(root, path)?;
    match (parent, last) {
        (Value::Object(map), PathSegment::Key(k)) => {
            map.insert(k.clone(), value);
            Ok(())
        }
        (Value::Array(items), PathSegment::Index(i)) => {
            let len = items.len();
            if *i < len {
                items[*i] = value;
                Ok(())
            } else if *i == len {
                items.push(value);
                Ok(())
            } else {
                Err(SyncError::IndexOutOfRange {
                    path: path.to_string(),
                    index: *i,
                    len,
                })
            }
        }
        (parent, last) => Err(SyncError::path_resolution(
            path.to_string(),
            format!("cannot apply {} to a {}", last, kind_name(parent)),
        )),
    }
}
