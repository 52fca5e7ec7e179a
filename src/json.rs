//! JSON file loading and defensive nested lookups.
//!
//! Chrome's preference files are large, loosely structured documents. Only a
//! handful of nested keys matter here, so they are read as untyped
//! [`serde_json::Value`]s and walked with [`get_chained`] instead of being
//! deserialized into full structs.

use crate::error::{Result, ScanError};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Reads and parses a JSON document from disk.
///
/// # Errors
///
/// Returns [`ScanError::Read`] if the file cannot be read and
/// [`ScanError::Parse`] if its contents are not valid JSON.
pub fn read_json(path: &Path) -> Result<Value> {
    tracing::debug!("Reading {}", path.display());

    let content = fs::read_to_string(path).map_err(|source| ScanError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| ScanError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Follows `keys` through nested objects.
///
/// `get_chained(v, &["a", "b", "c"])` is `v["a"]["b"]["c"]`, except that it
/// returns `None` as soon as a key is missing or an intermediate value is not
/// an object.
///
/// # Example
///
/// ```
/// use chromhelper::json::get_chained;
/// use serde_json::json;
///
/// let doc = json!({"profile": {"info_cache": {"Default": {}}}});
/// assert!(get_chained(&doc, &["profile", "info_cache"]).is_some());
/// assert!(get_chained(&doc, &["profile", "missing", "deeper"]).is_none());
/// ```
pub fn get_chained<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .try_fold(value, |current, key| current.as_object()?.get(*key))
}

/// Like [`get_chained`], falling back to `default` when the path is absent.
pub fn get_chained_or<'a>(value: &'a Value, keys: &[&str], default: &'a Value) -> &'a Value {
    get_chained(value, keys).unwrap_or(default)
}

/// Looks up a nested object. Returns `None` if the path is absent or does not
/// lead to an object.
pub fn get_object<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a Map<String, Value>> {
    get_chained(value, keys).and_then(Value::as_object)
}

/// Reads a string field from an object, or `default` if it is absent or not a
/// string.
pub(crate) fn str_field<'a>(object: &'a Map<String, Value>, key: &str, default: &'a str) -> &'a str {
    object.get(key).and_then(Value::as_str).unwrap_or(default)
}
