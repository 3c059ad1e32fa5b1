//! Dotted path following with the coarse fallback lookup.

use serde_json::{Map, Value};

use crate::error::{RemapError, Result};
use crate::repr;

/// Follows `path` (`a.b.c`) from `data` and returns the value it ends on.
///
/// When a segment is missing, or descent hits a non-mapping before the last
/// segment, the rest of the path is dropped and `data` itself is searched for
/// `field`, then for the path's first segment. The first key found wins.
pub(crate) fn follow<'a>(path: &str, field: &str, data: &'a Map<String, Value>) -> Result<&'a Value> {
    let mut current = data;
    let mut segments = path.split('.').peekable();
    while let Some(segment) = segments.next() {
        match (current.get(segment), segments.peek()) {
            (Some(value), None) => return Ok(value),
            (Some(Value::Object(next)), Some(_)) => current = next,
            _ => break,
        }
    }
    fallback(path, field, data)
}

fn fallback<'a>(path: &str, field: &str, data: &'a Map<String, Value>) -> Result<&'a Value> {
    let first_segment = path.split('.').next().unwrap_or(path);
    if let Some(value) = data.get(field) {
        log::warn!("path '{path}' not found for field '{field}', using key '{field}'");
        return Ok(value);
    }
    if let Some(value) = data.get(first_segment) {
        log::warn!("path '{path}' not found for field '{field}', using key '{first_segment}'");
        return Ok(value);
    }
    Err(RemapError::UnresolvedPath {
        field: field.to_string(),
        first_segment: first_segment.to_string(),
        mapping: repr::mapping(data),
    })
}
