//! Shallow top-level merge helpers shared by loaders and the manager

use serde_json::{Map, Value};
use std::path::Path;

use crate::error::{ConfigError, Result};

/// Merge `incoming` into `target`, overwriting top-level keys.
///
/// Later keys win. Nested mappings are replaced wholesale, never
/// deep-merged.
pub fn merge_top_level(target: &mut Map<String, Value>, incoming: Map<String, Value>) {
    for (key, value) in incoming {
        target.insert(key, value);
    }
}

/// Unwrap a parsed document, requiring a mapping at the top level.
pub(crate) fn ensure_object(value: Value, path: &Path) -> Result<Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(ConfigError::InvalidContent {
            path: path.to_path_buf(),
            reason: format!("top-level value must be a mapping, found {}", value_kind(&other)),
        }),
    }
}

/// Human-readable JSON type name for error messages.
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "mapping",
    }
}
