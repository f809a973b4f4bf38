//! XML configuration loader
//!
//! Parses an XML document into a nested mapping: child elements become
//! keys, attributes become `@`-prefixed keys, and mixed text content
//! surfaces under `$text` (quick-xml's serde mapping). XML carries no
//! type information, so a coercion pass then rewrites every leaf
//! string: `"true"`/`"false"` in any case become booleans, and numeric
//! strings become integers (no decimal point) or floats.

use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

use super::{load_files, read_file, validate_file, ConfigurationLoader};
use crate::error::{ConfigError, Result};
use crate::merge::ensure_object;

const EXTENSIONS: &[&str] = &["xml"];

/// Loads XML documents. The root element's children become top-level
/// keys.
#[derive(Debug, Default, Clone, Copy)]
pub struct XmlLoader;

impl XmlLoader {
    pub fn new() -> Self {
        Self
    }

    fn load_file(&self, path: &Path) -> Result<Map<String, Value>> {
        validate_file(path, EXTENSIONS)?;
        let content = read_file(path)?;
        let value: Value = quick_xml::de::from_str(&content).map_err(|err| {
            ConfigError::InvalidContent { path: path.to_path_buf(), reason: err.to_string() }
        })?;
        let mut items = ensure_object(value, path)?;
        for value in items.values_mut() {
            coerce_scalars(value);
        }
        Ok(items)
    }
}

impl ConfigurationLoader for XmlLoader {
    fn name(&self) -> &'static str {
        "xml"
    }

    fn load(&self, paths: &[PathBuf]) -> Result<Map<String, Value>> {
        load_files(paths, |path| self.load_file(path))
    }
}

/// Rewrite every leaf string in the tree through [`coerce_string`].
fn coerce_scalars(value: &mut Value) {
    match value {
        Value::String(s) => {
            if let Some(coerced) = coerce_string(s) {
                *value = coerced;
            }
        }
        Value::Array(items) => items.iter_mut().for_each(coerce_scalars),
        Value::Object(map) => map.values_mut().for_each(coerce_scalars),
        _ => {}
    }
}

/// Boolean words win over numbers; a decimal point selects a float,
/// otherwise an integer is tried first (exponent forms fall through to
/// the float parse). Non-finite results and anything unparsable pass
/// through unchanged.
fn coerce_string(s: &str) -> Option<Value> {
    if s.eq_ignore_ascii_case("true") {
        return Some(Value::Bool(true));
    }
    if s.eq_ignore_ascii_case("false") {
        return Some(Value::Bool(false));
    }
    if !s.contains('.') {
        if let Ok(n) = s.parse::<i64>() {
            return Some(Value::Number(n.into()));
        }
    }
    if let Ok(f) = s.parse::<f64>() {
        if s.chars().any(|c| c.is_ascii_digit()) {
            return serde_json::Number::from_f64(f).map(Value::Number);
        }
    }
    None
}
