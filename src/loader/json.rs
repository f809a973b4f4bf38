//! JSON configuration loader

use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

use super::{load_files, read_file, validate_file, ConfigurationLoader};
use crate::error::{ConfigError, Result};
use crate::merge::ensure_object;

const EXTENSIONS: &[&str] = &["json"];

/// Loads JSON documents. The document's top level must be an object.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonLoader;

impl JsonLoader {
    pub fn new() -> Self {
        Self
    }

    fn load_file(&self, path: &Path) -> Result<Map<String, Value>> {
        validate_file(path, EXTENSIONS)?;
        let content = read_file(path)?;
        let value: Value = serde_json::from_str(&content).map_err(|err| {
            ConfigError::InvalidContent { path: path.to_path_buf(), reason: err.to_string() }
        })?;
        ensure_object(value, path)
    }
}

impl ConfigurationLoader for JsonLoader {
    fn name(&self) -> &'static str {
        "json"
    }

    fn load(&self, paths: &[PathBuf]) -> Result<Map<String, Value>> {
        load_files(paths, |path| self.load_file(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_preserves_parsed_values() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("config.json");
        fs::write(
            &path,
            r#"{"debug": true, "port": 8080, "author": {"name": "abdeslam"}}"#,
        )
        .expect("write");

        let items = JsonLoader::new().load(&[path]).expect("load");
        assert_eq!(items["debug"], json!(true));
        assert_eq!(items["port"], json!(8080));
        assert_eq!(items["author"]["name"], json!("abdeslam"));
    }

    #[test]
    fn test_top_level_array_is_invalid() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("list.json");
        fs::write(&path, "[1, 2, 3]").expect("write");

        let err = JsonLoader::new().load(&[path]).expect_err("array top level");
        assert!(matches!(err, ConfigError::InvalidContent { .. }));
    }

    #[test]
    fn test_invalid_syntax() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("broken.json");
        fs::write(&path, "{ not json").expect("write");

        let err = JsonLoader::new().load(&[path]).expect_err("broken");
        assert!(matches!(err, ConfigError::InvalidContent { .. }));
    }

    #[test]
    fn test_missing_file() {
        let tmp = TempDir::new().expect("tmp");
        let err = JsonLoader::new()
            .load(&[tmp.path().join("absent.json")])
            .expect_err("missing");
        assert!(matches!(err, ConfigError::FileNotFound { .. }));
    }
}
