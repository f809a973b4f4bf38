//! TOML configuration loader

use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

use super::{load_files, read_file, validate_file, ConfigurationLoader};
use crate::error::{ConfigError, Result};
use crate::merge::ensure_object;

const EXTENSIONS: &[&str] = &["toml"];

/// Loads TOML documents. The document's top level must be a table.
#[derive(Debug, Default, Clone, Copy)]
pub struct TomlLoader;

impl TomlLoader {
    pub fn new() -> Self {
        Self
    }

    fn load_file(&self, path: &Path) -> Result<Map<String, Value>> {
        validate_file(path, EXTENSIONS)?;
        let content = read_file(path)?;
        let raw: toml::Value = toml::from_str(&content).map_err(|err| {
            ConfigError::InvalidContent { path: path.to_path_buf(), reason: err.to_string() }
        })?;
        let value = serde_json::to_value(raw).map_err(|err| ConfigError::InvalidContent {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;
        ensure_object(value, path)
    }
}

impl ConfigurationLoader for TomlLoader {
    fn name(&self) -> &'static str {
        "toml"
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
    fn test_load_nested_table() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("config.toml");
        fs::write(
            &path,
            "app = \"my-app\"\n\n[credentials]\nusername = \"user1\"\npassword = \"1234\"\n",
        )
        .expect("write");

        let items = TomlLoader::new().load(&[path]).expect("load");
        assert_eq!(items["app"], json!("my-app"));
        assert_eq!(items["credentials"]["username"], json!("user1"));
        assert_eq!(items["credentials"]["password"], json!("1234"));
    }

    #[test]
    fn test_later_file_overwrites_top_level_key() {
        let tmp = TempDir::new().expect("tmp");
        let first = tmp.path().join("first.toml");
        let second = tmp.path().join("second.toml");
        fs::write(&first, "env = \"dev\"\nregion = \"eu\"\n").expect("write");
        fs::write(&second, "env = \"prod\"\n").expect("write");

        let items = TomlLoader::new().load(&[first, second]).expect("load");
        assert_eq!(items["env"], json!("prod"));
        assert_eq!(items["region"], json!("eu"));
    }

    #[test]
    fn test_invalid_syntax() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("broken.toml");
        fs::write(&path, "not toml at all [[[").expect("write");

        let err = TomlLoader::new().load(&[path]).expect_err("broken");
        assert!(matches!(err, ConfigError::InvalidContent { .. }));
    }

    #[test]
    fn test_wrong_extension() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("config.json");
        fs::write(&path, "x = 1\n").expect("write");

        let err = TomlLoader::new().load(&[path]).expect_err("extension");
        assert!(matches!(err, ConfigError::InvalidFileExtension { .. }));
    }
}
