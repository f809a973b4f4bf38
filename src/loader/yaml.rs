//! YAML configuration loader

use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

use super::{load_files, read_file, validate_file, ConfigurationLoader};
use crate::error::{ConfigError, Result};
use crate::merge::ensure_object;

const EXTENSIONS: &[&str] = &["yaml", "yml"];

/// Loads YAML documents (`.yaml` or `.yml`). The document's top level
/// must be a mapping.
#[derive(Debug, Default, Clone, Copy)]
pub struct YamlLoader;

impl YamlLoader {
    pub fn new() -> Self {
        Self
    }

    fn load_file(&self, path: &Path) -> Result<Map<String, Value>> {
        validate_file(path, EXTENSIONS)?;
        let content = read_file(path)?;
        let value: Value = serde_yaml::from_str(&content).map_err(|err| {
            ConfigError::InvalidContent { path: path.to_path_buf(), reason: err.to_string() }
        })?;
        ensure_object(value, path)
    }
}

impl ConfigurationLoader for YamlLoader {
    fn name(&self) -> &'static str {
        "yaml"
    }

    fn load(&self, paths: &[PathBuf]) -> Result<Map<String, Value>> {
        load_files(paths, |path| self.load_file(path))
    }
}
