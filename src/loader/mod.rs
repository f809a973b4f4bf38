//! Configuration loaders
//!
//! One loader per file format, all funneling through the same per-file
//! pipeline: the path must exist, its extension must match the loader's
//! expected set, and the parsed document must be a mapping at the top
//! level. Multi-file loads merge per-file results left-to-right by
//! top-level key, so later files win.

use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::merge::merge_top_level;

pub mod env;
pub mod json;
pub mod toml;
pub mod xml;
pub mod yaml;

pub use env::EnvLoader;
pub use json::JsonLoader;
pub use self::toml::TomlLoader;
pub use xml::XmlLoader;
pub use yaml::YamlLoader;

/// Parses a set of configuration files of one format into a single
/// flat-or-nested mapping.
pub trait ConfigurationLoader: std::fmt::Debug {
    /// Short format name used in diagnostics and logging.
    fn name(&self) -> &'static str;

    /// Parse `paths` into one mapping. Per-file results merge
    /// left-to-right via shallow top-level key overwrite.
    fn load(&self, paths: &[PathBuf]) -> Result<Map<String, Value>>;
}

/// Run `parse_file` over every path and fold the results by shallow
/// top-level overwrite.
pub(crate) fn load_files<F>(paths: &[PathBuf], parse_file: F) -> Result<Map<String, Value>>
where
    F: Fn(&Path) -> Result<Map<String, Value>>,
{
    let mut result = Map::new();
    for path in paths {
        let content = parse_file(path)?;
        merge_top_level(&mut result, content);
    }
    Ok(result)
}

/// Per-file validation shared by every loader: existence first, then
/// extension. An empty `extensions` slice means no extension constraint.
pub(crate) fn validate_file(path: &Path, extensions: &[&str]) -> Result<()> {
    if !path.is_file() {
        return Err(ConfigError::FileNotFound { path: path.to_path_buf() });
    }
    if extensions.is_empty() {
        return Ok(());
    }
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();
    if !extensions.contains(&ext.as_str()) {
        return Err(ConfigError::InvalidFileExtension {
            path: path.to_path_buf(),
            expected: extensions.join("/"),
        });
    }
    Ok(())
}

pub(crate) fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|err| ConfigError::InvalidContent {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_validate_missing_file() {
        let tmp = TempDir::new().expect("tmp");
        let err = validate_file(&tmp.path().join("absent.json"), &["json"]).expect_err("missing");
        assert!(matches!(err, ConfigError::FileNotFound { .. }));
    }

    #[test]
    fn test_validate_wrong_extension() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("config.ini");
        fs::write(&path, "x = 1").expect("write");
        let err = validate_file(&path, &["json"]).expect_err("wrong extension");
        assert!(matches!(err, ConfigError::InvalidFileExtension { .. }));
    }

    #[test]
    fn test_validate_extension_is_case_insensitive() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("config.JSON");
        fs::write(&path, "{}").expect("write");
        validate_file(&path, &["json"]).expect("uppercase extension accepted");
    }

    #[test]
    fn test_validate_no_extension_constraint() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join(".env");
        fs::write(&path, "A=1").expect("write");
        validate_file(&path, &[]).expect("no constraint");
    }

    #[test]
    fn test_load_files_later_file_wins() {
        let first = serde_json::json!({"x": 1, "y": 2});
        let second = serde_json::json!({"x": 3});
        let paths = vec![PathBuf::from("first"), PathBuf::from("second")];
        let merged = load_files(&paths, |path| {
            let doc = if path.ends_with("first") { &first } else { &second };
            Ok(doc.as_object().expect("object").clone())
        })
        .expect("load");
        assert_eq!(merged["x"], serde_json::json!(3));
        assert_eq!(merged["y"], serde_json::json!(2));
    }
}
