//! Environment-file loader
//!
//! Parses `KEY=VALUE` files through dotenvy's file iterator, which never
//! touches the process environment. Values `"true"`/`"false"` in any
//! case become booleans; everything else stays a string, so `PORT=8080`
//! yields the string `"8080"`. Env files have no extension constraint.

use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

use super::{load_files, validate_file, ConfigurationLoader};
use crate::error::{ConfigError, Result};

/// Loads env files (`KEY=VALUE` lines, `#` comments, quoted values).
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvLoader;

impl EnvLoader {
    pub fn new() -> Self {
        Self
    }

    fn load_file(&self, path: &Path) -> Result<Map<String, Value>> {
        validate_file(path, &[])?;
        let iter = dotenvy::from_path_iter(path).map_err(|err| ConfigError::InvalidContent {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;
        let mut items = Map::new();
        for entry in iter {
            let (key, value) = entry.map_err(|err| ConfigError::InvalidContent {
                path: path.to_path_buf(),
                reason: err.to_string(),
            })?;
            items.insert(key, coerce_env_value(value));
        }
        Ok(items)
    }
}

impl ConfigurationLoader for EnvLoader {
    fn name(&self) -> &'static str {
        "env"
    }

    fn load(&self, paths: &[PathBuf]) -> Result<Map<String, Value>> {
        load_files(paths, |path| self.load_file(path))
    }
}

fn coerce_env_value(value: String) -> Value {
    if value.eq_ignore_ascii_case("true") {
        Value::Bool(true)
    } else if value.eq_ignore_ascii_case("false") {
        Value::Bool(false)
    } else {
        Value::String(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_key_value_lines() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join(".env");
        fs::write(&path, "APP_NAME=my-app\nDEBUG=true\nCACHE=FALSE\nPORT=8080\n")
            .expect("write");

        let items = EnvLoader::new().load(&[path]).expect("load");
        assert_eq!(items["APP_NAME"], json!("my-app"));
        assert_eq!(items["DEBUG"], json!(true));
        assert_eq!(items["CACHE"], json!(false));
        // Only booleans are coerced; numbers stay strings
        assert_eq!(items["PORT"], json!("8080"));
    }

    #[test]
    fn test_comments_and_quotes() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("settings.env");
        fs::write(&path, "# deployment target\nREGION=\"eu-west-1\"\n").expect("write");

        let items = EnvLoader::new().load(&[path]).expect("load");
        assert_eq!(items["REGION"], json!("eu-west-1"));
    }

    #[test]
    fn test_any_extension_accepted() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("vars.production");
        fs::write(&path, "STAGE=production\n").expect("write");

        let items = EnvLoader::new().load(&[path]).expect("load");
        assert_eq!(items["STAGE"], json!("production"));
    }

    #[test]
    fn test_missing_file() {
        let tmp = TempDir::new().expect("tmp");
        let err = EnvLoader::new().load(&[tmp.path().join("absent.env")]).expect_err("missing");
        assert!(matches!(err, ConfigError::FileNotFound { .. }));
    }
}
