//! config-manager: layered configuration loading and lookup
//!
//! Loads key/value settings from TOML, JSON, YAML, XML, and env files,
//! merges them into a single in-memory tree via shallow top-level
//! overwrite, and exposes dotted-key lookup with optional defaults.
//!
//! ```no_run
//! use config_manager::{ConfigurationManager, JsonLoader, TomlLoader};
//!
//! # fn main() -> config_manager::Result<()> {
//! let mut config = ConfigurationManager::new();
//! config.add_loader(TomlLoader::new(), ["config/base.toml"]);
//! config.add_loader(JsonLoader::new(), ["config/overrides.json"]);
//! config.load()?;
//!
//! let username = config.get("credentials.username")?;
//! let retries = config.get_or("http.retries", 3);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod factory;
pub mod key;
pub mod loader;
pub mod manager;
pub mod merge;

pub use error::{ConfigError, Result};
pub use factory::{LoaderConstructor, LoaderFactory};
pub use key::{resolve_key, ConfigKey};
pub use loader::{ConfigurationLoader, EnvLoader, JsonLoader, TomlLoader, XmlLoader, YamlLoader};
pub use manager::{ConfigurationManager, LoaderId, MergeInput};
