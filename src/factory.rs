//! Format-alias registry for constructing loaders and managers

use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::{ConfigError, Result};
use crate::loader::{
    ConfigurationLoader, EnvLoader, JsonLoader, TomlLoader, XmlLoader, YamlLoader,
};
use crate::manager::ConfigurationManager;

/// Constructor registered under a format alias.
pub type LoaderConstructor = fn() -> Box<dyn ConfigurationLoader>;

/// Maps format aliases (`"toml"`, `"json"`, `"yaml"`, `"xml"`, `"env"`)
/// to loader constructors. New aliases can be registered at runtime;
/// registering an existing alias replaces it.
pub struct LoaderFactory {
    registry: HashMap<String, LoaderConstructor>,
}

impl Default for LoaderFactory {
    fn default() -> Self {
        let mut factory = Self { registry: HashMap::new() };
        factory.register("toml", || Box::new(TomlLoader::new()));
        factory.register("json", || Box::new(JsonLoader::new()));
        factory.register("yaml", || Box::new(YamlLoader::new()));
        factory.register("xml", || Box::new(XmlLoader::new()));
        factory.register("env", || Box::new(EnvLoader::new()));
        factory
    }
}

impl LoaderFactory {
    /// Factory pre-seeded with the builtin format aliases.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `alias`, replacing any existing registration.
    pub fn register(&mut self, alias: impl Into<String>, constructor: LoaderConstructor) {
        self.registry.insert(alias.into(), constructor);
    }

    pub fn contains(&self, alias: &str) -> bool {
        self.registry.contains_key(alias)
    }

    /// Instantiate the loader registered under `alias`.
    pub fn loader(&self, alias: &str) -> Result<Box<dyn ConfigurationLoader>> {
        let constructor = self
            .registry
            .get(alias)
            .ok_or_else(|| ConfigError::InvalidLoader { alias: alias.to_string() })?;
        Ok(constructor())
    }

    /// Build a manager with the aliased loader registered for `paths`.
    /// The manager is not loaded yet; call
    /// [`load`](ConfigurationManager::load) on it.
    pub fn create(
        &self,
        alias: &str,
        paths: impl IntoIterator<Item = impl Into<PathBuf>>,
    ) -> Result<ConfigurationManager> {
        let loader = self.loader(alias)?;
        let mut manager = ConfigurationManager::new();
        manager.add_boxed_loader(loader, paths);
        Ok(manager)
    }
}
