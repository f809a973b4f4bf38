//! The configuration manager: loader registry, merged tree, and lookup

use serde_json::{Map, Value};
use std::path::PathBuf;
use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::key::{resolve_key, ConfigKey};
use crate::loader::ConfigurationLoader;
use crate::merge::{merge_top_level, value_kind};

const DEFAULT_KEY_SEPARATOR: &str = ".";

/// Handle identifying one loader registration within a manager.
///
/// Returned by [`ConfigurationManager::add_loader`]; stays valid until
/// [`ConfigurationManager::reset`]. Two registrations of the same loader
/// kind get distinct handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoaderId(usize);

#[derive(Debug)]
struct LoaderEntry {
    loader: Box<dyn ConfigurationLoader>,
    paths: Vec<PathBuf>,
}

/// Input accepted by [`ConfigurationManager::merge`]: a raw mapping, a
/// JSON value expected to be an object, or another manager's tree.
pub enum MergeInput {
    Items(Map<String, Value>),
    Value(Value),
}

impl From<Map<String, Value>> for MergeInput {
    fn from(items: Map<String, Value>) -> Self {
        MergeInput::Items(items)
    }
}

impl From<Value> for MergeInput {
    fn from(value: Value) -> Self {
        MergeInput::Value(value)
    }
}

impl From<&ConfigurationManager> for MergeInput {
    fn from(manager: &ConfigurationManager) -> Self {
        MergeInput::Items(manager.items.clone())
    }
}

/// Owns the merged configuration tree and the registered loaders.
///
/// Loaders are registered up front and parsed only when [`load`] is
/// called; calling [`load`] again re-reads every file from disk and
/// re-merges. Lookup walks nested mappings through compound keys split
/// on the configurable separator (default `.`).
///
/// A manager is single-threaded by design: all operations are in-memory
/// map manipulations plus blocking file reads during [`load`].
///
/// [`load`]: ConfigurationManager::load
#[derive(Debug)]
pub struct ConfigurationManager {
    entries: Vec<LoaderEntry>,
    items: Map<String, Value>,
    key_separator: String,
    loaded_files: Vec<PathBuf>,
}

impl Default for ConfigurationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigurationManager {
    /// Create an empty manager with the default `.` separator.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            items: Map::new(),
            key_separator: DEFAULT_KEY_SEPARATOR.to_string(),
            loaded_files: Vec::new(),
        }
    }

    /// Register `loader` for `paths` and return its handle.
    ///
    /// Registration only records intent; nothing is read from disk until
    /// [`load`](Self::load).
    pub fn add_loader<L>(
        &mut self,
        loader: L,
        paths: impl IntoIterator<Item = impl Into<PathBuf>>,
    ) -> LoaderId
    where
        L: ConfigurationLoader + 'static,
    {
        self.add_boxed_loader(Box::new(loader), paths)
    }

    /// [`add_loader`](Self::add_loader) for an already-boxed loader, as
    /// handed out by a [`LoaderFactory`](crate::LoaderFactory).
    pub fn add_boxed_loader(
        &mut self,
        loader: Box<dyn ConfigurationLoader>,
        paths: impl IntoIterator<Item = impl Into<PathBuf>>,
    ) -> LoaderId {
        let id = LoaderId(self.entries.len());
        self.entries
            .push(LoaderEntry { loader, paths: paths.into_iter().map(Into::into).collect() });
        id
    }

    /// Append more paths to an existing registration.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not refer to a live registration (ids are
    /// invalidated by [`reset`](Self::reset)).
    pub fn add_paths(&mut self, id: LoaderId, paths: impl IntoIterator<Item = impl Into<PathBuf>>) {
        self.entries[id.0].paths.extend(paths.into_iter().map(Into::into));
    }

    /// Invoke every registered loader in registration order and merge
    /// each result into the tree via shallow top-level overwrite.
    ///
    /// Loaded paths are appended to the ledger returned by
    /// [`loaded_files`](Self::loaded_files). Calling `load` again
    /// re-reads every file and re-merges; nothing is cached.
    pub fn load(&mut self) -> Result<()> {
        for entry in &self.entries {
            debug!("Loading {} file(s) with the {} loader", entry.paths.len(), entry.loader.name());
            let content = entry.loader.load(&entry.paths)?;
            merge_top_level(&mut self.items, content);
            self.loaded_files.extend(entry.paths.iter().cloned());
        }
        Ok(())
    }

    /// Whether the full segment path of `key` exists in the tree.
    ///
    /// Never errors: unresolvable keys and missing intermediate levels
    /// both report `false`.
    pub fn has<'k>(&self, key: impl Into<ConfigKey<'k>>) -> bool {
        match resolve_key(key.into(), &self.key_separator) {
            Ok(segments) => self.walk(&segments).is_some(),
            Err(_) => false,
        }
    }

    /// Look up the value at `key`, walking nested mappings segment by
    /// segment.
    pub fn get<'k>(&self, key: impl Into<ConfigKey<'k>>) -> Result<&Value> {
        let segments = resolve_key(key.into(), &self.key_separator)?;
        self.walk(&segments)
            .ok_or_else(|| ConfigError::ItemNotFound { key: segments.join(&self.key_separator) })
    }

    /// Like [`get`](Self::get), but falls back to `default` when any
    /// segment along the path is absent. An unresolvable key behaves
    /// like a miss.
    pub fn get_or<'k>(&self, key: impl Into<ConfigKey<'k>>, default: impl Into<Value>) -> Value {
        match resolve_key(key.into(), &self.key_separator) {
            Ok(segments) => self.walk(&segments).cloned().unwrap_or_else(|| default.into()),
            Err(_) => default.into(),
        }
    }

    /// Set a top-level key directly to `value`.
    ///
    /// The key is stored verbatim as one top-level entry; it is NOT
    /// split into segments, so `set("a.b", v)` creates the literal key
    /// `"a.b"`, which [`get`](Self::get) with the default separator will
    /// not find. This asymmetry with `get`/`has` is intentional.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.items.insert(key.into(), value.into());
    }

    /// Delete a top-level key, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.items.remove(key)
    }

    /// Shallow-merge `input` into the tree, overwriting top-level keys.
    ///
    /// Accepts a raw mapping, another manager, or a [`Value`]. A value
    /// must be an object or the call fails with
    /// [`ConfigError::InvalidMergeInput`].
    pub fn merge(&mut self, input: impl Into<MergeInput>) -> Result<()> {
        let incoming = match input.into() {
            MergeInput::Items(items) => items,
            MergeInput::Value(Value::Object(items)) => items,
            MergeInput::Value(other) => {
                return Err(ConfigError::InvalidMergeInput {
                    found: value_kind(&other).to_string(),
                })
            }
        };
        merge_top_level(&mut self.items, incoming);
        Ok(())
    }

    /// Set the separator used to split compound keys in future
    /// `has`/`get` calls. Storage layout is unaffected.
    pub fn set_key_separator(&mut self, separator: impl Into<String>) {
        self.key_separator = separator.into();
    }

    pub fn key_separator(&self) -> &str {
        &self.key_separator
    }

    /// Clear loaders, tree, and ledger, and restore the default
    /// separator. Previously issued [`LoaderId`]s become invalid.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.items = Map::new();
        self.loaded_files.clear();
        self.key_separator = DEFAULT_KEY_SEPARATOR.to_string();
    }

    /// The loader behind `id`, if the registration is live.
    pub fn loader(&self, id: LoaderId) -> Option<&dyn ConfigurationLoader> {
        self.entries.get(id.0).map(|entry| entry.loader.as_ref())
    }

    pub fn has_loader(&self, id: LoaderId) -> bool {
        id.0 < self.entries.len()
    }

    /// All registrations in registration order.
    pub fn loaders(&self) -> impl Iterator<Item = (LoaderId, &dyn ConfigurationLoader)> + '_ {
        self.entries.iter().enumerate().map(|(i, entry)| (LoaderId(i), entry.loader.as_ref()))
    }

    /// The merged configuration tree.
    pub fn items(&self) -> &Map<String, Value> {
        &self.items
    }

    /// Every file path actually loaded so far, in load order. Repeated
    /// `load()` calls append again.
    pub fn loaded_files(&self) -> &[PathBuf] {
        &self.loaded_files
    }

    fn walk(&self, segments: &[String]) -> Option<&Value> {
        let (first, rest) = segments.split_first()?;
        let mut current = self.items.get(first)?;
        for segment in rest {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }
}
