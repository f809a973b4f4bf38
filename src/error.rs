//! Error types for configuration loading and lookup

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Every failure a loader, manager, or factory operation can surface.
///
/// All failures are fatal to the triggering call; nothing is retried or
/// swallowed except the documented default fallback in
/// [`ConfigurationManager::get_or`](crate::ConfigurationManager::get_or).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A configuration file path did not resolve to an existing file
    #[error("Configuration file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// A file's extension does not match what its loader expects
    #[error("Configuration file {} must have extension {}", path.display(), expected)]
    InvalidFileExtension { path: PathBuf, expected: String },

    /// A file failed to parse, or its top-level value is not a mapping
    #[error("Invalid content in {}: {}", path.display(), reason)]
    InvalidContent { path: PathBuf, reason: String },

    /// A lookup missed and no default was supplied
    #[error("Configuration item not found: {key}")]
    ItemNotFound { key: String },

    /// A lookup key could not be resolved into segments
    #[error("Invalid key: {reason}")]
    InvalidKey { reason: String },

    /// A merge argument was not a mapping
    #[error("Invalid merge input: expected a mapping, found {found}")]
    InvalidMergeInput { found: String },

    /// No loader is registered under the requested alias
    #[error("No configuration loader registered for alias '{alias}'")]
    InvalidLoader { alias: String },
}
