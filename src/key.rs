//! Compound-key resolution
//!
//! A lookup key is either a compound string (`"credentials.username"`)
//! split on the manager's separator, or a pre-split sequence of segments
//! used verbatim. [`resolve_key`] is the single place governing that
//! split.

use crate::error::{ConfigError, Result};

/// A lookup key accepted by the manager's `has`/`get` operations.
#[derive(Debug, Clone, Copy)]
pub enum ConfigKey<'a> {
    /// A compound key, split on the manager's separator during resolution
    Compound(&'a str),
    /// An already-split segment path, used as-is
    Segments(&'a [&'a str]),
}

impl<'a> From<&'a str> for ConfigKey<'a> {
    fn from(key: &'a str) -> Self {
        ConfigKey::Compound(key)
    }
}

impl<'a> From<&'a String> for ConfigKey<'a> {
    fn from(key: &'a String) -> Self {
        ConfigKey::Compound(key)
    }
}

impl<'a> From<&'a [&'a str]> for ConfigKey<'a> {
    fn from(segments: &'a [&'a str]) -> Self {
        ConfigKey::Segments(segments)
    }
}

impl<'a, const N: usize> From<&'a [&'a str; N]> for ConfigKey<'a> {
    fn from(segments: &'a [&'a str; N]) -> Self {
        ConfigKey::Segments(segments)
    }
}

/// Resolve `key` into its segment path.
///
/// Compound strings are split on `separator`; segment slices pass
/// through unchanged. An empty compound string or an empty segment
/// slice resolves to no path at all and is rejected.
pub fn resolve_key(key: ConfigKey<'_>, separator: &str) -> Result<Vec<String>> {
    match key {
        ConfigKey::Compound(raw) => {
            if raw.is_empty() {
                return Err(ConfigError::InvalidKey { reason: "key is empty".to_string() });
            }
            Ok(raw.split(separator).map(str::to_string).collect())
        }
        ConfigKey::Segments(segments) => {
            if segments.is_empty() {
                return Err(ConfigError::InvalidKey {
                    reason: "segment list is empty".to_string(),
                });
            }
            Ok(segments.iter().map(|s| s.to_string()).collect())
        }
    }
}
