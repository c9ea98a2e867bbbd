//! Configuration file loading and discovery.
//!
//! A project configures gust with a single `gust.config.*` file at its
//! root. The loader reads the file fresh on every call: one load per
//! build invocation, nothing cached across builds.
//!
//! # Supported Extensions
//!
//! Configuration files are recognized by extension, in priority order:
//!
//! | Priority | Extension | Format |
//! |----------|-----------|--------|
//! | 1 (highest) | `.yaml` | YAML |
//! | 2 | `.yml` | YAML |
//! | 3 (lowest) | `.json` | JSON |
//!
//! If a directory holds more than one `gust.config.*` file,
//! [`Config::discover`] picks the higher-priority extension.

use std::fs;
use std::path::Path;

use crate::error::ConfigError;

use super::Config;

/// Recognized configuration file extensions in priority order.
pub const CONFIG_EXTENSIONS: &[&str] = &[".yaml", ".yml", ".json"];

/// Base name of the configuration file, without extension.
pub const CONFIG_BASENAME: &str = "gust.config";

impl Config {
    /// Loads and validates a record from a file, dispatching on its
    /// extension.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be read, `UnsupportedFormat` for
    /// an unrecognized extension, and any parse or validation error the
    /// text produces.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml(&source),
            Some("json") => Self::from_json(&source),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Locates and loads `gust.config.{yaml,yml,json}` in a directory.
    ///
    /// Candidates are tried in [`CONFIG_EXTENSIONS`] priority order and
    /// the first existing file wins.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no candidate exists, otherwise whatever
    /// [`Config::from_file`] returns for the winning candidate.
    pub fn discover<P: AsRef<Path>>(dir: P) -> Result<Self, ConfigError> {
        let dir = dir.as_ref();
        for extension in CONFIG_EXTENSIONS {
            let candidate = dir.join(format!("{}{}", CONFIG_BASENAME, extension));
            if candidate.is_file() {
                return Self::from_file(candidate);
            }
        }
        Err(ConfigError::NotFound {
            path: dir.to_path_buf(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_priority_order() {
        assert_eq!(CONFIG_EXTENSIONS, &[".yaml", ".yml", ".json"]);
    }

    #[test]
    fn test_from_file_missing() {
        let err = Config::from_file("/nonexistent/gust.config.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
