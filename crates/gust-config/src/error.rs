//! Error types for configuration loading and validation.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced while loading or validating a configuration record.
///
/// Validation is fail-loud and fail-fast: constructors return the first
/// problem found at load time rather than letting a broken record reach
/// the generation pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Source text could not be parsed into a record.
    #[error("failed to parse configuration: {message}")]
    Parse {
        /// Description of what was wrong.
        message: String,
    },

    /// A required field is absent.
    #[error("missing required field '{field}'")]
    MissingField {
        /// Name of the missing field.
        field: &'static str,
    },

    /// A key outside the record schema was found.
    #[error("unknown field '{field}' in {section}")]
    UnknownField {
        /// Schema section containing the stray key.
        section: &'static str,
        /// The unrecognized key.
        field: String,
    },

    /// `darkMode` holds something other than `media` or `class`.
    #[error("unrecognized darkMode value '{value}' (expected 'media' or 'class')")]
    InvalidDarkMode {
        /// The rejected value.
        value: String,
    },

    /// A content pattern entry is empty or not a string.
    #[error("content pattern at index {index} {message}")]
    InvalidContentPattern {
        /// Position in the `content` sequence.
        index: usize,
        /// Description of what was wrong.
        message: String,
    },

    /// An animation shorthand could not be parsed.
    #[error("invalid animation shorthand '{value}' for '{animation}': {message}")]
    InvalidShorthand {
        /// Animation entry the shorthand belongs to.
        animation: String,
        /// The rejected shorthand value.
        value: String,
        /// Description of what was wrong.
        message: String,
    },

    /// An animation references keyframes with no matching entry.
    #[error("animation '{animation}' references undefined keyframes '{keyframes}'")]
    DanglingKeyframes {
        /// Animation entry holding the reference.
        animation: String,
        /// The keyframes name that failed to resolve.
        keyframes: String,
    },

    /// A keyframe selector is not `from`, `to`, or a percentage in [0, 100].
    #[error("invalid selector '{selector}' in keyframes '{keyframes}': {message}")]
    InvalidSelector {
        /// Keyframes entry containing the selector.
        keyframes: String,
        /// The rejected selector key.
        selector: String,
        /// Description of what was wrong.
        message: String,
    },

    /// A keyframe declaration has a malformed property or value.
    #[error("invalid declaration '{property}' at '{selector}' in keyframes '{keyframes}': {message}")]
    InvalidDeclaration {
        /// Keyframes entry containing the declaration.
        keyframes: String,
        /// Selector the declaration sits under.
        selector: String,
        /// The property name.
        property: String,
        /// Description of what was wrong.
        message: String,
    },

    /// A record could not be serialized.
    #[error("failed to serialize configuration: {message}")]
    Serialize {
        /// Error message from the serializer.
        message: String,
    },

    /// A configuration file could not be read.
    #[error("failed to read {}: {}", .path.display(), .message)]
    Io {
        /// Path of the unreadable file.
        path: PathBuf,
        /// Error message from the filesystem.
        message: String,
    },

    /// The file extension is not a recognized configuration format.
    #[error("unsupported configuration format: {}", .path.display())]
    UnsupportedFormat {
        /// Path with the unrecognized extension.
        path: PathBuf,
    },

    /// No configuration file was found during discovery.
    #[error("no gust configuration found in {}", .path.display())]
    NotFound {
        /// Directory that was searched.
        path: PathBuf,
    },
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dangling_keyframes_display() {
        let err = ConfigError::DanglingKeyframes {
            animation: "fade-in".to_string(),
            keyframes: "fadeIn".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("fade-in"));
        assert!(msg.contains("fadeIn"));
    }

    #[test]
    fn test_invalid_dark_mode_display() {
        let err = ConfigError::InvalidDarkMode {
            value: "auto".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("auto"));
        assert!(msg.contains("media"));
        assert!(msg.contains("class"));
    }

    #[test]
    fn test_missing_field_display() {
        let err = ConfigError::MissingField { field: "content" };
        assert!(err.to_string().contains("content"));
    }

    #[test]
    fn test_io_display_includes_path() {
        let err = ConfigError::Io {
            path: PathBuf::from("/tmp/gust.config.yaml"),
            message: "permission denied".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("gust.config.yaml"));
        assert!(msg.contains("permission denied"));
    }
}
