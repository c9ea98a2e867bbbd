//! The configuration record consumed by the gust generation pass.
//!
//! A record declares three things: where to scan for class-name tokens
//! (`content`), how dark-mode variants activate (`darkMode`), and what
//! design tokens extend the built-in theme (`theme.extend`). The record
//! is pure data: it is loaded fresh once per build invocation, validated
//! fail-fast, and read-only from then on.
//!
//! # Record Schema
//!
//! ```yaml
//! content:
//!   - "./templates/**/*.html"
//!   - "./content/**/*.json"
//!   - "./index.html"
//!
//! darkMode: media
//!
//! theme:
//!   extend:
//!     animation:
//!       "fade-in":  "fadeIn 0.5s ease-out"
//!       "slide-up": "slideUp 0.5s ease-out"
//!     keyframes:
//!       fadeIn:
//!         "0%":   { opacity: "0", transform: "translateY(8px)" }
//!         "100%": { opacity: "1", transform: "translateY(0)" }
//!       slideUp:
//!         "0%":   { opacity: "0", transform: "translateY(16px)" }
//!         "100%": { opacity: "1", transform: "translateY(0)" }
//! ```
//!
//! `content` is required. `darkMode` defaults to `media` when absent;
//! an unrecognized value is always an error, never a silent default.
//! Everything under `theme` defaults to empty.
//!
//! # Validation
//!
//! Constructors run every load-time check before returning a record:
//! field types, the `darkMode` enum, animation shorthand syntax,
//! keyframe selector ranges, declaration shape, and the
//! animation-to-keyframes referential integrity described in
//! [`crate::theme`].

mod content;
pub mod dark_mode;
pub mod loader;

use std::collections::HashMap;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::error::ConfigError;
use crate::theme::animation::{AnimationSpec, TimeValue};
use crate::theme::keyframes::KeyframeBlock;
use crate::theme::{ThemeConfig, ThemeExtension};

use content::{parse_content, validate_content};
use dark_mode::DarkMode;

/// The stock record shipped with new gust projects.
static STOCK: Lazy<Config> = Lazy::new(|| {
    let fade_in = AnimationSpec::new("fadeIn")
        .with_duration(TimeValue::secs(0.5))
        .with_timing("ease-out");
    let slide_up = AnimationSpec::new("slideUp")
        .with_duration(TimeValue::secs(0.5))
        .with_timing("ease-out");

    let fade_in_frames = KeyframeBlock::new()
        .frame("0%", &[("opacity", "0"), ("transform", "translateY(8px)")])
        .frame("100%", &[("opacity", "1"), ("transform", "translateY(0)")]);
    let slide_up_frames = KeyframeBlock::new()
        .frame("0%", &[("opacity", "0"), ("transform", "translateY(16px)")])
        .frame("100%", &[("opacity", "1"), ("transform", "translateY(0)")]);

    Config::new([
        "./templates/**/*.html",
        "./content/**/*.json",
        "./index.html",
    ])
    .with_animation_spec("fade-in", fade_in)
    .with_animation_spec("slide-up", slide_up)
    .with_keyframes("fadeIn", fade_in_frames)
    .with_keyframes("slideUp", slide_up_frames)
});

/// The configuration record.
///
/// # Example
///
/// ```rust
/// use gust_config::{Config, DarkMode};
///
/// let config = Config::from_yaml(r#"
/// content: ["./site/**/*.html"]
/// darkMode: class
/// "#).unwrap();
///
/// assert_eq!(config.content(), &["./site/**/*.html"]);
/// assert_eq!(config.dark_mode(), DarkMode::Class);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
    content: Vec<String>,
    #[serde(rename = "darkMode")]
    dark_mode: DarkMode,
    theme: ThemeConfig,
}

impl Config {
    /// Creates a record with the given content patterns and everything
    /// else at its default.
    pub fn new<I, S>(content: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            content: content.into_iter().map(Into::into).collect(),
            dark_mode: DarkMode::default(),
            theme: ThemeConfig::default(),
        }
    }

    /// Sets the dark-mode strategy, returning `self` for chaining.
    pub fn with_dark_mode(mut self, dark_mode: DarkMode) -> Self {
        self.dark_mode = dark_mode;
        self
    }

    /// Adds an animation utility from a shorthand string.
    ///
    /// # Errors
    ///
    /// Returns `InvalidShorthand` if the shorthand does not parse. Note
    /// that the keyframes reference is only checked by
    /// [`validate`](Config::validate), so keyframes can be added after
    /// the animations that use them.
    pub fn with_animation(
        self,
        name: impl Into<String>,
        shorthand: &str,
    ) -> Result<Self, ConfigError> {
        let name = name.into();
        let spec = AnimationSpec::parse(shorthand).map_err(|message| {
            ConfigError::InvalidShorthand {
                animation: name.clone(),
                value: shorthand.to_string(),
                message,
            }
        })?;
        Ok(self.with_animation_spec(name, spec))
    }

    /// Adds a pre-built animation spec, returning `self` for chaining.
    pub fn with_animation_spec(mut self, name: impl Into<String>, spec: AnimationSpec) -> Self {
        self.theme.extend_mut().insert_animation(name.into(), spec);
        self
    }

    /// Adds a keyframes entry, returning `self` for chaining.
    pub fn with_keyframes(mut self, name: impl Into<String>, block: KeyframeBlock) -> Self {
        self.theme.extend_mut().insert_keyframes(name.into(), block);
        self
    }

    /// Adds a named font stack, returning `self` for chaining.
    pub fn with_font_family(mut self, name: impl Into<String>, families: &[&str]) -> Self {
        let families = families.iter().map(|family| family.to_string()).collect();
        self.theme
            .extend_mut()
            .insert_font_family(name.into(), families);
        self
    }

    /// Parses and validates a record from YAML text.
    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        let value: serde_yaml::Value =
            serde_yaml::from_str(source).map_err(|e| ConfigError::Parse {
                message: e.to_string(),
            })?;
        Self::from_value(&value)
    }

    /// Parses and validates a record from JSON text.
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        let json: serde_json::Value =
            serde_json::from_str(source).map_err(|e| ConfigError::Parse {
                message: e.to_string(),
            })?;
        let value = serde_yaml::to_value(&json).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        Self::from_value(&value)
    }

    /// Builds a record from a parsed YAML value tree.
    fn from_value(value: &serde_yaml::Value) -> Result<Self, ConfigError> {
        let map = value.as_mapping().ok_or_else(|| ConfigError::Parse {
            message: "configuration must be a mapping".to_string(),
        })?;

        let mut content: Option<Vec<String>> = None;
        let mut dark_mode = DarkMode::default();
        let mut theme = ThemeConfig::default();

        for (key, value) in map {
            let key_str = key.as_str().ok_or_else(|| ConfigError::Parse {
                message: format!("non-string key in configuration root: {:?}", key),
            })?;

            match key_str {
                "content" => {
                    content = Some(parse_content(value)?);
                }
                "darkMode" => {
                    let raw = value.as_str().ok_or_else(|| ConfigError::Parse {
                        message: format!("'darkMode' must be a string, got {:?}", value),
                    })?;
                    dark_mode = DarkMode::from_str(raw)?;
                }
                "theme" => {
                    let theme_map = value.as_mapping().ok_or_else(|| ConfigError::Parse {
                        message: "'theme' must be a mapping".to_string(),
                    })?;
                    theme = ThemeConfig::parse_mapping(theme_map)?;
                }
                other => {
                    return Err(ConfigError::UnknownField {
                        section: "configuration root",
                        field: other.to_string(),
                    });
                }
            }
        }

        let config = Self {
            content: content.ok_or(ConfigError::MissingField { field: "content" })?,
            dark_mode,
            theme,
        };
        config.validate()?;
        Ok(config)
    }

    /// Runs every load-time check on the record.
    ///
    /// Constructors call this before returning; it is public so
    /// programmatically built records can be checked the same way.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_content(&self.content)?;
        self.theme.validate()
    }

    /// Serializes the record to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self).map_err(|e| ConfigError::Serialize {
            message: e.to_string(),
        })
    }

    /// Serializes the record to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialize {
            message: e.to_string(),
        })
    }

    /// Content scan patterns, in declaration order.
    pub fn content(&self) -> &[String] {
        &self.content
    }

    /// The dark-mode strategy.
    pub fn dark_mode(&self) -> DarkMode {
        self.dark_mode
    }

    /// The theme section.
    pub fn theme(&self) -> &ThemeConfig {
        &self.theme
    }

    /// Shortcut to the additive extension block.
    pub fn extend(&self) -> &ThemeExtension {
        self.theme.extend()
    }

    /// Named animation utilities.
    pub fn animation(&self) -> &HashMap<String, AnimationSpec> {
        self.theme.extend().animation()
    }

    /// Keyframe bodies.
    pub fn keyframes(&self) -> &HashMap<String, KeyframeBlock> {
        self.theme.extend().keyframes()
    }
}

impl Default for Config {
    /// Returns the stock record: three content globs, `media` dark
    /// mode, and the `fade-in`/`slide-up` entrance animations.
    fn default() -> Self {
        STOCK.clone()
    }
}
