//! Dark-mode strategy for variant rule emission.
//!
//! The generator supports two ways of activating dark-theme variants:
//!
//! - **media**: dark variants are wrapped in a
//!   `@media (prefers-color-scheme: dark)` block and follow the OS
//!   color mode.
//! - **class**: dark variants are nested under a `.dark` ancestor
//!   selector that the page toggles itself.
//!
//! The strategy is configuration data; the wrapping itself happens in
//! the generation pass. [`DarkMode::scope`] exposes the selector scope
//! the chosen strategy maps to.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ConfigError;

/// Strategy used to activate dark-mode variant rules.
///
/// An unrecognized value is rejected at load time, never silently
/// defaulted. An *absent* `darkMode` field defaults to [`DarkMode::Media`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DarkMode {
    /// Follow the OS color mode via a `prefers-color-scheme` media query.
    #[default]
    Media,
    /// Activate via a `.dark` class toggled on an ancestor element.
    Class,
}

/// Selector scope dark-variant rules are emitted under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DarkModeScope {
    /// Wrap variants in an `@media` block with this condition.
    MediaCondition(&'static str),
    /// Nest variants under this ancestor class selector.
    ClassSelector(&'static str),
}

impl DarkMode {
    /// Returns the selector scope this strategy maps to.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gust_config::{DarkMode, DarkModeScope};
    ///
    /// assert_eq!(
    ///     DarkMode::Media.scope(),
    ///     DarkModeScope::MediaCondition("(prefers-color-scheme: dark)"),
    /// );
    /// assert_eq!(
    ///     DarkMode::Class.scope(),
    ///     DarkModeScope::ClassSelector(".dark"),
    /// );
    /// ```
    pub fn scope(&self) -> DarkModeScope {
        match self {
            DarkMode::Media => DarkModeScope::MediaCondition("(prefers-color-scheme: dark)"),
            DarkMode::Class => DarkModeScope::ClassSelector(".dark"),
        }
    }

    /// Returns true for the media-query strategy.
    pub fn is_media(&self) -> bool {
        matches!(self, DarkMode::Media)
    }

    /// Returns true for the class-toggle strategy.
    pub fn is_class(&self) -> bool {
        matches!(self, DarkMode::Class)
    }
}

impl FromStr for DarkMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "media" => Ok(DarkMode::Media),
            "class" => Ok(DarkMode::Class),
            other => Err(ConfigError::InvalidDarkMode {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for DarkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DarkMode::Media => write!(f, "media"),
            DarkMode::Class => write!(f, "class"),
        }
    }
}
