//! Keyframe bodies referenced by animation shorthands.
//!
//! A keyframes entry is a set of style snapshots at points along the
//! animation timeline:
//!
//! ```yaml
//! keyframes:
//!   fadeIn:
//!     "0%":   { opacity: "0", transform: "translateY(8px)" }
//!     "100%": { opacity: "1", transform: "translateY(0)" }
//! ```
//!
//! Selector keys are kept verbatim as written in the source;
//! [`KeyframeSelector`] is the parsed, validated view. `from` and `to`
//! are the literal markers for 0% and 100%.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::error::ConfigError;

/// CSS declarations of one keyframe: property name to value.
pub type Declarations = HashMap<String, String>;

/// Parsed view of a keyframe selector key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyframeSelector {
    /// The literal `from` marker (equivalent to 0%).
    From,
    /// The literal `to` marker (equivalent to 100%).
    To,
    /// A percentage along the timeline, in [0, 100].
    Percent(f64),
}

impl KeyframeSelector {
    /// Parses a selector key.
    ///
    /// Accepts `from`, `to`, or a percentage string whose numeric part
    /// lies in [0, 100].
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();
        match s {
            "from" => Ok(KeyframeSelector::From),
            "to" => Ok(KeyframeSelector::To),
            _ => {
                let number = s
                    .strip_suffix('%')
                    .ok_or_else(|| "expected 'from', 'to', or a percentage".to_string())?;
                let value: f64 = number
                    .trim()
                    .parse()
                    .map_err(|_| format!("'{}' is not a number", number))?;
                if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                    return Err(format!("percentage {} out of range (0-100)", number.trim()));
                }
                Ok(KeyframeSelector::Percent(value))
            }
        }
    }

    /// Timeline position in percent, resolving `from` to 0 and `to` to 100.
    pub fn position(&self) -> f64 {
        match self {
            KeyframeSelector::From => 0.0,
            KeyframeSelector::To => 100.0,
            KeyframeSelector::Percent(p) => *p,
        }
    }
}

impl fmt::Display for KeyframeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyframeSelector::From => write!(f, "from"),
            KeyframeSelector::To => write!(f, "to"),
            KeyframeSelector::Percent(p) => write!(f, "{}%", p),
        }
    }
}

/// One keyframes body: selector key to CSS declarations.
///
/// Selector keys are stored verbatim; [`KeyframeBlock::validate`]
/// checks every key and declaration, and the record constructors run it
/// before a block is accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct KeyframeBlock {
    frames: HashMap<String, Declarations>,
}

impl KeyframeBlock {
    /// Creates an empty block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a frame, returning `self` for chaining.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gust_config::KeyframeBlock;
    ///
    /// let block = KeyframeBlock::new()
    ///     .frame("0%", &[("opacity", "0"), ("transform", "translateY(8px)")])
    ///     .frame("100%", &[("opacity", "1"), ("transform", "translateY(0)")]);
    /// assert_eq!(block.len(), 2);
    /// ```
    pub fn frame(mut self, selector: impl Into<String>, declarations: &[(&str, &str)]) -> Self {
        let body = declarations
            .iter()
            .map(|(property, value)| (property.to_string(), value.to_string()))
            .collect();
        self.frames.insert(selector.into(), body);
        self
    }

    /// Parses a block from a YAML mapping of selector to declarations.
    ///
    /// Scalar declaration values (numbers, booleans) are coerced to
    /// strings, matching how they are written in loosely typed sources.
    pub(crate) fn parse_mapping(
        map: &serde_yaml::Mapping,
        keyframes_name: &str,
    ) -> Result<Self, ConfigError> {
        let mut block = KeyframeBlock::new();

        for (key, value) in map {
            let selector = key
                .as_str()
                .ok_or_else(|| ConfigError::Parse {
                    message: format!(
                        "selector key in keyframes '{}' must be a string, got {:?}",
                        keyframes_name, key
                    ),
                })?
                .to_string();

            let body = value.as_mapping().ok_or_else(|| ConfigError::Parse {
                message: format!(
                    "frame '{}' in keyframes '{}' must be a mapping of declarations",
                    selector, keyframes_name
                ),
            })?;

            let mut declarations = Declarations::new();
            for (property, value) in body {
                let property = property
                    .as_str()
                    .ok_or_else(|| ConfigError::Parse {
                        message: format!(
                            "property key at '{}' in keyframes '{}' must be a string, got {:?}",
                            selector, keyframes_name, property
                        ),
                    })?
                    .to_string();

                let value = scalar_to_string(value).ok_or_else(|| {
                    ConfigError::InvalidDeclaration {
                        keyframes: keyframes_name.to_string(),
                        selector: selector.clone(),
                        property: property.clone(),
                        message: "value must be a scalar".to_string(),
                    }
                })?;

                declarations.insert(property, value);
            }

            block.frames.insert(selector, declarations);
        }

        block.validate(keyframes_name)?;
        Ok(block)
    }

    /// Checks every selector key and declaration in the block.
    pub fn validate(&self, keyframes_name: &str) -> Result<(), ConfigError> {
        for (selector, declarations) in &self.frames {
            KeyframeSelector::parse(selector).map_err(|message| ConfigError::InvalidSelector {
                keyframes: keyframes_name.to_string(),
                selector: selector.clone(),
                message,
            })?;

            for (property, value) in declarations {
                if !is_css_property(property) {
                    return Err(ConfigError::InvalidDeclaration {
                        keyframes: keyframes_name.to_string(),
                        selector: selector.clone(),
                        property: property.clone(),
                        message: "property is not a CSS identifier".to_string(),
                    });
                }
                if value.trim().is_empty() {
                    return Err(ConfigError::InvalidDeclaration {
                        keyframes: keyframes_name.to_string(),
                        selector: selector.clone(),
                        property: property.clone(),
                        message: "value is empty".to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Returns the frames keyed by their verbatim selector strings.
    pub fn frames(&self) -> &HashMap<String, Declarations> {
        &self.frames
    }

    /// Returns the declarations for a selector key, if present.
    pub fn get(&self, selector: &str) -> Option<&Declarations> {
        self.frames.get(selector)
    }

    /// Returns frames sorted by timeline position, for the consumer's
    /// emission pass.
    ///
    /// Selector keys that fail to parse are skipped; [`validate`]
    /// rejects them up front, so a validated block loses nothing here.
    ///
    /// [`validate`]: KeyframeBlock::validate
    pub fn ordered_frames(&self) -> Vec<(KeyframeSelector, &Declarations)> {
        let mut frames: Vec<(KeyframeSelector, &Declarations)> = self
            .frames
            .iter()
            .filter_map(|(selector, declarations)| {
                KeyframeSelector::parse(selector)
                    .ok()
                    .map(|parsed| (parsed, declarations))
            })
            .collect();
        frames.sort_by(|a, b| a.0.position().total_cmp(&b.0.position()));
        frames
    }

    /// Returns the number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Returns true if the block has no frames.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// Coerces a scalar YAML value to its string form.
fn scalar_to_string(value: &serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Checks whether a string is a plausible CSS property name.
///
/// Custom properties (`--fade-distance`) and vendor prefixes
/// (`-webkit-transform`) are allowed.
fn is_css_property(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '-' || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
