//! Theme extensions: additive design tokens layered onto the
//! generator's built-in defaults.
//!
//! Everything under `theme.extend` adds to the base utility set, never
//! replaces it:
//!
//! ```yaml
//! theme:
//!   extend:
//!     animation:
//!       "fade-in": "fadeIn 0.5s ease-out"
//!     keyframes:
//!       fadeIn:
//!         "0%":   { opacity: "0" }
//!         "100%": { opacity: "1" }
//!     fontFamily:
//!       sans: ["Inter", "system-ui", "sans-serif"]
//! ```
//!
//! The animation and keyframes maps are linked by name: each animation
//! shorthand's leading token must resolve to a keyframes entry. The
//! check runs at load time so a dangling reference fails the build
//! instead of silently emitting a broken animation.

pub mod animation;
pub mod keyframes;

use std::collections::HashMap;

use serde::Serialize;

use crate::error::ConfigError;

use animation::AnimationSpec;
use keyframes::KeyframeBlock;

/// The `theme` section of a configuration record.
///
/// Only the additive `extend` block is modeled; gust has no
/// base-theme replacement surface.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ThemeConfig {
    extend: ThemeExtension,
}

impl ThemeConfig {
    /// Returns the additive extension block.
    pub fn extend(&self) -> &ThemeExtension {
        &self.extend
    }

    pub(crate) fn extend_mut(&mut self) -> &mut ThemeExtension {
        &mut self.extend
    }

    /// Parses the `theme` section from a YAML mapping.
    pub(crate) fn parse_mapping(map: &serde_yaml::Mapping) -> Result<Self, ConfigError> {
        let mut theme = ThemeConfig::default();

        for (key, value) in map {
            let key_str = key.as_str().ok_or_else(|| ConfigError::Parse {
                message: format!("non-string key in theme section: {:?}", key),
            })?;

            match key_str {
                "extend" => {
                    let extend_map = value.as_mapping().ok_or_else(|| ConfigError::Parse {
                        message: "'theme.extend' must be a mapping".to_string(),
                    })?;
                    theme.extend = ThemeExtension::parse_mapping(extend_map)?;
                }
                other => {
                    return Err(ConfigError::UnknownField {
                        section: "theme",
                        field: other.to_string(),
                    });
                }
            }
        }

        Ok(theme)
    }

    /// Runs the extension block's validation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.extend.validate()
    }
}

/// The `theme.extend` block: named animation utilities, their keyframe
/// bodies, and named font stacks.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ThemeExtension {
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    animation: HashMap<String, AnimationSpec>,

    #[serde(skip_serializing_if = "HashMap::is_empty")]
    keyframes: HashMap<String, KeyframeBlock>,

    #[serde(rename = "fontFamily", skip_serializing_if = "HashMap::is_empty")]
    font_family: HashMap<String, Vec<String>>,
}

impl ThemeExtension {
    /// Named animation utilities: class-name suffix to parsed shorthand.
    pub fn animation(&self) -> &HashMap<String, AnimationSpec> {
        &self.animation
    }

    /// Keyframe bodies, keyed by the names animations reference.
    pub fn keyframes(&self) -> &HashMap<String, KeyframeBlock> {
        &self.keyframes
    }

    /// Named font stacks, each an ordered list of family names.
    pub fn font_family(&self) -> &HashMap<String, Vec<String>> {
        &self.font_family
    }

    /// Returns true if no extensions are defined.
    pub fn is_empty(&self) -> bool {
        self.animation.is_empty() && self.keyframes.is_empty() && self.font_family.is_empty()
    }

    pub(crate) fn insert_animation(&mut self, name: String, spec: AnimationSpec) {
        self.animation.insert(name, spec);
    }

    pub(crate) fn insert_keyframes(&mut self, name: String, block: KeyframeBlock) {
        self.keyframes.insert(name, block);
    }

    pub(crate) fn insert_font_family(&mut self, name: String, families: Vec<String>) {
        self.font_family.insert(name, families);
    }

    /// Parses the `theme.extend` block from a YAML mapping.
    pub(crate) fn parse_mapping(map: &serde_yaml::Mapping) -> Result<Self, ConfigError> {
        let mut extension = ThemeExtension::default();

        for (key, value) in map {
            let key_str = key.as_str().ok_or_else(|| ConfigError::Parse {
                message: format!("non-string key in theme.extend section: {:?}", key),
            })?;

            match key_str {
                "animation" => {
                    let entries = value.as_mapping().ok_or_else(|| ConfigError::Parse {
                        message: "'theme.extend.animation' must be a mapping".to_string(),
                    })?;
                    for (name, shorthand) in entries {
                        let name = named_key(name, "theme.extend.animation")?;
                        let raw = shorthand.as_str().ok_or_else(|| ConfigError::Parse {
                            message: format!(
                                "animation '{}' must be a shorthand string, got {:?}",
                                name, shorthand
                            ),
                        })?;
                        let spec = AnimationSpec::parse(raw).map_err(|message| {
                            ConfigError::InvalidShorthand {
                                animation: name.clone(),
                                value: raw.to_string(),
                                message,
                            }
                        })?;
                        extension.animation.insert(name, spec);
                    }
                }
                "keyframes" => {
                    let entries = value.as_mapping().ok_or_else(|| ConfigError::Parse {
                        message: "'theme.extend.keyframes' must be a mapping".to_string(),
                    })?;
                    for (name, body) in entries {
                        let name = named_key(name, "theme.extend.keyframes")?;
                        let body = body.as_mapping().ok_or_else(|| ConfigError::Parse {
                            message: format!("keyframes '{}' must be a mapping of frames", name),
                        })?;
                        let block = KeyframeBlock::parse_mapping(body, &name)?;
                        extension.keyframes.insert(name, block);
                    }
                }
                "fontFamily" => {
                    let entries = value.as_mapping().ok_or_else(|| ConfigError::Parse {
                        message: "'theme.extend.fontFamily' must be a mapping".to_string(),
                    })?;
                    for (name, families) in entries {
                        let name = named_key(name, "theme.extend.fontFamily")?;
                        let families = parse_font_stack(&name, families)?;
                        extension.font_family.insert(name, families);
                    }
                }
                other => {
                    return Err(ConfigError::UnknownField {
                        section: "theme.extend",
                        field: other.to_string(),
                    });
                }
            }
        }

        Ok(extension)
    }

    /// Checks referential integrity and every keyframes body.
    ///
    /// Each animation's keyframes name must have a matching entry in
    /// the keyframes map; the reverse is not required (see
    /// [`unreferenced_keyframes`](ThemeExtension::unreferenced_keyframes)).
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, spec) in &self.animation {
            if !self.keyframes.contains_key(spec.keyframes()) {
                return Err(ConfigError::DanglingKeyframes {
                    animation: name.clone(),
                    keyframes: spec.keyframes().to_string(),
                });
            }
        }

        for (name, block) in &self.keyframes {
            block.validate(name)?;
        }

        Ok(())
    }

    /// Returns the keyframes entries no animation references, sorted by
    /// name.
    ///
    /// Not an error: like a content pattern matching zero files, this is
    /// a non-fatal condition the consumer may want to log.
    pub fn unreferenced_keyframes(&self) -> Vec<&str> {
        let mut unused: Vec<&str> = self
            .keyframes
            .keys()
            .filter(|name| {
                !self
                    .animation
                    .values()
                    .any(|spec| spec.keyframes() == name.as_str())
            })
            .map(|name| name.as_str())
            .collect();
        unused.sort_unstable();
        unused
    }
}

/// Extracts a string key from a named map, erroring with the section name.
fn named_key(key: &serde_yaml::Value, section: &str) -> Result<String, ConfigError> {
    key.as_str()
        .map(|s| s.to_string())
        .ok_or_else(|| ConfigError::Parse {
            message: format!("non-string key in {} section: {:?}", section, key),
        })
}

/// Parses a font stack: a sequence of family names, or a single name.
fn parse_font_stack(name: &str, value: &serde_yaml::Value) -> Result<Vec<String>, ConfigError> {
    match value {
        serde_yaml::Value::String(family) => Ok(vec![family.clone()]),
        serde_yaml::Value::Sequence(families) => families
            .iter()
            .map(|family| {
                family
                    .as_str()
                    .map(|s| s.to_string())
                    .ok_or_else(|| ConfigError::Parse {
                        message: format!(
                            "fontFamily '{}' entries must be strings, got {:?}",
                            name, family
                        ),
                    })
            })
            .collect(),
        other => Err(ConfigError::Parse {
            message: format!(
                "fontFamily '{}' must be a string or sequence of strings, got {:?}",
                name, other
            ),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_extend(yaml: &str) -> Result<ThemeExtension, ConfigError> {
        let value: serde_yaml::Value = serde_yaml::from_str(yaml).unwrap();
        ThemeExtension::parse_mapping(value.as_mapping().unwrap())
    }

    // =========================================================================
    // Parsing tests
    // =========================================================================

    #[test]
    fn test_parse_animation_and_keyframes() {
        let extension = parse_extend(
            r#"
            animation:
                "fade-in": "fadeIn 0.5s ease-out"
            keyframes:
                fadeIn:
                    "0%": { opacity: "0" }
                    "100%": { opacity: "1" }
            "#,
        )
        .unwrap();

        let spec = extension.animation().get("fade-in").unwrap();
        assert_eq!(spec.keyframes(), "fadeIn");
        assert_eq!(extension.keyframes().get("fadeIn").unwrap().len(), 2);
        extension.validate().unwrap();
    }

    #[test]
    fn test_parse_font_family() {
        let extension = parse_extend(
            r#"
            fontFamily:
                sans: ["Inter", "system-ui", "sans-serif"]
                mono: "JetBrains Mono"
            "#,
        )
        .unwrap();

        assert_eq!(
            extension.font_family().get("sans").unwrap(),
            &["Inter", "system-ui", "sans-serif"]
        );
        assert_eq!(
            extension.font_family().get("mono").unwrap(),
            &["JetBrains Mono"]
        );
    }

    #[test]
    fn test_parse_unknown_extension_key() {
        let err = parse_extend("spacing: {}").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownField { section, field }
            if section == "theme.extend" && field == "spacing"));
    }

    #[test]
    fn test_parse_bad_shorthand_names_animation() {
        let err = parse_extend(
            r#"
            animation:
                "fade-in": "0.5s ease-out"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidShorthand { animation, .. }
            if animation == "fade-in"));
    }

    #[test]
    fn test_parse_non_string_shorthand() {
        let err = parse_extend(
            r#"
            animation:
                "fade-in": 500
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    // =========================================================================
    // Referential integrity tests
    // =========================================================================

    #[test]
    fn test_validate_dangling_reference() {
        let extension = parse_extend(
            r#"
            animation:
                "fade-in": "fadeIn 0.5s ease-out"
            "#,
        )
        .unwrap();

        let err = extension.validate().unwrap_err();
        assert!(matches!(err, ConfigError::DanglingKeyframes { animation, keyframes }
            if animation == "fade-in" && keyframes == "fadeIn"));
    }

    #[test]
    fn test_unreferenced_keyframes() {
        let extension = parse_extend(
            r#"
            animation:
                "fade-in": "fadeIn 0.5s ease-out"
            keyframes:
                fadeIn:
                    "0%": { opacity: "0" }
                slideUp:
                    "0%": { opacity: "0" }
                bounce:
                    "0%": { opacity: "0" }
            "#,
        )
        .unwrap();

        extension.validate().unwrap();
        assert_eq!(extension.unreferenced_keyframes(), vec!["bounce", "slideUp"]);
    }

    #[test]
    fn test_no_unreferenced_keyframes() {
        let extension = parse_extend(
            r#"
            animation:
                "fade-in": "fadeIn 0.5s ease-out"
            keyframes:
                fadeIn:
                    "0%": { opacity: "0" }
            "#,
        )
        .unwrap();
        assert!(extension.unreferenced_keyframes().is_empty());
    }

    #[test]
    fn test_empty_extension() {
        let extension = ThemeExtension::default();
        assert!(extension.is_empty());
        extension.validate().unwrap();
    }
}
