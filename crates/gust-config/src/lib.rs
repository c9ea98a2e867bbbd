//! Typed configuration layer for the gust utility-CSS generator.
//!
//! gust scans a project's source files for utility-class tokens and
//! emits matching CSS rules at build time. This crate owns the
//! configuration record that drives a build: the content scan paths,
//! the dark-mode strategy, and the theme extensions (named animations
//! with their keyframe bodies, plus font stacks). The scanning and CSS
//! emission live in the generation engine, which consumes a validated
//! record from here.
//!
//! # Design Overview
//!
//! The record is pure data with a fail-loud loading path:
//!
//! - **Load**: YAML or JSON source is parsed into a value tree and
//!   walked field by field, so errors carry the offending field,
//!   entry, or selector by name.
//! - **Validate**: every structural invariant is checked before the
//!   record is handed out: the `darkMode` enum, animation shorthand
//!   syntax, keyframe selector ranges, and the referential integrity
//!   between the `animation` and `keyframes` maps. A dangling
//!   reference fails the build at load time rather than emitting a
//!   broken animation at render time.
//! - **Read**: after construction the record is immutable; the engine
//!   reads it through accessors. Each build invocation loads a fresh
//!   copy.
//!
//! # Example
//!
//! ```rust
//! use gust_config::{Config, DarkModeScope};
//!
//! let config = Config::from_yaml(r#"
//! content:
//!   - "./templates/**/*.html"
//!   - "./index.html"
//!
//! darkMode: media
//!
//! theme:
//!   extend:
//!     animation:
//!       "fade-in": "fadeIn 0.5s ease-out"
//!     keyframes:
//!       fadeIn:
//!         "0%":   { opacity: "0" }
//!         "100%": { opacity: "1" }
//! "#).unwrap();
//!
//! // The scanner walks these patterns in order.
//! assert_eq!(config.content().len(), 2);
//!
//! // Dark variants follow the OS color mode.
//! assert_eq!(
//!     config.dark_mode().scope(),
//!     DarkModeScope::MediaCondition("(prefers-color-scheme: dark)"),
//! );
//!
//! // The fade-in utility resolves to its keyframes.
//! let fade_in = config.animation().get("fade-in").unwrap();
//! assert!(config.keyframes().contains_key(fade_in.keyframes()));
//! ```
//!
//! # Module Structure
//!
//! - [`config`]: the record itself, dark-mode strategy, file loading
//! - [`theme`]: theme extensions (animation shorthands and keyframes)
//! - [`error`]: the error taxonomy for load-time failures

pub mod config;
pub mod error;
pub mod theme;

pub use config::dark_mode::{DarkMode, DarkModeScope};
pub use config::loader::{CONFIG_BASENAME, CONFIG_EXTENSIONS};
pub use config::Config;
pub use error::{ConfigError, Result};
pub use theme::animation::{AnimationSpec, Iteration, TimeUnit, TimeValue};
pub use theme::keyframes::{Declarations, KeyframeBlock, KeyframeSelector};
pub use theme::{ThemeConfig, ThemeExtension};
