//! Animation shorthand parsing.
//!
//! An animation utility maps a class-name suffix to a CSS animation
//! shorthand whose first token names a keyframes entry:
//!
//! ```yaml
//! animation:
//!   "fade-in":  "fadeIn 0.5s ease-out"
//!   "slide-up": "slideUp 0.5s ease-out"
//!   "spin":     "spin 1s linear infinite"
//! ```
//!
//! The shorthand grammar is positional where CSS is ambiguous: the
//! leading token is always the keyframes name, the first time value is
//! the duration and the second the delay. Timing functions, iteration
//! counts, and direction/fill/play-state keywords may appear in any
//! order after the name.

use std::fmt;

use serde::{Serialize, Serializer};

/// Direction, fill-mode, and play-state keywords accepted in a shorthand.
const MODIFIER_KEYWORDS: &[&str] = &[
    "normal",
    "reverse",
    "alternate",
    "alternate-reverse",
    "none",
    "forwards",
    "backwards",
    "both",
    "running",
    "paused",
];

/// Timing-function keywords accepted in a shorthand.
const TIMING_KEYWORDS: &[&str] = &[
    "linear",
    "ease",
    "ease-in",
    "ease-out",
    "ease-in-out",
    "step-start",
    "step-end",
];

/// Second-argument keywords accepted by `steps()`.
const STEP_POSITIONS: &[&str] = &[
    "jump-start",
    "jump-end",
    "jump-none",
    "jump-both",
    "start",
    "end",
];

/// A CSS time value (`0.5s`, `250ms`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeValue {
    value: f64,
    unit: TimeUnit,
}

/// Unit of a [`TimeValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Seconds,
    Milliseconds,
}

impl TimeValue {
    /// Creates a time value in seconds.
    pub fn secs(value: f64) -> Self {
        Self {
            value,
            unit: TimeUnit::Seconds,
        }
    }

    /// Creates a time value in milliseconds.
    pub fn millis(value: f64) -> Self {
        Self {
            value,
            unit: TimeUnit::Milliseconds,
        }
    }

    /// Returns the value in seconds regardless of unit.
    pub fn as_secs(&self) -> f64 {
        match self.unit {
            TimeUnit::Seconds => self.value,
            TimeUnit::Milliseconds => self.value / 1000.0,
        }
    }

    /// Returns the raw numeric component.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns the unit the value was written in.
    pub fn unit(&self) -> TimeUnit {
        self.unit
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = match self.unit {
            TimeUnit::Seconds => "s",
            TimeUnit::Milliseconds => "ms",
        };
        write!(f, "{}{}", self.value, suffix)
    }
}

/// Iteration count of an animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Iteration {
    /// Run a fixed number of times (fractional counts are valid CSS).
    Count(f64),
    /// Loop forever.
    Infinite,
}

impl fmt::Display for Iteration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Iteration::Count(n) => write!(f, "{}", n),
            Iteration::Infinite => write!(f, "infinite"),
        }
    }
}

/// Parsed form of a CSS animation shorthand.
///
/// The referenced keyframes name is the load-bearing part: validation
/// checks it against the `keyframes` map so a dangling reference fails
/// at load time instead of producing a broken animation at render time.
///
/// # Example
///
/// ```rust
/// use gust_config::AnimationSpec;
///
/// let spec = AnimationSpec::parse("fadeIn 0.5s ease-out").unwrap();
/// assert_eq!(spec.keyframes(), "fadeIn");
/// assert_eq!(spec.duration().unwrap().as_secs(), 0.5);
/// assert_eq!(spec.timing_function(), Some("ease-out"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationSpec {
    keyframes: String,
    duration: Option<TimeValue>,
    delay: Option<TimeValue>,
    timing_function: Option<String>,
    iteration: Option<Iteration>,
    modifiers: Vec<String>,
}

impl AnimationSpec {
    /// Creates a spec referencing the given keyframes, with no other
    /// components set.
    pub fn new(keyframes: impl Into<String>) -> Self {
        Self {
            keyframes: keyframes.into(),
            duration: None,
            delay: None,
            timing_function: None,
            iteration: None,
            modifiers: Vec::new(),
        }
    }

    /// Sets the duration, returning `self` for chaining.
    pub fn with_duration(mut self, duration: TimeValue) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Sets the delay, returning `self` for chaining.
    pub fn with_delay(mut self, delay: TimeValue) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Sets the timing function, returning `self` for chaining.
    ///
    /// The string is emitted verbatim; [`AnimationSpec::parse`] is
    /// stricter and only accepts known keywords, `cubic-bezier()`, and
    /// `steps()`.
    pub fn with_timing(mut self, timing: impl Into<String>) -> Self {
        self.timing_function = Some(timing.into());
        self
    }

    /// Sets the iteration count, returning `self` for chaining.
    pub fn with_iteration(mut self, iteration: Iteration) -> Self {
        self.iteration = Some(iteration);
        self
    }

    /// Parses an animation shorthand string.
    ///
    /// The first token must be a CSS identifier naming a keyframes
    /// entry. Remaining tokens are classified as time values (duration,
    /// then delay), a timing function, an iteration count, or
    /// direction/fill/play-state keywords.
    pub fn parse(s: &str) -> Result<Self, String> {
        let tokens = split_tokens(s)?;

        let mut iter = tokens.into_iter();
        let keyframes = match iter.next() {
            Some(first) => first,
            None => return Err("empty animation shorthand".to_string()),
        };
        if !is_css_ident(&keyframes) {
            return Err(format!(
                "expected a keyframes name as the first token, got '{}'",
                keyframes
            ));
        }

        let mut spec = AnimationSpec::new(keyframes);

        for token in iter {
            if let Some(time) = parse_time(&token)? {
                if spec.duration.is_none() {
                    spec.duration = Some(time);
                } else if spec.delay.is_none() {
                    spec.delay = Some(time);
                } else {
                    return Err("more than two time values".to_string());
                }
            } else if is_timing_function(&token)? {
                if spec.timing_function.is_some() {
                    return Err("more than one timing function".to_string());
                }
                spec.timing_function = Some(token);
            } else if token == "infinite" {
                if spec.iteration.is_some() {
                    return Err("more than one iteration count".to_string());
                }
                spec.iteration = Some(Iteration::Infinite);
            } else if let Ok(count) = token.parse::<f64>() {
                if !count.is_finite() || count < 0.0 {
                    return Err(format!("invalid iteration count '{}'", token));
                }
                if spec.iteration.is_some() {
                    return Err("more than one iteration count".to_string());
                }
                spec.iteration = Some(Iteration::Count(count));
            } else if MODIFIER_KEYWORDS.contains(&token.as_str()) {
                spec.modifiers.push(token);
            } else {
                return Err(format!("unexpected token '{}'", token));
            }
        }

        Ok(spec)
    }

    /// Name of the keyframes entry this animation references.
    pub fn keyframes(&self) -> &str {
        &self.keyframes
    }

    /// Animation duration, if one was given.
    pub fn duration(&self) -> Option<TimeValue> {
        self.duration
    }

    /// Animation delay, if one was given.
    pub fn delay(&self) -> Option<TimeValue> {
        self.delay
    }

    /// Timing function, if one was given.
    pub fn timing_function(&self) -> Option<&str> {
        self.timing_function.as_deref()
    }

    /// Iteration count, if one was given.
    pub fn iteration(&self) -> Option<Iteration> {
        self.iteration
    }

    /// Direction/fill/play-state keywords in source order.
    pub fn modifiers(&self) -> &[String] {
        &self.modifiers
    }
}

impl fmt::Display for AnimationSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyframes)?;
        if let Some(duration) = &self.duration {
            write!(f, " {}", duration)?;
        } else if self.delay.is_some() {
            // A delay needs a duration before it to keep its slot.
            write!(f, " 0s")?;
        }
        if let Some(delay) = &self.delay {
            write!(f, " {}", delay)?;
        }
        if let Some(timing) = &self.timing_function {
            write!(f, " {}", timing)?;
        }
        if let Some(iteration) = &self.iteration {
            write!(f, " {}", iteration)?;
        }
        for modifier in &self.modifiers {
            write!(f, " {}", modifier)?;
        }
        Ok(())
    }
}

impl Serialize for AnimationSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Splits a shorthand on whitespace, keeping parenthesized groups
/// (`cubic-bezier(0.4, 0, 0.6, 1)`) as single tokens.
fn split_tokens(s: &str) -> Result<Vec<String>, String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;

    for c in s.chars() {
        match c {
            '(' => {
                depth += 1;
                current.push(c);
            }
            ')' => {
                if depth == 0 {
                    return Err("unbalanced ')'".to_string());
                }
                depth -= 1;
                current.push(c);
            }
            c if c.is_whitespace() && depth == 0 => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            _ => current.push(c),
        }
    }

    if depth != 0 {
        return Err("unbalanced '('".to_string());
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    Ok(tokens)
}

/// Tries to read a token as a time value.
///
/// Returns `Ok(None)` for tokens that are not times at all (so keyword
/// tokens ending in `s`, like `forwards`, fall through to the keyword
/// checks). A numeric time that is negative or non-finite is an error.
fn parse_time(token: &str) -> Result<Option<TimeValue>, String> {
    let (number, unit) = if let Some(rest) = token.strip_suffix("ms") {
        (rest, TimeUnit::Milliseconds)
    } else if let Some(rest) = token.strip_suffix('s') {
        (rest, TimeUnit::Seconds)
    } else {
        return Ok(None);
    };

    let value: f64 = match number.parse() {
        Ok(v) => v,
        Err(_) => return Ok(None),
    };
    if !value.is_finite() {
        return Err(format!("time value '{}' is not finite", token));
    }
    if value < 0.0 {
        return Err(format!("time value '{}' must not be negative", token));
    }

    Ok(Some(TimeValue { value, unit }))
}

/// Checks whether a token is a timing function, validating the argument
/// lists of the functional forms.
fn is_timing_function(token: &str) -> Result<bool, String> {
    if TIMING_KEYWORDS.contains(&token) {
        return Ok(true);
    }

    if let Some(inner) = token
        .strip_prefix("cubic-bezier(")
        .and_then(|t| t.strip_suffix(')'))
    {
        let parts: Vec<&str> = inner.split(',').map(|p| p.trim()).collect();
        if parts.len() != 4 {
            return Err(format!(
                "cubic-bezier() requires exactly 4 components, got {}",
                parts.len()
            ));
        }
        for part in parts {
            part.parse::<f64>()
                .map_err(|_| format!("invalid cubic-bezier component '{}'", part))?;
        }
        return Ok(true);
    }

    if let Some(inner) = token
        .strip_prefix("steps(")
        .and_then(|t| t.strip_suffix(')'))
    {
        let parts: Vec<&str> = inner.split(',').map(|p| p.trim()).collect();
        match parts.as_slice() {
            [count] | [count, _] => {
                let n: i64 = count
                    .parse()
                    .map_err(|_| format!("invalid steps() count '{}'", count))?;
                if n <= 0 {
                    return Err(format!("steps() count must be positive, got {}", n));
                }
            }
            _ => {
                return Err(format!(
                    "steps() requires 1 or 2 components, got {}",
                    parts.len()
                ));
            }
        }
        if let [_, position] = parts.as_slice() {
            if !STEP_POSITIONS.contains(position) {
                return Err(format!("invalid steps() position '{}'", position));
            }
        }
        return Ok(true);
    }

    Ok(false)
}

/// Checks whether a string is a plausible CSS identifier.
fn is_css_ident(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '-' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Parsing tests
    // =========================================================================

    #[test]
    fn test_parse_name_only() {
        let spec = AnimationSpec::parse("spin").unwrap();
        assert_eq!(spec.keyframes(), "spin");
        assert!(spec.duration().is_none());
        assert!(spec.timing_function().is_none());
    }

    #[test]
    fn test_parse_name_duration_timing() {
        let spec = AnimationSpec::parse("fadeIn 0.5s ease-out").unwrap();
        assert_eq!(spec.keyframes(), "fadeIn");
        assert_eq!(spec.duration().unwrap().as_secs(), 0.5);
        assert_eq!(spec.timing_function(), Some("ease-out"));
        assert!(spec.delay().is_none());
        assert!(spec.iteration().is_none());
    }

    #[test]
    fn test_parse_milliseconds() {
        let spec = AnimationSpec::parse("pulse 250ms linear").unwrap();
        assert_eq!(spec.duration().unwrap().as_secs(), 0.25);
        assert_eq!(spec.duration().unwrap().unit(), TimeUnit::Milliseconds);
    }

    #[test]
    fn test_parse_duration_then_delay() {
        let spec = AnimationSpec::parse("slideUp 0.5s 0.2s ease-out").unwrap();
        assert_eq!(spec.duration().unwrap().as_secs(), 0.5);
        assert_eq!(spec.delay().unwrap().as_secs(), 0.2);
    }

    #[test]
    fn test_parse_infinite_iteration() {
        let spec = AnimationSpec::parse("spin 1s linear infinite").unwrap();
        assert_eq!(spec.iteration(), Some(Iteration::Infinite));
    }

    #[test]
    fn test_parse_numeric_iteration() {
        let spec = AnimationSpec::parse("bounce 1s 3").unwrap();
        assert_eq!(spec.iteration(), Some(Iteration::Count(3.0)));
    }

    #[test]
    fn test_parse_cubic_bezier_with_spaces() {
        let spec = AnimationSpec::parse("pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite").unwrap();
        assert_eq!(spec.timing_function(), Some("cubic-bezier(0.4, 0, 0.6, 1)"));
        assert_eq!(spec.iteration(), Some(Iteration::Infinite));
    }

    #[test]
    fn test_parse_steps() {
        let spec = AnimationSpec::parse("blink 1s steps(2, jump-start)").unwrap();
        assert_eq!(spec.timing_function(), Some("steps(2, jump-start)"));
    }

    #[test]
    fn test_parse_modifiers() {
        let spec = AnimationSpec::parse("slideUp 0.5s ease-out forwards alternate").unwrap();
        assert_eq!(spec.modifiers(), &["forwards", "alternate"]);
    }

    // =========================================================================
    // Error tests
    // =========================================================================

    #[test]
    fn test_parse_empty_error() {
        assert!(AnimationSpec::parse("").is_err());
        assert!(AnimationSpec::parse("   ").is_err());
    }

    #[test]
    fn test_parse_leading_time_error() {
        // The keyframes name must come first.
        assert!(AnimationSpec::parse("0.5s fadeIn").is_err());
    }

    #[test]
    fn test_parse_three_times_error() {
        let err = AnimationSpec::parse("fadeIn 1s 2s 3s").unwrap_err();
        assert!(err.contains("time values"));
    }

    #[test]
    fn test_parse_negative_time_error() {
        assert!(AnimationSpec::parse("fadeIn -1s").is_err());
    }

    #[test]
    fn test_parse_duplicate_timing_error() {
        assert!(AnimationSpec::parse("fadeIn ease-in ease-out").is_err());
    }

    #[test]
    fn test_parse_unknown_token_error() {
        let err = AnimationSpec::parse("fadeIn 0.5s sideways").unwrap_err();
        assert!(err.contains("sideways"));
    }

    #[test]
    fn test_parse_bad_cubic_bezier_error() {
        assert!(AnimationSpec::parse("fadeIn cubic-bezier(1, 2)").is_err());
        assert!(AnimationSpec::parse("fadeIn cubic-bezier(a, b, c, d)").is_err());
    }

    #[test]
    fn test_parse_bad_steps_error() {
        assert!(AnimationSpec::parse("fadeIn steps(0)").is_err());
        assert!(AnimationSpec::parse("fadeIn steps(2, diagonal)").is_err());
    }

    #[test]
    fn test_parse_unbalanced_parens_error() {
        assert!(AnimationSpec::parse("fadeIn cubic-bezier(0.4, 0, 0.6, 1").is_err());
        assert!(AnimationSpec::parse("fadeIn 0.5s)").is_err());
    }

    // =========================================================================
    // Display and round-trip tests
    // =========================================================================

    #[test]
    fn test_display_round_trip() {
        for shorthand in [
            "fadeIn 0.5s ease-out",
            "slideUp 0.5s 0.2s ease-out",
            "spin 1s linear infinite",
            "pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite",
            "slideUp 0.5s ease-out forwards",
        ] {
            let spec = AnimationSpec::parse(shorthand).unwrap();
            assert_eq!(spec.to_string(), shorthand);
            assert_eq!(AnimationSpec::parse(&spec.to_string()).unwrap(), spec);
        }
    }

    #[test]
    fn test_display_inserts_duration_before_delay() {
        let spec = AnimationSpec::new("fadeIn").with_delay(TimeValue::secs(0.2));
        let rendered = spec.to_string();
        assert_eq!(rendered, "fadeIn 0s 0.2s");
        let reparsed = AnimationSpec::parse(&rendered).unwrap();
        assert_eq!(reparsed.delay().unwrap().as_secs(), 0.2);
    }

    #[test]
    fn test_builder_matches_parse() {
        let built = AnimationSpec::new("fadeIn")
            .with_duration(TimeValue::secs(0.5))
            .with_timing("ease-out");
        let parsed = AnimationSpec::parse("fadeIn 0.5s ease-out").unwrap();
        assert_eq!(built, parsed);
    }

    #[test]
    fn test_time_value_display() {
        assert_eq!(TimeValue::secs(0.5).to_string(), "0.5s");
        assert_eq!(TimeValue::secs(2.0).to_string(), "2s");
        assert_eq!(TimeValue::millis(250.0).to_string(), "250ms");
    }
}
