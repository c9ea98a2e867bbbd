//! Content scan paths.
//!
//! `content` is an ordered list of glob patterns the scanner walks
//! looking for utility-class tokens. The record only guarantees the
//! patterns are non-empty strings; whether a pattern matches any files
//! is the scanner's non-fatal concern at scan time.

use crate::error::ConfigError;

/// Parses the `content` sequence from a YAML value.
pub(crate) fn parse_content(value: &serde_yaml::Value) -> Result<Vec<String>, ConfigError> {
    let entries = value.as_sequence().ok_or_else(|| ConfigError::Parse {
        message: "'content' must be a sequence of glob patterns".to_string(),
    })?;

    let mut patterns = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let pattern = entry
            .as_str()
            .ok_or_else(|| ConfigError::InvalidContentPattern {
                index,
                message: format!("must be a string, got {:?}", entry),
            })?;
        patterns.push(pattern.to_string());
    }

    Ok(patterns)
}

/// Checks that every pattern is a non-empty string.
pub(crate) fn validate_content(patterns: &[String]) -> Result<(), ConfigError> {
    for (index, pattern) in patterns.iter().enumerate() {
        if pattern.trim().is_empty() {
            return Err(ConfigError::InvalidContentPattern {
                index,
                message: "is empty".to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preserves_order() {
        let value: serde_yaml::Value =
            serde_yaml::from_str(r#"["./a/**/*.html", "./b/**/*.json", "./index.html"]"#).unwrap();
        let patterns = parse_content(&value).unwrap();
        assert_eq!(
            patterns,
            vec!["./a/**/*.html", "./b/**/*.json", "./index.html"]
        );
    }

    #[test]
    fn test_parse_rejects_non_sequence() {
        let value: serde_yaml::Value = serde_yaml::from_str(r#""./index.html""#).unwrap();
        assert!(matches!(
            parse_content(&value),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_non_string_entry() {
        let value: serde_yaml::Value = serde_yaml::from_str(r#"["./index.html", 42]"#).unwrap();
        let err = parse_content(&value).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidContentPattern { index, .. } if index == 1));
    }

    #[test]
    fn test_validate_rejects_empty_pattern() {
        let patterns = vec!["./index.html".to_string(), "  ".to_string()];
        let err = validate_content(&patterns).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidContentPattern { index, .. } if index == 1));
    }

    #[test]
    fn test_validate_allows_empty_list() {
        // Zero patterns means zero scan matches, which is the scanner's
        // non-fatal concern, not a record error.
        validate_content(&[]).unwrap();
    }
}
