//! Annotation configuration
//!
//! This module defines the TOML schema, the built-in defaults and
//! validation of the delimiter grammar inputs.
//!
//! ```toml
//! [scope]
//! excluded = ["SCRIPT", "STYLE", "CODE", "PRE"]
//!
//! [delimiters]
//! word_opening = ["{", "｛"]
//! word_closing = ["}", "｝"]
//! reading_opening = ["（", "(", "【"]
//! reading_closing = ["）", ")", "】"]
//! reading_segment = [".", "、", "・"]
//!
//! [alignment]
//! per_character = true
//! honorifics = ["お", "ご"]
//! ```

mod lenient;

use crate::error::{ConfigError, DelimiterRole};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Root configuration, immutable once handed to the engine
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RubyConfig {
    pub scope: ScopeConfig,
    pub delimiters: DelimiterSet,
    pub alignment: AlignmentConfig,
}

/// Where annotation applies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScopeConfig {
    /// Opaque handle for the traversal root; the engine never reads it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,
    /// Scope labels whose fragments are never annotated
    pub excluded: Vec<String>,
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self {
            root: None,
            excluded: ["SCRIPT", "STYLE", "CODE", "PRE"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Delimiter characters of the pair grammar
///
/// No character may appear in more than one of the four boundary sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DelimiterSet {
    pub word_opening: Vec<char>,
    pub word_closing: Vec<char>,
    pub reading_opening: Vec<char>,
    pub reading_closing: Vec<char>,
    /// Separators between morphemes inside a reading
    pub reading_segment: Vec<char>,
}

impl Default for DelimiterSet {
    fn default() -> Self {
        Self {
            word_opening: vec!['{', '｛'],
            word_closing: vec!['}', '｝'],
            reading_opening: vec!['（', '(', '【'],
            reading_closing: vec!['）', ')', '】'],
            reading_segment: vec!['.', '、', '・'],
        }
    }
}

impl DelimiterSet {
    /// ASCII-only variant: `[word]<reading>`
    pub fn ascii_brackets() -> Self {
        Self {
            word_opening: vec!['['],
            word_closing: vec![']'],
            reading_opening: vec!['<'],
            reading_closing: vec!['>'],
            ..Self::default()
        }
    }

    /// Characters configured for a boundary role
    pub fn boundary(&self, role: DelimiterRole) -> &[char] {
        match role {
            DelimiterRole::WordOpening => &self.word_opening,
            DelimiterRole::WordClosing => &self.word_closing,
            DelimiterRole::ReadingOpening => &self.reading_opening,
            DelimiterRole::ReadingClosing => &self.reading_closing,
        }
    }

    /// Check that every boundary set is non-empty and that the sets are disjoint
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen: HashMap<char, DelimiterRole> = HashMap::new();

        for role in DelimiterRole::ALL {
            let chars = self.boundary(role);
            if chars.is_empty() {
                return Err(ConfigError::EmptyDelimiterSet(role));
            }

            for &ch in chars {
                match seen.get(&ch) {
                    Some(&first) if first != role => {
                        return Err(ConfigError::ConflictingDelimiter {
                            ch,
                            first,
                            second: role,
                        });
                    }
                    Some(_) => {}
                    None => {
                        seen.insert(ch, role);
                    }
                }
            }
        }

        Ok(())
    }
}

/// Alignment policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AlignmentConfig {
    /// Allow one reading unit per word character
    pub per_character: bool,
    /// Politeness prefixes that may lead a word or a reading
    pub honorifics: Vec<char>,
}

impl Default for AlignmentConfig {
    fn default() -> Self {
        Self {
            per_character: true,
            honorifics: vec!['お', 'ご'],
        }
    }
}

impl RubyConfig {
    /// Default configuration with `[word]<reading>` delimiters
    pub fn ascii_brackets() -> Self {
        Self {
            delimiters: DelimiterSet::ascii_brackets(),
            ..Self::default()
        }
    }

    /// Parse a configuration strictly
    ///
    /// Unknown keys and mistyped values are errors. Use
    /// [`RubyConfig::from_toml_lenient`] for user files that should degrade
    /// to defaults instead.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: RubyConfig =
            toml::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a configuration, falling back to defaults for unusable entries
    pub fn from_toml_lenient(source: &str) -> Result<Self, ConfigError> {
        let config = lenient::parse(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file leniently
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        log::debug!("loading configuration from {}", path.display());
        Self::from_toml_lenient(&content)
    }

    /// Serialize to TOML
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.delimiters.validate()
    }

    /// Whether fragments under this scope label are skipped
    pub fn is_excluded_scope(&self, scope: &str) -> bool {
        self.scope
            .excluded
            .iter()
            .any(|excluded| excluded.eq_ignore_ascii_case(scope))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RubyConfig::default();
        assert_eq!(config.delimiters.word_opening, vec!['{', '｛']);
        assert_eq!(config.delimiters.reading_closing, vec!['）', ')', '】']);
        assert_eq!(config.delimiters.reading_segment, vec!['.', '、', '・']);
        assert!(config.alignment.per_character);
        assert_eq!(config.alignment.honorifics, vec!['お', 'ご']);
        assert!(config.scope.root.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_strict_parse() {
        let toml_str = r#"
            [scope]
            root = "article"
            excluded = ["CODE"]

            [delimiters]
            word_opening = ["["]
            word_closing = ["]"]
            reading_opening = ["<"]
            reading_closing = [">"]

            [alignment]
            per_character = false
        "#;

        let config = RubyConfig::from_toml_str(toml_str).unwrap();
        assert_eq!(config.scope.root.as_deref(), Some("article"));
        assert_eq!(config.scope.excluded, vec!["CODE".to_string()]);
        assert_eq!(config.delimiters.word_opening, vec!['[']);
        // Unspecified keys keep their defaults
        assert_eq!(config.delimiters.reading_segment, vec!['.', '、', '・']);
        assert!(!config.alignment.per_character);
        assert_eq!(config.alignment.honorifics, vec!['お', 'ご']);
    }

    #[test]
    fn test_strict_parse_rejects_unknown_key() {
        let result = RubyConfig::from_toml_str("[alignment]\nper_char = true\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_strict_parse_rejects_wrong_type() {
        let result = RubyConfig::from_toml_str("[alignment]\nper_character = \"yes\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_validate_empty_set() {
        let mut delimiters = DelimiterSet::default();
        delimiters.reading_opening.clear();

        match delimiters.validate() {
            Err(ConfigError::EmptyDelimiterSet(role)) => {
                assert_eq!(role, DelimiterRole::ReadingOpening);
            }
            other => panic!("Expected EmptyDelimiterSet, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_conflict() {
        let delimiters = DelimiterSet {
            word_opening: vec!['|'],
            word_closing: vec!['|'],
            ..DelimiterSet::default()
        };

        match delimiters.validate() {
            Err(ConfigError::ConflictingDelimiter { ch, first, second }) => {
                assert_eq!(ch, '|');
                assert_eq!(first, DelimiterRole::WordOpening);
                assert_eq!(second, DelimiterRole::WordClosing);
            }
            other => panic!("Expected ConflictingDelimiter, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_within_one_role_is_allowed() {
        let delimiters = DelimiterSet {
            word_opening: vec!['{', '{'],
            ..DelimiterSet::default()
        };
        assert!(delimiters.validate().is_ok());
    }

    #[test]
    fn test_segment_delimiter_may_be_empty() {
        let delimiters = DelimiterSet {
            reading_segment: Vec::new(),
            ..DelimiterSet::default()
        };
        assert!(delimiters.validate().is_ok());
    }

    #[test]
    fn test_toml_roundtrip_of_defaults() {
        let config = RubyConfig::default();
        let serialized = config.to_toml_string().unwrap();
        assert!(serialized.contains("[delimiters]"));
        assert_eq!(RubyConfig::from_toml_str(&serialized).unwrap(), config);
    }

    #[test]
    fn test_excluded_scope_is_case_insensitive() {
        let config = RubyConfig::default();
        assert!(config.is_excluded_scope("code"));
        assert!(config.is_excluded_scope("PRE"));
        assert!(!config.is_excluded_scope("P"));
    }

    #[test]
    fn test_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[alignment]\nper_character = false\n").unwrap();

        let config = RubyConfig::from_file(file.path()).unwrap();
        assert!(!config.alignment.per_character);
    }

    #[test]
    fn test_from_missing_file() {
        let result = RubyConfig::from_file(Path::new("/nonexistent/rubyfy.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
