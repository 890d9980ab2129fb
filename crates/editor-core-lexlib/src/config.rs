//! YAML description of a configured lexer.
//!
//! ```yaml
//! language: cpp
//! properties:
//!   fold: true
//!   fold.at.else: 1
//! keywords:
//!   - "int char if else return"
//!   - "size_t"
//! substyles:
//!   - base: 11
//!     identifiers: ["vector map", "string"]
//! ```

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
/// Errors produced while building a lexer from a [`LexerConfig`].
pub enum ConfigError {
    #[error("YAML parse error: {0}")]
    /// The document is not a valid configuration.
    Yaml(#[from] serde_yaml::Error),

    #[error("unknown language '{0}'")]
    /// No module is registered under the language name.
    UnknownLanguage(String),

    #[error("lexer '{language}' has no property '{key}'")]
    /// The lexer declares its properties and this is not one of them.
    UnknownProperty {
        /// Language of the lexer.
        language: String,
        /// The rejected property.
        key: String,
    },

    #[error("lexer '{language}' has {count} keyword lists, index {index} is out of range")]
    /// More keyword lists were given than the lexer has.
    WordListOutOfRange {
        /// Language of the lexer.
        language: String,
        /// The rejected index.
        index: usize,
        /// Number of keyword lists the lexer has.
        count: usize,
    },

    #[error("lexer '{0}' does not support sub-styles")]
    /// Sub-styles were requested from a lexer without any.
    SubStylesUnsupported(String),

    #[error("lexer '{language}' cannot allocate {requested} sub-styles of style {base}")]
    /// The base style is not sub-stylable or the sub-style range is exhausted.
    SubStylesExhausted {
        /// Language of the lexer.
        language: String,
        /// The requested base style.
        base: u8,
        /// Number of sub-styles requested.
        requested: usize,
    },
}

/// A scalar property value. Booleans are stored as `1` / `0`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// `true` / `false`.
    Bool(bool),
    /// An integer.
    Int(i64),
    /// Any other text.
    Str(String),
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Bool(b) => write!(f, "{}", i32::from(*b)),
            PropertyValue::Int(i) => write!(f, "{i}"),
            PropertyValue::Str(s) => f.write_str(s),
        }
    }
}

/// Sub-styles requested for one base style: one style per entry of `identifiers`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SubStyleConfig {
    /// The base style to subdivide.
    pub base: u8,
    /// Space-separated identifiers for each allocated style.
    pub identifiers: Vec<String>,
}

/// One configured lexer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LexerConfig {
    /// Catalogue name of the language.
    pub language: String,
    /// Properties to set.
    #[serde(default)]
    pub properties: BTreeMap<String, PropertyValue>,
    /// Keyword lists by index.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Sub-style allocations.
    #[serde(default)]
    pub substyles: Vec<SubStyleConfig>,
}

impl LexerConfig {
    /// Parse a configuration document.
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_full_config() {
        let config = LexerConfig::from_yaml(
            "language: cpp\nproperties:\n  fold: true\n  fold.at.else: 1\n  name: x\nkeywords:\n  - int char\nsubstyles:\n  - base: 11\n    identifiers: [\"vector map\"]\n",
        )
        .unwrap();
        assert_eq!(config.language, "cpp");
        assert_eq!(config.properties["fold"].to_string(), "1");
        assert_eq!(config.properties["fold.at.else"], PropertyValue::Int(1));
        assert_eq!(config.properties["name"].to_string(), "x");
        assert_eq!(config.keywords, vec!["int char".to_string()]);
        assert_eq!(config.substyles[0].base, 11);
    }

    #[test]
    fn test_minimal_and_invalid() {
        let config = LexerConfig::from_yaml("language: \"null\"\n").unwrap();
        assert!(config.properties.is_empty());
        assert!(matches!(
            LexerConfig::from_yaml("properties: {}\n"),
            Err(ConfigError::Yaml(_))
        ));
    }
}
