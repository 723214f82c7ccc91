//! Configuration for the diff engine

use crate::error::{DiffError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default cap on input length, in characters.
///
/// The greedy aligner is `O(n·m)` on dissimilar inputs, so unbounded input
/// would let a single keystroke stall the caller.
pub const DEFAULT_MAX_INPUT_LEN: usize = 100_000;

/// Token size used for a diff pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Granularity {
    /// One token per character (default)
    #[default]
    Character,
    /// One token per whitespace-delimited word
    Word,
    /// One token per line
    Line,
}

impl Granularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Character => "character",
            Granularity::Word => "word",
            Granularity::Line => "line",
        }
    }

    /// All supported granularities
    pub fn all() -> [Granularity; 3] {
        [Granularity::Character, Granularity::Word, Granularity::Line]
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Granularity {
    type Err = DiffError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "character" | "char" | "chars" => Ok(Granularity::Character),
            "word" | "words" => Ok(Granularity::Word),
            "line" | "lines" => Ok(Granularity::Line),
            _ => Err(DiffError::InvalidGranularity(s.to_string())),
        }
    }
}

impl TryFrom<String> for Granularity {
    type Error = DiffError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// Per-call diff options, as supplied by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffOptions {
    /// Token size
    #[serde(alias = "diffType")]
    pub granularity: Granularity,

    /// Lowercase both inputs before tokenizing
    #[serde(alias = "ignoreCase")]
    pub ignore_case: bool,

    /// Collapse whitespace runs to one space and trim both inputs
    #[serde(alias = "ignoreWhitespace")]
    pub ignore_whitespace: bool,
}

impl DiffOptions {
    pub fn new(granularity: Granularity) -> Self {
        Self {
            granularity,
            ..Default::default()
        }
    }

    pub fn with_ignore_case(mut self, ignore: bool) -> Self {
        self.ignore_case = ignore;
        self
    }

    pub fn with_ignore_whitespace(mut self, ignore: bool) -> Self {
        self.ignore_whitespace = ignore;
        self
    }
}

/// Configuration for diff computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffConfig {
    /// Options applied to every diff
    pub options: DiffOptions,

    /// Maximum characters accepted per input; `None` disables the guard
    pub max_input_len: Option<usize>,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Flat on-disk form of [`DiffConfig`]
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    #[serde(alias = "diffType")]
    granularity: Option<String>,
    #[serde(alias = "ignoreCase")]
    ignore_case: bool,
    #[serde(alias = "ignoreWhitespace")]
    ignore_whitespace: bool,
    max_input_len: Option<usize>,
    unbounded: bool,
}

impl DiffConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self {
            options: DiffOptions::default(),
            max_input_len: Some(DEFAULT_MAX_INPUT_LEN),
        }
    }

    /// Create a configuration with no input length guard
    pub fn unbounded() -> Self {
        Self {
            max_input_len: None,
            ..Self::new()
        }
    }

    /// Parse a configuration from JSON.
    ///
    /// Missing fields take their defaults. Both snake_case and the camelCase
    /// option names (`ignoreCase`, `ignoreWhitespace`, `diffType`) are accepted.
    /// `"unbounded": true` disables the length guard.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawConfig = serde_json::from_str(json)?;

        let granularity = match raw.granularity {
            Some(name) => name.parse()?,
            None => Granularity::default(),
        };

        let max_input_len = if raw.unbounded {
            None
        } else {
            Some(raw.max_input_len.unwrap_or(DEFAULT_MAX_INPUT_LEN))
        };

        Ok(Self {
            options: DiffOptions {
                granularity,
                ignore_case: raw.ignore_case,
                ignore_whitespace: raw.ignore_whitespace,
            },
            max_input_len,
        })
    }

    /// Replace all options at once
    pub fn with_options(mut self, options: DiffOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the token granularity
    pub fn with_granularity(mut self, granularity: Granularity) -> Self {
        self.options.granularity = granularity;
        self
    }

    /// Set whether to ignore case
    pub fn with_ignore_case(mut self, ignore: bool) -> Self {
        self.options.ignore_case = ignore;
        self
    }

    /// Set whether to ignore whitespace
    pub fn with_ignore_whitespace(mut self, ignore: bool) -> Self {
        self.options.ignore_whitespace = ignore;
        self
    }

    /// Set the per-input length limit
    pub fn with_max_input_len(mut self, limit: Option<usize>) -> Self {
        self.max_input_len = limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DiffConfig::default();
        assert_eq!(config.options.granularity, Granularity::Character);
        assert!(!config.options.ignore_case);
        assert!(!config.options.ignore_whitespace);
        assert_eq!(config.max_input_len, Some(DEFAULT_MAX_INPUT_LEN));
    }

    #[test]
    fn test_builder_pattern() {
        let config = DiffConfig::new()
            .with_granularity(Granularity::Line)
            .with_ignore_case(true)
            .with_max_input_len(Some(64));

        assert_eq!(config.options.granularity, Granularity::Line);
        assert!(config.options.ignore_case);
        assert_eq!(config.max_input_len, Some(64));
    }

    #[test]
    fn test_granularity_parsing() {
        assert_eq!("word".parse::<Granularity>().unwrap(), Granularity::Word);
        assert_eq!("Line".parse::<Granularity>().unwrap(), Granularity::Line);
        assert_eq!("char".parse::<Granularity>().unwrap(), Granularity::Character);
        assert_eq!(
            "sentence".parse::<Granularity>(),
            Err(DiffError::InvalidGranularity("sentence".to_string()))
        );
    }

    #[test]
    fn test_from_json_camel_case() {
        let config = DiffConfig::from_json(
            r#"{"diffType": "word", "ignoreCase": true, "ignoreWhitespace": false}"#,
        )
        .unwrap();

        assert_eq!(config.options.granularity, Granularity::Word);
        assert!(config.options.ignore_case);
        assert_eq!(config.max_input_len, Some(DEFAULT_MAX_INPUT_LEN));
    }

    #[test]
    fn test_from_json_unbounded() {
        let config = DiffConfig::from_json(r#"{"unbounded": true}"#).unwrap();
        assert_eq!(config.max_input_len, None);
        assert_eq!(config, DiffConfig::unbounded());
    }

    #[test]
    fn test_from_json_invalid_granularity() {
        let err = DiffConfig::from_json(r#"{"granularity": "paragraph"}"#).unwrap_err();
        assert_eq!(err, DiffError::InvalidGranularity("paragraph".to_string()));
    }

    #[test]
    fn test_from_json_malformed() {
        let err = DiffConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, DiffError::Config(_)));
    }

    #[test]
    fn test_options_serde_lowercase() {
        let options = DiffOptions::new(Granularity::Word).with_ignore_case(true);
        let json = serde_json::to_string(&options).unwrap();
        assert!(json.contains("\"granularity\":\"word\""));

        let back: DiffOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(back, options);
    }
}
