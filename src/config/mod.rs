//! Declarative rule-set configuration.
//!
//! A [`RuleConfig`] mirrors every [`RuleSet`] option in a serializable form so
//! rule sets can be stored next to the rest of an application's settings.
//! Omitted fields take the builder defaults.
//!
//! # Example
//!
//! ```rust
//! use textrules::core::{RuleSet, ValidationError};
//!
//! let rules = RuleSet::from_json(r#"{
//!     "allow_spaces": false,
//!     "min_length": 3,
//!     "illegal_words": ["admin"]
//! }"#).unwrap();
//!
//! assert_eq!(
//!     rules.check("ad min"),
//!     vec![ValidationError::SPACE]
//! );
//! assert_eq!(rules.check("Admin"), vec![ValidationError::ILLEGAL_WORD]);
//! ```

use crate::core::{CharacterClasses, RuleSet};
use regex::Regex;
use serde::{Deserialize, Serialize};

pub mod error;

pub use error::ConfigError;

/// Minimum length value meaning "no minimum".
pub const MIN_LENGTH_DISABLED: i64 = -1;

/// Serializable description of a rule set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// Minimum length, -1 to disable
    pub min_length: i64,
    pub allow_empty: bool,
    pub allow_spaces: bool,
    pub allow_numbers: bool,
    pub allow_lowercase: bool,
    pub allow_uppercase: bool,
    pub allow_special_characters: bool,
    pub allow_ambiguous_characters: bool,
    pub allow_similar_characters: bool,
    pub allow_repeated_characters: bool,
    pub invalid_characters: Vec<char>,
    pub required_characters: Vec<char>,
    pub illegal_words: Vec<String>,
    pub ignore_words_case: bool,
    /// Regular expression the text must contain a match of
    pub required_pattern: Option<String>,
    pub required_numbers: usize,
    pub required_lowercase: usize,
    pub required_uppercase: usize,
    pub required_special_characters: usize,
    /// Frozen classes; `None` follows the shared classes
    pub character_classes: Option<CharacterClasses>,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            min_length: MIN_LENGTH_DISABLED,
            allow_empty: true,
            allow_spaces: true,
            allow_numbers: true,
            allow_lowercase: true,
            allow_uppercase: true,
            allow_special_characters: true,
            allow_ambiguous_characters: true,
            allow_similar_characters: true,
            allow_repeated_characters: true,
            invalid_characters: Vec::new(),
            required_characters: Vec::new(),
            illegal_words: Vec::new(),
            ignore_words_case: true,
            required_pattern: None,
            required_numbers: 0,
            required_lowercase: 0,
            required_uppercase: 0,
            required_special_characters: 0,
            character_classes: None,
        }
    }
}

impl RuleConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the configuration and turn it into a rule set.
    pub fn into_rule_set(self) -> Result<RuleSet, ConfigError> {
        let min_length = match self.min_length {
            MIN_LENGTH_DISABLED => None,
            len if len >= 0 => Some(
                usize::try_from(len).map_err(|_| ConfigError::InvalidMinLength(len))?,
            ),
            len => {
                log::warn!("rejecting rule configuration with min_length {}", len);
                return Err(ConfigError::InvalidMinLength(len));
            }
        };

        let required_pattern = match self.required_pattern.as_deref() {
            Some(pattern) => Some(Regex::new(pattern).map_err(|e| {
                log::warn!("rejecting rule configuration pattern {:?}: {}", pattern, e);
                ConfigError::from(e)
            })?),
            None => None,
        };

        let mut builder = RuleSet::builder()
            .allow_empty(self.allow_empty)
            .allow_spaces(self.allow_spaces)
            .allow_numbers(self.allow_numbers)
            .allow_lowercase(self.allow_lowercase)
            .allow_uppercase(self.allow_uppercase)
            .allow_special_characters(self.allow_special_characters)
            .allow_ambiguous_characters(self.allow_ambiguous_characters)
            .allow_similar_characters(self.allow_similar_characters)
            .allow_repeated_characters(self.allow_repeated_characters)
            .without_characters(self.invalid_characters)
            .require_characters(self.required_characters)
            .without_words_case(self.illegal_words, self.ignore_words_case)
            .required_numbers(self.required_numbers)
            .required_lowercase(self.required_lowercase)
            .required_uppercase(self.required_uppercase)
            .required_special_characters(self.required_special_characters);

        if let Some(len) = min_length {
            builder = builder.with_min_length(len);
        }
        if let Some(pattern) = required_pattern {
            builder = builder.require_pattern(pattern);
        }
        if let Some(classes) = self.character_classes {
            builder = builder.character_classes(classes);
        }

        Ok(builder.build())
    }
}

impl From<&RuleSet> for RuleConfig {
    fn from(rules: &RuleSet) -> Self {
        Self {
            min_length: rules
                .min_length()
                .and_then(|len| i64::try_from(len).ok())
                .unwrap_or(MIN_LENGTH_DISABLED),
            allow_empty: rules.allow_empty(),
            allow_spaces: rules.allow_spaces(),
            allow_numbers: rules.allow_numbers(),
            allow_lowercase: rules.allow_lowercase(),
            allow_uppercase: rules.allow_uppercase(),
            allow_special_characters: rules.allow_special_characters(),
            allow_ambiguous_characters: rules.allow_ambiguous_characters(),
            allow_similar_characters: rules.allow_similar_characters(),
            allow_repeated_characters: rules.allow_repeated_characters(),
            invalid_characters: rules.invalid_characters().to_vec(),
            required_characters: rules.required_characters().to_vec(),
            illegal_words: rules.illegal_words().to_vec(),
            ignore_words_case: rules.ignore_words_case(),
            required_pattern: rules.required_pattern().map(|p| p.as_str().to_string()),
            required_numbers: rules.required_numbers(),
            required_lowercase: rules.required_lowercase(),
            required_uppercase: rules.required_uppercase(),
            required_special_characters: rules.required_special_characters(),
            character_classes: rules.fixed_classes().cloned(),
        }
    }
}

impl TryFrom<RuleConfig> for RuleSet {
    type Error = ConfigError;

    fn try_from(config: RuleConfig) -> Result<Self, Self::Error> {
        config.into_rule_set()
    }
}

impl RuleSet {
    /// Parse a JSON [`RuleConfig`] into a rule set.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        RuleConfig::from_json(json)?.into_rule_set()
    }

    /// Serialize this rule set as a JSON [`RuleConfig`].
    pub fn to_json(&self) -> Result<String, ConfigError> {
        RuleConfig::from(self).to_json()
    }
}
