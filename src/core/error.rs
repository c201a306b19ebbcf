//! Validation error catalog.
//!
//! Validation failures are plain values: a kind identifier plus a
//! human-readable message. The catalog is open - callers add their own
//! kinds with [`ValidationError::new`] or the [`error_catalog!`](crate::error_catalog)
//! macro.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use thiserror::Error;

/// A single validation failure reported by a scan pass.
///
/// `Display` yields the message, so the first error of a pass can be shown
/// to the user directly.
///
/// # Example
///
/// ```rust
/// use textrules::core::ValidationError;
///
/// let custom = ValidationError::new("NO_SPACES", "Text must have spaces");
///
/// assert_eq!(custom.kind(), "NO_SPACES");
/// assert_eq!(custom.to_string(), "Text must have spaces");
/// assert_ne!(custom, ValidationError::SPACE);
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[error("{message}")]
pub struct ValidationError {
    kind: Cow<'static, str>,
    message: Cow<'static, str>,
}

impl ValidationError {
    pub const EMPTY: Self = Self::new_static("EMPTY", "Text is empty");
    pub const INVALID_CHARACTER: Self = Self::new_static("INVALID_CHARACTER", "Invalid character");
    pub const SPACE: Self = Self::new_static("SPACE", "Space are not allowed");
    pub const MIN_LENGTH: Self = Self::new_static("MIN_LENGTH", "Minimum length not met");
    pub const ILLEGAL_WORD: Self = Self::new_static("ILLEGAL_WORD", "Illegal word");
    pub const NUMBER: Self = Self::new_static("NUMBER", "Numbers are not allowed");
    pub const SPECIAL_CHARACTER: Self =
        Self::new_static("SPECIAL_CHARACTER", "Special characters are not allowed");
    pub const UPPERCASE: Self = Self::new_static("UPPERCASE", "Uppercase letters are not allowed");
    pub const LOWERCASE: Self = Self::new_static("LOWERCASE", "Lowercase letters are not allowed");
    pub const SIMILAR: Self = Self::new_static("SIMILAR", "Similar characters are not allowed");
    pub const AMBIGUOUS_CHARACTER: Self =
        Self::new_static("AMBIGUOUS_CHARACTER", "Ambiguous characters are not allowed");
    pub const REPEATED: Self = Self::new_static("REPEATED", "Repeated characters are not allowed");
    pub const REQUIRED_CHARACTERS: Self =
        Self::new_static("REQUIRED_CHARACTERS", "Missing required characters");
    pub const REQUIRED_PATTERN: Self =
        Self::new_static("REQUIRED_PATTERN", "Required pattern is not matched");
    pub const REQUIRED_NUMBERS: Self =
        Self::new_static("REQUIRED_NUMBERS", "Required number of numbers is not met");
    pub const REQUIRED_LOWERCASE: Self = Self::new_static(
        "REQUIRED_LOWERCASE",
        "Required number of lowercase letters is not met",
    );
    pub const REQUIRED_UPPERCASE: Self = Self::new_static(
        "REQUIRED_UPPERCASE",
        "Required number of uppercase letters is not met",
    );
    pub const REQUIRED_SPECIAL: Self = Self::new_static(
        "REQUIRED_SPECIAL",
        "Required number of special characters is not met",
    );

    /// Create an error kind from owned or borrowed strings.
    pub fn new(kind: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// Create an error kind usable in `const` position.
    pub const fn new_static(kind: &'static str, message: &'static str) -> Self {
        Self {
            kind: Cow::Borrowed(kind),
            message: Cow::Borrowed(message),
        }
    }

    /// Identifier of this kind, e.g. `"MIN_LENGTH"`.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Every predefined kind, in catalog order.
    pub fn builtin() -> [Self; 18] {
        [
            Self::EMPTY,
            Self::INVALID_CHARACTER,
            Self::SPACE,
            Self::MIN_LENGTH,
            Self::ILLEGAL_WORD,
            Self::NUMBER,
            Self::SPECIAL_CHARACTER,
            Self::UPPERCASE,
            Self::LOWERCASE,
            Self::SIMILAR,
            Self::AMBIGUOUS_CHARACTER,
            Self::REPEATED,
            Self::REQUIRED_CHARACTERS,
            Self::REQUIRED_PATTERN,
            Self::REQUIRED_NUMBERS,
            Self::REQUIRED_LOWERCASE,
            Self::REQUIRED_UPPERCASE,
            Self::REQUIRED_SPECIAL,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn display_is_the_message() {
        assert_eq!(ValidationError::EMPTY.to_string(), "Text is empty");
        assert_eq!(
            ValidationError::REQUIRED_SPECIAL.to_string(),
            "Required number of special characters is not met"
        );
    }

    #[test]
    fn builtin_kinds_are_distinct() {
        let builtin = ValidationError::builtin();
        let kinds: HashSet<&str> = builtin.iter().map(|e| e.kind()).collect();

        assert_eq!(kinds.len(), 18);
    }

    #[test]
    fn owned_and_static_errors_compare_equal() {
        let owned = ValidationError::new(String::from("EMPTY"), String::from("Text is empty"));
        assert_eq!(owned, ValidationError::EMPTY);
    }

    #[test]
    fn custom_kind_differs_from_builtin() {
        let custom = ValidationError::new("NO_DATE", "Inserted text must be a date");
        assert!(!ValidationError::builtin().contains(&custom));
        assert_eq!(custom.message(), "Inserted text must be a date");
    }

    #[test]
    fn error_serializes_correctly() {
        let json = serde_json::to_string(&ValidationError::NUMBER).unwrap();
        let deserialized: ValidationError = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, ValidationError::NUMBER);
    }
}
