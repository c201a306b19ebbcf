//! Builder for constructing rule sets.

use crate::core::{CharacterClasses, ClassSource, RuleSet};
use regex::Regex;

/// Builder for constructing rule sets with a fluent API.
///
/// Setters never validate; combined constraints are only evaluated when the
/// rule set scans text. [`build`](Self::build) borrows the builder, so it may
/// be called repeatedly and the builder can keep changing afterwards.
#[derive(Clone, Debug, Default)]
pub struct RuleSetBuilder {
    rules: RuleSet,
}

impl RuleSetBuilder {
    /// Create a builder with the permissive defaults.
    pub fn new() -> Self {
        Self {
            rules: RuleSet::default(),
        }
    }

    /// Require at least `len` characters.
    pub fn with_min_length(mut self, len: usize) -> Self {
        self.rules.min_length = Some(len);
        self
    }

    /// Disable the minimum length (the default).
    pub fn without_min_length(mut self) -> Self {
        self.rules.min_length = None;
        self
    }

    /// Whether the empty text is accepted.
    pub fn allow_empty(mut self, value: bool) -> Self {
        self.rules.allow_empty = value;
        self
    }

    /// Whether the space character is accepted.
    pub fn allow_spaces(mut self, value: bool) -> Self {
        self.rules.allow_spaces = value;
        self
    }

    /// Whether ASCII digits are accepted.
    pub fn allow_numbers(mut self, value: bool) -> Self {
        self.rules.allow_numbers = value;
        self
    }

    /// Whether ASCII lowercase letters are accepted.
    pub fn allow_lowercase(mut self, value: bool) -> Self {
        self.rules.allow_lowercase = value;
        self
    }

    /// Whether ASCII uppercase letters are accepted.
    pub fn allow_uppercase(mut self, value: bool) -> Self {
        self.rules.allow_uppercase = value;
        self
    }

    /// Membership is decided by the rule set's [`CharacterClasses`].
    pub fn allow_special_characters(mut self, value: bool) -> Self {
        self.rules.allow_special_characters = value;
        self
    }

    /// Membership is decided by the rule set's [`CharacterClasses`].
    pub fn allow_ambiguous_characters(mut self, value: bool) -> Self {
        self.rules.allow_ambiguous_characters = value;
        self
    }

    /// Membership is decided by the rule set's [`CharacterClasses`].
    pub fn allow_similar_characters(mut self, value: bool) -> Self {
        self.rules.allow_similar_characters = value;
        self
    }

    /// Whether one character may occur more than once.
    pub fn allow_repeated_characters(mut self, value: bool) -> Self {
        self.rules.allow_repeated_characters = value;
        self
    }

    /// Treat the given characters as invalid.
    pub fn without_characters<I>(mut self, characters: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        self.rules.invalid_characters = characters.into_iter().collect();
        self
    }

    /// Reject text containing any of the given words, ignoring case.
    ///
    /// Case is folded one character at a time, so `"İ"` matches `"i"` while
    /// `"ß"` does not match `"ss"`.
    pub fn without_words<I, W>(self, words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        self.without_words_case(words, true)
    }

    /// Reject text containing any of the given words.
    pub fn without_words_case<I, W>(mut self, words: I, ignore_case: bool) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        self.rules.illegal_words = words.into_iter().map(Into::into).collect();
        self.rules.ignore_words_case = ignore_case;
        self
    }

    /// Every given character must appear at least once.
    pub fn require_characters<I>(mut self, characters: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        self.rules.required_characters = characters.into_iter().collect();
        self
    }

    /// The text must contain a match of `pattern` somewhere.
    pub fn require_pattern(mut self, pattern: Regex) -> Self {
        self.rules.required_pattern = Some(pattern);
        self
    }

    /// Require at least `count` ASCII digits.
    pub fn required_numbers(mut self, count: usize) -> Self {
        self.rules.required_numbers = count;
        self
    }

    /// Require at least `count` ASCII lowercase letters.
    pub fn required_lowercase(mut self, count: usize) -> Self {
        self.rules.required_lowercase = count;
        self
    }

    /// Require at least `count` ASCII uppercase letters.
    pub fn required_uppercase(mut self, count: usize) -> Self {
        self.rules.required_uppercase = count;
        self
    }

    /// Require at least `count` special characters.
    pub fn required_special_characters(mut self, count: usize) -> Self {
        self.rules.required_special_characters = count;
        self
    }

    /// Freeze a per-instance copy of the character classes.
    pub fn character_classes(mut self, classes: CharacterClasses) -> Self {
        self.rules.classes = ClassSource::Fixed(classes);
        self
    }

    /// Follow the process-wide shared character classes (the default).
    pub fn shared_character_classes(mut self) -> Self {
        self.rules.classes = ClassSource::Shared;
        self
    }

    /// Build the rule set from the current configuration.
    pub fn build(&self) -> RuleSet {
        self.rules.clone()
    }
}

impl From<RuleSet> for RuleSetBuilder {
    fn from(rules: RuleSet) -> Self {
        Self { rules }
    }
}
