//! Rule sets and the single-pass scan.

use crate::builder::RuleSetBuilder;
use crate::core::classes::{CharacterClasses, ClassSource};
use crate::core::error::ValidationError;
use regex::Regex;

/// Immutable bundle of validation constraints.
///
/// Built with [`RuleSetBuilder`]. The default value is fully permissive:
/// every `allow_*` flag is on, there is no minimum length and no required
/// or illegal content.
///
/// # Example
///
/// ```rust
/// use textrules::core::{RuleSet, ValidationError};
///
/// let rules = RuleSet::builder()
///     .allow_empty(false)
///     .with_min_length(5)
///     .build();
///
/// assert_eq!(
///     rules.check(""),
///     vec![ValidationError::EMPTY, ValidationError::MIN_LENGTH]
/// );
/// assert!(rules.check("hello").is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct RuleSet {
    pub(crate) min_length: Option<usize>,
    pub(crate) allow_empty: bool,
    pub(crate) allow_spaces: bool,
    pub(crate) allow_numbers: bool,
    pub(crate) allow_lowercase: bool,
    pub(crate) allow_uppercase: bool,
    pub(crate) allow_special_characters: bool,
    pub(crate) allow_ambiguous_characters: bool,
    pub(crate) allow_similar_characters: bool,
    pub(crate) allow_repeated_characters: bool,
    pub(crate) invalid_characters: Vec<char>,
    pub(crate) required_characters: Vec<char>,
    pub(crate) illegal_words: Vec<String>,
    pub(crate) ignore_words_case: bool,
    pub(crate) required_pattern: Option<Regex>,
    pub(crate) required_numbers: usize,
    pub(crate) required_lowercase: usize,
    pub(crate) required_uppercase: usize,
    pub(crate) required_special_characters: usize,
    pub(crate) classes: ClassSource,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            min_length: None,
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
            classes: ClassSource::Shared,
        }
    }
}

impl RuleSet {
    /// Start configuring a rule set.
    pub fn builder() -> RuleSetBuilder {
        RuleSetBuilder::new()
    }

    /// Run the built-in checks against `text`, appending to `errors`.
    ///
    /// Errors are appended in detection order: emptiness, minimum length,
    /// then per character in index order (invalid, space, number,
    /// lowercase, uppercase, special, ambiguous, similar, repeated), then
    /// illegal words, required characters, the required pattern and the
    /// required counts.
    ///
    /// `errors` is not cleared. The number, lowercase, uppercase and special
    /// checks skip their error when it is already present in `errors`, so
    /// entries placed there before the scan suppress them.
    ///
    /// The repeated-character check compares each character against every
    /// later one, quadratic in the text length.
    pub fn scan(&self, text: &str, errors: &mut Vec<ValidationError>) {
        let classes = self.classes.resolve();
        let chars: Vec<char> = text.chars().collect();
        let size = chars.len();
        let before = errors.len();

        let mut numbers = 0;
        let mut lowercases = 0;
        let mut uppercases = 0;
        let mut specials = 0;

        let mut invalid_reported = false;
        let mut space_reported = false;
        let mut ambiguous_reported = false;
        let mut similar_reported = false;
        let mut repeated_reported = false;

        if size == 0 && !self.allow_empty {
            errors.push(ValidationError::EMPTY);
        }

        if self.min_length.is_some_and(|min| size < min) {
            errors.push(ValidationError::MIN_LENGTH);
        }

        for (i, &c) in chars.iter().enumerate() {
            if !invalid_reported && self.invalid_characters.contains(&c) {
                errors.push(ValidationError::INVALID_CHARACTER);
                invalid_reported = true;
            }

            if !self.allow_spaces && !space_reported && c == ' ' {
                errors.push(ValidationError::SPACE);
                space_reported = true;
            }

            if c.is_ascii_digit() {
                push_once(errors, !self.allow_numbers, ValidationError::NUMBER);
                numbers += 1;
            }

            if c.is_ascii_lowercase() {
                push_once(errors, !self.allow_lowercase, ValidationError::LOWERCASE);
                lowercases += 1;
            }

            if c.is_ascii_uppercase() {
                push_once(errors, !self.allow_uppercase, ValidationError::UPPERCASE);
                uppercases += 1;
            }

            if classes.is_special(c) {
                push_once(
                    errors,
                    !self.allow_special_characters,
                    ValidationError::SPECIAL_CHARACTER,
                );
                specials += 1;
            }

            if !self.allow_ambiguous_characters && !ambiguous_reported && classes.is_ambiguous(c)
            {
                errors.push(ValidationError::AMBIGUOUS_CHARACTER);
                ambiguous_reported = true;
            }

            if !self.allow_similar_characters && !similar_reported && classes.is_similar(c) {
                errors.push(ValidationError::SIMILAR);
                similar_reported = true;
            }

            if !self.allow_repeated_characters && !repeated_reported && chars[i + 1..].contains(&c)
            {
                errors.push(ValidationError::REPEATED);
                repeated_reported = true;
            }
        }

        if self.contains_illegal_word(text) {
            errors.push(ValidationError::ILLEGAL_WORD);
        }

        if self.required_characters.iter().any(|c| !chars.contains(c)) {
            errors.push(ValidationError::REQUIRED_CHARACTERS);
        }

        if let Some(pattern) = &self.required_pattern {
            if !pattern.is_match(text) {
                errors.push(ValidationError::REQUIRED_PATTERN);
            }
        }

        if numbers < self.required_numbers {
            errors.push(ValidationError::REQUIRED_NUMBERS);
        }

        if lowercases < self.required_lowercase {
            errors.push(ValidationError::REQUIRED_LOWERCASE);
        }

        if uppercases < self.required_uppercase {
            errors.push(ValidationError::REQUIRED_UPPERCASE);
        }

        if specials < self.required_special_characters {
            errors.push(ValidationError::REQUIRED_SPECIAL);
        }

        log::trace!(
            "scanned {} chars, {} new errors",
            size,
            errors.len() - before
        );
    }

    /// Scan `text` into a fresh error list.
    pub fn check(&self, text: &str) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        self.scan(text, &mut errors);
        errors
    }

    /// Stops at the first word found.
    fn contains_illegal_word(&self, text: &str) -> bool {
        if self.illegal_words.is_empty() {
            return false;
        }

        if self.ignore_words_case {
            let haystack: Vec<char> = text.chars().collect();
            self.illegal_words
                .iter()
                .any(|word| contains_ignore_case(&haystack, word))
        } else {
            self.illegal_words.iter().any(|word| text.contains(word.as_str()))
        }
    }

    /// Minimum length in characters, `None` when disabled.
    pub fn min_length(&self) -> Option<usize> {
        self.min_length
    }

    /// Whether the empty text is accepted.
    pub fn allow_empty(&self) -> bool {
        self.allow_empty
    }

    /// Whether the space character is accepted.
    pub fn allow_spaces(&self) -> bool {
        self.allow_spaces
    }

    /// Whether ASCII digits are accepted.
    pub fn allow_numbers(&self) -> bool {
        self.allow_numbers
    }

    /// Whether ASCII lowercase letters are accepted.
    pub fn allow_lowercase(&self) -> bool {
        self.allow_lowercase
    }

    /// Whether ASCII uppercase letters are accepted.
    pub fn allow_uppercase(&self) -> bool {
        self.allow_uppercase
    }

    /// Whether characters of the special class are accepted.
    pub fn allow_special_characters(&self) -> bool {
        self.allow_special_characters
    }

    /// Whether characters of the ambiguous class are accepted.
    pub fn allow_ambiguous_characters(&self) -> bool {
        self.allow_ambiguous_characters
    }

    /// Whether characters of the similar class are accepted.
    pub fn allow_similar_characters(&self) -> bool {
        self.allow_similar_characters
    }

    /// Whether a character may occur more than once.
    pub fn allow_repeated_characters(&self) -> bool {
        self.allow_repeated_characters
    }

    /// Characters the text must not contain.
    pub fn invalid_characters(&self) -> &[char] {
        &self.invalid_characters
    }

    /// Characters the text must contain at least once each.
    pub fn required_characters(&self) -> &[char] {
        &self.required_characters
    }

    /// Substrings the text must not contain.
    pub fn illegal_words(&self) -> &[String] {
        &self.illegal_words
    }

    /// Whether illegal words match regardless of case.
    pub fn ignore_words_case(&self) -> bool {
        self.ignore_words_case
    }

    /// Pattern the text must contain a match of.
    pub fn required_pattern(&self) -> Option<&Regex> {
        self.required_pattern.as_ref()
    }

    /// Minimum count of ASCII digits.
    pub fn required_numbers(&self) -> usize {
        self.required_numbers
    }

    /// Minimum count of ASCII lowercase letters.
    pub fn required_lowercase(&self) -> usize {
        self.required_lowercase
    }

    /// Minimum count of ASCII uppercase letters.
    pub fn required_uppercase(&self) -> usize {
        self.required_uppercase
    }

    /// Minimum count of special characters.
    pub fn required_special_characters(&self) -> usize {
        self.required_special_characters
    }

    /// `None` when the rule set follows the shared classes.
    pub fn fixed_classes(&self) -> Option<&CharacterClasses> {
        match &self.classes {
            ClassSource::Shared => None,
            ClassSource::Fixed(classes) => Some(classes),
        }
    }
}

/// Character-wise containment. Two characters match when their simple
/// uppercase forms agree or when the lowercase forms of those agree.
fn contains_ignore_case(haystack: &[char], needle: &str) -> bool {
    let needle: Vec<char> = needle.chars().collect();
    if needle.is_empty() {
        return true;
    }

    haystack.windows(needle.len()).any(|window| {
        window
            .iter()
            .zip(&needle)
            .all(|(&a, &b)| chars_eq_ignore_case(a, b))
    })
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    if a == b {
        return true;
    }

    let (upper_a, upper_b) = (simple_uppercase(a), simple_uppercase(b));
    upper_a == upper_b || simple_lowercase(upper_a) == simple_lowercase(upper_b)
}

/// Single-character uppercase mapping; characters that expand keep themselves.
fn simple_uppercase(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Single-character lowercase mapping; `İ` folds to `i`.
fn simple_lowercase(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

fn push_once(errors: &mut Vec<ValidationError>, forbidden: bool, error: ValidationError) {
    if forbidden && !errors.contains(&error) {
        errors.push(error);
    }
}
