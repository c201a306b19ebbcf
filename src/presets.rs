//! Reference rule-set compositions.
//!
//! Each preset is an ordinary builder chain; none adds logic of its own
//! except the datetime validator, which layers a calendar check on top of
//! the pattern through a post-validate hook.

use crate::core::{RuleSet, ValidationError};
use crate::error_catalog;
use crate::validator::Validator;
use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;

/// `word@word.word`
pub static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\w+@\w+\.\w+").expect("email pattern is valid"));

/// ISO-8601 datetime shaped like `yyyy-MM-dd hh:mm:ss`.
pub static SIMPLE_DATE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{2}:[0-9]{2}:[0-9]{2}")
        .expect("datetime pattern is valid")
});

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

error_catalog! {
    /// Error kinds added by the preset validators.
    pub struct PresetErrors {
        INVALID_DATETIME => "Inserted text is not a valid datetime",
    }
}

/// No spaces, must match [`EMAIL_REGEX`] and contain `@` and `.`.
pub fn email() -> RuleSet {
    RuleSet::builder()
        .require_pattern(EMAIL_REGEX.clone())
        .allow_spaces(false)
        .require_characters(['@', '.'])
        .build()
}

/// No spaces, not empty, at least one lowercase, uppercase and number.
pub fn password_good() -> RuleSet {
    RuleSet::builder()
        .allow_spaces(false)
        .required_lowercase(1)
        .required_uppercase(1)
        .required_numbers(1)
        .allow_empty(false)
        .build()
}

/// No spaces, not empty, at least 10 characters, three lowercase, three
/// uppercase, three numbers and one special character.
pub fn password_best() -> RuleSet {
    RuleSet::builder()
        .allow_spaces(false)
        .required_lowercase(3)
        .required_uppercase(3)
        .required_numbers(3)
        .required_special_characters(1)
        .allow_empty(false)
        .with_min_length(10)
        .build()
}

/// Must contain a [`SIMPLE_DATE_REGEX`] match and no letters.
pub fn iso_8601_datetime() -> RuleSet {
    RuleSet::builder()
        .require_pattern(SIMPLE_DATE_REGEX.clone())
        .allow_lowercase(false)
        .allow_uppercase(false)
        .build()
}

/// [`iso_8601_datetime`] plus a calendar check of the matched datetime.
///
/// Text whose datetime has the right shape but names an impossible moment,
/// such as month 13, gets [`PresetErrors::INVALID_DATETIME`].
///
/// # Example
///
/// ```
/// use textrules::presets::{iso_8601_datetime_validator, PresetErrors};
///
/// let mut validator = iso_8601_datetime_validator();
///
/// validator.on_text_changed("2019-08-26 20:42:00");
/// assert!(validator.is_valid());
///
/// validator.on_text_changed("2019-13-26 20:42:00");
/// assert_eq!(validator.first_error(), Some(&PresetErrors::INVALID_DATETIME));
/// ```
pub fn iso_8601_datetime_validator() -> Validator {
    Validator::new(iso_8601_datetime()).with_post_validate(check_calendar)
}

fn check_calendar(text: &str, errors: &mut Vec<ValidationError>, _validator: &Validator) {
    let Some(found) = SIMPLE_DATE_REGEX.find(text) else {
        return;
    };

    if NaiveDateTime::parse_from_str(found.as_str(), DATETIME_FORMAT).is_err() {
        errors.push(PresetErrors::INVALID_DATETIME);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_accepts_addresses() {
        let rules = email();

        assert!(rules.check("john@example.com").is_empty());
    }

    #[test]
    fn email_rejects_incomplete_addresses() {
        let rules = email();

        assert_eq!(
            rules.check("john example"),
            vec![
                ValidationError::SPACE,
                ValidationError::REQUIRED_CHARACTERS,
                ValidationError::REQUIRED_PATTERN,
            ]
        );
        assert_eq!(
            rules.check("john@example"),
            vec![
                ValidationError::REQUIRED_CHARACTERS,
                ValidationError::REQUIRED_PATTERN,
            ]
        );
    }

    #[test]
    fn password_good_requirements() {
        let rules = password_good();

        assert!(rules.check("Passw0rd").is_empty());
        assert_eq!(
            rules.check(""),
            vec![
                ValidationError::EMPTY,
                ValidationError::REQUIRED_NUMBERS,
                ValidationError::REQUIRED_LOWERCASE,
                ValidationError::REQUIRED_UPPERCASE,
            ]
        );
        assert_eq!(
            rules.check("pass word"),
            vec![
                ValidationError::SPACE,
                ValidationError::REQUIRED_NUMBERS,
                ValidationError::REQUIRED_UPPERCASE,
            ]
        );
    }

    #[test]
    fn password_best_requirements() {
        let rules = password_best();

        assert!(rules.check("abcABC123!").is_empty());
        assert_eq!(
            rules.check("abcABC123"),
            vec![ValidationError::MIN_LENGTH, ValidationError::REQUIRED_SPECIAL]
        );
    }

    #[test]
    fn datetime_rejects_letters_and_wrong_shape() {
        let rules = iso_8601_datetime();

        assert!(rules.check("2019-08-26 20:42:00").is_empty());
        assert_eq!(
            rules.check("2019-08-26T20:42:00"),
            vec![ValidationError::UPPERCASE, ValidationError::REQUIRED_PATTERN]
        );
    }

    #[test]
    fn datetime_validator_checks_calendar() {
        let mut validator = iso_8601_datetime_validator();

        validator.on_text_changed("2020-02-29 23:59:59");
        assert!(validator.is_valid());

        validator.on_text_changed("2019-02-29 10:00:00");
        assert_eq!(validator.errors(), &[PresetErrors::INVALID_DATETIME]);

        validator.on_text_changed("not a date");
        assert_eq!(
            validator.errors(),
            &[ValidationError::LOWERCASE, ValidationError::REQUIRED_PATTERN]
        );
    }
}
