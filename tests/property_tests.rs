//! Property-based tests for the scan and the validator.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use textrules::core::{CharacterClasses, RuleSet, ValidationError};
use textrules::validator::{ValidationState, Validator};

fn fixed() -> textrules::RuleSetBuilder {
    RuleSet::builder().character_classes(CharacterClasses::default())
}

prop_compose! {
    fn restrictive_rules()(
        allow_spaces in any::<bool>(),
        allow_numbers in any::<bool>(),
        allow_lowercase in any::<bool>(),
        allow_uppercase in any::<bool>(),
        allow_special in any::<bool>(),
        allow_ambiguous in any::<bool>(),
        allow_similar in any::<bool>(),
        allow_repeated in any::<bool>(),
        min_length in prop::option::of(0usize..12),
        required_numbers in 0usize..3,
    ) -> RuleSet {
        let mut builder = fixed()
            .allow_spaces(allow_spaces)
            .allow_numbers(allow_numbers)
            .allow_lowercase(allow_lowercase)
            .allow_uppercase(allow_uppercase)
            .allow_special_characters(allow_special)
            .allow_ambiguous_characters(allow_ambiguous)
            .allow_similar_characters(allow_similar)
            .allow_repeated_characters(allow_repeated)
            .without_words(["foo", "bar"])
            .required_numbers(required_numbers);

        if let Some(len) = min_length {
            builder = builder.with_min_length(len);
        }

        builder.build()
    }
}

proptest! {
    #[test]
    fn permissive_rules_accept_everything(text in any::<String>()) {
        let rules = fixed().build();
        prop_assert!(rules.check(&text).is_empty());
    }

    #[test]
    fn scan_is_idempotent(rules in restrictive_rules(), text in "[ -~]{0,24}") {
        prop_assert_eq!(rules.check(&text), rules.check(&text));
    }

    #[test]
    fn built_in_kinds_appear_at_most_once(rules in restrictive_rules(), text in "[ -~]{0,24}") {
        let errors = rules.check(&text);

        for kind in ValidationError::builtin() {
            let count = errors.iter().filter(|e| **e == kind).count();
            prop_assert!(count <= 1, "{} reported {} times", kind.kind(), count);
        }
    }

    #[test]
    fn min_length_reported_exactly_once_below_threshold(text in "[a-z]{0,9}") {
        let rules = fixed().with_min_length(10).build();
        prop_assert_eq!(rules.check(&text), vec![ValidationError::MIN_LENGTH]);
    }

    #[test]
    fn digits_report_number_once(text in "[0-9]{1,16}") {
        let rules = fixed().allow_numbers(false).build();
        prop_assert_eq!(rules.check(&text), vec![ValidationError::NUMBER]);
    }

    #[test]
    fn scan_never_panics(rules in restrictive_rules(), text in any::<String>()) {
        let _ = rules.check(&text);
    }

    #[test]
    fn validator_matches_scan(rules in restrictive_rules(), text in "[ -~]{0,24}") {
        let expected = rules.check(&text);
        let mut validator = Validator::new(rules);

        validator.on_text_changed(&text);

        prop_assert_eq!(validator.errors(), expected.as_slice());
        let expected_state = if expected.is_empty() {
            ValidationState::Valid
        } else {
            ValidationState::Invalid
        };
        prop_assert_eq!(validator.state(), expected_state);
    }

    #[test]
    fn previous_text_does_not_leak(
        rules in restrictive_rules(),
        first in "[ -~]{0,24}",
        second in "[ -~]{0,24}",
    ) {
        let mut validator = Validator::new(rules.clone());

        validator.on_text_changed(&first);
        validator.on_text_changed(&second);

        let expected = rules.check(&second);
        prop_assert_eq!(validator.errors(), expected.as_slice());
    }
}
