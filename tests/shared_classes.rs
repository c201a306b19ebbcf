//! The process-wide character classes.
//!
//! Kept in its own test binary with a single test so that changing the
//! shared classes cannot race with other tests.

use textrules::core::{CharacterClasses, RuleSet, ValidationError};

#[test]
fn shared_classes_apply_to_rule_sets_without_a_fixed_copy() {
    let following = RuleSet::builder().allow_special_characters(false).build();
    let frozen = RuleSet::builder()
        .character_classes(CharacterClasses::default())
        .allow_special_characters(false)
        .build();

    assert!(following.check("a-b").is_empty());
    assert_eq!(following.check("a!b"), vec![ValidationError::SPECIAL_CHARACTER]);

    CharacterClasses::set_shared(CharacterClasses::default().with_special("-"));

    assert_eq!(CharacterClasses::shared().special, vec!['-']);
    assert_eq!(following.check("a-b"), vec![ValidationError::SPECIAL_CHARACTER]);
    assert!(following.check("a!b").is_empty());
    assert!(frozen.check("a-b").is_empty());
    assert_eq!(frozen.check("a!b"), vec![ValidationError::SPECIAL_CHARACTER]);

    CharacterClasses::reset_shared();

    assert_eq!(CharacterClasses::shared(), CharacterClasses::default());
    assert!(following.check("a-b").is_empty());
}
