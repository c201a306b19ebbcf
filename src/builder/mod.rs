//! Builder API for ergonomic rule-set construction.
//!
//! This module provides the fluent [`RuleSetBuilder`] and the
//! [`error_catalog!`](crate::error_catalog) macro for declaring custom error
//! kinds with minimal boilerplate.

pub mod macros;
pub mod rules;

pub use rules::RuleSetBuilder;

use crate::core::RuleSet;
use crate::validator::Validator;

impl RuleSetBuilder {
    /// Build the rule set and wrap it in a [`Validator`] with default hooks.
    ///
    /// # Example
    ///
    /// ```
    /// use textrules::builder::RuleSetBuilder;
    ///
    /// let mut validator = RuleSetBuilder::new().allow_spaces(false).into_validator();
    ///
    /// validator.on_text_changed("no spaces");
    /// assert!(!validator.is_valid());
    /// ```
    pub fn into_validator(&self) -> Validator {
        Validator::new(self.build())
    }
}

/// Shorthand for [`RuleSet::builder`].
pub fn rules() -> RuleSetBuilder {
    RuleSet::builder()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ValidationError;

    #[test]
    fn into_validator_uses_default_scan() {
        let mut validator = rules().allow_numbers(false).into_validator();

        assert!(validator.validate("abc").is_success());
        assert!(validator.validate("a1").is_failure());
        assert_eq!(validator.errors(), &[ValidationError::NUMBER]);
    }
}
