//! Hook types invoked around a validation pass.

use crate::core::{RuleSet, ValidationError};
use crate::validator::pipeline::Validator;
use std::fmt;
use std::sync::Arc;

/// Type alias for pre-validation functions.
pub type PreValidateFn = dyn Fn(&str, &mut Vec<ValidationError>) + Send + Sync;

/// Type alias for post-validation functions.
pub type PostValidateFn = dyn Fn(&str, &mut Vec<ValidationError>, &Validator) + Send + Sync;

/// Type alias for pass-complete callbacks.
pub type ResultCallbackFn = dyn Fn(&[ValidationError]) + Send + Sync;

/// Primary scan stage of a pass.
///
/// Receives the full current text and an already cleared error list.
/// Replacing the default drops every built-in check unless the replacement
/// delegates to [`RuleSet::scan`].
#[derive(Clone)]
pub struct PreValidate {
    hook: Arc<PreValidateFn>,
}

impl PreValidate {
    pub fn new<F>(hook: F) -> Self
    where
        F: Fn(&str, &mut Vec<ValidationError>) + Send + Sync + 'static,
    {
        Self {
            hook: Arc::new(hook),
        }
    }

    /// The built-in scan bound to `rules`.
    pub fn scan(rules: Arc<RuleSet>) -> Self {
        Self::new(move |text, errors| rules.scan(text, errors))
    }

    pub fn run(&self, text: &str, errors: &mut Vec<ValidationError>) {
        (self.hook)(text, errors)
    }
}

impl fmt::Debug for PreValidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PreValidate(..)")
    }
}

/// Optional stage run after [`PreValidate`] on the same pass.
///
/// It may append to or reorder the pass's errors. The validator it receives
/// exposes the rule set, the text and the errors produced by pre-validation;
/// the live list of the running pass is the `errors` argument.
#[derive(Clone)]
pub struct PostValidate {
    hook: Arc<PostValidateFn>,
}

impl PostValidate {
    pub fn new<F>(hook: F) -> Self
    where
        F: Fn(&str, &mut Vec<ValidationError>, &Validator) + Send + Sync + 'static,
    {
        Self {
            hook: Arc::new(hook),
        }
    }

    pub fn run(&self, text: &str, errors: &mut Vec<ValidationError>, validator: &Validator) {
        (self.hook)(text, errors, validator)
    }
}

impl fmt::Debug for PostValidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PostValidate(..)")
    }
}

/// Notified with the final errors once a pass completes.
#[derive(Clone)]
pub struct ResultCallback {
    hook: Arc<ResultCallbackFn>,
}

impl ResultCallback {
    pub fn new<F>(hook: F) -> Self
    where
        F: Fn(&[ValidationError]) + Send + Sync + 'static,
    {
        Self {
            hook: Arc::new(hook),
        }
    }

    pub fn notify(&self, errors: &[ValidationError]) {
        (self.hook)(errors)
    }
}

impl fmt::Debug for ResultCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ResultCallback(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_hook_runs_rule_set() {
        let rules = Arc::new(RuleSet::builder().allow_numbers(false).build());
        let hook = PreValidate::scan(rules);
        let mut errors = Vec::new();

        hook.run("42", &mut errors);

        assert_eq!(errors, vec![ValidationError::NUMBER]);
    }

    #[test]
    fn custom_pre_hook_replaces_scan() {
        let hook = PreValidate::new(|text, errors| {
            if text.len() > 3 {
                errors.push(ValidationError::new("TOO_LONG", "Text is too long"));
            }
        });
        let mut errors = Vec::new();

        hook.run("abcd", &mut errors);
        hook.run("ab", &mut errors);

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind(), "TOO_LONG");
    }

    #[test]
    fn result_callback_receives_errors() {
        let seen = Arc::new(parking_lot::Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let callback = ResultCallback::new(move |errors| sink.lock().extend_from_slice(errors));

        callback.notify(&[ValidationError::EMPTY]);

        assert_eq!(*seen.lock(), vec![ValidationError::EMPTY]);
    }
}
