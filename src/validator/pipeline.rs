//! Validator that reacts to text changes.

use crate::core::{RuleSet, ValidationError};
use crate::validator::hooks::{PostValidate, PreValidate, ResultCallback};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Observable outcome of the most recent pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationState {
    /// The last pass produced no errors
    Valid,

    /// The last pass produced at least one error
    Invalid,
}

/// Text validator driven by text-change events.
///
/// Every pass clears the error list, runs the pre-validate hook (the
/// built-in scan by default), runs the post-validate hook if one is set and
/// finally notifies the result callback. The error list only describes the
/// most recently validated text.
///
/// A validator assumes sequential use; overlapping passes from several
/// threads need external synchronization.
///
/// # Example
///
/// ```rust
/// use textrules::core::{RuleSet, ValidationError};
/// use textrules::validator::{ValidationState, Validator};
///
/// let rules = RuleSet::builder().allow_spaces(false).build();
/// let mut validator = Validator::new(rules).with_post_validate(|text, errors, _| {
///     if text.is_empty() {
///         errors.push(ValidationError::new("REQUIRED", "This field is required"));
///     }
/// });
///
/// validator.on_text_changed("a b");
/// assert_eq!(validator.state(), ValidationState::Invalid);
/// assert_eq!(validator.first_error(), Some(&ValidationError::SPACE));
///
/// validator.on_text_changed("");
/// assert_eq!(validator.first_error().map(|e| e.kind()), Some("REQUIRED"));
///
/// validator.on_text_changed("ab");
/// assert!(validator.is_valid());
/// ```
#[derive(Clone)]
pub struct Validator {
    rules: Arc<RuleSet>,
    pre_validate: PreValidate,
    post_validate: Option<PostValidate>,
    on_result: Option<ResultCallback>,
    text: String,
    errors: Vec<ValidationError>,
}

impl Validator {
    /// Create a validator running the built-in scan for `rules`.
    pub fn new(rules: RuleSet) -> Self {
        let rules = Arc::new(rules);
        Self {
            pre_validate: PreValidate::scan(Arc::clone(&rules)),
            rules,
            post_validate: None,
            on_result: None,
            text: String::new(),
            errors: Vec::new(),
        }
    }

    /// Replace the pre-validate hook.
    pub fn with_pre_validate<F>(mut self, hook: F) -> Self
    where
        F: Fn(&str, &mut Vec<ValidationError>) + Send + Sync + 'static,
    {
        self.set_pre_validate(hook);
        self
    }

    /// Set the post-validate hook.
    ///
    /// Inside the hook, `errors` is the live list of the running pass. The
    /// `&Validator` argument reports the errors as they stood when
    /// pre-validation finished; appends made by the hook only show up there
    /// once the pass completes.
    pub fn with_post_validate<F>(mut self, hook: F) -> Self
    where
        F: Fn(&str, &mut Vec<ValidationError>, &Validator) + Send + Sync + 'static,
    {
        self.set_post_validate(hook);
        self
    }

    /// Set the callback notified after every pass.
    pub fn with_result_callback<F>(mut self, callback: F) -> Self
    where
        F: Fn(&[ValidationError]) + Send + Sync + 'static,
    {
        self.set_result_callback(callback);
        self
    }

    /// In-place form of [`with_pre_validate`](Self::with_pre_validate).
    pub fn set_pre_validate<F>(&mut self, hook: F)
    where
        F: Fn(&str, &mut Vec<ValidationError>) + Send + Sync + 'static,
    {
        self.pre_validate = PreValidate::new(hook);
    }

    /// Restore the built-in scan as the pre-validate hook.
    pub fn reset_pre_validate(&mut self) {
        self.pre_validate = PreValidate::scan(Arc::clone(&self.rules));
    }

    /// In-place form of [`with_post_validate`](Self::with_post_validate).
    pub fn set_post_validate<F>(&mut self, hook: F)
    where
        F: Fn(&str, &mut Vec<ValidationError>, &Validator) + Send + Sync + 'static,
    {
        self.post_validate = Some(PostValidate::new(hook));
    }

    pub fn clear_post_validate(&mut self) {
        self.post_validate = None;
    }

    pub fn set_result_callback<F>(&mut self, callback: F)
    where
        F: Fn(&[ValidationError]) + Send + Sync + 'static,
    {
        self.on_result = Some(ResultCallback::new(callback));
    }

    pub fn clear_result_callback(&mut self) {
        self.on_result = None;
    }

    /// Text-change entry point: validate the full new text.
    pub fn on_text_changed(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        self.run_pass();
    }

    /// Listener-shaped entry point. The positional arguments are ignored.
    pub fn on_text_changed_with(
        &mut self,
        text: &str,
        _start: usize,
        _before: usize,
        _count: usize,
    ) {
        self.on_text_changed(text);
    }

    /// Re-validate the current text.
    pub fn check_errors(&mut self) {
        self.run_pass();
    }

    /// Re-validate the current text and report whether it has errors.
    pub fn has_errors(&mut self) -> bool {
        self.check_errors();
        !self.errors.is_empty()
    }

    /// Validate `text` and view the outcome as a [`Validation`].
    pub fn validate(&mut self, text: &str) -> Validation<(), NonEmptyVec<ValidationError>> {
        self.on_text_changed(text);
        self.to_validation()
    }

    fn run_pass(&mut self) {
        let mut errors = std::mem::take(&mut self.errors);
        errors.clear();

        self.pre_validate.run(&self.text, &mut errors);

        if let Some(post) = &self.post_validate {
            // The hook's validator view reports the pre-validate errors.
            self.errors.clone_from(&errors);
            post.run(&self.text, &mut errors, self);
        }

        self.errors = errors;
        log::debug!(
            "validation pass finished: {:?} ({} errors)",
            self.state(),
            self.errors.len()
        );

        if let Some(callback) = &self.on_result {
            callback.notify(&self.errors);
        }
    }

    /// Errors of the last pass, in detection order.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// The error a user interface would display.
    pub fn first_error(&self) -> Option<&ValidationError> {
        self.errors.first()
    }

    /// Text of the last pass.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Rule set bound to the built-in scan.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// `Invalid` when the last pass reported any error.
    pub fn state(&self) -> ValidationState {
        if self.errors.is_empty() {
            ValidationState::Valid
        } else {
            ValidationState::Invalid
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Accumulate the errors of the last pass, preserving their order.
    pub fn to_validation(&self) -> Validation<(), NonEmptyVec<ValidationError>> {
        let checks: Vec<Validation<(), NonEmptyVec<ValidationError>>> = self
            .errors
            .iter()
            .cloned()
            .map(|error| Validation::fail(error))
            .collect();

        Validation::all_vec(checks).map(|_| ())
    }
}

impl From<RuleSet> for Validator {
    fn from(rules: RuleSet) -> Self {
        Self::new(rules)
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("rules", &self.rules)
            .field("post_validate", &self.post_validate.is_some())
            .field("on_result", &self.on_result.is_some())
            .field("text", &self.text)
            .field("errors", &self.errors)
            .finish()
    }
}
