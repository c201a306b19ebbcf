//! Validation pipeline around the pure scan.
//!
//! This module provides the "imperative shell" of the crate: a [`Validator`]
//! owns a rule set, reacts to text changes, keeps the errors of the most
//! recent pass and runs the hook chain.
//!
//! # Pass order
//!
//! 1. The error list is cleared
//! 2. [`PreValidate`] runs (the built-in scan unless replaced)
//! 3. [`PostValidate`] runs if set and may append to the errors
//! 4. [`ResultCallback`] is notified with the final errors
//!
//! A pass never fails. Its outcome is [`ValidationState::Valid`] when the
//! error list is empty and [`ValidationState::Invalid`] otherwise.

mod hooks;
mod pipeline;

pub use hooks::{
    PostValidate, PostValidateFn, PreValidate, PreValidateFn, ResultCallback, ResultCallbackFn,
};
pub use pipeline::{ValidationState, Validator};
