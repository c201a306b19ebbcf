//! Core validation types and the scan algorithm.
//!
//! This module contains the pure part of the crate:
//! - The open error catalog via `ValidationError`
//! - Configurable character classes via `CharacterClasses`
//! - Rule sets and the single-pass scan via `RuleSet`
//!
//! A scan is a deterministic function of the text, the rule set and the
//! character classes in effect when it starts. It never fails; every input
//! produces a possibly empty list of errors.

mod classes;
mod error;
mod rules;

pub use classes::{
    CharacterClasses, ClassSource, DEFAULT_AMBIGUOUS_CHARACTERS, DEFAULT_SIMILAR_CHARACTERS,
    DEFAULT_SPECIAL_CHARACTERS,
};
pub use error::ValidationError;
pub use rules::RuleSet;
