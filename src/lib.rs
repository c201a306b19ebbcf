//! Textrules: a declarative text validation engine
//!
//! Textrules turns a declarative rule set into an ordered list of validation
//! errors. The scan at its core is pure and single-pass: one walk over the
//! text evaluates every character predicate, followed by a fixed set of
//! whole-text checks. Around it, a [`Validator`] reacts to text changes and
//! runs an extensible pre/post hook chain.
//!
//! # Core Concepts
//!
//! - **RuleSet**: Immutable bundle of constraints, built with `RuleSetBuilder`
//! - **ValidationError**: Open catalog of error kinds, each with a message
//! - **Validator**: Re-validates on every change and keeps the latest errors
//! - **Presets**: Ready-made email, password and datetime rule sets
//!
//! # Example
//!
//! ```rust
//! use textrules::{RuleSet, ValidationError, Validator};
//!
//! let rules = RuleSet::builder()
//!     .allow_spaces(false)
//!     .allow_empty(false)
//!     .with_min_length(8)
//!     .required_numbers(1)
//!     .build();
//!
//! let mut validator = Validator::new(rules);
//!
//! validator.on_text_changed("pass word");
//! assert_eq!(
//!     validator.errors(),
//!     &[ValidationError::SPACE, ValidationError::REQUIRED_NUMBERS]
//! );
//!
//! validator.on_text_changed("passw0rd");
//! assert!(validator.is_valid());
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod presets;
pub mod validator;

// Re-export commonly used types
pub use builder::RuleSetBuilder;
pub use config::{ConfigError, RuleConfig};
pub use core::{CharacterClasses, RuleSet, ValidationError};
pub use validator::{ValidationState, Validator};
