//! Character-class membership sets.
//!
//! Digits and ASCII letters are fixed ranges. Special, ambiguous and similar
//! characters are configurable: a process-wide shared value applies to every
//! rule set that was not given its own copy.
//!
//! The shared value lives for the whole process and may be replaced at any
//! time. Replacing it while another thread is scanning is allowed; each scan
//! reads a single snapshot when it starts, so a pass never mixes two
//! configurations. Treat it as startup configuration.

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SPECIAL_CHARACTERS: &str = "!#$%&+*/,.<>=?@^_~";
pub const DEFAULT_AMBIGUOUS_CHARACTERS: &str = "$&%,./<>_^~";
pub const DEFAULT_SIMILAR_CHARACTERS: &str = "1l0OoiI";

static SHARED: Lazy<RwLock<CharacterClasses>> =
    Lazy::new(|| RwLock::new(CharacterClasses::default()));

/// Membership sets consulted by the scan for the configurable classes.
///
/// # Example
///
/// ```rust
/// use textrules::core::CharacterClasses;
///
/// let classes = CharacterClasses::default().with_special("-+");
///
/// assert!(classes.is_special('-'));
/// assert!(!classes.is_special('!'));
/// assert!(classes.is_similar('0'));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterClasses {
    pub special: Vec<char>,
    pub ambiguous: Vec<char>,
    pub similar: Vec<char>,
}

impl Default for CharacterClasses {
    fn default() -> Self {
        Self {
            special: DEFAULT_SPECIAL_CHARACTERS.chars().collect(),
            ambiguous: DEFAULT_AMBIGUOUS_CHARACTERS.chars().collect(),
            similar: DEFAULT_SIMILAR_CHARACTERS.chars().collect(),
        }
    }
}

impl CharacterClasses {
    /// Snapshot of the process-wide shared classes.
    pub fn shared() -> Self {
        SHARED.read().clone()
    }

    /// Replace the process-wide shared classes.
    pub fn set_shared(classes: CharacterClasses) {
        *SHARED.write() = classes;
    }

    /// Restore the process-wide shared classes to their defaults.
    pub fn reset_shared() {
        Self::set_shared(Self::default());
    }

    pub fn with_special(mut self, chars: &str) -> Self {
        self.special = chars.chars().collect();
        self
    }

    pub fn with_ambiguous(mut self, chars: &str) -> Self {
        self.ambiguous = chars.chars().collect();
        self
    }

    pub fn with_similar(mut self, chars: &str) -> Self {
        self.similar = chars.chars().collect();
        self
    }

    pub fn is_special(&self, c: char) -> bool {
        self.special.contains(&c)
    }

    pub fn is_ambiguous(&self, c: char) -> bool {
        self.ambiguous.contains(&c)
    }

    pub fn is_similar(&self, c: char) -> bool {
        self.similar.contains(&c)
    }
}

/// Where a rule set takes its character classes from.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum ClassSource {
    /// Follow the process-wide shared classes at scan time.
    #[default]
    Shared,

    /// Use a frozen per-instance copy.
    Fixed(CharacterClasses),
}

impl ClassSource {
    /// Resolve the classes a scan should use right now.
    pub fn resolve(&self) -> CharacterClasses {
        match self {
            Self::Shared => CharacterClasses::shared(),
            Self::Fixed(classes) => classes.clone(),
        }
    }
}
