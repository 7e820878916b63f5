//! # Spacing Rule Tables

use crate::language::Language;
use crate::types::WSHashSet;

/// Characters that suppress an inserted space *before* themselves.
///
/// Includes `s` so a bare possessive fragment (`s` after an apostrophe
/// token) reattaches without a gap, and the curly apostrophe alongside
/// the straight one.
const NO_SPACE_BEFORE_BASE: &[char] = &[
    '.', ',', ';', ':', '!', '?', ')', ']', '}', '%', '\'', '’', 's', '»', '›', '-',
];

/// Characters that suppress an inserted space *after* themselves.
const NO_SPACE_AFTER_BASE: &[char] = &[
    '(', '[', '{', '«', '‹', '¡', '¿', '-', '$', '€', '£',
];

/// Per-language space suppression rule sets.
///
/// Built once per model from the base sets with per-language discards;
/// immutable afterwards. Membership is tested against single-character
/// tokens only — multi-character tokens never suppress spacing.
#[derive(Clone, Debug)]
pub struct SpacingRules {
    no_space_before: WSHashSet<char>,
    no_space_after: WSHashSet<char>,
}

fn single_char(token: &str) -> Option<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

impl SpacingRules {
    /// Build the rule sets for a language.
    ///
    /// `None` (custom dictionaries) and languages without overrides get
    /// the base sets; German, French, and Spanish typography discards
    /// some entries.
    pub fn for_language(language: Option<Language>) -> Self {
        let mut before: WSHashSet<char> = NO_SPACE_BEFORE_BASE.iter().copied().collect();
        let mut after: WSHashSet<char> = NO_SPACE_AFTER_BASE.iter().copied().collect();

        match language {
            Some(Language::De) => {
                for c in ['%', '-'] {
                    before.remove(&c);
                }
                for c in ['-', '$', '€', '£'] {
                    after.remove(&c);
                }
            }
            Some(Language::Fr) => {
                for c in [':', ';', '!', '?', '»', '%'] {
                    before.remove(&c);
                }
                after.remove(&'«');
            }
            Some(Language::Es) => {
                before.remove(&'%');
            }
            _ => {}
        }

        Self {
            no_space_before: before,
            no_space_after: after,
        }
    }

    /// True if no space may be inserted before this token.
    pub fn no_space_before(&self, token: &str) -> bool {
        single_char(token).is_some_and(|c| self.no_space_before.contains(&c))
    }

    /// True if no space may be inserted after this token.
    pub fn no_space_after(&self, token: &str) -> bool {
        single_char(token).is_some_and(|c| self.no_space_after.contains(&c))
    }
}
