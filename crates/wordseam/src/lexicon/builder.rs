//! # Lexicon Construction
//!
//! Turns a ranked base word list plus edit directives into a
//! [`WordCostTable`]. Edits apply in a fixed order:
//!
//! 1. remove blacklisted words;
//! 2. with `overwrite`, remove base entries shadowed by added words
//!    (so the added copy fully replaces the base entry's rank);
//! 3. lowercase the added words; without `overwrite`, drop added words
//!    already present in the base list;
//! 4. insert the added words at the front (`add_to_top`) or the back;
//! 5. assign rank costs; fail if fewer than 2 words remain.

use crate::errors::{WSResult, WordseamError};
use crate::lexicon::cost_table::WordCostTable;
use crate::types::WSHashSet;

/// Edit directives applied to a base word list before cost assignment.
#[derive(Clone, Debug, Default)]
pub struct LexiconEdits {
    /// Words to add to the dictionary (lowercased on application).
    pub add_words: Vec<String>,

    /// Words to remove from the dictionary (matched verbatim).
    pub blacklist: Vec<String>,

    /// Insert added words with highest priority (lowest cost) instead
    /// of appending them at the bottom.
    pub add_to_top: bool,

    /// Let added words replace base entries of the same spelling
    /// entirely, instead of being dropped as duplicates.
    pub overwrite: bool,
}

/// Build a [`WordCostTable`] from a ranked base list and edits.
///
/// ## Arguments
/// * `words` - base word list, most frequent first.
/// * `edits` - the edit directives; see [`LexiconEdits`].
///
/// ## Returns
/// The cost table, or [`WordseamError::DegenerateLexicon`] if fewer
/// than 2 words survive the edits.
pub fn build_cost_table(
    mut words: Vec<String>,
    edits: &LexiconEdits,
) -> WSResult<WordCostTable> {
    if !edits.blacklist.is_empty() {
        let blacklist: WSHashSet<&str> = edits.blacklist.iter().map(String::as_str).collect();
        words.retain(|w| !blacklist.contains(w.as_str()));
    }

    if !edits.add_words.is_empty() {
        let mut added: Vec<String> = edits.add_words.iter().map(|w| w.to_lowercase()).collect();

        if edits.overwrite {
            let shadowed: WSHashSet<&str> = added.iter().map(String::as_str).collect();
            words.retain(|w| !shadowed.contains(w.as_str()));
        } else {
            let base: WSHashSet<&str> = words.iter().map(String::as_str).collect();
            added.retain(|w| !base.contains(w.as_str()));
        }

        if edits.add_to_top {
            added.extend(words);
            words = added;
        } else {
            words.extend(added);
        }
    }

    if words.len() < 2 {
        return Err(WordseamError::DegenerateLexicon { len: words.len() });
    }

    log::debug!(
        "built lexicon: {} words, max word length {}",
        words.len(),
        words.iter().map(|w| w.chars().count()).max().unwrap_or(0),
    );

    Ok(WordCostTable::from_ranked_words(words))
}
