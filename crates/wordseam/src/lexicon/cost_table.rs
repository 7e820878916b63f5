//! # Word Cost Table

use crate::types::{WSHashMap, hash_map_with_capacity};

/// Cost charged for a single character not present in the lexicon.
///
/// High enough that known words always win, low enough that unknown
/// runs can still be consumed character by character.
pub const UNKNOWN_CHAR_COST: f64 = 25.0;

/// Cost standing in for "effectively impossible".
///
/// Charged for multi-character spans not present in the lexicon, which
/// forces them to be decomposed into shorter pieces (worst case, single
/// characters at [`UNKNOWN_CHAR_COST`] each). Deliberately finite: the
/// worst achievable path cost is `UNKNOWN_CHAR_COST * len`, so any
/// realistic input stays far below this value and float comparisons
/// never involve infinities.
pub const SENTINEL_COST: f64 = 1e9;

/// Immutable mapping from lowercase word to rank-derived cost.
///
/// Built once by [`crate::lexicon::build_cost_table`]; never mutated.
/// Rank `i` (0 = most frequent) in a list of `N` words costs
/// `ln((i + 1) * ln(N))`, so cost is non-decreasing in rank and `N >= 2`
/// is required for the formula to stay finite.
#[derive(Clone, Debug)]
pub struct WordCostTable {
    /// Word to cost mapping.
    costs: WSHashMap<String, f64>,

    /// Length in chars of the longest word; bounds the DP window.
    max_word_len: usize,
}

impl WordCostTable {
    /// Build a table from a final, frequency-ordered word list.
    ///
    /// The caller is responsible for edits (blacklist, added words);
    /// see [`crate::lexicon::build_cost_table`]. Duplicate words keep
    /// the cost of their *last* occurrence, matching a plain
    /// insert-in-order construction over a deduplicated artifact.
    ///
    /// ## Arguments
    /// * `words` - the ranked word list, most frequent first; must
    ///   contain at least 2 entries (checked by the builder).
    pub(crate) fn from_ranked_words(words: Vec<String>) -> Self {
        let n = words.len();
        let log_n = (n as f64).ln();

        let mut costs = hash_map_with_capacity(n);
        let mut max_word_len = 0;

        for (rank, word) in words.into_iter().enumerate() {
            max_word_len = max_word_len.max(word.chars().count());
            costs.insert(word, ((rank + 1) as f64 * log_n).ln());
        }

        Self {
            costs,
            max_word_len,
        }
    }

    /// The number of distinct words in the table.
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    /// Returns true if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    /// Length in chars of the longest word in the table.
    pub fn max_word_len(&self) -> usize {
        self.max_word_len
    }

    /// The rank cost of a known word, or None.
    ///
    /// Lookup is case-insensitive; table keys are lowercase.
    pub fn cost(&self, word: &str) -> Option<f64> {
        match self.costs.get(word) {
            Some(c) => Some(*c),
            None => {
                let lower = word.to_lowercase();
                if lower == word {
                    None
                } else {
                    self.costs.get(&lower).copied()
                }
            }
        }
    }

    /// The cost of an arbitrary span of non-whitespace text.
    ///
    /// Known words return their rank cost; unknown single characters
    /// return [`UNKNOWN_CHAR_COST`]; longer unknown spans return
    /// [`SENTINEL_COST`].
    pub fn span_cost(&self, span: &str) -> f64 {
        match self.cost(span) {
            Some(c) => c,
            None => {
                let mut chars = span.chars();
                if chars.next().is_some() && chars.next().is_none() {
                    UNKNOWN_CHAR_COST
                } else {
                    SENTINEL_COST
                }
            }
        }
    }
}
