//! # Minimum-Cost Split

use crate::lexicon::WordCostTable;
use crate::splitting::merges::try_fuse_backtrack;

/// Char-boundary byte offsets of `s`, including the trailing offset.
///
/// Position `i` in the DP addresses the first `i` chars of `s`;
/// `bounds[i]` is the byte offset of that prefix's end.
fn char_bounds(s: &str) -> Vec<usize> {
    let mut bounds: Vec<usize> = s.char_indices().map(|(i, _)| i).collect();
    bounds.push(s.len());
    bounds
}

/// Find the best word ending at char position `i`, given prefix costs.
///
/// Candidate lengths are scanned shortest first with strict improvement,
/// so cost ties resolve in favor of the shortest word. The same routine
/// drives both the forward pass and backtracking, which keeps the two
/// passes exactly consistent.
///
/// ## Returns
/// `(cost, len)`: the total cost through position `i`, and the char
/// length of the word achieving it.
fn best_match(
    table: &WordCostTable,
    chunk: &str,
    bounds: &[usize],
    costs: &[f64],
    i: usize,
) -> (f64, usize) {
    let window = table.max_word_len().min(i);

    let mut min_cost = f64::INFINITY;
    let mut best_len = 0;

    for k in 1..=window {
        let word = &chunk[bounds[i - k]..bounds[i]];
        let total = costs[i - k] + table.span_cost(word);
        if total < min_cost {
            min_cost = total;
            best_len = k;
        }
    }

    (min_cost, best_len)
}

/// Split one non-whitespace chunk into its minimum-cost token sequence.
///
/// Costing is case-insensitive; tokens preserve the chunk's case. The
/// concatenation of the returned tokens always reproduces `chunk`
/// exactly.
///
/// ## Arguments
/// * `table` - the word cost table.
/// * `chunk` - a contiguous run of non-whitespace characters.
pub fn best_split(table: &WordCostTable, chunk: &str) -> Vec<String> {
    let bounds = char_bounds(chunk);
    let n = bounds.len() - 1;
    if n == 0 {
        return Vec::new();
    }

    // Forward pass: costs[i] is the cheapest split of the first i chars.
    let mut costs = vec![0.0_f64; n + 1];
    for i in 1..=n {
        let (cost, _) = best_match(table, chunk, &bounds, &costs, i);
        costs[i] = cost;
    }

    // Backtrack, re-deriving each winning length from the same routine.
    // Tokens come out right-to-left; fusion rules apply as they land.
    let mut out: Vec<String> = Vec::new();
    let mut i = n;
    while i > 0 {
        let (cost, k) = best_match(table, chunk, &bounds, &costs, i);
        debug_assert_eq!(cost.to_bits(), costs[i].to_bits());

        let word = &chunk[bounds[i - k]..bounds[i]];
        if !try_fuse_backtrack(&mut out, word) {
            out.push(word.to_string());
        }

        i -= k;
    }

    out.reverse();
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{LexiconEdits, build_cost_table};

    fn table(words: &[&str]) -> WordCostTable {
        build_cost_table(
            words.iter().map(|w| w.to_string()).collect(),
            &LexiconEdits::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_empty_chunk() {
        let t = table(&["a", "b"]);
        assert_eq!(best_split(&t, ""), Vec::<String>::new());
    }

    #[test]
    fn test_known_words_win_over_chars() {
        let t = table(&["the", "cat", "sat"]);
        assert_eq!(best_split(&t, "thecatsat"), vec!["the", "cat", "sat"]);
    }

    #[test]
    fn test_case_preserved() {
        let t = table(&["the", "cat"]);
        assert_eq!(best_split(&t, "TheCAT"), vec!["The", "CAT"]);
    }

    #[test]
    fn test_unknown_run_decomposes_to_chars() {
        let t = table(&["the", "cat"]);
        assert_eq!(best_split(&t, "thexq"), vec!["the", "x", "q"]);
    }

    #[test]
    fn test_all_unknown_input() {
        let t = table(&["qq", "zz"]);
        assert_eq!(best_split(&t, "xxx"), vec!["x", "x", "x"]);
    }

    #[test]
    fn test_lossless_concatenation() {
        let t = table(&["the", "cat", "sat"]);
        for s in ["thecatsat", "thexxcat", "Thé-Cat!", "q"] {
            let tokens = best_split(&t, s);
            assert_eq!(tokens.concat(), s);
        }
    }

    #[test]
    fn test_possessive_and_digit_repair() {
        let t = table(&["that", "the", "sheriff", "badge", "win", "intel", "'s"]);
        assert_eq!(
            best_split(&t, "that'sthesheriff'sbadge"),
            vec!["that's", "the", "sheriff's", "badge"],
        );
        assert_eq!(best_split(&t, "win32intel"), vec!["win", "32", "intel"]);
    }

    #[test]
    fn test_lone_apostrophe_stays_a_token() {
        let t = table(&["that", "the"]);
        assert_eq!(best_split(&t, "that'the"), vec!["that", "'", "the"]);
    }
}
