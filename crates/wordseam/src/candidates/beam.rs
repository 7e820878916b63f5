//! # Beam Search

use crate::chunking::{ChunkRef, Chunker};
use crate::lexicon::{SENTINEL_COST, WordCostTable};
use crate::splitting::merges::post_process_candidate;

/// The minimum beam width, regardless of how few results were asked for.
pub const DEFAULT_BEAM_WIDTH: usize = 10;

/// One ranked segmentation: a token sequence and its cumulative cost.
#[derive(Clone, Debug, PartialEq)]
pub struct Candidate {
    /// The tokens, in input order; whitespace runs appear verbatim.
    pub tokens: Vec<String>,

    /// Sum of the individual token costs.
    pub cost: f64,
}

impl Candidate {
    fn empty() -> Self {
        Self {
            tokens: Vec::new(),
            cost: 0.0,
        }
    }

    /// Extend this candidate with one token at the given cost.
    fn extended(&self, token: &str, cost: f64) -> Self {
        let mut tokens = Vec::with_capacity(self.tokens.len() + 1);
        tokens.extend(self.tokens.iter().cloned());
        tokens.push(token.to_string());
        Self {
            tokens,
            cost: self.cost + cost,
        }
    }

    /// Concatenate another candidate's tokens onto this one.
    fn chained(&self, other: &Candidate) -> Self {
        let mut tokens = Vec::with_capacity(self.tokens.len() + other.tokens.len());
        tokens.extend(self.tokens.iter().cloned());
        tokens.extend(other.tokens.iter().cloned());
        Self {
            tokens,
            cost: self.cost + other.cost,
        }
    }
}

/// Sort ascending by cost and keep the cheapest `width` entries.
///
/// The sort is stable, so equal-cost candidates keep insertion order.
fn prune(beam: &mut Vec<Candidate>, width: usize) {
    beam.sort_by(|a, b| a.cost.total_cmp(&b.cost));
    beam.truncate(width);
}

/// Bounded DP over a single non-whitespace chunk.
///
/// At each char position, only the `beam_width` cheapest partial
/// segmentations ending there are retained. Multi-character unknown
/// spans carry [`SENTINEL_COST`] and are refused outright; unknown
/// single characters keep every position reachable.
fn chunk_beam(table: &WordCostTable, chunk: &str, beam_width: usize) -> Vec<Candidate> {
    let bounds: Vec<usize> = chunk
        .char_indices()
        .map(|(i, _)| i)
        .chain([chunk.len()])
        .collect();
    let n = bounds.len() - 1;

    let mut dp: Vec<Vec<Candidate>> = Vec::with_capacity(n + 1);
    dp.push(vec![Candidate::empty()]);

    for i in 1..=n {
        let mut frontier: Vec<Candidate> = Vec::new();

        for j in i.saturating_sub(table.max_word_len())..i {
            let word = &chunk[bounds[j]..bounds[i]];
            let word_cost = table.span_cost(word);
            if word_cost < SENTINEL_COST {
                for prev in &dp[j] {
                    frontier.push(prev.extended(word, word_cost));
                }
            }
        }

        prune(&mut frontier, beam_width);
        dp.push(frontier);
    }

    dp.pop().expect("dp has n + 1 entries")
}

/// Generate the `top_n` lowest-cost segmentations of arbitrary text.
///
/// The text is case-folded for costing; candidate tokens are lowercase.
/// Whitespace chunks pass through verbatim at zero cost; non-whitespace
/// chunks contribute their per-chunk beam, combined across chunks by
/// cross product with re-pruning to the beam width.
///
/// ## Arguments
/// * `table` - the word cost table.
/// * `chunker` - the whitespace chunker.
/// * `text` - the text to segment.
/// * `top_n` - how many candidates to return.
pub fn generate_candidates(
    table: &WordCostTable,
    chunker: &Chunker,
    text: &str,
    top_n: usize,
) -> Vec<Candidate> {
    let text = text.to_lowercase();
    let beam_width = top_n.max(DEFAULT_BEAM_WIDTH);

    let mut beam = vec![Candidate::empty()];

    for chunk_ref in chunker.chunk_refs(&text) {
        let mut next: Vec<Candidate> = Vec::new();

        match chunk_ref {
            ChunkRef::Gap(range) => {
                let gap = &text[range];
                for prev in &beam {
                    next.push(prev.extended(gap, 0.0));
                }
            }
            ChunkRef::Word(range) => {
                let chunk = &text[range];
                let mut chunk_candidates = chunk_beam(table, chunk, beam_width);
                if chunk_candidates.is_empty() {
                    // Unreachable given the single-char fallback, but
                    // degrade to the whole chunk rather than dropping it.
                    chunk_candidates.push(Candidate {
                        tokens: vec![chunk.to_string()],
                        cost: SENTINEL_COST,
                    });
                }

                for prev in &beam {
                    for chunk_candidate in &chunk_candidates {
                        next.push(prev.chained(chunk_candidate));
                    }
                }
            }
        }

        prune(&mut next, beam_width);
        beam = next;
    }

    beam.truncate(top_n);
    beam.into_iter()
        .map(|c| Candidate {
            tokens: post_process_candidate(c.tokens),
            cost: c.cost,
        })
        .collect()
}
