//! # Text Chunker

use core::ops::Range;

use regex::Regex;

/// Chunk Range Reference for [`Chunker`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ChunkRef {
    /// A maximal non-whitespace run.
    Word(Range<usize>),

    /// A maximal whitespace run.
    Gap(Range<usize>),
}

impl From<ChunkRef> for Range<usize> {
    fn from(chunk: ChunkRef) -> Self {
        match chunk {
            ChunkRef::Word(range) => range,
            ChunkRef::Gap(range) => range,
        }
    }
}

impl ChunkRef {
    /// Returns true for whitespace chunks.
    pub fn is_gap(&self) -> bool {
        matches!(self, ChunkRef::Gap(_))
    }
}

/// Regex-based whitespace / non-whitespace chunker.
#[derive(Clone, Debug)]
pub struct Chunker {
    /// Regex matching whitespace runs.
    gap_re: Regex,
}

impl Default for Chunker {
    fn default() -> Self {
        Self::new()
    }
}

impl Chunker {
    /// Build a new [`Chunker`].
    pub fn new() -> Self {
        Self {
            gap_re: Regex::new(r"\s+").expect("static pattern"),
        }
    }

    /// Split text into alternating word / gap byte ranges.
    ///
    /// Empty runs are dropped, so the result covers the input exactly
    /// with no zero-length chunks; the empty string yields no chunks.
    ///
    /// ## Arguments
    /// * `text` - the text to split.
    pub fn chunk_refs(&self, text: &str) -> Vec<ChunkRef> {
        let mut chunks = Vec::new();
        let mut last = 0;

        for m in self.gap_re.find_iter(text) {
            let Range { start, end } = m.range();
            if last < start {
                chunks.push(ChunkRef::Word(last..start));
            }
            chunks.push(ChunkRef::Gap(start..end));
            last = end;
        }

        if last < text.len() {
            chunks.push(ChunkRef::Word(last..text.len()));
        }

        chunks
    }
}
