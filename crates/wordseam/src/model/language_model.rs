//! # Language Model

use std::path::Path;

use crate::candidates::{Candidate, generate_candidates};
use crate::chunking::{ChunkRef, Chunker};
use crate::errors::WSResult;
use crate::language::Language;
use crate::lexicon::WordCostTable;
use crate::model::builder::ModelBuilder;
use crate::spacing::{SpacingRules, rejoin_tokens};
use crate::splitting::best_split;

/// Splits, ranks, and rejoins text based on real-world word
/// frequencies for a built-in language or a custom dictionary.
///
/// A model is immutable after construction: the cost table and rule
/// sets never change, so a single instance can serve concurrent
/// callers without locking. Every operation allocates only transient
/// per-call state.
#[derive(Clone, Debug)]
pub struct LanguageModel {
    /// The word-cost lexicon.
    table: WordCostTable,

    /// Per-language spacing rule sets.
    rules: SpacingRules,

    /// The whitespace chunker.
    chunker: Chunker,

    /// The built-in language, if any; None for custom dictionaries.
    language: Option<Language>,
}

impl LanguageModel {
    /// Start building a model; see [`ModelBuilder`].
    pub fn builder() -> ModelBuilder {
        ModelBuilder::new()
    }

    /// Build a model for a built-in language.
    ///
    /// The dictionary artifact is resolved against the
    /// [`crate::model::builder::DICT_DIR_ENV`] environment variable;
    /// use the builder to pass an explicit directory instead.
    pub fn from_language(language: Language) -> WSResult<Self> {
        Self::builder().language(language).build()
    }

    /// Build a model from a custom dictionary artifact.
    pub fn from_artifact<P: AsRef<Path>>(path: P) -> WSResult<Self> {
        Self::builder().custom_artifact(path).build()
    }

    /// Build a model from an in-memory ranked word list.
    pub fn from_word_list<I, S>(words: I) -> WSResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::builder().word_list(words).build()
    }

    pub(crate) fn from_parts(table: WordCostTable, language: Option<Language>) -> Self {
        Self {
            table,
            rules: SpacingRules::for_language(language),
            chunker: Chunker::new(),
            language,
        }
    }

    /// The built-in language this model was constructed for, if any.
    pub fn language(&self) -> Option<Language> {
        self.language
    }

    /// The word-cost lexicon.
    pub fn cost_table(&self) -> &WordCostTable {
        &self.table
    }

    /// Infer word boundaries in `text`.
    ///
    /// Whitespace runs pass through as verbatim tokens; each
    /// non-whitespace run is replaced by its minimum-cost split.
    /// Concatenating the returned tokens reproduces `text` exactly,
    /// case preserved. Never fails; the empty string yields no tokens.
    ///
    /// ## Arguments
    /// * `text` - the text to segment.
    pub fn split(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();

        for chunk_ref in self.chunker.chunk_refs(text) {
            match chunk_ref {
                ChunkRef::Gap(range) => tokens.push(text[range].to_string()),
                ChunkRef::Word(range) => tokens.extend(best_split(&self.table, &text[range])),
            }
        }

        tokens
    }

    /// The `top_n` lowest-cost segmentations of `text`, best first.
    ///
    /// Case is folded for ranking, so candidate tokens are lowercase;
    /// use [`LanguageModel::split`] when case must be preserved. The
    /// top-ranked candidate normally agrees with `split`, but the two
    /// passes apply chunking and merge rules at different points and
    /// are not provably identical.
    ///
    /// ## Arguments
    /// * `text` - the text to segment.
    /// * `top_n` - how many candidates to return.
    pub fn candidates(&self, text: &str, top_n: usize) -> Vec<Candidate> {
        generate_candidates(&self.table, &self.chunker, text, top_n)
    }

    /// Split `text` and rejoin it with typographically correct,
    /// language-aware spacing.
    ///
    /// ## Arguments
    /// * `text` - the text to segment and respace.
    pub fn rejoin(&self, text: &str) -> String {
        rejoin_tokens(&self.rules, &self.split(text))
    }
}
