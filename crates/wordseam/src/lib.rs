//! # `wordseam` Word Boundary Inference
//!
//! `wordseam` infers word boundaries in concatenated text (e.g.
//! `"derekanderson"`) using a frequency-ranked dictionary, and can
//! reconstruct naturally spaced text from a token stream.
//!
//! `wordseam` consumes `wordninja`-style dictionary artifacts: one
//! lowercase word per line, ordered by descending frequency,
//! optionally gzip-compressed.
//!
//! See:
//! * [`model::LanguageModel`] for the engine facade.
//! * [`lexicon`] to build and load word-cost tables.
//! * [`splitting`] for the single-best dynamic-programming split.
//! * [`candidates`] for top-N beam-search segmentations.
//! * [`spacing`] for language-aware respacing.
//!
//! ```rust
//! use wordseam::LanguageModel;
//!
//! // Frequency-ranked word list, most frequent first.
//! let model = LanguageModel::from_word_list(["the", "cat", "sat"]).unwrap();
//!
//! assert_eq!(model.split("thecatsat"), vec!["the", "cat", "sat"]);
//! assert_eq!(model.rejoin("thecatsat"), "the cat sat");
//! ```
//!
//! Built-in languages load their dictionary artifact from a directory
//! passed to the builder (or named by the `WORDSEAM_DICT_DIR`
//! environment variable):
//!
//! ```rust,ignore
//! use wordseam::{Language, LanguageModel};
//!
//! let model = LanguageModel::builder()
//!     .language(Language::De)
//!     .dict_dir("/opt/wordseam/dicts")
//!     .build()?;
//! ```
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``ahash``
//!
//! #### feature: ``ahash``
//!
//! This swaps all HashMap/HashSet implementations for ``ahash``; which
//! is a performance win on many/(most?) modern CPUs.
//!
//! This is done by the ``types::WSHash{*}`` type alias machinery.
#![warn(missing_docs, unused)]

pub mod candidates;
pub mod chunking;
pub mod errors;
pub mod language;
pub mod lexicon;
pub mod model;
pub mod spacing;
pub mod splitting;
pub mod types;

pub use candidates::Candidate;
pub use errors::{WSResult, WordseamError};
pub use language::Language;
pub use model::{LanguageModel, ModelBuilder};
