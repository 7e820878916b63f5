//! # Language Models
//!
//! A [`LanguageModel`] owns one immutable word-cost lexicon plus the
//! spacing rule sets for its language, and exposes the three engine
//! operations: `split`, `candidates`, and `rejoin`. Models are built
//! through [`ModelBuilder`]; there is no implicit process-wide default
//! model.

pub mod builder;
pub mod language_model;

pub use builder::ModelBuilder;
pub use language_model::LanguageModel;
