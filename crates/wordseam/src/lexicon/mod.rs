//! # Word-Cost Lexicon
//!
//! A lexicon maps lowercase words to scalar costs derived from their
//! frequency rank; lower cost means a more plausible word. See:
//! * [`WordCostTable`] for the immutable lookup table.
//! * [`LexiconEdits`] / [`build_cost_table`] for construction with
//!   blacklist / add-word / override rules.
//! * [`io`] for reading dictionary artifacts.

pub mod builder;
pub mod cost_table;
pub mod io;

pub use builder::{LexiconEdits, build_cost_table};
pub use cost_table::{SENTINEL_COST, UNKNOWN_CHAR_COST, WordCostTable};
