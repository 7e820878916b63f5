//! # Single-Best Segmentation
//!
//! Dynamic-programming recovery of the minimum-cost split of one
//! non-whitespace chunk. See:
//! * [`best_split`] for the DP itself.
//! * [`merges`] for the token fusion rules shared with the candidate
//!   generator.

pub mod best_split;
pub mod merges;

pub use best_split::best_split;
