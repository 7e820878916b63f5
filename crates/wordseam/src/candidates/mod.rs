//! # Candidate Generation
//!
//! Beam search over whole texts, producing the top-N lowest-cost
//! segmentations instead of the single best one.

pub mod beam;

pub use beam::{Candidate, DEFAULT_BEAM_WIDTH, generate_candidates};
