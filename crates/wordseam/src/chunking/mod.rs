//! # Whitespace Chunking
//!
//! Splits raw text into maximal runs of non-whitespace ([`ChunkRef::Word`])
//! and whitespace ([`ChunkRef::Gap`]) characters. Word chunks are the unit
//! both the segmenter and the candidate generator operate over; gap chunks
//! pass through untouched.

pub mod chunker;

pub use chunker::{ChunkRef, Chunker};
