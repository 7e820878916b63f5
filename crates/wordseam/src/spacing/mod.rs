//! # Spacing Reconstruction
//!
//! Rebuilds naturally spaced text from a token stream, using
//! per-language punctuation rule sets and a double-quote state
//! machine. See:
//! * [`SpacingRules`] for the rule tables.
//! * [`rejoin_tokens`] for the reconstruction pass.

pub mod rejoiner;
pub mod rules;

pub use rejoiner::rejoin_tokens;
pub use rules::SpacingRules;
