//! Search layer facade.
//!
//! This module provides the title-matching machinery for marquee:
//!
//! - **[`similarity`]**: Character-set similarity scoring between two strings.
//! - **[`filter`]**: Query evaluation over the catalog into a visibility snapshot.
//! - **[`suggest`]**: Closest-title suggestions for queries that match nothing.

pub mod filter;
pub mod similarity;
pub mod suggest;

pub use filter::{FilterOutcome, evaluate, no_results_message, title_matches};
pub use similarity::char_set_similarity;
