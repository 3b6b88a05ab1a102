//! Priority ranking of eligible courses.
//!
//! Orders the candidate set by a caller-supplied sequence of priority tags.
//! Tags are evaluated in order per comparison; the first tag that
//! discriminates two candidates decides their relative order, and later
//! tags act as tie-breakers. When no tag discriminates (including an empty
//! tag list), candidates fall back to ascending curriculum level.
//!
//! The sort is stable: candidates equal under every tag keep their
//! curriculum order, which keeps variant generation reproducible.

mod engine;
mod types;

pub use engine::rank;
pub use types::{PriorityTag, RankedCandidate};
