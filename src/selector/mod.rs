//! Credit-capped course selection.
//!
//! Two strategies over the same ranked candidate list:
//!
//! - [`select_greedy`]: rank-faithful fill. Walks the list in order and
//!   takes everything that still fits. Fast, never back-tracks, may
//!   under-fill the cap.
//! - [`select_maximizing`]: bounded subset-sum. Finds the feasible subset
//!   with the highest credit total not exceeding the cap, breaking ties
//!   toward more courses and then toward better-ranked ones.
//!
//! Both return index selections into the ranked slice and both respect the
//! cap exactly.

mod greedy;
mod maximize;
mod types;

pub use greedy::{select_greedy, select_greedy_filtered};
pub use maximize::select_maximizing;
pub use types::Selection;
