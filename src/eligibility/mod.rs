//! Eligibility filtering.
//!
//! Determines which curriculum courses a student may legally take: courses
//! not yet approved whose prerequisites are all approved, plus previously
//! failed courses (a failure implies the course was takable once, so its
//! prerequisites are not re-checked).
//!
//! Pure set logic over the inputs; no side effects, no state.

mod filter;

pub use filter::{eligible, prerequisites_met, Candidate};
