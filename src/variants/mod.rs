//! Variant generation.
//!
//! Produces alternate selections around a primary result so students can
//! compare competing plans. Alternates come from two perturbations of the
//! same ranked candidate list: omitting one base course and re-filling, or
//! forcing in a prioritized course the base left out. Results identical to
//! an already-accepted one (same ordered codes, same total) are dropped.

mod generator;

pub use generator::generate;
