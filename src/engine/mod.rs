//! Projection entry points.
//!
//! Wires the pipeline together: progress snapshot → eligibility filter →
//! ranking → selection → (optionally) variants. Callers fetch curriculum
//! and history through their own collaborators and hand the engine plain
//! slices; the engine computes and returns, holding no state between calls.
//!
//! # Key Types
//!
//! - [`SelectionCriteria`]: caller preferences (cap, tag order, priority
//!   courses, selection mode) with lenient normalization
//! - [`ProjectionRunner`]: the two entry points,
//!   [`compute_selection`](ProjectionRunner::compute_selection) and
//!   [`compute_variants`](ProjectionRunner::compute_variants)

mod criteria;
mod runner;

pub use criteria::{SelectionCriteria, DEFAULT_CREDIT_CAP};
pub use runner::{ProjectionRunner, DEFAULT_VARIANT_COUNT};
