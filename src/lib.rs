//! Course-projection engine for curriculum-driven study planning.
//!
//! Given a curriculum ("malla") and a student's academic history
//! ("avance"), computes which courses the student should take next:
//!
//! - **Eligibility**: drops already-approved courses and keeps pending ones
//!   whose prerequisites are all approved; failed courses always qualify.
//! - **Ranking**: stable multi-tag ordering (failed courses first,
//!   prioritized courses first, lowest curriculum level first) with level
//!   order as the final tie-breaker.
//! - **Selection**: greedy rank-order fill under a credit cap, or an exact
//!   credit-maximizing fill that prefers more and earlier-ranked courses.
//! - **Variants**: alternate selections derived from the base by omitting
//!   one selected course at a time or by forcing prioritized courses in.
//!
//! # Architecture
//!
//! The engine is pure and synchronous: curriculum and history go in as
//! slices, results come out as plain values. Where those inputs come from
//! is abstracted behind the `source` traits, so hosts can plug in an
//! institutional API client or a database without touching the pipeline.
//! The optional `wasm` feature exports the entry points to JavaScript.

pub mod eligibility;
pub mod engine;
pub mod model;
pub mod ranking;
pub mod selector;
pub mod source;
pub mod variants;

#[cfg(feature = "wasm")]
pub mod wasm;
