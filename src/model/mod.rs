//! Shared data model for the projection engine.
//!
//! Input records arrive from the curriculum and progress collaborators;
//! output records are handed to the caller and, further downstream, to the
//! seat-offering resolver. Everything here is plain data: created per
//! invocation, never cached, never mutated by the engine after it is
//! returned.
//!
//! # Key Types
//!
//! - [`CourseDefinition`]: one curriculum entry (code, credits, level,
//!   prerequisite expression)
//! - [`HistoryRecord`] / [`CourseStatus`]: one historical course attempt
//!   and its lenient status parse
//! - [`ProgressSnapshot`]: approved/failed set view of a full history
//! - [`ProjectionResult`] / [`SelectedCourse`] / [`AppliedRules`]: the
//!   engine's output contract

mod course;
mod history;
mod result;

pub use course::CourseDefinition;
pub use history::{CourseStatus, HistoryRecord, ProgressSnapshot};
pub use result::{AppliedRules, ProjectionResult, SelectedCourse, SelectionReason};
