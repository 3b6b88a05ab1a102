//! Source traits and their shared error type.

use thiserror::Error;

use crate::model::{CourseDefinition, HistoryRecord};

/// Failure modes common to all sources.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The requested record set does not exist in the backing system.
    #[error("{what} not found for {key}")]
    NotFound {
        /// What was being looked up, e.g. `"curriculum"`.
        what: &'static str,
        /// The lookup key, already formatted for display.
        key: String,
    },

    /// The backing system could not be reached or answered abnormally.
    #[error("source unavailable: {reason}")]
    Unavailable {
        /// Transport- or backend-specific detail.
        reason: String,
    },
}

/// Provides curriculum definitions per program and catalog.
pub trait CurriculumSource: Send + Sync {
    /// Fetches the full course list for one program/catalog pair.
    fn curriculum(
        &self,
        program: &str,
        catalog: &str,
    ) -> Result<Vec<CourseDefinition>, SourceError>;
}

/// Provides a student's recorded attempts within a program.
pub trait ProgressSource: Send + Sync {
    /// Fetches every recorded attempt for one student in one program.
    ///
    /// An enrolled student with no attempts yet is an empty vector, not an
    /// error.
    fn progress(
        &self,
        student_id: &str,
        program: &str,
    ) -> Result<Vec<HistoryRecord>, SourceError>;
}
