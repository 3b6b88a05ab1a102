//! Academic progress records and their set view.

use std::collections::HashSet;

/// Outcome of one historical course attempt.
///
/// Anything that is neither an approval nor a failure (withdrawals,
/// in-progress enrollments, portal-specific markers) maps to
/// [`CourseStatus::Other`] and has no effect on eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CourseStatus {
    Approved,
    Failed,
    Other,
}

impl CourseStatus {
    /// Parses a raw status string from the progress feed.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    /// Both the feed's Spanish literals (`"APROBADO"`, `"REPROBADO"`) and
    /// the English forms (`"APPROVED"`, `"FAILED"`) are recognized; every
    /// other value is [`CourseStatus::Other`].
    pub fn from_raw(raw: &str) -> Self {
        match raw.trim().to_uppercase().as_str() {
            "APROBADO" | "APPROVED" => CourseStatus::Approved,
            "REPROBADO" | "FAILED" => CourseStatus::Failed,
            _ => CourseStatus::Other,
        }
    }
}

/// One historical course attempt from the academic-progress feed ("avance").
///
/// A student may carry several records for the same course code (retakes).
/// The engine never inspects individual records beyond their status; it
/// reduces the full history to a [`ProgressSnapshot`] first.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistoryRecord {
    /// Code of the attempted course.
    pub course_code: String,

    /// Raw outcome status as delivered by the feed. See
    /// [`CourseStatus::from_raw`] for how it is interpreted.
    pub status: String,

    /// Academic period of the attempt (e.g. `"202310"`). Not used by the
    /// engine; carried for callers.
    #[cfg_attr(feature = "serde", serde(default))]
    pub period: String,

    /// Enrollment metadata (inscription type, section, ...). Not used by
    /// the engine.
    #[cfg_attr(feature = "serde", serde(default))]
    pub enrollment: Option<String>,
}

impl HistoryRecord {
    /// Creates a record with no enrollment metadata.
    pub fn new(course_code: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            course_code: course_code.into(),
            status: status.into(),
            period: String::new(),
            enrollment: None,
        }
    }

    /// The parsed outcome of this attempt.
    pub fn outcome(&self) -> CourseStatus {
        CourseStatus::from_raw(&self.status)
    }
}

/// Set view of a student's history: which course codes are approved and
/// which are failed.
///
/// A code with both an approval and a failure on record counts as approved
/// only; a passed retake clears the failure. That precedence is what the
/// surrounding pipeline relies on: pending courses are computed as
/// curriculum minus approved, so an approved code can never re-enter a
/// selection through its stale failure record.
#[derive(Debug, Clone, Default)]
pub struct ProgressSnapshot {
    /// Codes with at least one approved attempt.
    pub approved: HashSet<String>,

    /// Codes with a failed attempt and no approved attempt.
    pub failed: HashSet<String>,
}

impl ProgressSnapshot {
    /// Reduces a raw history to its approved/failed sets.
    pub fn from_records(records: &[HistoryRecord]) -> Self {
        let mut approved = HashSet::new();
        let mut failed = HashSet::new();
        for record in records {
            match record.outcome() {
                CourseStatus::Approved => {
                    approved.insert(record.course_code.clone());
                }
                CourseStatus::Failed => {
                    failed.insert(record.course_code.clone());
                }
                CourseStatus::Other => {}
            }
        }
        // approval wins over a failure for the same code
        failed.retain(|code| !approved.contains(code));
        Self { approved, failed }
    }
}
