//! Curriculum course definitions.

/// A single course as declared in a program curriculum ("malla").
///
/// Definitions are immutable per-request inputs; the engine borrows them
/// for the duration of one call and never stores them.
///
/// # Examples
///
/// ```
/// use u_projection::model::CourseDefinition;
///
/// let algebra = CourseDefinition::new("DCCB-00107", "Algebra I", 6, 1, "");
/// let calculus2 = CourseDefinition::new("DCCB-00108", "Calculo II", 6, 2, "DCCB-00106");
/// assert_eq!(calculus2.level, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CourseDefinition {
    /// Unique course code within the curriculum.
    pub code: String,

    /// Human-readable course title.
    pub title: String,

    /// Credit weight counted against the selection cap.
    pub credits: u32,

    /// Curriculum level (semester position). Used as the fallback sort key.
    pub level: u32,

    /// Comma-separated prerequisite course codes.
    ///
    /// Blank or whitespace-only means the course has no prerequisites.
    /// Tokens are trimmed and empty tokens are ignored when parsed.
    #[cfg_attr(feature = "serde", serde(default))]
    pub prerequisites: String,
}

impl CourseDefinition {
    /// Creates a course definition.
    pub fn new(
        code: impl Into<String>,
        title: impl Into<String>,
        credits: u32,
        level: u32,
        prerequisites: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            title: title.into(),
            credits,
            level,
            prerequisites: prerequisites.into(),
        }
    }
}
