//! Output contract of the projection engine.

/// Why a course entered the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum SelectionReason {
    /// The student previously failed this course.
    Failed,
    /// The course is pending and its prerequisites are approved.
    Pending,
}

/// One course in a returned selection.
///
/// This is the external shape handed to callers. The internal ranking
/// flags never leave the engine; see the `ranking` module.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectedCourse {
    /// Course code, copied from the curriculum definition.
    pub code: String,

    /// Course title.
    pub title: String,

    /// Credit weight.
    pub credits: u32,

    /// Curriculum level.
    pub level: u32,

    /// Why the course was selectable.
    pub reason: SelectionReason,

    /// Seat/schedule identifier (NRC). Always `None` from this engine;
    /// the downstream offering resolver may fill it in place.
    #[cfg_attr(feature = "serde", serde(default))]
    pub section: Option<String>,
}

/// Echo of the effective rules a result was computed under.
///
/// Returned alongside every selection so callers can display or persist
/// the parameters that actually applied after normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AppliedRules {
    /// The effective credit cap after defaulting.
    pub credit_cap: u32,

    /// Whether prerequisites were verified. Always `true`; carried so the
    /// echo stays a complete statement of the rule set.
    pub verifies_prerequisites: bool,

    /// Whether failed courses were ranked first (the failed-first tag was
    /// active).
    pub failed_first: bool,

    /// Whether credit-maximizing selection was used instead of the greedy
    /// fill.
    pub maximize_credits: bool,
}

/// A computed course selection.
///
/// Created fresh per invocation and never mutated by the engine afterwards.
/// The order of [`selection`](Self::selection) reflects the applied ranking
/// and is meaningful to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectionResult {
    /// Chosen courses, in ranked pick order.
    pub selection: Vec<SelectedCourse>,

    /// Sum of the chosen courses' credits. Never exceeds the cap in
    /// [`rules`](Self::rules).
    pub total_credits: u32,

    /// The effective rule set this result was computed under.
    pub rules: AppliedRules,
}

impl ProjectionResult {
    /// The selection's course codes in pick order.
    pub fn course_codes(&self) -> Vec<&str> {
        self.selection.iter().map(|c| c.code.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_codes_preserve_order() {
        let result = ProjectionResult {
            selection: vec![
                SelectedCourse {
                    code: "B".into(),
                    title: "B".into(),
                    credits: 4,
                    level: 1,
                    reason: SelectionReason::Failed,
                    section: None,
                },
                SelectedCourse {
                    code: "A".into(),
                    title: "A".into(),
                    credits: 6,
                    level: 1,
                    reason: SelectionReason::Pending,
                    section: None,
                },
            ],
            total_credits: 10,
            rules: AppliedRules {
                credit_cap: 22,
                verifies_prerequisites: true,
                failed_first: true,
                maximize_credits: false,
            },
        };
        assert_eq!(result.course_codes(), vec!["B", "A"]);
    }
}
