//! Ranking tags and the annotated candidate shape.

use crate::model::{CourseDefinition, SelectionReason};

/// A recognized ranking criterion.
///
/// Criteria are supplied as an ordered list; see [`rank`](super::rank).
///
/// # Examples
///
/// ```
/// use u_projection::ranking::PriorityTag;
///
/// // canonical names and the Spanish wire tokens both parse
/// assert_eq!(PriorityTag::parse("FAILED_FIRST"), Some(PriorityTag::FailedFirst));
/// assert_eq!(PriorityTag::parse("reprobados"), Some(PriorityTag::FailedFirst));
/// assert_eq!(PriorityTag::parse("by phase of the moon"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum PriorityTag {
    /// Previously failed courses first.
    FailedFirst,
    /// Courses on the student's explicit priority list first.
    PriorityList,
    /// Ascending curriculum level.
    LowestLevelFirst,
}

impl PriorityTag {
    /// Parses a tag token, leniently.
    ///
    /// Tokens are trimmed and matched case-insensitively. Unrecognized
    /// tokens yield `None`; callers drop them rather than erroring, so an
    /// unknown tag from a client never rejects a request.
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_uppercase().as_str() {
            "REPROBADOS" | "FAILED_FIRST" => Some(PriorityTag::FailedFirst),
            "PRIORITARIOS" | "PRIORITY_LIST" => Some(PriorityTag::PriorityList),
            "NIVEL MAS BAJO" | "LOWEST_LEVEL_FIRST" => Some(PriorityTag::LowestLevelFirst),
            _ => None,
        }
    }
}

/// A candidate annotated with the flags the ranking tags compare on.
///
/// Internal to the ranking/selection pipeline. The flags are computed once
/// before sorting and never reach the caller; the external
/// [`SelectedCourse`](crate::model::SelectedCourse) shape is built at the
/// result boundary instead.
#[derive(Debug, Clone, Copy)]
pub struct RankedCandidate<'a> {
    /// The underlying curriculum entry.
    pub course: &'a CourseDefinition,

    /// Why the course is takable (failed retake or pending with approved
    /// prerequisites).
    pub reason: SelectionReason,

    /// The student failed this course at least once.
    pub is_failed: bool,

    /// The student listed this course as a priority.
    pub is_priority: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_tokens() {
        assert_eq!(PriorityTag::parse("FAILED_FIRST"), Some(PriorityTag::FailedFirst));
        assert_eq!(PriorityTag::parse("PRIORITY_LIST"), Some(PriorityTag::PriorityList));
        assert_eq!(
            PriorityTag::parse("LOWEST_LEVEL_FIRST"),
            Some(PriorityTag::LowestLevelFirst)
        );
    }

    #[test]
    fn test_parse_spanish_tokens() {
        assert_eq!(PriorityTag::parse("REPROBADOS"), Some(PriorityTag::FailedFirst));
        assert_eq!(PriorityTag::parse("PRIORITARIOS"), Some(PriorityTag::PriorityList));
        assert_eq!(
            PriorityTag::parse("NIVEL MAS BAJO"),
            Some(PriorityTag::LowestLevelFirst)
        );
    }

    #[test]
    fn test_parse_is_lenient() {
        assert_eq!(PriorityTag::parse("  reprobados "), Some(PriorityTag::FailedFirst));
        assert_eq!(PriorityTag::parse("nivel mas bajo"), Some(PriorityTag::LowestLevelFirst));
        assert_eq!(PriorityTag::parse("UNKNOWN"), None);
        assert_eq!(PriorityTag::parse(""), None);
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_serde_names_match_canonical_tokens() {
        let json = serde_json::to_string(&PriorityTag::LowestLevelFirst).unwrap();
        assert_eq!(json, "\"LOWEST_LEVEL_FIRST\"");
        let tag: PriorityTag = serde_json::from_str("\"FAILED_FIRST\"").unwrap();
        assert_eq!(tag, PriorityTag::FailedFirst);
    }
}
