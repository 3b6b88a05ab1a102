//! Candidate computation.

use std::collections::HashSet;

use crate::model::{CourseDefinition, SelectionReason};

/// An eligible course paired with the reason it is takable.
///
/// Borrows its definition from the caller's curriculum slice; candidates
/// only live for the duration of one engine invocation.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    /// The underlying curriculum entry.
    pub course: &'a CourseDefinition,

    /// [`SelectionReason::Failed`] when the course was previously failed,
    /// [`SelectionReason::Pending`] otherwise.
    pub reason: SelectionReason,
}

/// Whether every prerequisite listed by `course` is approved.
///
/// The prerequisite expression is split on commas; tokens are trimmed and
/// empty tokens ignored. A blank expression means no prerequisites, which
/// trivially holds.
pub fn prerequisites_met(course: &CourseDefinition, approved: &HashSet<String>) -> bool {
    let expr = course.prerequisites.trim();
    if expr.is_empty() {
        return true;
    }
    expr.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .all(|code| approved.contains(code))
}

/// Computes the candidate set for a curriculum and a student's history sets.
///
/// A course is excluded outright when its code is approved. Of the rest, a
/// course is a candidate when it was previously failed or when all of its
/// prerequisites are approved. The approved check runs first, so a code
/// present in both sets is excluded. Curriculum order is preserved.
pub fn eligible<'a>(
    curriculum: &'a [CourseDefinition],
    approved: &HashSet<String>,
    failed: &HashSet<String>,
) -> Vec<Candidate<'a>> {
    curriculum
        .iter()
        .filter(|course| !approved.contains(&course.code))
        .filter(|course| failed.contains(&course.code) || prerequisites_met(course, approved))
        .map(|course| Candidate {
            course,
            reason: if failed.contains(&course.code) {
                SelectionReason::Failed
            } else {
                SelectionReason::Pending
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(code: &str, prerequisites: &str) -> CourseDefinition {
        CourseDefinition::new(code, code, 6, 1, prerequisites)
    }

    fn set(codes: &[&str]) -> HashSet<String> {
        codes.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_blank_prerequisites_always_met() {
        assert!(prerequisites_met(&course("A", ""), &set(&[])));
        assert!(prerequisites_met(&course("A", "   "), &set(&[])));
    }

    #[test]
    fn test_prerequisite_tokens_trimmed() {
        let c = course("C", "  A , B ,, ");
        assert!(prerequisites_met(&c, &set(&["A", "B"])));
        assert!(!prerequisites_met(&c, &set(&["A"])));
    }

    #[test]
    fn test_approved_courses_excluded() {
        let curriculum = vec![course("A", ""), course("B", "")];
        let candidates = eligible(&curriculum, &set(&["A"]), &set(&[]));
        let codes: Vec<_> = candidates.iter().map(|c| c.course.code.as_str()).collect();
        assert_eq!(codes, vec!["B"]);
    }

    #[test]
    fn test_unmet_prerequisites_excluded() {
        let curriculum = vec![course("A", ""), course("B", "A")];
        let candidates = eligible(&curriculum, &set(&[]), &set(&[]));
        let codes: Vec<_> = candidates.iter().map(|c| c.course.code.as_str()).collect();
        assert_eq!(codes, vec!["A"]);
    }

    #[test]
    fn test_failed_course_bypasses_prerequisites() {
        // a failed course was takable once; it stays available even when
        // the approved set no longer covers its prerequisites
        let curriculum = vec![course("B", "A")];
        let candidates = eligible(&curriculum, &set(&[]), &set(&["B"]));
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].reason, SelectionReason::Failed);
    }

    #[test]
    fn test_pending_reason_for_unlocked_course() {
        let curriculum = vec![course("B", "A")];
        let candidates = eligible(&curriculum, &set(&["A"]), &set(&[]));
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].reason, SelectionReason::Pending);
    }

    #[test]
    fn test_approved_wins_over_failed_membership() {
        // code in both sets: the approved exclusion runs first
        let curriculum = vec![course("A", "")];
        let candidates = eligible(&curriculum, &set(&["A"]), &set(&["A"]));
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_prerequisite_chain_unlocks_one_level() {
        let curriculum = vec![
            course("L1", ""),
            course("L2", "L1"),
            course("L3", "L2"),
            course("L4", "L3"),
        ];
        let candidates = eligible(&curriculum, &set(&["L1"]), &set(&[]));
        let codes: Vec<_> = candidates.iter().map(|c| c.course.code.as_str()).collect();
        assert_eq!(codes, vec!["L2"]);
    }

    #[test]
    fn test_empty_curriculum_yields_no_candidates() {
        assert!(eligible(&[], &set(&["A"]), &set(&[])).is_empty());
    }

    #[test]
    fn test_curriculum_order_preserved() {
        let curriculum = vec![course("C", ""), course("A", ""), course("B", "")];
        let candidates = eligible(&curriculum, &set(&[]), &set(&[]));
        let codes: Vec<_> = candidates.iter().map(|c| c.course.code.as_str()).collect();
        assert_eq!(codes, vec!["C", "A", "B"]);
    }
}
