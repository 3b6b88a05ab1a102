//! Selection result shape shared by both strategies.

use crate::model::{AppliedRules, ProjectionResult, SelectedCourse};
use crate::ranking::RankedCandidate;

/// Outcome of one selection pass.
///
/// `indices` point into the ranked candidate slice the selector ran over,
/// in pick order. They never leave the engine; [`resolve`](Self::resolve)
/// turns them into the external result shape at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    /// Picked candidate positions, in pick order.
    pub indices: Vec<usize>,

    /// Credit sum of the picked candidates. Never exceeds the cap the
    /// selector ran with.
    pub total_credits: u32,
}

impl Selection {
    /// Builds the external result for this selection.
    ///
    /// Copies course data out of the ranked candidates and drops the
    /// internal ranking flags; the seat identifier starts empty for the
    /// downstream offering resolver to fill.
    pub fn resolve(&self, ranked: &[RankedCandidate<'_>], rules: AppliedRules) -> ProjectionResult {
        let selection = self
            .indices
            .iter()
            .map(|&i| {
                let candidate = &ranked[i];
                SelectedCourse {
                    code: candidate.course.code.clone(),
                    title: candidate.course.title.clone(),
                    credits: candidate.course.credits,
                    level: candidate.course.level,
                    reason: candidate.reason,
                    section: None,
                }
            })
            .collect();
        ProjectionResult {
            selection,
            total_credits: self.total_credits,
            rules,
        }
    }
}
