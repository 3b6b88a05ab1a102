//! Projection execution pipeline.

use super::criteria::SelectionCriteria;
use crate::eligibility;
use crate::model::{
    AppliedRules, CourseDefinition, HistoryRecord, ProgressSnapshot, ProjectionResult,
};
use crate::ranking::{self, PriorityTag, RankedCandidate};
use crate::selector;
use crate::variants;

/// Variant count used when the caller expresses no preference.
pub const DEFAULT_VARIANT_COUNT: usize = 5;

/// Executes course projections.
pub struct ProjectionRunner;

impl ProjectionRunner {
    /// Computes one selection from a curriculum and academic history.
    ///
    /// Approved courses are dropped, failed courses bypass the prerequisite
    /// check, and the criteria are normalized rather than rejected (see
    /// [`SelectionCriteria`]). The result's [`rules`](ProjectionResult::rules)
    /// echo the parameters that actually applied.
    pub fn compute_selection(
        curriculum: &[CourseDefinition],
        history: &[HistoryRecord],
        criteria: &SelectionCriteria,
    ) -> ProjectionResult {
        let (_, result) = Self::project(curriculum, history, criteria);
        result
    }

    /// Computes the base selection plus alternates, `max_count` results in
    /// total.
    ///
    /// The base result always comes first. Alternates are derived by
    /// omitting one selected course at a time, then by forcing in
    /// prioritized courses the base left out; duplicates are dropped.
    /// `max_count` of zero yields just the base.
    pub fn compute_variants(
        curriculum: &[CourseDefinition],
        history: &[HistoryRecord],
        criteria: &SelectionCriteria,
        max_count: usize,
    ) -> Vec<ProjectionResult> {
        let (ranked, base) = Self::project(curriculum, history, criteria);
        variants::generate(&ranked, base, criteria.effective_credit_cap(), max_count)
    }

    /// Shared pipeline: reduce the history, filter, rank, select, resolve.
    fn project<'a>(
        curriculum: &'a [CourseDefinition],
        history: &[HistoryRecord],
        criteria: &SelectionCriteria,
    ) -> (Vec<RankedCandidate<'a>>, ProjectionResult) {
        let snapshot = ProgressSnapshot::from_records(history);
        let cap = criteria.effective_credit_cap();
        let priority = criteria.priority_set();

        let candidates = eligibility::eligible(curriculum, &snapshot.approved, &snapshot.failed);
        tracing::debug!(
            curriculum = curriculum.len(),
            history = history.len(),
            approved = snapshot.approved.len(),
            failed = snapshot.failed.len(),
            candidates = candidates.len(),
            cap,
            maximize = criteria.maximize_credits,
            "computing projection"
        );

        let ranked = ranking::rank(candidates, &snapshot.failed, &priority, &criteria.tags);
        let selection = if criteria.maximize_credits {
            selector::select_maximizing(&ranked, cap)
        } else {
            selector::select_greedy(&ranked, cap)
        };
        let rules = AppliedRules {
            credit_cap: cap,
            verifies_prerequisites: true,
            failed_first: criteria.tags.contains(&PriorityTag::FailedFirst),
            maximize_credits: criteria.maximize_credits,
        };
        let result = selection.resolve(&ranked, rules);
        tracing::trace!(
            total = result.total_credits,
            codes = ?result.course_codes(),
            "selection computed"
        );
        (ranked, result)
    }
}
