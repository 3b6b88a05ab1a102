//! Perturbation-based alternate generation.

use crate::model::ProjectionResult;
use crate::ranking::RankedCandidate;
use crate::selector::{select_greedy_filtered, Selection};

/// Generates up to `max_count` results: the base first, then alternates.
///
/// Alternates are built in two passes over the ranked list the base was
/// computed from:
///
/// 1. **Omission**: for each course in the base selection, re-run the
///    greedy fill with that course excluded.
/// 2. **Forced inclusion**: for each prioritized course the base left out,
///    place it first (skipping it when it alone exceeds the cap) and
///    greedily fill the remaining budget.
///
/// An alternate equal to an already-accepted result (same course codes in
/// the same order and the same total) is dropped. `max_count` of zero
/// yields just the base result.
pub fn generate(
    ranked: &[RankedCandidate<'_>],
    base: ProjectionResult,
    cap: u32,
    max_count: usize,
) -> Vec<ProjectionResult> {
    let target = max_count.max(1);
    let base_codes: Vec<String> = base.selection.iter().map(|c| c.code.clone()).collect();
    let rules = base.rules;
    let mut results = vec![base];

    // omission pass
    for omitted in &base_codes {
        if results.len() >= target {
            return results;
        }
        let refill = select_greedy_filtered(ranked, cap, |i| ranked[i].course.code != *omitted);
        push_unless_duplicate(refill.resolve(ranked, rules), &mut results);
    }

    // forced-inclusion pass
    for (idx, candidate) in ranked.iter().enumerate() {
        if results.len() >= target {
            return results;
        }
        if !candidate.is_priority || base_codes.contains(&candidate.course.code) {
            continue;
        }
        let credits = candidate.course.credits;
        if credits > cap {
            continue;
        }
        let fill = select_greedy_filtered(ranked, cap - credits, |i| i != idx);
        let mut indices = vec![idx];
        indices.extend(fill.indices);
        let forced = Selection {
            indices,
            total_credits: credits + fill.total_credits,
        };
        push_unless_duplicate(forced.resolve(ranked, rules), &mut results);
    }

    results
}

fn push_unless_duplicate(candidate: ProjectionResult, accepted: &mut Vec<ProjectionResult>) {
    let duplicate = accepted.iter().any(|r| {
        r.total_credits == candidate.total_credits && r.course_codes() == candidate.course_codes()
    });
    if !duplicate {
        accepted.push(candidate);
    }
}
