//! Greedy rank-order fill.

use super::types::Selection;
use crate::ranking::RankedCandidate;

/// Walks the ranked list in order, taking every course that still fits.
///
/// Stops as soon as the running total reaches the cap. Never back-tracks:
/// a skipped course is gone even if taking it instead of an earlier, larger
/// one would have filled the cap better. For the cap-optimal fill, see
/// [`select_maximizing`](super::select_maximizing).
pub fn select_greedy(ranked: &[RankedCandidate<'_>], cap: u32) -> Selection {
    select_greedy_filtered(ranked, cap, |_| true)
}

/// Greedy fill restricted to candidates admitted by `admit`.
///
/// The variant generator re-runs the fill with one course omitted, or with
/// part of the budget already committed to a forced course; `admit` is the
/// hook for both.
pub fn select_greedy_filtered<F>(ranked: &[RankedCandidate<'_>], cap: u32, admit: F) -> Selection
where
    F: Fn(usize) -> bool,
{
    let mut indices = Vec::new();
    let mut total = 0u32;
    for (i, candidate) in ranked.iter().enumerate() {
        // overflow means the course cannot fit
        let fits = total
            .checked_add(candidate.course.credits)
            .is_some_and(|sum| sum <= cap);
        if admit(i) && fits {
            indices.push(i);
            total += candidate.course.credits;
        }
        if total >= cap {
            break;
        }
    }
    Selection {
        indices,
        total_credits: total,
    }
}
