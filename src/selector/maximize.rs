//! Credit-maximizing selection via bounded subset-sum.

use super::types::Selection;
use crate::ranking::RankedCandidate;

/// Finds the feasible subset with the highest credit total not above `cap`.
///
/// Classic 0/1 subset-sum over credit totals: `combos[t]` holds one best
/// index combination summing to exactly `t` credits. Candidates are folded
/// in ranked order; when two combinations reach the same total, the one
/// with more courses wins, then the one drawn from better-ranked positions
/// (lower index sum). The answer is the highest `t` with an entry, so the
/// table only ever stores one winner per total and ties at the answer
/// cannot arise.
///
/// Runs in O(n·cap) table updates; cap is a small bounded integer
/// (realistically 1 to 40), so the clone-heavy combination storage stays cheap.
pub fn select_maximizing(ranked: &[RankedCandidate<'_>], cap: u32) -> Selection {
    let cap = cap as usize;
    let mut combos: Vec<Option<Vec<usize>>> = vec![None; cap + 1];
    combos[0] = Some(Vec::new());

    for (i, candidate) in ranked.iter().enumerate() {
        let credits = candidate.course.credits as usize;
        // downward so a course joins each combination at most once
        for t in (credits..=cap).rev() {
            let with_course = match &combos[t - credits] {
                Some(prev) => {
                    let mut extended = prev.clone();
                    extended.push(i);
                    extended
                }
                None => continue,
            };
            let replace = match &combos[t] {
                None => true,
                Some(current) => better_combination(&with_course, current),
            };
            if replace {
                combos[t] = Some(with_course);
            }
        }
    }

    let best_total = (0..=cap).rev().find(|&t| combos[t].is_some()).unwrap_or(0);
    let indices = combos[best_total].take().unwrap_or_default();
    Selection {
        indices,
        total_credits: best_total as u32,
    }
}

/// Whether combination `a` beats `b` for the same credit total.
///
/// More courses wins. With equal counts, the lower index sum wins; counts
/// being equal, that is exactly the lower mean ranked position, preferring
/// combinations drawn from earlier (better-ranked) candidates.
fn better_combination(a: &[usize], b: &[usize]) -> bool {
    if a.len() != b.len() {
        return a.len() > b.len();
    }
    let sum_a: usize = a.iter().sum();
    let sum_b: usize = b.iter().sum();
    sum_a < sum_b
}
