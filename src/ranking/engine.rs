//! Tag comparator and the ranking entry point.

use std::cmp::Ordering;
use std::collections::HashSet;

use super::types::{PriorityTag, RankedCandidate};
use crate::eligibility::Candidate;

/// Annotates candidates with their ranking flags and sorts them.
///
/// Tags are applied per comparison in the order given; the first tag that
/// discriminates wins. Unrecognized tag tokens never reach this function,
/// since they are dropped when the caller parses its tag list (see
/// [`PriorityTag::parse`]). The sort is stable, so candidates equal under
/// every tag keep their curriculum order.
pub fn rank<'a>(
    candidates: Vec<Candidate<'a>>,
    failed: &HashSet<String>,
    priority: &HashSet<String>,
    tags: &[PriorityTag],
) -> Vec<RankedCandidate<'a>> {
    let mut ranked: Vec<RankedCandidate<'a>> = candidates
        .into_iter()
        .map(|candidate| RankedCandidate {
            is_failed: failed.contains(&candidate.course.code),
            is_priority: priority.contains(&candidate.course.code),
            course: candidate.course,
            reason: candidate.reason,
        })
        .collect();
    ranked.sort_by(|a, b| compare_by_tags(a, b, tags));
    ranked
}

/// First discriminating tag decides; otherwise ascending level.
fn compare_by_tags(
    a: &RankedCandidate<'_>,
    b: &RankedCandidate<'_>,
    tags: &[PriorityTag],
) -> Ordering {
    for tag in tags {
        let ord = match tag {
            // flagged candidates first: true sorts before false
            PriorityTag::FailedFirst => b.is_failed.cmp(&a.is_failed),
            PriorityTag::PriorityList => b.is_priority.cmp(&a.is_priority),
            PriorityTag::LowestLevelFirst => a.course.level.cmp(&b.course.level),
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    a.course.level.cmp(&b.course.level)
}
