//! The scheduling pipeline: events → boundaries → candidate intervals →
//! resolved segments → merged attendance plan.

use crate::boundary::{consecutive_pairs, extract_boundaries};
use crate::event::Event;
use crate::merge::{merge_runs, AttendanceSegment};
use crate::resolve::resolve_at;

/// Compute the attendance plan for a set of possibly overlapping events.
///
/// For every span between two consecutive boundary instants, the plan names
/// the highest-priority event active there; spans covered by no event are
/// left out entirely. Adjacent spans attending the same event are collapsed
/// into one segment.
///
/// The returned segments are ascending by start, pairwise non-overlapping,
/// and no two consecutive segments share a name.
///
/// # Precondition
///
/// `events` must already be sorted by priority descending (stable, so the
/// caller's original order breaks ties) — use [`sort_by_priority`]. The
/// pipeline does not re-sort; an unsorted input silently resolves each span
/// to the first containing event in the given order, which may not be the
/// highest-priority one.
///
/// An empty `events` slice yields an empty plan.
///
/// [`sort_by_priority`]: crate::event::sort_by_priority
pub fn generate_schedule(events: &[Event]) -> Vec<AttendanceSegment> {
    let boundaries = extract_boundaries(events);

    // Resolve each candidate interval at its start instant. No boundary falls
    // strictly inside an interval, so the winner holds for the full span.
    let segments: Vec<AttendanceSegment> = consecutive_pairs(&boundaries)
        .filter_map(|(start, end)| {
            resolve_at(events, start).map(|winner| AttendanceSegment {
                start,
                end,
                name: winner.name.clone(),
            })
        })
        .collect();

    merge_runs(segments)
}
