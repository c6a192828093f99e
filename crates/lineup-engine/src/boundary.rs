//! Boundary extraction -- the instants where the winning event can change.
//!
//! Collects every event's start and end into a deduplicated ascending list,
//! then windows that list into consecutive pairs. Each pair is a candidate
//! interval: by construction no boundary falls strictly inside it, so the
//! highest-priority active event is constant across its span.

use crate::event::Event;
use chrono::{DateTime, Utc};

/// Collect the distinct boundary instants across all events, ascending.
///
/// Every start and every end appears exactly once, even when one event's end
/// coincides with another's start. An empty event list yields an empty list.
pub fn extract_boundaries(events: &[Event]) -> Vec<DateTime<Utc>> {
    let mut boundaries: Vec<DateTime<Utc>> = events
        .iter()
        .flat_map(|e| [e.start, e.end])
        .collect();

    boundaries.sort();
    boundaries.dedup();
    boundaries
}

/// Lazily iterate the consecutive pairs `(boundaries[i], boundaries[i + 1])`.
///
/// Fewer than two boundaries produce nothing — there is no interval to form.
/// The iterator is restartable: it borrows the slice and can be re-created
/// at no cost.
pub fn consecutive_pairs(
    boundaries: &[DateTime<Utc>],
) -> impl Iterator<Item = (DateTime<Utc>, DateTime<Utc>)> + '_ {
    boundaries.windows(2).map(|pair| (pair[0], pair[1]))
}
