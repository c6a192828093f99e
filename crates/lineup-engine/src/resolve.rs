//! Resolve which event wins at a given instant.
//!
//! The scan takes the first event in slice order that contains the probe
//! instant. Callers supply events sorted by priority descending (see
//! [`sort_by_priority`]), so the first match is the highest-priority event,
//! and events tied on priority resolve to whichever appears earlier in the
//! caller's order. The pre-sort is a documented precondition, not enforced
//! here; an unsorted slice degrades to "first containing event in the given
//! order" without any error.
//!
//! [`sort_by_priority`]: crate::event::sort_by_priority

use crate::event::Event;
use chrono::{DateTime, Utc};

/// Find the winning event at instant `t`, or `None` if no event contains `t`.
///
/// Containment is half-open (`start <= t < end`), so an event never wins at
/// its own end instant.
pub fn resolve_at(events: &[Event], t: DateTime<Utc>) -> Option<&Event> {
    events.iter().find(|e| e.contains(t))
}
