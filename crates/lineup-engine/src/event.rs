//! Prioritized, time-bounded events and the ordering contract callers
//! establish before scheduling.

use crate::error::{Result, ScheduleError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single event a viewer might attend: a half-open time interval
/// `[start, end)` with a priority (higher wins) and a display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub priority: i32,
    pub name: String,
}

impl Event {
    /// Build a validated event.
    ///
    /// # Errors
    /// Returns `ScheduleError::InvalidEvent` when `start >= end` — containment
    /// and merging both assume strictly positive-duration events.
    pub fn new(
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        priority: i32,
        name: impl Into<String>,
    ) -> Result<Self> {
        let name = name.into();
        if start >= end {
            return Err(ScheduleError::InvalidEvent { name, start, end });
        }
        Ok(Event {
            start,
            end,
            priority,
            name,
        })
    }

    /// Whether the instant `t` falls inside this event.
    ///
    /// The interval is half-open: `start <= t < end`. The end instant itself
    /// is excluded, so back-to-back events never both claim the shared
    /// boundary instant.
    pub fn contains(&self, t: DateTime<Utc>) -> bool {
        self.start <= t && t < self.end
    }
}

/// Sort events by priority, descending, with a stable sort.
///
/// This establishes the ordering [`generate_schedule`] requires: the resolver
/// takes the first containing event in slice order, so after this sort the
/// first match is the highest-priority one, and events tied on priority keep
/// their original relative order as the tie-break.
///
/// [`generate_schedule`]: crate::schedule::generate_schedule
pub fn sort_by_priority(events: &mut [Event]) {
    events.sort_by_key(|e| std::cmp::Reverse(e.priority));
}
