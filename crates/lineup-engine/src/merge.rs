//! Collapse consecutive attendance segments for the same event.
//!
//! The sweep emits one segment per candidate interval, so staying at one
//! event across several boundaries produces a run of adjacent segments all
//! naming it. Merging folds each run into a single segment spanning the run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry in the attendance plan: attend `name` from `start` until `end`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSegment {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub name: String,
}

impl AttendanceSegment {
    /// Length of this segment in whole minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// Merge maximal runs of temporally adjacent, same-name segments.
///
/// Processes the input left to right with a pending segment: a next segment
/// whose name matches the pending one AND whose start equals the pending
/// end extends the pending segment; anything else flushes the pending
/// segment and starts a new one. Inputs of length 0 or 1 come back
/// unchanged.
///
/// Same-name segments separated by a gap (pending end < next start) are NOT
/// merged — a gap means no attendance was scheduled in between, and merging
/// across it would claim attendance during uncovered time.
///
/// The fold is iterative, so arbitrarily long runs never grow the stack, and
/// its output is maximally merged: applying it twice is a no-op.
pub fn merge_runs(segments: Vec<AttendanceSegment>) -> Vec<AttendanceSegment> {
    let mut merged: Vec<AttendanceSegment> = Vec::with_capacity(segments.len());

    for segment in segments {
        if let Some(pending) = merged.last_mut() {
            if pending.name == segment.name && pending.end == segment.start {
                pending.end = segment.end;
                continue;
            }
        }
        merged.push(segment);
    }

    merged
}
