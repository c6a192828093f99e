//! # lineup-engine
//!
//! Deterministic attendance timetabling over overlapping prioritized events.
//!
//! Given a set of time-bounded events that may overlap, the engine computes
//! an ordered, conflict-free attendance plan: at every instant covered by at
//! least one event, the plan names the single highest-priority event active
//! there, with consecutive spans at the same event collapsed into one
//! segment. The whole computation is a pure, single-pass sweep over the
//! events' time boundaries — no clock, no I/O, no shared state.
//!
//! ## Modules
//!
//! - [`event`] — the `Event` value type, validation, containment, priority sort
//! - [`boundary`] — boundary extraction and candidate-interval windowing
//! - [`resolve`] — pick the winning event at an instant
//! - [`merge`] — `AttendanceSegment` and same-event run merging
//! - [`schedule`] — the `generate_schedule` pipeline
//! - [`error`] — Error types

pub mod boundary;
pub mod error;
pub mod event;
pub mod merge;
pub mod resolve;
pub mod schedule;

pub use error::ScheduleError;
pub use event::{sort_by_priority, Event};
pub use merge::{merge_runs, AttendanceSegment};
pub use schedule::generate_schedule;
