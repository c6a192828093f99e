//! Error types for lineup-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Invalid event '{name}': start {start} is not before end {end}")]
    InvalidEvent {
        name: String,
        start: chrono::DateTime<chrono::Utc>,
        end: chrono::DateTime<chrono::Utc>,
    },
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
