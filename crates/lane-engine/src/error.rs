//! Error types for lane-engine operations.
//!
//! Lane assignment itself never fails. These errors come from the edges:
//! parsing snapshots and instants, resolving timezones, and verifying an
//! assignment against its input.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LaneError {
    #[error("Invalid datetime: {0}")]
    InvalidDatetime(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("Count mismatch: {input} input events, {assigned} assigned")]
    CountMismatch { input: usize, assigned: usize },

    #[error("Missing event: input position {0} has no lane slot")]
    MissingEvent(usize),

    #[error("Unexpected event: lane {lane} position {position} matches no input event")]
    UnexpectedEvent { lane: usize, position: usize },

    #[error("Unordered lane: lane {lane} position {position} starts before its predecessor")]
    Unordered { lane: usize, position: usize },

    #[error("Overlap: lane {lane} position {position} does not clear its predecessor")]
    Overlap { lane: usize, position: usize },
}

pub type Result<T> = std::result::Result<T, LaneError>;
