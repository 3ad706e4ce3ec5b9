//! # lane-engine
//!
//! Deterministic timeline lane assignment for calendar events.
//!
//! Given a snapshot of events, the engine partitions them into horizontal
//! lanes so that overlapping events never share a lane. Assignment is a pure
//! function of the input sequence: no state is kept between calls, nothing is
//! mutated, and the same input always produces the same lanes.
//!
//! ## Modules
//!
//! - [`lanes`] — First-fit lane assignment with strict boundary handling
//! - [`event`] — The `Event` model and the `Interval` abstraction
//! - [`snapshot`] — Parse JSON event snapshots
//! - [`verify`] — Check an assignment for coverage, order and separation
//! - [`layout`] — Day-granular timeline positions for renderers
//! - [`error`] — Error types

pub mod error;
pub mod event;
pub mod lanes;
pub mod layout;
pub mod snapshot;
pub mod verify;

pub use error::LaneError;
pub use event::{parse_instant, Event, Interval};
pub use lanes::{assign, assign_with_options, place, Adjacency, AssignOptions, FitStrategy};
pub use layout::{
    date_range_label, day_offset, duration_in_days, is_single_day, layout_lanes, parse_timezone,
    timeline_span, LaneLayout, SpanLayout, TimelineLayout, TimelineSpan,
};
pub use snapshot::parse_snapshot;
pub use verify::verify_assignment;
