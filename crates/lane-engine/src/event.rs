//! Timeline events and the interval abstraction the lane engine works over.
//!
//! The engine only needs two facts about an item: when it starts and when it
//! ends. [`Interval`] exposes exactly that, so callers can feed their own
//! event representations (store rows, view models, test fixtures) without
//! converting them into [`Event`] first.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{LaneError, Result};

/// Anything with a start and an end on a totally ordered time axis.
///
/// No relationship between `start` and `end` is assumed. Inverted intervals
/// (`start > end`) are compared using their raw values.
pub trait Interval {
    /// The instant type. Must be totally ordered.
    type Instant: Ord + Copy;

    /// Returns the instant the interval begins.
    fn start(&self) -> Self::Instant;

    /// Returns the instant the interval ends.
    fn end(&self) -> Self::Instant;
}

/// A named calendar event spanning `[start, end]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Event {
    /// Opaque identifier, unique within a snapshot by convention (not enforced).
    pub id: i64,
    /// Display name. Has no effect on lane assignment.
    pub name: String,
    /// When the event begins.
    pub start: DateTime<Utc>,
    /// When the event ends.
    pub end: DateTime<Utc>,
}

impl Event {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            start,
            end,
        }
    }

    /// Signed length of the event. Negative for inverted events.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Whether the event ends before it starts.
    pub fn is_inverted(&self) -> bool {
        self.end < self.start
    }
}

impl Interval for Event {
    type Instant = DateTime<Utc>;

    fn start(&self) -> DateTime<Utc> {
        self.start
    }

    fn end(&self) -> DateTime<Utc> {
        self.end
    }
}

impl<I: Interval> Interval for &I {
    type Instant = I::Instant;

    fn start(&self) -> I::Instant {
        (**self).start()
    }

    fn end(&self) -> I::Instant {
        (**self).end()
    }
}

/// Bare `(start, end)` pairs, handy for integer timelines.
impl<T: Ord + Copy> Interval for (T, T) {
    type Instant = T;

    fn start(&self) -> T {
        self.0
    }

    fn end(&self) -> T {
        self.1
    }
}

/// Parse an instant from either an RFC 3339 datetime or a bare ISO 8601 date.
///
/// A bare date (`YYYY-MM-DD`) resolves to midnight UTC on that day.
///
/// # Errors
///
/// Returns [`LaneError::InvalidDatetime`] if the string matches neither form.
///
/// # Examples
///
/// ```
/// use lane_engine::event::parse_instant;
///
/// let a = parse_instant("2026-03-15T14:00:00-04:00").unwrap();
/// assert_eq!(a.to_rfc3339(), "2026-03-15T18:00:00+00:00");
///
/// let b = parse_instant("2026-03-15").unwrap();
/// assert_eq!(b.to_rfc3339(), "2026-03-15T00:00:00+00:00");
/// ```
pub fn parse_instant(s: &str) -> Result<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| {
            LaneError::InvalidDatetime(format!(
                "'{}': expected RFC 3339 datetime or YYYY-MM-DD date",
                s
            ))
        })
}
