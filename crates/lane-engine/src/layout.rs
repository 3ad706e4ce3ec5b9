//! Timeline metrics for renderers.
//!
//! Turns a lane assignment into day-granular positions: where the timeline
//! starts, how far each event sits from that origin, and how many days it
//! covers. Units are whole days; mapping days to pixels is left to the
//! renderer.
//!
//! Day arithmetic truncates toward zero on the UTC time axis, so an event
//! running from 09:00 on one day to 08:00 the next covers a single day.
//! Calendar-day questions ([`is_single_day`], [`date_range_label`]) are
//! answered in an explicit timezone.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::error::{LaneError, Result};
use crate::event::Event;

/// The overall extent of a set of events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimelineSpan {
    /// Earliest event start.
    pub start: DateTime<Utc>,
    /// Latest event end.
    pub end: DateTime<Utc>,
}

/// Position of one event within the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpanLayout {
    pub id: i64,
    pub name: String,
    /// Whole days from the timeline origin to the event start.
    pub offset_days: i64,
    /// Days the event covers (see [`duration_in_days`]).
    pub span_days: i64,
}

/// One lane of positioned events, in lane order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaneLayout {
    /// Zero-based lane index (vertical position).
    pub index: usize,
    pub spans: Vec<SpanLayout>,
}

/// A full lane assignment expressed in day units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineLayout {
    /// Extent of all events; `None` when there are none.
    pub span: Option<TimelineSpan>,
    /// Days the whole timeline covers; 0 when empty.
    pub total_days: i64,
    pub lanes: Vec<LaneLayout>,
}

/// Compute the extent of a set of events.
///
/// Returns `None` for an empty set. Start and end are taken independently
/// (earliest start, latest end), so a set of inverted events can yield a span
/// whose end precedes its start.
pub fn timeline_span<'a, I>(events: I) -> Option<TimelineSpan>
where
    I: IntoIterator<Item = &'a Event>,
{
    events.into_iter().fold(None, |span, event| {
        Some(match span {
            None => TimelineSpan {
                start: event.start,
                end: event.end,
            },
            Some(TimelineSpan { start, end }) => TimelineSpan {
                start: start.min(event.start),
                end: end.max(event.end),
            },
        })
    })
}

/// Days between `start` and `end`, truncated, plus one.
fn days_covered(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    (end - start).num_days() + 1
}

/// Number of days an event covers, counting its first day.
///
/// A same-day event covers 1 day; an event from Jan 1 00:00 to Jan 3 00:00
/// covers 3. Inverted events follow the same formula and can yield zero or a
/// negative count.
pub fn duration_in_days(event: &Event) -> i64 {
    days_covered(event.start, event.end)
}

/// Whole days from `origin` to the event start (negative if it starts earlier).
pub fn day_offset(event: &Event, origin: DateTime<Utc>) -> i64 {
    (event.start - origin).num_days()
}

/// Whether the event starts and ends on the same calendar day in `tz`.
pub fn is_single_day(event: &Event, tz: &Tz) -> bool {
    event.start.with_timezone(tz).date_naive() == event.end.with_timezone(tz).date_naive()
}

/// Short date label for an event, such as `"Jan 05"` or `"Jan 05 - Jan 09"`.
///
/// Both ends are formatted in `tz`. When they format identically only one is
/// shown.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use lane_engine::{date_range_label, parse_timezone, Event};
///
/// let tz = parse_timezone("UTC").unwrap();
/// let event = Event::new(
///     1,
///     "Sprint",
///     Utc.with_ymd_and_hms(2026, 1, 5, 9, 0, 0).unwrap(),
///     Utc.with_ymd_and_hms(2026, 1, 9, 17, 0, 0).unwrap(),
/// );
/// assert_eq!(date_range_label(&event, &tz), "Jan 05 - Jan 09");
/// ```
pub fn date_range_label(event: &Event, tz: &Tz) -> String {
    let start = event.start.with_timezone(tz).format("%b %d").to_string();
    let end = event.end.with_timezone(tz).format("%b %d").to_string();
    if start == end {
        start
    } else {
        format!("{start} - {end}")
    }
}

/// Position every event of a lane assignment relative to the earliest start.
///
/// Lane and event order are preserved exactly as given.
pub fn layout_lanes(lanes: &[Vec<Event>]) -> TimelineLayout {
    let span = timeline_span(lanes.iter().flatten());
    let origin = span.map(|s| s.start);

    let lanes = lanes
        .iter()
        .enumerate()
        .map(|(index, lane)| LaneLayout {
            index,
            spans: lane
                .iter()
                .map(|event| SpanLayout {
                    id: event.id,
                    name: event.name.clone(),
                    offset_days: origin.map_or(0, |o| day_offset(event, o)),
                    span_days: duration_in_days(event),
                })
                .collect(),
        })
        .collect();

    TimelineLayout {
        span,
        total_days: span.map_or(0, |s| days_covered(s.start, s.end)),
        lanes,
    }
}

/// Parse an IANA timezone name.
///
/// # Errors
///
/// Returns [`LaneError::InvalidTimezone`] for unknown names.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|_| LaneError::InvalidTimezone(format!("'{}'", name)))
}
