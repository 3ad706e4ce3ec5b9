//! Parsing event snapshots from JSON.
//!
//! A snapshot is the full event set an event store hands over after every
//! change: a JSON array of `{ "id", "name", "start", "end" }` records. Array
//! order is preserved, since it is the tie-breaking order the lane engine uses
//! for events with equal starts.

use serde::Deserialize;

use crate::error::{LaneError, Result};
use crate::event::{parse_instant, Event};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EventRecord {
    id: i64,
    #[serde(default)]
    name: String,
    start: String,
    end: String,
}

/// Parse a JSON snapshot into events, in array order.
///
/// Instants may be RFC 3339 datetimes or bare `YYYY-MM-DD` dates (see
/// [`parse_instant`]). Inverted events are accepted as-is.
///
/// # Errors
///
/// Returns [`LaneError::InvalidSnapshot`] if the JSON is malformed or not an
/// array of event records, and [`LaneError::InvalidDatetime`] if any instant
/// cannot be parsed. Datetime errors name the offending event id.
///
/// # Examples
///
/// ```
/// use lane_engine::parse_snapshot;
///
/// let events = parse_snapshot(r#"[
///     {"id": 1, "name": "Kickoff", "start": "2026-01-01", "end": "2026-01-02"},
///     {"id": 2, "name": "Review", "start": "2026-01-03T09:00:00Z", "end": "2026-01-03T10:00:00Z"}
/// ]"#).unwrap();
/// assert_eq!(events.len(), 2);
/// assert_eq!(events[1].name, "Review");
/// ```
pub fn parse_snapshot(json: &str) -> Result<Vec<Event>> {
    let records: Vec<EventRecord> =
        serde_json::from_str(json).map_err(|e| LaneError::InvalidSnapshot(e.to_string()))?;

    records.into_iter().map(into_event).collect()
}

fn into_event(record: EventRecord) -> Result<Event> {
    let start = parse_instant(&record.start).map_err(|e| with_event_id(e, record.id, "start"))?;
    let end = parse_instant(&record.end).map_err(|e| with_event_id(e, record.id, "end"))?;
    Ok(Event::new(record.id, record.name, start, end))
}

fn with_event_id(err: LaneError, id: i64, field: &str) -> LaneError {
    match err {
        LaneError::InvalidDatetime(msg) => {
            LaneError::InvalidDatetime(format!("event {} {}: {}", id, field, msg))
        }
        other => other,
    }
}
