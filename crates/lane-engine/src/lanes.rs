//! Greedy lane assignment for timeline rendering.
//!
//! Partitions a snapshot of events into horizontal lanes so that no two events
//! sharing a lane overlap in time. The result is deterministic: the same input
//! sequence always yields the same lanes, in the same order, holding the same
//! events in the same order.
//!
//! # Algorithm
//!
//! 1. Stable-sort events by ascending start (ties keep input order).
//! 2. Keep the open lanes in creation order, remembering only the end of each
//!    lane's last event.
//! 3. Place each event in the first lane whose tail ends strictly before the
//!    event starts. If none qualifies, open a new lane at the bottom.
//!
//! This is first-fit interval partitioning, and lane count is not claimed to be
//! minimal. [`FitStrategy::BestFit`] packs each event into the tightest lane
//! instead, which changes the layout, so it is opt-in only.
//!
//! # Boundary rule
//!
//! Touching events conflict: an event ending at `t` and one starting at `t`
//! never share a lane under the default [`Adjacency::Strict`].
//!
//! # Inverted events
//!
//! Events with `start > end` are neither rejected nor swapped. They are sorted
//! by their raw start and leave their raw end as the lane tail, so a following
//! event only needs to start after that (earlier) end.

use crate::event::Interval;

/// How an event picks among several lanes it could join.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FitStrategy {
    /// Earliest-opened eligible lane.
    #[default]
    FirstFit,
    /// Eligible lane whose tail ends latest. Ties go to the earliest-opened
    /// lane.
    BestFit,
}

/// When an event may follow another in the same lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Adjacency {
    /// `previous.end < next.start`. Touching events go to different lanes.
    #[default]
    Strict,
    /// `previous.end <= next.start`. Touching events may share a lane.
    Touching,
}

impl Adjacency {
    /// Whether an event starting at `next_start` may follow one ending at `previous_end`.
    pub fn admits<T: Ord>(self, previous_end: &T, next_start: &T) -> bool {
        match self {
            Adjacency::Strict => previous_end < next_start,
            Adjacency::Touching => previous_end <= next_start,
        }
    }
}

/// Options for [`assign_with_options`] and [`place`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssignOptions {
    /// Lane selection strategy.
    pub fit: FitStrategy,
    /// Boundary rule between consecutive events in a lane.
    pub adjacency: Adjacency,
}

/// Assign events to lanes using first-fit and the strict boundary rule.
///
/// Every input event appears in exactly one lane. Lanes are returned in the
/// order they were opened; events within a lane ascend by start.
///
/// # Examples
///
/// ```
/// use lane_engine::assign;
///
/// // (start, end) pairs: B is nested inside A, C starts after A ends.
/// let lanes = assign(vec![(1, 5), (2, 3), (6, 7)]);
/// assert_eq!(lanes, vec![vec![(1, 5), (6, 7)], vec![(2, 3)]]);
///
/// // Touching events never share a lane.
/// let lanes = assign(vec![(1, 2), (2, 3)]);
/// assert_eq!(lanes.len(), 2);
/// ```
pub fn assign<E, I>(events: I) -> Vec<Vec<E>>
where
    E: Interval,
    I: IntoIterator<Item = E>,
{
    assign_with_options(events, &AssignOptions::default())
}

/// Assign events to lanes with explicit [`AssignOptions`].
///
/// Takes ownership of the events and moves each one into its lane, so no
/// `Clone` bound is needed. Pass an iterator of references to keep the
/// originals.
pub fn assign_with_options<E, I>(events: I, options: &AssignOptions) -> Vec<Vec<E>>
where
    E: Interval,
    I: IntoIterator<Item = E>,
{
    let events: Vec<E> = events.into_iter().collect();
    let placement = place(&events, options);

    let mut slots: Vec<Option<E>> = events.into_iter().map(Some).collect();
    placement
        .into_iter()
        .map(|lane| {
            lane.into_iter()
                .filter_map(|index| slots[index].take())
                .collect()
        })
        .collect()
}

/// Compute lanes as positions into `events`, without moving anything.
///
/// `place(events, options)[k]` lists the input positions of the events in
/// lane `k`, in lane order. Each position in `0..events.len()` appears
/// exactly once.
///
/// # Examples
///
/// ```
/// use lane_engine::{place, AssignOptions};
///
/// let events = [(4, 6), (1, 2), (1, 5)];
/// let lanes = place(&events, &AssignOptions::default());
/// assert_eq!(lanes, vec![vec![1, 0], vec![2]]);
/// ```
pub fn place<E: Interval>(events: &[E], options: &AssignOptions) -> Vec<Vec<usize>> {
    let mut order: Vec<usize> = (0..events.len()).collect();
    // sort_by_key is stable: equal starts keep input order.
    order.sort_by_key(|&index| events[index].start());

    let mut tails: Vec<E::Instant> = Vec::new();
    let mut lanes: Vec<Vec<usize>> = Vec::new();

    for index in order {
        let event = &events[index];
        let start = event.start();

        match select_lane(&tails, &start, options) {
            Some(lane) => {
                tails[lane] = event.end();
                lanes[lane].push(index);
            }
            None => {
                tails.push(event.end());
                lanes.push(vec![index]);
            }
        }
    }

    tracing::debug!(
        events = events.len(),
        lanes = lanes.len(),
        fit = ?options.fit,
        adjacency = ?options.adjacency,
        "assigned events to lanes"
    );

    lanes
}

/// Pick the lane an event starting at `start` should join, if any.
fn select_lane<T: Ord>(tails: &[T], start: &T, options: &AssignOptions) -> Option<usize> {
    let mut eligible = tails
        .iter()
        .enumerate()
        .filter(|(_, tail)| options.adjacency.admits(*tail, start));

    match options.fit {
        FitStrategy::FirstFit => eligible.next().map(|(lane, _)| lane),
        FitStrategy::BestFit => eligible
            .max_by(|(a_lane, a_tail), (b_lane, b_tail)| {
                a_tail.cmp(b_tail).then_with(|| b_lane.cmp(a_lane))
            })
            .map(|(lane, _)| lane),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Event;
    use chrono::{DateTime, TimeZone, Utc};

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, d, 0, 0, 0).unwrap()
    }

    fn event(id: i64, name: &str, start: u32, end: u32) -> Event {
        Event::new(id, name, day(start), day(end))
    }

    fn names(lanes: &[Vec<Event>]) -> Vec<Vec<&str>> {
        lanes
            .iter()
            .map(|lane| lane.iter().map(|e| e.name.as_str()).collect())
            .collect()
    }

    // ── Reference scenarios ─────────────────────────────────────────────

    #[test]
    fn test_disjoint_events_share_one_lane() {
        let lanes = assign(vec![event(1, "A", 1, 2), event(2, "B", 3, 4)]);
        assert_eq!(names(&lanes), vec![vec!["A", "B"]]);
    }

    #[test]
    fn test_nested_event_opens_second_lane() {
        let lanes = assign(vec![event(1, "A", 1, 5), event(2, "B", 2, 3)]);
        assert_eq!(names(&lanes), vec![vec!["A"], vec!["B"]]);
    }

    #[test]
    fn test_chained_touching_events_split_neighbours() {
        // B touches A and opens lane 1. C touches B but clears A, so it
        // returns to lane 0.
        let lanes = assign(vec![
            event(1, "A", 1, 2),
            event(2, "B", 2, 3),
            event(3, "C", 3, 4),
        ]);
        assert_eq!(names(&lanes), vec![vec!["A", "C"], vec!["B"]]);
        assert_ne!(lanes[0][0].id, 2);
        assert!(lanes[1].iter().all(|e| e.id == 2));
    }

    #[test]
    fn test_empty_input_yields_no_lanes() {
        let lanes: Vec<Vec<Event>> = assign(Vec::new());
        assert!(lanes.is_empty());
    }

    #[test]
    fn test_single_event_single_lane() {
        let lanes = assign(vec![event(1, "Solo", 4, 9)]);
        assert_eq!(lanes.len(), 1);
        assert_eq!(lanes[0], vec![event(1, "Solo", 4, 9)]);
    }

    // ── Boundary rule ───────────────────────────────────────────────────

    #[test]
    fn test_touching_events_split_under_strict() {
        let lanes = assign(vec![(10, 20), (20, 30)]);
        assert_eq!(lanes, vec![vec![(10, 20)], vec![(20, 30)]]);
    }

    #[test]
    fn test_touching_events_share_under_touching_rule() {
        let options = AssignOptions {
            adjacency: Adjacency::Touching,
            ..AssignOptions::default()
        };
        let lanes = assign_with_options(vec![(10, 20), (20, 30)], &options);
        assert_eq!(lanes, vec![vec![(10, 20), (20, 30)]]);
    }

    #[test]
    fn test_point_events_at_same_instant_conflict() {
        let lanes = assign(vec![(5, 5), (5, 5)]);
        assert_eq!(lanes.len(), 2);
    }

    #[test]
    fn test_point_event_touching_neighbor_conflicts() {
        // Point event at 5 touches the end of (1, 5).
        let lanes = assign(vec![(1, 5), (5, 5), (6, 8)]);
        assert_eq!(lanes, vec![vec![(1, 5), (6, 8)], vec![(5, 5)]]);
    }

    #[test]
    fn test_one_past_boundary_shares_lane() {
        let lanes = assign(vec![(1, 5), (6, 9)]);
        assert_eq!(lanes.len(), 1);
    }

    // ── Ordering and ties ───────────────────────────────────────────────

    #[test]
    fn test_unsorted_input_is_sorted_within_lane() {
        let lanes = assign(vec![
            event(3, "C", 7, 8),
            event(1, "A", 1, 2),
            event(2, "B", 4, 5),
        ]);
        assert_eq!(names(&lanes), vec![vec!["A", "B", "C"]]);
    }

    #[test]
    fn test_equal_starts_keep_input_order() {
        let lanes = assign(vec![
            event(1, "First", 1, 3),
            event(2, "Second", 1, 2),
            event(3, "Third", 1, 4),
        ]);
        assert_eq!(names(&lanes), vec![vec!["First"], vec!["Second"], vec!["Third"]]);

        let reversed = assign(vec![
            event(3, "Third", 1, 4),
            event(2, "Second", 1, 2),
            event(1, "First", 1, 3),
        ]);
        assert_eq!(
            names(&reversed),
            vec![vec!["Third"], vec!["Second"], vec!["First"]]
        );
    }

    #[test]
    fn test_all_overlapping_events_get_own_lanes() {
        let events: Vec<_> = (0..6).map(|i| (i, 100)).collect();
        let lanes = assign(events);
        assert_eq!(lanes.len(), 6);
        assert!(lanes.iter().all(|lane| lane.len() == 1));
    }

    #[test]
    fn test_all_disjoint_events_fill_one_lane() {
        let events: Vec<_> = (0..10).map(|i| (i * 10, i * 10 + 5)).collect();
        let lanes = assign(events.clone());
        assert_eq!(lanes, vec![events]);
    }

    #[test]
    fn test_duplicate_ids_are_not_deduplicated() {
        let lanes = assign(vec![event(1, "A", 1, 2), event(1, "A", 1, 2)]);
        let total: usize = lanes.iter().map(Vec::len).sum();
        assert_eq!(total, 2);
    }

    #[test]
    fn test_freed_lane_is_reused_first() {
        // Lane 0 frees up before lane 1, so the late event returns to lane 0.
        let lanes = assign(vec![(1, 3), (2, 8), (5, 6)]);
        assert_eq!(lanes, vec![vec![(1, 3), (5, 6)], vec![(2, 8)]]);
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let input = vec![
            event(1, "A", 1, 4),
            event(2, "B", 2, 6),
            event(3, "C", 5, 7),
            event(4, "D", 5, 5),
            event(5, "E", 8, 9),
        ];
        let first = assign(input.clone());
        let second = assign(input);
        assert_eq!(first, second);
    }

    // ── Fit strategy ────────────────────────────────────────────────────

    #[test]
    fn test_fit_strategies_differ_in_layout_not_count() {
        // (3, 4) fits both lanes. First-fit takes lane 0, best-fit takes
        // lane 1, and the rest of the layout follows from that choice.
        let events = vec![(0, 1), (0, 2), (3, 4), (3, 9), (5, 6)];
        let first = assign(events.clone());
        let best = assign_with_options(
            events,
            &AssignOptions {
                fit: FitStrategy::BestFit,
                ..AssignOptions::default()
            },
        );
        assert_eq!(first, vec![vec![(0, 1), (3, 4), (5, 6)], vec![(0, 2), (3, 9)]]);
        assert_eq!(best, vec![vec![(0, 1), (3, 9)], vec![(0, 2), (3, 4), (5, 6)]]);
        assert_eq!(first.len(), best.len());
    }

    #[test]
    fn test_best_fit_prefers_latest_tail() {
        // Lane 0 ends at 1, lane 1 ends at 4; an event at 5 fits both.
        let events = vec![(0, 1), (0, 4), (5, 6)];
        let best = assign_with_options(
            events.clone(),
            &AssignOptions {
                fit: FitStrategy::BestFit,
                ..AssignOptions::default()
            },
        );
        assert_eq!(best, vec![vec![(0, 1)], vec![(0, 4), (5, 6)]]);

        let first = assign(events);
        assert_eq!(first, vec![vec![(0, 1), (5, 6)], vec![(0, 4)]]);
    }

    #[test]
    fn test_best_fit_ties_go_to_earliest_lane() {
        let events = vec![(0, 4), (1, 4), (5, 6)];
        let best = assign_with_options(
            events,
            &AssignOptions {
                fit: FitStrategy::BestFit,
                ..AssignOptions::default()
            },
        );
        assert_eq!(best, vec![vec![(0, 4), (5, 6)], vec![(1, 4)]]);
    }

    // ── Inverted intervals ──────────────────────────────────────────────

    #[test]
    fn test_inverted_event_uses_raw_values() {
        // (5, 2) starts after (1, 4) ends, then leaves 2 as the lane tail.
        let lanes = assign(vec![(1, 4), (5, 2), (6, 7)]);
        assert_eq!(lanes, vec![vec![(1, 4), (5, 2), (6, 7)]]);

        let lanes = assign(vec![(5, 2), (3, 4)]);
        // Sorted by start: (3, 4) first, then (5, 2) which starts after 4.
        assert_eq!(lanes, vec![vec![(3, 4), (5, 2)]]);
    }

    #[test]
    fn test_inverted_event_tail_admits_earlier_followers() {
        // (2, 0) leaves tail 0; (2, 3) starts after 0, so it shares the lane
        // despite starting at the same instant.
        let lanes = assign(vec![(2, 0), (2, 3)]);
        assert_eq!(lanes, vec![vec![(2, 0), (2, 3)]]);
    }

    // ── place / references ──────────────────────────────────────────────

    #[test]
    fn test_place_returns_input_positions() {
        let events = vec![event(1, "Late", 5, 6), event(2, "Early", 1, 2)];
        let lanes = place(&events, &AssignOptions::default());
        assert_eq!(lanes, vec![vec![1, 0]]);
    }

    #[test]
    fn test_place_covers_every_position_once() {
        let events = vec![(3, 9), (1, 2), (2, 4), (4, 4), (0, 10), (9, 12)];
        let lanes = place(&events, &AssignOptions::default());
        let mut seen: Vec<usize> = lanes.into_iter().flatten().collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..events.len()).collect::<Vec<_>>());
    }

    #[test]
    fn test_assign_by_reference_keeps_originals() {
        let events = vec![event(1, "A", 1, 3), event(2, "B", 2, 4)];
        let lanes = assign(events.iter());
        assert_eq!(lanes.len(), 2);
        assert!(std::ptr::eq(lanes[0][0], &events[0]));
        assert!(std::ptr::eq(lanes[1][0], &events[1]));
    }

    #[test]
    fn test_adjacency_admits() {
        assert!(Adjacency::Strict.admits(&1, &2));
        assert!(!Adjacency::Strict.admits(&2, &2));
        assert!(Adjacency::Touching.admits(&2, &2));
        assert!(!Adjacency::Touching.admits(&3, &2));
    }
}
