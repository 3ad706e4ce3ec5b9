//! Checking a lane assignment against its input.
//!
//! Lane assignment cannot fail, but renderers and caches that hold on to an
//! assignment sometimes need to confirm it still matches the event set it was
//! built from. [`verify_assignment`] checks the three structural guarantees:
//!
//! - **Coverage**: the lanes hold exactly the input events, as a multiset.
//! - **Order**: events within a lane ascend by start.
//! - **Separation**: consecutive events in a lane satisfy the adjacency rule.

use crate::error::{LaneError, Result};
use crate::event::Interval;
use crate::lanes::Adjacency;

/// Verify that `lanes` is a valid assignment of `input` under `adjacency`.
///
/// Events are matched by `PartialEq`, so duplicates in the input must appear
/// the same number of times across the lanes. Lane count is not checked.
///
/// # Errors
///
/// Returns the first violation found:
/// [`LaneError::CountMismatch`], [`LaneError::UnexpectedEvent`],
/// [`LaneError::MissingEvent`], [`LaneError::Unordered`] or
/// [`LaneError::Overlap`].
///
/// # Examples
///
/// ```
/// use lane_engine::{assign, verify_assignment, Adjacency};
///
/// let input = vec![(1, 3), (2, 4), (5, 6)];
/// let lanes = assign(input.clone());
/// assert!(verify_assignment(&input, &lanes, Adjacency::Strict).is_ok());
///
/// // Touching events in one lane break the strict rule.
/// let bad = vec![vec![(1, 2), (2, 3)]];
/// assert!(verify_assignment(&[(1, 2), (2, 3)], &bad, Adjacency::Strict).is_err());
/// ```
pub fn verify_assignment<E>(input: &[E], lanes: &[Vec<E>], adjacency: Adjacency) -> Result<()>
where
    E: Interval + PartialEq,
{
    let assigned: usize = lanes.iter().map(Vec::len).sum();
    if assigned != input.len() {
        return Err(LaneError::CountMismatch {
            input: input.len(),
            assigned,
        });
    }

    check_coverage(input, lanes)?;

    for (lane_index, lane) in lanes.iter().enumerate() {
        for (position, pair) in lane.windows(2).enumerate() {
            let (previous, next) = (&pair[0], &pair[1]);
            if next.start() < previous.start() {
                return Err(LaneError::Unordered {
                    lane: lane_index,
                    position: position + 1,
                });
            }
            if !adjacency.admits(&previous.end(), &next.start()) {
                return Err(LaneError::Overlap {
                    lane: lane_index,
                    position: position + 1,
                });
            }
        }
    }

    Ok(())
}

/// Match every assigned event to a distinct input event.
fn check_coverage<E: PartialEq>(input: &[E], lanes: &[Vec<E>]) -> Result<()> {
    let mut matched = vec![false; input.len()];

    for (lane_index, lane) in lanes.iter().enumerate() {
        for (position, event) in lane.iter().enumerate() {
            let slot = (0..input.len()).find(|&i| !matched[i] && input[i] == *event);
            match slot {
                Some(i) => matched[i] = true,
                None => {
                    return Err(LaneError::UnexpectedEvent {
                        lane: lane_index,
                        position,
                    })
                }
            }
        }
    }

    match matched.iter().position(|m| !m) {
        Some(i) => Err(LaneError::MissingEvent(i)),
        None => Ok(()),
    }
}
