//! Review scheduling for Recall.
//!
//! Pure functions over the interval ladder. A card's `step_index` points
//! into [`INTERVALS`]; the duration at that index is the minimum time since
//! the card's last update before it is due again. Nothing here touches the
//! database: callers read card state, ask these functions what to do, and
//! write the answer back.

use chrono::{DateTime, Duration, Utc};

/// Review intervals in days, indexed by a card's step index.
///
/// Passing a review moves a card one rung up (saturating at the top),
/// doubling the wait each time. Failing drops it to the second rung.
pub const INTERVALS: [i64; 8] = [0, 1, 2, 4, 8, 16, 32, 64];

/// Returns true if a card at `step_index`, last updated at `updated_at`,
/// is due for review at `now`.
///
/// `step_index` must be a valid index into [`INTERVALS`]; writes clamp, so
/// an out-of-range value here means corrupted card state and panics.
pub fn is_due(step_index: usize, updated_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    let review_at = updated_at + Duration::days(INTERVALS[step_index]);
    now >= review_at
}

/// Returns the step index a card moves to after a review.
///
/// A pass advances one rung, saturating at the top of the ladder. A fail
/// always lands on rung 1, not 0: a failed card comes back after one day
/// rather than immediately, even if it was failed at rung 0.
pub fn next_step(step_index: usize, passed: bool) -> usize {
    if passed {
        (step_index + 1).min(INTERVALS.len() - 1)
    } else {
        1
    }
}
