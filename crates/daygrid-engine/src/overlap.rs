//! Half-open interval overlap test.
//!
//! Two intervals overlap when `a.start < b.end && b.start < a.end`. This
//! excludes the adjacent case where `a.end == b.start`: back-to-back events
//! share a column rather than forcing a new one. A zero-duration interval
//! overlaps only intervals that strictly contain its point.

use crate::normalize::ClampedInterval;

/// Do two clamped intervals overlap in time?
pub fn overlaps(a: &ClampedInterval, b: &ClampedInterval) -> bool {
    a.day_relative_start < b.day_relative_end && b.day_relative_start < a.day_relative_end
}

/// Overlap duration in minutes: `min(ends) - max(starts)`, or 0 when the
/// intervals do not overlap.
pub fn overlap_minutes(a: &ClampedInterval, b: &ClampedInterval) -> i64 {
    if !overlaps(a, b) {
        return 0;
    }
    a.day_relative_end.min(b.day_relative_end) - a.day_relative_start.max(b.day_relative_start)
}
