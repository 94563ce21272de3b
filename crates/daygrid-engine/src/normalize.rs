//! Clamp events to the boundaries of the viewed day.
//!
//! Converts an event's stored times into the viewing timezone, decides whether
//! the event belongs on the viewed day at all, and if so clips its extent to
//! `[0, 1440]` minutes since local midnight. The un-clamped wall-clock times
//! are retained so an event spanning midnight still shows its true times in
//! display labels even though its box is visually cut at the day boundary.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use chrono_tz::Tz;

use crate::error::Result;
use crate::event::Event;
use crate::tz;

/// Minutes in one wall-clock day. Day-relative offsets are clamped to this.
pub const MINUTES_IN_DAY: i64 = 1440;

/// An event's extent on the viewed day, in minutes since local midnight.
///
/// Derived and ephemeral, recomputed on every layout pass.
/// Invariant: `0 <= day_relative_start <= day_relative_end <= 1440`.
#[derive(Debug, Clone, PartialEq)]
pub struct ClampedInterval {
    /// The originating event.
    pub event: Event,

    /// Clamped start, minutes since local midnight of the viewed day.
    pub day_relative_start: i64,

    /// Clamped end, minutes since local midnight of the viewed day.
    pub day_relative_end: i64,

    /// Un-clamped wall-clock start in the viewing timezone, for labels.
    pub original_start: NaiveDateTime,

    /// Un-clamped wall-clock end in the viewing timezone, for labels.
    pub original_end: NaiveDateTime,
}

/// Clamp an event to the viewed day, or exclude it.
///
/// The event's times are converted to `tz`'s wall clock and compared against
/// the half-open day window `[midnight, midnight + 24h)`. An event is included
/// iff its un-clamped interval intersects that window; a zero-duration event
/// is included iff its point lies inside it. Returns `Ok(None)` for events
/// that do not belong on this day.
///
/// # Errors
/// Returns `LayoutError::InvalidDate` if a start or end is unparseable text.
pub fn clamp_to_day(event: &Event, day: NaiveDate, tz: Tz) -> Result<Option<ClampedInterval>> {
    let start = tz::wall_clock(&event.start, tz)?;
    let end = match &event.end {
        Some(t) => tz::wall_clock(t, tz)?,
        // No end means a zero-duration point event.
        None => start,
    };
    // A reversed interval collapses to its start.
    let end = end.max(start);

    let day_start = day.and_time(NaiveTime::MIN);
    let day_end = day_start + Duration::days(1);

    let intersects = if start == end {
        day_start <= start && start < day_end
    } else {
        start < day_end && end > day_start
    };
    if !intersects {
        return Ok(None);
    }

    let day_relative_start = (start - day_start).num_minutes().max(0);
    let day_relative_end = (end - day_start).num_minutes().min(MINUTES_IN_DAY);

    Ok(Some(ClampedInterval {
        event: event.clone(),
        day_relative_start,
        day_relative_end,
        original_start: start,
        original_end: end,
    }))
}
