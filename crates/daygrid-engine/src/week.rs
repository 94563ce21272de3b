//! Run the day pipeline across a week.
//!
//! Weeks start on Sunday. Each day is laid out independently through
//! [`layout_day`], so an event spanning midnight shows up on both of its
//! days, clamped to each day's boundary.

use chrono::{Datelike, Duration, NaiveDate};

use crate::error::Result;
use crate::event::Event;
use crate::layout::{layout_day, DayLayout, LayoutConfig};

/// The seven days of the Sunday-started week containing `date`.
pub fn week_days(date: NaiveDate) -> [NaiveDate; 7] {
    let offset = date.weekday().num_days_from_sunday();
    let sunday = date - Duration::days(i64::from(offset));
    std::array::from_fn(|i| sunday + Duration::days(i as i64))
}

/// Lay out every day of the week containing `date`.
///
/// # Errors
/// Returns `LayoutError::InvalidTimezone` if `config.timezone` is not a valid
/// IANA identifier.
pub fn layout_week(
    events: &[Event],
    date: NaiveDate,
    config: &LayoutConfig,
) -> Result<Vec<DayLayout>> {
    week_days(date)
        .into_iter()
        .map(|day| layout_day(events, day, config))
        .collect()
}
