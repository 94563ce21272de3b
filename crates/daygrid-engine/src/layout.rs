//! The day-view layout pipeline.
//!
//! `layout_day` is the engine's single entry point: normalize each event into
//! the viewed day's frame, partition the timed ones into overlap clusters,
//! pack each cluster into columns, and resolve columns into rectangles.
//! All-day events skip the timed pipeline and surface in their own list.
//! The computation is synchronous and deterministic: identical inputs
//! (including input order for same-start ties) produce identical output.

use chrono::NaiveDate;

use crate::cluster::group_into_clusters;
use crate::error::{LayoutError, Result};
use crate::event::Event;
use crate::normalize::clamp_to_day;
use crate::pack::pack_columns;
use crate::position::{resolve_positions, PositionedEvent};
use crate::tz;

/// Caller-facing configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// IANA timezone the day is viewed in.
    pub timezone: String,

    /// Minimum box height in minutes, so zero-duration events stay visible.
    pub min_event_height_minutes: i64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            timezone: "UTC".to_string(),
            min_event_height_minutes: 20,
        }
    }
}

/// A per-event failure surfaced alongside the partial result.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct EventError {
    /// Id of the event that failed.
    pub event_id: String,

    /// What went wrong.
    pub error: LayoutError,
}

/// The computed layout for one day.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct DayLayout {
    /// The day this layout is for.
    pub date: NaiveDate,

    /// Positioned timed events. Every non-all-day event intersecting the day
    /// appears exactly once; order is unspecified.
    pub events: Vec<PositionedEvent>,

    /// All-day events intersecting the day, in input order.
    pub all_day: Vec<Event>,

    /// Events excluded because their dates could not be parsed. An empty list
    /// means the layout is complete, not partial.
    pub errors: Vec<EventError>,
}

/// Lay out one day's events.
///
/// Pure function of `(events, day, config)`: owns no state, mutates no input,
/// and may be called repeatedly or concurrently with different inputs.
/// Unparseable per-event dates exclude that event and are reported in
/// [`DayLayout::errors`], never silently dropped.
///
/// # Errors
/// Returns `LayoutError::InvalidTimezone` if `config.timezone` is not a valid
/// IANA identifier; that poisons every day-boundary comparison, so the whole
/// call fails rather than one event.
pub fn layout_day(events: &[Event], day: NaiveDate, config: &LayoutConfig) -> Result<DayLayout> {
    let tz = tz::resolve(&config.timezone)?;

    let mut timed = Vec::new();
    let mut all_day = Vec::new();
    let mut errors = Vec::new();

    for event in events {
        match clamp_to_day(event, day, tz) {
            Ok(Some(interval)) => {
                if event.all_day {
                    all_day.push(event.clone());
                } else {
                    timed.push(interval);
                }
            }
            Ok(None) => {}
            Err(error) => errors.push(EventError {
                event_id: event.id.clone(),
                error,
            }),
        }
    }

    let mut positioned = Vec::new();
    for cluster in group_into_clusters(timed) {
        let columns = pack_columns(&cluster);
        positioned.extend(resolve_positions(&columns, config.min_event_height_minutes));
    }

    Ok(DayLayout {
        date: day,
        events: positioned,
        all_day,
        errors,
    })
}

/// One entry of the hour gutter running down the side of a day view.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct HourLabel {
    /// Minutes from local midnight to this hour line.
    pub minutes: i64,

    /// Display label, e.g. "12:00 AM", "4:00 PM".
    pub label: String,
}

/// The 24 hour-line labels of a day view, top to bottom.
pub fn hour_labels() -> Vec<HourLabel> {
    (0u32..24)
        .map(|hour| HourLabel {
            minutes: i64::from(hour) * 60,
            label: tz::format_hour(hour),
        })
        .collect()
}
