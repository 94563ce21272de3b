//! Convert packed columns into normalized rectangles.
//!
//! Vertical units are minutes since local midnight (1 unit = 1 minute;
//! callers rescale to pixels as they like). Horizontal positions are
//! fractions of the cluster's width: columns are always equal width within
//! a cluster, with no column-spanning.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::event::Event;
use crate::pack::Column;
use crate::tz;

/// A laid-out event, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionedEvent {
    /// The originating event.
    pub event: Event,

    /// Minutes from local midnight to the top of the box.
    pub top: i64,

    /// Box height in minutes, floored at the configured minimum so
    /// zero-duration events stay visible.
    pub height: i64,

    /// Left edge as a fraction of the cluster width (`column_index / total_columns`).
    pub left: f64,

    /// Box width as a fraction of the cluster width (`1 / total_columns`).
    pub width: f64,

    /// 0-based column within the cluster.
    pub column_index: usize,

    /// Number of columns in the cluster.
    pub total_columns: usize,

    /// True (un-clamped) wall-clock start, for labels.
    pub original_start: NaiveDateTime,

    /// True (un-clamped) wall-clock end, for labels.
    pub original_end: NaiveDateTime,
}

impl PositionedEvent {
    /// Display label for the true start time, e.g. "4:30PM".
    pub fn start_label(&self) -> String {
        tz::format_time(self.original_start)
    }

    /// Display label for the true end time, e.g. "6:00PM".
    pub fn end_label(&self) -> String {
        tz::format_time(self.original_end)
    }
}

/// Resolve one cluster's packed columns into positioned events.
///
/// Every interval in `columns` produces exactly one output. Output order is
/// column-major (a by-product of the walk, not a contract; callers may
/// re-sort for rendering).
pub fn resolve_positions(columns: &[Column], min_height_minutes: i64) -> Vec<PositionedEvent> {
    let total_columns = columns.len();
    let width = 1.0 / total_columns as f64;

    columns
        .iter()
        .enumerate()
        .flat_map(|(column_index, column)| {
            column.iter().map(move |interval| PositionedEvent {
                event: interval.event.clone(),
                top: interval.day_relative_start,
                height: (interval.day_relative_end - interval.day_relative_start)
                    .max(min_height_minutes),
                left: column_index as f64 / total_columns as f64,
                width,
                column_index,
                total_columns,
                original_start: interval.original_start,
                original_end: interval.original_end,
            })
        })
        .collect()
}
