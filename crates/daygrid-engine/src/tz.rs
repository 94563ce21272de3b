//! Timezone resolution and wall-clock conversion.
//!
//! This module is the engine's only point of contact with the timezone
//! database (`chrono-tz`). Everything downstream of it works in the viewing
//! timezone's wall-clock frame as plain `NaiveDateTime`s, so the core
//! algorithm has zero dependency on a particular date library's API shape.

use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;

use crate::error::{LayoutError, Result};
use crate::event::EventTime;

/// Datetime format accepted for timezone-naive text, e.g. `2025-02-21T15:30:00`.
const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Resolve an IANA timezone name (e.g., "America/Los_Angeles") to a [`Tz`].
///
/// # Errors
/// Returns `LayoutError::InvalidTimezone` if the name is not a valid IANA
/// identifier.
pub fn resolve(timezone: &str) -> Result<Tz> {
    timezone
        .parse()
        .map_err(|_| LayoutError::InvalidTimezone(timezone.to_string()))
}

/// Convert an [`EventTime`] to the viewing timezone's wall clock.
///
/// - An absolute instant is converted through the timezone database.
/// - A floating time is already a wall-clock reading and passes through
///   unchanged; it means "this local time wherever the viewer is".
/// - Raw text is parsed first (RFC 3339, then timezone-naive fallback).
///
/// # Errors
/// Returns `LayoutError::InvalidDate` if raw text cannot be parsed.
pub fn wall_clock(time: &EventTime, tz: Tz) -> Result<NaiveDateTime> {
    match time {
        EventTime::Instant(dt) => Ok(dt.with_timezone(&tz).naive_local()),
        EventTime::Floating(dt) => Ok(*dt),
        EventTime::Text(s) => wall_clock(&parse_datetime(s)?, tz),
    }
}

/// Parse a datetime string into a typed [`EventTime`].
///
/// Accepts RFC 3339 (with timezone offset, e.g., "2025-02-21T23:30:00Z")
/// and naive local time (e.g., "2025-02-21T15:30:00"), which stays floating.
pub fn parse_datetime(s: &str) -> Result<EventTime> {
    // Try RFC 3339 first (has timezone info).
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(EventTime::Instant(dt.with_timezone(&Utc)));
    }
    // Fall back to a naive datetime, kept floating.
    NaiveDateTime::parse_from_str(s, NAIVE_FORMAT)
        .map(EventTime::Floating)
        .map_err(|_| LayoutError::InvalidDate(s.to_string()))
}

/// Format a wall-clock time for display labels, e.g. "4:30PM".
pub fn format_time(dt: NaiveDateTime) -> String {
    dt.format("%-I:%M%p").to_string()
}

/// Format an hour-of-day gutter label, e.g. "12:00 AM", "4:00 PM".
pub fn format_hour(hour: u32) -> String {
    let h12 = if hour % 12 == 0 { 12 } else { hour % 12 };
    let meridiem = if hour < 12 { "AM" } else { "PM" };
    format!("{}:00 {}", h12, meridiem)
}
