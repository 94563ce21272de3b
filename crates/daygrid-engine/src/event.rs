//! Input event records.
//!
//! Events are externally owned and read-only to the engine: nothing here is
//! mutated or persisted, and every layout pass re-derives its own working
//! structures from these records.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// When an event starts or ends.
///
/// Calendar sources are sloppy about this: some hand over absolute instants,
/// some hand over timezone-naive wall-clock strings. The engine accepts both,
/// plus raw text that has not been validated yet. Unparseable text surfaces
/// as `LayoutError::InvalidDate` during normalization rather than being
/// silently coerced to "now" or to the epoch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventTime {
    /// An absolute instant (e.g., `2025-02-21T23:30:00Z`).
    Instant(DateTime<Utc>),
    /// A floating wall-clock time with no timezone (e.g., `2025-02-21T15:30:00`),
    /// interpreted in the viewing timezone.
    Floating(NaiveDateTime),
    /// Raw text, validated by the normalizer.
    Text(String),
}

impl From<DateTime<Utc>> for EventTime {
    fn from(dt: DateTime<Utc>) -> Self {
        EventTime::Instant(dt)
    }
}

impl From<NaiveDateTime> for EventTime {
    fn from(dt: NaiveDateTime) -> Self {
        EventTime::Floating(dt)
    }
}

/// A calendar event as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Opaque unique identifier, stable across renders.
    pub id: String,

    /// Display string, opaque to the engine.
    pub title: String,

    /// Start of the event.
    pub start: EventTime,

    /// End of the event. Absent means a zero-duration point event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<EventTime>,

    /// All-day events bypass timed layout and are listed separately.
    #[serde(default)]
    pub all_day: bool,
}
