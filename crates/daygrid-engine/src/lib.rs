//! # daygrid-engine
//!
//! Deterministic day-view event layout for calendar UIs.
//!
//! Given a day, a viewing timezone, and a set of events (possibly spanning
//! multiple days, possibly all-day, possibly overlapping), the engine computes
//! a vertical extent (minutes since local midnight) and a horizontal slot
//! (column index / column count) for every timed event, such that overlapping
//! events never visually collide. The whole pipeline is a pure function of
//! `(events, day, timezone)`: it caches nothing and owns no state, so every
//! call recomputes from scratch.
//!
//! ## Modules
//!
//! - [`event`] — input event records and their loosely-typed times
//! - [`tz`] — timezone resolution and wall-clock conversion/formatting
//! - [`normalize`] — clamp events to the boundaries of the viewed day
//! - [`overlap`] — half-open interval overlap test
//! - [`cluster`] — partition a day's intervals into overlap chains
//! - [`pack`] — greedy column assignment within a cluster
//! - [`position`] — convert minutes + columns into normalized rectangles
//! - [`layout`] — the `layout_day` entry point tying the pipeline together
//! - [`week`] — run the day pipeline across a Sunday-started week
//! - [`error`] — error types

pub mod cluster;
pub mod error;
pub mod event;
pub mod layout;
pub mod normalize;
pub mod overlap;
pub mod pack;
pub mod position;
pub mod tz;
pub mod week;

pub use cluster::group_into_clusters;
pub use error::LayoutError;
pub use event::{Event, EventTime};
pub use layout::{hour_labels, layout_day, DayLayout, EventError, HourLabel, LayoutConfig};
pub use normalize::{ClampedInterval, MINUTES_IN_DAY};
pub use pack::pack_columns;
pub use position::PositionedEvent;
pub use week::{layout_week, week_days};
