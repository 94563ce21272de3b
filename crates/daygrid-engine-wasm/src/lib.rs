//! WASM bindings for daygrid-engine.
//!
//! Exposes day/week event layout and the hour gutter to JavaScript via
//! `wasm-bindgen`. All complex types are passed as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p daygrid-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/daygrid-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/daygrid_engine_wasm.wasm
//! ```

use chrono::NaiveDate;
use daygrid_engine::{DayLayout, Event, LayoutConfig, PositionedEvent};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct PositionedEventDto {
    id: String,
    title: String,
    top: i64,
    height: i64,
    left: f64,
    width: f64,
    column_index: usize,
    total_columns: usize,
    start_label: String,
    end_label: String,
}

impl From<&PositionedEvent> for PositionedEventDto {
    fn from(p: &PositionedEvent) -> Self {
        Self {
            id: p.event.id.clone(),
            title: p.event.title.clone(),
            top: p.top,
            height: p.height,
            left: p.left,
            width: p.width,
            column_index: p.column_index,
            total_columns: p.total_columns,
            start_label: p.start_label(),
            end_label: p.end_label(),
        }
    }
}

#[derive(Serialize)]
struct EventErrorDto {
    event_id: String,
    message: String,
}

#[derive(Serialize)]
struct DayLayoutDto {
    date: String,
    events: Vec<PositionedEventDto>,
    all_day: Vec<Event>,
    errors: Vec<EventErrorDto>,
}

impl From<&DayLayout> for DayLayoutDto {
    fn from(layout: &DayLayout) -> Self {
        Self {
            date: layout.date.to_string(),
            events: layout.events.iter().map(PositionedEventDto::from).collect(),
            all_day: layout.all_day.clone(),
            errors: layout
                .errors
                .iter()
                .map(|e| EventErrorDto {
                    event_id: e.event_id.clone(),
                    message: e.error.to_string(),
                })
                .collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse a `YYYY-MM-DD` date string.
fn parse_date(s: &str) -> Result<NaiveDate, JsValue> {
    s.parse()
        .map_err(|_| JsValue::from_str(&format!("Invalid date '{}': expected YYYY-MM-DD", s)))
}

/// Parse a JSON array of event objects.
fn parse_events_json(json: &str) -> Result<Vec<Event>, JsValue> {
    serde_json::from_str(json).map_err(|e| JsValue::from_str(&format!("Invalid events JSON: {}", e)))
}

fn build_config(timezone: Option<String>, min_event_height: Option<i64>) -> LayoutConfig {
    let mut config = LayoutConfig::default();
    if let Some(tz) = timezone {
        config.timezone = tz;
    }
    if let Some(h) = min_event_height {
        config.min_event_height_minutes = h;
    }
    config
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Lay out one day's events.
///
/// `events_json` must be a JSON array of `{id, title, start, end?, all_day?}`
/// objects where `start`/`end` are RFC 3339 instants or timezone-naive local
/// datetimes. Returns a JSON string with `date`, positioned `events`, the
/// `all_day` list, and per-event `errors`.
///
/// # Arguments
/// - `events_json` -- the events to lay out
/// - `date` -- the viewed day, `YYYY-MM-DD`
/// - `timezone` -- optional IANA timezone (default "UTC")
/// - `min_event_height` -- optional minimum box height in minutes
#[wasm_bindgen(js_name = "layoutDay")]
pub fn layout_day(
    events_json: &str,
    date: &str,
    timezone: Option<String>,
    min_event_height: Option<i64>,
) -> Result<String, JsValue> {
    let events = parse_events_json(events_json)?;
    let day = parse_date(date)?;
    let config = build_config(timezone, min_event_height);

    let layout = daygrid_engine::layout_day(&events, day, &config)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_json::to_string(&DayLayoutDto::from(&layout))
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Lay out every day of the Sunday-started week containing `date`.
///
/// Same inputs as [`layout_day`]; returns a JSON array of seven day layouts.
#[wasm_bindgen(js_name = "layoutWeek")]
pub fn layout_week(
    events_json: &str,
    date: &str,
    timezone: Option<String>,
    min_event_height: Option<i64>,
) -> Result<String, JsValue> {
    let events = parse_events_json(events_json)?;
    let day = parse_date(date)?;
    let config = build_config(timezone, min_event_height);

    let week = daygrid_engine::layout_week(&events, day, &config)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let dtos: Vec<DayLayoutDto> = week.iter().map(DayLayoutDto::from).collect();

    serde_json::to_string(&dtos)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// The 24 hour gutter labels of a day view, as a JSON array of
/// `{minutes, label}` objects.
#[wasm_bindgen(js_name = "hourLabels")]
pub fn hour_labels() -> Result<String, JsValue> {
    serde_json::to_string(&daygrid_engine::hour_labels())
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}
