//! Property-based tests for the layout pipeline using proptest.
//!
//! These verify invariants that should hold for *any* batch of events, not
//! just the specific examples in `layout_tests.rs`.

use chrono::{Duration, NaiveDate, NaiveTime};
use daygrid_engine::normalize::ClampedInterval;
use daygrid_engine::{
    group_into_clusters, layout_day, pack_columns, Event, EventTime, LayoutConfig, MINUTES_IN_DAY,
};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

const DAY: (i32, u32, u32) = (2026, 3, 1);

fn viewed_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(DAY.0, DAY.1, DAY.2).unwrap()
}

/// Generate (start_minute, duration_minutes) pairs on the viewed day.
/// Durations may spill past midnight; zero durations are included on purpose.
fn arb_span() -> impl Strategy<Value = (i64, i64)> {
    (0i64..MINUTES_IN_DAY, 0i64..=360)
}

fn arb_spans() -> impl Strategy<Value = Vec<(i64, i64)>> {
    prop::collection::vec(arb_span(), 0..40)
}

/// Build events with floating times so the UTC config needs no conversion.
fn events_from_spans(spans: &[(i64, i64)]) -> Vec<Event> {
    let midnight = viewed_day().and_time(NaiveTime::MIN);
    spans
        .iter()
        .enumerate()
        .map(|(i, &(start, dur))| Event {
            id: format!("e{i}"),
            title: format!("Event {i}"),
            start: EventTime::Floating(midnight + Duration::minutes(start)),
            end: Some(EventTime::Floating(midnight + Duration::minutes(start + dur))),
            all_day: false,
        })
        .collect()
}

fn intervals_from_spans(spans: &[(i64, i64)]) -> Vec<ClampedInterval> {
    let midnight = viewed_day().and_time(NaiveTime::MIN);
    spans
        .iter()
        .enumerate()
        .map(|(i, &(start, dur))| {
            let end = (start + dur).min(MINUTES_IN_DAY);
            ClampedInterval {
                event: Event {
                    id: format!("e{i}"),
                    title: format!("Event {i}"),
                    start: EventTime::Floating(midnight + Duration::minutes(start)),
                    end: Some(EventTime::Floating(midnight + Duration::minutes(start + dur))),
                    all_day: false,
                },
                day_relative_start: start,
                day_relative_end: end,
                original_start: midnight + Duration::minutes(start),
                original_end: midnight + Duration::minutes(start + dur),
            }
        })
        .collect()
}

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Property 1: Completeness — every event on the day appears exactly once
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn completeness(spans in arb_spans()) {
        let events = events_from_spans(&spans);
        let layout = layout_day(&events, viewed_day(), &LayoutConfig::default()).unwrap();

        prop_assert_eq!(layout.events.len(), events.len());

        let mut seen = std::collections::HashSet::new();
        for p in &layout.events {
            prop_assert!(seen.insert(p.event.id.clone()), "duplicate {}", p.event.id);
        }
        prop_assert!(layout.errors.is_empty());
    }
}

// ---------------------------------------------------------------------------
// Property 2: Clamping bounds — every box sits inside the day frame
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn boxes_stay_in_the_day_frame(spans in arb_spans()) {
        let events = events_from_spans(&spans);
        let layout = layout_day(&events, viewed_day(), &LayoutConfig::default()).unwrap();

        for p in &layout.events {
            prop_assert!((0..=MINUTES_IN_DAY).contains(&p.top), "top {} out of range", p.top);
            prop_assert!(p.height >= 0);
            prop_assert!(p.left >= 0.0 && p.left < 1.0);
            prop_assert!(p.width > 0.0 && p.width <= 1.0);
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: Column-count consistency
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn column_indices_are_consistent(spans in arb_spans()) {
        let events = events_from_spans(&spans);
        let layout = layout_day(&events, viewed_day(), &LayoutConfig::default()).unwrap();

        for p in &layout.events {
            prop_assert!(p.column_index < p.total_columns);
            prop_assert!((p.width - 1.0 / p.total_columns as f64).abs() < f64::EPSILON);
            prop_assert!(
                (p.left - p.column_index as f64 / p.total_columns as f64).abs() < f64::EPSILON
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Property 4: No collision within a packed column
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn packed_columns_never_collide(spans in arb_spans()) {
        let intervals = intervals_from_spans(&spans);
        let total = intervals.len();

        let mut packed = 0usize;
        for cluster in group_into_clusters(intervals) {
            let columns = pack_columns(&cluster);
            prop_assert!(!columns.is_empty());
            for column in &columns {
                packed += column.len();
                for i in 0..column.len() {
                    for j in i + 1..column.len() {
                        prop_assert!(
                            !daygrid_engine::overlap::overlaps(&column[i], &column[j]),
                            "column members {} and {} overlap",
                            column[i].event.id,
                            column[j].event.id
                        );
                    }
                }
            }
        }
        prop_assert_eq!(packed, total, "packing must cover every interval exactly once");
    }
}

// ---------------------------------------------------------------------------
// Property 5: Clusters partition the input in ascending start order
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn clusters_partition_the_input(spans in arb_spans()) {
        let intervals = intervals_from_spans(&spans);
        let total = intervals.len();

        let clusters = group_into_clusters(intervals);
        let grouped: usize = clusters.iter().map(|c| c.len()).sum();
        prop_assert_eq!(grouped, total);

        for cluster in &clusters {
            prop_assert!(!cluster.is_empty());
            for pair in cluster.windows(2) {
                prop_assert!(pair[0].day_relative_start <= pair[1].day_relative_start);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Property 6: Determinism — identical inputs give identical output
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn layout_is_deterministic(spans in arb_spans()) {
        let events = events_from_spans(&spans);
        let config = LayoutConfig::default();

        let first = layout_day(&events, viewed_day(), &config).unwrap();
        let second = layout_day(&events, viewed_day(), &config).unwrap();
        prop_assert_eq!(first, second);
    }
}

// ---------------------------------------------------------------------------
// Property 7: The pipeline never panics on arbitrary text times
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn arbitrary_text_never_panics(texts in prop::collection::vec(".{0,40}", 0..10)) {
        let events: Vec<Event> = texts
            .iter()
            .enumerate()
            .map(|(i, t)| Event {
                id: format!("e{i}"),
                title: "fuzz".to_string(),
                start: EventTime::Text(t.clone()),
                end: None,
                all_day: false,
            })
            .collect();

        // A reported error per bad event is acceptable; a panic is not.
        let layout = layout_day(&events, viewed_day(), &LayoutConfig::default()).unwrap();

        let parseable = texts
            .iter()
            .filter(|t| daygrid_engine::tz::parse_datetime(t).is_ok())
            .count();
        prop_assert_eq!(layout.errors.len(), texts.len() - parseable);
        // Parseable texts landing on another day are excluded, not errors.
        prop_assert!(layout.events.len() <= parseable);
    }
}
