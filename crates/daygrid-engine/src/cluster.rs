//! Partition a day's timed intervals into overlap chains.
//!
//! A cluster is a maximal run of intervals where, scanning in ascending start
//! order, each interval overlaps the interval added immediately before it.
//! The chaining test deliberately compares against the *last-added* member
//! only, not all members: with A = 0–10, B = 5–60, C = 20–30, all three land
//! in one cluster even though A and C never touch (C overlaps B, B overlaps
//! A). Clusters built this way can be wider than strict pairwise overlap
//! requires, and column widths within them are shared accordingly.

use crate::normalize::ClampedInterval;
use crate::overlap::overlaps;

/// A maximal overlap chain, in ascending `day_relative_start` order.
pub type Cluster = Vec<ClampedInterval>;

/// Group a day's intervals into clusters.
///
/// Intervals are stable-sorted by `day_relative_start`; ties keep their
/// original input order, so the output is deterministic for equal start
/// times. Every input interval appears in exactly one cluster, and clusters
/// come out ordered by their first member's start.
pub fn group_into_clusters(mut intervals: Vec<ClampedInterval>) -> Vec<Cluster> {
    intervals.sort_by_key(|i| i.day_relative_start);

    let mut clusters: Vec<Cluster> = Vec::new();
    let mut current: Cluster = Vec::new();

    for interval in intervals {
        // Chain test: against the most-recently-added member only.
        let chains = match current.last() {
            Some(last) => overlaps(last, &interval),
            None => true,
        };
        if chains {
            current.push(interval);
        } else {
            clusters.push(std::mem::replace(&mut current, vec![interval]));
        }
    }
    if !current.is_empty() {
        clusters.push(current);
    }

    clusters
}
