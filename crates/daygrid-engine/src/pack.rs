//! Greedy column assignment within one cluster.
//!
//! First-fit interval coloring: each interval goes into the leftmost column
//! whose current last occupant it does not overlap, or opens a new column.
//! This does not guarantee the theoretical minimum column count for
//! pathological overlap patterns, but it is deterministic and stable under
//! stable input ordering, which is what keeps event boxes from jumping
//! between columns across re-renders with unchanged data.

use crate::cluster::Cluster;
use crate::normalize::ClampedInterval;
use crate::overlap::overlaps;

/// A set of mutually non-overlapping intervals sharing one horizontal slot.
pub type Column = Vec<ClampedInterval>;

/// Assign a cluster's intervals to columns, left to right.
///
/// The cluster must already be in ascending start order (as produced by
/// [`crate::cluster::group_into_clusters`]). A single-member cluster
/// short-circuits to one full-width column. The number of columns returned
/// is the cluster's total column count; an interval's column index is its
/// column's 0-based position in the returned sequence.
pub fn pack_columns(cluster: &Cluster) -> Vec<Column> {
    if cluster.len() == 1 {
        return vec![cluster.clone()];
    }

    let mut columns: Vec<Column> = Vec::new();
    for interval in cluster {
        let fit = columns
            .iter()
            .position(|col| !col.last().is_some_and(|last| overlaps(last, interval)));
        match fit {
            Some(i) => columns[i].push(interval.clone()),
            None => columns.push(vec![interval.clone()]),
        }
    }
    columns
}
