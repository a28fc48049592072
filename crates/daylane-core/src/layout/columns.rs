//! Greedy first-fit lane assignment within a cluster.
//!
//! Not an optimal interval-graph coloring: each event takes the lowest lane
//! free among the already placed events it directly overlaps, and the whole
//! cluster shares one lane count so neighbouring boxes keep a common width.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::cluster::Cluster;
use crate::event::Event;

/// Column placement of one event inside its cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaneAssignment {
    pub lane_index: usize,
    /// Lanes reserved by the whole cluster, always at least 1
    pub lane_count: usize,
}

/// Assign lanes to every member of `cluster`, in the cluster's order.
pub fn assign_columns(cluster: &Cluster<'_>) -> Vec<LaneAssignment> {
    let initial: Vec<(&Event, usize)> = Vec::with_capacity(cluster.len());
    let placed = cluster.events().iter().fold(initial, |mut placed, &event| {
        let lane = first_free_lane(&lanes_in_use(event, &placed));
        placed.push((event, lane));
        placed
    });

    let lane_count = placed
        .iter()
        .map(|&(_, lane)| lane)
        .max()
        .map_or(1, |max| max + 1);

    placed
        .into_iter()
        .map(|(_, lane_index)| LaneAssignment {
            lane_index,
            lane_count,
        })
        .collect()
}

/// Lanes held by already placed events that directly overlap `event`.
fn lanes_in_use(event: &Event, placed: &[(&Event, usize)]) -> BTreeSet<usize> {
    placed
        .iter()
        .filter(|(prev, _)| event.overlaps(prev))
        .map(|&(_, lane)| lane)
        .collect()
}

/// Smallest non-negative integer missing from `used`.
fn first_free_lane(used: &BTreeSet<usize>) -> usize {
    (0..used.len())
        .find(|lane| !used.contains(lane))
        .unwrap_or(used.len())
}
