//! Event layout engine.
//!
//! Turns one day's events into positioned boxes. The pipeline is strictly
//! sequential:
//! - [`normalize`]: deterministic ordering (start, longest first, id)
//! - [`cluster`]: transitive grouping by a running-maximum-end sweep
//! - [`assign_columns`]: greedy first-fit lanes with a cluster-wide lane count
//! - [`map_geometry`]: day-relative fractions
//!
//! The engine is pure and total. It never mutates its input, never fails, and
//! gives identical output for any permutation of the same events.

mod cluster;
mod columns;
mod geometry;
mod normalize;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::day;
use crate::event::Event;

pub use cluster::{cluster, Cluster};
pub use columns::{assign_columns, LaneAssignment};
pub use geometry::{map_geometry, minutes_from_day_start, EventGeometry, MINUTES_PER_DAY};
pub use normalize::{layout_order, normalize};

/// An event together with its computed placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedEvent {
    #[serde(flatten)]
    pub event: Event,
    /// Ordinal of the event's cluster within this layout
    pub cluster: usize,
    #[serde(flatten)]
    pub geometry: EventGeometry,
}

impl PositionedEvent {
    pub fn id(&self) -> &str {
        &self.event.id
    }

    pub fn lane_index(&self) -> usize {
        self.geometry.lane_index
    }

    pub fn lane_count(&self) -> usize {
        self.geometry.lane_count
    }
}

/// Lay out events that all belong to one calendar day.
///
/// The result is in layout order (see [`layout_order`]) and holds exactly one
/// entry per input event.
pub fn layout_events(events: &[Event]) -> Vec<PositionedEvent> {
    let ordered = normalize(events);
    let clusters = cluster(&ordered);

    let mut positioned = Vec::with_capacity(events.len());
    for (index, group) in clusters.iter().enumerate() {
        let lanes = assign_columns(group);
        for (&event, assignment) in group.events().iter().zip(lanes) {
            if event.end <= event.start {
                tracing::warn!(id = %event.id, start = %event.start, end = %event.end,
                    "event does not end after it starts; laying out with zero height");
            }
            positioned.push(PositionedEvent {
                event: event.clone(),
                cluster: index,
                geometry: map_geometry(event, assignment),
            });
        }
    }

    tracing::debug!(
        events = positioned.len(),
        clusters = clusters.len(),
        "laid out events"
    );
    positioned
}

/// The layout of one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayLayout {
    pub date: NaiveDate,
    pub cluster_count: usize,
    pub events: Vec<PositionedEvent>,
}

impl DayLayout {
    /// Widest cluster of the day; 0 for an empty day
    pub fn max_lane_count(&self) -> usize {
        self.events
            .iter()
            .map(PositionedEvent::lane_count)
            .max()
            .unwrap_or(0)
    }

    /// Members of cluster `index`, in layout order
    pub fn cluster_members(&self, index: usize) -> impl Iterator<Item = &PositionedEvent> {
        self.events.iter().filter(move |e| e.cluster == index)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Select the events starting on `date` and lay them out.
pub fn layout_day(events: &[Event], date: NaiveDate) -> DayLayout {
    let bucket = day::events_on(events, date);
    tracing::debug!(%date, selected = bucket.len(), total = events.len(), "bucketed events");

    let events = layout_events(&bucket);
    let cluster_count = events.last().map_or(0, |e| e.cluster + 1);
    DayLayout {
        date,
        cluster_count,
        events,
    }
}
