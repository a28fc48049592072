//! Day-relative render geometry.
//!
//! Vertical values are fractions of a 1440-minute day, horizontal values are
//! fractions of the cluster's lane count. Every fraction lies in `[0, 1]`.

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use super::columns::LaneAssignment;
use crate::event::Event;

pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Position of one event inside a day container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventGeometry {
    pub lane_index: usize,
    pub lane_count: usize,
    pub top_fraction: f64,
    pub height_fraction: f64,
    pub left_fraction: f64,
    pub width_fraction: f64,
}

/// Whole minutes elapsed since midnight of `t`'s own day.
pub fn minutes_from_day_start(t: DateTime<Utc>) -> i64 {
    i64::from(t.num_seconds_from_midnight() / 60)
}

/// Map an event and its lane placement onto fractional coordinates.
///
/// Zero or negative durations give a zero height. An event running past
/// midnight is cut at the bottom of its start day.
pub fn map_geometry(event: &Event, lanes: LaneAssignment) -> EventGeometry {
    let day = MINUTES_PER_DAY as f64;
    let top_fraction = minutes_from_day_start(event.start) as f64 / day;
    let height_fraction = (event.duration_minutes().max(0) as f64 / day).min(1.0 - top_fraction);

    let lane_count = lanes.lane_count.max(1);
    let width_fraction = 1.0 / lane_count as f64;

    EventGeometry {
        lane_index: lanes.lane_index,
        lane_count,
        top_fraction,
        height_fraction,
        left_fraction: lanes.lane_index as f64 * width_fraction,
        width_fraction,
    }
}
