//! Day bucketing.
//!
//! The layout engine expects events that belong to one calendar day. These
//! helpers select or group events by the UTC day their `start` falls on.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::event::Event;

/// Events starting on `date`, in input order.
pub fn events_on(events: &[Event], date: NaiveDate) -> Vec<Event> {
    events
        .iter()
        .filter(|event| event.day() == date)
        .cloned()
        .collect()
}

/// Group events by start day. Each bucket keeps input order.
pub fn group_by_day(events: &[Event]) -> BTreeMap<NaiveDate, Vec<Event>> {
    let mut days: BTreeMap<NaiveDate, Vec<Event>> = BTreeMap::new();
    for event in events {
        days.entry(event.day()).or_default().push(event.clone());
    }
    days
}
