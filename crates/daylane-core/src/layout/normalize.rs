//! Deterministic ordering of events before clustering.

use std::cmp::Ordering;

use crate::event::Event;

/// Total order used by the layout pipeline.
///
/// Earlier start first; among equal starts the longer event first; remaining
/// ties broken by ascending id.
pub fn layout_order(a: &Event, b: &Event) -> Ordering {
    a.start
        .cmp(&b.start)
        .then_with(|| b.duration().cmp(&a.duration()))
        .then_with(|| a.id.cmp(&b.id))
}

/// Borrow `events` in layout order. Events with identical keys (duplicate
/// ids) keep their input order.
pub fn normalize(events: &[Event]) -> Vec<&Event> {
    let mut sorted: Vec<&Event> = events.iter().collect();
    sorted.sort_by(|a, b| layout_order(a, b));
    sorted
}
