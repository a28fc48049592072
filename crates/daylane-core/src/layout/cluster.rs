//! Grouping of ordered events into transitively connected clusters.
//!
//! A single left-to-right sweep tracks the furthest end seen in the current
//! group. An event that starts before that point joins the group, even if it
//! does not overlap the group's first member directly.

use chrono::{DateTime, Utc};

use crate::event::Event;

/// A maximal run of time-connected events, in layout order.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster<'a> {
    events: Vec<&'a Event>,
    end: DateTime<Utc>,
}

impl<'a> Cluster<'a> {
    fn open(event: &'a Event) -> Self {
        Self {
            events: vec![event],
            end: event.end,
        }
    }

    /// Whether `event` starts before the group's furthest-reaching end
    fn reaches(&self, event: &Event) -> bool {
        event.start < self.end
    }

    fn push(&mut self, event: &'a Event) {
        self.end = self.end.max(event.end);
        self.events.push(event);
    }

    /// Members in layout order
    pub fn events(&self) -> &[&'a Event] {
        &self.events
    }

    /// Latest end among the members
    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Partition events (already in layout order) into clusters.
///
/// An event starting exactly at the running end opens a new cluster.
pub fn cluster<'a>(ordered: &[&'a Event]) -> Vec<Cluster<'a>> {
    let mut clusters = Vec::new();
    let mut current: Option<Cluster<'a>> = None;

    for &event in ordered {
        match current.as_mut() {
            Some(group) if group.reaches(event) => group.push(event),
            _ => {
                if let Some(closed) = current.replace(Cluster::open(event)) {
                    clusters.push(closed);
                }
            }
        }
    }

    clusters.extend(current);
    clusters
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::normalize;
    use chrono::TimeZone;

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, h, m, 0).unwrap()
    }

    fn cluster_ids(events: &[Event]) -> Vec<Vec<&str>> {
        let ordered = normalize(events);
        cluster(&ordered)
            .iter()
            .map(|c| c.events().iter().map(|e| e.id.as_str()).collect())
            .collect()
    }

    #[test]
    fn test_empty_input_has_no_clusters() {
        assert!(cluster(&[]).is_empty());
    }

    #[test]
    fn test_separate_events_form_separate_clusters() {
        let events = vec![
            Event::new("a", at(9, 0), at(10, 0)),
            Event::new("b", at(11, 0), at(12, 0)),
        ];
        assert_eq!(cluster_ids(&events), vec![vec!["a"], vec!["b"]]);
    }

    #[test]
    fn test_touching_events_do_not_join() {
        let events = vec![
            Event::new("a", at(9, 0), at(10, 0)),
            Event::new("b", at(10, 0), at(11, 0)),
        ];
        assert_eq!(cluster_ids(&events), vec![vec!["a"], vec!["b"]]);
    }

    #[test]
    fn test_chain_joins_transitively() {
        let events = vec![
            Event::new("c", at(11, 30), at(13, 0)),
            Event::new("a", at(9, 0), at(11, 0)),
            Event::new("b", at(10, 0), at(12, 0)),
        ];
        assert_eq!(cluster_ids(&events), vec![vec!["a", "b", "c"]]);
    }

    #[test]
    fn test_long_event_bridges_later_short_ones() {
        let events = vec![
            Event::new("all-morning", at(8, 0), at(12, 0)),
            Event::new("standup", at(9, 0), at(9, 15)),
            Event::new("review", at(11, 0), at(11, 30)),
            Event::new("lunch", at(12, 0), at(13, 0)),
        ];
        assert_eq!(
            cluster_ids(&events),
            vec![vec!["all-morning", "standup", "review"], vec!["lunch"]]
        );
    }

    #[test]
    fn test_cluster_end_tracks_running_maximum() {
        let events = vec![
            Event::new("a", at(9, 0), at(12, 0)),
            Event::new("b", at(10, 0), at(10, 30)),
        ];
        let ordered = normalize(&events);
        let clusters = cluster(&ordered);
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].end(), at(12, 0));
        assert_eq!(clusters[0].len(), 2);
    }
}
