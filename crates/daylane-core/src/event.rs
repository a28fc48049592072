//! Calendar event input type and boundary validation.

use std::collections::HashSet;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A single calendar event as handed to the layout engine.
///
/// Events are plain values. The engine never rejects one: an event whose
/// `end` is not after its `start` is laid out with zero height. Use
/// [`validate`](Self::validate) at input boundaries when rejection is wanted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Event {
    /// Create a new event without title, description or color
    pub fn new(id: impl Into<String>, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            start,
            end,
            title: None,
            description: None,
            color: None,
        }
    }

    /// Set title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set display color (any CSS color string)
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Exact duration; negative for reversed events.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Get duration in whole minutes, truncated toward zero
    pub fn duration_minutes(&self) -> i64 {
        self.duration().num_minutes()
    }

    /// Direct overlap: the two half-open intervals intersect.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// UTC calendar day the event starts on
    pub fn day(&self) -> NaiveDate {
        self.start.date_naive()
    }

    /// Check the event is well formed.
    ///
    /// # Errors
    /// Returns an error if the id is empty or `end <= start`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::EmptyId);
        }
        if self.end <= self.start {
            return Err(ValidationError::InvalidTimeRange {
                id: self.id.clone(),
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }
}

/// Validate every event and check that ids are unique.
///
/// # Errors
/// Returns the first problem found, in input order.
pub fn validate_batch(events: &[Event]) -> Result<(), ValidationError> {
    let mut seen = HashSet::with_capacity(events.len());
    for event in events {
        event.validate()?;
        if !seen.insert(event.id.as_str()) {
            return Err(ValidationError::DuplicateId(event.id.clone()));
        }
    }
    Ok(())
}
