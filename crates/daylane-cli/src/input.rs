//! Reading event batches from files or stdin.

use std::io::Read;
use std::path::Path;

use daylane_core::error::Result;
use daylane_core::{validate_batch, Event};

/// Read a JSON array of events from `path`, or stdin when `path` is `None`
/// or `-`.
pub fn read_events(path: Option<&Path>) -> Result<Vec<Event>> {
    let content = match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)?,
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let events: Vec<Event> = serde_json::from_str(&content)?;
    tracing::debug!(count = events.len(), "read events");
    Ok(events)
}

/// Like [`read_events`], optionally rejecting malformed events and duplicate
/// ids.
pub fn load(path: Option<&Path>, strict: bool) -> Result<Vec<Event>> {
    let events = read_events(path)?;
    if strict {
        validate_batch(&events)?;
    }
    Ok(events)
}
