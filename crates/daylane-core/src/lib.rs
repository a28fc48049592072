//! # Daylane Core Library
//!
//! Lays out one day of calendar events as positioned boxes: which events share
//! horizontal space, which lane each one takes, and where it sits inside a
//! fixed-height day container. The `daylane` CLI is a thin shell over this
//! crate.
//!
//! ## Architecture
//!
//! - **Layout engine**: a pure, deterministic pipeline (ordering, transitive
//!   clustering, greedy lane assignment, day-relative geometry)
//! - **Day bucketing**: selects the events belonging to one calendar day
//! - **Styling**: projects geometry onto absolutely positioned CSS
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`layout_events`]: the whole layout pipeline
//! - [`PositionedEvent`]: an input [`Event`] plus its geometry
//! - [`EventStyle`]: CSS for one positioned event
//! - [`Config`]: application configuration management

pub mod day;
pub mod error;
pub mod event;
pub mod layout;
pub mod storage;
pub mod style;

pub use error::{ConfigError, CoreError, ValidationError};
pub use event::{validate_batch, Event};
pub use layout::{
    layout_day, layout_events, DayLayout, EventGeometry, LaneAssignment, PositionedEvent,
};
pub use storage::{Config, OutputFormat};
pub use style::{event_selector, EventStyle, StyleConfig};
