//! CSS projection of positioned events.
//!
//! Rendering layers place each event box absolutely inside a fixed-height day
//! container. Percentages come straight from the layout fractions; boxes that
//! share a cluster with other lanes are widened by a pixel so adjacent borders
//! overlap instead of leaving a gap.

use serde::{Deserialize, Serialize};

use crate::layout::PositionedEvent;

/// Styling knobs, stored in the `[style]` config section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleConfig {
    /// z-index of lane 0; lane n sits at base + n
    #[serde(default = "default_z_index_base")]
    pub z_index_base: i32,
    /// Extra width in pixels for boxes in multi-lane clusters
    #[serde(default = "default_overlap_px")]
    pub overlap_px: u32,
    #[serde(default = "default_border")]
    pub border: String,
    /// Decimal places kept in rendered percentages
    #[serde(default = "default_precision")]
    pub precision: usize,
}

fn default_z_index_base() -> i32 {
    10
}
fn default_overlap_px() -> u32 {
    1
}
fn default_border() -> String {
    "1px solid white".into()
}
fn default_precision() -> usize {
    4
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            z_index_base: default_z_index_base(),
            overlap_px: default_overlap_px(),
            border: default_border(),
            precision: default_precision(),
        }
    }
}

/// Absolute positioning for one event box.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventStyle {
    pub id: String,
    pub top_percent: f64,
    pub height_percent: f64,
    pub left_percent: f64,
    pub width_percent: f64,
    pub width_adjust_px: u32,
    pub z_index: i32,
    pub border: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip)]
    precision: usize,
}

impl EventStyle {
    pub fn from_positioned(positioned: &PositionedEvent, config: &StyleConfig) -> Self {
        let g = &positioned.geometry;
        let width_adjust_px = if g.lane_count > 1 {
            config.overlap_px
        } else {
            0
        };
        let lane = i32::try_from(g.lane_index).unwrap_or(i32::MAX);

        Self {
            id: positioned.event.id.clone(),
            top_percent: g.top_fraction * 100.0,
            height_percent: g.height_fraction * 100.0,
            left_percent: g.left_fraction * 100.0,
            width_percent: g.width_fraction * 100.0,
            width_adjust_px,
            z_index: config.z_index_base.saturating_add(lane),
            border: config.border.clone(),
            background_color: positioned.event.color.clone(),
            precision: config.precision,
        }
    }

    /// Inline CSS declarations for this box.
    pub fn to_css(&self) -> String {
        let mut css = format!(
            "position: absolute; top: {}%; height: {}%; left: {}%; width: calc({}% + {}px); z-index: {}; border: {};",
            format_number(self.top_percent, self.precision),
            format_number(self.height_percent, self.precision),
            format_number(self.left_percent, self.precision),
            format_number(self.width_percent, self.precision),
            self.width_adjust_px,
            self.z_index,
            self.border,
        );
        if let Some(color) = &self.background_color {
            css.push_str(&format!(" background-color: {color};"));
        }
        css
    }
}

/// Attribute selector matching the box rendered for event `id`.
///
/// Quotes, backslashes and control characters in the id are CSS-escaped so
/// the selector stays a single well-formed string.
pub fn event_selector(id: &str) -> String {
    let mut escaped = String::with_capacity(id.len());
    for ch in id.chars() {
        match ch {
            '"' | '\\' => {
                escaped.push('\\');
                escaped.push(ch);
            }
            c if c.is_control() => escaped.push_str(&format!("\\{:x} ", u32::from(c))),
            c => escaped.push(c),
        }
    }
    format!("[data-event-id=\"{escaped}\"]")
}

/// Fixed-point rendering without trailing zeros ("12.5", "50", "33.3333").
fn format_number(value: f64, precision: usize) -> String {
    let fixed = format!("{value:.precision$}");
    if !fixed.contains('.') {
        return fixed;
    }
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
