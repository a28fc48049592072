use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;
use daylane_core::day::group_by_day;
use daylane_core::{
    event_selector, layout_day, Config, DayLayout, EventStyle, OutputFormat, StyleConfig,
};

use crate::input;

#[derive(Args)]
pub struct LayoutArgs {
    /// JSON file with an array of events ("-" or omitted reads stdin)
    file: Option<PathBuf>,
    /// Only lay out events starting on this day (YYYY-MM-DD, UTC)
    #[arg(long)]
    day: Option<NaiveDate>,
    /// Output format: json, css or table (default from config)
    #[arg(long)]
    format: Option<OutputFormat>,
    /// Reject events that end before they start, empty and duplicate ids
    #[arg(long)]
    strict: bool,
}

pub fn run(args: LayoutArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let events = input::load(args.file.as_deref(), args.strict)?;

    let days: Vec<DayLayout> = match args.day {
        Some(date) => vec![layout_day(&events, date)],
        None => group_by_day(&events)
            .into_iter()
            .map(|(date, bucket)| layout_day(&bucket, date))
            .collect(),
    };

    let format = args.format.unwrap_or(config.output.format);
    let rendered = match format {
        OutputFormat::Json if config.output.pretty => serde_json::to_string_pretty(&days)?,
        OutputFormat::Json => serde_json::to_string(&days)?,
        OutputFormat::Css => render_css(&days, &config.style),
        OutputFormat::Table => render_table(&days),
    };
    println!("{rendered}");
    Ok(())
}

fn render_css(days: &[DayLayout], style: &StyleConfig) -> String {
    let mut out = Vec::new();
    for day in days {
        out.push(format!("/* {} */", day.date));
        for positioned in &day.events {
            let css = EventStyle::from_positioned(positioned, style).to_css();
            out.push(format!("{} {{ {css} }}", event_selector(positioned.id())));
        }
    }
    out.join("\n")
}

fn render_table(days: &[DayLayout]) -> String {
    let mut out = Vec::new();
    for day in days {
        out.push(format!(
            "{}  {} events, {} clusters, up to {} lanes",
            day.date,
            day.events.len(),
            day.cluster_count,
            day.max_lane_count()
        ));
        out.push(format!(
            "  {:<16} {:<11} {:>7} {:>5} {:>7} {:>7} {:>7} {:>7}  {}",
            "ID", "TIME", "CLUSTER", "LANE", "TOP%", "HEIGHT%", "LEFT%", "WIDTH%", "TITLE"
        ));
        for p in &day.events {
            let g = &p.geometry;
            out.push(format!(
                "  {:<16} {:<11} {:>7} {:>5} {:>7.2} {:>7.2} {:>7.2} {:>7.2}  {}",
                p.id(),
                format!("{}-{}", p.event.start.format("%H:%M"), p.event.end.format("%H:%M")),
                p.cluster,
                format!("{}/{}", g.lane_index, g.lane_count),
                g.top_fraction * 100.0,
                g.height_fraction * 100.0,
                g.left_fraction * 100.0,
                g.width_fraction * 100.0,
                p.event.title.as_deref().unwrap_or("")
            ));
        }
    }
    out.join("\n")
}
