use std::path::PathBuf;

use clap::Args;
use daylane_core::day::group_by_day;

use crate::input;

#[derive(Args)]
pub struct DaysArgs {
    /// JSON file with an array of events ("-" or omitted reads stdin)
    file: Option<PathBuf>,
    /// Output as JSON object keyed by date
    #[arg(long)]
    json: bool,
}

pub fn run(args: DaysArgs) -> Result<(), Box<dyn std::error::Error>> {
    let events = input::read_events(args.file.as_deref())?;
    let days = group_by_day(&events);

    if args.json {
        let counts: serde_json::Map<String, serde_json::Value> = days
            .iter()
            .map(|(date, bucket)| (date.to_string(), bucket.len().into()))
            .collect();
        println!("{}", serde_json::to_string_pretty(&counts)?);
    } else {
        for (date, bucket) in &days {
            println!("{date}  {}", bucket.len());
        }
    }
    Ok(())
}
