//! Timeline command

use std::path::Path;

use folio_core::error::Result;
use folio_core::icons::IconRegistry;
use folio_core::timeline::Timeline;
use serde_json::json;

use crate::cli::util::load_config;

/// Width in characters of the tallest bar.
const CHART_WIDTH: f64 = 40.0;

/// Handle the timeline command
pub fn handle_timeline(config_path: Option<&Path>, year: Option<i32>, json: bool) -> Result<()> {
    let config = load_config(config_path)?;
    let mut timeline = Timeline::new(config.timeline);
    if let Some(year) = year {
        timeline.select_year(year);
    }

    let icons = IconRegistry::default();

    if json {
        let technologies: Vec<_> = timeline
            .selected_period()
            .map(|p| {
                p.technologies
                    .iter()
                    .map(|t| json!({ "name": t, "icon": icons.lookup(t).asset_name() }))
                    .collect()
            })
            .unwrap_or_default();

        let output = json!({
            "selected_year": timeline.selected_year(),
            "period": timeline.selected_period(),
            "technologies": technologies,
            "bars": timeline.bars(),
        });
        println!("{:#}", output);
        return Ok(());
    }

    println!("{}  ..  {}", timeline.start_year(), timeline.end_year());
    let peak = timeline.curve().peak();
    for bar in timeline.bars() {
        let width = ((bar.weight / peak) * CHART_WIDTH).round() as usize;
        let marker = if bar.emphasized { "*" } else { " " };
        println!("{} {:<40} {}", marker, "█".repeat(width), timeline.tooltip(bar));
    }
    println!();

    match timeline.selected_period() {
        Some(period) => {
            println!(
                "{} at {} ({} - {})",
                period.title, period.organization, period.start_year, period.end_year
            );
            if !period.description.is_empty() {
                println!("{}", period.description);
            }
            for tech in &period.technologies {
                println!("  - {} [{}]", tech, icons.lookup(tech).asset_name());
            }
        }
        None => println!("Nothing recorded for {}", timeline.selected_year()),
    }

    Ok(())
}
