use anyhow::Result;
use chrono::NaiveDate;
use eventcal_core::Snapshot;
use eventcal_core::calendar::format_day;
use eventcal_core::views::local_today;
use owo_colors::OwoColorize;

use crate::commands::print_json;
use crate::render::Render;

/// Show the events active today, or on `date` when given.
pub fn run(snapshot: &Snapshot, date: Option<NaiveDate>, json: bool) -> Result<()> {
    let (day, events) = match date {
        Some(day) => (day, snapshot.on(day)),
        None => (local_today(), snapshot.today()),
    };

    if json {
        return print_json(&events);
    }

    println!("{}", format_day(day).bold());

    if events.is_empty() {
        println!("{}", "No events on this day".dimmed());
        return Ok(());
    }

    for event in &events {
        println!("  {}", event.render());
    }

    Ok(())
}
