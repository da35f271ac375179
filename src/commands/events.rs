use anyhow::Result;
use eventcal_core::Snapshot;
use owo_colors::OwoColorize;

use crate::commands::print_json;
use crate::render::{Render, pluralize};

pub fn run(snapshot: &Snapshot, tag: Option<&str>, json: bool) -> Result<()> {
    let events = match tag {
        Some(tag) => snapshot.tagged(tag),
        None => snapshot.events.iter().collect(),
    };

    if json {
        return print_json(&events);
    }

    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    for event in &events {
        println!("{}", event.render());
    }

    let summary = format!("{} {}", events.len(), pluralize("event", events.len()));
    println!("\n{}", summary.dimmed());

    Ok(())
}
