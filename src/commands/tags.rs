use anyhow::Result;
use eventcal_core::Snapshot;
use owo_colors::OwoColorize;

use crate::commands::print_json;

pub fn run(snapshot: &Snapshot, json: bool) -> Result<()> {
    let tags = snapshot.tags();

    if json {
        return print_json(&tags);
    }

    if tags.is_empty() {
        println!("{}", "No tags found".dimmed());
        return Ok(());
    }

    for tag in &tags {
        let count = snapshot.tagged(tag).len();
        println!("{} {}", format!("#{}", tag).cyan(), format!("({})", count).dimmed());
    }

    Ok(())
}
