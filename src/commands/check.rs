use anyhow::{Result, bail};
use eventcal_core::calendar::parse_day;
use eventcal_core::normalize::normalize_sourced;
use eventcal_core::validate::find_conflicts;
use eventcal_core::{Event, RawRecord};
use owo_colors::OwoColorize;

use crate::commands::print_json;
use crate::render::{Render, pluralize};

/// Validate the content without deriving a snapshot: every duplicate slug is
/// listed, and any conflict makes the command fail.
pub fn run(records: &[RawRecord], json: bool) -> Result<()> {
    let sourced = normalize_sourced(records);
    let conflicts = find_conflicts(&sourced);

    if json {
        print_json(&conflicts)?;
    } else {
        let skipped = records.len() - sourced.len();
        let events: Vec<Event> = sourced.into_iter().map(|s| s.event).collect();
        let undated = events
            .iter()
            .filter(|event| !covers_any_day(event))
            .count();

        println!(
            "{} {}, {} incomplete {} skipped",
            events.len(),
            pluralize("event", events.len()),
            skipped,
            pluralize("record", skipped),
        );
        if undated > 0 {
            println!(
                "{}",
                format!(
                    "{} {} without any calendar day (invalid or reversed dates)",
                    undated,
                    pluralize("event", undated)
                )
                .yellow()
            );
        }

        if conflicts.is_empty() {
            println!("{} {}", "✓".green(), "No duplicate slugs".green());
        } else {
            for conflict in &conflicts {
                println!("{}", conflict.render());
            }
        }
    }

    if !conflicts.is_empty() {
        bail!(
            "{} duplicate {} found",
            conflicts.len(),
            pluralize("slug", conflicts.len())
        );
    }

    Ok(())
}

fn covers_any_day(event: &Event) -> bool {
    match (parse_day(&event.start_date), parse_day(&event.end_date)) {
        (Some(start), Some(end)) => start <= end,
        _ => false,
    }
}
