use anyhow::Result;
use chrono::NaiveDate;
use eventcal_core::Snapshot;
use owo_colors::OwoColorize;

use crate::commands::print_json;
use crate::render::Render;

pub fn run(
    snapshot: &Snapshot,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    json: bool,
) -> Result<()> {
    let index = snapshot.index();
    let buckets = index.between(from, to);

    if json {
        return print_json(buckets);
    }

    if buckets.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    for (i, bucket) in buckets.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", bucket.render());
    }

    Ok(())
}
