//! Views derived from the normalized events and the day index.

use std::collections::HashSet;

use chrono::{Local, NaiveDate};

use crate::calendar::DayIndex;
use crate::event::Event;

/// Today's date on the local calendar, read fresh on every call.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Events active today. Recomputed on each call, so a long-running process
/// picks up the new day after midnight.
pub fn today_events<'a>(index: &DayIndex<'a>) -> Vec<&'a Event> {
    events_on_day(index, local_today())
}

/// Events active on `day`; empty when nothing covers it.
pub fn events_on_day<'a>(index: &DayIndex<'a>, day: NaiveDate) -> Vec<&'a Event> {
    index.events_on(day).to_vec()
}

/// Every distinct tag across `events`, in first-seen order.
pub fn tag_universe(events: &[Event]) -> Vec<String> {
    let mut seen = HashSet::new();
    events
        .iter()
        .flat_map(|event| event.tags.iter())
        .filter(|tag| seen.insert(tag.as_str()))
        .cloned()
        .collect()
}

/// Events carrying `tag`, in event order.
pub fn events_with_tag<'a>(events: &'a [Event], tag: &str) -> Vec<&'a Event> {
    events.iter().filter(|event| event.has_tag(tag)).collect()
}
