//! Per-day calendar index.

mod day;

pub use day::{format_day, parse_day, require_day};

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::warn;

use crate::event::Event;

/// The events active on one calendar day, in processing order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayBucket<'a> {
    pub date: String,
    pub events: Vec<&'a Event>,
}

/// Day buckets sorted ascending by date. Only days covered by at least one
/// event are present.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DayIndex<'a> {
    buckets: Vec<DayBucket<'a>>,
}

impl<'a> DayIndex<'a> {
    /// Expand every event's inclusive `[start_date, end_date]` range into
    /// day buckets. Events with an unparseable date are skipped with a
    /// warning; an end before the start covers no days.
    pub fn build(events: &'a [Event]) -> Self {
        let mut days: BTreeMap<NaiveDate, Vec<&'a Event>> = BTreeMap::new();

        for event in events {
            let (Some(start), Some(end)) =
                (parse_day(&event.start_date), parse_day(&event.end_date))
            else {
                warn!(
                    slug = %event.slug,
                    start_date = %event.start_date,
                    end_date = %event.end_date,
                    "invalid event date, leaving event out of the calendar"
                );
                continue;
            };

            for day in start.iter_days().take_while(|day| *day <= end) {
                days.entry(day).or_default().push(event);
            }
        }

        let buckets = days
            .into_iter()
            .map(|(day, events)| DayBucket {
                date: format_day(day),
                events,
            })
            .collect();

        DayIndex { buckets }
    }

    pub fn buckets(&self) -> &[DayBucket<'a>] {
        &self.buckets
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DayBucket<'a>> {
        self.buckets.iter()
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Bucket for a `YYYY-MM-DD` key.
    pub fn get(&self, date: &str) -> Option<&DayBucket<'a>> {
        self.buckets
            .binary_search_by(|bucket| bucket.date.as_str().cmp(date))
            .ok()
            .map(|pos| &self.buckets[pos])
    }

    /// Events active on `day`; empty when no event covers it.
    pub fn events_on(&self, day: NaiveDate) -> &[&'a Event] {
        self.get(&format_day(day))
            .map(|bucket| bucket.events.as_slice())
            .unwrap_or_default()
    }

    /// Buckets from `from` through `to`, inclusive. Either bound may be open.
    pub fn between(&self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> &[DayBucket<'a>] {
        let lo = from.map_or(0, |day| {
            let key = format_day(day);
            self.buckets.partition_point(|bucket| bucket.date < key)
        });
        let hi = to.map_or(self.buckets.len(), |day| {
            let key = format_day(day);
            self.buckets.partition_point(|bucket| bucket.date <= key)
        });

        if lo >= hi { &[] } else { &self.buckets[lo..hi] }
    }
}

impl<'a> IntoIterator for DayIndex<'a> {
    type Item = DayBucket<'a>;
    type IntoIter = std::vec::IntoIter<DayBucket<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.into_iter()
    }
}

/// Build the day index for a list of events.
pub fn index(events: &[Event]) -> DayIndex<'_> {
    DayIndex::build(events)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(slug: &str, start: &str, end: &str) -> Event {
        Event {
            slug: slug.to_string(),
            title: slug.to_uppercase(),
            start_date: start.to_string(),
            end_date: end.to_string(),
            tags: vec![],
        }
    }

    fn day(s: &str) -> NaiveDate {
        parse_day(s).expect("valid test date")
    }

    fn dates(index: &DayIndex) -> Vec<String> {
        index.iter().map(|b| b.date.clone()).collect()
    }

    #[test]
    fn test_inclusive_range_expansion() {
        let events = vec![event("fest", "2025-03-01", "2025-03-03")];
        let index = index(&events);

        assert_eq!(dates(&index), vec!["2025-03-01", "2025-03-02", "2025-03-03"]);
        for bucket in index.iter() {
            assert_eq!(bucket.events, vec![&events[0]]);
        }
    }

    #[test]
    fn test_end_before_start_covers_nothing() {
        let events = vec![event("backwards", "2025-03-03", "2025-03-01")];
        assert!(index(&events).is_empty());
    }

    #[test]
    fn test_single_day_event() {
        let events = vec![event("one", "2025-03-01", "2025-03-01")];
        assert_eq!(dates(&index(&events)), vec!["2025-03-01"]);
    }

    #[test]
    fn test_overlapping_events_share_bucket_in_input_order() {
        let events = vec![
            event("late", "2025-03-02", "2025-03-04"),
            event("early", "2025-03-01", "2025-03-02"),
        ];
        let index = index(&events);

        let bucket = index.get("2025-03-02").expect("Should have overlap bucket");
        let slugs: Vec<_> = bucket.events.iter().map(|e| e.slug.as_str()).collect();
        assert_eq!(slugs, vec!["late", "early"]);
        assert_eq!(bucket.events[0], &events[0]);
        assert_eq!(bucket.events[1], &events[1]);
        assert_eq!(dates(&index), vec!["2025-03-01", "2025-03-02", "2025-03-03", "2025-03-04"]);
    }

    #[test]
    fn test_invalid_dates_skip_only_that_event() {
        let events = vec![
            event("bad-start", "someday", "2025-03-01"),
            event("bad-end", "2025-03-01", "2025-02-30"),
            event("good", "2025-03-01", "2025-03-01"),
        ];
        let index = index(&events);

        assert_eq!(index.len(), 1);
        assert_eq!(index.events_on(day("2025-03-01"))[0].slug, "good");
    }

    #[test]
    fn test_extended_year_does_not_hide_valid_days() {
        let events = vec![
            event("fest", "2025-03-01", "2025-03-01"),
            event("bogus", "+10000-01-01", "+10000-01-01"),
            event("typo", "2025-03-01", "+12025-03-01"),
        ];
        let index = index(&events);

        assert_eq!(dates(&index), vec!["2025-03-01"]);
        let bucket = index.get("2025-03-01").expect("Valid day should be found");
        assert_eq!(bucket.events, vec![&events[0]]);
        assert_eq!(index.events_on(day("2025-03-01")).len(), 1);
    }

    #[test]
    fn test_ranges_cross_month_year_and_leap_day() {
        let events = vec![
            event("winter", "2023-12-30", "2024-01-02"),
            event("leap", "2024-02-28", "2024-03-01"),
        ];
        let index = index(&events);

        assert_eq!(
            dates(&index),
            vec![
                "2023-12-30", "2023-12-31", "2024-01-01", "2024-01-02",
                "2024-02-28", "2024-02-29", "2024-03-01",
            ]
        );
    }

    #[test]
    fn test_ranges_across_dst_changes_have_no_gaps() {
        // US and EU clock changes both fall inside this range.
        let events = vec![event("spring", "2025-03-08", "2025-04-01")];
        let index = index(&events);
        assert_eq!(index.len(), 25);
    }

    #[test]
    fn test_buckets_sorted_regardless_of_input_order() {
        let events = vec![
            event("c", "2025-05-01", "2025-05-01"),
            event("a", "2025-01-01", "2025-01-01"),
            event("b", "2025-03-01", "2025-03-01"),
        ];
        assert_eq!(dates(&index(&events)), vec!["2025-01-01", "2025-03-01", "2025-05-01"]);
    }

    #[test]
    fn test_events_on_missing_day_is_empty() {
        let events = vec![event("fest", "2025-03-01", "2025-03-01")];
        assert!(index(&events).events_on(day("2025-03-02")).is_empty());
        assert!(index(&[]).events_on(day("2025-03-02")).is_empty());
    }

    #[test]
    fn test_between_is_inclusive() {
        let events = vec![event("fest", "2025-03-01", "2025-03-05")];
        let index = index(&events);

        let window = index.between(Some(day("2025-03-02")), Some(day("2025-03-04")));
        let keys: Vec<_> = window.iter().map(|b| b.date.as_str()).collect();
        assert_eq!(keys, vec!["2025-03-02", "2025-03-03", "2025-03-04"]);

        assert_eq!(index.between(None, Some(day("2025-03-01"))).len(), 1);
        assert_eq!(index.between(Some(day("2025-03-05")), None).len(), 1);
        assert_eq!(index.between(None, None).len(), 5);
        assert!(index.between(Some(day("2025-03-04")), Some(day("2025-03-02"))).is_empty());
    }
}
