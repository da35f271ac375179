//! Raw record normalization.

use tracing::debug;

use crate::event::{Event, SourcedEvent};
use crate::raw::{RawRecord, coerce_string, coerce_tags};
use crate::slug::resolve_slug;

/// Normalize raw records into events, dropping incomplete ones.
///
/// Output order matches input order.
pub fn normalize(records: &[RawRecord]) -> Vec<Event> {
    normalize_sourced(records)
        .into_iter()
        .map(|sourced| sourced.event)
        .collect()
}

/// Like [`normalize`], but keeps each event's provenance for validation.
pub fn normalize_sourced(records: &[RawRecord]) -> Vec<SourcedEvent> {
    records
        .iter()
        .filter_map(|record| {
            let sourced = normalize_record(record);
            if sourced.event.is_complete() {
                Some(sourced)
            } else {
                // Drafts without dates are expected; nothing to report upstream.
                debug!(
                    slug = %sourced.event.slug,
                    source = sourced.source.as_deref().unwrap_or("-"),
                    "skipping incomplete event record"
                );
                None
            }
        })
        .collect()
}

/// Map a single record to an event without checking completeness.
pub fn normalize_record(record: &RawRecord) -> SourcedEvent {
    let meta = &record.meta;

    let explicit = coerce_string(&meta.slug);
    let fallback = coerce_string(&record.slug);
    let slug = resolve_slug(
        explicit.as_deref(),
        record.stem.as_deref(),
        record.id.as_deref(),
        fallback.as_deref(),
    );

    let event = Event {
        slug,
        title: coerce_string(&record.title).unwrap_or_default(),
        start_date: coerce_string(&meta.start_date).unwrap_or_default(),
        end_date: coerce_string(&meta.end_date).unwrap_or_default(),
        tags: coerce_tags(&meta.tags),
    };

    SourcedEvent {
        event,
        source: record.source().map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> RawRecord {
        serde_json::from_value(value).expect("Should deserialize raw record")
    }

    #[test]
    fn test_complete_records_keep_input_order() {
        let records = vec![
            record(json!({ "title": "B", "stem": "events/b",
                "meta": { "startDate": "2025-03-02", "endDate": "2025-03-02" } })),
            record(json!({ "title": "A", "stem": "events/a",
                "meta": { "startDate": "2025-03-01", "endDate": "2025-03-01" } })),
        ];

        let events = normalize(&records);
        let slugs: Vec<_> = events.iter().map(|e| e.slug.as_str()).collect();
        assert_eq!(slugs, vec!["b", "a"]);
    }

    #[test]
    fn test_incomplete_records_are_dropped() {
        let records = vec![
            record(json!({ "title": "X", "stem": "events/x",
                "meta": { "startDate": "", "endDate": "2025-01-01" } })),
            record(json!({ "title": "No end", "stem": "events/y",
                "meta": { "startDate": "2025-01-01" } })),
            record(json!({ "title": "No slug",
                "meta": { "startDate": "2025-01-01", "endDate": "2025-01-01" } })),
            record(json!({ "title": "Kept", "stem": "events/kept",
                "meta": { "startDate": "2025-01-01", "endDate": "2025-01-01" } })),
        ];

        let events = normalize(&records);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Kept");
    }

    #[test]
    fn test_fields_are_coerced() {
        let sourced = normalize_record(&record(json!({
            "title": 42,
            "id": "events/events/answer.md",
            "meta": { "startDate": "2025-01-01", "endDate": "2025-01-02", "tags": ["a", 1, true] }
        })));

        assert_eq!(sourced.event.slug, "answer");
        assert_eq!(sourced.event.title, "42");
        assert_eq!(sourced.event.tags, vec!["a", "1", "true"]);
        assert_eq!(sourced.source.as_deref(), Some("events/events/answer.md"));
    }

    #[test]
    fn test_non_list_tags_become_empty() {
        let sourced = normalize_record(&record(json!({
            "stem": "events/a",
            "meta": { "startDate": "2025-01-01", "endDate": "2025-01-02", "tags": "music" }
        })));
        assert!(sourced.event.tags.is_empty());
    }

    #[test]
    fn test_missing_title_is_empty() {
        let sourced = normalize_record(&record(json!({ "stem": "events/a" })));
        assert_eq!(sourced.event.title, "");
        assert_eq!(sourced.source.as_deref(), Some("events/a"));
    }

    #[test]
    fn test_explicit_numeric_slug() {
        let sourced = normalize_record(&record(json!({
            "stem": "events/a",
            "meta": { "slug": 2025 }
        })));
        assert_eq!(sourced.event.slug, "2025");
    }
}
