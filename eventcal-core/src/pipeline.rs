//! End-to-end derivation from raw records.
//!
//! A [`Snapshot`] is rebuilt from scratch whenever the raw input changes.
//! The day index, today's events and the tag universe are derived from it
//! on demand and never cached, so the caller decides when to recompute.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::calendar::DayIndex;
use crate::error::EventCalResult;
use crate::event::Event;
use crate::normalize::normalize_sourced;
use crate::raw::RawRecord;
use crate::validate::{Mode, SlugConflict, enforce, find_conflicts};
use crate::views;

/// Normalized, validated events for one version of the raw input.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Snapshot {
    pub events: Vec<Event>,
    /// Slug conflicts tolerated in lenient mode. Always empty in strict mode.
    pub conflicts: Vec<SlugConflict>,
}

impl Snapshot {
    /// Normalize and validate `records`. Absent input is treated as empty.
    ///
    /// In strict mode a duplicate slug fails the whole derivation with every
    /// conflict listed. In lenient mode all records are kept, including the
    /// conflicting ones, and the conflicts are recorded on the snapshot.
    pub fn derive(records: Option<&[RawRecord]>, mode: Mode) -> EventCalResult<Self> {
        let records = records.unwrap_or_default();
        let sourced = normalize_sourced(records);
        let conflicts = enforce(find_conflicts(&sourced), mode)?;

        let events: Vec<Event> = sourced.into_iter().map(|s| s.event).collect();

        debug!(
            records = records.len(),
            events = events.len(),
            conflicts = conflicts.len(),
            %mode,
            "derived event snapshot"
        );

        Ok(Snapshot { events, conflicts })
    }

    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }

    pub fn index(&self) -> DayIndex<'_> {
        let index = DayIndex::build(&self.events);
        debug!(days = index.len(), "built day index");
        index
    }

    /// Events active today on the local calendar.
    pub fn today(&self) -> Vec<&Event> {
        views::today_events(&self.index())
    }

    /// Events active on `day`.
    pub fn on(&self, day: NaiveDate) -> Vec<&Event> {
        views::events_on_day(&self.index(), day)
    }

    pub fn tags(&self) -> Vec<String> {
        views::tag_universe(&self.events)
    }

    pub fn tagged(&self, tag: &str) -> Vec<&Event> {
        views::events_with_tag(&self.events, tag)
    }
}
