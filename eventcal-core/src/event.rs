//! Normalized event types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A normalized event, ready for indexing and display.
///
/// Dates keep the string form they were declared with; the calendar index
/// parses them when expanding the range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub slug: String,
    pub title: String,
    pub start_date: String,
    pub end_date: String,
    pub tags: Vec<String>,
}

impl Event {
    /// An event is usable only with a slug and both range ends.
    pub fn is_complete(&self) -> bool {
        !self.slug.is_empty() && !self.start_date.is_empty() && !self.end_date.is_empty()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.title.is_empty() {
            write!(f, "{}", self.slug)
        } else {
            write!(f, "{}", self.title)
        }
    }
}

/// An event paired with the provenance of the record it came from.
///
/// Provenance only matters for diagnostics and is stripped before events
/// leave the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct SourcedEvent {
    pub event: Event,
    pub source: Option<String>,
}
