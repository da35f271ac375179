//! Calendar day parsing and formatting.
//!
//! Days are plain `NaiveDate`s: no time of day and no timezone, so stepping
//! from one day to the next can never skip or repeat a day.

use chrono::NaiveDate;

use crate::error::{EventCalError, EventCalResult};

const DAY_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` day. Impossible dates (`2025-02-30`) yield `None`,
/// as does anything but exactly four year digits (`+10000-01-01`,
/// `-0001-01-01`): bucket keys must sort as plain strings.
pub fn parse_day(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if !has_day_shape(s) {
        return None;
    }
    NaiveDate::parse_from_str(s, DAY_FORMAT).ok()
}

fn has_day_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Like [`parse_day`], for user-supplied input where a bad date is an error.
pub fn require_day(s: &str) -> EventCalResult<NaiveDate> {
    parse_day(s).ok_or_else(|| EventCalError::InvalidDate(s.to_string()))
}

/// Format a day as its bucket key.
pub fn format_day(day: NaiveDate) -> String {
    day.format(DAY_FORMAT).to_string()
}
