//! TUI rendering traits for eventcal types.
//!
//! This module provides extension traits that add colored terminal rendering
//! to eventcal-core types using owo_colors.

use chrono::NaiveDate;
use eventcal_core::calendar::parse_day;
use eventcal_core::{DayBucket, Event, SlugConflict};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        let range = if self.start_date == self.end_date {
            self.start_date.clone()
        } else {
            format!("{} → {}", self.start_date, self.end_date)
        };

        let mut line = format!("{} {}", self.bold(), format!("[{}]", self.slug).dimmed());
        if !self.tags.is_empty() {
            line.push(' ');
            line.push_str(&render_tags(&self.tags));
        }

        format!("{:<23} {}", range.dimmed().to_string(), line)
    }
}

impl Render for DayBucket<'_> {
    fn render(&self) -> String {
        let label = parse_day(&self.date)
            .map(|day| format_date_label(day, chrono::Local::now().date_naive()))
            .unwrap_or_else(|| self.date.clone());

        let mut lines = vec![format!("{} {}", label.bold(), self.date.dimmed())];
        lines.extend(
            self.events
                .iter()
                .map(|event| format!("  {} {}", event, format!("[{}]", event.slug).dimmed())),
        );
        lines.join("\n")
    }
}

impl Render for SlugConflict {
    fn render(&self) -> String {
        let mut lines = vec![format!("{} {}", "✗".red(), self.slug.red().bold())];
        for entry in &self.entries {
            let source = entry
                .source
                .as_deref()
                .map(|s| format!(" ({})", s))
                .unwrap_or_default();
            lines.push(format!("   - {}{}", entry.title, source.dimmed()));
        }
        lines.join("\n")
    }
}

fn render_tags(tags: &[String]) -> String {
    tags.iter()
        .map(|tag| format!("#{}", tag).cyan().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a date as a human-readable label (e.g. "Today", "Tomorrow", "Wed Feb 25")
pub fn format_date_label(date: NaiveDate, today: NaiveDate) -> String {
    match (date - today).num_days() {
        -1 => "Yesterday".to_string(),
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%a %b %-d %Y").to_string(),
    }
}

/// Simple pluralization helper
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
