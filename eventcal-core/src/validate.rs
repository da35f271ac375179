//! Duplicate slug detection.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::error::{EventCalError, EventCalResult};
use crate::event::SourcedEvent;

/// How the pipeline reacts to duplicate slugs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Any conflict aborts the derivation.
    #[default]
    Strict,
    /// Conflicts are logged and every record is kept.
    Lenient,
}

impl FromStr for Mode {
    type Err = EventCalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Mode::Strict),
            "lenient" => Ok(Mode::Lenient),
            other => Err(EventCalError::InvalidMode(other.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Strict => write!(f, "strict"),
            Mode::Lenient => write!(f, "lenient"),
        }
    }
}

/// One record taking part in a slug conflict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictEntry {
    pub title: String,
    pub source: Option<String>,
}

/// A slug shared by more than one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlugConflict {
    pub slug: String,
    pub entries: Vec<ConflictEntry>,
}

impl fmt::Display for SlugConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slug: \"{}\"", self.slug)?;
        for entry in &self.entries {
            write!(f, "\n  - {}", entry.title)?;
            if let Some(source) = &entry.source {
                write!(f, " ({})", source)?;
            }
        }
        Ok(())
    }
}

/// Every conflict found in a snapshot, rendered as one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictReport(pub Vec<SlugConflict>);

impl ConflictReport {
    pub fn conflicts(&self) -> &[SlugConflict] {
        &self.0
    }
}

impl fmt::Display for ConflictReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Duplicate event slugs found; every slug must be unique.")?;
        for (i, conflict) in self.0.iter().enumerate() {
            let sep = if i == 0 { "\n" } else { "\n\n" };
            write!(f, "{}{}", sep, conflict)?;
        }
        Ok(())
    }
}

/// Group events by trimmed slug and return every group with more than one
/// member. Groups are ordered by first appearance; blank slugs are ignored.
pub fn find_conflicts(events: &[SourcedEvent]) -> Vec<SlugConflict> {
    let mut groups: Vec<SlugConflict> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for sourced in events {
        let key = sourced.event.slug.trim();
        if key.is_empty() {
            continue;
        }

        let entry = ConflictEntry {
            title: sourced.event.title.clone(),
            source: sourced.source.clone(),
        };

        match positions.get(key) {
            Some(&pos) => groups[pos].entries.push(entry),
            None => {
                positions.insert(key, groups.len());
                groups.push(SlugConflict {
                    slug: key.to_string(),
                    entries: vec![entry],
                });
            }
        }
    }

    groups.retain(|group| group.entries.len() > 1);
    groups
}

/// Apply the operating mode to a set of conflicts.
///
/// Strict mode turns any conflict into [`EventCalError::DuplicateSlugs`].
/// Lenient mode logs the full report and hands the conflicts back.
pub fn enforce(conflicts: Vec<SlugConflict>, mode: Mode) -> EventCalResult<Vec<SlugConflict>> {
    if conflicts.is_empty() {
        return Ok(conflicts);
    }

    match mode {
        Mode::Strict => Err(EventCalError::DuplicateSlugs(ConflictReport(conflicts))),
        Mode::Lenient => {
            let report = ConflictReport(conflicts);
            error!(conflicts = report.0.len(), "{}", report);
            Ok(report.0)
        }
    }
}
