//! Core types and derivations for eventcal.
//!
//! This crate turns loosely-shaped content records into calendar data:
//! - `raw` models the untrusted input records
//! - `normalize` and `slug` produce validated `Event`s
//! - `validate` detects duplicate slugs
//! - `calendar` expands events into a per-day index
//! - `views` derives today's events and the tag universe
//!
//! `pipeline::Snapshot` ties the stages together. Nothing here performs I/O.

pub mod calendar;
pub mod error;
pub mod event;
pub mod normalize;
pub mod pipeline;
pub mod raw;
pub mod slug;
pub mod validate;
pub mod views;

pub use calendar::{DayBucket, DayIndex};
pub use error::{EventCalError, EventCalResult};
pub use event::{Event, SourcedEvent};
pub use pipeline::Snapshot;
pub use raw::{RawMeta, RawRecord};
pub use validate::{ConflictReport, Mode, SlugConflict};
