//! Raw content records as handed over by the content loader.
//!
//! Every field the loader cannot vouch for is kept as a `serde_json::Value`
//! and coerced explicitly by [`coerce_string`] and [`coerce_tags`].

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A content document before normalization.
///
/// `stem` and `id` are provenance hints: slash-delimited paths such as
/// `events/spring-fest` and `events/events/spring-fest.md`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawRecord {
    pub title: Value,
    pub slug: Value,
    pub stem: Option<String>,
    pub id: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub meta: RawMeta,
}

/// Frontmatter fields of a raw record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawMeta {
    pub slug: Value,
    pub start_date: Value,
    pub end_date: Value,
    pub tags: Value,
}

impl RawRecord {
    /// Where the record came from, for diagnostics: `id`, else `stem`.
    pub fn source(&self) -> Option<&str> {
        self.id.as_deref().or(self.stem.as_deref())
    }
}

fn null_as_default<'de, D>(deserializer: D) -> Result<RawMeta, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawMeta>::deserialize(deserializer)?.unwrap_or_default())
}

/// Coerce a scalar value to a string.
///
/// Null and non-scalar values (arrays, objects) are treated as absent.
pub fn coerce_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Coerce a tags value to a list of strings.
///
/// Only arrays yield tags. Each element goes through [`coerce_string`], so
/// null, list and mapping elements are dropped rather than stringified: a
/// `"null"` tag would never be meaningful to filter on.
pub fn coerce_tags(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().filter_map(coerce_string).collect(),
        _ => Vec::new(),
    }
}
