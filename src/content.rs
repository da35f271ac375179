//! Loading raw event records from a content directory.
//!
//! Markdown files carry their fields in YAML frontmatter; `.json`, `.yml`
//! and `.yaml` files hold the same fields as a single object:
//!
//! ```text
//! ---
//! title: Spring Fest
//! startDate: 2025-03-01
//! endDate: 2025-03-03
//! tags: [music, outdoor]
//! ---
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use eventcal_core::{RawMeta, RawRecord};
use serde_json::{Map, Value};
use tracing::debug;

const MARKDOWN_EXTENSIONS: [&str; 2] = ["md", "mdx"];
const DATA_EXTENSIONS: [&str; 3] = ["json", "yml", "yaml"];

/// Load every content file under `dir` as a raw record, in path order.
///
/// A missing directory yields no records.
pub fn load_records(dir: &Path) -> Result<Vec<RawRecord>> {
    if !dir.exists() {
        debug!(dir = %dir.display(), "content directory does not exist");
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    collect_content_files(dir, &mut files)
        .with_context(|| format!("Could not read content directory {}", dir.display()))?;
    files.sort();

    let collection = dir
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("content")
        .to_string();

    files
        .iter()
        .map(|path| {
            load_record(dir, &collection, path)
                .with_context(|| format!("Could not load {}", path.display()))
        })
        .collect()
}

fn collect_content_files(dir: &Path, out: &mut Vec<PathBuf>) -> std::io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        if entry.file_type()?.is_dir() {
            collect_content_files(&path, out)?;
            continue;
        }
        if content_extension(&path).is_some() {
            out.push(path);
        }
    }
    Ok(())
}

fn content_extension(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let known = MARKDOWN_EXTENSIONS.contains(&ext.as_str())
        || DATA_EXTENSIONS.contains(&ext.as_str());
    known.then_some(ext)
}

fn load_record(root: &Path, collection: &str, path: &Path) -> Result<RawRecord> {
    let rel = path
        .strip_prefix(root)
        .context("Content file outside content directory")?
        .to_string_lossy()
        .replace('\\', "/");
    let stem = match rel.rsplit_once('.') {
        Some((stem, _)) => stem.to_string(),
        None => rel.clone(),
    };

    let content = fs::read_to_string(path)?;
    let ext = content_extension(path).unwrap_or_default();

    let fields = if MARKDOWN_EXTENSIONS.contains(&ext.as_str()) {
        let (mut fields, body) = split_frontmatter(&content)?;
        if !fields.contains_key("title") {
            if let Some(heading) = first_heading(body) {
                fields.insert("title".to_string(), Value::String(heading));
            }
        }
        fields
    } else if ext == "json" {
        into_object(serde_json::from_str(&content)?)?
    } else {
        into_object(serde_yaml::from_str(&content)?)?
    };

    Ok(record_from_fields(
        fields,
        format!("{}/{}", collection, stem),
        format!("{}/{}", collection, rel),
    ))
}

/// Map frontmatter-style fields onto a raw record.
pub fn record_from_fields(mut fields: Map<String, Value>, stem: String, id: String) -> RawRecord {
    let mut take = |key: &str| fields.remove(key).unwrap_or(Value::Null);

    RawRecord {
        title: take("title"),
        slug: Value::Null,
        stem: Some(stem),
        id: Some(id),
        meta: RawMeta {
            slug: take("slug"),
            start_date: take("startDate"),
            end_date: take("endDate"),
            tags: take("tags"),
        },
    }
}

/// Split `---` fenced YAML frontmatter from a markdown document.
/// Documents without frontmatter have no fields.
fn split_frontmatter(input: &str) -> Result<(Map<String, Value>, &str)> {
    let Some(rest) = input
        .strip_prefix("---\r\n")
        .or_else(|| input.strip_prefix("---\n"))
    else {
        return Ok((Map::new(), input));
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            let yaml = &rest[..offset];
            let body = &rest[offset + line.len()..];
            let fields = if yaml.trim().is_empty() {
                Map::new()
            } else {
                into_object(serde_yaml::from_str(yaml)?)?
            };
            return Ok((fields, body));
        }
        offset += line.len();
    }

    bail!("Unterminated frontmatter")
}

fn first_heading(body: &str) -> Option<String> {
    body.lines()
        .filter_map(|line| line.strip_prefix("# "))
        .map(str::trim)
        .find(|title| !title.is_empty())
        .map(str::to_string)
}

fn into_object(value: Value) -> Result<Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        other => bail!("Expected a mapping of event fields, found {}", kind(&other)),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}
