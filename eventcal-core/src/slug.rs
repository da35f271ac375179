//! Slug resolution for content records.
//!
//! A record's slug is taken from the first non-blank candidate:
//! 1. the explicit `meta.slug`
//! 2. the last segment of `stem` (`events/spring-fest` -> `spring-fest`)
//! 3. the last segment of `id`, minus its content extension
//!    (`events/events/spring-fest.md` -> `spring-fest`)
//! 4. the record's own `slug` field

/// Content file extensions stripped from `id` tails (matched case-insensitively).
const CONTENT_EXTENSIONS: [&str; 5] = ["md", "mdx", "yml", "yaml", "json"];

/// Resolve a slug from its candidate sources. Returns an empty string when
/// no candidate yields anything; callers drop such records.
pub fn resolve_slug(
    explicit: Option<&str>,
    stem: Option<&str>,
    id: Option<&str>,
    fallback: Option<&str>,
) -> String {
    let candidates = [
        explicit.map(str::to_string),
        stem.map(slug_from_stem),
        id.map(slug_from_id),
        fallback.map(str::to_string),
    ];

    candidates
        .into_iter()
        .flatten()
        .map(|candidate| candidate.trim().to_string())
        .find(|candidate| !candidate.is_empty())
        .unwrap_or_default()
}

/// Last path segment of a stem: `events/spring-fest` -> `spring-fest`
pub fn slug_from_stem(stem: &str) -> String {
    last_segment(stem).to_string()
}

/// Last path segment of an id with a content extension removed:
/// `events/events/spring-fest.md` -> `spring-fest`
pub fn slug_from_id(id: &str) -> String {
    let base = last_segment(id);

    match base.rsplit_once('.') {
        Some((name, ext))
            if CONTENT_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known)) =>
        {
            name.to_string()
        }
        _ => base.to_string(),
    }
}

fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_slug_wins() {
        let slug = resolve_slug(Some("explicit"), Some("events/by-stem"), None, None);
        assert_eq!(slug, "explicit");
    }

    #[test]
    fn test_stem_tail() {
        assert_eq!(resolve_slug(None, Some("events/by-stem"), None, None), "by-stem");
    }

    #[test]
    fn test_id_tail_without_extension() {
        assert_eq!(
            resolve_slug(None, None, Some("events/events/by-id.md"), None),
            "by-id"
        );
    }

    #[test]
    fn test_fallback_slug_is_last_resort() {
        assert_eq!(resolve_slug(None, None, None, Some("raw-slug")), "raw-slug");
        assert_eq!(
            resolve_slug(None, Some("events/by-stem"), None, Some("raw-slug")),
            "by-stem"
        );
    }

    #[test]
    fn test_nothing_resolves_to_empty() {
        assert_eq!(resolve_slug(None, None, None, None), "");
        assert_eq!(resolve_slug(Some("   "), Some(""), Some("events/"), None), "");
    }

    #[test]
    fn test_blank_explicit_falls_through() {
        assert_eq!(resolve_slug(Some("  "), Some("events/by-stem"), None, None), "by-stem");
    }

    #[test]
    fn test_result_is_trimmed() {
        assert_eq!(resolve_slug(Some("  spaced  "), None, None, None), "spaced");
    }

    #[test]
    fn test_id_extensions_case_insensitive() {
        assert_eq!(slug_from_id("events/a.MDX"), "a");
        assert_eq!(slug_from_id("events/b.Yaml"), "b");
        assert_eq!(slug_from_id("c.json"), "c");
    }

    #[test]
    fn test_id_only_strips_known_extension_once() {
        assert_eq!(slug_from_id("events/a.json.md"), "a.json");
        assert_eq!(slug_from_id("events/notes.txt"), "notes.txt");
        assert_eq!(slug_from_id("events/plain"), "plain");
    }
}
