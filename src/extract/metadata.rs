//! Parse extracted front matter into page metadata records.

use serde::Serialize;
use serde_yaml::{Mapping, Value};
use std::collections::BTreeMap;

/// Keys consulted for a page's tag list, in priority order.
const TAG_KEYS: &[&str] = &["topic-tags", "topic-auto", "tags"];

/// Keys lifted into named fields of [`PageMeta`]; everything else rides
/// along in `extra` for custom templates.
const RESERVED_KEYS: &[&str] = &["filename", "title", "year", "topic-tags", "topic-auto", "tags"];

/// Metadata distilled from one page's front matter.
#[derive(Debug, Clone, Serialize)]
pub struct PageMeta {
    pub filename: String,
    pub title: Option<String>,
    pub year: Option<i64>,
    pub tags: Vec<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Parse an extracted front-matter string into a [`PageMeta`].
///
/// Returns `None` when the input is empty, is not valid YAML, or parses to
/// something other than a mapping. Parse failures never propagate: a page
/// without usable front matter simply carries no tags. The `filename` always
/// comes from the caller, overriding any `filename` key in the front matter.
pub fn parse(front_matter: &str, filename: &str) -> Option<PageMeta> {
    if front_matter.trim().is_empty() {
        return None;
    }

    let value: Value = serde_yaml::from_str(front_matter).ok()?;
    let mapping = value.as_mapping()?;

    Some(PageMeta {
        filename: filename.to_string(),
        title: string_value(mapping, "title"),
        year: integer_value(mapping, "year"),
        tags: tag_list(mapping),
        extra: extra_entries(mapping),
    })
}

/// Resolve the tag list from the first tag key present in the mapping.
/// Accepts a single string or a sequence of strings; non-string sequence
/// items are skipped.
fn tag_list(mapping: &Mapping) -> Vec<String> {
    for key in TAG_KEYS {
        let Some(value) = value_of(mapping, key) else {
            continue;
        };
        return match value {
            Value::String(tag) => vec![tag.clone()],
            Value::Sequence(items) => items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect(),
            _ => Vec::new(),
        };
    }
    Vec::new()
}

fn value_of<'a>(mapping: &'a Mapping, key: &str) -> Option<&'a Value> {
    mapping
        .iter()
        .find(|(k, _)| k.as_str() == Some(key))
        .map(|(_, v)| v)
}

fn string_value(mapping: &Mapping, key: &str) -> Option<String> {
    value_of(mapping, key)?.as_str().map(str::to_string)
}

fn integer_value(mapping: &Mapping, key: &str) -> Option<i64> {
    value_of(mapping, key)?.as_i64()
}

/// Collect the string-keyed entries not already lifted into named fields.
fn extra_entries(mapping: &Mapping) -> BTreeMap<String, Value> {
    mapping
        .iter()
        .filter_map(|(k, v)| k.as_str().map(|key| (key, v)))
        .filter(|(key, _)| !RESERVED_KEYS.contains(key))
        .map(|(key, v)| (key.to_string(), v.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_mapping() {
        let meta = parse("title: Test Page\ntags:\n  - tag1\n  - tag2\nyear: 2024", "page.md")
            .expect("should parse");
        assert_eq!(meta.filename, "page.md");
        assert_eq!(meta.title.as_deref(), Some("Test Page"));
        assert_eq!(meta.year, Some(2024));
        assert_eq!(meta.tags, vec!["tag1", "tag2"]);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse("", "page.md").is_none());
        assert!(parse("   \n  ", "page.md").is_none());
    }

    #[test]
    fn test_parse_malformed_yaml() {
        assert!(parse("{ not closed", "page.md").is_none());
    }

    #[test]
    fn test_parse_list_is_not_a_mapping() {
        assert!(parse("- item1\n- item2", "page.md").is_none());
    }

    #[test]
    fn test_parse_scalar_is_not_a_mapping() {
        assert!(parse("just a string", "page.md").is_none());
    }

    #[test]
    fn test_filename_overrides_front_matter() {
        let meta = parse("filename: other.md\ntitle: Test", "real.md").expect("should parse");
        assert_eq!(meta.filename, "real.md");
        assert!(!meta.extra.contains_key("filename"));
    }

    #[test]
    fn test_tags_as_single_string() {
        let meta = parse("tags: solo", "page.md").expect("should parse");
        assert_eq!(meta.tags, vec!["solo"]);
    }

    #[test]
    fn test_topic_tags_take_priority() {
        let meta = parse("topic-tags: [a]\ntopic-auto: [b]\ntags: [c]", "page.md")
            .expect("should parse");
        assert_eq!(meta.tags, vec!["a"]);
    }

    #[test]
    fn test_topic_auto_fallback() {
        let meta = parse("topic-auto: [b]\ntags: [c]", "page.md").expect("should parse");
        assert_eq!(meta.tags, vec!["b"]);
    }

    #[test]
    fn test_non_string_tag_items_skipped() {
        let meta = parse("tags: [good, 42, other]", "page.md").expect("should parse");
        assert_eq!(meta.tags, vec!["good", "other"]);
    }

    #[test]
    fn test_non_list_tag_value_yields_no_tags() {
        let meta = parse("tags: 7", "page.md").expect("should parse");
        assert!(meta.tags.is_empty());
    }

    #[test]
    fn test_missing_tag_keys_yield_no_tags() {
        let meta = parse("title: Untagged", "page.md").expect("should parse");
        assert!(meta.tags.is_empty());
    }

    #[test]
    fn test_missing_title_and_year() {
        let meta = parse("tags: [a]", "page.md").expect("should parse");
        assert!(meta.title.is_none());
        assert!(meta.year.is_none());
    }

    #[test]
    fn test_non_integer_year_ignored() {
        let meta = parse("year: someday", "page.md").expect("should parse");
        assert!(meta.year.is_none());
    }

    #[test]
    fn test_extra_keys_preserved() {
        let meta = parse("title: T\nauthor: Ada\ndraft: true", "page.md").expect("should parse");
        assert_eq!(
            meta.extra.get("author").and_then(Value::as_str),
            Some("Ada")
        );
        assert_eq!(meta.extra.get("draft").and_then(Value::as_bool), Some(true));
        assert!(!meta.extra.contains_key("title"));
    }
}
