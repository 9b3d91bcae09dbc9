//! Group page records by tag and bucket the groups by first letter.

use crate::extract::PageMeta;
use serde::Serialize;
use serde_yaml::Value;
use std::collections::BTreeMap;

/// Year assigned to records whose front matter carries none; pages without
/// a year sort after every dated page.
const MISSING_YEAR: i64 = 5000;

/// One page entry inside a tag group, ready for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct TagPage {
    pub title: String,
    pub filename: String,
    pub year: Option<i64>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// All pages sharing one tag, in year order.
#[derive(Debug, Clone, Serialize)]
pub struct TagGroup {
    pub tag: String,
    pub pages: Vec<TagPage>,
}

/// Tag groups sharing an uppercased first letter, alphabetically sorted.
#[derive(Debug, Clone, Serialize)]
pub struct LetterBucket {
    pub letter: String,
    pub groups: Vec<TagGroup>,
}

/// Build the letter-bucketed tag structure from collected page records.
///
/// Records are sorted by year (stable, missing years last), fanned out into
/// one group per tag, and the groups are sorted case-insensitively before
/// bucketing. A record tagged N times appears in N groups.
pub fn group_by_tag(mut records: Vec<PageMeta>) -> Vec<LetterBucket> {
    records.sort_by_key(|record| record.year.unwrap_or(MISSING_YEAR));

    let mut groups: BTreeMap<String, Vec<TagPage>> = BTreeMap::new();
    for record in &records {
        let page = TagPage {
            title: record
                .title
                .clone()
                .unwrap_or_else(|| "Untitled".to_string()),
            filename: record.filename.clone(),
            year: record.year,
            extra: record.extra.clone(),
        };
        for tag in &record.tags {
            groups.entry(tag.clone()).or_default().push(page.clone());
        }
    }

    bucket_by_letter(groups)
}

/// Sort groups alphabetically (case-insensitive) and bucket them under the
/// uppercased first character of the tag. Empty tag names are skipped.
fn bucket_by_letter(groups: BTreeMap<String, Vec<TagPage>>) -> Vec<LetterBucket> {
    let mut sorted: Vec<(String, Vec<TagPage>)> = groups.into_iter().collect();
    sorted.sort_by_key(|(tag, _)| tag.to_lowercase());

    let mut buckets: BTreeMap<String, Vec<TagGroup>> = BTreeMap::new();
    for (tag, pages) in sorted {
        let Some(first) = tag.chars().next() else {
            continue;
        };
        let letter: String = first.to_uppercase().collect();
        buckets
            .entry(letter)
            .or_default()
            .push(TagGroup { tag, pages });
    }

    buckets
        .into_iter()
        .map(|(letter, groups)| LetterBucket { letter, groups })
        .collect()
}
