//! Tag counting for the popular-tags endpoint.
//!
//! Tags are stored as raw comma-separated strings. For counting they are
//! split on `,` and trimmed; empty pieces are dropped. Counting is exact and
//! case-sensitive, so `Rust` and `rust` are different tags here even though
//! the tag filter endpoint matches them both.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Default number of tags returned by `GET /api/tags/popular`
pub const DEFAULT_POPULAR_TAG_LIMIT: usize = 10;

/// A tag and the number of questions carrying it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

/// Split a raw tag string into trimmed, non-empty tags
pub fn split_tags(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|tag| !tag.is_empty())
}

/// Count tags across questions and return the `limit` most used
///
/// Ties keep the order in which tags were first seen.
pub fn popular_tags<'a, I>(raw_tags: I, limit: usize) -> Vec<TagCount>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut position: HashMap<&'a str, usize> = HashMap::new();
    let mut counts: Vec<TagCount> = Vec::new();

    for raw in raw_tags {
        for tag in split_tags(raw) {
            match position.get(tag) {
                Some(&index) => counts[index].count += 1,
                None => {
                    position.insert(tag, counts.len());
                    counts.push(TagCount {
                        tag: tag.to_string(),
                        count: 1,
                    });
                }
            }
        }
    }

    // sort_by is stable, so first-seen order survives among equal counts
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(limit);
    counts
}
