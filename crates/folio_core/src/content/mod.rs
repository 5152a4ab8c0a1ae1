//! Blog post records and the pure functions computed over them.

mod text;

pub use text::{
    DEFAULT_EXCERPT_LENGTH, ELLIPSIS, LinkHandling, WORDS_PER_MINUTE, estimate_reading_time,
    generate_excerpt, strip_markdown, word_count,
};

pub use crate::date::{format_date, format_date_iso};

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;

/// A single blog post: metadata from frontmatter plus the markdown body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentRecord {
    /// URL slug, taken from the file stem
    pub slug: String,
    /// Post title
    pub title: String,
    /// One-line summary, used as the feed description
    pub subtitle: String,
    /// Cover image path or URL
    pub image: String,
    /// Raw markdown body
    pub body: String,
    /// Publish date
    pub date: NaiveDate,
    /// Tags, empty when the post declares none
    pub tags: Vec<String>,
    /// Drafts are never published
    pub draft: bool,
}

impl ContentRecord {
    /// Whether the post should appear on the site.
    pub fn is_published(&self) -> bool {
        !self.draft
    }

    /// Whether the post carries `tag` (exact match).
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Site-relative permalink, e.g. `/blog/my-post/`.
    pub fn permalink(&self) -> String {
        format!("/blog/{}/", self.slug)
    }

    /// Estimated reading time of the body in minutes.
    pub fn reading_time(&self) -> u32 {
        estimate_reading_time(&self.body)
    }

    /// Excerpt of the body with the default length.
    pub fn excerpt(&self) -> String {
        generate_excerpt(&self.body, DEFAULT_EXCERPT_LENGTH)
    }
}

/// Keep non-draft records, newest first.
///
/// The sort is stable: records sharing a date keep their input order.
pub fn filter_published(records: &[ContentRecord]) -> Vec<&ContentRecord> {
    let mut published: Vec<&ContentRecord> =
        records.iter().filter(|r| r.is_published()).collect();
    published.sort_by(|a, b| b.date.cmp(&a.date));
    published
}

/// Every distinct tag across `records`, sorted ascending.
pub fn collect_tags<'a, I>(records: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a ContentRecord>,
{
    records
        .into_iter()
        .flat_map(|r| r.tags.iter().cloned())
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}
