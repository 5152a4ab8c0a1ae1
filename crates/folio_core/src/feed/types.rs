//! Feed data types.

use serde::Serialize;

/// Channel-level settings for the RSS feed
#[derive(Debug, Clone, Serialize)]
pub struct FeedOptions {
    /// Channel title
    pub title: String,
    /// Channel description
    pub description: String,
    /// Absolute site URL that item links are resolved against
    pub site: String,
    /// Channel language tag
    pub language: String,
    /// Optional XSL stylesheet referenced from the document
    pub stylesheet: Option<String>,
    /// Author written on every item
    pub author: String,
    /// Put the rendered post body in `<content:encoded>` instead of the subtitle.
    /// Needs the `markdown` feature; ignored without it.
    pub full_content: bool,
}

impl Default for FeedOptions {
    fn default() -> Self {
        Self {
            title: "Developer Portfolio & Blog".to_string(),
            description: "Thoughts on web development, technology, and software engineering. \
                          Explore articles about modern web technologies, best practices, \
                          and developer insights."
                .to_string(),
            site: "https://yourusername.github.io".to_string(),
            language: "en-us".to_string(),
            stylesheet: Some("/rss/styles.xsl".to_string()),
            author: "Developer Portfolio".to_string(),
            full_content: false,
        }
    }
}

/// One post, mapped to RSS item fields
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedItem {
    /// Post title
    pub title: String,
    /// Post subtitle
    pub description: String,
    /// RFC 2822 publish date
    pub pub_date: String,
    /// Absolute permalink, also used as the guid
    pub link: String,
    /// Body for `<content:encoded>`
    pub content: String,
    /// Post tags
    pub categories: Vec<String>,
}
