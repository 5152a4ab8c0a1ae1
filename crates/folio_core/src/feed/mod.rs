//! RSS 2.0 feed for published posts.
//!
//! Posts are first mapped to [`FeedItem`]s and then rendered to a single XML
//! document. Callers pass posts already filtered and ordered, normally
//! [`crate::collection::Collection::all_posts`].

mod types;

pub use types::{FeedItem, FeedOptions};

use std::path::Path;

use crate::content::ContentRecord;
use crate::date::format_date_rfc2822;
use crate::error::{FolioError, Result};
use crate::fs::FileSystem;

/// Join a site URL and a site-relative path without doubling the slash.
pub fn absolute_url(site: &str, path: &str) -> String {
    format!(
        "{}/{}",
        site.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Map posts to feed items.
pub fn feed_items(posts: &[&ContentRecord], options: &FeedOptions) -> Vec<FeedItem> {
    posts
        .iter()
        .map(|post| FeedItem {
            title: post.title.clone(),
            description: post.subtitle.clone(),
            pub_date: format_date_rfc2822(&post.date),
            link: absolute_url(&options.site, &post.permalink()),
            content: item_content(post, options),
            categories: post.tags.clone(),
        })
        .collect()
}

fn item_content(post: &ContentRecord, options: &FeedOptions) -> String {
    #[cfg(feature = "markdown")]
    if options.full_content {
        return markdown_to_html(&post.body);
    }
    #[cfg(not(feature = "markdown"))]
    if options.full_content {
        log::warn!("Full feed content requested but the markdown feature is disabled");
    }
    post.subtitle.clone()
}

/// Convert markdown to HTML using comrak
#[cfg(feature = "markdown")]
fn markdown_to_html(markdown: &str) -> String {
    use comrak::{Options, markdown_to_html};

    let mut options = Options::default();
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;

    markdown_to_html(markdown, &options)
}

/// Render the RSS document for `posts`.
pub fn render_feed(posts: &[&ContentRecord], options: &FeedOptions) -> String {
    let items = feed_items(posts, options);
    log::debug!("Rendering feed with {} items", items.len());

    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    if let Some(ref stylesheet) = options.stylesheet {
        xml.push_str(&format!(
            "<?xml-stylesheet href=\"{}\" type=\"text/xsl\"?>\n",
            xml_escape(stylesheet)
        ));
    }
    xml.push_str(
        "<rss version=\"2.0\" xmlns:content=\"http://purl.org/rss/1.0/modules/content/\">\n",
    );
    xml.push_str("<channel>\n");
    xml.push_str(&element("title", &options.title));
    xml.push_str(&element("description", &options.description));
    xml.push_str(&element("link", &absolute_url(&options.site, "")));
    xml.push_str(&element("language", &options.language));

    for item in &items {
        xml.push_str(&render_item(item, &options.author));
    }

    xml.push_str("</channel>\n</rss>\n");
    xml
}

/// Render the feed and write it to `path`, creating parent directories.
///
/// Returns the number of items written.
pub fn write_feed<FS: FileSystem>(
    fs: &FS,
    path: &Path,
    posts: &[&ContentRecord],
    options: &FeedOptions,
) -> Result<usize> {
    let xml = render_feed(posts, options);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs.create_dir_all(parent)
            .map_err(|e| FolioError::FileWrite {
                path: parent.to_path_buf(),
                source: e,
            })?;
    }
    fs.write_file(path, &xml)
        .map_err(|e| FolioError::FileWrite {
            path: path.to_path_buf(),
            source: e,
        })?;

    log::info!("Wrote feed with {} items to {}", posts.len(), path.display());
    Ok(posts.len())
}

fn render_item(item: &FeedItem, author: &str) -> String {
    let mut xml = String::from("<item>\n");
    xml.push_str(&element("title", &item.title));
    xml.push_str(&element("link", &item.link));
    xml.push_str(&format!(
        "<guid isPermaLink=\"true\">{}</guid>\n",
        xml_escape(&item.link)
    ));
    xml.push_str(&element("description", &item.description));
    xml.push_str(&element("pubDate", &item.pub_date));
    xml.push_str(&element("content:encoded", &item.content));
    xml.push_str(&element("author", author));
    for category in &item.categories {
        xml.push_str(&element("category", category));
    }
    xml.push_str("</item>\n");
    xml
}

fn element(name: &str, text: &str) -> String {
    format!("<{name}>{}</{name}>\n", xml_escape(text))
}

/// Escape XML special characters
fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn post(slug: &str, tags: &[&str]) -> ContentRecord {
        ContentRecord {
            slug: slug.to_string(),
            title: format!("{slug} & more"),
            subtitle: "A <short> summary".to_string(),
            image: "/img.png".to_string(),
            body: "Body".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            draft: false,
        }
    }

    #[test]
    fn test_xml_escape() {
        assert_eq!(xml_escape("<a & 'b'>"), "&lt;a &amp; &apos;b&apos;&gt;");
    }

    #[test]
    fn test_absolute_url() {
        assert_eq!(absolute_url("https://x.io/", "/blog/a/"), "https://x.io/blog/a/");
        assert_eq!(absolute_url("https://x.io", "blog/a/"), "https://x.io/blog/a/");
        assert_eq!(absolute_url("https://x.io", ""), "https://x.io/");
    }

    #[test]
    fn test_feed_items_mapping() {
        let p = post("hello", &["rust"]);
        let options = FeedOptions {
            site: "https://me.dev".into(),
            ..FeedOptions::default()
        };
        let items = feed_items(&[&p], &options);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].link, "https://me.dev/blog/hello/");
        assert_eq!(items[0].description, "A <short> summary");
        assert_eq!(items[0].content, "A <short> summary");
        assert_eq!(items[0].pub_date, "Mon, 15 Jan 2024 00:00:00 +0000");
        assert_eq!(items[0].categories, vec!["rust"]);
    }

    #[test]
    fn test_render_feed_document() {
        let a = post("a", &["rust", "web"]);
        let b = post("b", &[]);
        let xml = render_feed(&[&a, &b], &FeedOptions::default());

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<?xml-stylesheet href=\"/rss/styles.xsl\" type=\"text/xsl\"?>"));
        assert!(xml.contains("<language>en-us</language>"));
        assert!(xml.contains("<title>Developer Portfolio &amp; Blog</title>"));
        assert!(xml.contains("<title>a &amp; more</title>"));
        assert!(xml.contains("<link>https://yourusername.github.io/blog/b/</link>"));
        assert!(xml.contains("<description>A &lt;short&gt; summary</description>"));
        assert!(xml.contains("<category>web</category>"));
        assert_eq!(xml.matches("<item>").count(), 2);
        assert_eq!(xml.matches("<category>").count(), 2);
        assert!(xml.trim_end().ends_with("</rss>"));
    }

    #[test]
    fn test_write_feed() {
        use crate::test_utils::MockFileSystem;

        let fs = MockFileSystem::new();
        let a = post("a", &["rust"]);
        let count = write_feed(&fs, Path::new("dist/rss.xml"), &[&a], &FeedOptions::default())
            .unwrap();

        assert_eq!(count, 1);
        let written = fs.get_content("dist/rss.xml").unwrap();
        assert!(written.contains("<link>https://yourusername.github.io/blog/a/</link>"));
        assert_eq!(fs.get_content("dist").as_deref(), Some("<DIR>"));
    }

    #[cfg(feature = "markdown")]
    #[test]
    fn test_full_content_renders_body() {
        let mut p = post("md", &[]);
        p.body = "# Heading\n\nSome *text*.".to_string();
        let options = FeedOptions {
            full_content: true,
            ..FeedOptions::default()
        };

        let items = feed_items(&[&p], &options);
        assert!(items[0].content.contains("<h1>Heading</h1>"));
        assert!(items[0].content.contains("<em>text</em>"));
        assert_eq!(items[0].description, "A <short> summary");

        let xml = render_feed(&[&p], &options);
        assert!(xml.contains("<content:encoded>&lt;h1&gt;Heading&lt;/h1&gt;"));
    }

    #[cfg(not(feature = "markdown"))]
    #[test]
    fn test_full_content_falls_back_to_subtitle() {
        let mut p = post("md", &[]);
        p.body = "# Heading".to_string();
        let options = FeedOptions {
            full_content: true,
            ..FeedOptions::default()
        };

        let items = feed_items(&[&p], &options);
        assert_eq!(items[0].content, "A <short> summary");

        let xml = render_feed(&[&p], &options);
        assert!(xml.contains("<content:encoded>A &lt;short&gt; summary</content:encoded>"));
        assert!(!xml.contains("Heading"));
    }

    #[test]
    fn test_render_feed_without_stylesheet() {
        let options = FeedOptions {
            stylesheet: None,
            ..FeedOptions::default()
        };
        let xml = render_feed(&[], &options);
        assert!(!xml.contains("xml-stylesheet"));
        assert!(!xml.contains("<item>"));
    }
}
