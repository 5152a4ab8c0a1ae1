//! Post listing, tag index and RSS feed commands

use std::path::{Path, PathBuf};

use folio_core::config::Config;
use folio_core::content::{ContentRecord, format_date, format_date_iso};
use folio_core::error::Result;
use folio_core::feed::{render_feed, write_feed};
use folio_core::fs::RealFileSystem;
use folio_core::image::responsive_image_attrs;
use serde_json::json;

use crate::cli::util::{load_collection, load_config};

/// Handle the posts command
pub fn handle_posts(
    config_path: Option<&Path>,
    dir: Option<PathBuf>,
    limit: Option<usize>,
    tag: Option<String>,
    json: bool,
) -> Result<()> {
    let config = load_config(config_path)?;
    let collection = load_collection(&config, dir)?;

    let mut posts = match tag {
        Some(ref tag) => collection.posts_by_tag(tag),
        None => collection.all_posts(),
    };
    if let Some(limit) = limit {
        posts.truncate(limit);
    }

    if json {
        let listing: Vec<_> = posts.iter().map(|p| post_summary(p, &config)).collect();
        println!("{:#}", json!(listing));
        return Ok(());
    }

    if posts.is_empty() {
        println!("No published posts");
        return Ok(());
    }

    for post in posts {
        println!("{}", post.title);
        println!(
            "  {} · {} min read · {}",
            format_date(&post.date),
            post.reading_time(),
            config.page_path(&post.permalink())
        );
        if !post.tags.is_empty() {
            println!("  tags: {}", post.tags.join(", "));
        }
        let excerpt = post.excerpt();
        if !excerpt.is_empty() {
            println!("  {}", excerpt);
        }
        println!();
    }

    Ok(())
}

fn post_summary(post: &ContentRecord, config: &Config) -> serde_json::Value {
    json!({
        "slug": post.slug,
        "title": post.title,
        "subtitle": post.subtitle,
        "image": responsive_image_attrs(&post.image, &post.title),
        "date": format_date_iso(&post.date),
        "reading_time": post.reading_time(),
        "excerpt": post.excerpt(),
        "tags": post.tags,
        "link": config.page_path(&post.permalink()),
    })
}

/// Handle the tags command
pub fn handle_tags(config_path: Option<&Path>, dir: Option<PathBuf>) -> Result<()> {
    let config = load_config(config_path)?;
    let collection = load_collection(&config, dir)?;

    for tag in collection.all_tags() {
        println!("{}", tag);
    }
    Ok(())
}

/// Handle the feed command
pub fn handle_feed(
    config_path: Option<&Path>,
    dir: Option<PathBuf>,
    output: Option<PathBuf>,
    site: Option<String>,
    full_content: bool,
) -> Result<()> {
    let config = load_config(config_path)?;
    let collection = load_collection(&config, dir)?;

    let mut options = config.feed_options();
    if let Some(site) = site {
        options.site = site;
    }
    options.full_content = full_content;
    log::debug!("Feed site: {}", options.site);

    let posts = collection.all_posts();

    match output {
        Some(path) => {
            let count = write_feed(&RealFileSystem, &path, &posts, &options)?;
            println!("✓ Wrote {} items to {}", count, path.display());
        }
        None => print!("{}", render_feed(&posts, &options)),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::date::parse_date;

    fn record() -> ContentRecord {
        ContentRecord {
            slug: "hello".to_string(),
            title: "Hello".to_string(),
            subtitle: "First post".to_string(),
            image: "/img/hello.png".to_string(),
            body: "Some body text.".to_string(),
            date: parse_date("2024-01-15").unwrap(),
            tags: vec!["rust".to_string()],
            draft: false,
        }
    }

    #[test]
    fn test_post_summary_link_uses_base() {
        let summary = post_summary(&record(), &Config::default());
        assert_eq!(summary["link"], "/about/blog/hello/");
        assert_eq!(summary["date"], "2024-01-15T00:00:00.000Z");
        assert_eq!(summary["reading_time"], 1);
        assert_eq!(summary["image"]["src"], "/img/hello.png");

        let root = Config {
            base: String::new(),
            ..Config::default()
        };
        assert_eq!(post_summary(&record(), &root)["link"], "/blog/hello/");
    }
}
