//! The blog collection: every post loaded from a content directory, and the
//! queries the site pages run against it.
//!
//! Drafts are kept in the collection but never returned by the queries.

use std::io;
use std::path::Path;

use serde::Deserialize;

use crate::content::{ContentRecord, collect_tags, filter_published};
use crate::date::parse_date;
use crate::error::{FolioError, Result};
use crate::frontmatter;
use crate::fs::FileSystem;

/// Number of posts shown in "recent posts" lists.
pub const DEFAULT_RECENT_LIMIT: usize = 3;

/// Frontmatter schema of a blog post.
#[derive(Debug, Deserialize)]
struct PostFrontmatter {
    title: String,
    subtitle: String,
    image: String,
    date: String,
    #[serde(default)]
    tags: Option<Vec<String>>,
    #[serde(default)]
    draft: Option<bool>,
}

/// All posts of a blog, drafts included.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    records: Vec<ContentRecord>,
}

impl Collection {
    /// Build a collection from records already in memory.
    pub fn new(records: Vec<ContentRecord>) -> Self {
        Self { records }
    }

    /// Load every `*.md` file directly inside `dir`.
    ///
    /// Files are read in path order. Any file that cannot be read or does
    /// not match the post schema aborts the load with an error naming it.
    pub fn load<FS: FileSystem>(fs: &FS, dir: &Path) -> Result<Self> {
        if !fs.is_dir(dir) {
            return Err(FolioError::FileRead {
                path: dir.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotFound, "Content directory not found"),
            });
        }

        let files = fs.list_md_files(dir).map_err(|e| FolioError::FileRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let mut records = Vec::with_capacity(files.len());
        for path in files {
            log::debug!("Loading post {}", path.display());
            records.push(load_record(fs, &path)?);
        }

        let drafts = records.iter().filter(|r| r.draft).count();
        log::info!(
            "Loaded {} posts ({} drafts) from {}",
            records.len(),
            drafts,
            dir.display()
        );

        Ok(Self { records })
    }

    /// Every record, in load order, drafts included.
    pub fn records(&self) -> &[ContentRecord] {
        &self.records
    }

    /// Published posts, newest first.
    pub fn all_posts(&self) -> Vec<&ContentRecord> {
        for draft in self.records.iter().filter(|r| r.draft) {
            log::trace!("Skipping draft '{}'", draft.slug);
        }
        filter_published(&self.records)
    }

    /// The published post with the given slug.
    pub fn post_by_slug(&self, slug: &str) -> Option<&ContentRecord> {
        self.records
            .iter()
            .find(|r| r.slug == slug && r.is_published())
    }

    /// The newest `limit` published posts.
    pub fn recent_posts(&self, limit: usize) -> Vec<&ContentRecord> {
        let mut posts = self.all_posts();
        posts.truncate(limit);
        posts
    }

    /// Published posts carrying `tag`, newest first.
    pub fn posts_by_tag(&self, tag: &str) -> Vec<&ContentRecord> {
        self.all_posts()
            .into_iter()
            .filter(|r| r.has_tag(tag))
            .collect()
    }

    /// Distinct tags of published posts, sorted.
    pub fn all_tags(&self) -> Vec<String> {
        collect_tags(self.all_posts())
    }
}

fn load_record<FS: FileSystem>(fs: &FS, path: &Path) -> Result<ContentRecord> {
    let content = fs
        .read_to_string(path)
        .map_err(|e| FolioError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

    let parsed = frontmatter::parse::<PostFrontmatter>(&content)
        .map_err(|e| FolioError::Frontmatter {
            path: path.to_path_buf(),
            source: e,
        })?
        .ok_or_else(|| FolioError::NoFrontmatter(path.to_path_buf()))?;

    let fm = parsed.frontmatter;
    let date = parse_date(&fm.date).ok_or_else(|| FolioError::InvalidDate {
        path: path.to_path_buf(),
        value: fm.date.clone(),
    })?;

    Ok(ContentRecord {
        slug: slug_for(path),
        title: fm.title,
        subtitle: fm.subtitle,
        image: fm.image,
        body: parsed.body,
        date,
        tags: fm.tags.unwrap_or_default(),
        draft: fm.draft.unwrap_or(false),
    })
}

/// Slug of a post file: its stem, e.g. `posts/hello-world.md` -> `hello-world`.
pub fn slug_for(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(String::from)
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockFileSystem;

    const POST: &str = "---\ntitle: Hello\nsubtitle: First post\nimage: /img/a.png\ndate: 2024-01-15\ntags: [rust, web]\n---\n# Hello\n\nBody text.\n";

    #[test]
    fn test_slug_for() {
        assert_eq!(slug_for(Path::new("blog/hello-world.md")), "hello-world");
        assert_eq!(slug_for(Path::new("x.md")), "x");
    }

    #[test]
    fn test_load_single_post() {
        let fs = MockFileSystem::new().with_file("blog/hello.md", POST);
        let collection = Collection::load(&fs, Path::new("blog")).unwrap();

        let post = collection.post_by_slug("hello").unwrap();
        assert_eq!(post.title, "Hello");
        assert_eq!(post.subtitle, "First post");
        assert_eq!(post.tags, vec!["rust", "web"]);
        assert!(!post.draft);
        assert_eq!(post.body, "# Hello\n\nBody text.\n");
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let fs = MockFileSystem::new().with_file(
            "blog/bare.md",
            "---\ntitle: Bare\nsubtitle: s\nimage: i\ndate: 2024-02-01\ntags:\n---\n",
        );
        let collection = Collection::load(&fs, Path::new("blog")).unwrap();
        let post = &collection.records()[0];
        assert!(post.tags.is_empty());
        assert!(!post.draft);
    }

    #[test]
    fn test_missing_frontmatter_is_error() {
        let fs = MockFileSystem::new().with_file("blog/plain.md", "# No frontmatter");
        let err = Collection::load(&fs, Path::new("blog")).unwrap_err();
        assert!(matches!(err, FolioError::NoFrontmatter(_)));
    }

    #[test]
    fn test_missing_required_field_is_error() {
        let fs = MockFileSystem::new()
            .with_file("blog/bad.md", "---\ntitle: Only title\n---\n");
        let err = Collection::load(&fs, Path::new("blog")).unwrap_err();
        assert!(matches!(err, FolioError::Frontmatter { .. }));
    }

    #[test]
    fn test_invalid_date_is_error() {
        let fs = MockFileSystem::new().with_file(
            "blog/bad.md",
            "---\ntitle: t\nsubtitle: s\nimage: i\ndate: someday\n---\n",
        );
        let err = Collection::load(&fs, Path::new("blog")).unwrap_err();
        match err {
            FolioError::InvalidDate { value, .. } => assert_eq!(value, "someday"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_directory() {
        let fs = MockFileSystem::new().with_dir("blog");
        let collection = Collection::load(&fs, Path::new("blog")).unwrap();
        assert!(collection.records().is_empty());
        assert!(collection.all_tags().is_empty());
    }

    #[test]
    fn test_missing_directory_is_error() {
        let fs = MockFileSystem::new().with_file("other/a.md", POST);
        let err = Collection::load(&fs, Path::new("blog")).unwrap_err();
        assert!(matches!(err, FolioError::FileRead { .. }));
    }

    #[test]
    fn test_draft_hidden_from_slug_lookup() {
        let draft = POST.replace("tags: [rust, web]", "draft: true");
        let fs = MockFileSystem::new().with_file("blog/secret.md", &draft);
        let collection = Collection::load(&fs, Path::new("blog")).unwrap();

        assert_eq!(collection.records().len(), 1);
        assert!(collection.post_by_slug("secret").is_none());
        assert!(collection.all_posts().is_empty());
    }
}
