use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::feed::FeedOptions;
use crate::timeline::TimelineConfig;

/// Site configuration, read from `config.toml`.
///
/// Every field has a default, so a partial file (or no file) is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the blog's markdown posts
    pub content_dir: PathBuf,

    /// Absolute site URL, without the base path
    pub site: String,

    /// Base path the site is served under
    pub base: String,

    /// Site title, used as the feed title
    pub title: String,

    /// Site description, used as the feed description
    pub description: String,

    /// Feed language tag
    pub language: String,

    /// XSL stylesheet referenced by the feed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stylesheet: Option<String>,

    /// Author written on feed items
    pub author: String,

    /// Name shown in the animated header
    pub name: String,

    /// Career timeline
    pub timeline: TimelineConfig,
}

impl Default for Config {
    fn default() -> Self {
        let feed = FeedOptions::default();
        Self {
            content_dir: PathBuf::from("src/content/blog"),
            site: feed.site,
            base: "/about".to_string(),
            title: feed.title,
            description: feed.description,
            language: feed.language,
            stylesheet: feed.stylesheet,
            author: feed.author,
            name: "Igferal".to_string(),
            timeline: TimelineConfig::default(),
        }
    }
}

impl Config {
    /// Get the default config file path (~/.config/folio/config.toml)
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("folio").join("config.toml"))
    }

    /// Load config from the default location, or defaults if there is no file
    pub fn load() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Config::default()),
        }
    }

    /// Load config from an explicit file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        log::debug!("Loading config from {}", path.display());
        let contents = fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save config to an explicit file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Site-relative URL of a page under the configured base path,
    /// e.g. `/blog/hello/` -> `/about/blog/hello/`.
    pub fn page_path(&self, path: &str) -> String {
        let base = self.base.trim_end_matches('/');
        if base.is_empty() {
            return path.to_string();
        }
        format!("{}/{}", base, path.trim_start_matches('/'))
    }

    /// Feed settings derived from this config
    pub fn feed_options(&self) -> FeedOptions {
        FeedOptions {
            title: self.title.clone(),
            description: self.description.clone(),
            site: self.site.clone(),
            language: self.language.clone(),
            stylesheet: self.stylesheet.clone(),
            author: self.author.clone(),
            full_content: false,
        }
    }
}

/// Errors loading or saving [`Config`]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading or writing the file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not valid TOML or has wrongly typed fields
    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// The config could not be serialized
    #[error("Config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// No per-user config directory on this platform
    #[error("Could not determine config directory")]
    NoConfigDir,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::Category;

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = toml::from_str("title = \"My Blog\"\n").unwrap();
        assert_eq!(config.title, "My Blog");
        assert_eq!(config.language, "en-us");
        assert_eq!(config.timeline, TimelineConfig::default());
    }

    #[test]
    fn test_timeline_table() {
        let toml_src = r#"
[timeline]
start_year = 2010
end_year = 2012
initial_year = 2011

[[timeline.periods]]
id = "uni"
start_year = 2010
end_year = 2012
title = "Student"
organization = "University"
category = "education"
technologies = ["C"]
"#;
        let config: Config = toml::from_str(toml_src).unwrap();
        assert_eq!(config.timeline.start_year, 2010);
        assert_eq!(config.timeline.periods.len(), 1);
        assert_eq!(config.timeline.periods[0].category, Category::Education);
        assert!(config.timeline.periods[0].description.is_empty());
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config {
            site: "https://example.org".to_string(),
            ..Config::default()
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "title = [").unwrap();
        assert!(matches!(Config::load_from(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_page_path_prefixes_base() {
        let config = Config::default();
        assert_eq!(config.page_path("/blog/hello/"), "/about/blog/hello/");

        let trailing = Config {
            base: "/about/".to_string(),
            ..Config::default()
        };
        assert_eq!(trailing.page_path("/blog/hello/"), "/about/blog/hello/");

        for root in ["", "/"] {
            let config = Config {
                base: root.to_string(),
                ..Config::default()
            };
            assert_eq!(config.page_path("/blog/hello/"), "/blog/hello/");
        }
    }

    #[test]
    fn test_feed_options() {
        let options = Config::default().feed_options();
        assert_eq!(options.stylesheet.as_deref(), Some("/rss/styles.xsl"));
        assert!(!options.full_content);
    }
}
