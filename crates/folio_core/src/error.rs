use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised at the I/O boundary of the crate.
///
/// The text utilities and the timeline are total functions and never fail;
/// only reading posts, writing output and loading config can.
#[derive(Debug, Error)]
pub enum FolioError {
    /// A file could not be read
    #[error("Failed to read '{path}': {source}")]
    FileRead {
        /// The file that failed
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A file could not be written
    #[error("Failed to write '{path}': {source}")]
    FileWrite {
        /// The file that failed
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A post has no `---` delimited frontmatter block
    #[error("No frontmatter found in '{0}'")]
    NoFrontmatter(PathBuf),

    /// The frontmatter is not valid YAML or does not match the post schema
    #[error("Invalid frontmatter in '{path}': {source}")]
    Frontmatter {
        /// The post that failed
        path: PathBuf,
        /// YAML error
        source: serde_yaml::Error,
    },

    /// The `date` field could not be parsed
    #[error("Invalid date '{value}' in '{path}'")]
    InvalidDate {
        /// The post that failed
        path: PathBuf,
        /// The raw value
        value: String,
    },

    /// Configuration could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, FolioError>;
