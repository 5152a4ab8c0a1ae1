//! # `folio_core`
//!
//! Shared code behind the folio portfolio site and its command-line tool.
//!
//! The crate holds two independent groups of logic:
//! 1. The career timeline (`timeline`): bar weights and period lookup for a selected year.
//! 2. Blog content (`content`, `collection`, `feed`): reading time, excerpts,
//!    published filtering, tag indexes and the RSS feed.
//!
//! Posts are markdown files with YAML frontmatter, loaded through the
//! [`fs::FileSystem`] seam so the same code runs against disk or memory.

#![warn(missing_docs)]

/// Decorative animation state (background shapes, name highlighting)
pub mod animation;

/// Loading and querying the blog collection
pub mod collection;

/// Site configuration
pub mod config;

/// Post-level text utilities
pub mod content;

/// Date parsing and formatting
pub mod date;

/// Error types
pub mod error;

/// RSS feed generation
pub mod feed;

/// Markdown frontmatter parsing
pub mod frontmatter;

/// Filesystem abstraction
pub mod fs;

pub mod icons;
pub mod image;

/// In-memory filesystem for tests
pub mod test_utils;

/// Career timeline
pub mod timeline;
