//! Shared utilities for CLI commands

use std::path::{Path, PathBuf};

use folio_core::collection::Collection;
use folio_core::config::Config;
use folio_core::error::Result;
use folio_core::fs::RealFileSystem;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Load config from `path` if given, otherwise from the default location.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    Ok(config)
}

/// Load the blog collection from `dir`, falling back to the configured directory.
pub fn load_collection(config: &Config, dir: Option<PathBuf>) -> Result<Collection> {
    let dir = dir.unwrap_or_else(|| config.content_dir.clone());
    log::debug!("Content directory: {}", dir.display());
    Collection::load(&RealFileSystem, &dir)
}

/// A seeded RNG when `seed` is given, an entropy-seeded one otherwise.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
