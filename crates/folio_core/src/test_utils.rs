//! Test utilities for folio_core
//!
//! Provides an in-memory filesystem so collection loading can be tested
//! without touching disk.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::fs::FileSystem;

const DIR_MARKER: &str = "<DIR>";

/// A mock filesystem for testing.
///
/// Clones share the same underlying storage, so a test can hand one clone to
/// the code under test and inspect results through another.
#[derive(Clone, Default)]
pub struct MockFileSystem {
    files: Arc<Mutex<BTreeMap<PathBuf, String>>>,
}

impl MockFileSystem {
    /// Create a new empty mock filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file (builder pattern).
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.files
            .lock()
            .unwrap()
            .insert(PathBuf::from(path), content.to_string());
        self
    }

    /// Add a directory (builder pattern).
    pub fn with_dir(self, path: &str) -> Self {
        self.files
            .lock()
            .unwrap()
            .insert(PathBuf::from(path), DIR_MARKER.to_string());
        self
    }

    /// Get the content of a file (for test assertions).
    pub fn get_content(&self, path: &str) -> Option<String> {
        self.files.lock().unwrap().get(Path::new(path)).cloned()
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        match self.files.lock().unwrap().get(path) {
            Some(content) if content == DIR_MARKER => Err(io::Error::new(
                io::ErrorKind::IsADirectory,
                "Is a directory",
            )),
            Some(content) => Ok(content.clone()),
            None => Err(io::Error::new(io::ErrorKind::NotFound, "File not found")),
        }
    }

    fn write_file(&self, path: &Path, content: &str) -> io::Result<()> {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn is_dir(&self, path: &Path) -> bool {
        let files = self.files.lock().unwrap();
        match files.get(path) {
            Some(content) => content == DIR_MARKER,
            None => files.keys().any(|p| p.parent() == Some(path)),
        }
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        self.files
            .lock()
            .unwrap()
            .entry(path.to_path_buf())
            .or_insert_with(|| DIR_MARKER.to_string());
        Ok(())
    }

    fn list_md_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        let files = self.files.lock().unwrap();
        // BTreeMap keys are already sorted
        Ok(files
            .iter()
            .filter(|(path, content)| {
                path.parent() == Some(dir)
                    && path.extension().is_some_and(|ext| ext == "md")
                    && content.as_str() != DIR_MARKER
            })
            .map(|(path, _)| path.clone())
            .collect())
    }
}
