use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Minimal filesystem surface the collection loader and CLI need.
///
/// Implemented by [`RealFileSystem`] for disk access and by
/// [`crate::test_utils::MockFileSystem`] for tests.
pub trait FileSystem {
    /// Read a whole file as UTF-8
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Write a file, replacing any existing content
    fn write_file(&self, path: &Path, content: &str) -> io::Result<()>;

    /// Whether `path` is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Create a directory and all its parents
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// List `.md` files directly inside `dir`, sorted by path
    fn list_md_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>>;
}

/// [`FileSystem`] backed by `std::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn write_file(&self, path: &Path, content: &str) -> io::Result<()> {
        fs::write(path, content)
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn list_md_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "md") {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}
