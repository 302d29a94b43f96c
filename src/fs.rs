//! Filesystem collaborator.
//!
//! The content resolver consumes the filesystem through this trait so the
//! decision tree can be exercised without touching a real disk.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

pub trait FileSystem: Send + Sync {
    /// Turns a separator-translated request path into an absolute path
    /// under the configured root. No normalization is applied: `..`
    /// segments pass through unchanged.
    fn resolve_absolute(&self, relative: &str) -> io::Result<PathBuf>;

    /// True when the path names an existing file or directory.
    fn path_exists(&self, path: &Path) -> bool;

    fn is_directory(&self, path: &Path) -> bool;

    /// Immediate children only: (subdirectory names, file names), each
    /// sorted by name.
    fn list_directory(&self, path: &Path) -> io::Result<(Vec<String>, Vec<String>)>;

    fn read_all_bytes(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// The real filesystem, rooted at a configured directory.
#[derive(Debug, Clone)]
pub struct LocalFs {
    root: PathBuf,
}

impl LocalFs {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn absolute_root(&self) -> io::Result<PathBuf> {
        if self.root.is_absolute() {
            Ok(self.root.clone())
        } else {
            Ok(std::env::current_dir()?.join(&self.root))
        }
    }
}

impl FileSystem for LocalFs {
    fn resolve_absolute(&self, relative: &str) -> io::Result<PathBuf> {
        // String-level concatenation: the request path already starts with
        // the platform separator, and `..` must survive untouched.
        let mut joined = OsString::from(self.absolute_root()?);
        joined.push(relative);
        Ok(PathBuf::from(joined))
    }

    fn path_exists(&self, path: &Path) -> bool {
        path.is_file() || path.is_dir()
    }

    fn is_directory(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_directory(&self, path: &Path) -> io::Result<(Vec<String>, Vec<String>)> {
        let mut directories = Vec::new();
        let mut files = Vec::new();

        for entry in std::fs::read_dir(path)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if entry.file_type()?.is_dir() {
                directories.push(name);
            } else {
                files.push(name);
            }
        }

        directories.sort();
        files.sort();

        Ok((directories, files))
    }

    fn read_all_bytes(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }
}
