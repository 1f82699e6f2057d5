use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

/// File system abstraction for resource resolution and testing
pub trait FileSystem {
    /// Read the raw bytes of a file
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// Real file system implementation
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }
}

/// Mock file system for testing
///
/// Counts every read issued through it, so tests can assert that a
/// lazily-loaded consumer touches the backing file exactly once.
pub struct MockFileSystem {
    files: HashMap<PathBuf, Vec<u8>>,
    broken: HashSet<PathBuf>,
    reads: AtomicUsize,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self {
            files: HashMap::new(),
            broken: HashSet::new(),
            reads: AtomicUsize::new(0),
        }
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) {
        self.files.insert(path.into(), contents.into());
    }

    /// Register a path whose reads fail with an injected I/O error.
    pub fn add_broken_file(&mut self, path: impl Into<PathBuf>) {
        self.broken.insert(path.into());
    }

    /// Number of reads issued through this file system so far.
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::Relaxed)
    }
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFileSystem {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.reads.fetch_add(1, Ordering::Relaxed);
        if self.broken.contains(path) {
            return Err(io::Error::other("injected read failure"));
        }
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file: {}", path.display()),
            )
        })
    }
}
