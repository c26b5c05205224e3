//! File access for the include resolver.

use std::{
    collections::HashMap,
    fs, io,
    path::{Component, Path, PathBuf},
};

/// Where included sources come from. The resolver performs no I/O of its own.
pub trait SourceLoader {
    fn exists(&self, path: &Path) -> bool;

    fn read(&self, path: &Path) -> io::Result<String>;

    /// Stable identity for `path`, used for cycle detection and as the file
    /// name in source locations. Must not fail; fall back to a lexical form.
    fn canonicalize(&self, path: &Path) -> PathBuf;
}

/// Reads from the real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsLoader;

impl SourceLoader for FsLoader {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn canonicalize(&self, path: &Path) -> PathBuf {
        fs::canonicalize(path).unwrap_or_else(|_| {
            let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
            lexical_normalize(&absolute)
        })
    }
}

/// In-memory file table keyed by normalized path.
#[derive(Debug, Default, Clone)]
pub struct MemoryLoader {
    files: HashMap<PathBuf, String>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl AsRef<Path>, text: impl Into<String>) -> Self {
        self.insert(path, text);
        self
    }

    pub fn insert(&mut self, path: impl AsRef<Path>, text: impl Into<String>) {
        self.files
            .insert(lexical_normalize(path.as_ref()), text.into());
    }
}

impl SourceLoader for MemoryLoader {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(&lexical_normalize(path))
    }

    fn read(&self, path: &Path) -> io::Result<String> {
        self.files
            .get(&lexical_normalize(path))
            .cloned()
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("{} is not loaded", path.display()),
                )
            })
    }

    fn canonicalize(&self, path: &Path) -> PathBuf {
        lexical_normalize(path)
    }
}

/// Removes `.` components and folds `..` into its parent without touching the
/// filesystem. A `..` that would climb above the root is dropped.
pub fn lexical_normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
