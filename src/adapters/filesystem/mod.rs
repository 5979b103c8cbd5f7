//! Filesystem adapter for the removal port.
//!
//! `FilesystemStore` owns the cleaning root and enforces that every removal
//! stays strictly inside it.

mod repository_filesystem;

use std::path::{Component, Path, PathBuf};

use crate::domain::AppError;

/// Filesystem-backed store rooted at a repository directory.
///
/// The root is held as an absolute path so containment checks never compare
/// against `.` or a leading `..`.
#[derive(Debug, Clone)]
pub struct FilesystemStore {
    root: PathBuf,
}

impl FilesystemStore {
    /// Create a store rooted at `root`, resolved against the current directory when relative.
    pub fn new(root: impl AsRef<Path>) -> Result<Self, AppError> {
        let root = std::path::absolute(root.as_ref())?;
        Ok(Self { root: lexical_normalize(&root) })
    }

    /// Create a store rooted at the current working directory.
    pub fn current() -> Result<Self, AppError> {
        Self::new(std::env::current_dir()?)
    }

    /// Join a target onto the root. Containment is checked separately.
    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }

    /// Accept only paths that land strictly below the root once `.` and `..` are folded.
    pub(crate) fn validate_removal_target(&self, path: &Path) -> Result<(), AppError> {
        let candidate = lexical_normalize(&self.root.join(path));

        if !candidate.starts_with(&self.root) {
            return Err(AppError::PathTraversal(path.display().to_string()));
        }
        if candidate == self.root {
            return Err(AppError::RootTarget(path.display().to_string()));
        }
        Ok(())
    }
}

/// Fold `.` and `..` without touching the filesystem.
///
/// A `..` that cannot pop is kept on relative paths and dropped at a root,
/// matching how the OS resolves `/..`.
pub(crate) fn lexical_normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let can_pop = matches!(out.components().next_back(), Some(Component::Normal(_)));
                if can_pop {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
