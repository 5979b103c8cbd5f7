//! Repository-level removal operations.
//!
//! This port provides the two removal primitives the cleaner needs, scoped to
//! a root directory. It does not decide which paths are targets; that belongs
//! to the domain target lists.

use crate::domain::AppError;

/// Successful outcome of a single removal call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    /// The target existed and is now gone.
    Removed,
    /// Nothing existed at the target path.
    Absent,
}

/// Port for removing repository paths.
///
/// All `path` arguments are relative to the repository root.
/// Implementations must reject paths that escape the root or name the root itself.
pub trait RepositoryFilesystem {
    /// Remove a directory and all its contents. Symlinks inside the tree are
    /// removed, never followed.
    fn remove_dir_all(&self, path: &str) -> Result<Removal, AppError>;

    /// Remove a single file (or symlink).
    fn remove_file(&self, path: &str) -> Result<Removal, AppError>;
}
