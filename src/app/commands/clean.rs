//! Best-effort removal of the configured build artifacts.
//!
//! Each target is attempted exactly once. A failure on one target is logged at
//! debug level and dropped, so it can never stop later targets from running.

use tracing::debug;

use crate::domain::{AppError, CleanTargets, TargetPath};
use crate::ports::{Removal, RepositoryFilesystem};

/// Remove every directory and file target under the store's root.
pub fn execute(fs: &impl RepositoryFilesystem, targets: &CleanTargets) {
    remove_directories(fs, targets.directories());
    remove_files(fs, targets.files());
}

/// Recursively remove each directory tree, ignoring any failure.
pub fn remove_directories(fs: &impl RepositoryFilesystem, paths: &[TargetPath]) {
    for path in paths {
        attempt(path, "directory", |p| fs.remove_dir_all(p));
    }
}

/// Remove each single file, ignoring any failure.
pub fn remove_files(fs: &impl RepositoryFilesystem, paths: &[TargetPath]) {
    for path in paths {
        attempt(path, "file", |p| fs.remove_file(p));
    }
}

fn attempt<F>(path: &TargetPath, kind: &str, remove: F)
where
    F: FnOnce(&str) -> Result<Removal, AppError>,
{
    if path.is_blank() {
        debug!(kind, "skipping blank target");
        return;
    }

    match remove(path.as_str()) {
        Ok(Removal::Removed) => debug!(path = %path, kind, "removed"),
        Ok(Removal::Absent) => debug!(path = %path, kind, "not present"),
        Err(error) => debug!(path = %path, kind, %error, "skipped"),
    }
}
