//! cleanme: Remove build and install artifacts to restore a repository to a clean state.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


use std::path::Path;

use adapters::FilesystemStore;
use app::commands::clean as clean_command;

pub use domain::{AppError, CleanTargets, TargetPath};

/// Remove the default targets from the current directory.
///
/// Fails only when the current directory cannot be determined. Individual
/// removal failures are absorbed.
pub fn clean() -> Result<(), AppError> {
    let store = FilesystemStore::current()?;
    clean_command::execute(&store, &CleanTargets::default());
    Ok(())
}

/// Remove the default targets from `root`.
pub fn clean_in(root: &Path) -> Result<(), AppError> {
    clean_with(root, &CleanTargets::default())
}

/// Remove a caller-supplied set of targets from `root`.
///
/// A relative `root` is resolved against the current directory first; that
/// resolution is the only failure surfaced.
pub fn clean_with(root: &Path, targets: &CleanTargets) -> Result<(), AppError> {
    let store = FilesystemStore::new(root)?;
    clean_command::execute(&store, targets);
    Ok(())
}
