//! `RepositoryFilesystem` implementation for `FilesystemStore`.

use std::fs;
use std::io;
use std::path::Path;

use crate::domain::AppError;
use crate::ports::{Removal, RepositoryFilesystem};

use super::FilesystemStore;

impl RepositoryFilesystem for FilesystemStore {
    fn remove_dir_all(&self, path: &str) -> Result<Removal, AppError> {
        self.validate_removal_target(Path::new(path))?;
        let full_path = self.resolve(path);

        // symlink_metadata so a link to a directory is reported, not followed.
        let metadata = match fs::symlink_metadata(&full_path) {
            Ok(metadata) => metadata,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Removal::Absent),
            Err(err) => return Err(AppError::from(err)),
        };
        if !metadata.is_dir() {
            return Err(AppError::NotADirectory(path.to_string()));
        }

        absent_if_not_found(fs::remove_dir_all(full_path))
    }

    fn remove_file(&self, path: &str) -> Result<Removal, AppError> {
        self.validate_removal_target(Path::new(path))?;
        let full_path = self.resolve(path);
        absent_if_not_found(fs::remove_file(full_path))
    }
}

fn absent_if_not_found(result: io::Result<()>) -> Result<Removal, AppError> {
    match result {
        Ok(()) => Ok(Removal::Removed),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Removal::Absent),
        Err(err) => Err(AppError::from(err)),
    }
}
