//! Removal targets and the compiled-in target lists.

use std::fmt;

/// Directories left behind by building and installing the project.
pub const DEFAULT_DIRECTORY_TARGETS: &[&str] = &[
    "build",
    "cbuild",
    "dist",
    "openql.egg-info",
    "swig/qutechtools.egg-info",
    "swig/openql.egg-info",
];

/// Single files left behind by building and installing the project.
///
/// The lone entry is blank and is skipped at removal time.
pub const DEFAULT_FILE_TARGETS: &[&str] = &[""];

/// A filesystem location, relative to the cleaning root, that should be removed.
///
/// Unlike the validated identifiers elsewhere in the crate, any string is accepted.
/// Unusable paths surface as removal failures, which the cleaner absorbs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetPath(String);

impl TargetPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for empty or whitespace-only paths.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for TargetPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TargetPath {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TargetPath {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// The two target lists handed to the cleaner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanTargets {
    directories: Vec<TargetPath>,
    files: Vec<TargetPath>,
}

impl CleanTargets {
    pub fn new<D, F>(directories: D, files: F) -> Self
    where
        D: IntoIterator,
        D::Item: Into<TargetPath>,
        F: IntoIterator,
        F::Item: Into<TargetPath>,
    {
        Self {
            directories: directories.into_iter().map(Into::into).collect(),
            files: files.into_iter().map(Into::into).collect(),
        }
    }

    /// Directory trees to remove, in processing order.
    pub fn directories(&self) -> &[TargetPath] {
        &self.directories
    }

    /// Single files to remove, in processing order.
    pub fn files(&self) -> &[TargetPath] {
        &self.files
    }
}

impl Default for CleanTargets {
    fn default() -> Self {
        Self::new(DEFAULT_DIRECTORY_TARGETS.iter().copied(), DEFAULT_FILE_TARGETS.iter().copied())
    }
}
