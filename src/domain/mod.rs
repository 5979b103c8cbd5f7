pub mod error;
pub mod targets;

pub use error::AppError;
pub use targets::{CleanTargets, DEFAULT_DIRECTORY_TARGETS, DEFAULT_FILE_TARGETS, TargetPath};
