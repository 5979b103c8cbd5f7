mod repository_filesystem;

pub use repository_filesystem::{Removal, RepositoryFilesystem};
