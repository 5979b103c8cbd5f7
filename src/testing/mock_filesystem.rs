//! Test double for `RepositoryFilesystem`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::io;

use crate::domain::AppError;
use crate::ports::{Removal, RepositoryFilesystem};

/// A removal call observed by the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsCall {
    RemoveDirAll(String),
    RemoveFile(String),
}

/// Recording implementation of `RepositoryFilesystem` for unit tests.
///
/// Every call succeeds with `Removal::Absent` unless a failure was registered for its path.
#[derive(Default)]
pub struct MockFilesystem {
    calls: RefCell<Vec<FsCall>>,
    failures: RefCell<HashMap<String, io::ErrorKind>>,
}

impl MockFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_on(&self, path: &str, kind: io::ErrorKind) {
        self.failures.borrow_mut().insert(path.to_string(), kind);
    }

    pub fn calls(&self) -> Vec<FsCall> {
        self.calls.borrow().clone()
    }

    fn outcome(&self, path: &str) -> Result<Removal, AppError> {
        match self.failures.borrow().get(path) {
            Some(kind) => Err(AppError::from(io::Error::new(*kind, "Mock removal error"))),
            None => Ok(Removal::Absent),
        }
    }
}

impl RepositoryFilesystem for MockFilesystem {
    fn remove_dir_all(&self, path: &str) -> Result<Removal, AppError> {
        self.calls.borrow_mut().push(FsCall::RemoveDirAll(path.to_string()));
        self.outcome(path)
    }

    fn remove_file(&self, path: &str) -> Result<Removal, AppError> {
        self.calls.borrow_mut().push(FsCall::RemoveFile(path.to_string()));
        self.outcome(path)
    }
}
