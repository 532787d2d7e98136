// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Represents errors that can occur in filesystem operations.
///
/// Every failing operation returns one of these before touching the tree,
/// so an `Err` always means nothing changed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Path not found: {0}")]
    PathNotFound(String),

    #[error("Path already exists: {0}")]
    PathAlreadyExists(String),

    /// Structurally forbidden action; carries the reason.
    #[error("Illegal operation: {0}")]
    IllegalOperation(String),

    #[error("Not a file, cannot write: {0}")]
    InvalidWrite(String),
}

impl Error {
    pub fn not_found<S: AsRef<str>>(path: S) -> Self {
        Error::PathNotFound(path.as_ref().to_string())
    }

    pub fn already_exists<S: AsRef<str>>(path: S) -> Self {
        Error::PathAlreadyExists(path.as_ref().to_string())
    }

    pub fn illegal<S: Into<String>>(reason: S) -> Self {
        Error::IllegalOperation(reason.into())
    }

    pub fn invalid_write<S: AsRef<str>>(path: S) -> Self {
        Error::InvalidWrite(path.as_ref().to_string())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::PathNotFound(_))
    }

    pub fn is_already_exists(&self) -> bool {
        matches!(self, Error::PathAlreadyExists(_))
    }

    pub fn is_illegal(&self) -> bool {
        matches!(self, Error::IllegalOperation(_))
    }
}

// Lets `NodeKind` itself satisfy the `TryInto<NodeKind>` bounds on `FS::create`.
impl From<std::convert::Infallible> for Error {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}
