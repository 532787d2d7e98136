// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! An in-memory hierarchical filesystem.
//!
//! The tree is a forest of drives; drives, folders and zips contain other
//! objects, files hold bytes. Objects are addressed by paths whose segments
//! are joined with a backslash, e.g. `Drive1\Folder1\File1`.
//!
//! ```
//! use memfs::{FS, NodeKind};
//!
//! let mut fs = FS::new();
//! fs.create(NodeKind::Drive, "D", "").unwrap();
//! fs.create("zip", "Z", "D").unwrap();
//! fs.create("file", "X", "D\\Z").unwrap();
//! fs.write_to_file("D\\Z\\X", "hello").unwrap();
//!
//! // Zips report half their contents' size, rounded up
//! assert_eq!(fs.size("D\\Z").unwrap(), 3);
//! assert_eq!(fs.size("D").unwrap(), 3);
//! ```

mod dir;
mod error;
mod file;
mod fs;
mod kind;
mod node;
pub mod path;
mod shared;
pub(crate) mod tree_format;

#[cfg(test)]
mod tests;

pub use dir::Directory;
pub use error::{Error, Result};
pub use file::MemoryFile;
pub use fs::FS;
pub use kind::NodeKind;
pub use node::{NodeID, NodeRef, ROOT_ID};
pub use shared::SharedFS;
