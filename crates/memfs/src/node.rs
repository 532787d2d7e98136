// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::dir::Directory;
use crate::error::{Error, Result};
use crate::file::MemoryFile;
use crate::fs::FS;
use crate::kind::NodeKind;

/// The tree root. Not addressable by any non-empty path.
pub const ROOT_ID: NodeID = NodeID(0);

/// Unique identifier for a node in the filesystem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeID(usize);

impl std::fmt::Display for NodeID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04X}", self.0)
    }
}

impl NodeID {
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    /// Next id from a process-wide counter.
    ///
    /// Ids are never reused, not even by a freshly reset `FS`, so an id held
    /// from an earlier tree can never alias a node of a later one.
    pub fn new_sequential() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(1); // 0 is reserved for root
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    pub fn is_root(self) -> bool {
        self == ROOT_ID
    }
}

/// Kind-specific payload of a node
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum NodeType {
    Directory(Directory),
    File(MemoryFile),
}

/// A node stored in the `FS` arena.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) name: String,
    pub(crate) kind: NodeKind,
    /// Non-owning back reference; `ROOT_ID` for drives.
    pub(crate) parent: NodeID,
    pub(crate) node_type: NodeType,
}

impl Node {
    pub(crate) fn new(name: String, kind: NodeKind, parent: NodeID) -> Self {
        let node_type = if kind.is_container() {
            NodeType::Directory(Directory::new())
        } else {
            NodeType::File(MemoryFile::new())
        };
        Self {
            name,
            kind,
            parent,
            node_type,
        }
    }

    pub(crate) fn as_dir(&self) -> Option<&Directory> {
        match &self.node_type {
            NodeType::Directory(d) => Some(d),
            NodeType::File(_) => None,
        }
    }

    pub(crate) fn as_dir_mut(&mut self) -> Option<&mut Directory> {
        match &mut self.node_type {
            NodeType::Directory(d) => Some(d),
            NodeType::File(_) => None,
        }
    }

    pub(crate) fn as_file(&self) -> Option<&MemoryFile> {
        match &self.node_type {
            NodeType::File(f) => Some(f),
            NodeType::Directory(_) => None,
        }
    }

    pub(crate) fn as_file_mut(&mut self) -> Option<&mut MemoryFile> {
        match &mut self.node_type {
            NodeType::File(f) => Some(f),
            NodeType::Directory(_) => None,
        }
    }
}

/// Read-only view of a live node, borrowed from its `FS`.
///
/// Obtained from [`FS::node`], which fails for ids that are no longer part
/// of the tree.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    fs: &'a FS,
    id: NodeID,
    node: &'a Node,
}

impl<'a> NodeRef<'a> {
    pub(crate) fn new(fs: &'a FS, id: NodeID, node: &'a Node) -> Self {
        Self { fs, id, node }
    }

    pub fn id(&self) -> NodeID {
        self.id
    }

    pub fn name(&self) -> &'a str {
        &self.node.name
    }

    pub fn kind(&self) -> NodeKind {
        self.node.kind
    }

    /// Parent id; `ROOT_ID` for drives.
    pub fn parent(&self) -> NodeID {
        self.node.parent
    }

    /// Full path from the owning drive down to this node.
    pub fn path(&self) -> Result<String> {
        self.fs.path_of(self.id)
    }

    /// Recursive size: content length for files, the children's sum for
    /// drives and folders, and half that sum rounded up for zips.
    pub fn size(&self) -> u64 {
        self.fs.node_size(self.node)
    }

    /// Stored bytes of a file; `None` for containers and unwritten files.
    pub fn content(&self) -> Option<&'a [u8]> {
        self.node.as_file().and_then(MemoryFile::content)
    }

    /// Child lookup by name. Files cannot contain other items, so asking a
    /// file for a child is an error rather than a miss.
    pub fn get(&self, name: &str) -> Result<Option<NodeID>> {
        match self.node.as_dir() {
            Some(dir) => Ok(dir.get(name)),
            None => Err(Error::illegal(format!(
                "file objects cannot contain other items: {}",
                self.node.name
            ))),
        }
    }

    /// Children in name order; empty for files.
    pub fn children(&self) -> Vec<(&'a str, NodeID)> {
        self.node
            .as_dir()
            .map(|dir| dir.iter().collect())
            .unwrap_or_default()
    }
}

impl std::fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("name", &self.node.name)
            .field("kind", &self.node.kind)
            .finish()
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.fs, other.fs) && self.id == other.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids_are_unique() {
        let a = NodeID::new_sequential();
        let b = NodeID::new_sequential();
        assert_ne!(a, b);
        assert!(!a.is_root());
        assert!(ROOT_ID.is_root());
    }

    #[test]
    fn test_display() {
        assert_eq!(NodeID::new(0x2a).to_string(), "002A");
    }

    #[test]
    fn test_node_payload_follows_kind() {
        let file = Node::new("f".into(), NodeKind::File, ROOT_ID);
        assert!(file.as_file().is_some());
        assert!(file.as_dir().is_none());

        for kind in [NodeKind::Drive, NodeKind::Folder, NodeKind::Zip] {
            let node = Node::new("c".into(), kind, ROOT_ID);
            assert!(node.as_dir().is_some());
            assert!(node.as_file().is_none());
        }
    }
}
