// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;

use diagnostics::debug;

use crate::dir::Directory;
use crate::error::{Error, Result};
use crate::kind::NodeKind;
use crate::node::{Node, NodeID, NodeRef, ROOT_ID};
use crate::path;
use crate::tree_format::TreeNode;

/// In-memory filesystem: a forest of drives under an unnamed root.
///
/// All nodes live in an arena keyed by [`NodeID`]. Children are owned through
/// their parent's [`Directory`]; the parent link stored on each node is only
/// used to derive paths.
///
/// Not thread-safe: every mutation takes `&mut self`. Wrap it in
/// [`crate::SharedFS`] to share one tree between threads.
#[derive(Debug, Default)]
pub struct FS {
    root: Directory,
    nodes: HashMap<NodeID, Node>,
}

impl FS {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards every node. Ids handed out before the reset are detached
    /// afterwards.
    pub fn reset(&mut self) {
        let dropped = self.nodes.len();
        *self = FS::new();
        debug!("reset filesystem, dropped {dropped} nodes", dropped: dropped);
    }

    /// Number of live nodes, not counting the root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns a view of a live node.
    pub fn node(&self, id: NodeID) -> Result<NodeRef<'_>> {
        self.nodes
            .get(&id)
            .map(|node| NodeRef::new(self, id, node))
            .ok_or_else(|| detached(id))
    }

    /// Resolves a path from the root. The empty path resolves to `ROOT_ID`.
    ///
    /// Each segment is looked up in the current container; a missing name or
    /// a file with segments left to consume ends resolution with `None`.
    pub fn lookup(&self, path: &str) -> Option<NodeID> {
        if path.is_empty() {
            return Some(ROOT_ID);
        }
        let segments = path::segments(path)?;
        let mut current = ROOT_ID;
        for name in segments {
            let Some(dir) = self.directory(current) else {
                debug!("lookup: {path} passes through a file", path: path);
                return None;
            };
            match dir.get(name) {
                Some(child) => current = child,
                None => {
                    debug!("lookup: {name} not found in {path}", name: name, path: path);
                    return None;
                }
            }
        }
        Some(current)
    }

    pub fn exists(&self, path: &str) -> bool {
        self.lookup(path).is_some()
    }

    /// Derived path of a node; the root's path is empty.
    pub fn path_of(&self, id: NodeID) -> Result<String> {
        if id.is_root() {
            return Ok(String::new());
        }
        let mut names = Vec::new();
        let mut current = id;
        while !current.is_root() {
            let node = self.nodes.get(&current).ok_or_else(|| detached(id))?;
            names.push(node.name.as_str());
            current = node.parent;
        }
        names.reverse();
        Ok(names.join(&path::DELIMITER.to_string()))
    }

    /// Size of the node at `path`; the empty path measures every drive.
    pub fn size(&self, path: &str) -> Result<u64> {
        let id = self.lookup(path).ok_or_else(|| Error::not_found(path))?;
        self.size_of(id)
    }

    pub fn size_of(&self, id: NodeID) -> Result<u64> {
        if id.is_root() {
            return Ok(self.sum_sizes(&self.root));
        }
        Ok(self.node(id)?.size())
    }

    /// Content of the file at `path`, `None` if nothing was written yet.
    pub fn read_file(&self, path: &str) -> Result<Option<Vec<u8>>> {
        let id = self.resolve_target(path)?;
        let node = self.node(id)?;
        if node.kind() != NodeKind::File {
            return Err(Error::illegal(format!("cannot read {path}: not a file")));
        }
        Ok(node.content().map(<[u8]>::to_vec))
    }

    /// Creates an object named `name` inside the container at `parent_path`.
    ///
    /// Drives go at the root (empty `parent_path`) and nowhere else; every
    /// other kind needs an existing drive, folder or zip as parent.
    pub fn create<K>(&mut self, kind: K, name: &str, parent_path: &str) -> Result<NodeID>
    where
        K: TryInto<NodeKind>,
        Error: From<K::Error>,
    {
        path::validate_name(name)?;
        let new_path = path::join(parent_path, name);
        if self.exists(&new_path) {
            return Err(Error::already_exists(&new_path));
        }

        let kind: NodeKind = kind.try_into()?;
        if kind == NodeKind::Drive && !parent_path.is_empty() {
            return Err(Error::illegal(
                "drives may only be created at the root of the file system",
            ));
        }
        if kind != NodeKind::Drive && parent_path.is_empty() {
            return Err(Error::illegal(
                "only drives may be created at the root of the file system",
            ));
        }

        let parent = if parent_path.is_empty() {
            ROOT_ID
        } else {
            self.lookup(parent_path)
                .ok_or_else(|| Error::not_found(parent_path))?
        };
        if self.directory(parent).is_none() {
            return Err(Error::illegal(format!(
                "files cannot contain other objects: {parent_path}"
            )));
        }

        let id = NodeID::new_sequential();
        self.link(id, Node::new(name.to_string(), kind, parent))?;

        debug!("created {kind} {path}", kind: kind.as_str(), path: new_path.as_str());
        Ok(id)
    }

    /// Deletes the object at `path` together with everything below it.
    pub fn delete(&mut self, path: &str) -> Result<()> {
        let id = self.resolve_target(path)?;
        let (parent, name) = {
            let node = self.node(id)?;
            (node.parent(), node.name().to_string())
        };

        let removed = self.subtree(id);
        if let Some(dir) = self.directory_mut(parent) {
            _ = dir.remove(&name);
        }
        for node_id in &removed {
            _ = self.nodes.remove(node_id);
        }

        debug!("deleted {path} ({count} nodes)", path: path, count: removed.len());
        Ok(())
    }

    /// Moves the object at `src` so that it ends up at `dest`.
    ///
    /// `dest` is the full new path, not the new parent: its last segment
    /// becomes the node's name, so a move can also rename. Drives stay put,
    /// nothing but drives may sit at the root, and a container can't go
    /// inside itself.
    pub fn move_path(&mut self, src: &str, dest: &str) -> Result<()> {
        let src_id = self.resolve_target(src)?;
        if self.resolve_target(dest).is_ok() {
            return Err(Error::already_exists(dest));
        }

        let (dest_parent_path, new_name) = path::split_last(dest);
        let dest_parent = self
            .lookup(dest_parent_path)
            .ok_or_else(|| Error::not_found(dest_parent_path))?;

        let (src_kind, old_parent, old_name) = {
            let node = self.node(src_id)?;
            (node.kind(), node.parent(), node.name().to_string())
        };
        if src_kind == NodeKind::Drive {
            return Err(Error::illegal("drives may not be moved"));
        }
        if dest_parent.is_root() {
            return Err(Error::illegal(
                "files, folders and zips may not be moved to the root of the file system",
            ));
        }
        if self.directory(dest_parent).is_none() {
            return Err(Error::illegal(format!(
                "files cannot contain other objects: {dest_parent_path}"
            )));
        }
        path::validate_name(new_name)?;
        if self.is_within(dest_parent, src_id) {
            return Err(Error::illegal(format!(
                "cannot move {src} inside itself"
            )));
        }

        if let Some(dir) = self.directory_mut(old_parent) {
            _ = dir.remove(&old_name);
        }
        let node = self.nodes.get_mut(&src_id).ok_or_else(|| detached(src_id))?;
        node.parent = dest_parent;
        new_name.clone_into(&mut node.name);
        self.directory_mut(dest_parent)
            .ok_or_else(|| Error::not_found(dest_parent_path))?
            .insert(new_name.to_string(), src_id)?;

        debug!("moved {src} to {dest}", src: src, dest: dest);
        Ok(())
    }

    /// Replaces the content of the file at `path`.
    pub fn write_to_file<T: AsRef<[u8]>>(&mut self, path: &str, content: T) -> Result<()> {
        let id = self.resolve_target(path)?;
        let file = self
            .nodes
            .get_mut(&id)
            .and_then(Node::as_file_mut)
            .ok_or_else(|| Error::invalid_write(path))?;
        file.write(content);

        let bytes = file.size();
        debug!("wrote {bytes} bytes to {path}", bytes: bytes, path: path);
        Ok(())
    }

    /// The node at `path` and all its descendants, pre-order, children in
    /// name order. The empty path walks every drive.
    pub fn walk(&self, path: &str) -> Result<Vec<NodeID>> {
        let id = self.lookup(path).ok_or_else(|| Error::not_found(path))?;
        if id.is_root() {
            return Ok(self.root.ids().flat_map(|d| self.subtree(d)).collect());
        }
        Ok(self.subtree(id))
    }

    /// Renders the whole tree with box-drawing characters.
    pub fn tree(&self) -> String {
        let mut root = TreeNode::new("<root>");
        for (_, id) in self.root.iter() {
            if let Some(child) = self.tree_node(id) {
                root.add_child(child);
            }
        }
        root.to_string()
    }

    fn tree_node(&self, id: NodeID) -> Option<TreeNode> {
        let node = self.node(id).ok()?;
        let mut tree = TreeNode::new(format!(
            "{} ({}, {})",
            node.name(),
            node.kind(),
            node.size()
        ));
        for (_, child) in node.children() {
            if let Some(child) = self.tree_node(child) {
                tree.add_child(child);
            }
        }
        Some(tree)
    }

    /// Resolves a path that must name an actual node (never the root).
    fn resolve_target(&self, path: &str) -> Result<NodeID> {
        match self.lookup(path) {
            Some(id) if !id.is_root() => Ok(id),
            _ => Err(Error::not_found(path)),
        }
    }

    pub(crate) fn directory(&self, id: NodeID) -> Option<&Directory> {
        if id.is_root() {
            Some(&self.root)
        } else {
            self.nodes.get(&id).and_then(Node::as_dir)
        }
    }

    fn directory_mut(&mut self, id: NodeID) -> Option<&mut Directory> {
        if id.is_root() {
            Some(&mut self.root)
        } else {
            self.nodes.get_mut(&id).and_then(Node::as_dir_mut)
        }
    }

    fn link(&mut self, id: NodeID, node: Node) -> Result<()> {
        let parent = node.parent;
        let name = node.name.clone();
        self.directory_mut(parent)
            .ok_or_else(|| detached(parent))?
            .insert(name, id)?;
        _ = self.nodes.insert(id, node);
        Ok(())
    }

    /// True when `id` is `ancestor` or lies somewhere below it.
    fn is_within(&self, id: NodeID, ancestor: NodeID) -> bool {
        let mut current = id;
        loop {
            if current == ancestor {
                return true;
            }
            match self.nodes.get(&current) {
                Some(node) => current = node.parent,
                None => return false,
            }
        }
    }

    fn subtree(&self, id: NodeID) -> Vec<NodeID> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            out.push(current);
            if let Some(dir) = self.directory(current) {
                // Reversed so that pops come out in name order
                let children: Vec<_> = dir.ids().collect();
                stack.extend(children.into_iter().rev());
            }
        }
        out
    }

    pub(crate) fn node_size(&self, node: &Node) -> u64 {
        match (node.kind, node.as_dir(), node.as_file()) {
            (NodeKind::Zip, Some(dir), _) => self.sum_sizes(dir).div_ceil(2),
            (_, Some(dir), _) => self.sum_sizes(dir),
            (_, None, Some(file)) => file.size(),
            (_, None, None) => 0,
        }
    }

    fn sum_sizes(&self, dir: &Directory) -> u64 {
        dir.ids()
            .filter_map(|id| self.nodes.get(&id))
            .map(|child| self.node_size(child))
            .sum()
    }
}

fn detached(id: NodeID) -> Error {
    Error::illegal(format!(
        "object {id} is not present in the file system hierarchy"
    ))
}
