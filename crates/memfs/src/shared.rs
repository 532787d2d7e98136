// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::Result;
use crate::fs::FS;
use crate::kind::NodeKind;
use crate::node::NodeID;

/// A filesystem shared between threads.
///
/// Every operation holds one lock for its whole duration, so calls from
/// different threads are serialized and never observe a half-applied move or
/// delete. The wrapped [`FS`] itself has no locking.
#[derive(Clone, Default)]
pub struct SharedFS(Arc<Mutex<FS>>);

impl SharedFS {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create<K>(&self, kind: K, name: &str, parent_path: &str) -> Result<NodeID>
    where
        K: TryInto<NodeKind>,
        crate::Error: From<K::Error>,
    {
        self.0.lock().create(kind, name, parent_path)
    }

    pub fn delete(&self, path: &str) -> Result<()> {
        self.0.lock().delete(path)
    }

    pub fn move_path(&self, src: &str, dest: &str) -> Result<()> {
        self.0.lock().move_path(src, dest)
    }

    pub fn write_to_file<T: AsRef<[u8]>>(&self, path: &str, content: T) -> Result<()> {
        self.0.lock().write_to_file(path, content)
    }

    /// Swaps in an empty tree.
    pub fn reset(&self) {
        self.0.lock().reset();
    }

    pub fn exists(&self, path: &str) -> bool {
        self.0.lock().exists(path)
    }

    pub fn lookup(&self, path: &str) -> Option<NodeID> {
        self.0.lock().lookup(path)
    }

    pub fn path_of(&self, id: NodeID) -> Result<String> {
        self.0.lock().path_of(id)
    }

    pub fn size(&self, path: &str) -> Result<u64> {
        self.0.lock().size(path)
    }

    pub fn read_file(&self, path: &str) -> Result<Option<Vec<u8>>> {
        self.0.lock().read_file(path)
    }

    pub fn tree(&self) -> String {
        self.0.lock().tree()
    }

    /// Runs `op` with the lock held, for reads that need more than one call
    /// to agree with each other.
    pub fn with<T>(&self, op: impl FnOnce(&FS) -> T) -> T {
        op(&self.0.lock())
    }
}

impl std::fmt::Debug for SharedFS {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SharedFS{{}}")
    }
}

impl From<FS> for SharedFS {
    fn from(fs: FS) -> Self {
        Self(Arc::new(Mutex::new(fs)))
    }
}
