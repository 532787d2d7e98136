// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::node::NodeID;

/// Children of a container, keyed by name.
///
/// This map is the only owning edge in the tree: a node lives exactly as
/// long as its entry in its parent's `Directory`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Directory {
    entries: BTreeMap<String, NodeID>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<NodeID> {
        self.entries.get(name).copied()
    }

    pub fn insert(&mut self, name: String, id: NodeID) -> Result<()> {
        if self.entries.contains_key(&name) {
            // Not a full path; callers check existence first
            return Err(Error::already_exists(&name));
        }
        self.entries.insert(name, id);
        Ok(())
    }

    pub fn remove(&mut self, name: &str) -> Option<NodeID> {
        self.entries.remove(name)
    }

    /// Entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, NodeID)> + '_ {
        self.entries.iter().map(|(name, id)| (name.as_str(), *id))
    }

    pub fn ids(&self) -> impl Iterator<Item = NodeID> + '_ {
        self.entries.values().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
