// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use crate::error::{Error, Result};

/// Node kind tags.
///
/// Drives, folders and zips are containers; files are leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Top-level container, only valid directly under the tree root
    Drive,
    Folder,
    /// Container reporting half its contents' size, rounded up
    Zip,
    File,
}

impl NodeKind {
    pub const ALL: [NodeKind; 4] = [
        NodeKind::Drive,
        NodeKind::Folder,
        NodeKind::Zip,
        NodeKind::File,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Drive => "drive",
            NodeKind::Folder => "folder",
            NodeKind::Zip => "zip",
            NodeKind::File => "file",
        }
    }

    pub fn is_container(&self) -> bool {
        !matches!(self, NodeKind::File)
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for NodeKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "drive" => Ok(NodeKind::Drive),
            "folder" => Ok(NodeKind::Folder),
            "zip" => Ok(NodeKind::Zip),
            "file" => Ok(NodeKind::File),
            other => Err(Error::illegal(format!(
                "unknown object type '{other}', expected one of: drive, folder, zip, file"
            ))),
        }
    }
}

impl TryFrom<&str> for NodeKind {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}
