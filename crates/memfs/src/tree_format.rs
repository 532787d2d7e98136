// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Box-drawing rendering of a filesystem tree, as produced by [`crate::FS::tree`].
//!
//! ```text
//! <root>
//! └─┬ Drive1 (drive, 38)
//!   ├── Folder1 (folder, 0)
//!   └─┬ Zip1 (zip, 13)
//!     └── File2 (file, 25)
//! ```

use std::fmt;

/// One labelled line of the rendering plus its children.
#[derive(Debug, Clone, Default)]
pub struct TreeNode {
    pub label: String,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
        }
    }

    pub fn add_child(&mut self, child: TreeNode) {
        self.children.push(child);
    }
}

pub fn format_tree(root: &TreeNode) -> String {
    let mut output = String::new();
    output.push_str(&root.label);
    output.push('\n');
    format_children(&mut output, &root.children, "");
    output
}

fn format_children(output: &mut String, children: &[TreeNode], prefix: &str) {
    let last = children.len().saturating_sub(1);

    for (index, child) in children.iter().enumerate() {
        // Tee connectors mark entries that have children of their own
        let (connector, continuation) = match (index == last, child.children.is_empty()) {
            (true, true) => ("└──", ' '),
            (false, true) => ("├──", '│'),
            (true, false) => ("└─┬", ' '),
            (false, false) => ("├─┬", '│'),
        };

        output.push_str(prefix);
        output.push_str(connector);
        output.push(' ');
        output.push_str(&child.label);
        output.push('\n');

        if !child.children.is_empty() {
            let nested = format!("{prefix}{continuation} ");
            format_children(output, &child.children, &nested);
        }
    }
}

impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_tree(self))
    }
}
