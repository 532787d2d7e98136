// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Delimited path strings.
//!
//! Paths are plain strings of names joined by [`DELIMITER`], with no leading
//! delimiter and no escaping. The empty string names the tree root.

use crate::error::{Error, Result};

pub const DELIMITER: char = '\\';

/// Splits a path into its segments, in order.
///
/// Returns `None` for the empty path (the root) and for paths containing an
/// empty segment, which never resolve.
pub fn segments(path: &str) -> Option<Vec<&str>> {
    if path.is_empty() {
        return None;
    }
    let parts: Vec<&str> = path.split(DELIMITER).collect();
    if parts.iter().any(|p| p.is_empty()) {
        return None;
    }
    Some(parts)
}

/// Joins a parent path and a child name. The root's children have no prefix.
pub fn join(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}{DELIMITER}{name}")
    }
}

/// Splits off the final segment: `"D\F\X"` becomes `("D\F", "X")` and a
/// single-segment path has the empty (root) parent.
pub fn split_last(path: &str) -> (&str, &str) {
    match path.rsplit_once(DELIMITER) {
        Some((parent, name)) => (parent, name),
        None => ("", path),
    }
}

/// Checks that `name` can label a node.
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::illegal("object names may not be empty"));
    }
    if name.contains(DELIMITER) {
        return Err(Error::illegal(format!(
            "object name '{name}' may not contain the path delimiter"
        )));
    }
    Ok(())
}
