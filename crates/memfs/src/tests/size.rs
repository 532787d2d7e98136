// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use crate::fs::FS;
use crate::kind::NodeKind;
use crate::node::NodeID;

/// Checks the aggregation rule on every container under `path`.
fn assert_sizes_consistent(fs: &FS, path: &str) {
    for id in fs.walk(path).unwrap() {
        let node = fs.node(id).unwrap();
        let sum: u64 = node
            .children()
            .iter()
            .map(|(_, child)| fs.size_of(*child).unwrap())
            .sum();
        let expected = match node.kind() {
            NodeKind::File => node.content().map_or(0, |c| c.len() as u64),
            NodeKind::Zip => sum.div_ceil(2),
            NodeKind::Drive | NodeKind::Folder => sum,
        };
        assert_eq!(node.size(), expected, "{}", node.path().unwrap());
    }
}

#[test]
fn test_nested_file_size() {
    let mut fs = FS::new();
    fs.create("drive", "D", "").unwrap();
    fs.create("folder", "F", "D").unwrap();
    fs.create("file", "X", "D\\F").unwrap();
    fs.write_to_file("D\\F\\X", "hello").unwrap();

    assert_eq!(fs.size("D\\F\\X").unwrap(), 5);
    assert_eq!(fs.size("D\\F").unwrap(), 5);
    assert_eq!(fs.size("D").unwrap(), 5);
}

#[test]
fn test_zip_rounds_up() {
    let mut fs = FS::new();
    fs.create("drive", "D", "").unwrap();
    fs.create("zip", "Z", "D").unwrap();
    fs.create("file", "A", "D\\Z").unwrap();
    fs.create("file", "B", "D\\Z").unwrap();
    fs.write_to_file("D\\Z\\A", "abc").unwrap();
    fs.write_to_file("D\\Z\\B", "defg").unwrap();

    assert_eq!(fs.size("D\\Z").unwrap(), 4);
    assert_eq!(fs.size("D").unwrap(), 4);
}

#[test]
fn test_zip_halves_the_aggregate_not_each_child() {
    let mut fs = FS::new();
    fs.create("drive", "D", "").unwrap();
    fs.create("zip", "Z", "D").unwrap();
    for name in ["A", "B", "C"] {
        fs.create("file", name, "D\\Z").unwrap();
        fs.write_to_file(&format!("D\\Z\\{name}"), "x").unwrap();
    }
    // Per-child rounding would give 3
    assert_eq!(fs.size("D\\Z").unwrap(), 2);
}

#[test]
fn test_nested_zips() {
    let mut fs = FS::new();
    fs.create("drive", "D", "").unwrap();
    fs.create("zip", "Outer", "D").unwrap();
    fs.create("zip", "Inner", "D\\Outer").unwrap();
    fs.create("file", "X", "D\\Outer\\Inner").unwrap();
    fs.write_to_file("D\\Outer\\Inner\\X", "1234567").unwrap();

    assert_eq!(fs.size("D\\Outer\\Inner").unwrap(), 4);
    assert_eq!(fs.size("D\\Outer").unwrap(), 2);
    assert_sizes_consistent(&fs, "D");
}

#[test]
fn test_empty_and_unwritten() {
    let mut fs = FS::new();
    fs.create("drive", "D", "").unwrap();
    fs.create("zip", "Z", "D").unwrap();
    fs.create("file", "Unwritten", "D\\Z").unwrap();
    fs.create("file", "Empty", "D\\Z").unwrap();
    fs.write_to_file("D\\Z\\Empty", "").unwrap();

    assert_eq!(fs.size("D\\Z\\Unwritten").unwrap(), 0);
    assert_eq!(fs.size("D\\Z\\Empty").unwrap(), 0);
    assert_eq!(fs.size("D\\Z").unwrap(), 0);
}

#[test]
fn test_size_follows_writes_and_deletes() {
    let mut fs = FS::new();
    let d = fs.create("drive", "D", "").unwrap();
    fs.create("file", "X", "D").unwrap();
    fs.write_to_file("D\\X", "12345678").unwrap();
    assert_eq!(fs.size_of(d).unwrap(), 8);

    fs.write_to_file("D\\X", "1").unwrap();
    assert_eq!(fs.size_of(d).unwrap(), 1);

    fs.delete("D\\X").unwrap();
    assert_eq!(fs.size_of(d).unwrap(), 0);
}

#[test]
fn test_root_size_sums_drives() {
    let mut fs = FS::new();
    for drive in ["C", "D"] {
        fs.create("drive", drive, "").unwrap();
        fs.create("zip", "Z", drive).unwrap();
        let zip = format!("{drive}\\Z");
        fs.create("file", "X", &zip).unwrap();
        fs.write_to_file(&format!("{zip}\\X"), "abc").unwrap();
    }
    assert_eq!(fs.size("").unwrap(), 4);
    assert_eq!(fs.size_of(crate::ROOT_ID).unwrap(), 4);
}

#[test]
fn test_missing_and_detached() {
    let mut fs = FS::new();
    assert!(fs.size("D").unwrap_err().is_not_found());
    let d = fs.create("drive", "D", "").unwrap();
    fs.delete("D").unwrap();
    assert!(fs.size_of(d).unwrap_err().is_illegal());
    assert!(fs.size_of(NodeID::new(usize::MAX)).is_err());
}

#[test]
fn test_mixed_tree_is_consistent() {
    let mut fs = FS::new();
    fs.create("drive", "D", "").unwrap();
    fs.create("folder", "Docs", "D").unwrap();
    fs.create("zip", "Archive", "D\\Docs").unwrap();
    fs.create("folder", "Old", "D\\Docs\\Archive").unwrap();
    fs.create("zip", "Deeper", "D\\Docs\\Archive\\Old").unwrap();

    let files = [
        ("D\\Docs", "a", "The Chronicles of Prydain"),
        ("D\\Docs\\Archive", "b", "The Count of Monte Cristo"),
        ("D\\Docs\\Archive\\Old", "c", "xyz"),
        ("D\\Docs\\Archive\\Old\\Deeper", "d", "12345"),
        ("D", "e", ""),
    ];
    for (parent, name, content) in files {
        fs.create("file", name, parent).unwrap();
        fs.write_to_file(&format!("{parent}\\{name}"), content).unwrap();
    }

    assert_sizes_consistent(&fs, "D");
    // Deeper: ceil(5/2)=3, Old: 3+3=6, Archive: ceil((6+25)/2)=16, Docs: 16+25=41
    assert_eq!(fs.size("D\\Docs\\Archive\\Old\\Deeper").unwrap(), 3);
    assert_eq!(fs.size("D\\Docs\\Archive\\Old").unwrap(), 6);
    assert_eq!(fs.size("D\\Docs\\Archive").unwrap(), 16);
    assert_eq!(fs.size("D").unwrap(), 41);
}
