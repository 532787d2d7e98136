// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

/// Represents a file backed by memory.
///
/// Content starts out absent, which is distinct from an empty write.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MemoryFile {
    content: Option<Vec<u8>>,
}

impl MemoryFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> Option<&[u8]> {
        self.content.as_deref()
    }

    /// Replaces the whole content; there is no append.
    pub fn write<T: AsRef<[u8]>>(&mut self, content: T) {
        self.content = Some(content.as_ref().to_vec());
    }

    /// Byte length of the content, 0 when nothing was written.
    pub fn size(&self) -> u64 {
        self.content.as_ref().map_or(0, |c| c.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_file_has_no_content() {
        let file = MemoryFile::new();
        assert_eq!(file.content(), None);
        assert_eq!(file.size(), 0);
    }

    #[test]
    fn test_write_replaces() {
        let mut file = MemoryFile::new();
        file.write("The Chronicles of Prydain");
        assert_eq!(file.size(), 25);

        file.write(b"abc");
        assert_eq!(file.content(), Some(&b"abc"[..]));
        assert_eq!(file.size(), 3);

        file.write("");
        assert_eq!(file.content(), Some(&b""[..]));
        assert_eq!(file.size(), 0);
    }

    #[test]
    fn test_size_counts_utf8_bytes() {
        let mut file = MemoryFile::new();
        file.write("héllo");
        assert_eq!(file.size(), 6);
    }
}
