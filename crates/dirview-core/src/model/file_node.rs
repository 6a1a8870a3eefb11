/// A single node in the arena-allocated file tree.
///
/// Nodes are stored in a flat `Vec<FileNode>` owned by [`FileTree`](super::FileTree).
/// Parent-child relationships use indices rather than pointers, so dropping
/// the arena tears down the whole tree with no cycle risk.
use compact_str::CompactString;
use std::fs::Metadata;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Lightweight index into the arena `Vec<FileNode>`.
///
/// Uses `u32` to keep nodes small — supports up to ~4 billion nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    /// Create a new `NodeIndex` from a `usize`, panicking in debug builds if it exceeds `u32::MAX`.
    #[inline]
    pub fn new(index: usize) -> Self {
        debug_assert!(index <= u32::MAX as usize, "NodeIndex overflow");
        Self(index as u32)
    }

    /// Return the index as a `usize` for Vec indexing.
    #[inline]
    pub fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Metadata snapshot taken once at scan time.
///
/// The sorter and the display columns read these values; nothing touches
/// the filesystem again after the scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryInfo {
    /// Absolute path of the entry.
    pub path: PathBuf,

    /// File or directory name only.
    pub name: CompactString,

    /// `true` if this entry is a directory.
    pub is_dir: bool,

    /// Logical size in bytes as reported by the filesystem.
    /// Directories keep whatever the platform reports; it is never aggregated.
    pub size: u64,

    /// Last-modified timestamp, `None` if the platform cannot report it.
    pub modified: Option<SystemTime>,
}

impl EntryInfo {
    /// Build a snapshot from an already-read `Metadata`.
    pub fn from_metadata(path: &Path, name: &str, meta: &Metadata) -> Self {
        Self {
            path: path.to_path_buf(),
            name: CompactString::new(name),
            is_dir: meta.is_dir(),
            size: meta.len(),
            modified: meta.modified().ok(),
        }
    }

    /// Text after the last `.` in the name, as typed.
    ///
    /// Matches the usual "suffix" notion: `archive.tar.gz` → `gz`,
    /// `Makefile` → `""`, `.bashrc` → `bashrc`.
    pub fn extension(&self) -> &str {
        match self.name.rfind('.') {
            Some(pos) => &self.name[pos + 1..],
            None => "",
        }
    }
}

/// A single file or directory in the tree.
#[derive(Debug, Clone)]
pub struct FileNode {
    /// Metadata captured during the scan.
    pub info: EntryInfo,

    /// Index of the parent node. `None` for the scan root.
    pub parent: Option<NodeIndex>,

    /// Children in scan (enumeration) order. Never reordered in place;
    /// display ordering is done by the sort layer.
    pub children: Vec<NodeIndex>,
}

impl FileNode {
    /// Create a childless node for `info` under `parent`.
    pub fn new(info: EntryInfo, parent: Option<NodeIndex>) -> Self {
        Self {
            info,
            parent,
            children: Vec::new(),
        }
    }

    /// Shorthand for `self.info.is_dir`.
    #[inline]
    pub fn is_dir(&self) -> bool {
        self.info.is_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> EntryInfo {
        EntryInfo {
            path: PathBuf::from(name),
            name: CompactString::new(name),
            is_dir: false,
            size: 0,
            modified: None,
        }
    }

    #[test]
    fn test_extension() {
        assert_eq!(file("notes.txt").extension(), "txt");
        assert_eq!(file("archive.tar.gz").extension(), "gz");
        assert_eq!(file("PHOTO.JPG").extension(), "JPG");
        assert_eq!(file("Makefile").extension(), "");
        assert_eq!(file(".bashrc").extension(), "bashrc");
    }
}
