/// Data model for the DirView file tree.
///
/// Re-exports the arena-allocated tree structure and supporting types.
pub mod describe;
pub mod file_node;
pub mod file_tree;

pub use file_node::{EntryInfo, FileNode, NodeIndex};
pub use file_tree::FileTree;
