/// DirView Core — scanning, tree adapter, and row sorting.
///
/// This crate contains all business logic with zero UI dependencies.
/// A frontend drives it through [`adapter::FileTreeModel`] and reads rows
/// in display order through [`sort::SortProxy`].
///
/// # Modules
///
/// - [`model`] — Arena-allocated file tree, metadata snapshots, display formatting.
/// - [`scanner`] — Eager depth-first directory walk that builds the arena.
/// - [`adapter`] — Row/column/parent query contract over the arena.
/// - [`sort`] — Per-column comparators and the sorted view over the adapter.
/// - [`config`] — Root path resolution for the viewer.
pub mod adapter;
pub mod config;
pub mod model;
pub mod scanner;
pub mod sort;
