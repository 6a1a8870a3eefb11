/// Tree adapter — exposes a scanned [`FileTree`] through the row/column/parent
/// queries a generic tree view consumes.
///
/// Rows are addressed by [`ModelIndex`]; the invisible root is addressed by
/// `None`. Every query is total: out-of-range rows, unknown columns and
/// references issued before the last reset all come back as `None` (or 0
/// for counts) instead of panicking.
pub mod icon;
pub mod observer;

pub use icon::{ExtensionIcons, Icon, IconProvider};
pub use observer::{ChannelObserver, ModelEvent, ModelObserver};

use crate::model::describe::{format_modified, size_description, type_description};
use crate::model::{EntryInfo, FileTree, NodeIndex};
use crate::scanner::{self, ScanSummary};
use crossbeam_channel::Receiver;
use observer::ResetGuard;
use std::path::{Path, PathBuf};
use tracing::info;

/// Number of columns in the fixed schema.
pub const COLUMN_COUNT: usize = 4;

/// The fixed column schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Name,
    Type,
    Size,
    Modified,
}

impl Column {
    /// All columns in display order.
    pub const ALL: [Column; COLUMN_COUNT] =
        [Column::Name, Column::Type, Column::Size, Column::Modified];

    /// Column for a numeric section, `None` if out of range.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Header text.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Type => "Type",
            Self::Size => "Size",
            Self::Modified => "Modified Date",
        }
    }
}

/// What a cell query is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Text shown in the cell.
    Display,
    /// Icon shown next to the name (column 0 only).
    Decoration,
}

/// Typed result of a cell query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    Text(String),
    Icon(Icon),
}

impl CellValue {
    /// The text payload, if this is a text cell.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Icon(_) => None,
        }
    }
}

/// Reference to one cell: a node, its row within its parent, and a column.
///
/// Only the model hands these out. Each carries the generation of the tree
/// it was issued for, so a reference kept across a reset stops resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModelIndex {
    row: usize,
    column: usize,
    node: NodeIndex,
    generation: u64,
}

impl ModelIndex {
    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// Arena index of the referenced node.
    pub fn node(&self) -> NodeIndex {
        self.node
    }
}

/// Display text of `column` for an entry.
pub fn display_text(entry: &EntryInfo, column: Column) -> String {
    match column {
        Column::Name => entry.name.to_string(),
        Column::Type => type_description(entry),
        Column::Size => size_description(entry),
        Column::Modified => format_modified(entry.modified),
    }
}

/// The filesystem tree model.
pub struct FileTreeModel {
    tree: FileTree,
    root_path: PathBuf,
    last_scan: ScanSummary,
    generation: u64,
    observers: Vec<Box<dyn ModelObserver>>,
    icons: Box<dyn IconProvider>,
}

impl FileTreeModel {
    /// Create a model and scan `root_path` immediately.
    pub fn new(root_path: impl Into<PathBuf>) -> Self {
        Self::with_icon_provider(root_path, Box::new(ExtensionIcons))
    }

    /// Create a model with a custom icon lookup.
    pub fn with_icon_provider(root_path: impl Into<PathBuf>, icons: Box<dyn IconProvider>) -> Self {
        let mut model = Self {
            tree: FileTree::new(),
            root_path: PathBuf::new(),
            last_scan: ScanSummary::default(),
            generation: 0,
            observers: Vec::new(),
            icons,
        };
        model.set_root_path(root_path);
        model
    }

    /// Register an observer for reset notifications.
    pub fn add_observer(&mut self, observer: Box<dyn ModelObserver>) {
        self.observers.push(observer);
    }

    /// Register a channel observer and return its receiving end.
    pub fn subscribe(&mut self) -> Receiver<ModelEvent> {
        let (tx, rx) = crossbeam_channel::unbounded();
        self.add_observer(Box::new(ChannelObserver::new(tx)));
        rx
    }

    /// Discard the current tree and scan `path` in its place.
    ///
    /// Observers see `reset_began` before the old tree is dropped and
    /// `reset_ended` once the new one is installed. A path that is not an
    /// existing directory leaves the model empty; it is not an error.
    pub fn set_root_path(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        let _reset = ResetGuard::begin(&mut self.observers);

        info!("Resetting model root to {}", path.display());
        self.tree = FileTree::new();
        self.generation = self.generation.wrapping_add(1);

        let outcome = scanner::scan_directory(&path);
        self.tree = outcome.tree;
        self.last_scan = outcome.summary;
        self.root_path = path;
    }

    /// The path last passed to [`set_root_path`](Self::set_root_path), as given.
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    /// Metadata of the scan root, `None` when the tree is empty.
    pub fn root_info(&self) -> Option<&EntryInfo> {
        self.tree.root.map(|r| &self.tree.node(r).info)
    }

    /// Statistics of the scan that produced the current tree.
    pub fn last_scan(&self) -> &ScanSummary {
        &self.last_scan
    }

    /// Counter bumped on every reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Read-only access to the underlying arena.
    pub fn tree(&self) -> &FileTree {
        &self.tree
    }

    /// Resolve a reference to its node, rejecting stale or foreign ones.
    pub fn node(&self, index: &ModelIndex) -> Option<NodeIndex> {
        if index.generation != self.generation || index.column >= COLUMN_COUNT {
            return None;
        }
        let node = self.tree.get(index.node)?;
        // The root is never handed out as a row.
        node.parent?;
        Some(index.node)
    }

    /// Node addressed by a parent reference: the root for `None`.
    fn parent_node(&self, parent: Option<&ModelIndex>) -> Option<NodeIndex> {
        match parent {
            Some(index) => self.node(index),
            None => self.tree.root,
        }
    }

    /// Reference to the child at `row` under `parent`.
    pub fn index(&self, row: usize, column: usize, parent: Option<&ModelIndex>) -> Option<ModelIndex> {
        if column >= COLUMN_COUNT {
            return None;
        }
        let parent_node = self.parent_node(parent)?;
        let node = *self.tree.children(parent_node).get(row)?;
        Some(ModelIndex {
            row,
            column,
            node,
            generation: self.generation,
        })
    }

    /// Same row as `index`, different column.
    pub fn sibling(&self, index: &ModelIndex, column: usize) -> Option<ModelIndex> {
        self.node(index)?;
        if column >= COLUMN_COUNT {
            return None;
        }
        Some(ModelIndex { column, ..*index })
    }

    /// Reference to the parent of `index` (column 0).
    ///
    /// `None` for `None`, for stale references, and for top-level rows,
    /// whose parent is the invisible root.
    pub fn parent(&self, index: Option<&ModelIndex>) -> Option<ModelIndex> {
        let node = self.node(index?)?;
        let parent = self.tree.node(node).parent?;
        if Some(parent) == self.tree.root {
            return None;
        }
        Some(ModelIndex {
            row: self.tree.row_in_parent(parent),
            column: 0,
            node: parent,
            generation: self.generation,
        })
    }

    /// Number of children under `parent` (the root for `None`).
    pub fn row_count(&self, parent: Option<&ModelIndex>) -> usize {
        self.parent_node(parent)
            .map(|p| self.tree.children(p).len())
            .unwrap_or(0)
    }

    /// Always [`COLUMN_COUNT`].
    pub fn column_count(&self) -> usize {
        COLUMN_COUNT
    }

    pub fn has_children(&self, parent: Option<&ModelIndex>) -> bool {
        self.row_count(parent) > 0
    }

    /// Cell contents for `index` in the requested role.
    pub fn data(&self, index: &ModelIndex, role: Role) -> Option<CellValue> {
        let info = self.file_info(index)?;
        match role {
            Role::Display => {
                Column::from_index(index.column).map(|c| CellValue::Text(display_text(info, c)))
            }
            Role::Decoration if index.column == 0 => Some(CellValue::Icon(self.icons.icon(info))),
            Role::Decoration => None,
        }
    }

    /// Header label for a column section.
    pub fn header_data(&self, section: usize) -> Option<&'static str> {
        Column::from_index(section).map(Column::label)
    }

    /// Metadata snapshot behind a reference, `None` if it does not resolve.
    pub fn file_info(&self, index: &ModelIndex) -> Option<&EntryInfo> {
        self.node(index).map(|n| &self.tree.node(n).info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_round_trip() {
        for (i, column) in Column::ALL.iter().enumerate() {
            assert_eq!(Column::from_index(i), Some(*column));
            assert_eq!(column.index(), i);
        }
        assert_eq!(Column::from_index(COLUMN_COUNT), None);
    }

    #[test]
    fn test_headers() {
        let model = FileTreeModel::new("/definitely/not/a/real/path/dirview");
        let labels: Vec<_> = (0..=COLUMN_COUNT).map(|s| model.header_data(s)).collect();
        assert_eq!(
            labels,
            vec![
                Some("Name"),
                Some("Type"),
                Some("Size"),
                Some("Modified Date"),
                None
            ]
        );
    }

    #[test]
    fn test_empty_model_queries_are_total() {
        let model = FileTreeModel::new("/definitely/not/a/real/path/dirview");
        assert_eq!(model.row_count(None), 0);
        assert_eq!(model.column_count(), 4);
        assert!(model.index(0, 0, None).is_none());
        assert!(model.parent(None).is_none());
        assert!(model.root_info().is_none());
        assert_eq!(model.last_scan().error_count, 1);
    }
}
