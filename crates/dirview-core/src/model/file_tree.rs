/// Arena-backed file tree.
///
/// All nodes live in a single `Vec<FileNode>`. Relationships between nodes
/// use `NodeIndex` (a thin `u32` wrapper) rather than heap pointers; each
/// node keeps its parent index and its own ordered list of child indices.
use super::file_node::{EntryInfo, FileNode, NodeIndex};

/// The complete file tree produced by a scan.
#[derive(Debug, Clone, Default)]
pub struct FileTree {
    /// Arena: every node in a flat vector.
    pub nodes: Vec<FileNode>,

    /// The scan root, `None` for an empty tree (invalid or missing path).
    pub root: Option<NodeIndex>,
}

impl FileTree {
    /// Create an empty tree (no root).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty tree with pre-allocated capacity.
    pub fn with_capacity(estimated_nodes: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(estimated_nodes),
            root: None,
        }
    }

    /// Allocate a new node in the arena and return its index.
    fn add_node(&mut self, node: FileNode) -> NodeIndex {
        let idx = NodeIndex::new(self.nodes.len());
        self.nodes.push(node);
        idx
    }

    /// Install the root node. Any previous root is forgotten but its nodes
    /// stay in the arena, so only call this on a fresh tree.
    pub fn set_root(&mut self, info: EntryInfo) -> NodeIndex {
        debug_assert!(self.nodes.is_empty(), "root must be the first node");
        let idx = self.add_node(FileNode::new(info, None));
        self.root = Some(idx);
        idx
    }

    /// Append a new child under `parent`, after any existing children.
    pub fn add_child(&mut self, parent: NodeIndex, info: EntryInfo) -> NodeIndex {
        let idx = self.add_node(FileNode::new(info, Some(parent)));
        self.nodes[parent.idx()].children.push(idx);
        idx
    }

    /// Get the node at the given index, or `None` if it is not in this arena.
    #[inline]
    pub fn get(&self, index: NodeIndex) -> Option<&FileNode> {
        self.nodes.get(index.idx())
    }

    /// Get the node at the given index.
    ///
    /// Panics if `index` did not come from this tree.
    #[inline]
    pub fn node(&self, index: NodeIndex) -> &FileNode {
        &self.nodes[index.idx()]
    }

    /// Direct children of a node, in scan order.
    pub fn children(&self, parent: NodeIndex) -> &[NodeIndex] {
        self.get(parent)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// Position of `index` within its parent's child list.
    ///
    /// Linear scan of the parent's children; the root (and any node not in
    /// the arena) reports row 0.
    pub fn row_in_parent(&self, index: NodeIndex) -> usize {
        self.get(index)
            .and_then(|n| n.parent)
            .and_then(|p| self.node(p).children.iter().position(|&c| c == index))
            .unwrap_or(0)
    }

    /// Total number of nodes in the tree, root included.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tree contains no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
