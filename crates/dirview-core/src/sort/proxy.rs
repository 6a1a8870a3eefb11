/// Sorted view over a [`FileTreeModel`].
///
/// Keeps, per parent node, the permutation from display rows to source
/// rows. Permutations are built lazily on first access and thrown away when
/// the sort key changes or the model is reset (detected via the model's
/// generation counter).
use super::{compare_rows, SortOrder};
use crate::adapter::{Column, FileTreeModel, ModelIndex};
use crate::model::NodeIndex;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct SortProxy {
    /// `None` shows rows in scan order.
    column: Option<Column>,
    order: SortOrder,
    /// Model generation the cached mappings belong to.
    generation: Option<u64>,
    /// Parent node (`None` = root) -> source rows in display order.
    mappings: HashMap<Option<NodeIndex>, Vec<usize>>,
}

impl SortProxy {
    /// An unsorted proxy (scan order).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sort by `column` in `order`.
    pub fn sort(&mut self, column: Column, order: SortOrder) {
        self.column = Some(column);
        self.order = order;
        self.invalidate();
    }

    pub fn sort_column(&self) -> Option<Column> {
        self.column
    }

    pub fn sort_order(&self) -> SortOrder {
        self.order
    }

    /// Drop every cached permutation.
    pub fn invalidate(&mut self) {
        self.mappings.clear();
    }

    /// Source rows under `parent` in display order, `None` if `parent` is stale.
    pub fn mapping(&mut self, model: &FileTreeModel, parent: Option<&ModelIndex>) -> Option<&[usize]> {
        if self.generation != Some(model.generation()) {
            self.mappings.clear();
            self.generation = Some(model.generation());
        }

        let key = match parent {
            Some(index) => Some(model.node(index)?),
            None => None,
        };

        if !self.mappings.contains_key(&key) {
            let rows = build_mapping(model, parent, self.column, self.order);
            self.mappings.insert(key, rows);
        }
        self.mappings.get(&key).map(Vec::as_slice)
    }

    /// Same as the model's row count; sorting never hides rows.
    pub fn row_count(&self, model: &FileTreeModel, parent: Option<&ModelIndex>) -> usize {
        model.row_count(parent)
    }

    /// Source reference (column 0) shown at `proxy_row` under `parent`.
    pub fn map_to_source(
        &mut self,
        model: &FileTreeModel,
        parent: Option<&ModelIndex>,
        proxy_row: usize,
    ) -> Option<ModelIndex> {
        let source_row = *self.mapping(model, parent)?.get(proxy_row)?;
        model.index(source_row, 0, parent)
    }

    /// Display row of a source reference within its parent.
    pub fn map_from_source(&mut self, model: &FileTreeModel, index: &ModelIndex) -> Option<usize> {
        model.node(index)?;
        let parent = model.parent(Some(index));
        self.mapping(model, parent.as_ref())?
            .iter()
            .position(|&row| row == index.row())
    }

    /// Children of `parent` (column 0) in display order.
    pub fn children(&mut self, model: &FileTreeModel, parent: Option<&ModelIndex>) -> Vec<ModelIndex> {
        let Some(rows) = self.mapping(model, parent) else {
            return Vec::new();
        };
        rows.iter()
            .filter_map(|&row| model.index(row, 0, parent))
            .collect()
    }
}

/// Stable sort of the child rows of `parent` by `column`.
///
/// Rows that compare equal keep their scan order in both directions.
fn build_mapping(
    model: &FileTreeModel,
    parent: Option<&ModelIndex>,
    column: Option<Column>,
    order: SortOrder,
) -> Vec<usize> {
    let count = model.row_count(parent);
    let Some(column) = column else {
        return (0..count).collect();
    };

    let mut keyed: Vec<ModelIndex> = (0..count)
        .filter_map(|row| model.index(row, column.index(), parent))
        .collect();

    keyed.sort_by(|a, b| match order {
        SortOrder::Ascending => compare_rows(model, a, b),
        SortOrder::Descending => compare_rows(model, b, a),
    });

    keyed.into_iter().map(|index| index.row()).collect()
}
