/// Row sorting — per-column comparators and a sorted view over the model.
///
/// Comparators only read the metadata snapshots the model already holds;
/// neither they nor [`SortProxy`] ever reorder the arena.
///
/// Every column comparator is a total order, so any sort built on them
/// is well defined. The Type column compares directories before files and
/// breaks ties by name; comparing only the directory flag would leave
/// dir-vs-dir and file-vs-file undefined.
pub mod proxy;

pub use proxy::SortProxy;

use crate::adapter::{Column, FileTreeModel, ModelIndex};
use crate::model::EntryInfo;
use std::cmp::Ordering;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn reversed(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Case-insensitive name comparison (Unicode lowercase, no allocation).
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Ascending order of two entries under `column`.
pub fn compare_entries(a: &EntryInfo, b: &EntryInfo, column: Column) -> Ordering {
    match column {
        Column::Name => compare_names(&a.name, &b.name),
        Column::Type => b
            .is_dir
            .cmp(&a.is_dir)
            .then_with(|| compare_names(&a.name, &b.name)),
        Column::Size => a.size.cmp(&b.size),
        // Unknown timestamps (None) sort before any known one.
        Column::Modified => a.modified.cmp(&b.modified),
    }
}

/// Ascending order of two rows, keyed on `left`'s column.
///
/// Rows that do not resolve, or a column outside the schema, fall back to
/// source row order.
pub fn compare_rows(model: &FileTreeModel, left: &ModelIndex, right: &ModelIndex) -> Ordering {
    let column = Column::from_index(left.column());
    match (model.file_info(left), model.file_info(right), column) {
        (Some(l), Some(r), Some(column)) => compare_entries(l, r, column),
        _ => left.row().cmp(&right.row()),
    }
}

/// `true` if `left` sorts strictly before `right`.
pub fn less_than(model: &FileTreeModel, left: &ModelIndex, right: &ModelIndex) -> bool {
    compare_rows(model, left, right) == Ordering::Less
}
