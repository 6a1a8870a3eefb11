/// Browser state management.
///
/// Owns the tree model and the sort proxy, and keeps a flattened list of
/// visible rows for the virtualised tree view. The model announces resets
/// over a channel; `process_model_events()` drains it once per frame and
/// rebuilds the rows when a reset completes.
use crossbeam_channel::Receiver;
use dirview_core::adapter::{CellValue, Column, FileTreeModel, Icon, ModelEvent, ModelIndex, Role};
use dirview_core::config::ViewerConfig;
use dirview_core::model::NodeIndex;
use dirview_core::sort::{SortOrder, SortProxy};
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::debug;

/// A row in the flattened visible-rows list.
#[derive(Clone, Copy, Debug)]
pub struct VisibleRow {
    /// Source-model reference (column 0).
    pub index: ModelIndex,
    /// Nesting depth (0 = top-level entry).
    pub depth: u16,
    /// Whether this directory is currently expanded (meaningless for leaves).
    pub is_expanded: bool,
    /// Whether the row can be expanded at all.
    pub has_children: bool,
}

/// Maximum rows in the visible-rows list.
///
/// Prevents runaway growth on fully expanded multi-million-node trees.
pub const MAX_VISIBLE_ROWS: usize = 500_000;

/// All browser state.
pub struct BrowserState {
    pub model: FileTreeModel,
    pub proxy: SortProxy,
    events: Receiver<ModelEvent>,
    pub visible_rows: Vec<VisibleRow>,
    pub selected: Option<ModelIndex>,
    /// Text in the toolbar's path field.
    pub path_input: String,
}

impl BrowserState {
    /// Scan the configured root and build the initial rows, sorted by name.
    pub fn new(config: &ViewerConfig) -> Self {
        let mut model = FileTreeModel::new(config.root_path.clone());
        let events = model.subscribe();

        let mut proxy = SortProxy::new();
        proxy.sort(Column::Name, SortOrder::Ascending);

        let mut state = Self {
            model,
            proxy,
            events,
            visible_rows: Vec::new(),
            selected: None,
            path_input: config.root_path.to_string_lossy().into_owned(),
        };
        state.rebuild_visible_rows(&HashSet::new());
        state
    }

    /// Browse a different directory. The old tree and every row built on it
    /// are discarded.
    pub fn set_root_path(&mut self, path: PathBuf) {
        self.path_input = path.to_string_lossy().into_owned();
        self.model.set_root_path(path);
        self.process_model_events();
    }

    /// Drain pending model notifications. Returns `true` if the rows changed.
    pub fn process_model_events(&mut self) -> bool {
        let mut changed = false;
        while let Ok(event) = self.events.try_recv() {
            match event {
                ModelEvent::ResetBegan => {
                    self.visible_rows.clear();
                    self.selected = None;
                    self.proxy.invalidate();
                }
                ModelEvent::ResetEnded => {
                    self.rebuild_visible_rows(&HashSet::new());
                    changed = true;
                }
            }
        }
        changed
    }

    /// Header click: sort by `column`, or flip the order if it already is.
    pub fn sort_by(&mut self, column: Column) {
        let order = if self.proxy.sort_column() == Some(column) {
            self.proxy.sort_order().reversed()
        } else {
            SortOrder::Ascending
        };
        debug!("Sorting by {} ({order:?})", column.label());
        self.proxy.sort(column, order);

        let expanded: HashSet<NodeIndex> = self
            .visible_rows
            .iter()
            .filter(|r| r.is_expanded)
            .map(|r| r.index.node())
            .collect();
        self.rebuild_visible_rows(&expanded);
    }

    /// Rebuild all rows in display order, keeping `expanded` directories open.
    fn rebuild_visible_rows(&mut self, expanded: &HashSet<NodeIndex>) {
        self.visible_rows.clear();
        let top = self.proxy.children(&self.model, None);
        for index in top {
            self.build_rows_recursive(index, 0, expanded);
        }
    }

    fn build_rows_recursive(&mut self, index: ModelIndex, depth: u16, expanded: &HashSet<NodeIndex>) {
        if self.visible_rows.len() >= MAX_VISIBLE_ROWS {
            return;
        }

        let has_children = self.model.has_children(Some(&index));
        let is_expanded = has_children && expanded.contains(&index.node());
        self.visible_rows.push(VisibleRow {
            index,
            depth,
            is_expanded,
            has_children,
        });

        if is_expanded {
            for child in self.proxy.children(&self.model, Some(&index)) {
                self.build_rows_recursive(child, depth + 1, expanded);
            }
        }
    }

    /// Expand or collapse the row at `row_index` in `visible_rows`.
    pub fn toggle_expand(&mut self, row_index: usize) {
        let Some(row) = self.visible_rows.get(row_index).copied() else {
            return;
        };
        if !row.has_children {
            return;
        }

        if row.is_expanded {
            // Collapse: drop the consecutive run of deeper rows.
            let start = row_index + 1;
            let end = self.visible_rows[start..]
                .iter()
                .position(|r| r.depth <= row.depth)
                .map_or(self.visible_rows.len(), |p| start + p);
            self.visible_rows.drain(start..end);
            self.visible_rows[row_index].is_expanded = false;
        } else {
            let headroom = MAX_VISIBLE_ROWS.saturating_sub(self.visible_rows.len());
            let new_rows: Vec<VisibleRow> = self
                .proxy
                .children(&self.model, Some(&row.index))
                .into_iter()
                .take(headroom)
                .map(|index| VisibleRow {
                    index,
                    depth: row.depth + 1,
                    is_expanded: false,
                    has_children: self.model.has_children(Some(&index)),
                })
                .collect();
            let at = row_index + 1;
            self.visible_rows.splice(at..at, new_rows);
            self.visible_rows[row_index].is_expanded = true;
        }
    }

    /// Display text of one cell, empty if the row no longer resolves.
    pub fn cell_text(&self, index: &ModelIndex, column: Column) -> String {
        self.model
            .sibling(index, column.index())
            .and_then(|cell| self.model.data(&cell, Role::Display))
            .and_then(|value| value.as_text().map(str::to_owned))
            .unwrap_or_default()
    }

    /// Icon for the Name cell of a row.
    pub fn icon(&self, index: &ModelIndex) -> Option<Icon> {
        match self.model.data(index, Role::Decoration)? {
            CellValue::Icon(icon) => Some(icon),
            CellValue::Text(_) => None,
        }
    }
}
