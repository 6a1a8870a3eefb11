/// End-to-end tests for `BrowserState` — the GUI state machine.
///
/// These exercise row flattening, expansion, header sorting and root
/// resets against real temporary directories, without opening a window.
use dirview_core::adapter::Column;
use dirview_core::config::ViewerConfig;
use dirview_core::sort::SortOrder;
use dirview_gui::state::BrowserState;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn write_bytes(path: &Path, n: usize) {
    let mut f = fs::File::create(path).unwrap();
    f.write_all(&vec![0u8; n]).unwrap();
}

/// root/{ B.txt (300), a.txt (100), sub/{ c.rs (200), inner/ } }
fn make_temp_tree() -> TempDir {
    let tmp = TempDir::new().unwrap();
    write_bytes(&tmp.path().join("B.txt"), 300);
    write_bytes(&tmp.path().join("a.txt"), 100);
    let sub = tmp.path().join("sub");
    fs::create_dir_all(sub.join("inner")).unwrap();
    write_bytes(&sub.join("c.rs"), 200);
    tmp
}

fn state_for(path: &Path) -> BrowserState {
    BrowserState::new(&ViewerConfig {
        root_path: path.to_path_buf(),
    })
}

fn row_names(state: &BrowserState) -> Vec<String> {
    state
        .visible_rows
        .iter()
        .map(|r| state.cell_text(&r.index, Column::Name))
        .collect()
}

fn row_of(state: &BrowserState, name: &str) -> usize {
    row_names(state)
        .iter()
        .position(|n| n == name)
        .unwrap_or_else(|| panic!("no visible row named {name}"))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[test]
fn initial_rows_are_top_level_entries() {
    let tmp = make_temp_tree();
    let state = state_for(tmp.path());

    assert_eq!(state.proxy.sort_column(), Some(Column::Name));
    assert_eq!(state.proxy.sort_order(), SortOrder::Ascending);
    assert_eq!(row_names(&state), ["a.txt", "B.txt", "sub"]);
    assert!(state.visible_rows.iter().all(|r| r.depth == 0 && !r.is_expanded));
    assert!(state.visible_rows[row_of(&state, "sub")].has_children);
    assert!(!state.visible_rows[row_of(&state, "a.txt")].has_children);
}

#[test]
fn toggle_expand_inserts_and_removes_children() {
    let tmp = make_temp_tree();
    let mut state = state_for(tmp.path());

    let sub = row_of(&state, "sub");
    state.toggle_expand(sub);
    assert_eq!(state.visible_rows.len(), 5);
    assert!(state.visible_rows[sub].is_expanded);
    assert_eq!(state.visible_rows[sub + 1].depth, 1);
    assert_eq!(state.visible_rows[sub + 2].depth, 1);

    state.toggle_expand(sub);
    assert_eq!(state.visible_rows.len(), 3);
    assert!(!state.visible_rows[sub].is_expanded);
}

#[test]
fn toggle_expand_ignores_leaves_and_bad_rows() {
    let tmp = make_temp_tree();
    let mut state = state_for(tmp.path());

    state.toggle_expand(row_of(&state, "a.txt"));
    state.toggle_expand(99);
    assert_eq!(state.visible_rows.len(), 3);
}

#[test]
fn header_click_sorts_then_flips() {
    let tmp = make_temp_tree();
    let mut state = state_for(tmp.path());

    state.sort_by(Column::Name);
    assert_eq!(state.proxy.sort_order(), SortOrder::Descending);
    assert_eq!(row_names(&state), ["sub", "B.txt", "a.txt"]);

    state.sort_by(Column::Name);
    assert_eq!(state.proxy.sort_order(), SortOrder::Ascending);
    assert_eq!(row_names(&state), ["a.txt", "B.txt", "sub"]);

    state.sort_by(Column::Size);
    assert_eq!(state.proxy.sort_column(), Some(Column::Size));
    assert_eq!(state.proxy.sort_order(), SortOrder::Ascending);
}

#[test]
fn type_sort_lists_directories_first() {
    let tmp = make_temp_tree();
    let mut state = state_for(tmp.path());

    state.sort_by(Column::Type);
    assert_eq!(row_names(&state), ["sub", "a.txt", "B.txt"]);
}

#[test]
fn sorting_keeps_expanded_directories_open() {
    let tmp = make_temp_tree();
    let mut state = state_for(tmp.path());

    state.toggle_expand(row_of(&state, "sub"));
    state.sort_by(Column::Name);

    assert_eq!(row_names(&state), ["sub", "inner", "c.rs", "B.txt", "a.txt"]);
    assert!(state.visible_rows[0].is_expanded);
}

#[test]
fn reset_to_missing_path_clears_rows_and_selection() {
    let tmp = make_temp_tree();
    let mut state = state_for(tmp.path());
    state.selected = Some(state.visible_rows[0].index);

    state.set_root_path(tmp.path().join("missing"));

    assert!(state.visible_rows.is_empty());
    assert!(state.selected.is_none());
    assert_eq!(state.model.row_count(None), 0);
}

#[test]
fn reset_to_new_directory_rebuilds_rows() {
    let tmp = make_temp_tree();
    let mut state = state_for(tmp.path());
    let old = state.visible_rows[0].index;

    state.set_root_path(tmp.path().join("sub"));

    assert_eq!(state.visible_rows.len(), 2);
    assert!(state.model.file_info(&old).is_none());
    assert_eq!(state.cell_text(&old, Column::Name), "");
}
