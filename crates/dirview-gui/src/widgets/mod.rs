/// UI widgets for DirView.
pub mod status_bar;
pub mod toolbar;
pub mod tree_view;
