/// Scanner module — eager, depth-first directory walk.
///
/// The walk runs to completion on the calling thread and builds a fresh
/// [`FileTree`]. It uses a serial `jwalk` walker with sorting disabled, so
/// children appear in the order the filesystem enumerates them and every
/// directory is yielded before its contents.
///
/// Failures never abort the scan: a bad root yields an empty tree, and any
/// entry that cannot be read is skipped, logged and recorded in the
/// [`ScanSummary`].
pub mod error;
pub mod summary;

pub use error::ScanError;
pub use summary::{ScanSummary, MAX_RECORDED_ERRORS};

use crate::model::{EntryInfo, FileTree, NodeIndex};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

/// A finished scan: the tree plus what happened while building it.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub tree: FileTree,
    pub summary: ScanSummary,
}

/// Scan `root_path` and everything below it.
///
/// If `root_path` is not an existing directory the returned tree is empty
/// (no root) and the reason is logged and recorded in the summary.
pub fn scan_directory(root_path: &Path) -> ScanOutcome {
    let start = Instant::now();
    let mut outcome = ScanOutcome::default();

    let (root_abs, root_info) = match resolve_root(root_path) {
        Ok(root) => root,
        Err(err) => {
            warn!("{err}");
            outcome.summary.record(err);
            outcome.summary.duration = start.elapsed();
            return outcome;
        }
    };

    info!("Scanning {}", root_abs.display());

    let tree = &mut outcome.tree;
    let summary = &mut outcome.summary;

    let root_idx = tree.set_root(root_info);
    summary.dirs = 1;

    // Directory path -> arena index. Scan-lifetime only.
    let mut dir_map: HashMap<PathBuf, NodeIndex> = HashMap::new();
    dir_map.insert(root_abs.clone(), root_idx);

    let walker = jwalk::WalkDir::new(&root_abs)
        .sort(false)
        .skip_hidden(false)
        .follow_links(false)
        .parallelism(jwalk::Parallelism::Serial);

    for entry_result in walker {
        let entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                let path = err.path().map(Path::to_path_buf).unwrap_or_default();
                let err = ScanError::Walk {
                    path,
                    message: err.to_string(),
                };
                warn!("Skipping: {err}");
                summary.record(err);
                continue;
            }
        };

        let path = entry.path();

        // The root node already exists; only its listing outcome matters.
        if entry.depth == 0 {
            record_read_error(summary, &path, entry.read_children_error.as_ref());
            continue;
        }

        let parent_idx = match path.parent().and_then(|p| dir_map.get(p)) {
            Some(&idx) => idx,
            None => {
                // Parent was skipped, so this entry has nowhere to attach.
                debug!("Orphaned entry skipped: {}", path.display());
                summary.skipped += 1;
                continue;
            }
        };

        let meta = match std::fs::symlink_metadata(&path) {
            Ok(meta) => meta,
            Err(source) => {
                let err = ScanError::Metadata { path, source };
                warn!("Skipping: {err}");
                summary.record(err);
                continue;
            }
        };

        let file_name = entry.file_name().to_string_lossy();
        let info = EntryInfo::from_metadata(&path, &file_name, &meta);
        let is_dir = info.is_dir;
        let idx = tree.add_child(parent_idx, info);

        if is_dir {
            // A directory whose listing failed stays in the tree with no children.
            record_read_error(summary, &path, entry.read_children_error.as_ref());
            dir_map.insert(path, idx);
            summary.dirs += 1;
        } else {
            summary.files += 1;
        }
    }

    summary.duration = start.elapsed();
    info!(
        "Scan of {} complete: {} files, {} dirs, {} errors in {:?}",
        root_abs.display(),
        summary.files,
        summary.dirs,
        summary.error_count,
        summary.duration
    );

    outcome
}

/// Record a failed directory listing. jwalk yields the directory itself as
/// `Ok` and reports the failure in `read_children_error`.
fn record_read_error(summary: &mut ScanSummary, path: &Path, error: Option<&jwalk::Error>) {
    if let Some(err) = error {
        let err = ScanError::Walk {
            path: path.to_path_buf(),
            message: err.to_string(),
        };
        warn!("Skipping contents: {err}");
        summary.record(err);
    }
}

/// Canonicalise the root and take its metadata snapshot.
fn resolve_root(root_path: &Path) -> Result<(PathBuf, EntryInfo), ScanError> {
    let abs = std::fs::canonicalize(root_path)
        .map_err(|_| ScanError::RootNotFound(root_path.to_path_buf()))?;
    let meta =
        std::fs::metadata(&abs).map_err(|_| ScanError::RootNotFound(root_path.to_path_buf()))?;
    if !meta.is_dir() {
        return Err(ScanError::NotADirectory(abs));
    }
    let name = root_display_name(&abs);
    let info = EntryInfo::from_metadata(&abs, &name, &meta);
    Ok((abs, info))
}

/// Derive a display name for the scan root: the last component, or the
/// whole path for filesystem roots such as `/`.
fn root_display_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.to_string_lossy().into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_display_name() {
        assert_eq!(root_display_name(Path::new("/home/user/docs")), "docs");
        assert_eq!(root_display_name(Path::new("/")), "/");
    }

    #[test]
    fn test_missing_root_yields_empty_tree() {
        let outcome = scan_directory(Path::new("/definitely/not/a/real/path/dirview"));
        assert!(outcome.tree.is_empty());
        assert!(outcome.tree.root.is_none());
        assert_eq!(outcome.summary.error_count, 1);
        assert!(matches!(
            outcome.summary.errors[0],
            ScanError::RootNotFound(_)
        ));
    }
}
