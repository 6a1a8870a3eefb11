/// Scan summary — counters and errors collected during one scan pass.
use super::error::ScanError;
use std::time::Duration;

/// Maximum number of individual errors kept in a summary.
///
/// `error_count` stays exact beyond this; only the detail list is capped so a
/// tree full of unreadable directories cannot grow the summary without bound.
pub const MAX_RECORDED_ERRORS: usize = 1_000;

/// Outcome statistics of a scan.
#[derive(Debug, Default)]
pub struct ScanSummary {
    /// Non-directory entries added to the tree.
    pub files: u64,
    /// Directory entries added to the tree, root included.
    pub dirs: u64,
    /// Entries left out because their parent directory was skipped.
    pub skipped: u64,
    /// Total errors, including ones not kept in `errors`.
    pub error_count: u64,
    /// First [`MAX_RECORDED_ERRORS`] errors in encounter order.
    pub errors: Vec<ScanError>,
    /// Wall-clock time of the scan.
    pub duration: Duration,
}

impl ScanSummary {
    /// Record a non-fatal error.
    pub fn record(&mut self, error: ScanError) {
        self.error_count += 1;
        if self.errors.len() < MAX_RECORDED_ERRORS {
            self.errors.push(error);
        }
    }

    /// Number of nodes the scan produced.
    pub fn entries(&self) -> u64 {
        self.files + self.dirs
    }
}
