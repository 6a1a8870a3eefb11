/// Errors encountered while scanning. None of these abort the process:
/// the scanner logs them, records them in the [`ScanSummary`](super::ScanSummary)
/// and carries on (or returns an empty tree for a bad root).
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    /// The configured root does not exist or cannot be resolved.
    #[error("path does not exist: {}", .0.display())]
    RootNotFound(PathBuf),

    /// The configured root exists but is a file.
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// A directory listing failed (typically access denied).
    #[error("cannot read {}: {message}", path.display())]
    Walk { path: PathBuf, message: String },

    /// An entry disappeared or could not be stat'ed between listing and metadata read.
    #[error("cannot read metadata for {}: {source}", path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    /// The path the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::RootNotFound(p) | Self::NotADirectory(p) => p,
            Self::Walk { path, .. } | Self::Metadata { path, .. } => path,
        }
    }
}
