use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a run. Per-file problems are reported as
/// [`SkippedFile`](crate::SkippedFile) values instead.
#[derive(Debug, Error)]
pub enum CombineError {
    #[error("Could not write to output file {path}: {source}")]
    CreateOutput {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Write to output file {path} failed: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid path: {0}")]
    InvalidPath(String),
}
impl CombineError {
    pub(crate) fn create(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CombineError::CreateOutput {
            path: path.into(),
            source,
        }
    }
    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CombineError::Write {
            path: path.into(),
            source,
        }
    }
}
