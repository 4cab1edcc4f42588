use std::fmt;
use std::io;
use std::path::PathBuf;

/// Why a candidate file was left out of the artifact.
#[derive(Debug)]
pub enum SkipReason {
    /// The bytes are not valid UTF-8.
    Decode {
        /// Whether the content looked like binary data rather than mis-encoded text.
        binary: bool,
    },
    /// Opening or reading the file failed.
    Io(io::Error),
    /// The walker could not read a directory entry.
    Walk(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Decode { binary: false } => f.write_str("UnicodeDecodeError"),
            SkipReason::Decode { binary: true } => f.write_str("UnicodeDecodeError, binary content"),
            SkipReason::Io(e) => write!(f, "Error: {}", e),
            SkipReason::Walk(msg) => write!(f, "Error: {}", msg),
        }
    }
}

/// A file that matched the selection rules but could not be included.
#[derive(Debug)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: SkipReason,
}

/// The outcome of a completed combine run.
#[derive(Debug)]
pub struct CombineSummary {
    /// Absolute path of the written artifact.
    pub output: PathBuf,
    /// Paths written to the artifact, in order.
    pub added: Vec<PathBuf>,
    pub skipped: Vec<SkippedFile>,
}

impl CombineSummary {
    pub fn files_combined(&self) -> usize {
        self.added.len()
    }
}
