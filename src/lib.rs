//! # combine-all
//!
//! `combine_all` walks a directory tree and concatenates the text of selected
//! files into one artifact, each file preceded by a fixed path header. The
//! result is a single flat document holding a snapshot of a codebase.
//!
//! Selection is driven by an immutable [`CombineOptions`] value: directory
//! names to prune, selectors (dotted extensions such as `.py` or full names
//! such as `Dockerfile`), and file names that are always skipped. The output
//! artifact never includes itself.
//!
//! # Features
//!
//! - `logging` (default): debug tracing of pruning and selection via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use combine_all::{CombineBuilder, Silent, combine_with};
//!
//! let options = CombineBuilder::new(".")
//!     .output("snapshot.txt")
//!     .exclude_dir("vendor")
//!     .include_selector("Makefile")
//!     .build();
//!
//! let summary = combine_with(&options, &mut Silent).expect("output not writable");
//! println!("{} files written to {}", summary.files_combined(), summary.output.display());
//! ```

mod engine;
mod error;
mod options;
pub mod output;
mod report;
mod types;

pub use engine::{combine, combine_with, resolve_output};
pub use error::CombineError;
pub use options::{
    CombineBuilder, CombineOptions, DEFAULT_EXCLUDED_DIRS, DEFAULT_EXCLUDED_FILES,
    DEFAULT_INCLUDED_SELECTORS, DEFAULT_OUTPUT, extension_of,
};
pub use report::{ConsoleReporter, Reporter, Silent};
pub use types::{CombineSummary, SkipReason, SkippedFile};
