use crate::error::CombineError;
use crate::options::CombineOptions;
use crate::output::write_block;
use crate::report::{ConsoleReporter, Reporter};
use crate::types::{CombineSummary, SkipReason, SkippedFile};
use ignore::{DirEntry, WalkBuilder};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{self, Path, PathBuf};

/// Builds the walker for `options.root`.
///
/// Every entry is visited (no ignore files, hidden entries included) and
/// excluded directories are pruned before the walker descends into them.
/// Within a directory, files come first in name order, then each
/// subdirectory's subtree in name order.
fn walker(options: &CombineOptions) -> ignore::Walk {
    let rules = options.clone();
    let mut builder = WalkBuilder::new(&options.root);
    builder
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_path(|a, b| {
            a.is_dir()
                .cmp(&b.is_dir())
                .then_with(|| a.file_name().cmp(&b.file_name()))
        })
        .filter_entry(move |entry| {
            let pruned = entry.depth() > 0
                && entry.file_type().is_some_and(|t| t.is_dir())
                && entry.file_name().to_str().is_some_and(|n| rules.is_excluded_dir(n));
            #[cfg(feature = "logging")]
            if pruned {
                tracing::debug!("Pruning directory: {}", entry.path().display());
            }
            !pruned
        });
    builder.build()
}

/// Directories (real or linked) are never candidates; everything else is,
/// including dangling links, which then fail at read time.
fn is_candidate(entry: &DirEntry) -> bool {
    match entry.file_type() {
        Some(t) if t.is_dir() => false,
        Some(t) if t.is_symlink() => !entry.path().is_dir(),
        Some(_) => true,
        None => false,
    }
}

fn is_output(path: &Path, output: &Path, canonical_output: Option<&Path>) -> bool {
    if path::absolute(path).is_ok_and(|p| p == output) {
        return true;
    }
    canonical_output.is_some_and(|c| fs::canonicalize(path).is_ok_and(|p| p == c))
}

/// Reads the whole file as UTF-8 text.
fn read_text(path: &Path) -> Result<String, SkipReason> {
    let bytes = fs::read(path).map_err(SkipReason::Io)?;
    String::from_utf8(bytes).map_err(|e| SkipReason::Decode {
        binary: content_inspector::inspect(e.as_bytes()).is_binary(),
    })
}

fn walk_error_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.as_path()),
        ignore::Error::WithDepth { err, .. } => walk_error_path(err),
        ignore::Error::Loop { child, .. } => Some(child.as_path()),
        _ => None,
    }
}

/// Resolves the artifact location against the working directory.
pub fn resolve_output(options: &CombineOptions) -> Result<PathBuf, CombineError> {
    path::absolute(&options.output).map_err(|e| {
        CombineError::InvalidPath(format!("{}: {}", options.output.display(), e))
    })
}

/// Combines every selected file under `options.root` into the artifact,
/// printing progress to stdout and skip diagnostics to stderr.
pub fn combine(options: &CombineOptions) -> Result<CombineSummary, CombineError> {
    combine_with(options, &mut ConsoleReporter::stdio())
}

/// Same as [`combine`], sending progress events to `reporter`.
///
/// Only failing to create or write the artifact is an error. Files that
/// cannot be read or decoded are reported, recorded in
/// [`CombineSummary::skipped`] and left out. Directories the walker cannot
/// read are recorded there too, without a report.
pub fn combine_with<R: Reporter + ?Sized>(
    options: &CombineOptions,
    reporter: &mut R,
) -> Result<CombineSummary, CombineError> {
    let output = resolve_output(options)?;
    #[cfg(feature = "logging")]
    tracing::debug!(
        "Combining {} into {}",
        options.root.display(),
        output.display()
    );
    reporter.started(&output);

    let file = File::create(&output).map_err(|e| CombineError::create(&output, e))?;
    let canonical_output = fs::canonicalize(&output).ok();
    let mut writer = BufWriter::new(file);
    let mut summary = CombineSummary {
        output: output.clone(),
        added: Vec::new(),
        skipped: Vec::new(),
    };

    for result in walker(options) {
        let entry = match result {
            Ok(entry) => entry,
            // recorded, but not a per-file diagnostic
            Err(e) => {
                let path = walk_error_path(&e).unwrap_or(options.root.as_path()).to_path_buf();
                #[cfg(feature = "logging")]
                tracing::debug!("Walk error under {}: {}", path.display(), e);
                summary.skipped.push(SkippedFile {
                    path,
                    reason: SkipReason::Walk(e.to_string()),
                });
                continue;
            }
        };
        if !is_candidate(&entry) {
            continue;
        }
        let path = entry.path();
        let Some(name) = entry.file_name().to_str() else {
            #[cfg(feature = "logging")]
            tracing::debug!("Non UTF-8 file name, not selectable: {}", path.display());
            continue;
        };
        if options.is_excluded_file(name) || !options.is_selected(name) {
            continue;
        }
        if is_output(path, &output, canonical_output.as_deref()) {
            #[cfg(feature = "logging")]
            tracing::debug!("Skipping the output file itself: {}", path.display());
            continue;
        }
        match read_text(path) {
            Ok(content) => {
                write_block(&mut writer, &output, path, &content)?;
                reporter.added(path);
                summary.added.push(path.to_path_buf());
            }
            Err(reason) => {
                reporter.skipped(path, &reason);
                summary.skipped.push(SkippedFile {
                    path: path.to_path_buf(),
                    reason,
                });
            }
        }
    }

    writer
        .flush()
        .map_err(|e| CombineError::write(&output, e))?;
    #[cfg(feature = "logging")]
    tracing::debug!(
        "Combined {} files, skipped {}",
        summary.added.len(),
        summary.skipped.len()
    );
    Ok(summary)
}
