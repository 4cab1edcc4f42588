//! Progress reporting for combine runs.

use crate::{CombineError, CombineSummary, SkipReason};
use std::io::{self, Stderr, Stdout, Write};
use std::path::Path;

/// Receives progress events while [`combine_with`](crate::combine_with) runs.
pub trait Reporter {
    fn started(&mut self, _output: &Path) {}
    fn added(&mut self, _path: &Path) {}
    fn skipped(&mut self, _path: &Path, _reason: &SkipReason) {}
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;
impl Reporter for Silent {}

/// Human-readable progress: banner and added lines on one stream, skip
/// diagnostics on another.
#[derive(Debug)]
pub struct ConsoleReporter<O: Write, E: Write> {
    out: O,
    err: E,
}

impl ConsoleReporter<Stdout, Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> ConsoleReporter<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }

    /// Prints the closing block. `display_output` is the output as configured.
    pub fn summary(&mut self, summary: &CombineSummary, display_output: &Path) -> io::Result<()> {
        let bar = "-".repeat(40);
        writeln!(self.out, "\n{}", bar)?;
        writeln!(self.out, "      File combination complete!      ")?;
        writeln!(self.out, "{}", bar)?;
        writeln!(self.out, "Total files combined: {}", summary.files_combined())?;
        writeln!(self.out, "Output saved to: {}", display_output.display())?;
        writeln!(self.out, "{}", bar)?;
        self.out.flush()
    }

    pub fn fatal(&mut self, error: &CombineError) -> io::Result<()> {
        match error {
            CombineError::CreateOutput { path, source } | CombineError::Write { path, source } => {
                writeln!(
                    self.err,
                    "\nError: Could not write to output file {}.",
                    path.display()
                )?;
                writeln!(self.err, "Reason: {}", source)?;
            }
            CombineError::InvalidPath(_) => writeln!(self.err, "\nError: {}", error)?,
        }
        self.err.flush()
    }

    fn banner(&mut self, output: &Path) -> io::Result<()> {
        writeln!(self.out, "Starting file combination process...")?;
        writeln!(self.out, "Output will be saved to: {}", output.display())
    }
}

/// Progress lines are best effort and never interrupt a run.
impl<O: Write, E: Write> Reporter for ConsoleReporter<O, E> {
    fn started(&mut self, output: &Path) {
        self.banner(output).ok();
    }
    fn added(&mut self, path: &Path) {
        writeln!(self.out, "  + Added: {}", path.display()).ok();
    }
    fn skipped(&mut self, path: &Path, reason: &SkipReason) {
        writeln!(self.err, "  ! Skipped ({}): {}", reason, path.display()).ok();
    }
}
