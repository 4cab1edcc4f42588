//! Command-line interface for combine-all.
//!
//! Combines the current directory (or the given root) into
//! `combined_code.txt` in the working directory.

use clap::Parser;
use combine_all::{CombineBuilder, ConsoleReporter, combine_with};
use std::path::PathBuf;
use std::process::exit;

/// combine-all — concatenate a source tree into one annotated file
#[derive(Parser)]
#[command(name = "combine-all", version, about, long_about = None)]
struct Cli {
    /// Root directory (default current dir)
    #[arg(default_value = ".")]
    root: PathBuf,
}

#[cfg(feature = "logging")]
fn init_logging() {
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    #[cfg(feature = "logging")]
    init_logging();

    let options = CombineBuilder::new(cli.root).build();
    let mut reporter = ConsoleReporter::stdio();
    match combine_with(&options, &mut reporter) {
        Ok(summary) => {
            if reporter.summary(&summary, &options.output).is_err() {
                eprintln!("Failed to write to stdout");
                exit(1);
            }
        }
        Err(e) => {
            reporter.fatal(&e).ok();
            exit(1);
        }
    }
}
