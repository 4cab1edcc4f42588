//! Artifact block format.
//!
//! Every included file becomes one block:
//!
//! ```text
//! ================================================================================
//! === FILE: ./src/main.py
//! ================================================================================
//!
//! <content>
//!
//! ```
//!
//! The layout is consumed by other tools and must stay byte-for-byte stable.

use crate::CombineError;
use std::borrow::Cow;
use std::io::Write;
use std::path::Path;

/// Width of the `=` rule lines around each header.
pub const RULE_WIDTH: usize = 80;

/// Renders one complete block for `path` with the given content.
pub fn format_block(path: &Path, content: &str) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let content = normalize_newlines(content);
    let mut out = String::with_capacity(content.len() + 2 * RULE_WIDTH + 64);
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!("=== FILE: {}\n", path.display()));
    out.push_str(&rule);
    out.push_str("\n\n");
    out.push_str(&content);
    out.push_str("\n\n");
    out
}

/// Appends the block for `path` to `writer` in a single write.
pub fn write_block<W: Write>(
    writer: &mut W,
    output: &Path,
    path: &Path,
    content: &str,
) -> Result<(), CombineError> {
    writer
        .write_all(format_block(path, content).as_bytes())
        .map_err(|e| CombineError::write(output, e))
}

/// Translates `\r\n` and lone `\r` into `\n`, matching a text-mode read.
pub fn normalize_newlines(content: &str) -> Cow<'_, str> {
    if !content.contains('\r') {
        return Cow::Borrowed(content);
    }
    Cow::Owned(content.replace("\r\n", "\n").replace('\r', "\n"))
}
