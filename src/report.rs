//! Progress and summary lines.
//!
//! One line per processed file, then one summary line. The writers are
//! generic so the driver can be exercised against in-memory buffers.

use crate::edit::FileEdit;
use crate::error::PatchError;
use colored::Colorize;
use similar::{ChangeTag, TextDiff};
use std::io::{self, Write};
use std::path::Path;

/// Totals for a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Files located and processed (changed or not)
    pub processed: usize,
    /// Files where at least one substitution matched
    pub changed: usize,
    /// Files that failed in keep-going mode
    pub skipped: usize,
}

pub struct Reporter<W: Write, E: Write> {
    out: W,
    err: E,
    dry_run: bool,
    show_diff: bool,
}

impl Reporter<io::Stdout, io::Stderr> {
    pub fn stdio(dry_run: bool, show_diff: bool) -> Self {
        Self::new(io::stdout(), io::stderr(), dry_run, show_diff)
    }
}

impl<W: Write, E: Write> Reporter<W, E> {
    pub fn new(out: W, err: E, dry_run: bool, show_diff: bool) -> Self {
        Self {
            out,
            err,
            dry_run,
            show_diff,
        }
    }

    /// Report one processed file under its located `path`, followed by its
    /// diff when enabled.
    pub fn file(&mut self, path: &Path, edit: &FileEdit) -> io::Result<()> {
        let verb = if self.dry_run { "Would fix" } else { "Fixed" };
        writeln!(self.out, "{} {}", verb, path.display())?;
        if self.show_diff && edit.is_changed() {
            write_diff(&mut self.out, path, &edit.original, &edit.patched)?;
        }
        Ok(())
    }

    pub fn skipped(&mut self, path: &Path, error: &PatchError) -> io::Result<()> {
        writeln!(
            self.err,
            "{}",
            format!("Skipped {}: {}", path.display(), error).yellow()
        )
    }

    pub fn summary(&mut self, summary: &RunSummary) -> io::Result<()> {
        let verb = if self.dry_run { "Would update" } else { "Updated" };
        if summary.skipped > 0 {
            writeln!(
                self.out,
                "{} {} files ({} skipped)",
                verb, summary.processed, summary.skipped
            )?;
        } else {
            writeln!(self.out, "{} {} files", verb, summary.processed)?;
        }
        self.out.flush()
    }

    pub fn into_inner(self) -> (W, E) {
        (self.out, self.err)
    }
}

/// Unified line diff between original and patched content.
fn write_diff(out: &mut impl Write, file: &Path, original: &str, patched: &str) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        format!("--- {} (original)", file.display()).dimmed()
    )?;
    writeln!(out, "{}", format!("+++ {} (patched)", file.display()).dimmed())?;

    let diff = TextDiff::from_lines(original, patched);
    for change in diff.iter_all_changes() {
        let line = match change.tag() {
            ChangeTag::Delete => format!("-{}", change).red(),
            ChangeTag::Insert => format!("+{}", change).green(),
            ChangeTag::Equal => format!(" {}", change).normal(),
        };
        write!(out, "{}", line)?;
        if change.missing_newline() {
            writeln!(out)?;
        }
    }
    Ok(())
}
