//! Sequential driver: locate, patch, report.

use crate::config::{FailurePolicy, PatcherConfig};
use crate::edit::FileEdit;
use crate::error::PatchError;
use crate::locator::Locator;
use crate::patcher::Patcher;
use crate::report::{Reporter, RunSummary};
use crate::safety::RootGuard;
use std::io::Write;
use std::path::Path;

/// Process every located file in order and report the summary.
///
/// Fail-fast by default: the first error is returned and no summary is
/// printed. Files handled before the error stay patched.
pub fn run<W: Write, E: Write>(
    config: &PatcherConfig,
    reporter: &mut Reporter<W, E>,
) -> Result<RunSummary, PatchError> {
    let locator = Locator::new(config);
    tracing::info!(pattern = locator.pattern(), dry_run = config.is_dry_run(), "starting run");

    let paths = locator.locate()?;
    let guard = RootGuard::for_root(config.root.as_deref())?;
    let patcher = Patcher::new();
    let mut summary = RunSummary::default();

    for path in &paths {
        match process(config, &guard, &patcher, path) {
            Ok(edit) => {
                if edit.replacements > 0 {
                    summary.changed += 1;
                }
                summary.processed += 1;
                reporter
                    .file(path, &edit)
                    .map_err(|e| PatchError::io("<stdout>", e))?;
            }
            Err(err) if config.on_failure == FailurePolicy::KeepGoing => {
                tracing::warn!(path = %path.display(), error = %err, "skipping file");
                summary.skipped += 1;
                reporter
                    .skipped(path, &err)
                    .map_err(|e| PatchError::io("<stderr>", e))?;
            }
            Err(err) => return Err(err),
        }
    }

    reporter
        .summary(&summary)
        .map_err(|e| PatchError::io("<stdout>", e))?;
    Ok(summary)
}

fn process(
    config: &PatcherConfig,
    guard: &RootGuard,
    patcher: &Patcher,
    path: &Path,
) -> Result<FileEdit, PatchError> {
    // Read and write through symlinks: the rename lands on the real file
    let target = guard.validate_path(path)?;
    let edit = patcher.prepare(&target)?;
    if !config.is_dry_run() {
        let result = edit.apply()?;
        tracing::debug!(path = %result.file().display(), applied = result.is_applied(), "wrote");
    }
    Ok(edit)
}
