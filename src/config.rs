//! Run configuration: where to look, what to match, and how to apply.

use std::path::PathBuf;

/// Files the patcher targets when no `--glob` is given.
pub const DEFAULT_GLOB: &str = "apps/laboratory/app/library/**/page.tsx";

/// How located files are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    /// Rewrite every located file.
    #[default]
    Apply,
    /// Compute and report changes without touching the filesystem.
    DryRun,
}

/// What to do when a single file fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Abort the run on the first error.
    #[default]
    FailFast,
    /// Log the error, report the file as skipped, continue.
    KeepGoing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatcherConfig {
    /// Directory the glob is resolved against. `None` means the current
    /// working directory, with paths reported relative to it.
    pub root: Option<PathBuf>,
    pub glob: String,
    pub mode: RunMode,
    pub on_failure: FailurePolicy,
    /// Emit a unified diff for each changed file.
    pub show_diff: bool,
}

impl Default for PatcherConfig {
    fn default() -> Self {
        Self {
            root: None,
            glob: DEFAULT_GLOB.to_string(),
            mode: RunMode::default(),
            on_failure: FailurePolicy::default(),
            show_diff: false,
        }
    }
}

impl PatcherConfig {
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    pub fn with_glob(mut self, glob: impl Into<String>) -> Self {
        self.glob = glob.into();
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.mode = if dry_run {
            RunMode::DryRun
        } else {
            RunMode::Apply
        };
        self
    }

    pub fn keep_going(mut self, keep_going: bool) -> Self {
        self.on_failure = if keep_going {
            FailurePolicy::KeepGoing
        } else {
            FailurePolicy::FailFast
        };
        self
    }

    pub fn show_diff(mut self, show_diff: bool) -> Self {
        self.show_diff = show_diff;
        self
    }

    pub fn is_dry_run(&self) -> bool {
        self.mode == RunMode::DryRun
    }
}
