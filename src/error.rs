use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatchError {
    #[error("File I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Path is outside search root: {path} (root: {root})")]
    OutsideRoot { path: PathBuf, root: PathBuf },

    #[error("Path is in forbidden directory: {path} (forbidden: {component})")]
    ForbiddenPath { path: PathBuf, component: String },
}

impl PatchError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PatchError::Io {
            path: path.into(),
            source,
        }
    }

    /// Path the error refers to, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            PatchError::Io { path, .. }
            | PatchError::OutsideRoot { path, .. }
            | PatchError::ForbiddenPath { path, .. } => Some(path),
            PatchError::Pattern(_) => None,
        }
    }
}

impl From<glob::GlobError> for PatchError {
    fn from(err: glob::GlobError) -> Self {
        let path = err.path().to_path_buf();
        PatchError::io(path, err.into_error())
    }
}
