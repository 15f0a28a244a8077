use crate::error::PatchError;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Whole-file rewrite computed for one located path.
///
/// Holds both the text read from disk and the substituted text, so the same
/// value can be written, diffed, or only reported.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "FileEdit does nothing until apply() is called"]
pub struct FileEdit {
    pub file: PathBuf,
    pub original: String,
    pub patched: String,
    /// Number of substitutions that produced `patched`
    pub replacements: usize,
}

/// Result of applying a [`FileEdit`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "EditResult should be checked for applied/unchanged"]
pub enum EditResult {
    /// Content was rewritten with at least one substitution
    Applied { file: PathBuf, replacements: usize },
    /// No substitution matched; the file was rewritten with identical text
    Unchanged { file: PathBuf },
}

impl EditResult {
    pub fn file(&self) -> &Path {
        match self {
            EditResult::Applied { file, .. } | EditResult::Unchanged { file } => file,
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, EditResult::Applied { .. })
    }
}

impl FileEdit {
    pub fn new(
        file: impl Into<PathBuf>,
        original: impl Into<String>,
        patched: impl Into<String>,
        replacements: usize,
    ) -> Self {
        Self {
            file: file.into(),
            original: original.into(),
            patched: patched.into(),
            replacements,
        }
    }

    pub fn is_changed(&self) -> bool {
        self.original != self.patched
    }

    /// The result `apply()` would produce, without touching the filesystem.
    pub fn outcome(&self) -> EditResult {
        if self.replacements > 0 {
            EditResult::Applied {
                file: self.file.clone(),
                replacements: self.replacements,
            }
        } else {
            EditResult::Unchanged {
                file: self.file.clone(),
            }
        }
    }

    /// Write the patched text back to the file.
    ///
    /// The file is always rewritten, even when nothing matched.
    pub fn apply(&self) -> Result<EditResult, PatchError> {
        atomic_write(&self.file, self.patched.as_bytes())
            .map_err(|e| PatchError::io(&self.file, e))?;
        Ok(self.outcome())
    }
}

/// Atomic file write: tempfile + fsync + rename.
///
/// Either the full write succeeds or the original file is left in place.
/// A symlinked `path` is resolved first and its target is replaced.
fn atomic_write(path: &Path, content: &[u8]) -> std::io::Result<()> {
    // Write through symlinks so the link itself survives the rename
    let path = &path.canonicalize()?;
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        Some(_) => Path::new("."),
        None => {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path has no parent directory",
            ))
        }
    };

    // Keep the target's permissions across the rename
    let permissions = std::fs::metadata(path)?.permissions();

    let mut temp = tempfile::NamedTempFile::new_in(parent)?;
    temp.write_all(content)?;
    temp.as_file().sync_all()?;
    temp.as_file().set_permissions(permissions)?;
    temp.persist(path).map_err(|e| e.error)?;

    Ok(())
}
