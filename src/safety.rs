use crate::error::PatchError;
use std::path::{Component, Path, PathBuf};

/// Directory names whose contents are never patched.
pub const FORBIDDEN_COMPONENTS: &[&str] = &["node_modules", ".git"];

/// Keeps located paths inside the search root.
///
/// The glob follows symlinks, so a link under the search tree could point a
/// rewrite anywhere on disk. Each path is canonicalized and checked before it
/// is read.
#[derive(Debug, Clone)]
pub struct RootGuard {
    /// Canonical search root
    root: PathBuf,
}

impl RootGuard {
    /// Create a guard for `root`. The root is canonicalized to handle
    /// symlinks correctly.
    pub fn new(root: impl AsRef<Path>) -> Result<Self, PatchError> {
        let root = root.as_ref();
        let root = root.canonicalize().map_err(|e| PatchError::io(root, e))?;
        Ok(Self { root })
    }

    /// Guard for the configured root, or the current directory.
    pub fn for_root(root: Option<&Path>) -> Result<Self, PatchError> {
        match root {
            Some(root) => Self::new(root),
            None => Self::new("."),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Check that `path` is safe to rewrite.
    ///
    /// Relative paths resolve against the current directory, the same way the
    /// glob produced them. Returns the canonical path.
    pub fn validate_path(&self, path: impl AsRef<Path>) -> Result<PathBuf, PatchError> {
        let path = path.as_ref();
        let canonical = path.canonicalize().map_err(|e| PatchError::io(path, e))?;

        if !canonical.starts_with(&self.root) {
            return Err(PatchError::OutsideRoot {
                path: canonical,
                root: self.root.clone(),
            });
        }

        let inside = canonical
            .strip_prefix(&self.root)
            .unwrap_or(canonical.as_path());
        for component in inside.components() {
            if let Component::Normal(name) = component {
                if let Some(forbidden) = FORBIDDEN_COMPONENTS.iter().find(|f| name == **f) {
                    return Err(PatchError::ForbiddenPath {
                        path: canonical.clone(),
                        component: (*forbidden).to_string(),
                    });
                }
            }
        }

        Ok(canonical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_path_inside_root() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("page.tsx");
        fs::write(&file, "").unwrap();

        let guard = RootGuard::new(dir.path()).unwrap();
        let validated = guard.validate_path(&file).unwrap();
        assert!(validated.starts_with(guard.root()));
    }

    #[test]
    fn test_path_outside_root() {
        let root = TempDir::new().unwrap();
        let other = TempDir::new().unwrap();
        let file = other.path().join("page.tsx");
        fs::write(&file, "").unwrap();

        let guard = RootGuard::new(root.path()).unwrap();
        let result = guard.validate_path(&file);
        assert!(matches!(result, Err(PatchError::OutsideRoot { .. })));
    }

    #[test]
    fn test_missing_path_is_io_error() {
        let dir = TempDir::new().unwrap();
        let guard = RootGuard::new(dir.path()).unwrap();
        let result = guard.validate_path(dir.path().join("missing.tsx"));
        assert!(matches!(result, Err(PatchError::Io { .. })));
    }

    #[test]
    fn test_forbidden_component() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("library/node_modules/pkg");
        fs::create_dir_all(&nested).unwrap();
        let file = nested.join("page.tsx");
        fs::write(&file, "").unwrap();

        let guard = RootGuard::new(dir.path()).unwrap();
        let result = guard.validate_path(&file);
        match result {
            Err(PatchError::ForbiddenPath { component, .. }) => {
                assert_eq!(component, "node_modules")
            }
            other => panic!("expected ForbiddenPath, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_escape_rejected() {
        let root = TempDir::new().unwrap();
        let outside = TempDir::new().unwrap();
        let target = outside.path().join("page.tsx");
        fs::write(&target, "").unwrap();

        let link = root.path().join("page.tsx");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let guard = RootGuard::new(root.path()).unwrap();
        let result = guard.validate_path(&link);
        assert!(matches!(result, Err(PatchError::OutsideRoot { .. })));
    }
}
