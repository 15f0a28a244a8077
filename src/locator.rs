//! File discovery by glob expansion.

use crate::config::PatcherConfig;
use crate::error::PatchError;
use std::path::{Path, PathBuf};

/// Expands the configured glob into the files to patch.
#[derive(Debug, Clone)]
pub struct Locator {
    pattern: String,
}

impl Locator {
    /// Build the effective pattern for `config`.
    ///
    /// Without a root the glob is used verbatim, so it resolves against the
    /// current directory and yields paths like `apps/laboratory/...`. With a
    /// root, the root is escaped (it is a literal path, not a pattern) and
    /// prefixed.
    pub fn new(config: &PatcherConfig) -> Self {
        let pattern = match &config.root {
            None => config.glob.clone(),
            Some(root) => {
                let escaped = glob::Pattern::escape(&root.to_string_lossy());
                Path::new(&escaped)
                    .join(&config.glob)
                    .to_string_lossy()
                    .into_owned()
            }
        };
        Self { pattern }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Paths matching the pattern, in glob order.
    pub fn locate(&self) -> Result<Vec<PathBuf>, PatchError> {
        locate(&self.pattern)
    }
}

/// Wildcards never match a leading `.`, so `**` does not descend into
/// hidden directories such as `.cache` or `.next`.
fn match_options() -> glob::MatchOptions {
    glob::MatchOptions {
        require_literal_leading_dot: true,
        ..glob::MatchOptions::new()
    }
}

/// Expand `pattern` against the filesystem.
///
/// Missing directories produce an empty result rather than an error.
pub fn locate(pattern: &str) -> Result<Vec<PathBuf>, PatchError> {
    let mut paths = Vec::new();
    for entry in glob::glob_with(pattern, match_options())? {
        let path = entry?;
        tracing::debug!(path = %path.display(), "located");
        paths.push(path);
    }
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_locates_matching_files_at_any_depth() {
        let dir = TempDir::new().unwrap();
        let lib = "apps/laboratory/app/library";
        touch(dir.path(), &format!("{lib}/page.tsx"));
        touch(dir.path(), &format!("{lib}/wagmi/page.tsx"));
        touch(dir.path(), &format!("{lib}/ethers/siwe/deep/page.tsx"));
        // Non-matching: wrong name, wrong tree
        touch(dir.path(), &format!("{lib}/wagmi/layout.tsx"));
        touch(dir.path(), &format!("{lib}/wagmi/page.ts"));
        touch(dir.path(), "apps/laboratory/app/core/page.tsx");
        touch(dir.path(), "apps/other/app/library/page.tsx");

        let config = PatcherConfig::default().with_root(dir.path());
        let paths = Locator::new(&config).locate().unwrap();

        let mut relative: Vec<_> = paths
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();
        relative.sort();

        assert_eq!(
            relative,
            vec![
                PathBuf::from(format!("{lib}/ethers/siwe/deep/page.tsx")),
                PathBuf::from(format!("{lib}/page.tsx")),
                PathBuf::from(format!("{lib}/wagmi/page.tsx")),
            ]
        );
    }

    #[test]
    fn test_hidden_directories_are_not_searched() {
        let dir = TempDir::new().unwrap();
        let lib = "apps/laboratory/app/library";
        touch(dir.path(), &format!("{lib}/wagmi/page.tsx"));
        touch(dir.path(), &format!("{lib}/.cache/wagmi/page.tsx"));
        touch(dir.path(), &format!("{lib}/wagmi/.next/page.tsx"));

        let config = PatcherConfig::default().with_root(dir.path());
        let paths = Locator::new(&config).locate().unwrap();

        assert_eq!(paths, vec![dir.path().join(format!("{lib}/wagmi/page.tsx"))]);
    }

    #[test]
    fn test_hidden_root_is_still_literal() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join(".checkout");
        touch(&root, "apps/laboratory/app/library/page.tsx");

        let config = PatcherConfig::default().with_root(&root);
        let paths = Locator::new(&config).locate().unwrap();
        assert_eq!(paths.len(), 1);
    }

    #[test]
    fn test_missing_directories_yield_nothing() {
        let dir = TempDir::new().unwrap();
        let config = PatcherConfig::default().with_root(dir.path());
        let paths = Locator::new(&config).locate().unwrap();
        assert!(paths.is_empty());
    }

    #[test]
    fn test_results_are_ordered() {
        let dir = TempDir::new().unwrap();
        let lib = "apps/laboratory/app/library";
        touch(dir.path(), &format!("{lib}/solana/page.tsx"));
        touch(dir.path(), &format!("{lib}/bitcoin/page.tsx"));
        touch(dir.path(), &format!("{lib}/ethers/page.tsx"));

        let config = PatcherConfig::default().with_root(dir.path());
        let paths = Locator::new(&config).locate().unwrap();
        let mut sorted = paths.clone();
        sorted.sort();
        assert_eq!(paths, sorted);
    }

    #[test]
    fn test_root_with_glob_metacharacters_is_literal() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("weird[1]");
        touch(&root, "apps/laboratory/app/library/page.tsx");

        let config = PatcherConfig::default().with_root(&root);
        let paths = Locator::new(&config).locate().unwrap();
        assert_eq!(paths.len(), 1);
    }

    #[test]
    fn test_default_pattern_without_root() {
        let locator = Locator::new(&PatcherConfig::default());
        assert_eq!(locator.pattern(), "apps/laboratory/app/library/**/page.tsx");
    }

    #[test]
    fn test_invalid_pattern() {
        let result = locate("apps/***/page.tsx");
        assert!(matches!(result, Err(PatchError::Pattern(_))));
    }
}
