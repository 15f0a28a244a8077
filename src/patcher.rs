//! The adapter-declaration substitution.
//!
//! Matches a `const` binding initialised with `new <Name>Adapter({ ... })`
//! that is followed by one or more whitespace-only lines, and collapses it to
//! the declaration, a single `)`, and one newline.
//!
//! The object literal is matched with `[^}]*`, so a nested `}` ends the match
//! early at the first closing brace.

use crate::edit::{EditResult, FileEdit};
use crate::error::PatchError;
use regex::Regex;
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// The declaration (capture 1, through the first `}`), an optional call
/// closing `)`, the rest of its line, then one or more blank lines.
pub const SEARCH_PATTERN: &str =
    r"(const\s+\w+\s*=\s*new\s+\w+Adapter\(\{[^}]*\})\)?[^\S\n]*\n(?:[^\S\n]*\n)+";

/// Declaration, one closing paren, one newline.
pub const REPLACEMENT_TEMPLATE: &str = "${1})\n";

fn search_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(SEARCH_PATTERN).expect("SEARCH_PATTERN is a valid regex"))
}

/// Outcome of running the substitution over a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patched<'a> {
    pub text: Cow<'a, str>,
    pub replacements: usize,
}

impl Patched<'_> {
    pub fn is_changed(&self) -> bool {
        matches!(self.text, Cow::Owned(_))
    }
}

/// Replace every non-overlapping match in `content`, left to right.
pub fn patch_text(content: &str) -> Patched<'_> {
    let re = search_regex();
    let replacements = re.find_iter(content).count();
    if replacements == 0 {
        return Patched {
            text: Cow::Borrowed(content),
            replacements,
        };
    }
    Patched {
        text: re.replace_all(content, REPLACEMENT_TEMPLATE),
        replacements,
    }
}

/// Reads files and computes their patched form.
#[derive(Debug, Default, Clone, Copy)]
pub struct Patcher;

impl Patcher {
    pub fn new() -> Self {
        Self
    }

    /// Read `path` and compute the edit without writing anything.
    pub fn prepare(&self, path: impl AsRef<Path>) -> Result<FileEdit, PatchError> {
        let path = path.as_ref();
        let original = fs::read_to_string(path).map_err(|e| PatchError::io(path, e))?;
        let patched = patch_text(&original);
        tracing::debug!(
            path = %path.display(),
            replacements = patched.replacements,
            "prepared"
        );
        let replacements = patched.replacements;
        let patched = patched.text.into_owned();
        Ok(FileEdit::new(path, original, patched, replacements))
    }

    /// Read, transform, and write back `path`.
    pub fn patch_file(&self, path: impl AsRef<Path>) -> Result<EditResult, PatchError> {
        self.prepare(path)?.apply()
    }
}
