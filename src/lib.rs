//! Adapter Patcher: collapses stray blank lines after adapter declarations.
//!
//! Scans the laboratory's library pages, finds `const x = new FooAdapter({ ... })`
//! declarations trailed by whitespace-only lines, and rewrites each file so
//! the declaration is followed by a single `)` and one newline.
//!
//! # Architecture
//!
//! A single sequential pipeline:
//!
//! - [`Locator`] expands a glob into an ordered list of files.
//! - [`Patcher`] reads each file and computes a [`FileEdit`] with one regex
//!   substitution; [`FileEdit::apply`] writes it back atomically.
//! - [`Reporter`] prints `Fixed <path>` per file and `Updated <N> files`.
//!
//! [`run`] ties them together and is what the binary calls.
//!
//! # Example
//!
//! ```no_run
//! use adapter_patcher::{run, PatcherConfig, Reporter};
//!
//! let config = PatcherConfig::default().with_root("/path/to/repo");
//! let mut reporter = Reporter::stdio(config.is_dry_run(), config.show_diff);
//!
//! match run(&config, &mut reporter) {
//!     Ok(summary) => eprintln!("{} changed", summary.changed),
//!     Err(e) => eprintln!("Patch failed: {}", e),
//! }
//! ```

pub mod config;
pub mod edit;
pub mod error;
pub mod locator;
pub mod patcher;
pub mod report;
pub mod run;
pub mod safety;

// Re-exports
pub use config::{FailurePolicy, PatcherConfig, RunMode, DEFAULT_GLOB};
pub use edit::{EditResult, FileEdit};
pub use error::PatchError;
pub use locator::{locate, Locator};
pub use patcher::{patch_text, Patched, Patcher, REPLACEMENT_TEMPLATE, SEARCH_PATTERN};
pub use report::{Reporter, RunSummary};
pub use run::run;
pub use safety::RootGuard;
