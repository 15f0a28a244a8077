use adapter_patcher::{run, PatcherConfig, Reporter, DEFAULT_GLOB};
use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "adapter-patcher")]
#[command(
    about = "Collapse blank lines after adapter declarations in laboratory pages",
    long_about = None
)]
#[command(version)]
struct Cli {
    /// Directory the glob is resolved against (defaults to the current directory)
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// Files to patch
    #[arg(short, long, default_value = DEFAULT_GLOB)]
    glob: String,

    /// Dry run - show what would be changed without modifying files
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Show unified diff of changes
    #[arg(short, long)]
    diff: bool,

    /// Skip files that fail instead of aborting the run
    #[arg(short, long)]
    keep_going: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = PatcherConfig::default()
        .with_glob(cli.glob)
        .dry_run(cli.dry_run)
        .keep_going(cli.keep_going)
        .show_diff(cli.diff);
    if let Some(root) = cli.root {
        config = config.with_root(root);
    }

    if config.is_dry_run() {
        eprintln!("{}", "Dry run: no files will be written".dimmed());
    }

    let mut reporter = Reporter::stdio(config.is_dry_run(), config.show_diff);
    let summary = run(&config, &mut reporter).context("Patching failed")?;

    if summary.skipped > 0 {
        anyhow::bail!("{} file(s) could not be patched", summary.skipped);
    }

    Ok(())
}

/// Diagnostics go to stderr; stdout carries only the report.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
