//! Example App clean tool
//!
//! Removes build artifacts and temporary files from the workspace while
//! keeping local configuration such as `.env` files and editor settings.
//!
//! Usage:
//!   clean              # remove all temporary files
//!   clean --dry-run    # preview what would be deleted
//!   clean --all        # also remove vendor/

mod clean;
mod patterns;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use clean::{find_project_root, CleanOptions, Cleaner};

#[derive(Debug, Parser)]
#[command(
    name = "clean",
    version,
    about = "Remove temporary and ignored files from the project",
    after_help = "Preserved files (never deleted):\n    \
                  .env, .env.*, .envrc, .tool-versions, .editorconfig,\n    \
                  .vscode/, .idea/, *.local, *.local.*, rust-toolchain.toml"
)]
struct Cli {
    /// Show what would be deleted without actually deleting
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Also remove the vendor/ directory (use with caution!)
    #[arg(short, long)]
    all: bool,

    /// Where to start looking for the project root (defaults to the current directory)
    #[arg(long)]
    root: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let start = match cli.root {
        Some(root) => root,
        None => std::env::current_dir().context("Failed to read current directory")?,
    };
    let root = find_project_root(&start);
    tracing::info!("Project root: {}", root.display());

    let cleaner = Cleaner::with_defaults()?;
    let options = CleanOptions {
        dry_run: cli.dry_run,
        include_vendor: cli.all,
    };

    let mut stdout = std::io::stdout().lock();
    cleaner
        .run(&root, options, &mut stdout)
        .context("Failed to write clean report")?;

    Ok(())
}
