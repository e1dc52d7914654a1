//! Project cleaning
//!
//! Finds build artifacts below a project root, then removes them (or only
//! reports them in dry-run mode).

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::patterns::{
    NameMatcher, DIRS_TO_CLEAN, FILES_TO_CLEAN, PRESERVE_PATTERNS, VENDOR_DIR,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct CleanOptions {
    /// Report only, delete nothing
    pub dry_run: bool,
    /// Also remove `vendor/` at the project root
    pub include_vendor: bool,
}

/// What a clean run would remove
#[derive(Debug, Default)]
pub struct CleanPlan {
    pub dirs: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
}

impl CleanPlan {
    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty() && self.files.is_empty()
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CleanReport {
    /// Bytes freed, or that would be freed in dry-run mode
    pub bytes: u64,
    /// Entries that could not be removed
    pub failures: usize,
}

pub struct Cleaner {
    dirs: NameMatcher,
    files: NameMatcher,
    preserve: NameMatcher,
}

impl Cleaner {
    pub fn with_defaults() -> anyhow::Result<Self> {
        Ok(Self {
            dirs: NameMatcher::new(DIRS_TO_CLEAN)?,
            files: NameMatcher::new(FILES_TO_CLEAN)?,
            preserve: NameMatcher::new(PRESERVE_PATTERNS)?,
        })
    }

    /// Walk `root` and collect everything that should be removed
    ///
    /// Matched directories are not searched further, so nothing inside them
    /// is listed twice. Preserved entries and `vendor/` are never entered.
    pub fn plan(&self, root: &Path, include_vendor: bool) -> CleanPlan {
        let mut plan = CleanPlan::default();
        let mut walker = WalkDir::new(root).min_depth(1).into_iter();

        while let Some(entry) = walker.next() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };
            let name = entry.file_name().to_string_lossy();
            let file_type = entry.file_type();

            if self.preserve.matches(&name) {
                if file_type.is_dir() {
                    walker.skip_current_dir();
                }
                continue;
            }

            if file_type.is_dir() {
                if name == VENDOR_DIR {
                    if include_vendor && entry.depth() == 1 {
                        plan.dirs.push(entry.path().to_path_buf());
                    }
                    walker.skip_current_dir();
                } else if self.dirs.matches(&name) {
                    plan.dirs.push(entry.path().to_path_buf());
                    walker.skip_current_dir();
                }
            } else if file_type.is_file() && self.files.matches(&name) {
                plan.files.push(entry.path().to_path_buf());
            }
        }

        plan.dirs.sort();
        plan.files.sort();
        tracing::debug!(
            dirs = plan.dirs.len(),
            files = plan.files.len(),
            "Planned clean of {}",
            root.display()
        );
        plan
    }

    /// Plan and apply a clean of `root`, writing a human-readable report to `out`
    pub fn run<W: Write>(
        &self,
        root: &Path,
        options: CleanOptions,
        out: &mut W,
    ) -> io::Result<CleanReport> {
        writeln!(out, "Cleaning project: {}", root.display())?;
        writeln!(out)?;

        if options.include_vendor {
            writeln!(out, "--all set: {}/ will also be removed", VENDOR_DIR)?;
            writeln!(out)?;
        }

        let plan = self.plan(root, options.include_vendor);
        if plan.is_empty() {
            writeln!(out, "Already clean! Nothing to remove.")?;
            return Ok(CleanReport::default());
        }

        let report = apply(root, &plan, options.dry_run, out)?;

        if options.dry_run {
            writeln!(
                out,
                "Dry run complete. Would free {}",
                format_size(report.bytes)
            )?;
            writeln!(out, "   Run without --dry-run to actually delete these files.")?;
        } else {
            writeln!(out, "Cleaned! Freed {}", format_size(report.bytes))?;
        }
        if report.failures > 0 {
            tracing::warn!("{} entries could not be removed", report.failures);
        }

        Ok(report)
    }
}

fn apply<W: Write>(
    root: &Path,
    plan: &CleanPlan,
    dry_run: bool,
    out: &mut W,
) -> io::Result<CleanReport> {
    let mut report = CleanReport::default();

    if !plan.dirs.is_empty() {
        writeln!(out, "Directories to remove:")?;
        for dir in &plan.dirs {
            let rel = dir.strip_prefix(root).unwrap_or(dir);
            let size = dir_size(dir);
            report.bytes += size;
            writeln!(out, "   {}/ ({})", rel.display(), format_size(size))?;

            if !dry_run {
                if let Err(e) = fs::remove_dir_all(dir) {
                    tracing::warn!("Failed to remove {}: {}", rel.display(), e);
                    report.failures += 1;
                }
            }
        }
        writeln!(out)?;
    }

    if !plan.files.is_empty() {
        writeln!(out, "Files to remove:")?;
        for file in &plan.files {
            let rel = file.strip_prefix(root).unwrap_or(file);
            let size = fs::metadata(file).map(|m| m.len()).unwrap_or(0);
            report.bytes += size;
            writeln!(out, "   {} ({})", rel.display(), format_size(size))?;

            if !dry_run {
                if let Err(e) = fs::remove_file(file) {
                    tracing::warn!("Failed to remove {}: {}", rel.display(), e);
                    report.failures += 1;
                }
            }
        }
        writeln!(out)?;
    }

    Ok(report)
}

/// Nearest ancestor of `start` holding a workspace `Cargo.toml`
///
/// Falls back to the nearest ancestor with any `Cargo.toml`, then to `start`.
pub fn find_project_root(start: &Path) -> PathBuf {
    let mut nearest_manifest = None;

    for dir in start.ancestors() {
        let manifest = dir.join("Cargo.toml");
        if !manifest.is_file() {
            continue;
        }
        if is_workspace_manifest(&manifest) {
            return dir.to_path_buf();
        }
        if nearest_manifest.is_none() {
            nearest_manifest = Some(dir.to_path_buf());
        }
    }

    nearest_manifest.unwrap_or_else(|| start.to_path_buf())
}

fn is_workspace_manifest(path: &Path) -> bool {
    fs::read_to_string(path)
        .ok()
        .and_then(|s| s.parse::<toml::Table>().ok())
        .is_some_and(|t| t.contains_key("workspace"))
}

/// Total size of the regular files below `path`; unreadable entries count as zero
fn dir_size(path: &Path) -> u64 {
    WalkDir::new(path)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| e.metadata().ok())
        .map(|m| m.len())
        .sum()
}

pub fn format_size(bytes: u64) -> String {
    let mut size = bytes as f64;
    for unit in ["B", "KB", "MB", "GB"] {
        if size < 1024.0 {
            return format!("{:.1} {}", size, unit);
        }
        size /= 1024.0;
    }
    format!("{:.1} TB", size)
}
