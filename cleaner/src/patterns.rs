//! Name patterns for the clean tool
//!
//! Patterns match a single file or directory name, never a full path.

use glob::{Pattern, PatternError};

/// Directories removed wherever they appear below the project root
pub const DIRS_TO_CLEAN: &[&str] = &["target", "coverage", ".criterion"];

/// Files removed wherever they appear below the project root
pub const FILES_TO_CLEAN: &[&str] = &[
    "*.profraw",
    "*.profdata",
    "lcov.info",
    "*.orig",
    "*.rej",
    "*.rs.bk",
];

/// Local configuration that is never removed, nor searched into
pub const PRESERVE_PATTERNS: &[&str] = &[
    ".env",
    ".env.*",
    ".envrc",
    ".tool-versions",
    ".editorconfig",
    ".vscode",
    ".idea",
    "*.local",
    "*.local.*",
    "rust-toolchain.toml",
];

/// Output of `cargo vendor`; only removed at the project root with `--all`
pub const VENDOR_DIR: &str = "vendor";

/// A set of glob patterns matched against entry names
#[derive(Debug, Clone)]
pub struct NameMatcher {
    patterns: Vec<Pattern>,
}

impl NameMatcher {
    pub fn new(patterns: &[&str]) -> Result<Self, PatternError> {
        let patterns = patterns
            .iter()
            .map(|p| Pattern::new(p))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    pub fn matches(&self, name: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(name))
    }
}
