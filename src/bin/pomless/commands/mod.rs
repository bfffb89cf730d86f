//! Command implementations

pub mod locate;
pub mod scan;
pub mod show;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use pomless::util::fs::normalize_path;

/// Resolve an optional path argument against the current directory.
pub fn target_dir(path: Option<PathBuf>) -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("failed to get current directory")?;
    let dir = match path {
        Some(p) if p.is_absolute() => p,
        Some(p) => cwd.join(p),
        None => cwd,
    };
    Ok(normalize_path(&dir))
}

/// Fail early with a plain error when a path argument is not a directory.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if !dir.is_dir() {
        anyhow::bail!("{} is not a directory", dir.display());
    }
    Ok(())
}
