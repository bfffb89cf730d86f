//! Synthesize every descriptor project below a directory.
//!
//! Sibling projects usually share their ancestors, so one synthesizer with a
//! parent cache is used for the whole walk.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::core::descriptor::DescriptorKind;
use crate::core::ProjectModel;
use crate::reader::ModelError;
use crate::util::config::Config;
use crate::util::fs::relative_path;

use super::show::synthesizer_for;

/// Options for `scan`.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Directory to walk
    pub root: PathBuf,
}

/// Outcome for one project directory.
#[derive(Debug)]
pub struct ScanEntry {
    /// Project directory relative to the scan root
    pub path: PathBuf,
    /// The synthesized model or the reason it could not be built
    pub result: Result<ProjectModel, ModelError>,
}

/// Summary of a scan.
#[derive(Debug, Default)]
pub struct ScanReport {
    pub entries: Vec<ScanEntry>,
}

impl ScanReport {
    /// Number of projects that synthesized successfully.
    pub fn succeeded(&self) -> usize {
        self.entries.iter().filter(|e| e.result.is_ok()).count()
    }

    /// Number of projects that failed.
    pub fn failed(&self) -> usize {
        self.entries.len() - self.succeeded()
    }

    /// Entry for a project directory, relative to the scan root.
    pub fn entry(&self, path: impl AsRef<Path>) -> Option<&ScanEntry> {
        self.entries.iter().find(|e| e.path == path.as_ref())
    }
}

/// Walk `opts.root` and synthesize every directory holding a descriptor.
pub fn scan(opts: &ScanOptions, config: &Config) -> ScanReport {
    let synthesizer = synthesizer_for(config).with_parent_cache();
    let mut report = ScanReport::default();

    let walker = WalkDir::new(&opts.root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_skipped(entry, config));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("skipping unreadable entry: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_dir() || DescriptorKind::probe(entry.path()).is_none() {
            continue;
        }

        tracing::debug!("scanning {}", entry.path().display());
        report.entries.push(ScanEntry {
            path: relative_path(&opts.root, entry.path()),
            result: synthesizer.synthesize(entry.path()),
        });
    }

    report
}

fn is_skipped(entry: &walkdir::DirEntry, config: &Config) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || name == "META-INF" || config.skips_dir(&name)
}

/// Format a scan report for terminal output.
pub fn format_report(report: &ScanReport) -> String {
    let mut out = String::new();

    for entry in &report.entries {
        let path = if entry.path.as_os_str().is_empty() {
            ".".to_string()
        } else {
            entry.path.display().to_string()
        };
        match &entry.result {
            Ok(model) => {
                let _ = writeln!(
                    out,
                    "  ok    {}  {} {} ({})",
                    path,
                    model.artifact_id,
                    model.version.as_deref().unwrap_or("-"),
                    model.packaging
                );
            }
            Err(e) => {
                let _ = writeln!(out, "  error {}  {}", path, e);
            }
        }
    }

    let _ = writeln!(
        out,
        "\n{} project(s), {} ok, {} failed",
        report.entries.len(),
        report.succeeded(),
        report.failed()
    );
    out
}
