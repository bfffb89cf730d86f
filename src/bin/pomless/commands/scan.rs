//! `pomless scan` command

use anyhow::Result;

use crate::cli::ScanArgs;
use pomless::ops::{format_report, scan, ScanOptions};
use pomless::util::diagnostic::suggestions;
use pomless::Config;

use super::{ensure_dir, target_dir};

pub fn execute(args: ScanArgs) -> Result<()> {
    let root = target_dir(args.path)?;
    ensure_dir(&root)?;

    let config = Config::for_project(&root);
    let report = scan(&ScanOptions { root: root.clone() }, &config);

    if report.entries.is_empty() {
        anyhow::bail!(
            "no projects found below {}\nhelp: {}",
            root.display(),
            suggestions::NO_PROJECTS
        );
    }

    print!("{}", format_report(&report));

    if report.failed() > 0 {
        anyhow::bail!("{} project(s) failed", report.failed());
    }

    Ok(())
}
