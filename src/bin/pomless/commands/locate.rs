//! `pomless locate` command

use anyhow::Result;

use crate::cli::LocateArgs;
use pomless::ops::locate;

use super::{ensure_dir, target_dir};

pub fn execute(args: LocateArgs) -> Result<()> {
    let path = target_dir(args.path)?;
    ensure_dir(&path)?;

    let located = locate(&path);
    print!("{}", located.describe());

    if located.descriptor.is_none() && located.build_project.is_none() {
        anyhow::bail!("no descriptor found in {}", path.display());
    }

    Ok(())
}
