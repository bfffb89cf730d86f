//! `pomless show` command

use anyhow::Result;

use crate::cli::ShowArgs;
use pomless::ops::{show, ShowOptions};
use pomless::Config;

use super::{ensure_dir, target_dir};

pub fn execute(args: ShowArgs) -> Result<()> {
    let path = target_dir(args.path)?;
    ensure_dir(&path)?;

    let config = Config::for_project(&path);
    let opts = ShowOptions {
        path,
        format: args.format.map(Into::into),
    };

    let rendered = show(&opts, &config)?;
    print!("{}", rendered);
    if !rendered.ends_with('\n') {
        println!();
    }

    Ok(())
}
