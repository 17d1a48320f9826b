//! `deftype path` – show which default_type file lookups read.

use anyhow::{Context, Result};
use deftype_core::config::DeftypeConfig;
use deftype_core::DefaultTypePath;

pub fn run_path(cfg: &DeftypeConfig) -> Result<()> {
    let path = cfg
        .default_type_path()
        .context("cannot determine default_type path")?;
    println!("{}", path.display());
    Ok(())
}
