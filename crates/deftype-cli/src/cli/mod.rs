//! CLI for deftype.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use deftype_core::config;
use std::path::PathBuf;

use commands::{run_lookup, run_path};

/// Top-level CLI for deftype.
#[derive(Debug, Parser)]
#[command(name = "deftype")]
#[command(about = "deftype: look up the default SELinux type for a role", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the default type for a role.
    Lookup {
        /// SELinux role, e.g. `staff_r`.
        role: String,

        /// Read this default_type file instead of the policy's.
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,
    },

    /// Print the path of the policy's default_type file.
    Path,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Lookup { role, file } => run_lookup(&cfg, &role, file.as_deref())?,
            CliCommand::Path => run_path(&cfg)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
