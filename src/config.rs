//! Resolved run configuration.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::cli::Cli;
use crate::select::DEFAULT_PAGE_SIZE;

/// Everything one run needs, resolved from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory git runs in.
    pub repo_root: PathBuf,
    /// List remote-tracking branches as well as local ones.
    pub include_remotes: bool,
    /// Branches shown at once in the prompt.
    pub page_size: usize,
    /// Log verbosity from repeated `-v`.
    pub verbosity: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repo_root: PathBuf::from("."),
            include_remotes: false,
            page_size: DEFAULT_PAGE_SIZE,
            verbosity: 0,
        }
    }
}

impl Config {
    /// Resolve the command line. Without `-C`, git runs in the current
    /// directory.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let repo_root = match &cli.repo {
            Some(path) => path.clone(),
            None => std::env::current_dir().context("Failed to determine current directory")?,
        };

        if !repo_root.is_dir() {
            anyhow::bail!("{} is not a directory", repo_root.display());
        }

        Ok(Self {
            repo_root,
            include_remotes: cli.include_remotes,
            page_size: usize::from(cli.page_size),
            verbosity: cli.verbose,
        })
    }
}
