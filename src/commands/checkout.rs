//! The checkout command: list branches, let the user pick one, check it out.
//! Usage: gitcheckout [-o]

use tracing::{debug, info};

use crate::config::Config;
use crate::error::Result;
use crate::git::{checkout_branch, list_branches, CommandRunner, GitRunner};
use crate::select::{BranchSelector, TerminalSelector};

/// Options for a single run of the pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckoutOptions {
    pub include_remotes: bool,
}

/// Run list → select → checkout in order, returning the branch checked out.
///
/// Stops at the first failure; nothing after a failed step runs.
pub fn run_with<R, S>(runner: &R, selector: &mut S, options: CheckoutOptions) -> Result<String>
where
    R: CommandRunner + ?Sized,
    S: BranchSelector + ?Sized,
{
    debug!(include_remotes = options.include_remotes, "listing branches");
    let listing = list_branches(runner, options.include_remotes)?;

    let branch = selector.select(&listing)?;

    checkout_branch(runner, &branch)?;
    info!(%branch, "checked out");
    Ok(branch)
}

/// Run the pipeline against the real git executable and terminal.
pub fn execute(config: &Config) -> Result<String> {
    let runner = GitRunner::new(&config.repo_root);
    let mut selector = TerminalSelector::new(config.page_size);
    let options = CheckoutOptions {
        include_remotes: config.include_remotes,
    };

    run_with(&runner, &mut selector, options)
}
