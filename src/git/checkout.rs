//! Switching the working copy to a selected branch

use tracing::info;

use super::runner::CommandRunner;
use crate::error::ExecutionError;

/// Check out `branch`, streaming git's progress and errors to the terminal.
pub fn checkout_branch<R: CommandRunner + ?Sized>(
    runner: &R,
    branch: &str,
) -> Result<(), ExecutionError> {
    info!(branch, "checking out");
    runner.run(&["checkout", branch], true)?;
    Ok(())
}
