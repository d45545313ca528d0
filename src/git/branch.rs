//! Branch listing and normalization of `git branch` output

use tracing::debug;

use super::runner::CommandRunner;
use crate::error::ExecutionError;

/// Prefix git puts in front of remote-tracking branches of `origin` with `-a`.
pub const REMOTE_ORIGIN_PREFIX: &str = "remotes/origin/";

/// Marker git puts in front of the checked-out branch.
pub const ACTIVE_MARKER: char = '*';

/// Branch names in most-recently-committed order, with the checked-out one
/// marked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchListing {
    names: Vec<String>,
    active_index: usize,
}

impl BranchListing {
    /// Build a listing from unique names. An out-of-range `active_index`
    /// falls back to the first entry.
    pub fn new(names: Vec<String>, active_index: usize) -> Self {
        let active_index = if active_index < names.len() {
            active_index
        } else {
            0
        };
        Self {
            names,
            active_index,
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Position of the checked-out branch; 0 when none was marked.
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn active_name(&self) -> Option<&str> {
        self.names.get(self.active_index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// True if the line carries the active-branch marker after optional
/// leading whitespace.
pub fn is_active_line(line: &str) -> bool {
    line.trim_start().starts_with(ACTIVE_MARKER)
}

/// Reduce one listing line to a bare branch name.
///
/// Strips either the active marker or the `remotes/origin/` prefix, whichever
/// leads the line, but never both.
pub fn strip_branch_decoration(line: &str) -> &str {
    let rest = line.trim_start();
    let rest = match rest.strip_prefix(ACTIVE_MARKER) {
        Some(unmarked) => unmarked,
        None => rest.strip_prefix(REMOTE_ORIGIN_PREFIX).unwrap_or(rest),
    };
    rest.trim()
}

/// Turn raw `git branch` output into a [`BranchListing`].
///
/// Names are deduplicated keeping the first occurrence, so a remote-tracking
/// copy of a local branch collapses into the local entry. The active index
/// is resolved against the deduplicated names.
pub fn normalize(raw: &str) -> BranchListing {
    let blob = raw.trim().replace('\r', "");
    if blob.is_empty() {
        return BranchListing::default();
    }

    let mut names: Vec<String> = Vec::new();
    let mut active_index = None;

    for line in blob.split('\n') {
        let name = strip_branch_decoration(line);
        let position = match names.iter().position(|existing| existing == name) {
            Some(position) => position,
            None => {
                names.push(name.to_string());
                names.len() - 1
            }
        };

        if is_active_line(line) {
            active_index = Some(position);
        }
    }

    BranchListing::new(names, active_index.unwrap_or(0))
}

/// List branches sorted by most recent commit, optionally including
/// remote-tracking branches.
pub fn list_branches<R: CommandRunner + ?Sized>(
    runner: &R,
    include_remotes: bool,
) -> Result<BranchListing, ExecutionError> {
    let mut args = vec!["branch", "--sort=-committerdate"];
    if include_remotes {
        args.push("-a");
    }

    let stdout = runner.run(&args, false)?;
    let listing = normalize(&stdout);
    debug!(
        count = listing.len(),
        active = listing.active_name().unwrap_or_default(),
        "listed branches"
    );
    Ok(listing)
}
