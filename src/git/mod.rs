//! Git plumbing: running the `git` executable, listing branches, checking
//! one out.

pub mod branch;
pub mod checkout;
pub mod runner;

pub use branch::{list_branches, normalize, BranchListing};
pub use checkout::checkout_branch;
pub use runner::{CommandRunner, GitRunner};
