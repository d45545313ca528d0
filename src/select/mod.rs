//! Interactive branch selection.
//!
//! The prompt is a single line holding the typed query, followed by at most
//! one page of matching branches. The list is re-filtered from scratch on
//! every keystroke and the cursor starts on the checked-out branch.

mod app;
pub mod event_handler;
pub mod filter;
pub mod renderer;
pub mod state;

pub use app::TerminalSelector;
pub use filter::{filter_branches, filter_indices};
pub use state::SelectorState;

use crate::error::InteractionError;
use crate::git::BranchListing;

/// Rows of branches shown at once unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Question shown on the prompt line.
pub const PROMPT_MESSAGE: &str = "Select branch to checkout:";

/// Asks the user to pick one branch out of a listing.
pub trait BranchSelector {
    fn select(&mut self, listing: &BranchListing) -> Result<String, InteractionError>;
}

impl<S: BranchSelector + ?Sized> BranchSelector for &mut S {
    fn select(&mut self, listing: &BranchListing) -> Result<String, InteractionError> {
        (**self).select(listing)
    }
}
