//! Command-line arguments.

use clap::Parser;
use std::path::PathBuf;

const ABOUT: &str = "Select a branch using the keyboard arrows, hit Enter, and watch the magic \
                     as it happens.\nThe current checked out branch is the default selection.";

/// Accepted values for `--page-size`.
pub const PAGE_SIZE_RANGE: std::ops::RangeInclusive<i64> = 1..=100;

#[derive(Parser, Debug)]
#[command(name = "gitcheckout")]
#[command(about = ABOUT, long_about = None)]
#[command(version)]
pub struct Cli {
    /// Include remote branches in branches list
    #[arg(short = 'o', long = "origin")]
    pub include_remotes: bool,

    /// Run as if started in <PATH> instead of the current directory
    #[arg(short = 'C', value_name = "PATH")]
    pub repo: Option<PathBuf>,

    /// Number of branches shown at once
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u16).range(PAGE_SIZE_RANGE))]
    pub page_size: u16,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
