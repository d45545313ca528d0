//! Error types for the list → select → checkout pipeline.
//!
//! Every failure is fatal: errors propagate unchanged to `main`, which prints
//! them once and exits with status 1.

use std::io;
use std::process::ExitStatus;

use thiserror::Error;

/// A git subprocess could not be started or exited unsuccessfully.
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("could not launch `{command}`: {source}")]
    Launch {
        command: String,
        #[source]
        source: io::Error,
    },
    #[error("`{command}` failed with {status}{}", stderr_suffix(.stderr))]
    Failed {
        command: String,
        status: ExitStatus,
        /// Captured stderr, empty when it was streamed to the terminal.
        stderr: String,
    },
    #[error("i/o error while running `{command}`: {source}")]
    Io {
        command: String,
        #[source]
        source: io::Error,
    },
}

fn stderr_suffix(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {stderr}")
    }
}

/// The interactive prompt failed or was aborted.
#[derive(Error, Debug)]
pub enum InteractionError {
    #[error("selection cancelled")]
    Cancelled,
    #[error("interactive selection requires a terminal")]
    NotATerminal,
    #[error("no branches to choose from")]
    Empty,
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Execution(#[from] ExecutionError),
    #[error(transparent)]
    Interaction(#[from] InteractionError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
