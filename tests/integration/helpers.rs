//! Shared fixtures: temporary repositories, a scripted runner and a
//! scripted selector.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use std::path::Path;
use std::process::Command;

use anyhow::{bail, Context, Result};
use crossterm::event::{KeyCode, KeyModifiers};
use gitcheckout::error::{ExecutionError, InteractionError};
use gitcheckout::git::{BranchListing, CommandRunner};
use gitcheckout::select::event_handler::{handle_key_event, KeyEventResult};
use gitcheckout::select::{BranchSelector, SelectorState, DEFAULT_PAGE_SIZE};
use tempfile::TempDir;

/// Run git in `dir`, failing on nonzero exit. Returns trimmed stdout.
pub fn git(dir: &Path, args: &[&str]) -> Result<String> {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .env("GIT_CEILING_DIRECTORIES", dir.parent().unwrap_or(dir))
        .output()
        .with_context(|| format!("Failed to run git {}", args.join(" ")))?;

    if !output.status.success() {
        bail!(
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        );
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Creates a temporary git repository on `main` with one commit.
///
/// Returns a TempDir that must be kept in scope for the lifetime of the test
pub fn create_temp_git_repo() -> Result<TempDir> {
    let temp = TempDir::new().context("Failed to create temp directory")?;
    let dir = temp.path();

    git(dir, &["init", "-q"])?;
    git(dir, &["symbolic-ref", "HEAD", "refs/heads/main"])?;
    git(dir, &["config", "user.email", "test@test.com"])?;
    git(dir, &["config", "user.name", "Test User"])?;
    git(dir, &["config", "commit.gpgsign", "false"])?;

    std::fs::write(dir.join("README.md"), "# Test Repository\n")
        .context("Failed to write README.md")?;
    git(dir, &["add", "."])?;
    git(dir, &["commit", "-q", "-m", "Initial commit"])?;

    Ok(temp)
}

/// Create `name` at HEAD without switching to it.
pub fn create_branch(dir: &Path, name: &str) -> Result<()> {
    git(dir, &["branch", name])?;
    Ok(())
}

pub fn current_branch(dir: &Path) -> Result<String> {
    git(dir, &["rev-parse", "--abbrev-ref", "HEAD"])
}

/// A [`CommandRunner`] that replays canned responses and records calls.
#[derive(Default)]
pub struct ScriptedRunner {
    responses: RefCell<VecDeque<Result<String, ExecutionError>>>,
    calls: RefCell<Vec<(Vec<String>, bool)>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then_output(self, stdout: &str) -> Self {
        self.responses.borrow_mut().push_back(Ok(stdout.to_string()));
        self
    }

    pub fn then_fail(self, command: &str) -> Self {
        self.responses
            .borrow_mut()
            .push_back(Err(ExecutionError::Launch {
                command: command.to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "scripted failure"),
            }));
        self
    }

    /// Every call made so far as (args, stream).
    pub fn calls(&self) -> Vec<(Vec<String>, bool)> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, args: &[&str], stream: bool) -> Result<String, ExecutionError> {
        self.calls
            .borrow_mut()
            .push((args.iter().map(|a| a.to_string()).collect(), stream));
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(String::new()))
    }
}

/// A [`BranchSelector`] that feeds a fixed key sequence through the real
/// selector state machine.
pub struct ScriptedSelector {
    keys: Vec<(KeyCode, KeyModifiers)>,
    pub seen: Option<BranchListing>,
}

impl ScriptedSelector {
    pub fn new(keys: &[KeyCode]) -> Self {
        Self {
            keys: keys.iter().map(|&k| (k, KeyModifiers::NONE)).collect(),
            seen: None,
        }
    }

    /// Type `text` and press Enter.
    pub fn typing(text: &str) -> Self {
        let mut keys: Vec<KeyCode> = text.chars().map(KeyCode::Char).collect();
        keys.push(KeyCode::Enter);
        Self::new(&keys)
    }
}

impl BranchSelector for ScriptedSelector {
    fn select(&mut self, listing: &BranchListing) -> Result<String, InteractionError> {
        self.seen = Some(listing.clone());
        if listing.is_empty() {
            return Err(InteractionError::Empty);
        }

        let mut state = SelectorState::new(listing, DEFAULT_PAGE_SIZE);
        for &(code, modifiers) in &self.keys {
            match handle_key_event(code, modifiers, &mut state) {
                KeyEventResult::Continue => {}
                KeyEventResult::Submit(name) => return Ok(name),
                KeyEventResult::Cancel => return Err(InteractionError::Cancelled),
            }
        }
        Err(InteractionError::Cancelled)
    }
}
