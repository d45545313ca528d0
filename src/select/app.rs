//! Terminal-backed selector and its event loop.

use std::io::{self, IsTerminal, Stdout};

use colored::Colorize;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, Terminal, TerminalOptions, Viewport};
use tracing::debug;

use super::event_handler::{handle_key_event, KeyEventResult};
use super::renderer::{render_prompt, viewport_height};
use super::state::SelectorState;
use super::{BranchSelector, DEFAULT_PAGE_SIZE, PROMPT_MESSAGE};
use crate::error::InteractionError;
use crate::git::BranchListing;

/// Prompts on the controlling terminal, drawing inline below the cursor.
#[derive(Debug, Clone)]
pub struct TerminalSelector {
    message: String,
    page_size: usize,
}

impl Default for TerminalSelector {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl TerminalSelector {
    pub fn new(page_size: usize) -> Self {
        Self {
            message: PROMPT_MESSAGE.to_string(),
            page_size: page_size.max(1),
        }
    }
}

impl BranchSelector for TerminalSelector {
    fn select(&mut self, listing: &BranchListing) -> Result<String, InteractionError> {
        if listing.is_empty() {
            return Err(InteractionError::Empty);
        }
        if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
            return Err(InteractionError::NotATerminal);
        }

        let mut state = SelectorState::new(listing, self.page_size);
        let height = viewport_height(listing.len(), self.page_size);

        let outcome = {
            let mut session = PromptSession::start(height)?;
            session.run(&mut state, &self.message)
        };

        let name = outcome?;
        debug!(branch = %name, "branch selected");
        println!("{} {} {}", "?".green().bold(), self.message.bold(), name.cyan());
        Ok(name)
    }
}

/// Raw-mode terminal with an inline viewport. Restores the terminal when
/// dropped.
struct PromptSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    cleaned_up: bool,
}

impl PromptSession {
    fn start(height: u16) -> Result<Self, InteractionError> {
        enable_raw_mode()?;
        crate::utils::install_terminal_panic_hook();

        let backend = CrosstermBackend::new(io::stdout());
        let terminal = match Terminal::with_options(
            backend,
            TerminalOptions {
                viewport: Viewport::Inline(height),
            },
        ) {
            Ok(terminal) => terminal,
            Err(e) => {
                crate::utils::restore_terminal();
                return Err(e.into());
            }
        };

        Ok(Self {
            terminal,
            cleaned_up: false,
        })
    }

    /// Draw and handle keys until the user submits or cancels.
    fn run(&mut self, state: &mut SelectorState, message: &str) -> Result<String, InteractionError> {
        loop {
            self.terminal
                .draw(|frame| render_prompt(frame, frame.area(), state, message))?;

            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match handle_key_event(key.code, key.modifiers, state) {
                KeyEventResult::Continue => {}
                KeyEventResult::Submit(name) => return Ok(name),
                KeyEventResult::Cancel => return Err(InteractionError::Cancelled),
            }
        }
    }

    /// Wipe the prompt and leave raw mode. Runs once.
    fn cleanup(&mut self) {
        if self.cleaned_up {
            return;
        }
        self.cleaned_up = true;

        let _ = self.terminal.clear();
        let _ = self.terminal.show_cursor();
        crate::utils::restore_terminal();
    }
}

impl Drop for PromptSession {
    fn drop(&mut self) {
        self.cleanup();
    }
}
