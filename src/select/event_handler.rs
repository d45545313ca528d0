//! Keyboard handling for the branch prompt.

use crossterm::event::{KeyCode, KeyModifiers};

use super::state::SelectorState;

/// Result of handling a key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyEventResult {
    /// Keep prompting.
    Continue,
    /// User confirmed the highlighted branch.
    Submit(String),
    /// User aborted the prompt.
    Cancel,
}

/// Apply a key press to the selector state.
pub fn handle_key_event(
    code: KeyCode,
    modifiers: KeyModifiers,
    state: &mut SelectorState,
) -> KeyEventResult {
    let ctrl = modifiers.contains(KeyModifiers::CONTROL);

    match code {
        KeyCode::Esc => KeyEventResult::Cancel,
        KeyCode::Char('c') | KeyCode::Char('d') if ctrl => KeyEventResult::Cancel,

        KeyCode::Enter => match state.selected() {
            Some(name) => KeyEventResult::Submit(name.to_string()),
            None => KeyEventResult::Continue,
        },

        KeyCode::Up => {
            state.move_up();
            KeyEventResult::Continue
        }
        KeyCode::Char('p') if ctrl => {
            state.move_up();
            KeyEventResult::Continue
        }
        KeyCode::Down | KeyCode::Tab => {
            state.move_down();
            KeyEventResult::Continue
        }
        KeyCode::Char('n') if ctrl => {
            state.move_down();
            KeyEventResult::Continue
        }
        KeyCode::PageUp => {
            state.page_up();
            KeyEventResult::Continue
        }
        KeyCode::PageDown => {
            state.page_down();
            KeyEventResult::Continue
        }
        KeyCode::Home => {
            state.first();
            KeyEventResult::Continue
        }
        KeyCode::End => {
            state.last();
            KeyEventResult::Continue
        }

        KeyCode::Char('u') if ctrl => {
            state.clear_query();
            KeyEventResult::Continue
        }
        KeyCode::Backspace => {
            state.pop_char();
            KeyEventResult::Continue
        }
        KeyCode::Char(c) if !ctrl && !modifiers.contains(KeyModifiers::ALT) => {
            state.push_char(c);
            KeyEventResult::Continue
        }

        _ => KeyEventResult::Continue,
    }
}
